//! Conversation context for LINE handlers
//!
//! A [`LineContext`] is built for every incoming event and handed to the
//! bot's handler. It offers three families of helpers per message kind:
//!
//! - `reply_*` answers through the event's reply token. The token is
//!   single-use, so a context replies at most once.
//! - `push_*` / `send_*` push to the session's user. Without a session
//!   they log a warning and do nothing.
//! - `send_*_with_delay` are deprecated variants of `send_*` taking an
//!   explicit delay.
//!
//! Every helper waits for the message delay before calling the client to
//! mimic a human typing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::client::LineClient;
use crate::config::{LineConfig, DEFAULT_MESSAGE_DELAY_MS};
use crate::error::{LineError, Result};
use crate::session::LineSession;
use crate::types::{
    ButtonTemplate, CarouselColumn, ConfirmTemplate, ImageCarouselColumn, Imagemap, LineEvent, Location,
    SendResponse,
};

/// Name of the platform
pub const PLATFORM: &str = "line";

/// Per-event conversation context
pub struct LineContext {
    client: Arc<dyn LineClient>,
    event: LineEvent,
    session: Option<LineSession>,
    message_delay: Duration,
    replied: AtomicBool,
}

impl LineContext {
    /// Create a context with the default message delay
    pub fn new(client: Arc<dyn LineClient>, event: LineEvent, session: Option<LineSession>) -> Self {
        Self {
            client,
            event,
            session,
            message_delay: Duration::from_millis(DEFAULT_MESSAGE_DELAY_MS),
            replied: AtomicBool::new(false),
        }
    }

    /// Create a context using the configured message delay
    pub fn with_config(
        client: Arc<dyn LineClient>,
        event: LineEvent,
        session: Option<LineSession>,
        config: &LineConfig,
    ) -> Self {
        let mut context = Self::new(client, event, session);
        context.set_message_delay(config.message_delay());
        context
    }

    pub fn platform(&self) -> &'static str {
        PLATFORM
    }

    /// Whether the reply token has already been used
    pub fn replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> &Arc<dyn LineClient> {
        &self.client
    }

    pub fn event(&self) -> &LineEvent {
        &self.event
    }

    pub fn session(&self) -> Option<&LineSession> {
        self.session.as_ref()
    }

    pub fn message_delay(&self) -> Duration {
        self.message_delay
    }

    pub fn set_message_delay(&mut self, delay: Duration) {
        self.message_delay = delay;
    }

    /// Delay for the given duration.
    ///
    /// LINE has no typing indicator API, so the elapsed time is the only effect.
    pub async fn typing(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Send text to the owner of the session
    pub async fn send_text(&self, text: &str) -> Result<Option<SendResponse>> {
        let Some(to) = self.recipient("send_text") else {
            return Ok(None);
        };

        self.typing(self.message_delay).await;
        self.client.push_text(to, text).await.map(Some)
    }

    pub async fn send_text_with_delay(&self, delay: Duration, text: &str) -> Result<Option<SendResponse>> {
        let Some(to) = self.recipient("send_text_with_delay") else {
            return Ok(None);
        };

        self.typing(delay).await;
        self.client.push_text(to, text).await.map(Some)
    }

    /// Claim the reply token. Fails if it was already used.
    fn take_reply_token(&self) -> Result<&str> {
        let reply_token = self.event.reply_token().ok_or(LineError::MissingReplyToken)?;

        if self.replied.swap(true, Ordering::SeqCst) {
            error!("Can not reply event multiple times");
            return Err(LineError::AlreadyReplied);
        }

        Ok(reply_token)
    }

    /// Push recipient, or `None` (with a warning) when there is no session
    fn recipient(&self, method: &str) -> Option<&str> {
        match &self.session {
            Some(session) => Some(session.user_id()),
            None => {
                warn!("{}: should not be called in context without session", method);
                None
            }
        }
    }
}

macro_rules! reply_and_push {
    ($($reply:ident, $push:ident ($($arg:ident: $ty:ty),*);)*) => {
        impl LineContext {
            $(
                #[doc = concat!("Reply to the event with `LineClient::", stringify!($reply), "`")]
                pub async fn $reply(&self, $($arg: $ty),*) -> Result<SendResponse> {
                    let reply_token = self.take_reply_token()?;
                    debug!("{}: replying after {:?}", stringify!($reply), self.message_delay);

                    self.typing(self.message_delay).await;
                    self.client.$reply(reply_token, $($arg),*).await
                }

                #[doc = concat!("Push to the session's user with `LineClient::", stringify!($push), "`")]
                pub async fn $push(&self, $($arg: $ty),*) -> Result<Option<SendResponse>> {
                    let Some(to) = self.recipient(stringify!($push)) else {
                        return Ok(None);
                    };

                    self.typing(self.message_delay).await;
                    self.client.$push(to, $($arg),*).await.map(Some)
                }
            )*
        }
    };
}

macro_rules! send_aliases {
    ($($send:ident, $send_with_delay:ident => $push:ident ($($arg:ident: $ty:ty),*);)*) => {
        impl LineContext {
            $(
                #[doc = concat!("Same as `", stringify!($push), "`")]
                pub async fn $send(&self, $($arg: $ty),*) -> Result<Option<SendResponse>> {
                    let Some(to) = self.recipient(stringify!($send)) else {
                        return Ok(None);
                    };

                    self.typing(self.message_delay).await;
                    self.client.$push(to, $($arg),*).await.map(Some)
                }

                #[deprecated(note = "use `set_message_delay` and the `send_*` method without delay")]
                pub async fn $send_with_delay(&self, delay: Duration, $($arg: $ty),*) -> Result<Option<SendResponse>> {
                    warn!("{} is deprecated.", stringify!($send_with_delay));

                    let Some(to) = self.recipient(stringify!($send_with_delay)) else {
                        return Ok(None);
                    };

                    self.typing(delay).await;
                    self.client.$push(to, $($arg),*).await.map(Some)
                }
            )*
        }
    };
}

reply_and_push! {
    reply_text, push_text(text: &str);
    reply_image, push_image(original_content_url: &str, preview_image_url: &str);
    reply_video, push_video(original_content_url: &str, preview_image_url: &str);
    reply_audio, push_audio(original_content_url: &str, duration: u64);
    reply_location, push_location(location: Location);
    reply_sticker, push_sticker(package_id: &str, sticker_id: &str);
    reply_imagemap, push_imagemap(alt_text: &str, imagemap: Imagemap);
    reply_button_template, push_button_template(alt_text: &str, template: ButtonTemplate);
    reply_confirm_template, push_confirm_template(alt_text: &str, template: ConfirmTemplate);
    reply_carousel_template, push_carousel_template(alt_text: &str, columns: Vec<CarouselColumn>);
    reply_image_carousel_template, push_image_carousel_template(alt_text: &str, columns: Vec<ImageCarouselColumn>);
}

send_aliases! {
    send_image, send_image_with_delay => push_image(original_content_url: &str, preview_image_url: &str);
    send_video, send_video_with_delay => push_video(original_content_url: &str, preview_image_url: &str);
    send_audio, send_audio_with_delay => push_audio(original_content_url: &str, duration: u64);
    send_location, send_location_with_delay => push_location(location: Location);
    send_sticker, send_sticker_with_delay => push_sticker(package_id: &str, sticker_id: &str);
    send_imagemap, send_imagemap_with_delay => push_imagemap(alt_text: &str, imagemap: Imagemap);
    send_button_template, send_button_template_with_delay => push_button_template(alt_text: &str, template: ButtonTemplate);
    send_confirm_template, send_confirm_template_with_delay => push_confirm_template(alt_text: &str, template: ConfirmTemplate);
    send_carousel_template, send_carousel_template_with_delay => push_carousel_template(alt_text: &str, columns: Vec<CarouselColumn>);
    send_image_carousel_template, send_image_carousel_template_with_delay => push_image_carousel_template(alt_text: &str, columns: Vec<ImageCarouselColumn>);
}
