//! Messaging client abstraction
//!
//! A [`LineClient`] only has to provide the two transport primitives.
//! The per-kind `reply_*` / `push_*` helpers build the message body and
//! forward to them.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ButtonTemplate, CarouselColumn, ConfirmTemplate, ImageCarouselColumn, Imagemap, Location,
    MessageContent, SendResponse, Template,
};

/// Client for the LINE Messaging API
#[async_trait]
pub trait LineClient: Send + Sync {
    /// Reply to an event using its one-time reply token
    async fn reply_message(&self, reply_token: &str, messages: Vec<MessageContent>) -> Result<SendResponse>;

    /// Push messages to a user, group or room
    async fn push_message(&self, to: &str, messages: Vec<MessageContent>) -> Result<SendResponse>;

    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<SendResponse> {
        self.reply_message(reply_token, vec![MessageContent::text(text)]).await
    }

    async fn push_text(&self, to: &str, text: &str) -> Result<SendResponse> {
        self.push_message(to, vec![MessageContent::text(text)]).await
    }

    async fn reply_image(
        &self,
        reply_token: &str,
        original_content_url: &str,
        preview_image_url: &str,
    ) -> Result<SendResponse> {
        let message = MessageContent::image(original_content_url, preview_image_url);
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_image(&self, to: &str, original_content_url: &str, preview_image_url: &str) -> Result<SendResponse> {
        let message = MessageContent::image(original_content_url, preview_image_url);
        self.push_message(to, vec![message]).await
    }

    async fn reply_video(
        &self,
        reply_token: &str,
        original_content_url: &str,
        preview_image_url: &str,
    ) -> Result<SendResponse> {
        let message = MessageContent::video(original_content_url, preview_image_url);
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_video(&self, to: &str, original_content_url: &str, preview_image_url: &str) -> Result<SendResponse> {
        let message = MessageContent::video(original_content_url, preview_image_url);
        self.push_message(to, vec![message]).await
    }

    /// `duration` is in milliseconds
    async fn reply_audio(&self, reply_token: &str, original_content_url: &str, duration: u64) -> Result<SendResponse> {
        let message = MessageContent::audio(original_content_url, duration);
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_audio(&self, to: &str, original_content_url: &str, duration: u64) -> Result<SendResponse> {
        let message = MessageContent::audio(original_content_url, duration);
        self.push_message(to, vec![message]).await
    }

    async fn reply_location(&self, reply_token: &str, location: Location) -> Result<SendResponse> {
        self.reply_message(reply_token, vec![MessageContent::Location(location)]).await
    }

    async fn push_location(&self, to: &str, location: Location) -> Result<SendResponse> {
        self.push_message(to, vec![MessageContent::Location(location)]).await
    }

    async fn reply_sticker(&self, reply_token: &str, package_id: &str, sticker_id: &str) -> Result<SendResponse> {
        let message = MessageContent::sticker(package_id, sticker_id);
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_sticker(&self, to: &str, package_id: &str, sticker_id: &str) -> Result<SendResponse> {
        let message = MessageContent::sticker(package_id, sticker_id);
        self.push_message(to, vec![message]).await
    }

    async fn reply_imagemap(&self, reply_token: &str, alt_text: &str, imagemap: Imagemap) -> Result<SendResponse> {
        let message = MessageContent::imagemap(alt_text, imagemap);
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_imagemap(&self, to: &str, alt_text: &str, imagemap: Imagemap) -> Result<SendResponse> {
        let message = MessageContent::imagemap(alt_text, imagemap);
        self.push_message(to, vec![message]).await
    }

    async fn reply_button_template(
        &self,
        reply_token: &str,
        alt_text: &str,
        template: ButtonTemplate,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Buttons(template));
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_button_template(&self, to: &str, alt_text: &str, template: ButtonTemplate) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Buttons(template));
        self.push_message(to, vec![message]).await
    }

    async fn reply_confirm_template(
        &self,
        reply_token: &str,
        alt_text: &str,
        template: ConfirmTemplate,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Confirm(template));
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_confirm_template(&self, to: &str, alt_text: &str, template: ConfirmTemplate) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Confirm(template));
        self.push_message(to, vec![message]).await
    }

    async fn reply_carousel_template(
        &self,
        reply_token: &str,
        alt_text: &str,
        columns: Vec<CarouselColumn>,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Carousel { columns });
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_carousel_template(
        &self,
        to: &str,
        alt_text: &str,
        columns: Vec<CarouselColumn>,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::Carousel { columns });
        self.push_message(to, vec![message]).await
    }

    async fn reply_image_carousel_template(
        &self,
        reply_token: &str,
        alt_text: &str,
        columns: Vec<ImageCarouselColumn>,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::ImageCarousel { columns });
        self.reply_message(reply_token, vec![message]).await
    }

    async fn push_image_carousel_template(
        &self,
        to: &str,
        alt_text: &str,
        columns: Vec<ImageCarouselColumn>,
    ) -> Result<SendResponse> {
        let message = MessageContent::template(alt_text, Template::ImageCarousel { columns });
        self.push_message(to, vec![message]).await
    }
}
