//! LINE Messaging API types

use serde::{Deserialize, Serialize};

/// LINE user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineProfile {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "pictureUrl", default)]
    pub picture_url: Option<String>,
    #[serde(rename = "statusMessage", default)]
    pub status_message: Option<String>,
}

/// LINE message event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// LINE source (user, group, or room)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<String>,
    #[serde(rename = "roomId", default)]
    pub room_id: Option<String>,
}

/// LINE event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "replyToken", default)]
    pub reply_token: Option<String>,
    pub timestamp: i64,
    pub source: LineSource,
    #[serde(default)]
    pub message: Option<LineMessage>,
}

impl LineEvent {
    /// One-time token used by the reply API
    pub fn reply_token(&self) -> Option<&str> {
        self.reply_token.as_deref()
    }

    /// Id of the user who triggered the event, if LINE disclosed one
    pub fn user_id(&self) -> Option<&str> {
        self.source.user_id.as_deref()
    }

    pub fn is_message(&self) -> bool {
        self.event_type == "message" && self.message.is_some()
    }

    pub fn is_text(&self) -> bool {
        self.message
            .as_ref()
            .is_some_and(|m| m.message_type == "text")
    }

    /// Text of a text message event
    pub fn text(&self) -> Option<&str> {
        if !self.is_text() {
            return None;
        }
        self.message.as_ref().and_then(|m| m.text.as_deref())
    }
}

/// Reply message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyMessage {
    #[serde(rename = "replyToken")]
    pub reply_token: String,
    pub messages: Vec<MessageContent>,
}

/// Push message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    pub to: String,
    pub messages: Vec<MessageContent>,
}

/// Message content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum MessageContent {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
    Video {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
    Audio {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        /// Length of the audio in milliseconds
        duration: u64,
    },
    Location(Location),
    Sticker {
        #[serde(rename = "packageId")]
        package_id: String,
        #[serde(rename = "stickerId")]
        sticker_id: String,
    },
    Imagemap {
        #[serde(rename = "altText")]
        alt_text: String,
        #[serde(flatten)]
        imagemap: Imagemap,
    },
    Template {
        #[serde(rename = "altText")]
        alt_text: String,
        template: Template,
    },
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(original_content_url: impl Into<String>, preview_image_url: impl Into<String>) -> Self {
        Self::Image {
            original_content_url: original_content_url.into(),
            preview_image_url: preview_image_url.into(),
        }
    }

    pub fn video(original_content_url: impl Into<String>, preview_image_url: impl Into<String>) -> Self {
        Self::Video {
            original_content_url: original_content_url.into(),
            preview_image_url: preview_image_url.into(),
        }
    }

    pub fn audio(original_content_url: impl Into<String>, duration: u64) -> Self {
        Self::Audio {
            original_content_url: original_content_url.into(),
            duration,
        }
    }

    pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
        Self::Sticker {
            package_id: package_id.into(),
            sticker_id: sticker_id.into(),
        }
    }

    pub fn imagemap(alt_text: impl Into<String>, imagemap: Imagemap) -> Self {
        Self::Imagemap {
            alt_text: alt_text.into(),
            imagemap,
        }
    }

    pub fn template(alt_text: impl Into<String>, template: Template) -> Self {
        Self::Template {
            alt_text: alt_text.into(),
            template,
        }
    }
}

/// Location message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Imagemap message body (without alt text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imagemap {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "baseSize")]
    pub base_size: ImagemapBaseSize,
    pub actions: Vec<ImagemapAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagemapBaseSize {
    pub width: u32,
    pub height: u32,
}

/// Tappable region of an imagemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagemapArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum ImagemapAction {
    Uri {
        #[serde(rename = "linkUri")]
        link_uri: String,
        area: ImagemapArea,
    },
    Message {
        text: String,
        area: ImagemapArea,
    },
}

/// Template action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Postback {
        label: String,
        data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Message {
        label: String,
        text: String,
    },
    Uri {
        label: String,
        uri: String,
    },
}

/// Template body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Template {
    #[serde(rename = "buttons")]
    Buttons(ButtonTemplate),
    #[serde(rename = "confirm")]
    Confirm(ConfirmTemplate),
    #[serde(rename = "carousel")]
    Carousel { columns: Vec<CarouselColumn> },
    #[serde(rename = "image_carousel")]
    ImageCarousel { columns: Vec<ImageCarouselColumn> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonTemplate {
    #[serde(rename = "thumbnailImageUrl", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmTemplate {
    pub text: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselColumn {
    #[serde(rename = "thumbnailImageUrl", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCarouselColumn {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub action: Action,
}

/// Acknowledgment returned by the reply and push APIs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendResponse {
    /// Value of the `x-line-request-id` response header
    pub request_id: Option<String>,
}
