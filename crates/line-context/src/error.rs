//! エラー型定義 (line-context)

use thiserror::Error;

/// line-context のエラー型
#[derive(Error, Debug)]
pub enum LineError {
    #[error("LINE API error: {0}")]
    ApiError(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Channel access token not configured")]
    AccessTokenNotConfigured,

    #[error("Configuration error: {0}")]
    Config(String),

    /// The reply token of an event is single-use; replying twice is a bug in the handler.
    #[error("Can not reply event multiple times")]
    AlreadyReplied,

    #[error("Event has no reply token")]
    MissingReplyToken,
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, LineError>;
