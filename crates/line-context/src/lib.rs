//! line-context: LINE conversation context
//!
//! LINE Messaging API の返信・プッシュをハンドラーから扱うための
//! イベントごとのコンテキストと、API クライアントを提供します。

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod types;

pub use api::LineApiClient;
pub use client::LineClient;
pub use config::LineConfig;
pub use context::{LineContext, PLATFORM};
pub use error::{LineError, Result};
pub use session::{LineSession, LineUser};
pub use types::{LineEvent, MessageContent, SendResponse};
