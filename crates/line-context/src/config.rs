//! Configuration management
//!
//! 設定は以下の優先順位で読み込まれます:
//! 1. 環境変数
//! 2. line-context.toml 設定ファイル
//! 3. デフォルト値
//!
//! 設定ファイル内では `${VAR_NAME}` 形式で環境変数を展開できます。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::DEFAULT_BASE_URL;
use crate::error::{LineError, Result};

pub const CONFIG_FILE: &str = "line-context.toml";

/// Delay applied before every reply and push, in milliseconds
pub const DEFAULT_MESSAGE_DELAY_MS: u64 = 1000;

/// LINE adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Channel access token
    pub channel_access_token: String,

    /// Messaging API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Artificial typing delay before each message
    #[serde(default = "default_message_delay_ms")]
    pub message_delay_ms: u64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            channel_access_token: String::new(),
            base_url: default_base_url(),
            message_delay_ms: default_message_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_message_delay_ms() -> u64 {
    DEFAULT_MESSAGE_DELAY_MS
}

/// TOML ファイル用のトップレベル構造
#[derive(Debug, Deserialize)]
struct TomlConfig {
    line: Option<TomlLineConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlLineConfig {
    #[serde(default)]
    channel_access_token: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    message_delay_ms: Option<u64>,
}

impl LineConfig {
    /// デフォルトパスから設定を読み込む
    ///
    /// `.env` を読み込んだ後、`./line-context.toml` があればそれを使い、
    /// なければ環境変数のみから構築します。
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        if Path::new(CONFIG_FILE).exists() {
            return Self::from_toml_file(CONFIG_FILE);
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let channel_access_token = std::env::var("LINE_CHANNEL_ACCESS_TOKEN")
            .map_err(|_| LineError::Config("LINE_CHANNEL_ACCESS_TOKEN not set".to_string()))?;

        let mut config = Self {
            channel_access_token,
            ..Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// TOML 設定ファイルから設定を読み込む
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LineError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse the `[line]` table of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content);

        let toml_config: TomlConfig = toml::from_str(&expanded)
            .map_err(|e| LineError::Config(format!("Failed to parse TOML: {}", e)))?;

        let line = toml_config.line.unwrap_or_default();
        let mut config = Self {
            channel_access_token: line.channel_access_token.unwrap_or_default(),
            base_url: line.base_url.unwrap_or_else(default_base_url),
            message_delay_ms: line.message_delay_ms.unwrap_or_else(default_message_delay_ms),
        };

        // 環境変数が優先
        config.apply_env_overrides();

        if config.channel_access_token.is_empty() {
            return Err(LineError::AccessTokenNotConfigured);
        }

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("LINE_CHANNEL_ACCESS_TOKEN") {
            if !token.is_empty() {
                self.channel_access_token = token;
            }
        }
        if let Ok(base_url) = std::env::var("LINE_API_BASE_URL") {
            if !base_url.is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(delay) = std::env::var("LINE_MESSAGE_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.message_delay_ms = ms;
            }
        }
    }

    pub fn message_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.message_delay_ms)
    }
}

/// `${VAR_NAME}` を環境変数の値に置換する (未設定なら空文字列)
fn expand_env_vars(value: &str) -> String {
    let mut result = String::new();
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next();

            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }

            if let Ok(env_value) = std::env::var(&var_name) {
                result.push_str(&env_value);
            }
        } else {
            result.push(c);
        }
    }

    result
}
