//! LINE Messaging API client
//!
//! Communicates with LINE Messaging API

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error, info};

use crate::client::LineClient;
use crate::config::LineConfig;
use crate::error::{LineError, Result};
use crate::types::*;

pub const DEFAULT_BASE_URL: &str = "https://api.line.me/v2";

/// LINE Messaging API client
#[derive(Clone)]
pub struct LineApiClient {
    client: Client,
    channel_access_token: String,
    base_url: String,
}

impl LineApiClient {
    /// Create a new LINE API client
    pub fn new(channel_access_token: &str) -> Result<Self> {
        if channel_access_token.is_empty() {
            return Err(LineError::AccessTokenNotConfigured);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(LineError::HttpError)?;

        Ok(Self {
            client,
            channel_access_token: channel_access_token.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &LineConfig) -> Result<Self> {
        Ok(Self::new(&config.channel_access_token)?.with_base_url(&config.base_url))
    }

    /// Point the client at another API endpoint
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add authorization header
    fn add_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.channel_access_token)
    }

    /// Get user profile
    pub async fn get_profile(&self, user_id: &str) -> Result<LineProfile> {
        let url = format!("{}/bot/profile/{}", self.base_url, user_id);

        debug!("Getting profile for user: {}", user_id);

        let response = self
            .add_auth(self.client.get(&url))
            .send()
            .await
            .map_err(LineError::HttpError)?;

        let response = check_status(response, "Get profile").await?;

        let profile: LineProfile = response
            .json()
            .await
            .map_err(|e| LineError::ParseError(e.to_string()))?;

        info!("Got profile for user: {}", profile.display_name);
        Ok(profile)
    }
}

#[async_trait]
impl LineClient for LineApiClient {
    async fn reply_message(&self, reply_token: &str, messages: Vec<MessageContent>) -> Result<SendResponse> {
        let url = format!("{}/bot/message/reply", self.base_url);

        let body = ReplyMessage {
            reply_token: reply_token.to_string(),
            messages,
        };

        debug!("Replying with {} message(s)", body.messages.len());

        let response = self
            .add_auth(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(LineError::HttpError)?;

        let response = check_status(response, "Reply message").await?;
        Ok(send_response(&response))
    }

    async fn push_message(&self, to: &str, messages: Vec<MessageContent>) -> Result<SendResponse> {
        let url = format!("{}/bot/message/push", self.base_url);

        let body = PushMessage {
            to: to.to_string(),
            messages,
        };

        debug!("Pushing {} message(s) to: {}", body.messages.len(), to);

        let response = self
            .add_auth(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(LineError::HttpError)?;

        let response = check_status(response, "Push message").await?;
        Ok(send_response(&response))
    }
}

/// Turn a non-2xx response into an `ApiError`
async fn check_status(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!("{} failed: {} - {}", operation, status, error_text);
    Err(LineError::ApiError(format!("{}: {}", status, error_text)))
}

fn send_response(response: &Response) -> SendResponse {
    SendResponse {
        request_id: response
            .headers()
            .get("x-line-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    }
}
