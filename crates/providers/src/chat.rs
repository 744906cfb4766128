//! Client for the chat endpoint.
//!
//! One POST per user submission, body `{ <request_field>: text, mode,
//! lang }`. Deployments vary the request field (`message` vs `prompt`)
//! and the reply field (`reply` vs `response`), so both come from
//! `WidgetSettings` instead of being baked in.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use shared::error::ChatError;
use shared::modes::ChatMode;
use shared::settings::WidgetSettings;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

static SHARED_HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
});

/// Seam between the session controller and the network. Injected so
/// the controller can be exercised without a live endpoint.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn reply(&self, text: &str, mode: ChatMode, lang: &str) -> Result<String, ChatError>;
}

pub struct ChatClient {
    http: Client,
    settings: WidgetSettings,
}

impl ChatClient {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            http: SHARED_HTTP.clone(),
            settings,
        }
    }

    /// Pull the reply text out of a response body, probing the
    /// configured field names in order.
    fn extract_reply(&self, body: &Value) -> Option<String> {
        self.settings
            .reply_fields
            .iter()
            .find_map(|field| body.get(field).and_then(Value::as_str))
            .map(str::to_string)
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn reply(&self, text: &str, mode: ChatMode, lang: &str) -> Result<String, ChatError> {
        let url = self.settings.chat_url();
        // Request field name is deployment-specific, so the body is
        // assembled as a map rather than a fixed struct.
        let mut body = Map::new();
        body.insert(
            self.settings.request_field.clone(),
            Value::String(text.to_string()),
        );
        body.insert("mode".to_string(), Value::String(mode.as_str().to_string()));
        body.insert("lang".to_string(), Value::String(lang.to_string()));
        let body = Value::Object(body);

        debug!(%url, mode = mode.as_str(), "sending chat request");
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        self.extract_reply(&body).ok_or(ChatError::MissingReply)
    }
}
