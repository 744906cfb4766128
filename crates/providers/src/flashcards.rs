//! Client for the optional flashcard endpoint.
//!
//! `None` means "no update": the caller keeps whatever static content
//! it is already showing. Flashcard problems never surface to the
//! user.

use reqwest::Client;
use serde::Deserialize;
use shared::modes::ChatMode;
use shared::settings::WidgetSettings;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

static SHARED_HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(1)
        .build()
        .expect("failed to build HTTP client")
});

#[derive(Debug, Deserialize)]
struct FlashcardResponse {
    flashcards: Vec<String>,
}

pub struct FlashcardClient {
    http: Client,
    settings: WidgetSettings,
}

impl FlashcardClient {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            http: SHARED_HTTP.clone(),
            settings,
        }
    }

    /// Fetch flashcards for a mode. Transport errors, bad status,
    /// malformed bodies and empty lists all collapse to `None`.
    pub async fn fetch(&self, mode: ChatMode) -> Option<Vec<String>> {
        let url = self.settings.flashcard_url();
        let resp = match self
            .http
            .get(&url)
            .query(&[("mode", mode.as_str())])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                debug!(%url, error = %e, "flashcard fetch failed");
                return None;
            }
        };

        if !resp.status().is_success() {
            debug!(%url, status = %resp.status(), "flashcard fetch rejected");
            return None;
        }

        match resp.json::<FlashcardResponse>().await {
            Ok(body) if !body.flashcards.is_empty() => Some(body.flashcards),
            Ok(_) => None,
            Err(e) => {
                debug!(%url, error = %e, "flashcard response malformed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_cards() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flashcards"))
            .and(query_param("mode", "cyber"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "flashcards": ["Use 2FA.", "Never reuse passwords."]
            })))
            .mount(&server)
            .await;

        let client = FlashcardClient::new(WidgetSettings::with_base_url(server.uri()));
        let cards = client.fetch(ChatMode::Cyber).await.unwrap();
        assert_eq!(cards.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_no_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flashcards"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = FlashcardClient::new(WidgetSettings::with_base_url(server.uri()));
        assert!(client.fetch(ChatMode::Edu).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_list_is_no_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flashcards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "flashcards": []
            })))
            .mount(&server)
            .await;

        let client = FlashcardClient::new(WidgetSettings::with_base_url(server.uri()));
        assert!(client.fetch(ChatMode::Edu).await.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_no_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/flashcards"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = FlashcardClient::new(WidgetSettings::with_base_url(server.uri()));
        assert!(client.fetch(ChatMode::Cyber).await.is_none());
    }
}
