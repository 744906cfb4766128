pub mod error;
pub mod message;
pub mod modes;

pub mod settings {
    use serde::{Deserialize, Serialize};
    use std::env;

    fn default_base_url() -> String {
        env::var("CHAT_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
    }

    fn default_chat_path() -> String {
        "/api/chat".to_string()
    }

    fn default_flashcard_path() -> String {
        "/api/flashcards".to_string()
    }

    fn default_request_field() -> String {
        "message".to_string()
    }

    fn default_reply_fields() -> Vec<String> {
        vec!["reply".to_string(), "response".to_string()]
    }

    /// Configuration for one widget instance.
    ///
    /// Deployments disagree on the request field name (`message` vs
    /// `prompt`), the reply field name (`reply` vs `response`) and the
    /// endpoint path (`/api/chat` vs `/chat`), so all three are
    /// configurable rather than hard-coded.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct WidgetSettings {
        #[serde(default = "default_base_url")]
        pub base_url: String,
        #[serde(default = "default_chat_path")]
        pub chat_path: String,
        #[serde(default = "default_flashcard_path")]
        pub flashcard_path: String,
        /// JSON field carrying the user text in the outbound request.
        #[serde(default = "default_request_field")]
        pub request_field: String,
        /// Reply fields probed in order; the first present one wins.
        #[serde(default = "default_reply_fields")]
        pub reply_fields: Vec<String>,
    }

    impl Default for WidgetSettings {
        fn default() -> Self {
            Self {
                base_url: default_base_url(),
                chat_path: default_chat_path(),
                flashcard_path: default_flashcard_path(),
                request_field: default_request_field(),
                reply_fields: default_reply_fields(),
            }
        }
    }

    impl WidgetSettings {
        pub fn with_base_url(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
                ..Self::default()
            }
        }

        pub fn chat_url(&self) -> String {
            format!("{}{}", self.base_url.trim_end_matches('/'), self.chat_path)
        }

        pub fn flashcard_url(&self) -> String {
            format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                self.flashcard_path
            )
        }
    }

}
