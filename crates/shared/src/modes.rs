//! Chat modes and reply languages.
//!
//! Each mode is a distinct conversation domain with its own input
//! placeholder and, for some modes, supplementary flashcards.

use serde::{Deserialize, Serialize};

/// Conversation domain selected by the user.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// General AI chat
    Chat,
    /// Link and email safety scanner
    Scan,
    /// Academic assistant
    Edu,
    /// Cybersecurity advisor
    Cyber,
}

impl ChatMode {
    pub const ALL: [ChatMode; 4] = [
        ChatMode::Chat,
        ChatMode::Scan,
        ChatMode::Edu,
        ChatMode::Cyber,
    ];

    /// Wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Chat => "chat",
            ChatMode::Scan => "scan",
            ChatMode::Edu => "edu",
            ChatMode::Cyber => "cyber",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChatMode::Chat => "Chatbox",
            ChatMode::Scan => "Email/Link Scanner",
            ChatMode::Edu => "Academic Assistant",
            ChatMode::Cyber => "Cybersecurity Tips",
        }
    }

    /// Input placeholder shown while this mode is active. Total over
    /// the enum; unknown selector values fall back to `Chat`.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ChatMode::Scan => "Paste link or email here...",
            ChatMode::Edu => "Ask an academic-related question...",
            ChatMode::Cyber => "Ask a cybersecurity question...",
            ChatMode::Chat => "Type something...",
        }
    }

    /// Parse a selector value, falling back to the default mode for
    /// anything unrecognized.
    pub fn from_selector(value: &str) -> Self {
        match value {
            "scan" | "scanner" => ChatMode::Scan,
            "edu" => ChatMode::Edu,
            "cyber" => ChatMode::Cyber,
            _ => ChatMode::Chat,
        }
    }
}

impl Default for ChatMode {
    fn default() -> Self {
        ChatMode::Chat
    }
}

/// Desired reply language, as a selector value (e.g. "english",
/// "pidgin"). Opaque to the widget; forwarded to the backend verbatim.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Lang(pub String);

impl Lang {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Lang {
    fn default() -> Self {
        Self("english".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_total() {
        for mode in ChatMode::ALL {
            assert!(!mode.placeholder().is_empty());
        }
    }

    #[test]
    fn test_from_selector_falls_back_to_chat() {
        assert_eq!(ChatMode::from_selector("scan"), ChatMode::Scan);
        assert_eq!(ChatMode::from_selector("scanner"), ChatMode::Scan);
        assert_eq!(ChatMode::from_selector("advice"), ChatMode::Chat);
        assert_eq!(ChatMode::from_selector(""), ChatMode::Chat);
    }

    #[test]
    fn test_wire_value_round_trip() {
        for mode in ChatMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            let back: ChatMode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }
}
