//! Transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Pending is reserved for an assistant entry acting as a typing
/// indicator until the real reply resolves. At most one pending
/// message exists per transcript, and only as the last entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Final,
    Pending,
}

/// One transcript entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub status: MessageStatus,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            status: MessageStatus::Final,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Placeholder assistant entry awaiting its reply.
    pub fn pending() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            status: MessageStatus::Pending,
            text: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }
}

/// Opaque handle to a pending transcript entry, returned by
/// `Transcript::append_pending` and consumed by `resolve_pending`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingHandle(pub(crate) Uuid);

impl PendingHandle {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_final() {
        let msg = Message::new(Role::User, "hello");
        assert_eq!(msg.status, MessageStatus::Final);
        assert_eq!(msg.text, "hello");
    }

    #[test]
    fn test_pending_message_is_assistant() {
        let msg = Message::pending();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_pending());
        assert!(msg.text.is_empty());
    }
}
