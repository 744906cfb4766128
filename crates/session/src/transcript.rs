//! Append-only transcript of exchanged messages.

use shared::message::{Message, MessageStatus, PendingHandle, Role};

/// Ordered log of messages. Append-only, except that the last entry
/// may be a pending assistant placeholder which resolves in place.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: Option<PendingHandle>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a final message as the newest entry.
    ///
    /// Precondition: no pending entry is outstanding.
    pub fn append(&mut self, role: Role, text: impl Into<String>) -> &Message {
        debug_assert!(self.pending.is_none(), "append while a pending entry exists");
        self.messages.push(Message::new(role, text));
        self.messages.last().unwrap()
    }

    /// Append a pending assistant placeholder (typing indicator).
    ///
    /// Precondition: no pending entry is outstanding. At most one
    /// pending entry may exist per transcript.
    pub fn append_pending(&mut self) -> (PendingHandle, &Message) {
        debug_assert!(self.pending.is_none(), "second pending entry requested");
        let message = Message::pending();
        let handle = PendingHandle::new(message.id);
        self.pending = Some(handle);
        self.messages.push(message);
        (handle, self.messages.last().unwrap())
    }

    /// Resolve the pending entry in place: same position, final
    /// status, the given text. Returns the resolved message, or `None`
    /// if the handle does not match the outstanding pending entry.
    pub fn resolve_pending(&mut self, handle: PendingHandle, text: impl Into<String>) -> Option<&Message> {
        if self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == handle.id() && m.is_pending())?;
        message.status = MessageStatus::Final;
        message.text = text.into();
        Some(message)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
