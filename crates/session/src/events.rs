//! Change notifications emitted by a session.

use shared::message::Message;
use uuid::Uuid;

/// State change for the rendering adapter. Events are emitted in the
/// order the corresponding state transitions happen; replaying them
/// against an empty view reproduces the session's visible state.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Input placeholder text changed (mode switch).
    PlaceholderChanged(String),
    /// Show these flashcards, replacing any currently displayed.
    FlashcardsShown(Vec<String>),
    /// Hide the flashcard panel.
    FlashcardsCleared,
    /// A final message was appended to the transcript; the view should
    /// render it as the newest entry and scroll it into view.
    MessageAppended(Message),
    /// A pending (typing indicator) entry was appended.
    MessagePending(Message),
    /// The pending entry with this id resolved in place to `text`.
    MessageResolved { id: Uuid, text: String },
    /// Submission is disabled while a request is in flight; the send
    /// control should show its busy label.
    InputLocked,
    /// Submission re-enabled.
    InputUnlocked,
    /// Return focus to the text input.
    FocusInput,
}
