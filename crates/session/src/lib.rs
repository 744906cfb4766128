//! Chat-session interaction controller.
//!
//! One `Session` per widget instance owns the transcript, the current
//! mode and language, the input gate, and flashcard state. The session
//! holds pure state and emits [`SessionEvent`]s; a thin rendering
//! adapter subscribes to the event stream and updates the display, so
//! the controller runs and tests without any UI host.

pub mod events;
pub mod flashcards;
pub mod input;
pub mod reveal;
pub mod scan;
pub mod session;
pub mod transcript;

pub use events::SessionEvent;
pub use input::{submit_on_enter, Modifiers};
pub use reveal::{spawn_reveal, RevealTask};
pub use session::{FlashcardFetch, Session, FAILURE_REPLY};
pub use transcript::Transcript;
