//! HTTP clients for the remote chat and flashcard endpoints.

pub mod chat;
pub mod flashcards;

pub use chat::{ChatBackend, ChatClient};
pub use flashcards::FlashcardClient;
