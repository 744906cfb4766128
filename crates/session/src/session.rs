//! The per-widget session controller.

use crate::events::SessionEvent;
use crate::flashcards::{self, dedup_cards};
use crate::scan::annotate_trust_score;
use crate::transcript::Transcript;
use providers::{ChatBackend, ChatClient, FlashcardClient};
use shared::message::{PendingHandle, Role};
use shared::modes::{ChatMode, Lang};
use shared::settings::WidgetSettings;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Assistant-visible text for any failed submission. The transcript is
/// never left without a response to a submitted message.
pub const FAILURE_REPLY: &str = "Something went wrong. Please try again.";

/// Token for an in-flight flashcard refresh. Carries the epoch the
/// refresh was started under; a mode change or input focus bumps the
/// epoch, so a stale refresh is discarded on arrival instead of
/// overwriting newer content.
#[derive(Clone, Copy, Debug)]
pub struct FlashcardFetch {
    mode: ChatMode,
    epoch: u64,
}

/// Live state of one chat widget instance.
///
/// The session owns its transcript and flashcard state exclusively;
/// rendering happens elsewhere, driven by the event stream returned
/// from the constructor. All state transitions are synchronous except
/// the awaits inside [`submit`](Session::submit) and
/// [`refresh_flashcards`](Session::refresh_flashcards).
pub struct Session {
    mode: ChatMode,
    lang: Lang,
    transcript: Transcript,
    input_locked: bool,
    flashcard_epoch: u64,
    backend: Arc<dyn ChatBackend>,
    flashcard_client: Option<FlashcardClient>,
    events: UnboundedSender<SessionEvent>,
}

impl Session {
    /// Build a session against an injected backend. The receiver
    /// carries every state change; dropping it is tolerated (events
    /// are then discarded, matching a torn-down widget).
    pub fn new(backend: Arc<dyn ChatBackend>) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, rx) = unbounded_channel();
        let session = Self {
            mode: ChatMode::default(),
            lang: Lang::default(),
            transcript: Transcript::new(),
            input_locked: false,
            flashcard_epoch: 0,
            backend,
            flashcard_client: None,
            events,
        };
        session.emit(SessionEvent::PlaceholderChanged(
            session.mode.placeholder().to_string(),
        ));
        (session, rx)
    }

    /// Production constructor: HTTP chat and flashcard clients built
    /// from the given settings.
    pub fn from_settings(settings: WidgetSettings) -> (Self, UnboundedReceiver<SessionEvent>) {
        let backend = Arc::new(ChatClient::new(settings.clone()));
        let (session, rx) = Self::new(backend);
        (
            session.with_flashcard_client(FlashcardClient::new(settings)),
            rx,
        )
    }

    /// Enable remote flashcard refresh. Without a client, flashcards
    /// come from the static pools only.
    pub fn with_flashcard_client(mut self, client: FlashcardClient) -> Self {
        self.flashcard_client = Some(client);
        self
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_locked(&self) -> bool {
        self.input_locked
    }

    /// Input Gate: disable submission and signal the busy state.
    pub fn lock(&mut self) {
        self.input_locked = true;
        self.emit(SessionEvent::InputLocked);
    }

    /// Input Gate: re-enable submission unconditionally.
    pub fn unlock(&mut self) {
        self.input_locked = false;
        self.emit(SessionEvent::InputUnlocked);
    }

    /// Switch conversation mode: recompute the placeholder and refresh
    /// or clear flashcards. Returns a token when the new mode shows
    /// flashcards, which the host may pass to
    /// [`refresh_flashcards`](Session::refresh_flashcards) to replace
    /// the static cards with remote content.
    pub fn set_mode(&mut self, mode: ChatMode) -> Option<FlashcardFetch> {
        self.mode = mode;
        self.emit(SessionEvent::PlaceholderChanged(
            mode.placeholder().to_string(),
        ));
        self.flashcard_epoch += 1;
        match flashcards::pick_cards(mode) {
            Some(cards) => {
                self.emit(SessionEvent::FlashcardsShown(cards));
                Some(FlashcardFetch {
                    mode,
                    epoch: self.flashcard_epoch,
                })
            }
            None => {
                self.emit(SessionEvent::FlashcardsCleared);
                None
            }
        }
    }

    /// Update the desired reply language. No other side effect.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    /// The user focused the text input: hide flashcards and invalidate
    /// any in-flight refresh.
    pub fn input_focused(&mut self) {
        self.flashcard_epoch += 1;
        self.emit(SessionEvent::FlashcardsCleared);
    }

    /// Replace the static flashcards with remote content, unless the
    /// mode changed (or the input was focused) since the fetch
    /// started.
    pub async fn refresh_flashcards(&mut self, fetch: FlashcardFetch) {
        let Some(client) = &self.flashcard_client else {
            return;
        };
        let Some(cards) = client.fetch(fetch.mode).await else {
            return;
        };
        if fetch.epoch != self.flashcard_epoch {
            debug!(mode = fetch.mode.as_str(), "discarding stale flashcard fetch");
            return;
        }
        let cards = dedup_cards(cards);
        if !cards.is_empty() {
            self.emit(SessionEvent::FlashcardsShown(cards));
        }
    }

    /// Submit one user message and await its reply.
    ///
    /// Empty (after trimming) input and submission while a request is
    /// outstanding are both no-ops. Otherwise: gate locks, the user
    /// message is appended, exactly one request goes out, and exactly
    /// one assistant message is appended: the reply (scan-annotated
    /// when the mode is scan) or [`FAILURE_REPLY`] on any failure. The
    /// gate unlocks and focus is restored on every exit path.
    ///
    /// Returns whether a submission actually happened.
    pub async fn submit(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        if self.input_locked {
            debug!("submission ignored while a request is outstanding");
            return false;
        }

        self.lock();
        self.append(Role::User, text.to_string());

        // Mode and lang captured here; a mode switch during the await
        // must not change how this reply is post-processed.
        let mode = self.mode;
        let lang = self.lang.clone();

        let reply = match self.backend.reply(text, mode, lang.as_str()).await {
            Ok(reply) if mode == ChatMode::Scan => annotate_trust_score(&reply),
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, mode = mode.as_str(), "chat request failed");
                FAILURE_REPLY.to_string()
            }
        };

        self.append(Role::Assistant, reply);
        self.unlock();
        self.emit(SessionEvent::FocusInput);
        true
    }

    /// Append a pending typing-indicator entry. Alternative busy
    /// presentation for hosts that prefer a transcript placeholder
    /// over the send-control label; the built-in pipeline does not use
    /// it. Precondition: no pending entry is outstanding.
    pub fn append_pending(&mut self) -> PendingHandle {
        let (handle, message) = self.transcript.append_pending();
        let message = message.clone();
        self.emit(SessionEvent::MessagePending(message));
        handle
    }

    /// Resolve a pending entry in place with the final reply text.
    pub fn resolve_pending(&mut self, handle: PendingHandle, text: impl Into<String>) {
        if let Some(message) = self.transcript.resolve_pending(handle, text) {
            let (id, text) = (message.id, message.text.clone());
            self.emit(SessionEvent::MessageResolved { id, text });
        }
    }

    fn append(&mut self, role: Role, text: String) {
        let message = self.transcript.append(role, text).clone();
        self.emit(SessionEvent::MessageAppended(message));
    }

    fn emit(&self, event: SessionEvent) {
        // A dropped receiver means the widget is gone; keep going.
        let _ = self.events.send(event);
    }
}
