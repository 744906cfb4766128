//! Static flashcard pools and selection.
//!
//! The edu and cyber modes show up to three short tips next to the
//! input. Static pools give an immediate presentation; the remote
//! flashcard endpoint may replace them later (see
//! `Session::refresh_flashcards`).

use rand::seq::SliceRandom;
use shared::modes::ChatMode;

pub const MAX_CARDS: usize = 3;

const EDU_POOL: [&str; 5] = [
    "🧠 Study in 25-min sessions with 5-min breaks (Pomodoro Technique).",
    "📚 Avoid cramming the night before your exam.",
    "📖 Teach someone else — it helps you retain better.",
    "📝 Make use of past questions and self-quizzing.",
    "📵 Turn off phone notifications during study time.",
];

const CYBER_POOL: [&str; 5] = [
    "🔐 Enable Two-Factor Authentication (2FA) on all important accounts.",
    "📛 Never click on unknown links in emails — phishing alert!",
    "💻 Use strong, unique passwords and a password manager.",
    "🕵️ Beware of social engineering. Always verify before trusting.",
    "🧼 Keep your software and antivirus updated regularly.",
];

/// Static pool for a mode, if the mode shows flashcards at all.
pub fn pool_for(mode: ChatMode) -> Option<&'static [&'static str]> {
    match mode {
        ChatMode::Edu => Some(&EDU_POOL),
        ChatMode::Cyber => Some(&CYBER_POOL),
        ChatMode::Chat | ChatMode::Scan => None,
    }
}

/// Pick `min(MAX_CARDS, pool size)` distinct cards for a mode, or
/// `None` if the mode has no flashcards.
pub fn pick_cards(mode: ChatMode) -> Option<Vec<String>> {
    let pool = pool_for(mode)?;
    let count = MAX_CARDS.min(pool.len());
    let cards = pool
        .choose_multiple(&mut rand::thread_rng(), count)
        .map(|s| s.to_string())
        .collect();
    Some(cards)
}

/// Order-preserving dedup capped at `MAX_CARDS`, applied to fetched
/// card lists so remote content honors the same uniqueness rule.
pub fn dedup_cards(cards: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(MAX_CARDS);
    for card in cards {
        if seen.len() == MAX_CARDS {
            break;
        }
        if !seen.contains(&card) {
            seen.push(card);
        }
    }
    seen
}
