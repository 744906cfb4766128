//! Character-by-character reveal for assistant replies.
//!
//! Decorative typewriter presentation, kept outside the session core.
//! The task streams one chunk per character through an unbounded
//! channel and can be cancelled at any point; a dropped receiver
//! (widget torn down) simply ends the task.

use futures::future::{AbortHandle, Abortable};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

pub struct RevealTask {
    abort: AbortHandle,
}

impl RevealTask {
    /// Stop emitting further characters. Already-sent chunks stay.
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Spawn a reveal of `text`, emitting one character every `interval`.
pub fn spawn_reveal(text: String, interval: Duration, tx: UnboundedSender<String>) -> RevealTask {
    let (abort, registration) = AbortHandle::new_pair();
    let fut = Abortable::new(
        async move {
            for ch in text.chars() {
                if tx.send(ch.to_string()).is_err() {
                    break;
                }
                tokio::time::sleep(interval).await;
            }
        },
        registration,
    );
    tokio::spawn(fut);
    RevealTask { abort }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test(start_paused = true)]
    async fn test_reveal_emits_every_character() {
        let (tx, mut rx) = unbounded_channel();
        let _task = spawn_reveal("hello".to_string(), Duration::from_millis(20), tx);

        let mut out = String::new();
        while let Some(chunk) = rx.recv().await {
            out.push_str(&chunk);
        }
        assert_eq!(out, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_start_emits_nothing() {
        let (tx, mut rx) = unbounded_channel();
        let task = spawn_reveal("hello".to_string(), Duration::from_millis(20), tx);
        task.cancel();

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_ends_task() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        let _task = spawn_reveal("hello".to_string(), Duration::from_millis(20), tx);
        // Nothing to assert beyond the task not hanging the runtime.
        tokio::task::yield_now().await;
    }
}
