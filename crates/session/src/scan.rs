//! Scan-mode reply annotation.
//!
//! Best-effort text decoration, not a security verdict: a reply
//! without a percentage is left untouched.

use regex::Regex;
use std::sync::LazyLock;

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)%").unwrap());

/// Find the first decimal integer immediately followed by `%` in a
/// scan reply and prepend a `Trust Score: <n>%` header line. The
/// original text is never altered, only prefixed.
pub fn annotate_trust_score(reply: &str) -> String {
    let Some(caps) = SCORE_RE.captures(reply) else {
        return reply.to_string();
    };
    match caps[1].parse::<u64>() {
        Ok(score) => format!("Trust Score: {}%\n{}", score, reply),
        Err(_) => reply.to_string(),
    }
}
