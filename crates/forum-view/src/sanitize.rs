//! Plain-text excerpts from markdown bodies.

use std::sync::LazyLock;

use regex::Regex;

/// Excerpt length in characters.
pub const EXCERPT_CHARS: usize = 300;

/// Everything outside letters, numbers, whitespace, `.,!?(`, the run
/// `)`..=`[`, and `]`.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}\s.,!?(\x29-\x5B\]]").expect("disallowed-character pattern compiles")
});

/// Strip markup and symbols from a body.
#[must_use]
pub fn filter_body(body: &str) -> String {
    DISALLOWED.replace_all(body, "").into_owned()
}

/// First [`EXCERPT_CHARS`] characters of the filtered body.
#[must_use]
pub fn excerpt(body: &str) -> String {
    filter_body(body).chars().take(EXCERPT_CHARS).collect()
}
