//! Plain-text extraction from HTML content.
//!
//! Descriptions and word counts operate on the text a reader would see:
//! markup removed, entities decoded, whitespace collapsed.

use crate::utils::html;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Maximum description length in characters.
const DESCRIPTION_MAX: usize = 160;
/// Truncation point when the cap is exceeded (leaves room for "...").
const DESCRIPTION_CUT: usize = 157;

/// Remove HTML tags and decode entities, leaving visible text.
pub fn strip_tags(s: &str) -> String {
    let decoded = html::unescape(s);
    TAG_RE.replace_all(&decoded, "").into_owned()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    WS_RE.replace_all(s.trim(), " ").into_owned()
}

/// Count words in already-rendered HTML content.
pub fn word_count(content: &str) -> usize {
    let text = normalize_ws(&strip_tags(content));
    if text.is_empty() {
        return 0;
    }
    text.split_whitespace().count()
}

/// Build a description excerpt: first `limit` words of the visible text,
/// hard-capped at 160 characters with a trailing ellipsis.
pub fn limit_words(content: &str, limit: usize) -> String {
    let text = normalize_ws(&strip_tags(content));
    if text.is_empty() {
        return String::new();
    }

    let excerpt: String = {
        let mut words = text.split_whitespace();
        let taken: Vec<&str> = words.by_ref().take(limit).collect();
        taken.join(" ")
    };

    if excerpt.chars().count() > DESCRIPTION_MAX {
        let cut: String = excerpt.chars().take(DESCRIPTION_CUT).collect();
        format!("{cut}...")
    } else {
        excerpt
    }
}
