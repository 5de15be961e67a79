//! HTML entity escaping for tag rendering.
//!
//! Every user-controlled string that lands inside a `<meta>` or `<link>` tag
//! goes through `escape()`/`escape_attr()`. `unescape()` reverses stored
//! entities before text processing (word counts, description excerpts).

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

//// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        // Collect entity
        let mut entity = String::new();
        for c in chars.by_ref() {
            if c == ';' {
                break;
            }
            entity.push(c);
            if entity.len() > 10 {
                // Too long, not a valid entity
                result.push('&');
                result.push_str(&entity);
                entity.clear();
                break;
            }
        }

        if entity.is_empty() {
            result.push('&');
            continue;
        }

        // Decode entity
        match entity.as_str() {
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "amp" => result.push('&'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push('\u{00A0}'),
            s if s.starts_with('#') => {
                let code = if s.starts_with("#x") || s.starts_with("#X") {
                    u32::from_str_radix(&s[2..], 16).ok()
                } else {
                    s[1..].parse().ok()
                };
                if let Some(c) = code.and_then(char::from_u32) {
                    result.push(c);
                } else {
                    result.push('&');
                    result.push_str(&entity);
                    result.push(';');
                }
            }
            _ => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<a href=\"#\">link & text</a>"),
            "&lt;a href=&quot;#&quot;&gt;link &amp; text&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("normal"), "normal");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("hello"), "hello");
        assert_eq!(unescape("&lt;script&gt;"), "<script>");
        assert_eq!(unescape("a &amp; b"), "a & b");
        assert_eq!(unescape("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(unescape("&#39;"), "'");
        assert_eq!(unescape("&#x27;"), "'");
        assert_eq!(unescape("&#65;"), "A");
        assert_eq!(unescape("&nbsp;"), "\u{00A0}");
    }
}
