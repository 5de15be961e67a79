//! Reading time estimation for article content.
//!
//! Word counts come from the visible text (markup stripped). A non-empty
//! article always reads as at least one minute.

use crate::utils::text;
use std::collections::HashMap;

/// Built-in label templates, `:minutes` is replaced with the estimate.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("en", ":minutes min read"),
    ("ar", ":minutes دقيقة قراءة"),
    ("fr", ":minutes min de lecture"),
    ("es", ":minutes min de lectura"),
    ("de", ":minutes Min. Lesezeit"),
    ("it", ":minutes min di lettura"),
    ("pt", ":minutes min de leitura"),
    ("ru", ":minutes мин. чтения"),
    ("zh", ":minutes 分钟阅读"),
    ("ja", ":minutes 分で読める"),
];

/// Reading time in whole minutes, rounded up. Empty content reads as 0.
pub fn minutes(content: &str, words_per_minute: u32) -> u32 {
    let words = text::word_count(content) as u32;
    if words == 0 {
        return 0;
    }
    let wpm = words_per_minute.max(1);
    (words.div_ceil(wpm)).max(1)
}

/// ISO 8601 duration form, e.g. "PT2M".
pub fn to_iso8601(content: &str, words_per_minute: u32) -> String {
    format!("PT{}M", minutes(content, words_per_minute))
}

/// Human-readable label in the given locale.
///
/// Config-supplied `overrides` win over the built-in templates; unknown
/// locales fall back to English.
pub fn format(
    content: &str,
    words_per_minute: u32,
    locale: &str,
    overrides: Option<&HashMap<String, String>>,
) -> String {
    let mins = minutes(content, words_per_minute);

    if let Some(template) = overrides.and_then(|t| t.get(locale)) {
        return template.replace(":minutes", &mins.to_string());
    }

    let template = TRANSLATIONS
        .iter()
        .find(|(l, _)| *l == locale)
        .or_else(|| TRANSLATIONS.iter().find(|(l, _)| *l == "en"))
        .map_or(":minutes min read", |(_, t)| t);

    template.replace(":minutes", &mins.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_minutes_empty() {
        assert_eq!(minutes("", 200), 0);
        assert_eq!(minutes("<p></p>", 200), 0);
    }

    #[test]
    fn test_minutes_rounds_up() {
        assert_eq!(minutes(&words(400), 200), 2);
        assert_eq!(minutes(&words(401), 200), 3);
    }

    #[test]
    fn test_minutes_at_least_one() {
        assert_eq!(minutes("just a few words", 200), 1);
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(to_iso8601(&words(400), 200), "PT2M");
    }

    #[test]
    fn test_format_english() {
        assert_eq!(format(&words(400), 200, "en", None), "2 min read");
    }

    #[test]
    fn test_format_unknown_locale_falls_back() {
        assert_eq!(format(&words(200), 200, "xx", None), "1 min read");
    }

    #[test]
    fn test_format_override() {
        let mut overrides = HashMap::new();
        overrides.insert("en".to_string(), "about :minutes minutes".to_string());
        assert_eq!(
            format(&words(400), 200, "en", Some(&overrides)),
            "about 2 minutes"
        );
    }

    #[test]
    fn test_format_builtin_locale() {
        assert_eq!(format(&words(400), 200, "de", None), "2 Min. Lesezeit");
    }
}
