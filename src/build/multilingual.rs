//! hreflang alternate links.
//!
//! Alternate URLs come from an injected generator when the host app has
//! real routing; without one, a deterministic rewrite swaps or prefixes
//! the locale path segment.

use super::BuildInput;
use crate::model::Model;
use crate::tags::MetaTags;
use url::Url;

/// Host-app hook producing the alternate URL for (locale, model, current URL).
/// Returning `None` falls back to the path rewrite.
pub type AlternateUrlFn = Box<dyn Fn(&str, &Model, &str) -> Option<String> + Send + Sync>;

pub(crate) fn build(
    input: &BuildInput<'_>,
    generator: Option<&AlternateUrlFn>,
    meta: &mut MetaTags,
) {
    let multilingual = &input.config.multilingual;
    if !multilingual.enabled || multilingual.locales.is_empty() {
        return;
    }

    let current_locale = input.ctx.locale();
    let mut current_url = input.current_url();
    let page = input.ctx.page_number();
    if page > 1 {
        let separator = if current_url.contains('?') { '&' } else { '?' };
        current_url.push_str(&format!("{separator}page={page}"));
    }

    let alternate = |locale: &str| -> String {
        generator
            .and_then(|generate| generate(locale, input.model, &current_url))
            .unwrap_or_else(|| rewrite_locale(&current_url, &current_locale, locale))
    };

    for locale in &multilingual.locales {
        meta.add_alternate(locale, alternate(locale));
    }
    if multilingual.x_default {
        meta.add_alternate("x-default", alternate(&multilingual.default_locale));
    }
}

/// Swap an existing `/{current}/` path segment for the target locale, or
/// prefix the path with `/{target}` when the URL carries no locale segment.
fn rewrite_locale(url: &str, current: &str, target: &str) -> String {
    let current_segment = format!("/{current}/");
    if url.contains(&current_segment) {
        return url.replacen(&current_segment, &format!("/{target}/"), 1);
    }

    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let mut out = format!("{}://", parsed.scheme());
    out.push_str(parsed.host_str().unwrap_or(""));
    if let Some(port) = parsed.port() {
        out.push_str(&format!(":{port}"));
    }
    if target != current {
        out.push_str(&format!("/{target}"));
    }
    let path = parsed.path();
    if path != "/" || target == current {
        out.push_str(path);
    }
    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }
    out
}
