//! Resource-hint links: dns-prefetch, preconnect, preload, prefetch,
//! prerender and modulepreload. Emitted before everything else so the
//! browser sees them as early as possible.

use crate::config::PerformanceConfig;
use crate::utils::html;
use std::fmt::Write;

pub(crate) fn build(config: &PerformanceConfig) -> String {
    let mut out = String::new();

    for domain in &config.dns_prefetch {
        let domain = domain
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("//");
        let _ = writeln!(
            out,
            "<link rel=\"dns-prefetch\" href=\"//{}\">",
            html::escape_attr(domain)
        );
    }

    for origin in &config.preconnect {
        let _ = writeln!(
            out,
            "<link rel=\"preconnect\" href=\"{}\" crossorigin>",
            html::escape_attr(origin)
        );
    }

    for resource in &config.preload {
        if resource.href.is_empty() {
            continue;
        }
        let mut tag = format!(
            "<link rel=\"preload\" as=\"{}\" href=\"{}\"",
            html::escape_attr(&resource.kind),
            html::escape_attr(&resource.href)
        );
        if let Some(mime) = &resource.mime {
            let _ = write!(tag, " type=\"{}\"", html::escape_attr(mime));
        }
        if let Some(onload) = &resource.onload {
            let _ = write!(tag, " onload=\"{}\"", html::escape_attr(onload));
        }
        tag.push_str(">\n");
        out.push_str(&tag);
    }

    for href in &config.prefetch {
        let _ = writeln!(
            out,
            "<link rel=\"prefetch\" href=\"{}\">",
            html::escape_attr(href)
        );
    }

    for href in &config.prerender {
        let _ = writeln!(
            out,
            "<link rel=\"prerender\" href=\"{}\">",
            html::escape_attr(href)
        );
    }

    for module in &config.modulepreload {
        if module.href.is_empty() {
            continue;
        }
        let mut tag = format!(
            "<link rel=\"modulepreload\" href=\"{}\"",
            html::escape_attr(&module.href)
        );
        if let Some(mime) = &module.mime {
            let _ = write!(tag, " type=\"{}\"", html::escape_attr(mime));
        }
        tag.push_str(">\n");
        out.push_str(&tag);
    }

    out
}
