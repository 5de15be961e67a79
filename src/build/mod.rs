//! Feature builders: each reads config + page state and fills the tag
//! accumulators (or returns an HTML fragment) for one concern.

pub mod analytics;
pub mod geo;
pub mod linkedin;
pub mod meta;
pub mod mobile;
pub mod multilingual;
pub mod opengraph;
pub mod performance;
pub mod security;
pub mod social;
pub mod twitter;

use crate::config::SeoConfig;
use crate::context::{Images, RequestContext};
use crate::model::Model;
use crate::page::{PageData, PageType};
use crate::site::SiteData;
use url::Url;

/// Everything a builder may need for the current page.
pub(crate) struct BuildInput<'a> {
    pub config: &'a SeoConfig,
    pub site: &'a SiteData,
    pub page: &'a PageData,
    pub page_type: PageType,
    pub model: &'a Model,
    pub ctx: &'a dyn RequestContext,
    pub images: &'a Images<'a>,
}

impl BuildInput<'_> {
    /// Current request URL without query or fragment; the configured site
    /// URL in batch contexts.
    pub fn current_url(&self) -> String {
        match self.ctx.current_url() {
            Some(url) => strip_query(&url),
            None => self.site.url.clone(),
        }
    }

    /// True for a live request on page 2+ (query `page` or `/page/N` path).
    pub fn is_paginated(&self) -> bool {
        if self.ctx.current_url().is_none() {
            return false;
        }
        if self.ctx.page_number() > 1 {
            return true;
        }
        self.ctx
            .path()
            .and_then(|p| path_page_number(&p))
            .is_some_and(|n| n > 1)
    }
}

/// Drop query string and fragment from a URL.
pub(crate) fn strip_query(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            let mut out = parsed.to_string();
            // Url::parse normalizes "https://host" to "https://host/";
            // keep bare-host URLs the way the caller wrote them.
            if !url.ends_with('/') && out.ends_with('/') {
                out.pop();
            }
            out
        }
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    }
}

/// Page number from a `/page/N` path segment.
pub(crate) fn path_page_number(path: &str) -> Option<u32> {
    let (_, rest) = path.split_once("/page/")?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://acme.example/news?page=3#top"),
            "https://acme.example/news"
        );
        assert_eq!(
            strip_query("https://acme.example/news"),
            "https://acme.example/news"
        );
    }

    #[test]
    fn test_path_page_number() {
        assert_eq!(path_page_number("/category/tech/page/4"), Some(4));
        assert_eq!(path_page_number("/category/tech"), None);
        assert_eq!(path_page_number("/page/notanumber"), None);
    }
}
