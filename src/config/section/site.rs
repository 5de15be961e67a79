//! `[site]` section: identity of the site the tags describe.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used in titles, publisher fields and og:site_name.
    pub name: String,
    /// Default description for home and fallback pages.
    pub description: String,
    /// Absolute base URL, no trailing slash required.
    pub url: String,
    /// Logo path or absolute URL.
    pub logo: String,
    /// Publisher name when it differs from the site name.
    pub publisher: Option<String>,
    /// Default locale when the request context has none.
    pub locale: String,
    /// Search endpoint template for the WebSite SearchAction.
    /// `{search_term_string}` is the placeholder.
    pub search_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            url: "http://localhost".into(),
            logo: "images/default-logo.jpg".into(),
            publisher: None,
            locale: "en".into(),
            search_url: None,
        }
    }
}
