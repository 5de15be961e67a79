//! WebSite, WebPage and CollectionPage documents.

use super::doc;
use crate::config::SeoConfig;
use crate::page::PageData;
use crate::site::SiteData;
use serde_json::{Map, Value, json};

/// Site-level WebSite node with a SearchAction.
pub fn web_site(site: &SiteData, config: &SeoConfig) -> Map<String, Value> {
    let search_url = config
        .site
        .search_url
        .clone()
        .unwrap_or_else(|| format!("{}/search?q={{search_term_string}}", site.url));

    let mut schema = doc("WebSite");
    schema.insert("name".into(), json!(site.name));
    schema.insert("url".into(), json!(site.url));
    schema.insert(
        "potentialAction".into(),
        json!({
            "@type": "SearchAction",
            "target": search_url,
            "query-input": "required name=search_term_string",
        }),
    );
    schema
}

/// Page-level WebPage node with a speakable hint.
pub fn web_page(page: &PageData, current_url: &str) -> Map<String, Value> {
    let mut schema = doc("WebPage");
    schema.insert("name".into(), json!(page.title));
    schema.insert("url".into(), json!(current_url));
    schema.insert(
        "speakable".into(),
        json!({
            "@type": "SpeakableSpecification",
            "cssSelector": [".article-header"],
        }),
    );
    schema
}

/// Listing-page CollectionPage node.
pub fn collection_page(page: &PageData, current_url: &str) -> Map<String, Value> {
    let mut schema = doc("CollectionPage");
    schema.insert("name".into(), json!(page.title));
    schema.insert("description".into(), json!(page.description));
    schema.insert("url".into(), json!(current_url));
    schema
}
