//! `[defaults]` section: global fallbacks used when a model lacks a field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Fallback share image path.
    pub image: String,
    /// Fallback logo path.
    pub logo: String,
    /// Keywords appended to every page's keyword list.
    pub keywords: Vec<String>,
    pub fallbacks: Fallbacks,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            image: "images/default.jpg".into(),
            logo: "images/default-logo.jpg".into(),
            keywords: Vec::new(),
            fallbacks: Fallbacks::default(),
        }
    }
}

/// Template strings with `:name`, `:query` and `:site` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub home_label: String,
    pub page_label: String,
    pub post_title: String,
    pub category_name: String,
    pub category_description: String,
    pub tag_name: String,
    pub tag_description: String,
    pub author_name: String,
    pub author_description: String,
    pub archive_name: String,
    pub archive_description: String,
    pub product_name: String,
    pub page_title: String,
    pub search_title: String,
    pub search_description: String,
    pub search_keyword: String,
    pub search_keyword_prefix: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            home_label: "Home".into(),
            page_label: "Page".into(),
            post_title: "Post".into(),
            category_name: "Category".into(),
            category_description: "Latest news in :name category".into(),
            tag_name: "Tag".into(),
            tag_description: "Browse all articles tagged with :name".into(),
            author_name: "Author".into(),
            author_description: "Articles written by :name".into(),
            archive_name: "Archive".into(),
            archive_description: "Browse our article archive".into(),
            product_name: "Product".into(),
            page_title: "Page".into(),
            search_title: "Search results for: :query - :site".into(),
            search_description: "Find news and articles about: :query".into(),
            search_keyword: "search".into(),
            search_keyword_prefix: "News ".into(),
        }
    }
}
