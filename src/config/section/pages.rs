//! `[pages]` section: per-page-type extraction rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: PageRules,
    pub post: PageRules,
    pub category: PageRules,
    pub product: PageRules,
    pub search: PageRules,
    pub tag: PageRules,
    pub author: PageRules,
    pub archive: PageRules,
    pub page: PageRules,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRules {
    /// Fixed title override (home and search accept templates).
    pub title: Option<String>,
    /// Fixed description override.
    pub description: Option<String>,
    /// Append " - {site name}" to extracted titles.
    pub title_prefix: bool,
    /// Word limit for description excerpts.
    pub description_limit: usize,
    pub robots: String,
    /// Fixed image override (home falls back to the site logo).
    pub image: Option<String>,
    /// schema.org type override for the page-level JSON-LD.
    pub schema: Option<String>,
    /// Fixed keyword list override.
    pub keywords: Option<Vec<String>>,
    /// Fixed author override.
    pub author: Option<String>,
}

impl Default for PageRules {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            title_prefix: true,
            description_limit: 30,
            robots: "index, follow".into(),
            image: None,
            schema: None,
            keywords: None,
            author: None,
        }
    }
}
