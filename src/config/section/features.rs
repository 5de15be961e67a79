//! Feature toggles: breadcrumbs, reading time, AMP, RSS, pagination, commerce.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    pub home_label: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_label: "Home".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingTimeConfig {
    pub enabled: bool,
    pub words_per_minute: u32,
    /// Per-locale label templates with a `:minutes` placeholder;
    /// overrides the built-in translations.
    pub translations: HashMap<String, String>,
}

impl Default for ReadingTimeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            words_per_minute: 200,
            translations: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmpConfig {
    pub enabled: bool,
    /// Named route for AMP pages; takes a `slug` parameter.
    /// Without it the post URL gets an "/amp" path prefix.
    pub route: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RssConfig {
    pub enabled: bool,
    pub url: String,
}

impl Default for RssConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "/feed".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub enabled: bool,
    /// Point canonicals of page 2+ at the first page instead of themselves.
    /// Off by default: self-referential canonicals index paginated archives
    /// correctly.
    pub canonical_to_first: bool,
    /// Emit "noindex, follow" robots on page 2+.
    pub noindex_pagination: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            canonical_to_first: false,
            noindex_pagination: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommerceConfig {
    /// Offer currency when the product model has none.
    pub default_currency: String,
}

impl Default for EcommerceConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".into(),
        }
    }
}
