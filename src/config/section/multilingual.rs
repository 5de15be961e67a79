//! `[multilingual]` section: hreflang alternates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MultilingualConfig {
    pub enabled: bool,
    /// Locales to emit alternates for (including the current one).
    pub locales: Vec<String>,
    pub default_locale: String,
    /// Also emit an `x-default` alternate pointing at the default locale.
    pub x_default: bool,
}

impl Default for MultilingualConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            locales: Vec::new(),
            default_locale: "en".into(),
            x_default: false,
        }
    }
}
