//! `[social]` section: per-network handles and verification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: TwitterConfig,
    pub facebook: FacebookConfig,
    pub pinterest: PinterestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// twitter:card value.
    pub card_type: String,
    /// @handle of the site.
    pub site: Option<String>,
    /// @handle of the content creator.
    pub creator: Option<String>,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            card_type: "summary_large_image".into(),
            site: None,
            creator: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacebookConfig {
    pub app_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PinterestConfig {
    /// pinterest-site-verification token.
    pub verify: Option<String>,
}
