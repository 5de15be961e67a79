//! `[organization]` section: publisher identity for JSON-LD.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Organization name; falls back to the site publisher, then site name.
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub logo_width: u32,
    pub logo_height: u32,
    /// Social profile URLs for `sameAs`.
    pub same_as: Vec<String>,
    pub contact_point: ContactPointConfig,
    pub address: AddressConfig,
    /// ISO date, e.g. "2012-04-01".
    pub founding_date: Option<String>,
    /// URL of the editorial standards page.
    pub publishing_principles: Option<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: None,
            alternate_name: None,
            description: None,
            logo_width: 265,
            logo_height: 85,
            same_as: Vec::new(),
            contact_point: ContactPointConfig::default(),
            address: AddressConfig::default(),
            founding_date: None,
            publishing_principles: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPointConfig {
    pub email: Option<String>,
    pub contact_type: String,
    pub available_language: Vec<String>,
    pub area_served: Option<String>,
}

impl Default for ContactPointConfig {
    fn default() -> Self {
        Self {
            email: None,
            contact_type: "customer service".into(),
            available_language: Vec::new(),
            area_served: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub address_country: Option<String>,
    pub address_locality: Option<String>,
}
