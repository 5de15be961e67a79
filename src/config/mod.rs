//! Library configuration loaded from `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/         # Configuration section definitions
//! │   ├── defaults     # [defaults] fallback texts and images
//! │   ├── delivery     # [performance] [mobile] [security] [geo] [analytics]
//! │   ├── features     # [breadcrumbs] [reading_time] [amp] [rss] [pagination] [ecommerce]
//! │   ├── images       # [images] per-platform sizes
//! │   ├── multilingual # [multilingual]
//! │   ├── organization # [organization]
//! │   ├── pages        # [pages.*] per-page-type rules
//! │   ├── site         # [site]
//! │   └── social       # [social.*]
//! └── mod.rs           # SeoConfig (this file)
//! ```
//!
//! Every section is optional in the file; defaults produce a working
//! configuration for a single-locale site at `http://localhost`.

pub mod section;

pub use section::{
    AddressConfig, AmpConfig, AnalyticsConfig, AppleWebAppConfig, BreadcrumbConfig,
    ContactPointConfig, DefaultsConfig, EcommerceConfig, FacebookConfig, Fallbacks, Ga4Config,
    GeoConfig, GtmConfig, ImageSizes, MobileConfig, ModulePreload, MultilingualConfig,
    OrganizationConfig, PageRules, PagesConfig, PaginationConfig, PerformanceConfig,
    PinterestConfig, PixelConfig, PreloadResource, ReadingTimeConfig, RssConfig, SecurityConfig,
    SiteConfig, Size, SocialConfig, TwitterConfig, YandexConfig,
};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `seo.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Seconds that cached per-locale site data stays fresh.
    pub cache_ttl: u64,

    /// Site identity (name, url, locale, logo)
    pub site: SiteConfig,

    /// Fallback texts, images and keywords
    pub defaults: DefaultsConfig,

    /// Per-page-type title/description/robots rules
    pub pages: PagesConfig,

    /// Per-platform image dimensions
    pub images: ImageSizes,

    /// Social network handles and verification
    pub social: SocialConfig,

    /// Publisher identity for JSON-LD
    pub organization: OrganizationConfig,

    /// hreflang alternates
    pub multilingual: MultilingualConfig,

    /// Breadcrumb labels
    pub breadcrumbs: BreadcrumbConfig,

    /// Reading time estimation
    pub reading_time: ReadingTimeConfig,

    /// AMP variant links
    pub amp: AmpConfig,

    /// RSS feed discovery link
    pub rss: RssConfig,

    /// Pagination canonical / robots policy
    pub pagination: PaginationConfig,

    /// Product offer defaults
    pub ecommerce: EcommerceConfig,

    /// Resource hints (dns-prefetch, preconnect, preload)
    pub performance: PerformanceConfig,

    /// theme-color, apple web app, manifest
    pub mobile: MobileConfig,

    /// Security response hint metas
    pub security: SecurityConfig,

    /// geo.* position metas
    pub geo: GeoConfig,

    /// GA4 / GTM / Yandex / Facebook Pixel snippets
    pub analytics: AnalyticsConfig,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            cache_ttl: 86_400,
            site: SiteConfig::default(),
            defaults: DefaultsConfig::default(),
            pages: PagesConfig::default(),
            images: ImageSizes::default(),
            social: SocialConfig::default(),
            organization: OrganizationConfig::default(),
            multilingual: MultilingualConfig::default(),
            breadcrumbs: BreadcrumbConfig::default(),
            reading_time: ReadingTimeConfig::default(),
            amp: AmpConfig::default(),
            rss: RssConfig::default(),
            pagination: PaginationConfig::default(),
            ecommerce: EcommerceConfig::default(),
            performance: PerformanceConfig::default(),
            mobile: MobileConfig::default(),
            security: SecurityConfig::default(),
            geo: GeoConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl SeoConfig {
    /// Parse configuration from a TOML string, warning on unknown fields.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, None);
        }

        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Some(path));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: Option<&Path>) {
        match path.and_then(|p| p.file_name()) {
            Some(name) => log!("config"; "unknown fields in {}, ignoring:", name.to_string_lossy()),
            None => log!("config"; "unknown fields, ignoring:"),
        }
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_usable() {
        let config = SeoConfig::default();
        assert_eq!(config.cache_ttl, 86_400);
        assert_eq!(config.site.url, "http://localhost");
        assert_eq!(config.site.locale, "en");
        assert_eq!(config.images.og.as_param(), "1200x630");
        assert_eq!(config.social.twitter.card_type, "summary_large_image");
        assert!(config.pagination.enabled);
        assert!(!config.pagination.canonical_to_first);
    }

    #[test]
    fn parses_partial_toml() {
        let content = r#"
[site]
name = "Acme News"
url = "https://acme.example"
locale = "en"

[social.twitter]
site = "@acme"

[pages.post]
description_limit = 40
"#;
        let config = SeoConfig::from_toml_str(content).unwrap();
        assert_eq!(config.site.name, "Acme News");
        assert_eq!(config.site.url, "https://acme.example");
        assert_eq!(config.social.twitter.site.as_deref(), Some("@acme"));
        assert_eq!(config.pages.post.description_limit, 40);
        // untouched sections keep defaults
        assert_eq!(config.pages.home.robots, "index, follow");
        assert_eq!(config.mobile.theme_color, "#ffffff");
    }

    #[test]
    fn collects_unknown_fields() {
        let content = r#"
[site]
name = "Acme"
typo_field = true

[unknown_section]
key = 1
"#;
        let (config, ignored) = SeoConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.name, "Acme");
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("typo_field")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn known_fields_are_not_flagged() {
        let content = r#"
[multilingual]
enabled = true
locales = ["en", "fr"]
x_default = true

[performance]
dns_prefetch = ["fonts.googleapis.com"]

[[performance.preload]]
href = "/css/app.css"
as = "style"
"#;
        let (config, ignored) = SeoConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty(), "unexpected unknown fields: {ignored:?}");
        assert!(config.multilingual.enabled);
        assert_eq!(config.performance.preload[0].kind, "style");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nname = \"From Disk\"").unwrap();
        let config = SeoConfig::load(file.path()).unwrap();
        assert_eq!(config.site.name, "From Disk");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(SeoConfig::load("/nonexistent/seo.toml").is_err());
    }
}
