//! Per-locale site identity, memoized behind a process-wide TTL cache.

use crate::config::SeoConfig;
use crate::context::Images;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Site identity shared by every builder on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteData {
    pub name: String,
    pub description: String,
    /// Logo resolved to an absolute URL at the logo size preset.
    pub logo: String,
    pub url: String,
    pub locale: String,
    pub publisher: String,
}

static CACHE: LazyLock<RwLock<FxHashMap<String, (Instant, SiteData)>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

impl SiteData {
    /// Compute site data from config, resolving the logo URL.
    pub fn compute(config: &SeoConfig, images: &Images<'_>, locale: &str) -> Self {
        let site = &config.site;
        Self {
            name: site.name.clone(),
            description: site.description.clone(),
            logo: images.logo(&site.logo),
            url: site.url.clone(),
            locale: locale.to_string(),
            publisher: site
                .publisher
                .clone()
                .unwrap_or_else(|| site.name.clone()),
        }
    }

    /// Cached per-locale site data.
    ///
    /// Entries expire after `config.cache_ttl` seconds. Recomputation is
    /// idempotent, so two racing callers at most compute the same value
    /// twice; last write wins.
    pub fn cached(config: &SeoConfig, images: &Images<'_>, locale: &str) -> Self {
        let key = format!("site_data_{locale}");
        let ttl = Duration::from_secs(config.cache_ttl);

        if let Some((stored_at, data)) = CACHE.read().get(&key) {
            if stored_at.elapsed() < ttl {
                return data.clone();
            }
        }

        let data = Self::compute(config, images, locale);
        CACHE.write().insert(key, (Instant::now(), data.clone()));
        data
    }

    /// Drop all cached entries (e.g. after a config reload).
    pub fn invalidate_cache() {
        CACHE.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageSizes;
    use crate::context::AssetResolver;

    fn config() -> SeoConfig {
        let mut config = SeoConfig::default();
        config.site.name = "Acme".into();
        config.site.description = "Acme news".into();
        config.site.url = "https://acme.example".into();
        config.site.logo = "images/logo.png".into();
        config
    }

    #[test]
    fn test_compute_resolves_logo_and_publisher() {
        let config = config();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        let data = SiteData::compute(&config, &images, "en");
        assert_eq!(data.logo, "https://acme.example/images/logo.png");
        assert_eq!(data.publisher, "Acme");
        assert_eq!(data.locale, "en");
    }

    #[test]
    fn test_explicit_publisher_wins() {
        let mut config = config();
        config.site.publisher = Some("Acme Media Group".into());
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        let data = SiteData::compute(&config, &images, "en");
        assert_eq!(data.publisher, "Acme Media Group");
    }

    #[test]
    fn test_cache_serves_stored_value() {
        let config = config();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        SiteData::invalidate_cache();
        let first = SiteData::cached(&config, &images, "test-locale");

        // a changed config is not observed until the entry expires
        let mut changed = config.clone();
        changed.site.name = "Renamed".into();
        let second = SiteData::cached(&changed, &images, "test-locale");
        assert_eq!(first, second);

        SiteData::invalidate_cache();
        let third = SiteData::cached(&changed, &images, "test-locale");
        assert_eq!(third.name, "Renamed");
    }
}
