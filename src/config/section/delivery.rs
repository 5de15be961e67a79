//! Delivery concerns: performance hints, mobile, security, geo, analytics.

use serde::{Deserialize, Serialize};

// ============================================================================
// [performance]
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Bare domains, emitted as `//domain`.
    pub dns_prefetch: Vec<String>,
    /// Origins to preconnect (crossorigin).
    pub preconnect: Vec<String>,
    pub preload: Vec<PreloadResource>,
    pub prefetch: Vec<String>,
    pub prerender: Vec<String>,
    pub modulepreload: Vec<ModulePreload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadResource {
    pub href: String,
    /// `as` attribute: style, script, font, image, ...
    #[serde(rename = "as")]
    pub kind: String,
    /// Optional MIME type attribute.
    #[serde(rename = "type")]
    pub mime: Option<String>,
    /// Optional onload handler (e.g. async CSS swap).
    pub onload: Option<String>,
}

impl Default for PreloadResource {
    fn default() -> Self {
        Self {
            href: String::new(),
            kind: "script".into(),
            mime: None,
            onload: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulePreload {
    pub href: String,
    #[serde(rename = "type")]
    pub mime: Option<String>,
}

// ============================================================================
// [mobile]
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
    pub theme_color: String,
    pub apple_web_app: AppleWebAppConfig,
    /// Web app manifest path, emitted as a `<link rel="manifest">`.
    pub manifest: Option<String>,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            theme_color: "#ffffff".into(),
            apple_web_app: AppleWebAppConfig::default(),
            manifest: Some("/manifest.json".into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppleWebAppConfig {
    pub enabled: bool,
    pub status_bar_style: String,
    pub title: Option<String>,
}

impl Default for AppleWebAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            status_bar_style: "default".into(),
            title: None,
        }
    }
}

// ============================================================================
// [security]
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub content_security_policy: Option<String>,
    pub referrer_policy: String,
    pub x_frame_options: String,
    pub x_content_type_options: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            content_security_policy: None,
            referrer_policy: "strict-origin-when-cross-origin".into(),
            x_frame_options: "SAMEORIGIN".into(),
            x_content_type_options: "nosniff".into(),
        }
    }
}

// ============================================================================
// [geo]
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub enabled: bool,
    /// ISO country code for `geo.regions`.
    pub country: Option<String>,
    /// ISO region code for `geo.region`, e.g. "US-NY".
    pub region: Option<String>,
    pub placename: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ============================================================================
// [analytics]
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub ga4: Ga4Config,
    pub gtm: GtmConfig,
    pub yandex: YandexConfig,
    pub facebook: PixelConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ga4Config {
    pub measurement_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GtmConfig {
    pub container_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YandexConfig {
    pub counter_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelConfig {
    pub pixel_id: Option<String>,
}
