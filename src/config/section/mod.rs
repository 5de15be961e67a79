//! Configuration section definitions.

mod defaults;
mod delivery;
mod features;
mod images;
mod multilingual;
mod organization;
mod pages;
mod site;
mod social;

pub use defaults::{DefaultsConfig, Fallbacks};
pub use delivery::{
    AnalyticsConfig, AppleWebAppConfig, Ga4Config, GeoConfig, GtmConfig, MobileConfig,
    ModulePreload, PerformanceConfig, PixelConfig, PreloadResource, SecurityConfig, YandexConfig,
};
pub use features::{
    AmpConfig, BreadcrumbConfig, EcommerceConfig, PaginationConfig, ReadingTimeConfig, RssConfig,
};
pub use images::{ImageSizes, Size};
pub use multilingual::MultilingualConfig;
pub use organization::{AddressConfig, ContactPointConfig, OrganizationConfig};
pub use pages::{PageRules, PagesConfig};
pub use site::SiteConfig;
pub use social::{FacebookConfig, PinterestConfig, SocialConfig, TwitterConfig};
