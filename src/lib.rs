//! Server-side SEO tag assembly.
//!
//! Given a page type (home, post, category, product, ...) and a loosely-typed
//! content model, builds the full `<head>` payload: meta/link tags, Open
//! Graph, Twitter Cards and schema.org JSON-LD.
//!
//! # Example
//!
//! ```ignore
//! let config = SeoConfig::from_toml_str(toml_str)?;
//! let mut seo = Seo::new(
//!     config,
//!     Box::new(AssetResolver::new("https://example.com")),
//!     Box::new(StaticRequest::new("https://example.com/posts/breaking-news")),
//! )?;
//!
//! let html = seo.post(Model::from(json!({ "title": "Breaking News" }))).render();
//! ```

pub mod build;
pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod model;
pub mod page;
pub mod schema;
pub mod service;
pub mod site;
pub mod tags;
pub mod utils;
pub mod validate;

pub use build::multilingual::AlternateUrlFn;
pub use config::SeoConfig;
pub use context::{AssetResolver, BatchContext, RequestContext, StaticRequest, UrlResolver};
pub use error::{BuildError, ValidateError};
pub use model::Model;
pub use page::{PageData, PageType};
pub use service::{Outputs, Seo};
pub use site::SiteData;
