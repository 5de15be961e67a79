//! schema.org document builders.
//!
//! Pure functions producing ordered `serde_json::Map` documents. Absent
//! inputs are omitted rather than serialized as null, and no builder
//! errors: bad input yields a smaller (possibly empty) document.

mod article;
mod breadcrumb;
mod extra;
mod organization;
mod product;
mod site;

pub use article::{news_article, video};
pub use breadcrumb::{Crumb, breadcrumb_items, breadcrumb_schema};
pub use extra::{
    EventInput, Faq, HowToStep, ReviewInput, aggregate_rating, brand, event, faq, how_to,
    local_business, review,
};
pub use organization::organization;
pub use product::product;
pub use site::{collection_page, web_page, web_site};

use serde_json::{Map, Value, json};

/// A fresh document with `@context` and `@type` in front.
pub(crate) fn doc(kind: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), json!("https://schema.org"));
    map.insert("@type".into(), json!(kind));
    map
}
