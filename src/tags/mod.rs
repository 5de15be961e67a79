//! Tag accumulators.
//!
//! Builders push typed entries into these during `set()`; `generate()`
//! renders HTML and is idempotent. All four support `reset()` so one
//! service instance can serve successive pages.

mod jsonld;
mod meta;
mod opengraph;
mod twitter;

pub use jsonld::JsonLd;
pub use meta::{MetaKind, MetaTags};
pub use opengraph::{OgImage, OpenGraph};
pub use twitter::TwitterCard;
