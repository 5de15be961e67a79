//! `[images]` section: per-platform image size presets.

use serde::{Deserialize, Serialize};

/// Pixel dimensions, serialized as `{ width = ..., height = ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// "1200x630" form used by sized-image routes.
    pub fn as_param(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSizes {
    /// Named image route on the resolver; when set, image paths are reduced
    /// to their basename before resolution (the route locates the file).
    pub route: Option<String>,
    pub og: Size,
    pub twitter: Size,
    pub linkedin: Size,
    pub logo: Size,
    /// Candidate sizes for NewsArticle image lists.
    pub schema: Vec<Size>,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            route: None,
            og: Size::new(1200, 630),
            twitter: Size::new(1200, 630),
            linkedin: Size::new(1200, 627),
            logo: Size::new(265, 85),
            schema: vec![
                Size::new(1920, 1440),
                Size::new(1920, 1080),
                Size::new(1800, 1800),
                Size::new(1200, 630),
            ],
        }
    }
}
