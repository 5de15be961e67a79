//! Open Graph property map and image list.

use crate::utils::html;

/// An `og:image` with its optional structured properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OgImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub mime: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OpenGraph {
    /// Insertion-ordered, last write wins in place.
    properties: Vec<(String, String)>,
    images: Vec<OgImage>,
}

impl OpenGraph {
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.add_property("og:title", title)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_property("og:description", description)
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.add_property("og:url", url)
    }

    pub fn set_type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.add_property("og:type", kind)
    }

    pub fn add_property(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let property = property.into();
        let value = value.into();
        if let Some(entry) = self.properties.iter_mut().find(|(p, _)| *p == property) {
            entry.1 = value;
        } else {
            self.properties.push((property, value));
        }
        self
    }

    /// Add an image, deduplicating by URL: a repeated URL merges its
    /// non-null fields into the existing entry.
    pub fn add_image(&mut self, image: OgImage) -> &mut Self {
        if let Some(existing) = self.images.iter_mut().find(|i| i.url == image.url) {
            if image.width.is_some() {
                existing.width = image.width;
            }
            if image.height.is_some() {
                existing.height = image.height;
            }
            if image.mime.is_some() {
                existing.mime = image.mime;
            }
            if image.alt.is_some() {
                existing.alt = image.alt;
            }
        } else {
            self.images.push(image);
        }
        self
    }

    pub fn images(&self) -> &[OgImage] {
        &self.images
    }

    pub fn generate(&self) -> String {
        let mut out = String::new();

        for (property, value) in &self.properties {
            push_property(&mut out, property, value);
        }

        for image in &self.images {
            push_property(&mut out, "og:image", &image.url);
            if let Some(width) = image.width {
                push_property(&mut out, "og:image:width", &width.to_string());
            }
            if let Some(height) = image.height {
                push_property(&mut out, "og:image:height", &height.to_string());
            }
            if let Some(mime) = &image.mime {
                push_property(&mut out, "og:image:type", mime);
            }
            if let Some(alt) = &image.alt {
                push_property(&mut out, "og:image:alt", alt);
            }
        }

        out
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn push_property(out: &mut String, property: &str, value: &str) {
    out.push_str(&format!(
        "<meta property=\"{}\" content=\"{}\">\n",
        html::escape_attr(property),
        html::escape_attr(value)
    ));
}
