//! LinkedIn-sized image variant on top of the Open Graph set.
//!
//! Only adds a second og:image when the LinkedIn preset resolves to a
//! different URL than the primary image; resolvers without sized routes
//! would otherwise overwrite the primary dimensions with LinkedIn's.

use super::BuildInput;
use crate::tags::{OgImage, OpenGraph};

pub(crate) fn build(input: &BuildInput<'_>, og: &mut OpenGraph) {
    let Some(image) = input.page.image.as_deref().filter(|i| !i.is_empty()) else {
        return;
    };

    let url = input.images.linkedin(image);
    if og.images().iter().any(|existing| existing.url == url) {
        return;
    }

    let size = input.images.sizes().linkedin;
    og.add_image(OgImage {
        url,
        width: Some(size.width),
        height: Some(size.height),
        mime: None,
        alt: None,
    });
}
