//! Open Graph tags for the current page.

use super::BuildInput;
use crate::page::PageType;
use crate::tags::{OgImage, OpenGraph};

pub(crate) fn build(input: &BuildInput<'_>, og: &mut OpenGraph) {
    let page = input.page;

    og.set_title(&page.title);
    og.set_description(&page.description);
    og.set_url(input.current_url());
    og.set_type(if input.page_type == PageType::Post {
        "article"
    } else {
        "website"
    });
    og.add_property("locale", &input.site.locale);
    og.add_property("site_name", &input.site.name);

    if let Some(image) = page.image.as_deref().filter(|i| !i.is_empty()) {
        let size = input.images.sizes().og;
        og.add_image(OgImage {
            url: input.images.og(image),
            width: Some(size.width),
            height: Some(size.height),
            mime: Some("image/webp".into()),
            alt: Some(page.title.clone()),
        });
    }

    if input.page_type == PageType::Post {
        if let Some(published) = page.published_at.as_deref() {
            og.add_property("article:published_time", published);
            og.add_property(
                "article:modified_time",
                page.modified_at.as_deref().unwrap_or(published),
            );
            og.add_property("article:author", &page.author);
            if !input.site.publisher.is_empty() {
                og.add_property("article:publisher", &input.site.publisher);
            }
        }
    }
}
