//! Twitter Card tags, including the reading-time label slot.

use super::BuildInput;
use crate::tags::TwitterCard;
use crate::utils::reading_time;

pub(crate) fn build(input: &BuildInput<'_>, card: &mut TwitterCard) {
    let page = input.page;
    let config = input.config;

    card.set_type(&config.social.twitter.card_type);
    card.set_title(&page.title);
    card.set_description(&page.description);

    let image = match page.image.as_deref().filter(|i| !i.is_empty()) {
        Some(image) => input.images.twitter(image),
        None => input.images.twitter(&config.defaults.image),
    };
    card.set_image(image);

    if let Some(handle) = &config.social.twitter.site {
        card.add_value("site", handle);
    }
    if let Some(handle) = &config.social.twitter.creator {
        card.add_value("creator", handle);
    }
    card.add_value("image:alt", &page.title);

    if config.reading_time.enabled {
        if let Some(content) = input
            .model
            .fields()
            .str_first(&["content"])
            .filter(|c| !c.is_empty())
        {
            let overrides = (!config.reading_time.translations.is_empty())
                .then_some(&config.reading_time.translations);
            card.add_value("label1", "Reading time");
            card.add_value(
                "data1",
                reading_time::format(
                    content,
                    config.reading_time.words_per_minute,
                    &input.ctx.locale(),
                    overrides,
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImageSizes, SeoConfig};
    use crate::context::{AssetResolver, Images, StaticRequest};
    use crate::model::Model;
    use crate::page::{PageData, PageType};
    use crate::site::SiteData;
    use serde_json::json as j;

    fn site() -> SiteData {
        SiteData {
            name: "Acme".into(),
            description: String::new(),
            logo: String::new(),
            url: "https://acme.example".into(),
            locale: "en".into(),
            publisher: "Acme".into(),
        }
    }

    #[test]
    fn test_card_with_reading_time() {
        let mut config = SeoConfig::default();
        config.social.twitter.site = Some("@acme".into());
        let site = site();
        let page = PageData {
            title: "Big Story - Acme".into(),
            description: "Something happened.".into(),
            image: Some("uploads/cover.jpg".into()),
            ..Default::default()
        };
        let content = vec!["word"; 400].join(" ");
        let model = Model::from(j!({ "content": content }));
        let ctx = StaticRequest::new("https://acme.example/posts/big-story");
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        let mut card = TwitterCard::default();
        build(
            &BuildInput {
                config: &config,
                site: &site,
                page: &page,
                page_type: PageType::Post,
                model: &model,
                ctx: &ctx,
                images: &images,
            },
            &mut card,
        );
        let html = card.generate();
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta name=\"twitter:site\" content=\"@acme\">"));
        assert!(html.contains(
            "<meta name=\"twitter:image\" content=\"https://acme.example/uploads/cover.jpg\">"
        ));
        assert!(html.contains("<meta name=\"twitter:image:alt\" content=\"Big Story - Acme\">"));
        assert!(html.contains("<meta name=\"twitter:label1\" content=\"Reading time\">"));
        assert!(html.contains("<meta name=\"twitter:data1\" content=\"2 min read\">"));
    }

    #[test]
    fn test_default_image_fallback() {
        let config = SeoConfig::default();
        let site = site();
        let page = PageData {
            title: "Acme".into(),
            ..Default::default()
        };
        let model = Model::empty();
        let ctx = StaticRequest::new("https://acme.example");
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        let mut card = TwitterCard::default();
        build(
            &BuildInput {
                config: &config,
                site: &site,
                page: &page,
                page_type: PageType::Home,
                model: &model,
                ctx: &ctx,
                images: &images,
            },
            &mut card,
        );
        let html = card.generate();
        assert!(html.contains(
            "<meta name=\"twitter:image\" content=\"https://acme.example/images/default.jpg\">"
        ));
        assert!(!html.contains("twitter:label1"));
    }
}
