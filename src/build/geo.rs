//! Geographic metas (geo.* and ICBM) for location-scoped sites.

use super::BuildInput;
use crate::tags::{MetaKind, MetaTags};

pub(crate) fn build(input: &BuildInput<'_>, meta: &mut MetaTags) {
    let geo = &input.config.geo;
    if !geo.enabled {
        return;
    }

    if let Some(region) = &geo.region {
        meta.add_meta("geo.region", region, MetaKind::Name);
    }
    if let Some(placename) = &geo.placename {
        meta.add_meta("geo.placename", placename, MetaKind::Name);
    }
    if let (Some(lat), Some(lon)) = (geo.latitude, geo.longitude) {
        meta.add_meta("geo.position", format!("{lat};{lon}"), MetaKind::Name);
        meta.add_meta("ICBM", format!("{lat}, {lon}"), MetaKind::Name);
    }
    if let Some(country) = &geo.country {
        meta.add_meta("geo.regions", country, MetaKind::Name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImageSizes, SeoConfig};
    use crate::context::{AssetResolver, BatchContext, Images};
    use crate::model::Model;
    use crate::page::{PageData, PageType};
    use crate::site::SiteData;

    fn run(config: &SeoConfig) -> String {
        let site = SiteData {
            name: "Acme".into(),
            description: String::new(),
            logo: String::new(),
            url: "https://acme.example".into(),
            locale: "en".into(),
            publisher: "Acme".into(),
        };
        let page = PageData::default();
        let model = Model::empty();
        let ctx = BatchContext::new("en");
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");

        let mut meta = MetaTags::default();
        build(
            &BuildInput {
                config,
                site: &site,
                page: &page,
                page_type: PageType::Home,
                model: &model,
                ctx: &ctx,
                images: &images,
            },
            &mut meta,
        );
        meta.generate()
    }

    #[test]
    fn test_disabled_by_default() {
        assert!(!run(&SeoConfig::default()).contains("geo."));
    }

    #[test]
    fn test_full_location() {
        let mut config = SeoConfig::default();
        config.geo.enabled = true;
        config.geo.country = Some("DE".into());
        config.geo.region = Some("DE-BE".into());
        config.geo.placename = Some("Berlin".into());
        config.geo.latitude = Some(52.52);
        config.geo.longitude = Some(13.405);
        let html = run(&config);
        assert!(html.contains("<meta name=\"geo.region\" content=\"DE-BE\">"));
        assert!(html.contains("<meta name=\"geo.placename\" content=\"Berlin\">"));
        assert!(html.contains("<meta name=\"geo.position\" content=\"52.52;13.405\">"));
        assert!(html.contains("<meta name=\"ICBM\" content=\"52.52, 13.405\">"));
        assert!(html.contains("<meta name=\"geo.regions\" content=\"DE\">"));
    }

    #[test]
    fn test_position_requires_both_coordinates() {
        let mut config = SeoConfig::default();
        config.geo.enabled = true;
        config.geo.latitude = Some(52.52);
        let html = run(&config);
        assert!(!html.contains("geo.position"));
        assert!(!html.contains("ICBM"));
    }
}
