//! Security headers expressed as metas for environments that cannot set
//! real response headers.

use super::BuildInput;
use crate::tags::{MetaKind, MetaTags};

pub(crate) fn build(input: &BuildInput<'_>, meta: &mut MetaTags) {
    let security = &input.config.security;

    if let Some(csp) = &security.content_security_policy {
        meta.add_meta("Content-Security-Policy", csp, MetaKind::HttpEquiv);
    }
    if !security.referrer_policy.is_empty() {
        meta.add_meta("referrer", &security.referrer_policy, MetaKind::Name);
    }
    if !security.x_frame_options.is_empty() {
        meta.add_meta("X-Frame-Options", &security.x_frame_options, MetaKind::HttpEquiv);
    }
    if !security.x_content_type_options.is_empty() {
        meta.add_meta(
            "X-Content-Type-Options",
            &security.x_content_type_options,
            MetaKind::HttpEquiv,
        );
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

    #[test]
    fn test_security_metas() {
        let mut config = SeoConfig::default();
        config.security.content_security_policy = Some("default-src 'self'".into());
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
                config: &config,
                site: &site,
                page: &page,
                page_type: PageType::Home,
                model: &model,
                ctx: &ctx,
                images: &images,
            },
            &mut meta,
        );
        let html = meta.generate();
        assert!(html.contains(
            "<meta http-equiv=\"Content-Security-Policy\" content=\"default-src &#39;self&#39;\">"
        ));
        assert!(html.contains(
            "<meta name=\"referrer\" content=\"strict-origin-when-cross-origin\">"
        ));
        assert!(html.contains("<meta http-equiv=\"X-Frame-Options\" content=\"SAMEORIGIN\">"));
        assert!(html.contains(
            "<meta http-equiv=\"X-Content-Type-Options\" content=\"nosniff\">"
        ));
    }
}
