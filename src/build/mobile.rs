//! Mobile-rendering metas: theme color, iOS web-app hints, manifest link.

use super::BuildInput;
use crate::tags::{MetaKind, MetaTags};

pub(crate) fn build(input: &BuildInput<'_>, meta: &mut MetaTags) {
    let mobile = &input.config.mobile;

    if !mobile.theme_color.is_empty() {
        meta.add_meta("theme-color", &mobile.theme_color, MetaKind::Name);
    }

    if mobile.apple_web_app.enabled {
        meta.add_meta("apple-mobile-web-app-capable", "yes", MetaKind::Name);
        meta.add_meta(
            "apple-mobile-web-app-status-bar-style",
            &mobile.apple_web_app.status_bar_style,
            MetaKind::Name,
        );
        if let Some(title) = &mobile.apple_web_app.title {
            meta.add_meta("apple-mobile-web-app-title", title, MetaKind::Name);
        }
    }

    if let Some(manifest) = &mobile.manifest {
        meta.add_meta("manifest", manifest, MetaKind::Link);
    }
}
