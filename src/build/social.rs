//! Social-network verification metas.

use super::BuildInput;
use crate::tags::{MetaKind, MetaTags};

pub(crate) fn build(input: &BuildInput<'_>, meta: &mut MetaTags) {
    if let Some(token) = &input.config.social.pinterest.verify {
        meta.add_meta("pinterest-site-verification", token, MetaKind::Name);
    }
    if let Some(app_id) = &input.config.social.facebook.app_id {
        meta.add_meta("fb:app_id", app_id, MetaKind::Property);
    }
}
