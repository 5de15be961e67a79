//! Standard meta tags: title, description, keywords, robots, canonical
//! and the article-scoped entries for posts.

use super::{BuildInput, path_page_number, strip_query};
use crate::page::PageType;
use crate::tags::{MetaKind, MetaTags};
use regex::Regex;
use std::sync::LazyLock;

static PAGE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/page/\d+").unwrap());

pub(crate) fn build(input: &BuildInput<'_>, meta: &mut MetaTags) {
    let page = input.page;
    let config = input.config;

    meta.set_title(&page.title);
    meta.set_description(&page.description);

    if !page.keywords.is_empty() {
        meta.add_meta("keywords", page.keywords.join(", "), MetaKind::Name);
    }
    meta.add_meta("author", &page.author, MetaKind::Name);

    let robots = if config.pagination.noindex_pagination && input.is_paginated() {
        "noindex, follow"
    } else {
        &page.robots
    };
    meta.add_meta("robots", robots, MetaKind::Name);

    if !input.site.publisher.is_empty() {
        meta.add_meta("publisher", &input.site.publisher, MetaKind::Name);
    }

    meta.set_canonical(canonical_url(input));

    if input.page_type == PageType::Post {
        article_meta(input, meta);
    }
}

/// Canonical policy: the current URL without query string, with any
/// `/page/N` path segment stripped; page 2+ keeps a self-referential
/// `?page=N` unless `canonical_to_first` points it at the first page.
fn canonical_url(input: &BuildInput<'_>) -> String {
    let Some(raw) = input.ctx.current_url() else {
        return input.site.url.clone();
    };
    let mut url = strip_query(&raw);

    let mut page = input.ctx.page_number();
    if let Some(path_page) = input.ctx.path().and_then(|p| path_page_number(&p)) {
        page = path_page;
        url = PAGE_SEGMENT_RE.replace(&url, "").into_owned();
    }

    if page > 1 && !input.config.pagination.canonical_to_first {
        let separator = if url.contains('?') { '&' } else { '?' };
        url.push_str(&format!("{separator}page={page}"));
    }
    url
}

/// Article-scoped metas, only meaningful once the post has a publish date.
fn article_meta(input: &BuildInput<'_>, meta: &mut MetaTags) {
    let page = input.page;
    let Some(published) = page.published_at.as_deref() else {
        return;
    };
    let fields = input.model.fields();

    meta.add_meta("article:published_time", published, MetaKind::Property);
    meta.add_meta(
        "article:modified_time",
        page.modified_at.as_deref().unwrap_or(published),
        MetaKind::Property,
    );
    meta.add_meta("article:author", &page.author, MetaKind::Property);
    if !input.site.publisher.is_empty() {
        meta.add_meta("article:publisher", &input.site.publisher, MetaKind::Property);
    }

    meta.add_meta("contentType", "post", MetaKind::Name);
    if let Some(id) = fields
        .u64_first(&["id"])
        .map(|id| id.to_string())
        .or_else(|| fields.str_first(&["id"]).map(String::from))
    {
        meta.add_meta("postID", id, MetaKind::Name);
    }
    if let Some(slug) = fields.str_first(&["slug"]) {
        meta.add_meta("articleSlug", slug, MetaKind::Name);
    }
    if fields.str_first(&["video_url"]).is_some_and(|v| !v.is_empty()) {
        meta.add_meta("hasVideo", "true", MetaKind::Name);
    }

    for tag in fields.pluck_str("tags", "name") {
        meta.add_meta("article:tag", tag, MetaKind::Property);
    }
}
