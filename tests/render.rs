//! End-to-end render checks across page types.

use seoforge::{AssetResolver, BatchContext, Model, Seo, SeoConfig, StaticRequest};
use serde_json::json;

fn config() -> SeoConfig {
    SeoConfig::from_toml_str(
        r#"
        [site]
        name = "Acme"
        description = "Acme news network"
        url = "https://acme.example"
        logo = "images/logo.png"

        [social.twitter]
        site = "@acme"
        "#,
    )
    .unwrap()
}

fn service(url: &str) -> Seo {
    Seo::new(
        config(),
        Box::new(AssetResolver::new("https://acme.example")),
        Box::new(StaticRequest::new(url)),
    )
    .unwrap()
}

#[test]
fn post_render_covers_all_tag_families() {
    let mut seo = service("https://acme.example/posts/breaking-news");
    seo.post(Model::from(json!({
        "title": "Breaking News",
        "content": "<p>A long story about what happened, told in several words.</p>",
        "photo": "uploads/breaking.jpg",
        "published_at": "2024-06-01T08:00:00Z",
        "updated_at": "2024-06-02T09:30:00Z",
        "slug": "breaking-news",
        "id": 42,
        "writer": { "name": "Jane Doe", "url": "https://acme.example/authors/jane" },
        "tags": [{ "name": "world" }],
        "categories": [{ "name": "News", "url": "https://acme.example/categories/news" }],
    })));

    let html = seo.render();

    // meta
    assert!(html.contains("<title>Breaking News - Acme</title>"));
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://acme.example/posts/breaking-news\">"
    ));
    assert!(html.contains("<meta name=\"robots\" content=\"index, follow\">"));
    assert!(html.contains(
        "<meta property=\"article:published_time\" content=\"2024-06-01T08:00:00Z\">"
    ));
    assert!(html.contains(
        "<meta property=\"article:modified_time\" content=\"2024-06-02T09:30:00Z\">"
    ));
    assert!(html.contains("<meta property=\"article:tag\" content=\"world\">"));
    assert!(html.contains("<meta name=\"articleSlug\" content=\"breaking-news\">"));

    // open graph
    assert!(html.contains("<meta property=\"og:type\" content=\"article\">"));
    assert!(html.contains("<meta property=\"og:site_name\" content=\"Acme\">"));
    assert!(html.contains(
        "<meta property=\"og:image\" content=\"https://acme.example/uploads/breaking.jpg\">"
    ));

    // twitter
    assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
    assert!(html.contains("<meta name=\"twitter:site\" content=\"@acme\">"));
    assert!(html.contains("<meta name=\"twitter:label1\" content=\"Reading time\">"));

    // json-ld
    assert!(html.contains("<script type=\"application/ld+json\">"));
    assert!(html.contains("\"@type\": \"NewsArticle\""));
    assert!(html.contains("\"headline\": \"Breaking News - Acme\""));
    assert!(html.contains("\"@type\": \"BreadcrumbList\""));
    assert!(html.contains("\"name\": \"Jane Doe\""));

    // breadcrumbs include the linked category
    let crumbs = seo.breadcrumbs();
    assert_eq!(crumbs.len(), 3);
    assert_eq!(crumbs[1].name, "News");
}

#[test]
fn sections_render_in_head_order() {
    let mut seo = Seo::new(
        {
            let mut config = config();
            config.performance.dns_prefetch = vec!["cdn.example".into()];
            config.analytics.ga4.measurement_id = Some("G-TEST".into());
            config
        },
        Box::new(AssetResolver::new("https://acme.example")),
        Box::new(StaticRequest::new("https://acme.example/posts/breaking-news")),
    )
    .unwrap();
    seo.post(Model::from(json!({ "title": "Breaking News" })));

    let html = seo.render();
    let hints = html.find("dns-prefetch").unwrap();
    let title = html.find("<title>").unwrap();
    let og = html.find("og:title").unwrap();
    let twitter = html.find("twitter:card").unwrap();
    let jsonld = html.find("application/ld+json").unwrap();
    let rss = html.find("application/rss+xml").unwrap();
    let analytics = html.find("gtag.js").unwrap();
    assert!(hints < title && title < og && og < twitter && twitter < jsonld);
    assert!(jsonld < rss && rss < analytics);
}

#[test]
fn paginated_listing_keeps_self_canonical() {
    let mut seo = service("https://acme.example/categories/news?page=3");
    seo.category(Model::from(json!({ "name": "News" })));
    let html = seo.render();
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://acme.example/categories/news?page=3\">"
    ));
    assert!(html.contains("<title>News - Acme - Page 3</title>"));
    assert!(html.contains("\"@type\": \"CollectionPage\""));
}

#[test]
fn canonical_to_first_page_when_configured() {
    let mut config = config();
    config.pagination.canonical_to_first = true;
    config.pagination.noindex_pagination = true;
    let mut seo = Seo::new(
        config,
        Box::new(AssetResolver::new("https://acme.example")),
        Box::new(StaticRequest::new(
            "https://acme.example/categories/news/page/3",
        )),
    )
    .unwrap();
    seo.category(Model::from(json!({ "name": "News" })));
    let html = seo.render();
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://acme.example/categories/news\">"
    ));
    assert!(html.contains("<meta name=\"robots\" content=\"noindex, follow\">"));
}

#[test]
fn hreflang_alternates_for_multilingual_sites() {
    let mut config = config();
    config.multilingual.enabled = true;
    config.multilingual.locales = vec!["en".into(), "de".into()];
    config.multilingual.default_locale = "en".into();
    config.multilingual.x_default = true;
    let mut seo = Seo::new(
        config,
        Box::new(AssetResolver::new("https://acme.example")),
        Box::new(StaticRequest::new("https://acme.example/en/news").with_locale("en")),
    )
    .unwrap();
    seo.category(Model::from(json!({ "name": "News" })));
    let html = seo.render();
    assert!(html.contains(
        "<link rel=\"alternate\" hreflang=\"de\" href=\"https://acme.example/de/news\">"
    ));
    assert!(html.contains(
        "<link rel=\"alternate\" hreflang=\"x-default\" href=\"https://acme.example/en/news\">"
    ));
}

#[test]
fn batch_context_falls_back_to_site_url() {
    let mut seo = Seo::new(
        config(),
        Box::new(AssetResolver::new("https://acme.example")),
        Box::new(BatchContext::new("en")),
    )
    .unwrap();
    seo.post(Model::from(json!({
        "title": "Breaking News",
        "categories": [{ "name": "News", "url": "https://acme.example/categories/news" }],
    })));
    let html = seo.render();
    assert!(html.contains("<link rel=\"canonical\" href=\"https://acme.example\">"));
    // request-less trails skip linked parents
    assert_eq!(seo.breadcrumbs().len(), 2);
}

#[test]
fn search_results_are_noindexed() {
    let mut seo = service("https://acme.example/search?q=rust");
    seo.search(Model::from(json!({ "query": "rust" })));
    let html = seo.render();
    assert!(html.contains("<title>Search results for: rust - Acme</title>"));
    assert!(html.contains("<meta name=\"robots\" content=\"noindex, follow\">"));
}
