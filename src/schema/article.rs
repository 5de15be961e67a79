//! NewsArticle and VideoObject documents for posts.

use super::doc;
use crate::config::{SeoConfig, Size};
use crate::context::Images;
use crate::model::Model;
use crate::page::PageData;
use crate::site::SiteData;
use crate::utils::{reading_time, text};
use serde_json::{Map, Value, json};
use url::Url;

pub fn news_article(
    page: &PageData,
    model: &Model,
    site: &SiteData,
    config: &SeoConfig,
    images: &Images<'_>,
    current_url: &str,
) -> Map<String, Value> {
    let fields = model.fields();

    let mut schema = doc("NewsArticle");
    schema.insert("mainEntityOfPage".into(), json!(current_url));
    schema.insert("headline".into(), json!(page.title));
    schema.insert("description".into(), json!(page.description));
    schema.insert(
        "image".into(),
        Value::Array(sized_images(page.image.as_deref(), config, images)),
    );
    schema.insert("datePublished".into(), json!(page.published_at));
    schema.insert(
        "dateModified".into(),
        json!(page.modified_at.as_ref().or(page.published_at.as_ref())),
    );
    schema.insert("author".into(), author(model, site, config, images));
    schema.insert("publisher".into(), publisher(site, config));

    if let Some(content) = fields.str_first(&["content"]) {
        let words = text::word_count(content);
        if words > 0 {
            schema.insert("wordCount".into(), json!(words));
        }
        if config.reading_time.enabled {
            schema.insert(
                "timeRequired".into(),
                json!(reading_time::to_iso8601(
                    content,
                    config.reading_time.words_per_minute
                )),
            );
        }
    }

    schema
}

/// VideoObject for posts carrying a `video_url`.
pub fn video(
    page: &PageData,
    model: &Model,
    site: &SiteData,
    config: &SeoConfig,
    images: &Images<'_>,
) -> Map<String, Value> {
    let thumbnail = match page.image.as_deref() {
        Some(image) if !image.is_empty() => {
            images.resolve(&relative_path(image), Size::new(1920, 1440))
        }
        _ => images.resolve(&config.defaults.image, Size::new(1920, 1440)),
    };

    let mut schema = doc("VideoObject");
    schema.insert("name".into(), json!(page.title));
    schema.insert("uploadDate".into(), json!(page.published_at));
    schema.insert("description".into(), json!(page.description));
    schema.insert("thumbnailUrl".into(), json!(thumbnail));
    schema.insert(
        "embedUrl".into(),
        json!(model.fields().str_first(&["video_url"]).unwrap_or("")),
    );

    let mut publisher = Map::new();
    publisher.insert("@type".into(), json!("NewsMediaOrganization"));
    publisher.insert(
        "name".into(),
        json!(config
            .organization
            .name
            .clone()
            .unwrap_or_else(|| site.publisher.clone())),
    );
    publisher.insert("url".into(), json!(site.url));
    publisher.insert(
        "logo".into(),
        json!({ "@type": "ImageObject", "url": site.logo }),
    );
    if !config.organization.same_as.is_empty() {
        publisher.insert("sameAs".into(), json!(config.organization.same_as));
    }
    schema.insert("publisher".into(), Value::Object(publisher));

    schema
}

/// ImageObject list over the per-schema size presets, deduplicated by URL.
fn sized_images(image: Option<&str>, config: &SeoConfig, images: &Images<'_>) -> Vec<Value> {
    let Some(image) = image.filter(|i| !i.is_empty()) else {
        return Vec::new();
    };
    let path = relative_path(image);

    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for size in &config.images.schema {
        let url = images.resolve(&path, *size);
        if seen.contains(&url) {
            continue;
        }
        seen.push(url.clone());
        out.push(json!({
            "@type": "ImageObject",
            "url": url,
            "width": size.width,
            "height": size.height,
        }));
    }
    out
}

fn author(
    model: &Model,
    site: &SiteData,
    config: &SeoConfig,
    images: &Images<'_>,
) -> Value {
    if let Some(writer) = model.fields().rel_first(&["writer"]) {
        let mut author = Map::new();
        author.insert("@type".into(), json!("Person"));
        author.insert(
            "name".into(),
            json!(writer.str_first(&["name"]).unwrap_or(&site.name)),
        );
        author.insert(
            "url".into(),
            json!(writer.str_first(&["url"]).unwrap_or(&site.url)),
        );
        if let Some(photo) = writer.str_first(&["photo"]) {
            author.insert(
                "image".into(),
                json!(images.resolve(photo, Size::new(400, 400))),
            );
        }
        return Value::Object(author);
    }

    json!({
        "@type": "NewsMediaOrganization",
        "name": config.organization.name.clone().unwrap_or_else(|| site.name.clone()),
        "url": site.url,
        "sameAs": config.organization.same_as,
    })
}

fn publisher(site: &SiteData, config: &SeoConfig) -> Value {
    let org = &config.organization;
    let mut publisher = Map::new();
    publisher.insert("@type".into(), json!("NewsMediaOrganization"));
    publisher.insert(
        "name".into(),
        json!(org.name.clone().unwrap_or_else(|| site.publisher.clone())),
    );
    publisher.insert("url".into(), json!(site.url));
    publisher.insert(
        "logo".into(),
        json!({
            "@type": "ImageObject",
            "url": site.logo,
            "width": org.logo_width,
            "height": org.logo_height,
        }),
    );
    if !org.same_as.is_empty() {
        publisher.insert("sameAs".into(), json!(org.same_as));
    }
    Value::Object(publisher)
}

/// Reduce any image reference to a site-relative path for sized resolution.
fn relative_path(image: &str) -> String {
    if let Ok(url) = Url::parse(image) {
        if url.scheme() == "http" || url.scheme() == "https" {
            return url.path().trim_start_matches('/').to_string();
        }
    }
    image
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_start_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageSizes;
    use crate::context::AssetResolver;
    use serde_json::json as j;

    fn site() -> SiteData {
        SiteData {
            name: "Acme".into(),
            description: String::new(),
            logo: "https://acme.example/logo.png".into(),
            url: "https://acme.example".into(),
            locale: "en".into(),
            publisher: "Acme".into(),
        }
    }

    fn page() -> PageData {
        PageData {
            title: "Big Story - Acme".into(),
            description: "Something happened.".into(),
            image: Some("uploads/cover.jpg".into()),
            published_at: Some("2024-06-01T00:00:00Z".into()),
            modified_at: Some("2024-06-02T00:00:00Z".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_news_article_core_fields() {
        let config = SeoConfig::default();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");
        let model = Model::from(j!({ "content": "one two three four" }));

        let schema = news_article(
            &page(),
            &model,
            &site(),
            &config,
            &images,
            "https://acme.example/posts/big-story",
        );
        assert_eq!(schema["@type"], "NewsArticle");
        assert_eq!(schema["mainEntityOfPage"], "https://acme.example/posts/big-story");
        assert_eq!(schema["datePublished"], "2024-06-01T00:00:00Z");
        assert_eq!(schema["dateModified"], "2024-06-02T00:00:00Z");
        assert_eq!(schema["wordCount"], 4);
        assert_eq!(schema["timeRequired"], "PT1M");
        // asset resolver ignores sizes, so all four presets collapse to one URL
        assert_eq!(schema["image"].as_array().unwrap().len(), 1);
        assert_eq!(
            schema["image"][0]["url"],
            "https://acme.example/uploads/cover.jpg"
        );
    }

    #[test]
    fn test_author_prefers_writer_relation() {
        let config = SeoConfig::default();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");
        let model = Model::from(j!({
            "writer": { "name": "Jane", "url": "https://acme.example/authors/jane" }
        }));

        let schema = news_article(&page(), &model, &site(), &config, &images, "x");
        assert_eq!(schema["author"]["@type"], "Person");
        assert_eq!(schema["author"]["name"], "Jane");
        assert_eq!(schema["author"]["url"], "https://acme.example/authors/jane");
    }

    #[test]
    fn test_author_falls_back_to_organization() {
        let config = SeoConfig::default();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");
        let model = Model::empty();

        let schema = news_article(&page(), &model, &site(), &config, &images, "x");
        assert_eq!(schema["author"]["@type"], "NewsMediaOrganization");
        assert_eq!(schema["author"]["name"], "Acme");
    }

    #[test]
    fn test_video_document() {
        let config = SeoConfig::default();
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");
        let model = Model::from(j!({ "video_url": "https://video.example/embed/1" }));

        let schema = video(&page(), &model, &site(), &config, &images);
        assert_eq!(schema["@type"], "VideoObject");
        assert_eq!(schema["embedUrl"], "https://video.example/embed/1");
        assert_eq!(schema["thumbnailUrl"], "https://acme.example/uploads/cover.jpg");
        assert_eq!(schema["publisher"]["logo"]["url"], "https://acme.example/logo.png");
    }

    #[test]
    fn test_relative_path_strips_scheme_and_host() {
        assert_eq!(
            relative_path("https://cdn.example/uploads/a.jpg"),
            "uploads/a.jpg"
        );
        assert_eq!(relative_path("/uploads/a.jpg"), "uploads/a.jpg");
    }
}
