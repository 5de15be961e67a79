//! The assembly service: one instance per request (or per batch worker),
//! driven as `seo.post(model).render()`.
//!
//! `set()` resets the accumulators, extracts page fields, runs every
//! feature builder and stages the page's JSON-LD set; `render()` is a pure
//! concatenation afterwards and can be called repeatedly.

use crate::build::{self, BuildInput, multilingual::AlternateUrlFn, path_page_number};
use crate::config::SeoConfig;
use crate::context::{Images, RequestContext, UrlResolver, join_base};
use crate::error::ValidateError;
use crate::log;
use crate::model::Model;
use crate::page::{Extractor, PageData, PageType};
use crate::schema;
use crate::site::SiteData;
use crate::tags::{JsonLd, MetaTags, OpenGraph, TwitterCard};
use crate::utils::date::DateTimeUtc;
use crate::utils::html;
use crate::validate;
use serde_json::{Map, Value, json};

/// Page-level byproducts that render outside the tag stream.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    /// AMP variant URL for posts, when AMP is enabled.
    pub amp_url: Option<String>,
    /// Previous page in a paginated sequence, from the model.
    pub prev_url: Option<String>,
    /// Next page in a paginated sequence, from the model.
    pub next_url: Option<String>,
}

pub struct Seo {
    config: SeoConfig,
    resolver: Box<dyn UrlResolver>,
    ctx: Box<dyn RequestContext>,
    alternate_urls: Option<AlternateUrlFn>,

    page_type: PageType,
    model: Model,
    page: PageData,

    meta: MetaTags,
    og: OpenGraph,
    twitter: TwitterCard,
    jsonld: JsonLd,
    breadcrumbs: Vec<schema::Crumb>,
    outputs: Outputs,
}

impl Seo {
    pub fn new(
        config: SeoConfig,
        resolver: Box<dyn UrlResolver>,
        ctx: Box<dyn RequestContext>,
    ) -> Result<Self, ValidateError> {
        validate::config(&config)?;
        Ok(Self {
            config,
            resolver,
            ctx,
            alternate_urls: None,
            page_type: PageType::Home,
            model: Model::empty(),
            page: PageData::default(),
            meta: MetaTags::default(),
            og: OpenGraph::default(),
            twitter: TwitterCard::default(),
            jsonld: JsonLd::default(),
            breadcrumbs: Vec::new(),
            outputs: Outputs::default(),
        })
    }

    /// Install a host-app hook for hreflang alternate URLs.
    pub fn with_alternate_urls(mut self, generator: AlternateUrlFn) -> Self {
        self.alternate_urls = Some(generator);
        self
    }

    // ========================================================================
    // Page entry points
    // ========================================================================

    pub fn for_page(&mut self, page_type: PageType, model: Model) -> &mut Self {
        self.page_type = page_type;
        self.model = model;
        self.set();
        self
    }

    pub fn home(&mut self) -> &mut Self {
        self.for_page(PageType::Home, Model::empty())
    }

    pub fn post(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Post, model)
    }

    pub fn category(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Category, model)
    }

    pub fn product(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Product, model)
    }

    pub fn search(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Search, model)
    }

    pub fn tag(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Tag, model)
    }

    pub fn author(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Author, model)
    }

    pub fn archive(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Archive, model)
    }

    pub fn page(&mut self, model: Model) -> &mut Self {
        self.for_page(PageType::Page, model)
    }

    // ========================================================================
    // Assembly
    // ========================================================================

    fn set(&mut self) {
        self.meta.reset();
        self.og.reset();
        self.twitter.reset();
        self.jsonld.reset();
        self.breadcrumbs.clear();
        self.outputs = Outputs::default();

        let images = Images::new(
            self.resolver.as_ref(),
            &self.config.images,
            &self.config.site.url,
        );
        let site = SiteData::cached(&self.config, &images, &self.locale());

        let page_suffix = self.page_suffix();
        let now = DateTimeUtc::now().to_rfc3339();
        self.page = Extractor::new(&self.config, &site, &page_suffix, &now)
            .extract(self.page_type, &self.model);

        let input = BuildInput {
            config: &self.config,
            site: &site,
            page: &self.page,
            page_type: self.page_type,
            model: &self.model,
            ctx: self.ctx.as_ref(),
            images: &images,
        };

        build::meta::build(&input, &mut self.meta);
        build::opengraph::build(&input, &mut self.og);
        build::twitter::build(&input, &mut self.twitter);
        build::linkedin::build(&input, &mut self.og);
        build::multilingual::build(&input, self.alternate_urls.as_ref(), &mut self.meta);
        build::mobile::build(&input, &mut self.meta);
        build::security::build(&input, &mut self.meta);
        build::geo::build(&input, &mut self.meta);
        build::social::build(&input, &mut self.meta);

        let current_url = input.current_url();
        let linked = self.ctx.current_url().is_some();
        self.breadcrumbs = schema::breadcrumb_items(
            &self.model,
            &site,
            self.page_type,
            &self.config,
            linked,
        );

        Self::stage_jsonld(
            &mut self.jsonld,
            &self.breadcrumbs,
            &self.page,
            self.page_type,
            &self.model,
            &self.config,
            &site,
            &images,
            &current_url,
        );

        let mut outputs = Outputs::default();
        if self.config.amp.enabled && self.page_type == PageType::Post {
            outputs.amp_url = amp_url(
                &self.config,
                self.resolver.as_ref(),
                &self.model,
                &current_url,
            );
        }
        if self.config.pagination.enabled {
            let fields = self.model.fields();
            outputs.prev_url = fields
                .rel_first(&["previous", "prev"])
                .and_then(|prev| prev.str_first(&["url"]))
                .map(String::from);
            outputs.next_url = fields
                .rel_first(&["next"])
                .and_then(|next| next.str_first(&["url"]))
                .map(String::from);
        }
        self.outputs = outputs;
    }

    /// The JSON-LD set for this page type.
    #[allow(clippy::too_many_arguments)]
    fn stage_jsonld(
        jsonld: &mut JsonLd,
        breadcrumbs: &[schema::Crumb],
        page: &PageData,
        page_type: PageType,
        model: &Model,
        config: &SeoConfig,
        site: &SiteData,
        images: &Images<'_>,
        current_url: &str,
    ) {
        // pages without a dedicated document get a basic one from page data
        if page.schema != "NewsArticle" && page.schema != "Product" {
            jsonld.set_type(&page.schema);
            jsonld.set_title(&page.title);
            jsonld.set_description(&page.description);
            jsonld.add_property("url", json!(current_url));
            jsonld.add_property("inLanguage", json!(site.locale));
            if let Some(image) = page.image.as_deref().filter(|i| !i.is_empty()) {
                jsonld.add_image(images.og(image));
            }
        }

        match page_type {
            PageType::Post => {
                jsonld.push(schema::news_article(
                    page, model, site, config, images, current_url,
                ));
                jsonld.push(schema::web_page(page, current_url));
                jsonld.push(schema::breadcrumb_schema(breadcrumbs));
                if model
                    .fields()
                    .str_first(&["video_url"])
                    .is_some_and(|v| !v.is_empty())
                {
                    jsonld.push(schema::video(page, model, site, config, images));
                }
            }
            PageType::Product => {
                jsonld.push(schema::product(page, model, site, config, current_url));
                jsonld.push(schema::web_page(page, current_url));
                jsonld.push(schema::breadcrumb_schema(breadcrumbs));
            }
            PageType::Home => {
                jsonld.push(schema::web_site(site, config));
                jsonld.push(schema::organization(site, config));
            }
            PageType::Category => {
                jsonld.push(schema::collection_page(page, current_url));
                jsonld.push(schema::breadcrumb_schema(breadcrumbs));
            }
            _ => {}
        }
    }

    fn locale(&self) -> String {
        let locale = self.ctx.locale();
        if locale.is_empty() {
            self.config.site.locale.clone()
        } else {
            locale
        }
    }

    /// " - {Page} N" on page 2+ of a live request.
    fn page_suffix(&self) -> String {
        if self.ctx.current_url().is_none() {
            return String::new();
        }
        let page = self
            .ctx
            .path()
            .and_then(|p| path_page_number(&p))
            .unwrap_or_else(|| self.ctx.page_number());
        if page > 1 {
            format!(" - {} {page}", self.config.defaults.fallbacks.page_label)
        } else {
            String::new()
        }
    }

    // ========================================================================
    // Extra schema input
    // ========================================================================

    /// Product document for an arbitrary model, on top of the current page.
    pub fn add_product(&mut self, model: &Model) -> &mut Self {
        let images = Images::new(
            self.resolver.as_ref(),
            &self.config.images,
            &self.config.site.url,
        );
        let site = SiteData::cached(&self.config, &images, &self.locale());
        let current_url = self
            .ctx
            .current_url()
            .map(|url| build::strip_query(&url))
            .unwrap_or_else(|| site.url.clone());
        let document = schema::product(&self.page, model, &site, &self.config, &current_url);
        self.push_schema(document)
    }

    /// VideoObject from a plain data map; `video_url` is required, an `image`
    /// key overrides the page thumbnail, and `duration` / `contentUrl` /
    /// `interactionStatistic` pass through verbatim.
    pub fn add_video(&mut self, data: &Map<String, Value>) -> &mut Self {
        if !data
            .get("video_url")
            .and_then(Value::as_str)
            .is_some_and(|v| !v.is_empty())
        {
            log!("schema"; "video skipped: missing video_url");
            return self;
        }
        let model = Model::from(Value::Object(data.clone()));
        let images = Images::new(
            self.resolver.as_ref(),
            &self.config.images,
            &self.config.site.url,
        );
        let site = SiteData::cached(&self.config, &images, &self.locale());
        let mut page = self.page.clone();
        if let Some(image) = data.get("image").and_then(Value::as_str) {
            page.image = Some(image.to_string());
        }
        let mut document = schema::video(&page, &model, &site, &self.config, &images);
        for key in ["duration", "contentUrl", "interactionStatistic"] {
            if let Some(value) = data.get(key) {
                document.insert(key.into(), value.clone());
            }
        }
        self.push_schema(document)
    }

    pub fn add_faq(&mut self, faqs: &[schema::Faq]) -> &mut Self {
        if faqs.is_empty() {
            log!("schema"; "faq skipped: no entries");
            return self;
        }
        self.push_schema(schema::faq(faqs))
    }

    pub fn add_event(&mut self, event: &schema::EventInput) -> &mut Self {
        if event.name.is_empty() || event.start_date.is_empty() {
            log!("schema"; "event skipped: name and start_date are required");
            return self;
        }
        self.push_schema(schema::event(event))
    }

    pub fn add_review(&mut self, review: &schema::ReviewInput) -> &mut Self {
        if let Err(err) = validate::rating(review.rating_value, 0.0, review.best_rating) {
            log!("schema"; "review skipped: {err}");
            return self;
        }
        self.push_schema(schema::review(review))
    }

    pub fn add_aggregate_rating(&mut self, value: f64, count: u64, best: f64, worst: f64) -> &mut Self {
        if let Err(err) = validate::rating(value, worst, best) {
            log!("schema"; "aggregate rating skipped: {err}");
            return self;
        }
        self.push_schema(schema::aggregate_rating(value, count, best, worst))
    }

    pub fn add_brand(&mut self, name: &str, logo: Option<&str>, url: Option<&str>) -> &mut Self {
        if name.is_empty() {
            log!("schema"; "brand skipped: empty name");
            return self;
        }
        self.push_schema(schema::brand(name, logo, url))
    }

    pub fn add_how_to(
        &mut self,
        name: &str,
        steps: &[schema::HowToStep],
        description: Option<&str>,
        image: Option<&str>,
    ) -> &mut Self {
        if steps.is_empty() {
            log!("schema"; "how-to skipped: no steps");
            return self;
        }
        self.push_schema(schema::how_to(name, steps, description, image))
    }

    pub fn add_local_business(&mut self, data: &Map<String, Value>) -> &mut Self {
        if !data.get("name").and_then(Value::as_str).is_some_and(|n| !n.is_empty()) {
            log!("schema"; "local business skipped: missing name");
            return self;
        }
        self.push_schema(schema::local_business(data))
    }

    /// Arbitrary pre-built document; must carry an `@type`.
    pub fn add_schema(&mut self, document: Map<String, Value>) -> &mut Self {
        if !document.contains_key("@type") {
            log!("schema"; "document skipped: missing @type");
            return self;
        }
        self.push_schema(document)
    }

    fn push_schema(&mut self, document: Map<String, Value>) -> &mut Self {
        if !document.is_empty() {
            self.jsonld.push(document);
        }
        self
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Full `<head>` payload: resource hints, metas, Open Graph, Twitter
    /// Card, JSON-LD, feature links, analytics.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&build::performance::build(&self.config.performance));
        out.push_str(&self.meta.generate());
        out.push_str(&self.og.generate());
        out.push_str(&self.twitter.generate());
        out.push_str(&self.jsonld.generate());

        if let Some(amp) = &self.outputs.amp_url {
            out.push_str(&format!(
                "<link rel=\"amphtml\" href=\"{}\">\n",
                html::escape_attr(amp)
            ));
        }
        if self.config.rss.enabled {
            let href = if self.config.rss.url.starts_with("http://")
                || self.config.rss.url.starts_with("https://")
            {
                self.config.rss.url.clone()
            } else {
                join_base(&self.config.site.url, &self.config.rss.url)
            };
            out.push_str(&format!(
                "<link rel=\"alternate\" type=\"application/rss+xml\" title=\"{}\" href=\"{}\">\n",
                html::escape_attr(&self.config.site.name),
                html::escape_attr(&href)
            ));
        }
        if let Some(prev) = &self.outputs.prev_url {
            out.push_str(&format!(
                "<link rel=\"prev\" href=\"{}\">\n",
                html::escape_attr(prev)
            ));
        }
        if let Some(next) = &self.outputs.next_url {
            out.push_str(&format!(
                "<link rel=\"next\" href=\"{}\">\n",
                html::escape_attr(next)
            ));
        }

        out.push_str(&build::analytics::build(&self.config.analytics));
        out
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn page_data(&self) -> &PageData {
        &self.page
    }

    pub fn breadcrumbs(&self) -> &[schema::Crumb] {
        &self.breadcrumbs
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    pub fn meta(&self) -> &MetaTags {
        &self.meta
    }

    pub fn open_graph(&self) -> &OpenGraph {
        &self.og
    }

    pub fn twitter_card(&self) -> &TwitterCard {
        &self.twitter
    }

    pub fn jsonld(&self) -> &JsonLd {
        &self.jsonld
    }
}

fn amp_url(
    config: &SeoConfig,
    resolver: &dyn UrlResolver,
    model: &Model,
    current_url: &str,
) -> Option<String> {
    if let Some(route) = &config.amp.route {
        if let Some(slug) = model.fields().str_first(&["slug"]) {
            match resolver.route(route, &[("slug", slug)]) {
                Ok(url) => return Some(url),
                Err(err) => log!("amp"; "route failed, using path rewrite: {err}"),
            }
        }
    }
    current_url
        .contains("/posts/")
        .then(|| current_url.replacen("/posts/", "/amp/posts/", 1))
}
