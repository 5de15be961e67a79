//! Per-page-type field extraction.
//!
//! Each page type probes its own ordered candidate keys on the model and
//! falls back to configured texts when they miss. Extraction never fails:
//! the worst case is a page built entirely from defaults.

use super::{PageData, PageType};
use crate::config::{PageRules, SeoConfig};
use crate::model::{Fields, Model};
use crate::site::SiteData;
use crate::utils::{date, html, text};

pub struct Extractor<'a> {
    config: &'a SeoConfig,
    site: &'a SiteData,
    /// " - {Page} N" when a live request is on page 2+, otherwise empty.
    page_suffix: &'a str,
    /// ISO-8601 timestamp captured once per page build.
    now: &'a str,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a SeoConfig, site: &'a SiteData, page_suffix: &'a str, now: &'a str) -> Self {
        Self {
            config,
            site,
            page_suffix,
            now,
        }
    }

    pub fn extract(&self, page_type: PageType, model: &Model) -> PageData {
        let fields = model.fields();
        match page_type {
            PageType::Home => self.home(),
            PageType::Post => self.post(fields),
            PageType::Category => self.listing(fields, ListingKind::Category),
            PageType::Product => self.product(fields),
            PageType::Search => self.search(fields),
            PageType::Tag => self.listing(fields, ListingKind::Tag),
            PageType::Author => self.author(fields),
            PageType::Archive => self.archive(fields),
            PageType::Page => self.page(fields),
        }
    }

    // ------------------------------------------------------------------
    // branches
    // ------------------------------------------------------------------

    fn home(&self) -> PageData {
        let rules = &self.config.pages.home;
        let defaults = &self.config.defaults;

        PageData {
            title: decode(rules.title.clone().unwrap_or_else(|| {
                format!("{} - {}", defaults.fallbacks.home_label, self.site.name)
            })),
            description: decode(
                rules
                    .description
                    .clone()
                    .unwrap_or_else(|| self.site.description.clone()),
            ),
            image: Some(
                rules
                    .image
                    .clone()
                    .unwrap_or_else(|| self.site.logo.clone()),
            ),
            schema: rules.schema.clone().unwrap_or_else(|| "WebSite".into()),
            keywords: rules
                .keywords
                .clone()
                .unwrap_or_else(|| defaults.keywords.clone()),
            author: rules.author.clone().unwrap_or_else(|| self.site.name.clone()),
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    fn post(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.post;
        let defaults = &self.config.defaults;

        let title = decode(
            fields
                .str_first(&["title", "name"])
                .unwrap_or(&defaults.fallbacks.post_title)
                .to_string(),
        );
        let description = text::limit_words(
            fields.str_first(&["content", "text", "description"]).unwrap_or(""),
            rules.description_limit,
        );
        let image = fields
            .str_first(&["photo", "image", "thumbnail"])
            .map(str::to_string);

        let published_at = self.model_date(fields, &["created_at", "published_at"]);
        let modified_at = self.model_date(fields, &["updated_at", "modified_at"]);

        PageData {
            title: self.prefixed(title, rules),
            description,
            image,
            schema: "NewsArticle".into(),
            keywords: self.post_keywords(fields),
            author: self.model_author(fields),
            robots: rules.robots.clone(),
            published_at: Some(published_at),
            modified_at: Some(modified_at),
        }
    }

    fn listing(&self, fields: Fields<'_>, kind: ListingKind) -> PageData {
        let defaults = &self.config.defaults;
        let fallbacks = &defaults.fallbacks;
        let (rules, name_fallback, template, schema_default) = match kind {
            ListingKind::Category => (
                &self.config.pages.category,
                &fallbacks.category_name,
                &fallbacks.category_description,
                "CollectionPage",
            ),
            ListingKind::Tag => (
                &self.config.pages.tag,
                &fallbacks.tag_name,
                &fallbacks.tag_description,
                "CollectionPage",
            ),
        };

        let name = decode(
            fields
                .str_first(&["name", "title"])
                .unwrap_or(name_fallback)
                .to_string(),
        );
        let mut description = match fields.str_first(&["description"]) {
            Some(d) => text::limit_words(d, rules.description_limit),
            None => template.replace(":name", &name),
        };

        let title = format!("{}{}", self.prefixed(name.clone(), rules), self.page_suffix);
        description.push_str(self.page_suffix);

        let keywords = match kind {
            ListingKind::Category => self.category_keywords(&name),
            ListingKind::Tag => {
                let mut k = vec![name.clone()];
                k.extend(defaults.keywords.iter().cloned());
                k
            }
        };

        PageData {
            title,
            description,
            image: Some(
                fields
                    .str_first(&["photo", "image", "thumbnail"])
                    .map(str::to_string)
                    .unwrap_or_else(|| self.site.logo.clone()),
            ),
            schema: rules.schema.clone().unwrap_or_else(|| schema_default.into()),
            keywords,
            author: rules.author.clone().unwrap_or_else(|| self.site.name.clone()),
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    fn product(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.product;
        let defaults = &self.config.defaults;

        let name = decode(
            fields
                .str_first(&["name", "title", "product_name"])
                .unwrap_or(&defaults.fallbacks.product_name)
                .to_string(),
        );
        let description = text::limit_words(
            fields
                .str_first(&["description", "content", "product_description"])
                .unwrap_or(""),
            rules.description_limit,
        );
        let image = fields
            .str_first(&["image", "photo", "thumbnail", "product_image"])
            .map(str::to_string);

        PageData {
            title: self.prefixed(name, rules),
            description,
            image,
            schema: "Product".into(),
            keywords: self.product_keywords(fields),
            author: self.site.name.clone(),
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    fn search(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.search;
        let fallbacks = &self.config.defaults.fallbacks;
        let query = decode(fields.str_first(&["query"]).unwrap_or("").to_string());

        let title = rules
            .title
            .as_deref()
            .unwrap_or(&fallbacks.search_title)
            .replace(":query", &query)
            .replace(":site", &self.site.name);
        let description = rules
            .description
            .as_deref()
            .unwrap_or(&fallbacks.search_description)
            .replace(":query", &query);

        let mut keywords = vec![fallbacks.search_keyword.clone(), query];
        keywords.extend(rules.keywords.iter().flatten().cloned());

        PageData {
            title,
            description,
            image: Some(self.site.logo.clone()),
            schema: "SearchResultsPage".into(),
            keywords,
            author: rules.author.clone().unwrap_or_else(|| self.site.name.clone()),
            robots: "noindex, follow".into(),
            published_at: None,
            modified_at: None,
        }
    }

    fn author(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.author;
        let defaults = &self.config.defaults;
        let fallbacks = &defaults.fallbacks;

        let name = decode(
            fields
                .str_first(&["name", "title", "display_name"])
                .unwrap_or(&fallbacks.author_name)
                .to_string(),
        );
        let mut description = match fields.str_first(&["bio", "description", "about"]) {
            Some(d) => text::limit_words(d, rules.description_limit),
            None => fallbacks.author_description.replace(":name", &name),
        };

        let title = format!("{}{}", self.prefixed(name.clone(), rules), self.page_suffix);
        description.push_str(self.page_suffix);

        let mut keywords = vec![name.clone()];
        keywords.extend(defaults.keywords.iter().cloned());

        PageData {
            title,
            description,
            image: Some(
                fields
                    .str_first(&["photo", "avatar", "image", "profile_image"])
                    .map(str::to_string)
                    .unwrap_or_else(|| self.site.logo.clone()),
            ),
            schema: rules.schema.clone().unwrap_or_else(|| "ProfilePage".into()),
            keywords,
            author: name,
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    fn archive(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.archive;
        let defaults = &self.config.defaults;
        let fallbacks = &defaults.fallbacks;

        let title = fields
            .str_first(&["title"])
            .unwrap_or(&fallbacks.archive_name)
            .to_string();
        let mut description = fields
            .str_first(&["description"])
            .map(str::to_string)
            .or_else(|| rules.description.clone())
            .unwrap_or_else(|| fallbacks.archive_description.clone());

        let title = format!("{} - {}{}", title, self.site.name, self.page_suffix);
        description.push_str(self.page_suffix);

        PageData {
            title,
            description,
            image: Some(self.site.logo.clone()),
            schema: rules.schema.clone().unwrap_or_else(|| "CollectionPage".into()),
            keywords: defaults.keywords.clone(),
            author: self.site.name.clone(),
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    fn page(&self, fields: Fields<'_>) -> PageData {
        let rules = &self.config.pages.page;
        let defaults = &self.config.defaults;

        let title = decode(
            fields
                .str_first(&["title", "name"])
                .unwrap_or(&defaults.fallbacks.page_title)
                .to_string(),
        );
        let description = text::limit_words(
            fields
                .str_first(&["description", "content", "excerpt"])
                .unwrap_or(""),
            rules.description_limit,
        );

        PageData {
            title: self.prefixed(title, rules),
            description: if description.is_empty() {
                self.site.description.clone()
            } else {
                description
            },
            image: Some(
                fields
                    .str_first(&["photo", "image", "featured_image"])
                    .map(str::to_string)
                    .unwrap_or_else(|| self.site.logo.clone()),
            ),
            schema: rules.schema.clone().unwrap_or_else(|| "WebPage".into()),
            keywords: defaults.keywords.clone(),
            author: self.site.name.clone(),
            robots: rules.robots.clone(),
            published_at: None,
            modified_at: None,
        }
    }

    // ------------------------------------------------------------------
    // shared pieces
    // ------------------------------------------------------------------

    fn prefixed(&self, title: String, rules: &PageRules) -> String {
        if rules.title_prefix {
            format!("{} - {}", title, self.site.name)
        } else {
            title
        }
    }

    /// First parseable date among the candidates, normalized to ISO-8601;
    /// missing or unparseable dates become the build timestamp.
    fn model_date(&self, fields: Fields<'_>, keys: &[&str]) -> String {
        fields
            .str_first(keys)
            .and_then(date::normalize)
            .unwrap_or_else(|| self.now.to_string())
    }

    /// Author via relation probing: writer, author, user, creator.
    fn model_author(&self, fields: Fields<'_>) -> String {
        fields
            .rel_first(&["writer", "author", "user", "creator"])
            .and_then(|rel| rel.str_first(&["name", "display_name"]))
            .map(str::to_string)
            .unwrap_or_else(|| self.site.name.clone())
    }

    /// Tag names, first category name, then defaults; unique, capped at 10.
    fn post_keywords(&self, fields: Fields<'_>) -> Vec<String> {
        let mut keywords: Vec<String> = fields
            .pluck_str("tags", "name")
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(name) = fields.first_of("categories").and_then(|c| c.str_first(&["name"])) {
            keywords.push(name.to_string());
        }
        keywords.extend(self.config.defaults.keywords.iter().cloned());
        unique_capped(keywords, 10)
    }

    /// Name, prefixed name, site name, then defaults; intentionally uncapped.
    fn category_keywords(&self, name: &str) -> Vec<String> {
        let prefix = &self.config.defaults.fallbacks.search_keyword_prefix;
        let mut keywords = Vec::new();
        if !name.is_empty() {
            keywords.push(name.to_string());
            keywords.push(format!("{prefix}{name}"));
        }
        keywords.push(self.site.name.clone());
        keywords.extend(self.config.defaults.keywords.iter().cloned());
        keywords
    }

    /// Name, brand, category, tag names, then defaults; unique, capped at 10.
    fn product_keywords(&self, fields: Fields<'_>) -> Vec<String> {
        let mut keywords = Vec::new();
        if let Some(name) = fields.str_first(&["name", "title", "product_name"]) {
            keywords.push(name.to_string());
        }
        for relation in ["brand", "category"] {
            if let Some(value) = fields.get(relation) {
                if let Some(name) = value.str_first(&["name"]).or_else(|| value.as_str()) {
                    keywords.push(name.to_string());
                }
            }
        }
        keywords.extend(fields.pluck_str("tags", "name").into_iter().map(str::to_string));
        keywords.extend(self.config.defaults.keywords.iter().cloned());
        unique_capped(keywords, 10)
    }
}

enum ListingKind {
    Category,
    Tag,
}

fn decode(s: String) -> String {
    match html::unescape(&s) {
        std::borrow::Cow::Borrowed(_) => s,
        std::borrow::Cow::Owned(decoded) => decoded,
    }
}

fn unique_capped(keywords: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = Vec::with_capacity(keywords.len().min(cap));
    for keyword in keywords {
        if keyword.is_empty() || seen.contains(&keyword) {
            continue;
        }
        seen.push(keyword);
        if seen.len() == cap {
            break;
        }
    }
    seen
}

// ============================================================================
// tests
// ============================================================================
