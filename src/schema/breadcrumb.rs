//! Breadcrumb trail assembly and its BreadcrumbList document.
//!
//! Crumb URLs come from `url` fields on the model and its relations. A
//! missing URL skips the linked crumb instead of aborting the trail, so a
//! partial breadcrumb still renders; positions stay contiguous.

use super::doc;
use crate::config::SeoConfig;
use crate::model::{Fields, Model};
use crate::page::PageType;
use crate::site::SiteData;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub name: String,
    /// Absent on the leaf (the current page).
    pub item: Option<String>,
    pub position: u32,
}

/// Build the trail for a page. `linked` says whether intermediate crumbs may
/// carry URLs; batch contexts pass false and get name-only parents dropped,
/// matching a request-less environment where listing URLs cannot be derived.
pub fn breadcrumb_items(
    model: &Model,
    site: &SiteData,
    page_type: PageType,
    config: &SeoConfig,
    linked: bool,
) -> Vec<Crumb> {
    let fields = model.fields();
    let fallbacks = &config.defaults.fallbacks;

    let mut trail = Trail::default();
    trail.push(config.breadcrumbs.home_label.clone(), Some(site.url.clone()));

    match page_type {
        PageType::Post => {
            if let Some(category) = fields.first_of("categories") {
                if linked {
                    trail.push_linked_parent(category);
                    trail.push_linked(category, &["name"]);
                }
            }
            trail.push(
                fields
                    .str_first(&["title", "name"])
                    .unwrap_or(&fallbacks.post_title)
                    .to_string(),
                None,
            );
        }
        PageType::Category => {
            if linked {
                trail.push_linked_parent(fields);
            }
            trail.push(
                fields
                    .str_first(&["name"])
                    .unwrap_or(&fallbacks.category_name)
                    .to_string(),
                None,
            );
        }
        PageType::Product => {
            if let Some(category) = fields.rel_first(&["category"]) {
                trail.push_linked_parent(category);
                trail.push_linked(category, &["name"]);
            }
            trail.push(
                fields
                    .str_first(&["name", "title", "product_name"])
                    .unwrap_or(&fallbacks.product_name)
                    .to_string(),
                None,
            );
        }
        PageType::Tag => {
            trail.push(
                fields
                    .str_first(&["name", "title"])
                    .unwrap_or(&fallbacks.tag_name)
                    .to_string(),
                None,
            );
        }
        PageType::Author => {
            trail.push(
                fields
                    .str_first(&["name", "username", "title"])
                    .unwrap_or(&fallbacks.author_name)
                    .to_string(),
                None,
            );
        }
        PageType::Archive => {
            let name = fields
                .as_str()
                .or_else(|| fields.str_first(&["name", "title", "date"]))
                .unwrap_or(&fallbacks.archive_name);
            trail.push(name.to_string(), None);
        }
        PageType::Page => {
            if linked {
                trail.push_linked_page_parent(fields);
            }
            trail.push(
                fields
                    .str_first(&["title", "name"])
                    .unwrap_or(&fallbacks.page_title)
                    .to_string(),
                None,
            );
        }
        PageType::Home | PageType::Search => {}
    }

    trail.crumbs
}

/// Wrap a trail into a BreadcrumbList document.
pub fn breadcrumb_schema(items: &[Crumb]) -> Map<String, Value> {
    let elements: Vec<Value> = items
        .iter()
        .map(|crumb| {
            let mut element = Map::new();
            element.insert("@type".into(), json!("ListItem"));
            element.insert("position".into(), json!(crumb.position));
            element.insert("name".into(), json!(crumb.name));
            if let Some(item) = &crumb.item {
                element.insert("item".into(), json!(item));
            }
            Value::Object(element)
        })
        .collect();

    let mut schema = doc("BreadcrumbList");
    schema.insert("itemListElement".into(), Value::Array(elements));
    schema
}

#[derive(Default)]
struct Trail {
    crumbs: Vec<Crumb>,
}

impl Trail {
    fn push(&mut self, name: String, item: Option<String>) {
        let position = self.crumbs.len() as u32 + 1;
        self.crumbs.push(Crumb {
            name,
            item,
            position,
        });
    }

    /// A crumb that must carry a URL; skipped when the node has none.
    fn push_linked(&mut self, node: Fields<'_>, name_keys: &[&str]) {
        if let Some(url) = node.str_first(&["url"]) {
            let name = node.str_first(name_keys).unwrap_or("").to_string();
            self.push(name, Some(url.to_string()));
        }
    }

    /// The node's parent, when it is a real relation.
    fn push_linked_parent(&mut self, node: Fields<'_>) {
        if !node.has("parent_id") {
            return;
        }
        if let Some(parent) = node.rel_first(&["parent"]) {
            self.push_linked(parent, &["name"]);
        }
    }

    fn push_linked_page_parent(&mut self, node: Fields<'_>) {
        if !node.has("parent_id") {
            return;
        }
        if let Some(parent) = node.rel_first(&["parent"]) {
            if let Some(url) = parent.str_first(&["url"]) {
                let name = parent.str_first(&["title", "name"]).unwrap_or("").to_string();
                self.push(name, Some(url.to_string()));
            }
        }
    }
}
