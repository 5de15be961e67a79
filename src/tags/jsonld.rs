//! JSON-LD documents held as in-memory maps until render time.
//!
//! The first document is a lazily-created basic page node
//! (`@context` + `@type: WebPage`) that the typed setters mutate; whole
//! schema.org documents append after it. Output order is insertion order.

use crate::debug;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Default)]
pub struct JsonLd {
    schemas: Vec<Map<String, Value>>,
}

impl JsonLd {
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.basic().insert("headline".into(), json!(title.into()));
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.basic()
            .insert("description".into(), json!(description.into()));
        self
    }

    pub fn set_type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.basic().insert("@type".into(), json!(kind.into()));
        self
    }

    /// Add an image URL to the basic document. One image stays a bare
    /// string; further distinct URLs turn it into an array.
    pub fn add_image(&mut self, url: impl Into<String>) -> &mut Self {
        let url = url.into();
        let basic = self.basic();
        match basic.get_mut("image") {
            None => {
                basic.insert("image".into(), json!(url));
            }
            Some(existing) => {
                if !existing.is_array() {
                    *existing = Value::Array(vec![existing.take()]);
                }
                if let Some(list) = existing.as_array_mut() {
                    if !list.iter().any(|v| v.as_str() == Some(url.as_str())) {
                        list.push(json!(url));
                    }
                }
            }
        }
        self
    }

    /// Set an arbitrary property on the basic document.
    pub fn add_property(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.basic().insert(key.into(), value);
        self
    }

    /// Append a complete document.
    pub fn push(&mut self, schema: Map<String, Value>) -> &mut Self {
        self.schemas.push(schema);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn documents(&self) -> &[Map<String, Value>] {
        &self.schemas
    }

    pub fn generate(&self) -> String {
        let mut out = String::new();
        for schema in &self.schemas {
            if schema.is_empty() {
                continue;
            }
            match serde_json::to_string_pretty(schema) {
                Ok(json) => {
                    out.push_str("<script type=\"application/ld+json\">");
                    out.push_str(&json);
                    out.push_str("</script>\n");
                }
                Err(err) => {
                    debug!("jsonld"; "skipping unserializable document: {err}");
                }
            }
        }
        out
    }

    pub fn reset(&mut self) {
        self.schemas.clear();
    }

    fn basic(&mut self) -> &mut Map<String, Value> {
        if self.schemas.is_empty() {
            let mut basic = Map::new();
            basic.insert("@context".into(), json!("https://schema.org"));
            basic.insert("@type".into(), json!("WebPage"));
            self.schemas.push(basic);
        }
        &mut self.schemas[0]
    }
}
