//! Loosely-typed content model.
//!
//! Callers hand over whatever shape their CMS produces as `serde_json::Value`;
//! extraction probes ordered candidate keys and never fails. A non-object
//! value simply has no fields.
//!
//! # Example
//!
//! ```ignore
//! let model = Model::from(json!({
//!     "title": "Breaking News",
//!     "writer": { "name": "Jane" },
//!     "tags": [{ "name": "politics" }],
//! }));
//!
//! let fields = model.fields();
//! assert_eq!(fields.str_first(&["title", "name"]), Some("Breaking News"));
//! assert_eq!(fields.get("writer").and_then(|w| w.str_first(&["name"])), Some("Jane"));
//! ```

use serde_json::Value;

/// An owned content model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    root: Value,
}

impl Model {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// A model with no fields (used for `home()` and other model-less pages).
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    /// True when there is no underlying object at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_null()
    }

    /// Borrowed view for field probing.
    pub fn fields(&self) -> Fields<'_> {
        Fields(&self.root)
    }
}

impl From<Value> for Model {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Borrowed, copyable view over a model node.
///
/// All accessors return `Option` and tolerate any underlying shape.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(&'a Value);

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// The node itself as a string, when it is one.
    pub fn as_str(self) -> Option<&'a str> {
        self.0.as_str()
    }

    /// Raw field access.
    pub fn raw(self, key: &str) -> Option<&'a Value> {
        self.0.as_object().and_then(|o| o.get(key))
    }

    /// Sub-view of a field (relation, nested object, or scalar).
    pub fn get(self, key: &str) -> Option<Fields<'a>> {
        self.raw(key).map(Fields)
    }

    /// First candidate key holding a non-empty string.
    ///
    /// Numbers are accepted and would stringify at the call site; here only
    /// genuine strings match, which is what tag content needs.
    pub fn str_first(self, keys: &[&str]) -> Option<&'a str> {
        keys.iter()
            .filter_map(|k| self.raw(k))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// First candidate key holding a number (integers widen to f64).
    pub fn f64_first(self, keys: &[&str]) -> Option<f64> {
        keys.iter().filter_map(|k| self.raw(k)).find_map(Value::as_f64)
    }

    pub fn u64_first(self, keys: &[&str]) -> Option<u64> {
        keys.iter().filter_map(|k| self.raw(k)).find_map(Value::as_u64)
    }

    /// First candidate key holding a boolean.
    pub fn bool_first(self, keys: &[&str]) -> Option<bool> {
        keys.iter().filter_map(|k| self.raw(k)).find_map(Value::as_bool)
    }

    /// First candidate key holding an object — relation-style access
    /// (`writer`, `author`, `category`, ...).
    pub fn rel_first(self, keys: &[&str]) -> Option<Fields<'a>> {
        keys.iter()
            .filter_map(|k| self.raw(k))
            .find(|v| v.is_object())
            .map(Fields)
    }

    /// Iterate the elements of an array field.
    pub fn items(self, key: &str) -> impl Iterator<Item = Fields<'a>> {
        self.raw(key)
            .and_then(Value::as_array)
            .map(|a| a.as_slice())
            .unwrap_or_default()
            .iter()
            .map(Fields)
    }

    /// First element of an array field.
    pub fn first_of(self, key: &str) -> Option<Fields<'a>> {
        self.raw(key)
            .and_then(Value::as_array)
            .and_then(|a| a.first())
            .map(Fields)
    }

    /// Pluck a string field from each element of an array field
    /// (e.g. tag names: `pluck_str("tags", "name")`).
    pub fn pluck_str(self, key: &str, field: &str) -> Vec<&'a str> {
        self.items(key)
            .filter_map(|item| item.str_first(&[field]))
            .collect()
    }

    /// True when the field exists and is neither null nor an empty string.
    pub fn has(self, key: &str) -> bool {
        match self.raw(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }
}
