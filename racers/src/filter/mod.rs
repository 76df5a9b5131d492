//! Equality filters evaluated by the store.
//!
//! A [Filter] is a prototype document: a stored document matches when every
//! field of the prototype is equal to the same field of the document. An
//! empty prototype matches everything.
//!
//! ```rust
//! use racers::doc;
//! use racers::filter::{all, Filter};
//!
//! let filter = Filter::eq("gender", "F").and_eq("group", "masters");
//! assert!(filter.matches(&doc! { gender: "F", group: "masters", secs: 10 }));
//! assert!(!filter.matches(&doc! { gender: "M", group: "masters" }));
//! assert!(all().matches(&doc! {}));
//! ```

use crate::collection::{Document, ObjectId};
use crate::common::{Value, DOC_ID};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    conditions: Document,
}

/// A filter matching every document.
pub fn all() -> Filter {
    Filter::default()
}

impl Filter {
    /// Builds a filter from a prototype document, taken as-is.
    pub fn from_document(conditions: Document) -> Filter {
        Filter { conditions }
    }

    /// Matches the single document with this identifier.
    pub fn by_id(id: ObjectId) -> Filter {
        let mut conditions = Document::new();
        // an ObjectId is always accepted under `_id`
        let _ = conditions.put(DOC_ID, id);
        Filter { conditions }
    }

    /// Matches documents whose `field_name` equals `value`.
    pub fn eq(field_name: &str, value: impl Into<Value>) -> Filter {
        Filter::default().and_eq(field_name, value)
    }

    /// Adds another equality condition.
    ///
    /// Conditions that the underlying document rejects (an empty field name
    /// or a non-id value under `_id`) are dropped with a warning.
    pub fn and_eq(mut self, field_name: &str, value: impl Into<Value>) -> Filter {
        if let Err(err) = self.conditions.put(field_name, value) {
            log::warn!("Ignoring filter condition on '{}': {}", field_name, err);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &Document {
        &self.conditions
    }

    /// Returns `true` if every condition holds for `document`.
    ///
    /// A missing field compares as null, so `{secs: null}` matches documents
    /// without `secs`.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field_name, expected)| document.get_or_null(field_name) == expected)
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.conditions)
    }
}
