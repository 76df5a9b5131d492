use crate::collection::Document;
use crate::common::{SortOrder, Value};
use std::cmp::Ordering;

/// An ordered list of `(field, direction)` pairs.
///
/// The first pair is the primary sort key, the next breaks ties, and so on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortSpec {
    sorting_order: Vec<(String, SortOrder)>,
}

impl SortSpec {
    pub fn new() -> SortSpec {
        SortSpec {
            sorting_order: Vec::new(),
        }
    }

    /// Appends a key. A field that is already present keeps its position and
    /// takes the new direction.
    pub fn add_sorted_field(mut self, field_name: impl Into<String>, sort_order: SortOrder) -> SortSpec {
        let field_name = field_name.into();
        match self.sorting_order.iter_mut().find(|(name, _)| *name == field_name) {
            Some(entry) => entry.1 = sort_order,
            None => self.sorting_order.push((field_name, sort_order)),
        }
        self
    }

    #[inline]
    pub fn add_field(self, field_name: impl Into<String>) -> SortSpec {
        self.add_sorted_field(field_name, SortOrder::Ascending)
    }

    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.sorting_order
    }

    pub fn field_names(&self) -> Vec<String> {
        self.sorting_order.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sorting_order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sorting_order.len()
    }

    /// Orders two documents by this spec. Missing fields compare as null.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        for (field_name, sort_order) in &self.sorting_order {
            let ordering = a.get_or_null(field_name).cmp(b.get_or_null(field_name));
            let ordering = match sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Renders the spec as a `{field: 1 | -1}` document.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for (field_name, sort_order) in &self.sorting_order {
            // field names here are never empty or `_id` typed values
            let _ = document.put(field_name.as_str(), Value::from(*sort_order));
        }
        document
    }
}

/// Creates a [SortSpec] with a single key.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> SortSpec {
    SortSpec::new().add_sorted_field(field_name, sort_order)
}

/// Options for a find: sort, then skip, then limit.
///
/// ```rust
/// use racers::collection::{order_by, FindOptions};
/// use racers::common::SortOrder;
///
/// let options = FindOptions::new()
///     .sort_by(order_by("secs", SortOrder::Ascending))
///     .skip(10)
///     .limit(10);
/// assert_eq!(options.skip_count(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub(crate) sort_by: Option<SortSpec>,
    pub(crate) skip: Option<u64>,
    pub(crate) limit: Option<u64>,
}

impl FindOptions {
    pub fn new() -> FindOptions {
        FindOptions {
            sort_by: None,
            skip: None,
            limit: None,
        }
    }

    pub fn sort_by(mut self, sort: SortSpec) -> FindOptions {
        self.sort_by = if sort.is_empty() { None } else { Some(sort) };
        self
    }

    pub fn skip(mut self, skip: u64) -> FindOptions {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u64) -> FindOptions {
        self.limit = Some(limit);
        self
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_by.as_ref()
    }

    pub fn skip_count(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit_count(&self) -> Option<u64> {
        self.limit
    }
}
