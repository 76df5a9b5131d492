use crate::collection::{order_by, Document, SortSpec};
use crate::common::{lenient_int, SortOrder, Value, FIELD_NUMBER, FIELD_SECS, RACER_FIELDS};
use crate::filter::Filter;

/// Translates caller supplied parameters into store-safe query inputs.
///
/// Only the racer fields in [RACER_FIELDS] ever reach the store. Keys are
/// trimmed before the check and anything else is dropped silently.
///
/// ```rust
/// use racers::doc;
/// use racers::query::QueryBuilder;
///
/// let raw = doc! { secs: (-1), password: 1, number: "asc" };
/// let sort = QueryBuilder::build_sort(Some(&raw), &QueryBuilder::default_sort());
/// assert_eq!(sort.field_names(), vec!["secs", "number"]);
/// ```
pub struct QueryBuilder;

impl QueryBuilder {
    /// Returns `true` if `field_name` may be filtered, sorted or updated by.
    pub fn is_allowed(field_name: &str) -> bool {
        RACER_FIELDS.contains(&field_name.trim())
    }

    /// The sort applied when a caller gives none: `number` ascending.
    pub fn default_sort() -> SortSpec {
        order_by(FIELD_NUMBER, SortOrder::Ascending)
    }

    /// Builds an equality filter from the whitelisted keys of `raw`.
    ///
    /// No input, or no surviving key, yields a filter matching everything.
    pub fn build_filter(raw: Option<&Document>) -> Filter {
        let mut conditions = Document::new();
        for (key, value) in Self::allowed_entries(raw) {
            // whitelisted names are never empty nor `_id`
            let _ = conditions.put(key, value.clone());
        }
        Filter::from_document(conditions)
    }

    /// Builds a sort specification from the whitelisted keys of `raw`,
    /// keeping their order.
    ///
    /// A key whose direction is not recognized is dropped. When nothing
    /// survives, `default_sort` is returned.
    pub fn build_sort(raw: Option<&Document>, default_sort: &SortSpec) -> SortSpec {
        let mut sort = SortSpec::new();
        for (key, value) in Self::allowed_entries(raw) {
            match SortOrder::parse(value) {
                Some(sort_order) => sort = sort.add_sorted_field(key, sort_order),
                None => log::debug!("Dropping sort key {} with direction {}", key, value),
            }
        }

        if sort.is_empty() {
            default_sort.clone()
        } else {
            sort
        }
    }

    /// Builds the patch an update writes: the whitelisted keys present in
    /// `params`, coerced to their stored types.
    ///
    /// `number` and `secs` are read leniently as integers, so `"120"` gives
    /// 120 and `"abc"` gives 0. Other fields are stored as text, and a null
    /// value stays null.
    pub fn build_update(params: &Document) -> Document {
        let mut patch = Document::new();
        for (key, value) in Self::allowed_entries(Some(params)) {
            let coerced = if key == FIELD_NUMBER || key == FIELD_SECS {
                Value::I64(lenient_int(value))
            } else {
                Value::from_option(value.to_text())
            };
            let _ = patch.put(key, coerced);
        }
        patch
    }

    fn allowed_entries<'a>(
        raw: Option<&'a Document>,
    ) -> impl Iterator<Item = (&'static str, &'a Value)> + 'a {
        raw.into_iter().flat_map(|document| {
            document.iter().filter_map(|(key, value)| {
                let key = key.trim();
                RACER_FIELDS
                    .iter()
                    .find(|field| **field == key)
                    .map(|field| (*field, value))
            })
        })
    }
}
