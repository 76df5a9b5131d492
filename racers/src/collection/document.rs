use crate::collection::ObjectId;
use crate::common::{Value, DOC_ID};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use indexmap::IndexMap;
use itertools::Itertools;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// An insertion-ordered map of field names to [Value]s.
///
/// Documents are what the store persists and also what callers hand to the
/// repository as parameters. Field order is preserved exactly as inserted,
/// which is what makes multi-key sort specifications meaningful.
///
/// The `_id` field is reserved for the store identifier and only accepts
/// [Value::ObjectId].
#[derive(Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    data: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with `key`.
    ///
    /// Replacing an existing key keeps its original position. Fails when the
    /// key is empty or when `_id` is given anything but an object id.
    ///
    /// ```rust
    /// use racers::collection::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.put("first_name", "Ada").unwrap();
    /// doc.put("number", 7).unwrap();
    /// assert_eq!(doc.size(), 2);
    /// assert!(doc.put("", 1).is_err());
    /// ```
    pub fn put<'a, T: Into<Value>>(
        &mut self,
        key: impl Into<Cow<'a, str>>,
        value: T,
    ) -> RacerResult<()> {
        let key = key.into();
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(RacerError::new(
                "Document does not support empty key",
                ErrorKind::InvalidOperation,
            ));
        }

        let value = value.into();
        if key == DOC_ID && !value.is_object_id() {
            log::error!("Document id must be an object id, found {}", value);
            return Err(RacerError::new(
                &format!("Document id must be an object id, found {}", value),
                ErrorKind::InvalidId,
            ));
        }

        self.data.insert(key.into_owned(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the value under `key`, treating a missing field as null.
    pub fn get_or_null(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.data.get(key).unwrap_or(&NULL)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes `key` and returns its value, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.shift_remove(key)
    }

    /// The store identifier, if this document has one.
    pub fn id(&self) -> Option<ObjectId> {
        self.data.get(DOC_ID).and_then(|v| v.as_object_id()).copied()
    }

    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    /// Copies every field of `other` into this document, except `_id`.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.iter() {
            if key != DOC_ID {
                self.data.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.data.iter()
    }

    fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        self.data.iter().sorted_by(|a, b| a.0.cmp(b.0)).collect()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Document {}

impl PartialOrd for Document {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Document {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_entries().cmp(&other.sorted_entries())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .data
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .join(", ");
        write!(f, "{{{}}}", body)
    }
}

/// Strips the quotes `stringify!` leaves around string literal keys.
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] from `key: value` pairs.
///
/// Values may be expressions, nested `{ ... }` documents or `[ ... ]` arrays.
///
/// ```rust
/// use racers::doc;
///
/// let params = doc! {
///     first_name: "Ada",
///     sort: { secs: (-1) },
/// };
/// assert_eq!(params.size(), 2);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::collection::Document::new()
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
