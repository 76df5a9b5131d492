use crate::collection::{Document, IdCodec};
use crate::common::{
    Value, DOC_ID, EXTERNAL_ID, FIELD_FIRST_NAME, FIELD_GENDER, FIELD_GROUP, FIELD_LAST_NAME,
    FIELD_NUMBER, FIELD_SECS,
};
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// A race participant.
///
/// A racer is built either from the parameters a caller sends
/// ([Racer::from_external], id under `id`) or from a stored document
/// ([Racer::from_storage], id under `_id`). The id is absent until the racer
/// has been saved, and [Racer::is_persisted] reports exactly that.
///
/// Fields are copied as they are: integer fields take integer values, string
/// fields take string values, and a value of any other type leaves the field
/// unset. Caller parameters usually arrive as form text, so
/// [Racer::from_external] also reads an integer field from a string holding
/// exactly one integer.
///
/// ```rust
/// use racers::doc;
/// use racers::Racer;
///
/// let racer = Racer::from_external(&doc! { number: "7", first_name: "Ada", secs: "fast" });
/// assert_eq!(racer.number, Some(7));
/// assert_eq!(racer.first_name.as_deref(), Some("Ada"));
/// assert_eq!(racer.secs, None);
/// assert!(!racer.is_persisted());
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Racer {
    id: Option<String>,
    pub number: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub group: Option<String>,
    pub secs: Option<i64>,
}

impl Racer {
    pub fn new() -> Racer {
        Racer::default()
    }

    /// Builds a racer from caller parameters. The id is read from `id`.
    pub fn from_external(params: &Document) -> Racer {
        log::debug!("instantiating racer from {}", params);
        let mut racer = Racer::with_fields(params);
        racer.id = params.get(EXTERNAL_ID).and_then(id_text);
        racer.number = racer.number.or_else(|| int_text_field(params, FIELD_NUMBER));
        racer.secs = racer.secs.or_else(|| int_text_field(params, FIELD_SECS));
        racer
    }

    /// Builds a racer from a stored document. The id is read from `_id`,
    /// falling back to `id`.
    pub fn from_storage(document: &Document) -> Racer {
        log::debug!("instantiating racer from {}", document);
        let mut racer = Racer::with_fields(document);
        racer.id = document
            .get(DOC_ID)
            .and_then(id_text)
            .or_else(|| document.get(EXTERNAL_ID).and_then(id_text));
        racer
    }

    fn with_fields(document: &Document) -> Racer {
        Racer {
            id: None,
            number: int_field(document, FIELD_NUMBER),
            first_name: string_field(document, FIELD_FIRST_NAME),
            last_name: string_field(document, FIELD_LAST_NAME),
            gender: string_field(document, FIELD_GENDER),
            group: string_field(document, FIELD_GROUP),
            secs: int_field(document, FIELD_SECS),
        }
    }

    /// The external id, once saved.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Racers carry no timestamps.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Racers carry no timestamps.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Renders every field as a document, unset fields as null.
    ///
    /// The id is written under `id`, and only when set.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        let fields: [(&str, Value); 6] = [
            (FIELD_NUMBER, self.number.into()),
            (FIELD_FIRST_NAME, self.first_name.clone().into()),
            (FIELD_LAST_NAME, self.last_name.clone().into()),
            (FIELD_GENDER, self.gender.clone().into()),
            (FIELD_GROUP, self.group.clone().into()),
            (FIELD_SECS, self.secs.into()),
        ];

        if let Some(id) = &self.id {
            let _ = document.put(EXTERNAL_ID, id.as_str());
        }
        for (field_name, value) in fields {
            // racer field names are constants, never empty
            let _ = document.put(field_name, value);
        }
        document
    }

    /// Overwrites the fields present in an already coerced update patch.
    pub(crate) fn apply_patch(&mut self, patch: &Document) {
        for (field_name, value) in patch.iter() {
            match field_name.as_str() {
                FIELD_NUMBER => self.number = value.as_i64().copied(),
                FIELD_FIRST_NAME => self.first_name = value.as_string().cloned(),
                FIELD_LAST_NAME => self.last_name = value.as_string().cloned(),
                FIELD_GENDER => self.gender = value.as_string().cloned(),
                FIELD_GROUP => self.group = value.as_string().cloned(),
                FIELD_SECS => self.secs = value.as_i64().copied(),
                _ => {}
            }
        }
    }
}

impl Display for Racer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn show<T: Display>(value: &Option<T>) -> String {
            value.as_ref().map_or_else(|| "-".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "Racer(id={}, number={}, name={} {}, gender={}, group={}, secs={})",
            show(&self.id),
            show(&self.number),
            show(&self.first_name),
            show(&self.last_name),
            show(&self.gender),
            show(&self.group),
            show(&self.secs),
        )
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::ObjectId(id) => Some(IdCodec::to_external(id)),
        Value::String(id) => Some(id.clone()),
        _ => None,
    }
}

fn int_field(document: &Document, field_name: &str) -> Option<i64> {
    document.get(field_name).and_then(|v| v.as_i64()).copied()
}

fn int_text_field(document: &Document, field_name: &str) -> Option<i64> {
    document
        .get(field_name)
        .and_then(|v| v.as_string())
        .and_then(|text| text.trim().parse::<i64>().ok())
}

fn string_field(document: &Document, field_name: &str) -> Option<String> {
    document.get(field_name).and_then(|v| v.as_string()).cloned()
}
