use crate::collection::id_generator::ID_GENERATOR;
use crate::common::{OBJECT_ID_HEX_LEN, OBJECT_ID_LEN};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Debug, Display};
use std::str::FromStr;

static OBJECT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("object id pattern is valid"));

/// The store's native 12-byte document identifier.
///
/// The bytes are laid out as a 4-byte big-endian creation timestamp in
/// seconds, a 5-byte value unique to the generating process and a 3-byte
/// big-endian counter. The canonical text form is 24 lowercase hex
/// characters.
///
/// ```rust
/// use racers::collection::ObjectId;
///
/// let id = ObjectId::new();
/// let parsed = ObjectId::parse_str(&id.to_hex()).unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
pub struct ObjectId {
    bytes: [u8; OBJECT_ID_LEN],
}

impl ObjectId {
    /// Generates a new unique `ObjectId`.
    pub fn new() -> Self {
        ID_GENERATOR.next_id()
    }

    pub fn from_bytes(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        ObjectId { bytes }
    }

    pub fn bytes(&self) -> [u8; OBJECT_ID_LEN] {
        self.bytes
    }

    /// Returns `true` if `text` is exactly 24 hex characters, in either case.
    pub fn is_valid(text: &str) -> bool {
        OBJECT_ID_PATTERN.is_match(text)
    }

    /// Parses the 24 character hex form of an object id.
    pub fn parse_str(text: &str) -> RacerResult<ObjectId> {
        if !ObjectId::is_valid(text) {
            log::error!("'{}' is not a valid object id", text);
            return Err(RacerError::new(
                &format!(
                    "'{}' is not a valid object id, expected {} hex characters",
                    text, OBJECT_ID_HEX_LEN
                ),
                ErrorKind::InvalidId,
            ));
        }

        let mut bytes = [0u8; OBJECT_ID_LEN];
        hex::decode_to_slice(text, &mut bytes)?;
        Ok(ObjectId { bytes })
    }

    /// The canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The second at which this id was generated.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let seconds = u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]]);
        DateTime::from_timestamp(seconds as i64, 0).unwrap_or_default()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::new()
    }
}

impl FromStr for ObjectId {
    type Err = RacerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
    }
}

impl Debug for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ObjectId::parse_str(&text).map_err(serde::de::Error::custom)
    }
}
