use crate::collection::ObjectId;
use crate::errors::RacerResult;

/// Translates between the store's native [ObjectId] and the string form used
/// at API boundaries.
///
/// Every repository operation that receives an identifier goes through
/// [IdCodec::to_storage] first, so a malformed id fails before the store is
/// touched.
///
/// ```rust
/// use racers::collection::IdCodec;
/// use racers::errors::ErrorKind;
///
/// let id = IdCodec::to_storage("5f1d7c9b8a6e4d3c2b1a0987").unwrap();
/// assert_eq!(IdCodec::to_external(&id), "5f1d7c9b8a6e4d3c2b1a0987");
///
/// let err = IdCodec::to_storage("not-an-id").unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::InvalidId);
/// ```
pub struct IdCodec;

impl IdCodec {
    /// Parses an external id. Fails with `InvalidId` unless it is 24 hex characters.
    pub fn to_storage(external_id: &str) -> RacerResult<ObjectId> {
        ObjectId::parse_str(external_id)
    }

    /// Renders a native id in its canonical form. Never fails.
    pub fn to_external(native_id: &ObjectId) -> String {
        native_id.to_hex()
    }

    pub fn is_valid(external_id: &str) -> bool {
        ObjectId::is_valid(external_id)
    }
}
