//! Documents, identifiers and the collection contract.
//!
//! A [Document] is an insertion-ordered map of field names to values. Every
//! stored document carries an `_id` holding an [ObjectId]; [IdCodec]
//! translates that id to and from the 24 character hex string used outside
//! the store.
//!
//! [DocumentCollectionProvider] is the contract a store collection fulfils:
//! find with sort, skip and limit, insert, first-match update and delete, and
//! count. [DocumentCollection] is the cloneable handle the repository owns.

mod document;
mod document_collection;
mod find_options;
mod id_codec;
pub(crate) mod id_generator;
mod object_id;
mod write_result;

pub use document::*;
pub use document_collection::*;
pub use find_options::*;
pub use id_codec::*;
pub use object_id::ObjectId;
pub use write_result::*;
