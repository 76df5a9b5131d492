use super::{Document, FindOptions, InsertResult, WriteResult};
use crate::common::DocumentCursor;
use crate::errors::RacerResult;
use crate::filter::Filter;
use std::ops::Deref;
use std::sync::Arc;

/// The contract a document store collection must fulfil.
///
/// Implementations own their consistency and concurrency guarantees. Callers
/// get no compare-and-swap; the last write wins.
pub trait DocumentCollectionProvider: Send + Sync {
    /// Returns the documents matching `filter`, sorted, then skipped, then
    /// limited according to `find_options`.
    fn find(&self, filter: &Filter, find_options: &FindOptions) -> RacerResult<DocumentCursor>;

    /// Inserts a document. The store assigns an `_id` when the document has
    /// none and reports it back.
    fn insert_one(&self, document: Document) -> RacerResult<InsertResult>;

    /// Merges the fields of `patch` into the first document matching
    /// `filter`. `_id` is never changed.
    fn update_one(&self, filter: &Filter, patch: &Document) -> RacerResult<WriteResult>;

    /// Deletes the first document matching `filter`.
    fn delete_one(&self, filter: &Filter) -> RacerResult<WriteResult>;

    /// Counts the documents matching `filter`, regardless of any skip or limit.
    fn count(&self, filter: &Filter) -> RacerResult<u64>;

    /// Returns the name of this collection.
    fn name(&self) -> String;
}

/// A cloneable handle to a document collection.
///
/// # Examples
///
/// ```rust
/// use racers::doc;
/// use racers::filter::all;
/// use racers::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let racers = store.collection("racers").unwrap();
/// racers.insert_one(doc! { number: 1, first_name: "Ada" }).unwrap();
/// assert_eq!(racers.count(&all()).unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct DocumentCollection {
    inner: Arc<dyn DocumentCollectionProvider>,
}

impl DocumentCollection {
    pub fn new<T: DocumentCollectionProvider + 'static>(inner: T) -> Self {
        DocumentCollection {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for DocumentCollection {
    type Target = Arc<dyn DocumentCollectionProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
