use crate::collection::DocumentCollection;
use crate::errors::RacerResult;
use std::ops::Deref;
use std::sync::Arc;

/// A store that hands out named document collections.
pub trait DocumentStoreProvider: Send + Sync {
    /// Opens the named collection, creating it if needed.
    fn collection(&self, name: &str) -> RacerResult<DocumentCollection>;

    fn has_collection(&self, name: &str) -> bool;

    /// Closes the store. Every later operation fails with `StoreUnavailable`.
    fn close(&self) -> RacerResult<()>;

    fn is_closed(&self) -> bool;
}

/// A cloneable handle to any [DocumentStoreProvider].
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<dyn DocumentStoreProvider>,
}

impl DocumentStore {
    pub fn new<T: DocumentStoreProvider + 'static>(inner: T) -> Self {
        DocumentStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for DocumentStore {
    type Target = Arc<dyn DocumentStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
