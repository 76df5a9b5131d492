use super::{InMemoryCollection, InMemoryStoreConfig};
use crate::collection::DocumentCollection;
use crate::common::{atomic, Atomic, ReadExecutor, WriteExecutor};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use crate::store::DocumentStoreProvider;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A document store held entirely in process memory.
///
/// Collections are created on first access and live until the store is
/// dropped. Closing the store fails every later operation on the store and
/// on every collection handle it has given out with `StoreUnavailable`.
/// Nothing is persisted.
///
/// ```rust
/// use racers::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let racers = store.collection("racers").unwrap();
/// assert_eq!(racers.name(), "racers");
///
/// store.close().unwrap();
/// assert!(store.collection("racers").is_err());
/// ```
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore::with_config(InMemoryStoreConfig::default())
    }

    pub fn with_config(store_config: InMemoryStoreConfig) -> InMemoryStore {
        InMemoryStore {
            inner: Arc::new(InMemoryStoreInner::new(store_config)),
        }
    }

    /// Opens the named collection, creating it if needed.
    pub fn collection(&self, name: &str) -> RacerResult<DocumentCollection> {
        self.inner.collection(name)
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.inner.collections.read_with(|it| it.contains_key(name))
    }

    /// Names of every collection opened so far, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.collections.read_with(|it| it.keys().cloned().collect());
        names.sort();
        names
    }

    pub fn close(&self) -> RacerResult<()> {
        self.inner.close()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &InMemoryStoreConfig {
        &self.inner.store_config
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

impl DocumentStoreProvider for InMemoryStore {
    fn collection(&self, name: &str) -> RacerResult<DocumentCollection> {
        InMemoryStore::collection(self, name)
    }

    fn has_collection(&self, name: &str) -> bool {
        InMemoryStore::has_collection(self, name)
    }

    fn close(&self) -> RacerResult<()> {
        InMemoryStore::close(self)
    }

    fn is_closed(&self) -> bool {
        InMemoryStore::is_closed(self)
    }
}

struct InMemoryStoreInner {
    store_config: InMemoryStoreConfig,
    collections: Atomic<HashMap<String, InMemoryCollection>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryStoreInner {
    fn new(store_config: InMemoryStoreConfig) -> InMemoryStoreInner {
        InMemoryStoreInner {
            store_config,
            collections: atomic(HashMap::new()),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn collection(&self, name: &str) -> RacerResult<DocumentCollection> {
        if self.closed.load(Ordering::Acquire) {
            log::error!("Store is closed, cannot open collection {}", name);
            return Err(RacerError::new(
                &format!("Store is closed, cannot open collection {}", name),
                ErrorKind::StoreUnavailable,
            ));
        }

        if name.trim().is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(RacerError::new(
                "Collection name cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }

        let collection = self.collections.write_with(|collections| {
            collections
                .entry(name.to_string())
                .or_insert_with(|| {
                    log::debug!("Creating in-memory collection {}", name);
                    InMemoryCollection::new(name, self.store_config.capacity(), self.closed.clone())
                })
                .clone()
        });
        Ok(DocumentCollection::new(collection))
    }

    fn close(&self) -> RacerResult<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            log::info!("In-memory store closed");
        }
        Ok(())
    }
}
