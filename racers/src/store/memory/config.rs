/// Configuration for an in-memory store.
///
/// ```rust
/// use racers::store::memory::{InMemoryStore, InMemoryStoreConfig};
///
/// let config = InMemoryStoreConfig::new().initial_capacity(1024);
/// let store = InMemoryStore::with_config(config);
/// assert!(!store.is_closed());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryStoreConfig {
    initial_capacity: usize,
}

impl InMemoryStoreConfig {
    pub fn new() -> InMemoryStoreConfig {
        InMemoryStoreConfig {
            initial_capacity: 64,
        }
    }

    /// Number of documents each new collection reserves room for.
    pub fn initial_capacity(mut self, initial_capacity: usize) -> InMemoryStoreConfig {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for InMemoryStoreConfig {
    fn default() -> Self {
        InMemoryStoreConfig::new()
    }
}
