mod collection;
mod config;
mod store;

pub use collection::InMemoryCollection;
pub use config::InMemoryStoreConfig;
pub use store::InMemoryStore;
