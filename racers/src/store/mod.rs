//! Document store abstractions and the bundled in-memory store.
//!
//! The repository only depends on [DocumentCollection]; a
//! [DocumentStoreProvider] is how a collection handle is obtained by name.
//! The [memory] module provides a complete store held in process memory.

pub mod memory;
mod document_store;

pub use document_store::*;
