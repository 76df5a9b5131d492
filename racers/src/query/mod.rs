//! Sanitizing caller parameters into store queries.
//!
//! Every filter, sort and update that reaches the store passes through
//! [QueryBuilder], which enforces the racer field whitelist.

mod query_builder;

pub use query_builder::*;
