//! # Racers - race results over a document store
//!
//! A small object-document mapper for a single entity, the [Racer]. It
//! translates between the parameters a caller sends and the documents a
//! store keeps: it filters out fields that are not racer fields, translates
//! sort keys and ids, coerces updates and does the pagination arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use racers::doc;
//! use racers::repository::{PageRequest, RacerRepository};
//! use racers::store::memory::InMemoryStore;
//! use racers::Racer;
//!
//! # fn main() -> Result<(), racers::errors::RacerError> {
//! let store = InMemoryStore::new();
//! let repository = RacerRepository::builder().open(&store)?;
//!
//! let mut racer = Racer::from_external(&doc! {
//!     number: 7,
//!     first_name: "Ada",
//!     last_name: "Lovelace",
//!     gender: "F",
//!     group: "masters",
//!     secs: 3600,
//! });
//! repository.save(&mut racer)?;
//!
//! repository.update(&mut racer, &doc! { secs: "3540" })?;
//! assert_eq!(racer.secs, Some(3540));
//!
//! let page = repository.paginate(&PageRequest::from_params(&doc! {
//!     gender: "F",
//!     page: 1,
//!     sort: { secs: 1 },
//! }))?;
//! assert_eq!(page.total(), 1);
//!
//! repository.destroy(&racer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, object ids, find options and the collection contract
//! - [`common`] - Values, sort directions, cursors and shared constants
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Equality filters
//! - [`query`] - Sanitizing caller parameters into store queries
//! - [`repository`] - The racer repository, pages and configuration
//! - [`store`] - Store abstractions and the in-memory store

pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod query;
pub mod racer;
pub mod repository;
pub mod store;

pub use racer::Racer;
