//! The racer repository and its configuration.
//!
//! [RacerRepository] is the entry point for reading and writing racers. It
//! owns a [DocumentCollection](crate::collection::DocumentCollection) handle
//! and a [RepositoryConfig], and is built with [RacerRepositoryBuilder].

mod page;
mod racer_repository;
mod repository_config;

pub use page::*;
pub use racer_repository::*;
pub use repository_config::*;
