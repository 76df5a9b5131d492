use crate::collection::SortSpec;
use crate::common::{DEFAULT_PER_PAGE, RACER_COLLECTION};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use crate::query::QueryBuilder;

/// Settings of a [RacerRepository](crate::repository::RacerRepository).
///
/// Defaults: collection `racers`, 30 racers per page, sorted by `number`
/// ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryConfig {
    collection_name: String,
    default_per_page: u64,
    default_sort: SortSpec,
}

impl RepositoryConfig {
    pub fn new() -> RepositoryConfig {
        RepositoryConfig {
            collection_name: RACER_COLLECTION.to_string(),
            default_per_page: DEFAULT_PER_PAGE,
            default_sort: QueryBuilder::default_sort(),
        }
    }

    pub fn set_collection_name(&mut self, collection_name: &str) -> RacerResult<()> {
        let collection_name = collection_name.trim();
        if collection_name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(RacerError::new(
                "Collection name cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }
        self.collection_name = collection_name.to_string();
        Ok(())
    }

    pub fn set_default_per_page(&mut self, default_per_page: u64) -> RacerResult<()> {
        if default_per_page == 0 {
            log::error!("Default page size must be at least 1");
            return Err(RacerError::new(
                "Default page size must be at least 1",
                ErrorKind::InvalidOperation,
            ));
        }
        self.default_per_page = default_per_page;
        Ok(())
    }

    /// Sets the sort used when a caller gives none. Every key must be a
    /// racer field.
    pub fn set_default_sort(&mut self, default_sort: SortSpec) -> RacerResult<()> {
        if default_sort.is_empty() {
            log::error!("Default sort cannot be empty");
            return Err(RacerError::new(
                "Default sort cannot be empty",
                ErrorKind::InvalidOperation,
            ));
        }

        if let Some(field_name) = default_sort
            .field_names()
            .into_iter()
            .find(|name| !QueryBuilder::is_allowed(name))
        {
            log::error!("Cannot sort racers by {}", field_name);
            return Err(RacerError::new(
                &format!("Cannot sort racers by {}", field_name),
                ErrorKind::InvalidOperation,
            ));
        }

        self.default_sort = default_sort;
        Ok(())
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn default_per_page(&self) -> u64 {
        self.default_per_page
    }

    pub fn default_sort(&self) -> &SortSpec {
        &self.default_sort
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig::new()
    }
}
