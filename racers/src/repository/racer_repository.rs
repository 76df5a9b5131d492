use super::{Page, PageRequest, RepositoryConfig};
use crate::collection::{Document, DocumentCollection, FindOptions, IdCodec, SortSpec, WriteResult};
use crate::common::{DocumentCursor, DEFAULT_PAGE};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use crate::filter::Filter;
use crate::query::QueryBuilder;
use crate::racer::Racer;
use crate::store::DocumentStoreProvider;

/// Finds, lists, pages, saves, updates and deletes racers in one store
/// collection.
///
/// Every caller supplied filter, sort and update goes through
/// [QueryBuilder] first. Every id goes through [IdCodec], so a malformed id
/// fails with `InvalidId` before the store is touched. A racer that does not
/// exist is never an error: lookups return `None` and writes affect nothing.
///
/// ```rust
/// use racers::doc;
/// use racers::repository::{PageRequest, RacerRepository};
/// use racers::store::memory::InMemoryStore;
/// use racers::Racer;
///
/// let store = InMemoryStore::new();
/// let repository = RacerRepository::builder().open(&store).unwrap();
///
/// let mut racer = Racer::from_external(&doc! { number: 1, first_name: "Ada" });
/// repository.save(&mut racer).unwrap();
/// assert!(racer.is_persisted());
///
/// let found = repository.find_by_id(racer.id().unwrap()).unwrap();
/// assert_eq!(found.unwrap().first_name.as_deref(), Some("Ada"));
///
/// let page = repository.paginate(&PageRequest::new()).unwrap();
/// assert_eq!(page.total(), 1);
/// ```
#[derive(Clone)]
pub struct RacerRepository {
    collection: DocumentCollection,
    config: RepositoryConfig,
}

impl RacerRepository {
    /// Creates a repository over `collection` with the default settings.
    pub fn new(collection: DocumentCollection) -> RacerRepository {
        RacerRepository::with_config(collection, RepositoryConfig::default())
    }

    pub fn with_config(collection: DocumentCollection, config: RepositoryConfig) -> RacerRepository {
        log::debug!("Creating racer repository over collection {}", collection.name());
        RacerRepository { collection, config }
    }

    pub fn builder() -> RacerRepositoryBuilder {
        RacerRepositoryBuilder::new()
    }

    pub fn collection(&self) -> &DocumentCollection {
        &self.collection
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Looks a racer up by its external id.
    ///
    /// Fails with `InvalidId` if `id` is malformed. Returns `None` if no
    /// racer has that id.
    pub fn find_by_id(&self, id: &str) -> RacerResult<Option<Racer>> {
        log::debug!("Getting racer {}", id);
        let object_id = IdCodec::to_storage(id)?;

        let mut cursor = self
            .collection
            .find(&Filter::by_id(object_id), &FindOptions::new().limit(1))?;
        match cursor.next() {
            Some(document) => Ok(Some(Racer::from_storage(&document?))),
            None => Ok(None),
        }
    }

    /// Lists raw racer documents.
    ///
    /// `filter` and `sort` are sanitized first. Documents are sorted, then
    /// the first `offset` are skipped, then at most `limit` are returned.
    pub fn list(
        &self,
        filter: Option<&Document>,
        sort: Option<&Document>,
        offset: u64,
        limit: Option<u64>,
    ) -> RacerResult<DocumentCursor> {
        let filter = QueryBuilder::build_filter(filter);
        let sort = QueryBuilder::build_sort(sort, self.config.default_sort());
        log::debug!(
            "Getting all racers, filter={}, sort={}, skip={}, limit={:?}",
            filter,
            sort.to_document(),
            offset,
            limit
        );

        self.collection.find(&filter, &find_options(sort, offset, limit))
    }

    /// Counts the racers matching the sanitized `filter`.
    pub fn count(&self, filter: Option<&Document>) -> RacerResult<u64> {
        let filter = QueryBuilder::build_filter(filter);
        self.collection.count(&filter)
    }

    /// Inserts `racer` as a new document and stores the id the store
    /// assigned back on the racer.
    pub fn save(&self, racer: &mut Racer) -> RacerResult<()> {
        log::debug!("Saving racer {}", racer);
        let result = self.collection.insert_one(racer.to_document())?;
        racer.set_id(IdCodec::to_external(&result.inserted_id()));
        Ok(())
    }

    /// Updates `racer` and its stored document with the racer fields present
    /// in `params`.
    ///
    /// The id is checked first, and a malformed or missing id leaves the
    /// racer untouched. The racer is then changed in memory and the same
    /// fields are written to the store, so a store failure leaves the
    /// in-memory racer already updated.
    pub fn update(&self, racer: &mut Racer, params: &Document) -> RacerResult<WriteResult> {
        log::debug!("Updating racer {} with {}", racer, params);
        let object_id = IdCodec::to_storage(require_id(racer)?)?;

        let patch = QueryBuilder::build_update(params);
        racer.apply_patch(&patch);
        self.collection.update_one(&Filter::by_id(object_id), &patch)
    }

    /// Deletes the stored document of `racer`. The racer itself is left as
    /// it was.
    pub fn destroy(&self, racer: &Racer) -> RacerResult<WriteResult> {
        log::debug!("Destroying racer {}", racer);
        let object_id = IdCodec::to_storage(require_id(racer)?)?;
        self.collection.delete_one(&Filter::by_id(object_id))
    }

    /// Fetches one page of racers and the total number of matches.
    ///
    /// The total comes from a separate count over the same filter, without
    /// sort, skip or limit.
    pub fn paginate(&self, request: &PageRequest) -> RacerResult<Page> {
        let page = request.page_number().unwrap_or(DEFAULT_PAGE).max(1);
        let per_page = request
            .page_size()
            .unwrap_or(self.config.default_per_page())
            .max(1);
        let offset = (page - 1).saturating_mul(per_page);
        log::debug!("Paginating racers, page={}, per_page={}", page, per_page);

        let records = self
            .list(request.filter_params(), request.sort_params(), offset, Some(per_page))?
            .map(|document| document.map(|document| Racer::from_storage(&document)))
            .collect::<RacerResult<Vec<Racer>>>()?;
        let total = self.count(request.filter_params())?;

        Ok(Page::new(records, page, per_page, total))
    }
}

fn find_options(sort: SortSpec, offset: u64, limit: Option<u64>) -> FindOptions {
    let options = FindOptions::new().sort_by(sort).skip(offset);
    match limit {
        Some(limit) => options.limit(limit),
        None => options,
    }
}

fn require_id(racer: &Racer) -> RacerResult<&str> {
    match racer.id() {
        Some(id) => Ok(id),
        None => {
            log::error!("Racer {} has no id", racer);
            Err(RacerError::new(
                &format!("Racer {} has no id", racer),
                ErrorKind::InvalidId,
            ))
        }
    }
}

/// Builds a [RacerRepository], collecting the first configuration error
/// until the repository is opened.
///
/// ```rust
/// use racers::collection::order_by;
/// use racers::common::SortOrder;
/// use racers::repository::RacerRepository;
/// use racers::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let repository = RacerRepository::builder()
///     .collection_name("results")
///     .default_per_page(10)
///     .default_sort(order_by("secs", SortOrder::Ascending))
///     .open(&store)
///     .unwrap();
/// assert_eq!(repository.collection().name(), "results");
/// ```
#[derive(Default)]
pub struct RacerRepositoryBuilder {
    error: Option<RacerError>,
    config: RepositoryConfig,
}

impl RacerRepositoryBuilder {
    pub fn new() -> Self {
        RacerRepositoryBuilder {
            error: None,
            config: RepositoryConfig::new(),
        }
    }

    pub fn collection_name(mut self, collection_name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_collection_name(collection_name) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn default_per_page(mut self, default_per_page: u64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_default_per_page(default_per_page) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn default_sort(mut self, default_sort: SortSpec) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_default_sort(default_sort) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Opens the configured collection of `store` and builds the repository.
    pub fn open<S: DocumentStoreProvider + ?Sized>(self, store: &S) -> RacerResult<RacerRepository> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let collection = store.collection(self.config.collection_name())?;
        Ok(RacerRepository::with_config(collection, self.config))
    }

    /// Builds the repository over an already opened collection. The
    /// configured collection name is not used.
    pub fn build(self, collection: DocumentCollection) -> RacerResult<RacerRepository> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(RacerRepository::with_config(collection, self.config))
    }
}
