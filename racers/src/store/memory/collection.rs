use crate::collection::{
    Document, DocumentCollectionProvider, FindOptions, InsertResult, ObjectId, WriteResult,
};
use crate::common::{atomic, Atomic, DocumentCursor, ReadExecutor, WriteExecutor, DOC_ID};
use crate::errors::{ErrorKind, RacerError, RacerResult};
use crate::filter::Filter;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A document collection held in memory.
///
/// Documents keep their insertion order, which is the natural order of a
/// find without a sort. Reads take a snapshot of the matching documents, so
/// a cursor is unaffected by writes made while it is being consumed.
#[derive(Clone)]
pub struct InMemoryCollection {
    inner: Arc<InMemoryCollectionInner>,
}

impl InMemoryCollection {
    pub(crate) fn new(name: &str, capacity: usize, closed: Arc<AtomicBool>) -> Self {
        InMemoryCollection {
            inner: Arc::new(InMemoryCollectionInner {
                name: name.to_string(),
                documents: atomic(IndexMap::with_capacity(capacity)),
                closed,
            }),
        }
    }
}

impl DocumentCollectionProvider for InMemoryCollection {
    fn find(&self, filter: &Filter, find_options: &FindOptions) -> RacerResult<DocumentCursor> {
        self.inner.find(filter, find_options)
    }

    fn insert_one(&self, document: Document) -> RacerResult<InsertResult> {
        self.inner.insert_one(document)
    }

    fn update_one(&self, filter: &Filter, patch: &Document) -> RacerResult<WriteResult> {
        self.inner.update_one(filter, patch)
    }

    fn delete_one(&self, filter: &Filter) -> RacerResult<WriteResult> {
        self.inner.delete_one(filter)
    }

    fn count(&self, filter: &Filter) -> RacerResult<u64> {
        self.inner.count(filter)
    }

    fn name(&self) -> String {
        self.inner.name.clone()
    }
}

struct InMemoryCollectionInner {
    name: String,
    documents: Atomic<IndexMap<ObjectId, Document>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryCollectionInner {
    fn check_opened(&self) -> RacerResult<()> {
        if self.closed.load(Ordering::Acquire) {
            log::error!("Store is closed, cannot access collection {}", self.name);
            return Err(RacerError::new(
                &format!("Store is closed, cannot access collection {}", self.name),
                ErrorKind::StoreUnavailable,
            ));
        }
        Ok(())
    }

    fn find(&self, filter: &Filter, find_options: &FindOptions) -> RacerResult<DocumentCursor> {
        self.check_opened()?;

        let mut matches: Vec<Document> = self.documents.read_with(|documents| {
            documents
                .values()
                .filter(|document| filter.matches(document))
                .cloned()
                .collect()
        });

        if let Some(sort_spec) = find_options.sort_spec() {
            // stable, so ties keep insertion order
            matches.sort_by(|a, b| sort_spec.compare(a, b));
        }

        let skip = usize::try_from(find_options.skip_count()).unwrap_or(usize::MAX);
        let iter = matches.into_iter().skip(skip).map(Ok::<Document, RacerError>);
        let iter: Box<dyn Iterator<Item = RacerResult<Document>>> =
            match find_options.limit_count() {
                Some(limit) => Box::new(iter.take(usize::try_from(limit).unwrap_or(usize::MAX))),
                None => Box::new(iter),
            };

        Ok(DocumentCursor::new(iter))
    }

    fn insert_one(&self, mut document: Document) -> RacerResult<InsertResult> {
        self.check_opened()?;

        let id = match document.id() {
            Some(id) => id,
            None => {
                let id = ObjectId::new();
                document.put(DOC_ID, id)?;
                id
            }
        };

        self.documents.write_with(|documents| {
            if documents.contains_key(&id) {
                log::error!("Duplicate _id {} in collection {}", id, self.name);
                return Err(RacerError::new(
                    &format!("Duplicate _id {} in collection {}", id, self.name),
                    ErrorKind::UniqueConstraintViolation,
                ));
            }
            documents.insert(id, document);
            Ok(())
        })?;

        Ok(InsertResult::new(id))
    }

    fn update_one(&self, filter: &Filter, patch: &Document) -> RacerResult<WriteResult> {
        self.check_opened()?;

        let updated = self.documents.write_with(|documents| {
            let id = Self::first_match(documents, filter)?;
            let document = documents.get_mut(&id)?;
            document.merge(patch);
            Some(id)
        });

        Ok(WriteResult::new(updated.into_iter().collect()))
    }

    fn delete_one(&self, filter: &Filter) -> RacerResult<WriteResult> {
        self.check_opened()?;

        let removed = self.documents.write_with(|documents| {
            let id = Self::first_match(documents, filter)?;
            documents.shift_remove(&id).map(|_| id)
        });

        Ok(WriteResult::new(removed.into_iter().collect()))
    }

    fn count(&self, filter: &Filter) -> RacerResult<u64> {
        self.check_opened()?;

        let count = self.documents.read_with(|documents| {
            documents
                .values()
                .filter(|document| filter.matches(document))
                .count()
        });
        Ok(count as u64)
    }

    fn first_match(documents: &IndexMap<ObjectId, Document>, filter: &Filter) -> Option<ObjectId> {
        // lookups by _id skip the scan
        if let Some(id) = filter.conditions().id() {
            return documents
                .get(&id)
                .filter(|document| filter.matches(document))
                .map(|_| id);
        }

        documents
            .iter()
            .find(|(_, document)| filter.matches(document))
            .map(|(id, _)| *id)
    }
}
