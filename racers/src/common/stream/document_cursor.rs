use crate::collection::{Document, ObjectId};
use crate::errors::RacerResult;

/// A lazily consumed sequence of store documents.
///
/// Documents are pulled from the underlying iterator on demand and cached, so
/// a cursor can be sized, rewound and iterated again without going back to
/// the store.
pub struct DocumentCursor {
    underlying: Option<Box<dyn Iterator<Item = RacerResult<Document>>>>,
    cache: Vec<RacerResult<Document>>,
    current_index: usize,
}

impl DocumentCursor {
    pub fn new(iter: Box<dyn Iterator<Item = RacerResult<Document>>>) -> Self {
        DocumentCursor {
            underlying: Some(iter),
            cache: Vec::new(),
            current_index: 0,
        }
    }

    /// A cursor over an already materialized result.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        DocumentCursor::new(Box::new(documents.into_iter().map(Ok)))
    }

    /// Resets the cursor so that it can be iterated from the beginning.
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Number of documents in the cursor. Drains the underlying iterator.
    pub fn size(&mut self) -> usize {
        if self.underlying.is_none() {
            self.reset();
            return self.cache.len();
        }
        for _ in self.by_ref() {}
        self.reset();
        self.cache.len()
    }

    pub fn first(&mut self) -> Option<RacerResult<Document>> {
        self.reset();
        self.next()
    }

    /// Yields `(ObjectId, Document)` pairs, skipping documents without an id.
    pub fn iter_with_id(&mut self) -> impl Iterator<Item = RacerResult<(ObjectId, Document)>> + '_ {
        self.by_ref().filter_map(|result| match result {
            Ok(document) => document.id().map(|id| Ok((id, document))),
            Err(e) => Some(Err(e)),
        })
    }
}

impl Iterator for DocumentCursor {
    type Item = RacerResult<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.cache.len() {
            let result = self.cache[self.current_index].clone();
            self.current_index += 1;
            return Some(result);
        }

        if let Some(ref mut iter) = self.underlying {
            if let Some(item) = iter.next() {
                self.cache.push(item.clone());
                self.current_index += 1;
                return Some(item);
            }
            // Once exhausted, drop the underlying iterator.
            self.underlying = None;
        }
        None
    }
}
