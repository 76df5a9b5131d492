use crate::collection::ObjectId;

/// Result of an update or delete: the ids of the documents it touched.
///
/// An empty result is a success. Updating or deleting a document that no
/// longer exists affects nothing and is not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteResult {
    object_ids: Vec<ObjectId>,
}

impl WriteResult {
    pub fn new(object_ids: Vec<ObjectId>) -> Self {
        Self { object_ids }
    }

    pub fn affected_ids(&self) -> &Vec<ObjectId> {
        &self.object_ids
    }

    pub fn affected_count(&self) -> usize {
        self.object_ids.len()
    }

    pub fn is_noop(&self) -> bool {
        self.object_ids.is_empty()
    }
}

/// Result of an insert: the id the store assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertResult {
    inserted_id: ObjectId,
}

impl InsertResult {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self { inserted_id }
    }

    pub fn inserted_id(&self) -> ObjectId {
        self.inserted_id
    }
}
