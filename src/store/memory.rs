use super::{ContentStore, RawDocument, StoreError};

/// In-memory fixture store for tests and previews. Serves documents in
/// insertion order, which plays the role of filename order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Vec<RawDocument>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filename: impl Into<String>, text: impl Into<String>) {
        self.documents.push(RawDocument {
            filename: filename.into(),
            text: text.into(),
        });
    }
}

impl ContentStore for InMemoryStore {
    fn list_raw_documents(&self) -> Result<Vec<RawDocument>, StoreError> {
        Ok(self.documents.clone())
    }
}
