pub mod fs;
pub mod memory;

use thiserror::Error;

pub use fs::FsContentStore;
pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A raw document as it sits in the store, before parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub filename: String,
    pub text: String,
}

/// Source of raw documents for one content set.
///
/// Implementations re-enumerate on every call; there is no cached listing,
/// so a fresh read can never be stale. Enumeration order must be
/// deterministic — it is the tie-break for equal dates and the winner for
/// duplicate slugs.
pub trait ContentStore {
    fn list_raw_documents(&self) -> Result<Vec<RawDocument>, StoreError>;
}
