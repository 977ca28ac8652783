use std::collections::BTreeSet;
use std::path::PathBuf;

use log::{error, warn};

use crate::document::{parse_document, Document, SetDefaults};
use crate::related;
use crate::store::{ContentStore, FsContentStore, RawDocument};

/// Query surface over one content set's complete, normalized collection.
///
/// Every query re-derives its answer from the store: list, parse,
/// normalize, sort. There is no cache, so no staleness is possible;
/// content volume is small (tens of documents) and reads are local.
///
/// All recoverable conditions are absorbed here. Malformed documents are
/// skipped with a warning, store failures degrade to an empty collection,
/// and a miss is an explicit `Option::None` — callers only ever see valid
/// (possibly empty) collections.
pub struct ContentRepository<S> {
    store: S,
    defaults: SetDefaults,
}

impl<S: ContentStore> ContentRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            defaults: SetDefaults::default(),
        }
    }

    pub fn with_defaults(store: S, defaults: SetDefaults) -> Self {
        Self { store, defaults }
    }

    /// Load and normalize the collection in enumeration order.
    fn load(&self) -> Vec<Document> {
        let raw = match self.store.list_raw_documents() {
            Ok(raw) => raw,
            Err(e) => {
                error!("content store unavailable, serving empty set: {e}");
                return Vec::new();
            }
        };

        let mut documents = Vec::with_capacity(raw.len());
        for RawDocument { filename, text } in raw {
            match parse_document(&filename, &text) {
                Ok((frontmatter, body)) => {
                    documents.push(Document::normalize(&filename, frontmatter, body, &self.defaults));
                }
                Err(e) => warn!("skipping document: {e}"),
            }
        }
        documents
    }

    /// All documents, newest first. Stable sort: equal dates keep
    /// enumeration (filename) order.
    pub fn all(&self) -> Vec<Document> {
        let mut documents = self.load();
        documents.sort_by(|a, b| b.date.cmp(&a.date));
        documents
    }

    /// Look up a document by slug. Duplicate slugs are a tolerated
    /// data-entry ambiguity: the first in enumeration order wins.
    pub fn by_slug(&self, slug: &str) -> Option<Document> {
        self.load().into_iter().find(|d| d.slug == slug)
    }

    /// Documents with an exact (case-sensitive) category match, in `all()` order.
    pub fn by_category(&self, category: &str) -> Vec<Document> {
        self.all()
            .into_iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Documents whose tag set contains `tag`, in `all()` order.
    pub fn by_tag(&self, tag: &str) -> Vec<Document> {
        self.all()
            .into_iter()
            .filter(|d| d.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Documents flagged as featured, in `all()` order.
    pub fn featured(&self) -> Vec<Document> {
        self.all().into_iter().filter(|d| d.featured).collect()
    }

    /// Distinct categories, first-seen order over the `all()` sort.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for doc in self.all() {
            if seen.insert(doc.category.clone()) {
                out.push(doc.category);
            }
        }
        out
    }

    /// Distinct tags, first-seen order, flattened from each document's
    /// tag list in `all()` order.
    pub fn tags(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for doc in self.all() {
            for tag in doc.tags {
                if seen.insert(tag.clone()) {
                    out.push(tag);
                }
            }
        }
        out
    }

    /// Top-`limit` documents most relevant to the document at `slug`,
    /// excluding the document itself. An unknown slug yields an empty
    /// vec — a related-content widget failing to populate must never
    /// break the page.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<Document> {
        related::rank_related(&self.all(), slug, limit)
    }
}

/// Configuration for one content set: where its files live, which
/// extensions it accepts, and its placeholder defaults. The insights and
/// blog sets are the same pipeline with different parameters.
#[derive(Debug, Clone)]
pub struct ContentSet {
    pub dir: PathBuf,
    pub extensions: Vec<String>,
    pub defaults: SetDefaults,
}

impl ContentSet {
    /// The insights set: `.mdx` only.
    pub fn insights(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extensions: vec!["mdx".to_string()],
            defaults: SetDefaults::default(),
        }
    }

    /// The blog set: `.mdx` primarily, `.md` also accepted.
    pub fn blog(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extensions: vec!["mdx".to_string(), "md".to_string()],
            defaults: SetDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: SetDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the repository for this set, backed by the filesystem.
    pub fn repository(&self) -> ContentRepository<FsContentStore> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        ContentRepository::with_defaults(
            FsContentStore::new(self.dir.clone(), &extensions),
            self.defaults.clone(),
        )
    }
}
