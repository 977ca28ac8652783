//! Deterministic content repository and relevance-ranking engine for
//! Markdown/MDX content sets.
//!
//! `content-core` provides frontmatter parsing, record normalization with
//! derived fields (slug, reading time), a re-read-on-every-query repository,
//! and a category/tag relevance ranker for related-content widgets. All
//! operations are deterministic — identical source files always produce
//! identical collections and identical orderings.

pub mod document;
pub mod related;
pub mod repository;
pub mod store;
