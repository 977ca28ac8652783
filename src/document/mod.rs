pub mod document;
pub mod frontmatter;

pub use document::{Document, SetDefaults};
pub use frontmatter::{parse_document, DocumentError, Frontmatter};
