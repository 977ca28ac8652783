use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use super::{ContentStore, RawDocument, StoreError};

/// Filesystem-backed store: one flat directory of `.mdx`/`.md` files.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    dir: PathBuf,
    extensions: Vec<String>,
}

impl FsContentStore {
    /// A store over `dir` accepting the given extensions (without dots,
    /// e.g. `&["mdx", "md"]`).
    pub fn new(dir: impl Into<PathBuf>, extensions: &[&str]) -> Self {
        Self {
            dir: dir.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ContentStore for FsContentStore {
    fn list_raw_documents(&self) -> Result<Vec<RawDocument>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Absence of authored content is not fatal to the site.
                warn!(
                    "content directory {} does not exist, serving empty set",
                    self.dir.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            if self.extensions.iter().any(|accepted| accepted == ext) {
                paths.push(path);
            }
        }
        // Lexicographic filename order keeps enumeration deterministic
        // across platforms and repeated scans.
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(filename) = path.file_name().and_then(|s| s.to_str()) else {
                warn!("skipping non-UTF-8 filename {}", path.display());
                continue;
            };
            let text = fs::read_to_string(&path)?;
            documents.push(RawDocument {
                filename: filename.to_string(),
                text,
            });
        }
        Ok(documents)
    }
}
