use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unterminated frontmatter block in {file}")]
    UnterminatedFrontmatter { file: String },
    #[error("invalid frontmatter in {file}: {source}")]
    Frontmatter {
        file: String,
        source: serde_yaml::Error,
    },
}

/// Raw metadata block as authored, before normalization.
///
/// Every field is optional; missing values are filled in by
/// [`Document::normalize`](crate::document::Document::normalize). The serde
/// aliases absorb the field-name drift between the two historical content
/// sets (`coverImage` vs `image`, `excerpt` vs `description`) so one
/// pipeline serves both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Frontmatter {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "image")]
    pub cover_image: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "description")]
    pub excerpt: Option<String>,
    pub featured: Option<bool>,
    pub reading_time: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Split raw text into a frontmatter block and the remaining body.
///
/// The metadata block is YAML delimited by `---` lines at the top of the
/// file. A file with no leading delimiter is all body; an opening delimiter
/// with no closing one is a malformed document and fails for that document
/// only — callers skip it and keep loading the rest of the batch.
pub fn parse_document(filename: &str, raw: &str) -> Result<(Frontmatter, String), DocumentError> {
    let mut lines = raw.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Ok((Frontmatter::default(), raw.to_string())),
    }

    let mut header = Vec::new();
    let mut body = Vec::new();
    let mut terminated = false;
    for line in lines {
        if !terminated && line.trim_end() == "---" {
            terminated = true;
            continue;
        }
        if terminated {
            body.push(line);
        } else {
            header.push(line);
        }
    }

    if !terminated {
        return Err(DocumentError::UnterminatedFrontmatter {
            file: filename.to_string(),
        });
    }

    let header = header.join("\n");
    let frontmatter = if header.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(&header).map_err(|source| DocumentError::Frontmatter {
            file: filename.to_string(),
            source,
        })?
    };

    Ok((frontmatter, body.join("\n")))
}
