use chrono::{Local, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use super::frontmatter::Frontmatter;

const WORDS_PER_MINUTE: usize = 200;

/// Placeholder values applied when a document's metadata omits a field.
/// Each content set configures its own so the two sets can brand their
/// fallbacks differently.
#[derive(Debug, Clone, PartialEq)]
pub struct SetDefaults {
    pub author: String,
    pub category: String,
    pub cover_image: String,
}

impl Default for SetDefaults {
    fn default() -> Self {
        Self {
            author: "Editorial Team".to_string(),
            category: "General".to_string(),
            cover_image: "/images/placeholder-cover.jpg".to_string(),
        }
    }
}

/// A fully normalized content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub cover_image: String,
    pub category: String,
    pub excerpt: String,
    pub featured: bool,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub content: String,
}

impl Document {
    /// Normalize parsed frontmatter and body into a Document.
    ///
    /// This is the ONLY way to construct a Document. It enforces all
    /// invariants: every optional field gets a deterministic default, the
    /// slug falls back to the filename with its extension stripped, and
    /// `reading_time` is always populated. Missing or unparseable dates
    /// degrade to today's date with a logged warning rather than failing.
    ///
    /// # Panics
    ///
    /// Panics if `filename` is empty. That is a caller bug, not a runtime
    /// data condition.
    pub fn normalize(
        filename: &str,
        frontmatter: Frontmatter,
        body: String,
        defaults: &SetDefaults,
    ) -> Document {
        assert!(!filename.is_empty(), "filename must be non-empty");

        let slug = frontmatter
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| strip_extension(filename));

        let reading_time = frontmatter
            .reading_time
            .unwrap_or_else(|| estimate_reading_time(&body));

        let date = match frontmatter.date {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").unwrap_or_else(|_| {
                warn!("{filename}: unparseable date {raw:?}, using today");
                Local::now().date_naive()
            }),
            None => Local::now().date_naive(),
        };

        Document {
            slug,
            title: frontmatter.title.unwrap_or_default(),
            author: frontmatter.author.unwrap_or_else(|| defaults.author.clone()),
            date,
            cover_image: frontmatter
                .cover_image
                .unwrap_or_else(|| defaults.cover_image.clone()),
            category: frontmatter
                .category
                .unwrap_or_else(|| defaults.category.clone()),
            excerpt: frontmatter.excerpt.unwrap_or_default(),
            featured: frontmatter.featured.unwrap_or(false),
            reading_time,
            tags: frontmatter.tags.unwrap_or_default(),
            content: body,
        }
    }
}

fn strip_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => filename.to_string(),
    }
}

/// Reading time at 200 words per minute, rounded up.
/// Clamped to a minimum of one minute so an empty body never renders
/// as "0 min read".
fn estimate_reading_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
