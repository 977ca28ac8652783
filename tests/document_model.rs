use chrono::{Local, NaiveDate};
use content_core::document::{Document, Frontmatter, SetDefaults};

fn normalize(filename: &str, frontmatter: Frontmatter, body: &str) -> Document {
    Document::normalize(filename, frontmatter, body.to_string(), &SetDefaults::default())
}

#[test]
fn slug_falls_back_to_filename_stem() {
    let doc = normalize("growth-hacks.mdx", Frontmatter::default(), "Body.");
    assert_eq!(doc.slug, "growth-hacks");
}

#[test]
fn explicit_slug_wins_over_filename() {
    let fm = Frontmatter {
        slug: Some("custom-slug".to_string()),
        ..Frontmatter::default()
    };
    let doc = normalize("growth-hacks.mdx", fm, "Body.");
    assert_eq!(doc.slug, "custom-slug");
}

#[test]
fn empty_slug_falls_back_to_filename_stem() {
    let fm = Frontmatter {
        slug: Some(String::new()),
        ..Frontmatter::default()
    };
    let doc = normalize("growth-hacks.mdx", fm, "Body.");
    assert_eq!(doc.slug, "growth-hacks");
}

#[test]
fn reading_time_computed_at_200_wpm() {
    let body = vec!["word"; 1000].join(" ");
    let doc = normalize("long.mdx", Frontmatter::default(), &body);
    assert_eq!(doc.reading_time, "5 min read");
}

#[test]
fn reading_time_rounds_up() {
    let body = vec!["word"; 201].join(" ");
    let doc = normalize("odd.mdx", Frontmatter::default(), &body);
    assert_eq!(doc.reading_time, "2 min read");
}

#[test]
fn reading_time_clamps_to_one_minute() {
    let doc = normalize("empty.mdx", Frontmatter::default(), "");
    assert_eq!(doc.reading_time, "1 min read");
}

#[test]
fn explicit_reading_time_is_preserved() {
    let fm = Frontmatter {
        reading_time: Some("12 min read".to_string()),
        ..Frontmatter::default()
    };
    let doc = normalize("long.mdx", fm, "short body");
    assert_eq!(doc.reading_time, "12 min read");
}

#[test]
fn missing_fields_get_deterministic_defaults() {
    let doc = normalize("bare.mdx", Frontmatter::default(), "Body.");

    let defaults = SetDefaults::default();
    assert_eq!(doc.author, defaults.author);
    assert_eq!(doc.category, defaults.category);
    assert_eq!(doc.cover_image, defaults.cover_image);
    assert_eq!(doc.excerpt, "");
    assert!(!doc.featured);
    assert!(doc.tags.is_empty());
}

#[test]
fn custom_set_defaults_apply() {
    let defaults = SetDefaults {
        author: "Blog Desk".to_string(),
        category: "Updates".to_string(),
        cover_image: "/images/blog-fallback.jpg".to_string(),
    };
    let doc = Document::normalize("post.md", Frontmatter::default(), "Body.".to_string(), &defaults);

    assert_eq!(doc.author, "Blog Desk");
    assert_eq!(doc.category, "Updates");
    assert_eq!(doc.cover_image, "/images/blog-fallback.jpg");
}

#[test]
fn invariant_reading_time_and_category_always_present() {
    let inputs = [
        ("a.mdx", Frontmatter::default(), ""),
        (
            "b.mdx",
            Frontmatter {
                category: Some("Growth".to_string()),
                ..Frontmatter::default()
            },
            "one two three",
        ),
    ];
    for (filename, fm, body) in inputs {
        let doc = normalize(filename, fm, body);
        assert!(!doc.reading_time.is_empty());
        assert!(!doc.category.is_empty());
    }
}

#[test]
fn iso_date_is_parsed() {
    let fm = Frontmatter {
        date: Some("2024-02-01".to_string()),
        ..Frontmatter::default()
    };
    let doc = normalize("dated.mdx", fm, "Body.");
    assert_eq!(doc.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
}

#[test]
fn absent_date_defaults_to_today() {
    let doc = normalize("undated.mdx", Frontmatter::default(), "Body.");
    assert_eq!(doc.date, Local::now().date_naive());
}

#[test]
fn unparseable_date_degrades_to_today() {
    let fm = Frontmatter {
        date: Some("next Tuesday".to_string()),
        ..Frontmatter::default()
    };
    let doc = normalize("vague.mdx", fm, "Body.");
    assert_eq!(doc.date, Local::now().date_naive());
}

#[test]
#[should_panic(expected = "filename must be non-empty")]
fn empty_filename_is_a_caller_bug() {
    normalize("", Frontmatter::default(), "Body.");
}
