use bookmerge_rank::{RankConfig, SourceRanker};
use bookmerge_schema::{AttrType, DiffOp, HasSchema, Schemas};
use bookmerge_types::{Author, Book, Series};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn schemas() -> Schemas {
    Schemas::new(&SourceRanker::new(&RankConfig::default()).unwrap())
}

// ── Declaration table ────────────────────────────────────────────

#[test]
fn attribute_names_are_unique_and_ordered() {
    let s = schemas();
    let names: Vec<&str> = s.book.attributes().iter().map(|a| a.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
    assert_eq!(names.first(), Some(&"audiobookStoreSku"));
}

#[test]
fn declared_types_match_fields() {
    let s = schemas();
    assert_eq!(s.book.attribute("tags").unwrap().attr_type(), AttrType::TextSet);
    assert_eq!(s.book.attribute("ratings").unwrap().attr_type(), AttrType::FloatMap);
    assert_eq!(s.book.attribute("mc1").unwrap().attr_type(), AttrType::Record);
    assert_eq!(s.book.attribute("datePublish").unwrap().attr_type(), AttrType::Date);
    assert_eq!(s.author.attribute("queer").unwrap().attr_type(), AttrType::Enum);
    assert!(s.book.attribute("imageUrl").unwrap().has_resolver());
    assert!(!s.narrator.attribute("meanPagesPerHour").unwrap().is_writable());
}

#[test]
fn registry_finds_schema_by_type() {
    let s = schemas();
    assert_eq!(s.of::<Series>().attributes().len(), 4);
    assert_eq!(Author::schema(&s).attributes().len(), s.author.attributes().len());
}

// ── Identity values ──────────────────────────────────────────────

#[test]
fn book_identity_is_author_year_title() {
    let s = schemas();
    let mut book = Book::titled("The Hobbit", "J.R.R. Tolkien");
    book.date_publish = NaiveDate::from_ymd_opt(1937, 9, 21);
    assert_eq!(s.book.id_values(&book), vec!["J.R.R. Tolkien", "1937", "The Hobbit"]);
    assert_eq!(s.book.storage_id(&book).as_deref(), Some("j-r-r-tolkien-1937-the-hobbit"));
}

#[test]
fn storage_id_absent_without_identity() {
    let s = schemas();
    assert_eq!(s.book.storage_id(&Book::default()), None);
    assert_eq!(s.author.storage_id(&Author::named("  ")), None);
    assert_eq!(s.author.storage_id(&Author::named("Martha Wells")).as_deref(), Some("martha-wells"));
}

// ── Diff ─────────────────────────────────────────────────────────

#[test]
fn diff_classifies_each_attribute() {
    let s = schemas();
    let before = Book {
        genre: Some("fantasy".into()),
        isbn: Some("123".into()),
        ..Book::titled("Hobbit", "Tolkien")
    };
    let after = Book {
        genre: Some("fantasy".into()),
        pages: Some(310),
        ..Book::titled("The Hobbit", "Tolkien")
    };
    let diff = s.book.diff(&before, &after);
    let op = |name: &str| diff.attributes.iter().find(|a| a.name == name).unwrap().op;
    assert_eq!(op("genre"), DiffOp::Keep);
    assert_eq!(op("pages"), DiffOp::Add);
    assert_eq!(op("isbn"), DiffOp::Delete);
    assert_eq!(op("title"), DiffOp::Change);
    assert!(diff.has_changed());
    assert_eq!(
        diff.as_diff_lines(),
        vec!["- isbn: 123", "+ pages: 310", "- title: Hobbit", "+ title: The Hobbit"]
    );
}

#[test]
fn identical_models_have_no_changes() {
    let s = schemas();
    let book = Book::titled("Hobbit", "Tolkien");
    let diff = s.book.diff(&book, &book.clone());
    assert!(!diff.has_changed());
    assert!(diff.as_diff_lines().is_empty());
}
