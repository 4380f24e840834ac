use bookmerge_reconcile::files::{
    book_file_index, book_from_file_name, book_hash_key, book_hash_keys, link_stored_books, scan_book_files,
};
use bookmerge_types::Book;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

// ── Hash keys ────────────────────────────────────────────────────

#[test]
fn hash_key_uses_cleaned_author_and_title() {
    let book = Book::titled("The Hobbit (Unabridged)", "J. R. R. Tolkien");
    assert_eq!(book_hash_key(&book), Some("jrr tolkien\tthe hobbit".to_string()));
}

#[test]
fn hash_key_needs_a_title() {
    let book = Book {
        author_name: Some("Tolkien".into()),
        ..Book::default()
    };
    assert_eq!(book_hash_key(&book), None);
    assert!(book_hash_keys(&book).is_empty());
}

#[test]
fn hash_keys_split_authors() {
    let book = Book::titled("Sweep of the Heart", "Ilona Andrews and Gordon Andrews");
    assert_eq!(
        book_hash_keys(&book),
        vec![
            "gordon andrews\tsweep of the heart".to_string(),
            "ilona andrews\tsweep of the heart".to_string(),
        ]
    );
}

// ── File names ───────────────────────────────────────────────────

#[test]
fn plain_file_name() {
    let books = book_from_file_name("Tolkien (1937) The Hobbit.m4b");
    assert_eq!(books, vec![Book::titled("The Hobbit", "Tolkien")]);
}

#[test]
fn part_suffix_yields_the_bare_title_first() {
    let books = book_from_file_name("Tolkien (1937) The Hobbit part 1 of 2.mp3");
    let titles: Vec<&str> = books.iter().filter_map(|b| b.title.as_deref()).collect();
    assert_eq!(titles, vec!["The Hobbit", "The Hobbit part 1 of 2"]);
}

#[test]
fn file_part_marker_is_dropped() {
    let books = book_from_file_name("Tolkien (1937) The Hobbit [File 1 of 3].mp3");
    assert_eq!(books, vec![Book::titled("The Hobbit", "Tolkien")]);
}

#[test]
fn series_suffix_and_multiple_authors() {
    let books = book_from_file_name("Ilona Andrews and Gordon Andrews (2020) Sweep of the Heart (Innkeeper Chronicles).m4b");

    let first = &books[0];
    assert_eq!(first.author_name.as_deref(), Some("Gordon Andrews, Ilona Andrews"));
    assert_eq!(first.title.as_deref(), Some("Sweep of the Heart"));
    assert_eq!(first.series_name.as_deref(), Some("Innkeeper Chronicles"));

    let per_author: Vec<&str> = books
        .iter()
        .filter(|b| b.title.as_deref() == Some("Sweep of the Heart"))
        .filter_map(|b| b.author_name.as_deref())
        .collect();
    assert_eq!(per_author, vec!["Gordon Andrews, Ilona Andrews", "Gordon Andrews", "Ilona Andrews"]);
}

#[test]
fn unrecognized_names_yield_nothing() {
    assert!(book_from_file_name("notes.mp3").is_empty());
    assert!(book_from_file_name(".m4b").is_empty());
    assert!(book_from_file_name("").is_empty());
}

// ── Index ────────────────────────────────────────────────────────

#[test]
fn index_links_a_book_to_many_paths() {
    let mut index = book_file_index();
    let book = Book::titled("The Hobbit", "Tolkien");
    assert!(index.add(book.clone(), "a/part1.m4b".into()));
    assert!(index.add(book.clone(), "a/part2.m4b".into()));
    assert!(!index.add(book, "a/part2.m4b".into()));
    assert!(!index.add(Book::default(), "a/stray.m4b".into()));
    assert_eq!(index.len(), 2);
    assert_eq!(index.left_len(), 1);
}

#[test]
fn scan_indexes_audio_files_and_directories() {
    let root = tempfile::tempdir().unwrap();
    let hobbit_dir = root.path().join("Tolkien (1937) The Hobbit");
    let part = hobbit_dir.join("Tolkien (1937) The Hobbit part 1 of 2.m4b");
    let magic = root.path().join("Pratchett (1983) The Colour of Magic.mp3");
    touch(&part);
    touch(&hobbit_dir.join("cover.jpg"));
    touch(&magic);
    touch(&root.path().join(".hidden").join("Tolkien (1977) The Silmarillion.mp3"));

    let index = scan_book_files(&[root.path()]).unwrap();
    assert!(index.contains_left_key(&"tolkien\tthe hobbit".to_string()));
    assert!(!index.contains_left_key(&"tolkien\tthe silmarillion".to_string()));
    assert!(index.contains_right(&magic));

    let stored = vec![Book::titled("The Hobbit (Unabridged)", "Tolkien")];
    let report = link_stored_books(&index, &stored);
    assert_eq!(report.linked.len(), 1);
    assert_eq!(report.linked[0].1, vec![hobbit_dir.clone(), part.clone()]);
    assert_eq!(report.unmatched, vec![magic]);
}

#[test]
fn scan_rejects_a_missing_root() {
    let root = tempfile::tempdir().unwrap();
    assert!(scan_book_files(&[root.path().join("absent")]).is_err());
}
