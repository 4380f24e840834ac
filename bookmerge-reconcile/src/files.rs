//! Linking books to the audio files and directories that hold them.
//!
//! File and directory names follow `Author (date) Title`, optionally with a
//! `(Series)` suffix or a `part N [of M]` suffix. Parsed books are indexed
//! against their paths in a [`BiMultiMap`] keyed by [`book_hash_key`].

use crate::error::{ReconcileError, ReconcileResult};
use bookmerge_index::BiMultiMap;
use bookmerge_text::{clean_author, clean_title, is_blank, normalize_names, split_names};
use bookmerge_types::Book;
use regex_lite::Regex;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extensions of files treated as audiobook parts.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["m4a", "m4b", "mp3"];

fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern compiles")
}

static EXTENSION: LazyLock<Regex> = LazyLock::new(|| literal(r"[.][^. ]+$"));

static FILE_NAME_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        literal(r"^(?P<author>.+?)\s+\(.*?\)\s+(?P<title>.+?)\s+(?:part\s+)?\d+(?:\s+of\s+\d+)?$"),
        literal(r"^(?P<author>.+?)\s+\(.*?\)\s+(?P<title>.+?)\s+\((?P<series>.+)\)$"),
        literal(r"^(?P<author>.+?)\s+\(.*?\)\s+(?P<title>.+?)$"),
    ]
});

static FILE_PART_MARKER: LazyLock<Regex> = LazyLock::new(|| literal(r"\s+\[File \d+ of \d+\]"));

/// Index of books to the paths that hold them.
pub type BookFileIndex = BiMultiMap<Book, PathBuf, String, PathBuf>;

/// Comparison key of a book: cleaned, lowercased author and title joined by
/// a tab. `None` without a title.
pub fn book_hash_key(book: &Book) -> Option<String> {
    let title = book.title.as_deref().filter(|t| !is_blank(t))?;
    let author = book.author_name.as_deref().map(clean_author).unwrap_or_default();
    Some(format!("{}\t{}", author.to_lowercase(), clean_title(title).to_lowercase()))
}

/// One key per author of a multi-author book.
pub fn book_hash_keys(book: &Book) -> Vec<String> {
    let Some(title) = book.title.as_deref().filter(|t| !is_blank(t)) else {
        return Vec::new();
    };
    let title = clean_title(title).to_lowercase();
    let authors = book.author_name.as_deref().map(split_names).unwrap_or_default();
    if authors.is_empty() {
        return vec![format!("\t{}", title)];
    }
    authors
        .iter()
        .map(|author| format!("{}\t{}", clean_author(author).to_lowercase(), title))
        .collect()
}

/// Parses the books a file or directory name describes.
///
/// Every matching pattern contributes a book; multi-author names also yield
/// one book per author. Duplicates by [`book_hash_key`] are dropped.
pub fn book_from_file_name(name: &str) -> Vec<Book> {
    let base = EXTENSION.replace(name, "");
    let base = base.trim();
    if base.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut books = Vec::new();
    for pattern in FILE_NAME_PATTERNS.iter() {
        let Some(caps) = pattern.captures(base) else {
            continue;
        };
        let title = caps
            .name("title")
            .map(|m| FILE_PART_MARKER.replace_all(m.as_str(), "").trim().to_string())
            .filter(|t| !t.is_empty());
        let Some(title) = title else {
            continue;
        };
        let authors = caps.name("author").map(|m| split_names(m.as_str())).unwrap_or_default();
        let book = Book {
            title: Some(title),
            author_name: caps.name("author").and_then(|m| normalize_names(m.as_str())),
            series_name: caps.name("series").map(|m| m.as_str().trim().to_string()),
            ..Book::default()
        };

        let mut candidates = vec![book.clone()];
        if authors.len() > 1 {
            candidates.extend(authors.into_iter().map(|author| Book {
                author_name: Some(author),
                ..book.clone()
            }));
        }

        for candidate in candidates {
            if let Some(key) = book_hash_key(&candidate) {
                if seen.insert(key) {
                    books.push(candidate);
                }
            }
        }
    }
    if books.is_empty() {
        debug!("No book in file name {:?}", name);
    }
    books
}

/// An empty index keyed by [`book_hash_key`] and path.
pub fn book_file_index() -> BookFileIndex {
    BiMultiMap::new(book_hash_key, |path: &PathBuf| Some(path.clone()))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext))
}

/// Walks each root and indexes books parsed from audio file names and
/// directory names. Dot-files and dot-directories are skipped.
pub fn scan_book_files<P: AsRef<Path>>(roots: &[P]) -> ReconcileResult<BookFileIndex> {
    let mut index = book_file_index();
    for root in roots {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ReconcileError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            )));
        }
        info!("Scanning: {}", root.display());
        let walker = WalkDir::new(root).min_depth(1).into_iter().filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            let file_type = entry.file_type();
            if !(file_type.is_dir() || (file_type.is_file() && is_audio(entry.path()))) {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            for book in book_from_file_name(name) {
                index.add(book, entry.path().to_path_buf());
            }
        }
    }
    info!(
        "Indexed {} books across {} paths",
        index.left_len(),
        index.right_len()
    );
    Ok(index)
}

/// Stored books with the paths linked to them, and the paths that match no
/// stored book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileReport {
    pub linked: Vec<(Book, Vec<PathBuf>)>,
    pub unmatched: Vec<PathBuf>,
}

/// Links each stored book to the indexed paths sharing any of its hash keys.
pub fn link_stored_books<'a, I>(index: &BookFileIndex, books: I) -> FileReport
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut report = FileReport::default();
    let mut known = HashSet::new();
    for book in books {
        let mut paths: Vec<PathBuf> = Vec::new();
        for key in book_hash_keys(book).into_iter().chain(book_hash_key(book)) {
            for path in index.rights_for_key(&key) {
                if !paths.contains(path) {
                    paths.push(path.clone());
                }
            }
            known.insert(key);
        }
        paths.sort();
        report.linked.push((book.clone(), paths));
    }
    report.unmatched = index
        .rights()
        .filter(|path| {
            !index
                .lefts_for(path)
                .into_iter()
                .filter_map(book_hash_key)
                .any(|key| known.contains(&key))
        })
        .cloned()
        .collect();
    report.unmatched.sort();
    report
}
