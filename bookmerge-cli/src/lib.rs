//! Commands behind the `bookmerge` binary.
//!
//! Each command returns the lines it would print so the binary stays a thin
//! argument parser.

use anyhow::{Context, Result};
use bookmerge_reconcile::files::{link_stored_books, scan_book_files};
use bookmerge_reconcile::{
    JsonStore, LikeFilter, ModelStore, ReconcileConfig, ReconcileSummary, Reconciler,
};
use bookmerge_schema::{HasSchema, Schemas};
use bookmerge_text::IdentityMatcher;
use bookmerge_types::{Author, Book, Narrator, Series};
use std::path::{Path, PathBuf};
use tracing::info;

/// Which record type a merge reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelKind {
    #[default]
    Book,
    Author,
    Narrator,
    Series,
}

/// Reads a config file strictly; no path means defaults.
pub fn load_config(path: Option<&Path>) -> Result<ReconcileConfig> {
    let Some(path) = path else {
        return Ok(ReconcileConfig::default());
    };
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = ReconcileConfig::from_toml(&contents)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Reconciles every record in `files` into the JSON store at `store_root`,
/// one file at a time in the order given.
pub fn merge_files(
    kind: ModelKind,
    store_root: &Path,
    config: &ReconcileConfig,
    files: &[PathBuf],
) -> Result<Vec<String>> {
    let ranker = config.ranker().context("Invalid ranking config")?;
    let schemas = Schemas::new(&ranker);
    let matcher = config.matcher();
    match kind {
        ModelKind::Book => merge_into::<Book>(&schemas, matcher, store_root, files),
        ModelKind::Author => merge_into::<Author>(&schemas, matcher, store_root, files),
        ModelKind::Narrator => merge_into::<Narrator>(&schemas, matcher, store_root, files),
        ModelKind::Series => merge_into::<Series>(&schemas, matcher, store_root, files),
    }
}

fn merge_into<M: HasSchema + LikeFilter>(
    schemas: &Schemas,
    matcher: IdentityMatcher,
    store_root: &Path,
    files: &[PathBuf],
) -> Result<Vec<String>> {
    let mut reconciler = Reconciler::new(M::schema(schemas), matcher, JsonStore::<M>::new(store_root));
    let mut lines = Vec::new();
    let mut summary = ReconcileSummary::default();
    for file in files {
        let records = read_records::<M>(file)?;
        info!("Merging {} {} records from {:?}", records.len(), M::TYPE_NAME, file);
        let result = reconciler
            .reconcile_all(records)
            .with_context(|| format!("Failed to reconcile {}", file.display()))?;
        for outcome in &result.outcomes {
            summary.record(outcome.kind());
            lines.push(outcome.to_string());
        }
    }
    lines.push(summary.to_string());
    Ok(lines)
}

fn read_records<M: HasSchema>(path: &Path) -> Result<Vec<M>> {
    let contents = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of {} records", path.display(), M::TYPE_NAME))
}

/// Lists, for each stored book, the audio paths under `roots` that hold it,
/// then every audio path that matches no stored book.
pub fn link_files(store_root: &Path, roots: &[PathBuf]) -> Result<Vec<String>> {
    let store = JsonStore::<Book>::new(store_root);
    let books: Vec<Book> = store
        .entries()
        .context("Failed to read stored books")?
        .into_iter()
        .map(|(_, book)| book)
        .collect();
    let index = scan_book_files(roots).context("Failed to scan audio roots")?;
    let report = link_stored_books(&index, &books);

    let mut lines = Vec::new();
    for (book, paths) in &report.linked {
        lines.push(book.to_string());
        if paths.is_empty() {
            lines.push("  (no files)".to_string());
        }
        lines.extend(paths.iter().map(|p| format!("  {}", p.display())));
    }
    if !report.unmatched.is_empty() {
        lines.push(format!("Unmatched ({}):", report.unmatched.len()));
        lines.extend(report.unmatched.iter().map(|p| format!("  {}", p.display())));
    }
    Ok(lines)
}
