//! Reconciliation pipeline for bookmerge.
//!
//! Records arriving from any source are looked up against a [`ModelStore`]
//! (exact storage id first, then fuzzy identity), merged through their
//! schema, and written back only when the merge changed something.
//! Ambiguous lookups are logged and skipped, never merged.
//!
//! The [`files`] module links stored books to audio files on disk.

mod config;
mod error;
pub mod files;
mod identity;
mod pipeline;
pub mod store;

pub use config::ReconcileConfig;
pub use error::{ReconcileError, ReconcileResult, StoreError, StoreResult};
pub use identity::{
    LikeFilter, author_like_filter, book_like_filter, book_with_author_like_filter, narrator_like_filter,
    series_like_filter,
};
pub use pipeline::{Lookup, Outcome, OutcomeKind, ReconcileSummary, Reconciler, Reconciliation};
pub use store::{JsonStore, MemoryStore, ModelStore};
