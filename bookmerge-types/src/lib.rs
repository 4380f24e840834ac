//! Core record types for bookmerge.
//!
//! This crate defines the plain, mutable records that every producer
//! (store clients, scrapers, spreadsheet rows, audio tag readers) maps its
//! native shapes into before handing them to the reconciliation engine:
//! - [`Book`], [`Author`], [`Narrator`], [`Series`]: the reconciled entities
//! - [`MainChar`]: a nested composite owned by [`Book`]
//! - [`BookRating`], [`NarratorRating`], [`YesNoUnknown`]: closed label sets
//!
//! Records carry no surrogate key. Identity is derived structurally by the
//! schema and matcher crates.

mod enums;
mod model;
mod records;

pub use enums::{BookRating, NarratorRating, YesNoUnknown};
pub use model::{Importable, Model};
pub use records::{Author, Book, MainChar, Narrator, Series};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown {kind} label: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },
}
