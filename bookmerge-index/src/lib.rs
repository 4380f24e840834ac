//! Bidirectional multi-map.
//!
//! Links two families of objects (books and the files that hold them, for
//! instance) through keys derived from each object. Both directions are
//! navigable, and the first object seen for a key stays canonical: a later,
//! possibly poorer observation of the same thing never replaces it.

mod bimultimap;

pub use bimultimap::{BiMultiMap, KeyFn};
