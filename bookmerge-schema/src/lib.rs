//! Schema-driven merge for bookmerge models.
//!
//! A [`Schema`] is the ordered table of [`Attribute`] descriptors for one
//! model type. [`Schema::merge`] builds a new model attribute by attribute:
//! the `after` value wins when present, collections are combined, and
//! attributes may declare their own resolver (for instance image URLs go
//! through the source ranker). Every value crosses the descriptor as an
//! [`AttrValue`] and is checked against the declared [`AttrType`] before
//! it is written.
//!
//! All schemas are built once into a [`Schemas`] registry.

mod attribute;
mod diff;
mod error;
pub mod models;
mod registry;
mod resolve;
mod schema;
mod value;

pub use attribute::{Attribute, Canonicalizer};
pub use diff::{AttributeDiff, Diff, DiffOp};
pub use error::{SchemaError, SchemaResult};
pub use registry::{HasSchema, Schemas};
pub use resolve::{Resolver, combine, earlier, keep_first, longer_text, ranked_url, resolver};
pub use schema::{IdValues, Schema};
pub use value::{AttrKind, AttrType, AttrValue};
