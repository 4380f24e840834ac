//! Error types for attribute access and merge.

use crate::value::AttrType;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised by attribute writes. All of them indicate a producer or
/// schema-declaration bug and abort the merge that hit them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A value of the wrong shape was offered to an attribute.
    #[error("{model}.{attribute}: expected {expected} value, found {found}")]
    TypeMismatch {
        model: &'static str,
        attribute: &'static str,
        expected: AttrType,
        found: AttrType,
    },

    /// A write to a derived attribute.
    #[error("{model}.{attribute} is derived and cannot be written")]
    MissingMutator {
        model: &'static str,
        attribute: &'static str,
    },

    /// A value of the right shape whose content the field cannot hold.
    #[error("{model}.{attribute}: cannot store {value}")]
    InvalidValue {
        model: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// Lookup by a name the schema does not declare.
    #[error("{model} has no attribute {attribute:?}")]
    UnknownAttribute {
        model: &'static str,
        attribute: String,
    },
}
