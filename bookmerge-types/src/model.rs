use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// A reconcilable record type.
///
/// Implementors are plain value types: `Default` produces the empty record
/// a merge starts from, and equality is structural.
pub trait Model:
    Clone + Default + PartialEq + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Stable lowercase type name, used as a storage directory and in logs.
    const TYPE_NAME: &'static str;
}

/// Field-by-field import for nested composites.
pub trait Importable {
    /// Copies every present field of `other` over this one.
    fn import_from(&mut self, other: &Self);

    /// Copies fields of `other` only where this one has none.
    fn import_from_if_absent(&mut self, other: &Self);
}

/// Writes `value` into `slot` when it is present.
pub(crate) fn set_if<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

/// Writes `value` into `slot` when the slot is empty and the value present.
pub(crate) fn set_if_absent<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if slot.is_none() && value.is_some() {
        slot.clone_from(value);
    }
}
