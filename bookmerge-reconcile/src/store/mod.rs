//! Keyed model persistence.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;
use bookmerge_types::Model;

/// A keyed collection of models of one type.
///
/// Keys are storage ids derived from a model's identity values when it is
/// first stored; an updated model keeps the key it was found under.
pub trait ModelStore<M: Model> {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<M>>;

    /// Every stored model with its key, ordered by key.
    fn entries(&self) -> StoreResult<Vec<(String, M)>>;

    fn save(&mut self, id: &str, model: &M) -> StoreResult<()>;
}
