use super::ModelStore;
use crate::error::StoreResult;
use bookmerge_types::Model;
use std::collections::BTreeMap;

/// In-process store, ordered by key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<M> {
    models: BTreeMap<String, M>,
    saves: usize,
}

impl<M: Model> MemoryStore<M> {
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
            saves: 0,
        }
    }

    pub fn get(&self, id: &str) -> Option<&M> {
        self.models.get(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Number of writes performed so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl<M: Model> ModelStore<M> for MemoryStore<M> {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<M>> {
        Ok(self.models.get(id).cloned())
    }

    fn entries(&self) -> StoreResult<Vec<(String, M)>> {
        Ok(self
            .models
            .iter()
            .map(|(id, m)| (id.clone(), m.clone()))
            .collect())
    }

    fn save(&mut self, id: &str, model: &M) -> StoreResult<()> {
        self.models.insert(id.to_string(), model.clone());
        self.saves += 1;
        Ok(())
    }
}
