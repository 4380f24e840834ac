use super::ModelStore;
use crate::error::StoreResult;
use bookmerge_types::Model;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One pretty-printed JSON file per model, at
/// `<root>/<type name>/<storage id>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore<M> {
    dir: PathBuf,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> JsonStore<M> {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(M::TYPE_NAME),
            _model: PhantomData,
        }
    }

    /// Directory holding this model type's files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn read(path: &Path) -> StoreResult<M> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl<M: Model> ModelStore<M> for JsonStore<M> {
    fn find_by_id(&self, id: &str) -> StoreResult<Option<M>> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Ok(None);
        }
        Self::read(&path).map(Some)
    }

    fn entries(&self) -> StoreResult<Vec<(String, M)>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            entries.push((id.to_string(), Self::read(&path)?));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    fn save(&mut self, id: &str, model: &M) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(id);
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        std::fs::write(&path, json)?;
        debug!("Wrote {} {:?}", M::TYPE_NAME, path);
        Ok(())
    }
}
