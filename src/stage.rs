//! Stage values and the catalog that resolves them.
//!
//! The catalog is the authoritative list of selectable stages. Configuration
//! files only store `name_id`s, so every load goes through a catalog lookup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TourneyError};

/// A selectable stage as known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage {
    /// Stable machine key (e.g. `BATTLEFIELD`)
    pub name_id: String,
    /// Human-readable label shown in menus
    pub display_name: String,
}

impl Stage {
    pub fn new(name_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name_id: name_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Source of truth for valid stages.
///
/// # Contract
///
/// - `list()` returns stages in a stable order; the first entry is the
///   default used when adding or substituting stages.
/// - `get_by_id()` and `get_by_display()` return `Ok(None)` when nothing
///   matches and `Err` only when the lookup itself failed.
pub trait StageCatalog {
    fn list(&self) -> Result<Vec<Stage>>;

    fn get_by_id(&self, name_id: &str) -> Result<Option<Stage>>;

    fn get_by_display(&self, display_name: &str) -> Result<Option<Stage>>;

    /// First stage in catalog order, if any.
    fn first(&self) -> Result<Option<Stage>> {
        Ok(self.list()?.into_iter().next())
    }
}

/// In-memory stage catalog.
#[derive(Debug, Clone, Default)]
pub struct StageDb {
    stages: Vec<Stage>,
}

impl StageDb {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Load a catalog from a JSON array of `{ "name_id", "display_name" }`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TourneyError::io(path, e))?;
        let stages: Vec<Stage> = serde_json::from_str(&content)
            .map_err(|e| TourneyError::catalog(format!("invalid catalog {:?}: {}", path, e)))?;

        tracing::debug!("Loaded {} stages from {:?}", stages.len(), path);
        Ok(Self::new(stages))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl StageCatalog for StageDb {
    fn list(&self) -> Result<Vec<Stage>> {
        Ok(self.stages.clone())
    }

    fn get_by_id(&self, name_id: &str) -> Result<Option<Stage>> {
        Ok(self.stages.iter().find(|s| s.name_id == name_id).cloned())
    }

    fn get_by_display(&self, display_name: &str) -> Result<Option<Stage>> {
        Ok(self
            .stages
            .iter()
            .find(|s| s.display_name == display_name)
            .cloned())
    }
}
