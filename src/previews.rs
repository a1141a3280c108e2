//! Stage preview assets.
//!
//! Walks the catalog so an asset loader can check or prefetch one preview
//! image per stage. Kept separate from configuration loading.

use std::path::Path;
use tracing::warn;

use crate::error::Result;
use crate::stage::{Stage, StageCatalog};

/// Preview image file name for `stage` (e.g. `stage_2_battlefield.jpg`)
pub fn preview_file_name(stage: &Stage) -> String {
    format!("stage_2_{}.jpg", stage.name_id.to_lowercase())
}

/// Stages in catalog order whose preview image is absent from `dir`.
pub fn missing_previews<C>(catalog: &C, dir: &Path) -> Result<Vec<Stage>>
where
    C: StageCatalog + ?Sized,
{
    let mut missing = Vec::new();
    for stage in catalog.list()? {
        if !dir.join(preview_file_name(&stage)).is_file() {
            warn!("Could not find stage preview for: {}", stage.name_id);
            missing.push(stage);
        }
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StageDb;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_preview_file_name_is_lowercase() {
        let stage = Stage::new("BATTLEFIELD", "Battlefield");
        assert_eq!(preview_file_name(&stage), "stage_2_battlefield.jpg");
    }

    #[test]
    fn test_missing_previews() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("stage_2_fd.jpg"), b"").unwrap();
        let db = StageDb::new(vec![
            Stage::new("BATTLEFIELD", "Battlefield"),
            Stage::new("FD", "Final Destination"),
        ]);

        let missing = missing_previews(&db, dir.path()).unwrap();
        assert_eq!(missing, vec![Stage::new("BATTLEFIELD", "Battlefield")]);
    }
}
