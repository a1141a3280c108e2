//! Tourney mode configuration file handling.
//!
//! The on-disk file mirrors what the HDR plugin reads: flags plus two lists
//! of stage `name_id`s. Loading resolves every id against the stage catalog;
//! saving writes the ids back in list order.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{Result, TourneyError};
use crate::stage::{Stage, StageCatalog};
use crate::storage::StorageBackend;
use crate::types::StageRole;

/// Configuration read by the plugin at runtime
pub const ACTIVE_CONFIG_FILE: &str = "ultimate/hdr-config/tourney_mode.json";
/// User-managed copy of the active configuration
pub const BACKUP_STAGE_CONFIG: &str = "ultimate/hdr-config/tourney_mode_backup.json";
/// Read-only configuration shipped with the stage mod
pub const OFFICIAL_STAGE_CONFIG: &str = "ultimate/mods/hdr-stages/tourney_mode_official.json";
/// Directory created on save when missing
pub const CONFIG_DIR: &str = "ultimate/hdr-config/";

/// In-memory tourney configuration, resolved against the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigData {
    pub enabled: bool,
    pub use_official: bool,
    pub starters: Vec<Stage>,
    pub counterpicks: Vec<Stage>,
}

impl ConfigData {
    pub fn new(
        enabled: bool,
        use_official: bool,
        starters: Vec<Stage>,
        counterpicks: Vec<Stage>,
    ) -> Self {
        Self {
            enabled,
            use_official,
            starters,
            counterpicks,
        }
    }

    /// True only when `stage` is in the starters AND the counterpicks.
    ///
    /// NOTE: this is not "selected anywhere". A stage in just one list
    /// returns false. Callers depend on the conjunctive check as-is.
    pub fn includes(&self, stage: &Stage) -> bool {
        let in_list = |list: &[Stage]| list.iter().any(|s| s.name_id == stage.name_id);
        in_list(&self.starters) && in_list(&self.counterpicks)
    }

    pub fn stages(&self, role: StageRole) -> &[Stage] {
        match role {
            StageRole::Starter => &self.starters,
            StageRole::Counterpick => &self.counterpicks,
        }
    }

    /// Replace the list for `role` with one produced by the selection controller.
    pub fn set_stages(&mut self, role: StageRole, stages: Vec<Stage>) {
        match role {
            StageRole::Starter => self.starters = stages,
            StageRole::Counterpick => self.counterpicks = stages,
        }
    }
}

/// On-disk shape of the tourney configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFormat {
    pub enabled: bool,
    /// Absent in files written before the official stage set existed
    #[serde(default)]
    pub use_official: bool,
    pub starters: Vec<String>,
    pub counterpicks: Vec<String>,
}

impl From<&ConfigData> for FileFormat {
    fn from(data: &ConfigData) -> Self {
        let ids = |list: &[Stage]| list.iter().map(|s| s.name_id.clone()).collect();
        Self {
            enabled: data.enabled,
            use_official: data.use_official,
            starters: ids(&data.starters),
            counterpicks: ids(&data.counterpicks),
        }
    }
}

/// Load the configuration at `location` (relative to the SD root).
///
/// A missing file is not an error and yields the empty default. Unparseable
/// JSON and read failures are returned to the caller.
///
/// Ids that do not resolve are handled per list:
/// - counterpicks: an unknown id is replaced by the first catalog stage;
///   a failed lookup drops the entry.
/// - starters: an unknown id or failed lookup drops the entry.
pub fn load<B, C>(backend: &B, catalog: &C, location: &str) -> Result<ConfigData>
where
    B: StorageBackend + ?Sized,
    C: StageCatalog + ?Sized,
{
    let path = backend.resolve(location)?;

    if !backend.file_exists(&path)? {
        debug!("No tourney config at {:?}, using defaults", path);
        return Ok(ConfigData::default());
    }

    let json = backend.read_file(&path)?;
    let file_data: FileFormat = serde_json::from_str(&json)?;

    let mut data = ConfigData::new(file_data.enabled, file_data.use_official, vec![], vec![]);

    for name_id in &file_data.counterpicks {
        match resolve_counterpick(catalog, name_id) {
            Ok(Some(stage)) => data.counterpicks.push(stage),
            Ok(None) => warn!("No stage available to substitute for {}", name_id),
            Err(e) => error!("Error loading stage {}: {}", name_id, e),
        }
    }

    for name_id in &file_data.starters {
        match catalog.get_by_id(name_id) {
            Ok(Some(stage)) => data.starters.push(stage),
            Ok(None) => error!("Error loading stage {}: not in catalog", name_id),
            Err(e) => error!("Error loading stage {}: {}", name_id, e),
        }
    }

    info!(
        "Loaded tourney config from {:?}: {} starters, {} counterpicks",
        path,
        data.starters.len(),
        data.counterpicks.len()
    );
    Ok(data)
}

/// Unknown counterpick ids fall back to the first catalog stage.
fn resolve_counterpick<C>(catalog: &C, name_id: &str) -> Result<Option<Stage>>
where
    C: StageCatalog + ?Sized,
{
    match catalog.get_by_id(name_id)? {
        Some(stage) => Ok(Some(stage)),
        None => {
            debug!("Unknown counterpick {}, substituting first catalog stage", name_id);
            catalog.first()
        }
    }
}

/// Write `data` to `location` (relative to the SD root), creating the
/// configuration directory if needed.
///
/// Lists are written verbatim: no deduplication and no length cap.
pub fn save<B>(backend: &B, location: &str, data: &ConfigData) -> Result<()>
where
    B: StorageBackend + ?Sized,
{
    let config = FileFormat::from(data);
    let json = serde_json::to_string(&config)?;

    let config_dir = backend.resolve(CONFIG_DIR)?;
    if !backend.file_exists(&config_dir)? {
        debug!("Creating config directory {:?}", config_dir);
        backend.mkdir(&config_dir)?;
    }

    let path = backend.resolve(location)?;
    backend.write_file(&path, &json)?;

    info!("Saved tourney config to {:?}", path);
    Ok(())
}

/// Load the official configuration shipped with the stage mod.
pub fn load_official<B, C>(backend: &B, catalog: &C) -> Result<ConfigData>
where
    B: StorageBackend + ?Sized,
    C: StageCatalog + ?Sized,
{
    load(backend, catalog, OFFICIAL_STAGE_CONFIG)
}

/// Copy the active configuration to the backup file.
pub fn backup<B, C>(backend: &B, catalog: &C) -> Result<ConfigData>
where
    B: StorageBackend + ?Sized,
    C: StageCatalog + ?Sized,
{
    let data = load(backend, catalog, ACTIVE_CONFIG_FILE)?;
    save(backend, BACKUP_STAGE_CONFIG, &data)?;
    Ok(data)
}

/// Overwrite the active configuration with the backup file.
pub fn restore<B, C>(backend: &B, catalog: &C) -> Result<ConfigData>
where
    B: StorageBackend + ?Sized,
    C: StageCatalog + ?Sized,
{
    let path = backend.resolve(BACKUP_STAGE_CONFIG)?;
    if !backend.file_exists(&path)? {
        return Err(TourneyError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no backup to restore"),
        ));
    }

    let data = load(backend, catalog, BACKUP_STAGE_CONFIG)?;
    save(backend, ACTIVE_CONFIG_FILE, &data)?;
    Ok(data)
}
