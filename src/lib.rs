//! HDR tourney mode configuration library
//!
//! Loads, edits and saves the tournament-mode starter and counterpick stage
//! lists stored on an HDR SD card, resolving stage ids against a catalog.

pub mod cli;
pub mod config_file;
pub mod error;
pub mod previews;
pub mod selection;
pub mod stage;
pub mod storage;
pub mod types;

// Re-export main types for convenience
pub use config_file::{ConfigData, FileFormat};
pub use error::{Result, SelectionError, TourneyError};
pub use selection::MAX_STAGES;
pub use stage::{Stage, StageCatalog, StageDb};
pub use storage::{FsBackend, StorageBackend};
pub use types::{ConfigFile, StageRole};
