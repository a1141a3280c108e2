//! Type-safe selectors for the tourney configuration
//!
//! Enums instead of strings for the list roles and the known configuration
//! files, so the CLI and library agree on spelling at compile time.

use strum::{Display, EnumIter, EnumString};

use crate::config_file::{ACTIVE_CONFIG_FILE, BACKUP_STAGE_CONFIG, OFFICIAL_STAGE_CONFIG};

/// Which selection list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StageRole {
    Starter,
    Counterpick,
}

impl StageRole {
    /// Heading shown above the list (e.g. "Starters")
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Starter => "Starters",
            Self::Counterpick => "Counterpicks",
        }
    }
}

/// The configuration files that share the tourney file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfigFile {
    /// The file the plugin reads at runtime
    #[default]
    Active,
    Backup,
    /// Shipped with the stage mod; never written
    Official,
}

impl ConfigFile {
    /// Location relative to the SD root
    pub fn location(&self) -> &'static str {
        match self {
            Self::Active => ACTIVE_CONFIG_FILE,
            Self::Backup => BACKUP_STAGE_CONFIG,
            Self::Official => OFFICIAL_STAGE_CONFIG,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Official)
    }
}
