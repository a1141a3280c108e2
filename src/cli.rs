use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::types::{ConfigFile, StageRole};

/// hdr-tourney - Edit the tournament-mode stage lists on an HDR SD card
#[derive(Parser)]
#[command(name = "hdr-tourney")]
#[command(about = "Manage HDR tourney mode starters and counterpicks")]
#[command(version)]
pub struct Cli {
    /// Root of the SD card (the directory containing `ultimate/`)
    #[arg(long, env = "HDR_SD_ROOT", global = true)]
    pub sd_root: Option<PathBuf>,

    /// JSON stage catalog: an array of { "name_id", "display_name" }
    #[arg(long, env = "HDR_STAGE_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Which configuration file to operate on
    #[arg(long, value_parser = parse_config_file, default_value = "active", global = true)]
    pub file: ConfigFile,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configuration
    Show,
    /// Turn tourney mode on
    Enable,
    /// Turn tourney mode off
    Disable,
    /// Use the official stage set instead of the custom lists
    Official {
        #[arg(value_enum)]
        state: Switch,
    },
    /// Append the default stage to a list
    Add {
        #[arg(value_parser = parse_role)]
        role: StageRole,
    },
    /// Remove the stage at a position (0-based)
    Remove {
        #[arg(value_parser = parse_role)]
        role: StageRole,
        index: usize,
    },
    /// Replace the stage at a position (0-based) by display name
    Replace {
        #[arg(value_parser = parse_role)]
        role: StageRole,
        index: usize,
        display_name: String,
    },
    /// Copy the active configuration to the backup file
    Backup,
    /// Overwrite the active configuration with the backup file
    Restore,
    /// List the stage catalog
    Stages,
    /// Report stages without a preview image in a directory
    Previews { dir: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

fn parse_role(s: &str) -> Result<StageRole, String> {
    s.parse()
        .map_err(|_| format!("unknown list '{}': expected starter or counterpick", s))
}

fn parse_config_file(s: &str) -> Result<ConfigFile, String> {
    s.parse()
        .map_err(|_| format!("unknown file '{}': expected active, backup or official", s))
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
