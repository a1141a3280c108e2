//! hdr-tourney - Main entry point
//!
//! Command-line front end over the tourney configuration library.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hdr_tourney::cli::{Cli, Commands};
use hdr_tourney::{
    ConfigData, ConfigFile, FsBackend, StageCatalog, StageDb, StageRole, TourneyError,
    config_file, previews, selection,
};

/// Initialize tracing with RUST_LOG taking precedence over --verbose
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Commands::Stages => {
            for stage in catalog.list()? {
                println!("{:<24} {}", stage.name_id, stage.display_name);
            }
            return Ok(());
        }
        Commands::Previews { ref dir } => {
            let missing = previews::missing_previews(&catalog, dir)?;
            if missing.is_empty() {
                println!("✓ All stage previews present");
            } else {
                for stage in &missing {
                    println!("missing {}", previews::preview_file_name(stage));
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let backend = FsBackend::new(require_sd_root(cli.sd_root)?);
    let location = cli.file.location();

    match cli.command {
        Commands::Show => {
            let data = config_file::load(&backend, &catalog, location)?;
            print_config(cli.file, &data);
        }
        Commands::Backup => {
            config_file::backup(&backend, &catalog)?;
            println!("✓ Backed up {}", ConfigFile::Active.location());
        }
        Commands::Restore => {
            config_file::restore(&backend, &catalog)?;
            println!("✓ Restored {}", ConfigFile::Active.location());
        }
        command => {
            if cli.file.is_read_only() {
                return Err(TourneyError::read_only(location).into());
            }

            let mut data = config_file::load(&backend, &catalog, location)
                .with_context(|| format!("Failed to load {}", location))?;
            apply(&catalog, &mut data, command)?;
            config_file::save(&backend, location, &data)
                .with_context(|| format!("Failed to save {}", location))?;

            info!("Updated {}", location);
            print_config(cli.file, &data);
        }
    }

    Ok(())
}

/// Apply one editing command to `data`
fn apply(catalog: &StageDb, data: &mut ConfigData, command: Commands) -> Result<()> {
    match command {
        Commands::Enable => data.enabled = true,
        Commands::Disable => data.enabled = false,
        Commands::Official { state } => data.use_official = state.is_on(),
        Commands::Add { role } => {
            let stages = selection::add(catalog, data.stages(role))?;
            data.set_stages(role, stages);
        }
        Commands::Remove { role, index } => {
            let stages = selection::remove_at(data.stages(role), index)?;
            data.set_stages(role, stages);
        }
        Commands::Replace {
            role,
            index,
            display_name,
        } => {
            let stages = selection::replace_at(catalog, data.stages(role), index, &display_name)?;
            data.set_stages(role, stages);
        }
        _ => bail!("not an editing command"),
    }
    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<StageDb> {
    let Some(path) = path else {
        bail!("No stage catalog given (use --catalog or HDR_STAGE_CATALOG)");
    };
    StageDb::load_from_file(path).with_context(|| format!("Failed to load catalog {:?}", path))
}

fn require_sd_root(sd_root: Option<PathBuf>) -> Result<PathBuf> {
    sd_root.context("No SD root given (use --sd-root or HDR_SD_ROOT)")
}

fn print_config(file: ConfigFile, data: &ConfigData) {
    println!("Tourney config ({})", file.location());
    println!("  enabled:      {}", data.enabled);
    println!("  use official: {}", data.use_official);
    for role in StageRole::iter() {
        let stages = data.stages(role);
        println!("  {} ({}/{}):", role.heading(), stages.len(), selection::MAX_STAGES);
        for (i, stage) in stages.iter().enumerate() {
            println!("    {}. {} [{}]", i, stage.display_name, stage.name_id);
        }
    }
}
