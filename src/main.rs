//! Niihau Index - command-line entrypoint.
//!
//! The index is a library component; this binary manages its configuration:
//! validating a configuration file and generating a default one.

use clap::{Parser, Subcommand};
use niihau_index_lib::config::{self, ConfigLoader, LogConfig, NiihauConfig};
use niihau_index_lib::data_structures::RecordId;
use niihau_index_lib::error::{NiihauError, NiihauResult};
use niihau_index_lib::index_from_global_config;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Niihau index tool.
#[derive(Parser, Debug)]
#[clap(name = "Niihau Index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Writes the default configuration as JSON or TOML depending on the extension.
fn write_default_config(output: &Path) -> NiihauResult<()> {
    let default_config = NiihauConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rendered = match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(&default_config)?,
        _ => toml::to_string_pretty(&default_config)?,
    };
    std::fs::write(output, rendered)?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> NiihauResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command {
        Command::Validate => {
            let loaded = loader.load();
            let log = loaded
                .as_ref()
                .map(|loaded_config| loaded_config.log.clone())
                .unwrap_or_default();
            init_logging(&log)?;

            match loaded {
                Ok(loaded) => {
                    info!(
                        max_results = ?loaded.index.max_results,
                        default_limit = loaded.index.default_limit,
                        "Configuration validated successfully"
                    );
                    config::init_global_config(loaded);
                    let index = index_from_global_config::<RecordId>();
                    info!(config = ?index.config(), "Index settings resolved");
                    Ok(())
                }
                Err(e) => {
                    let e = NiihauError::from(e);
                    tracing::error!(component = e.component(), "Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            write_default_config(&output)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
