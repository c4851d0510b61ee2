//! CLI binary entry point for cac-migrate

#[cfg(feature = "cli")]
use cac_migrate::cli::commands::transform::{TransformArgs, handle_transform};
#[cfg(feature = "cli")]
use cac_migrate::cli::commands::verify::{VerifyArgs, handle_verify};
#[cfg(feature = "cli")]
use cac_migrate::cli::logging::log_filter;
#[cfg(feature = "cli")]
use cac_migrate::models::RecordKind;
#[cfg(feature = "cli")]
use cac_migrate::verify::EXIT_FAILED;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cac-migrate")]
#[command(about = "Migrate controller 2.4 exports to 2.5 configuration-as-code YAML")]
#[command(version)]
struct Cli {
    /// Config file (default: ./.cac-migrate.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Normalize JSON exports into controller_*.yml files
    Transform {
        /// Directory containing the JSON export
        #[arg(long)]
        export_dir: Option<String>,
        /// Directory receiving the YAML files
        #[arg(long)]
        output_dir: Option<String>,
        /// Only migrate these record kinds (repeatable)
        #[arg(long = "kind")]
        kinds: Vec<RecordKind>,
    },
    /// Verify generated controller_*.yml files
    Verify {
        /// Directory containing the YAML files
        #[arg(long)]
        path: Option<String>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Only expect files for these record kinds (repeatable)
        #[arg(long = "kind")]
        kinds: Vec<RecordKind>,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref())?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let code = match cli.command {
        Commands::Transform {
            export_dir,
            output_dir,
            kinds,
        } => {
            let args = TransformArgs {
                export_dir,
                output_dir,
                kinds,
                config: cli.config,
            };
            match handle_transform(&args) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Commands::Verify {
            path,
            strict,
            kinds,
        } => {
            let args = VerifyArgs {
                path,
                strict,
                kinds,
                config: cli.config,
            };
            match handle_verify(&args) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("ERROR: {}", e);
                    EXIT_FAILED
                }
            }
        }
    };

    std::process::exit(code);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
