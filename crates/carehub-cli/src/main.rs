use std::path::PathBuf;

use carehub_cli::commands::record::RecordArgs;
use carehub_cli::commands::summary::SummaryArgs;
use carehub_cli::commands::{self, classify, ranges, record, summary};
use carehub_cli::config::{default_config_path, read_config};
use carehub_core::ObservationKind;
use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carehub")]
#[command(about = "Vital signs recording and threshold checks for residential care")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the threshold guidelines for every vital sign
    Ranges {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify a single reading
    Classify {
        /// Vital sign code or name (TEMP, BP, HR, RR, SPO2, WEIGHT, BSL, PAIN)
        kind: ObservationKind,
        /// The reading, e.g. 38.6 or 145/90
        value: String,
    },
    /// Record a round of vital signs and print the observations as JSON
    Record(RecordArgs),
    /// Summarize observations from a JSON file
    Summary(SummaryArgs),
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let (config, migrated_from) = read_config(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    if let Some(version) = migrated_from {
        tracing::info!(
            from = version,
            path = %config_path.display(),
            "migrated config to current version (added time_zone, log_filter)"
        );
    }

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Ranges { json } => ranges::run(&mut out, json)?,
        Commands::Classify { kind, value } => classify::run(&mut out, kind, &value)?,
        Commands::Record(args) => record::run(&mut out, &args, &config)?,
        Commands::Summary(args) => summary::run(&mut out, &args, &config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&mut out, &config_path)?,
            ConfigAction::Init { force } => commands::config::init(&mut out, &config_path, force)?,
        },
    }

    Ok(())
}
