//! oxide-dump CLI
//!
//! Converts a MySQL dump file into a PostgreSQL-compatible script.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_dump::prelude::*;

/// Convert MySQL dump files into PostgreSQL-compatible SQL.
#[derive(Parser)]
#[command(name = "oxide-dump")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MySQL dump to read.
    input: PathBuf,

    /// Where to write the converted script.
    output: PathBuf,

    /// Option preset.
    #[arg(short, long, value_enum, default_value_t = PresetArg::Improved)]
    preset: PresetArg,

    /// Skip the closing cleanup of CREATE TABLE statements.
    #[arg(long)]
    no_structural_cleanup: bool,

    /// Emit sequence reset statements for SERIAL columns.
    #[arg(long)]
    reset_sequences: bool,

    /// Collect sequence resets at the end of the script (implies --reset-sequences).
    #[arg(long)]
    sequences_at_end: bool,

    /// Reset this column's sequence instead of the detected SERIAL column
    /// (implies --reset-sequences).
    #[arg(long, value_name = "NAME")]
    sequence_column: Option<String>,

    /// Print the conversion report as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Rule table only.
    Simple,
    /// Rule table plus closing cleanup.
    Improved,
    /// Everything, including sequence resets.
    Full,
}

impl From<PresetArg> for Preset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Simple => Self::Simple,
            PresetArg::Improved => Self::Improved,
            PresetArg::Full => Self::Full,
        }
    }
}

impl Cli {
    /// Resolves the preset and the flags overriding it.
    fn options(&self) -> RewriteOptions {
        let mut options = Preset::from(self.preset).options();
        if self.no_structural_cleanup {
            options = options.structural_cleanup(false);
        }

        let wants_bootstrap =
            self.reset_sequences || self.sequences_at_end || self.sequence_column.is_some();
        if wants_bootstrap {
            let mut bootstrap = options.sequence_bootstrap.clone().unwrap_or_default();
            if self.sequences_at_end {
                bootstrap = bootstrap.placement(SequencePlacement::EndOfScript);
            }
            if let Some(column) = &self.sequence_column {
                bootstrap = bootstrap.key_column(column.as_str());
            }
            options = options.sequence_bootstrap(bootstrap);
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = cli.options();
    let report = convert_with(&cli.input, &cli.output, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("{report}");
    }

    Ok(())
}
