//! Tally CLI - Bank statement classifier
//!
//! Usage:
//!   tally classify "DESCRIPTION"      Classify one description
//!   tally import --file CSV           List classified lines
//!   tally summary --file CSV          Per-month counts and totals
//!   tally export --file CSV -o OUT    Write classified lines as CSV
//!   tally demo                        Run the bundled sample

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tally_core::KindFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Classify { description } => commands::cmd_classify(&description),
        Commands::Import {
            file,
            month,
            kind,
            json,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let kind = parse_kind(&kind)?;
            commands::cmd_import(&file, &config, month, kind, json)
        }
        Commands::Summary { file, json } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_summary(&file, &config, json)
        }
        Commands::Export {
            file,
            output,
            month,
            kind,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let kind = parse_kind(&kind)?;
            commands::cmd_export(&file, &output, &config, month, kind)
        }
        Commands::Demo { all } => commands::cmd_demo(all),
    }
}

fn parse_kind(kind: &str) -> Result<KindFilter> {
    kind.parse().map_err(|e: String| anyhow::anyhow!(e))
}
