//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Classify bank statement lines and tally them by month
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Classify bank statement lines and tally them by month", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Import config file (TOML)
    ///
    /// Defaults to ~/.local/share/tally/config/import.toml when present,
    /// otherwise the built-in layout: date,description,debit,credit
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single description
    Classify {
        /// Statement description, e.g. "Internet Banking INTERNET BILL PAY 0000001 PANDA MOBILE"
        description: String,
    },

    /// Import a CSV export and list its classified lines
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Only show this month (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Kind of lines to show: all, debit, credit
        #[arg(short, long, default_value = "all")]
        kind: String,

        /// Print the whole summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-month counts and totals for a CSV export
    Summary {
        /// CSV file to summarize
        #[arg(short, long)]
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write classified lines to a CSV file
    Export {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Only export this month (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Kind of lines to export: all, debit, credit
        #[arg(short, long, default_value = "all")]
        kind: String,
    },

    /// Run the bundled sample statement
    Demo {
        /// Print every line instead of only credits that name an agent
        #[arg(long)]
        all: bool,
    },
}
