//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Resolve the import configuration
//! - `load_summary` - Read a CSV export into a summary

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{import::parse_csv, ImportConfig, Line, Summary};

/// Load import config from `--config` or the default locations
pub fn load_config(path: Option<&Path>) -> Result<ImportConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            ImportConfig::load_from(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => ImportConfig::load().context("Failed to load import config"),
    }
}

/// Read and classify every row of a CSV export
pub fn load_summary(file: &Path, config: &ImportConfig) -> Result<Summary> {
    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;
    let summary = parse_csv(csv_file, config)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    tracing::info!(
        "Imported {} lines ({} debits, {} credits) from {}",
        summary.len(),
        summary.debit_count(),
        summary.credit_count(),
        file.display()
    );

    Ok(summary)
}

/// Print one classified line in table form
pub fn print_line(line: &Line) {
    let tx = line.transaction();
    println!(
        "   {} │ {:25} │ {:30} │ {:14} │ {:20} │ {:>10} │ {:6}",
        line.date(),
        super::truncate(tx.label(), 25),
        super::truncate(tx.tx_type(), 30),
        super::truncate(tx.id(), 14),
        super::truncate(tx.agent(), 20),
        line.amount(),
        line.kind()
    );
}

/// Print the header matching `print_line`
pub fn print_line_header() {
    println!(
        "   {:10} │ {:25} │ {:30} │ {:14} │ {:20} │ {:>10} │ {:6}",
        "Date", "Label", "Type", "Id", "Agent", "Amount", "Kind"
    );
    println!("   ───────────┼───────────────────────────┼────────────────────────────────┼────────────────┼──────────────────────┼────────────┼───────");
}
