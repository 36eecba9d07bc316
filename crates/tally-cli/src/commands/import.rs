//! Import and export command implementations

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{export::to_json, export::write_lines_csv, ImportConfig, KindFilter, Line, Summary};

use super::{load_summary, print_line, print_line_header};

pub fn cmd_import(
    file: &Path,
    config: &ImportConfig,
    month: Option<u32>,
    kind: KindFilter,
    json: bool,
) -> Result<()> {
    let summary = load_summary(file, config)?;
    let lines = select_lines(&summary, month, kind)?;

    if json {
        // Unfiltered output is the whole summary; filters narrow it to the matching lines
        if month.is_none() && kind == KindFilter::All {
            println!("{}", to_json(&summary)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        return Ok(());
    }

    println!("📥 Imported {} from {}", summary.len(), file.display());
    println!();

    if lines.is_empty() {
        println!("   No matching lines.");
    } else {
        print_line_header();
        for line in &lines {
            print_line(line);
        }
    }

    println!();
    println!("   Debits:  {}", summary.debit_count());
    println!("   Credits: {}", summary.credit_count());

    Ok(())
}

pub fn cmd_export(
    file: &Path,
    output: &Path,
    config: &ImportConfig,
    month: Option<u32>,
    kind: KindFilter,
) -> Result<()> {
    let summary = load_summary(file, config)?;
    let lines = select_lines(&summary, month, kind)?;

    let out = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    write_lines_csv(lines.iter().copied(), BufWriter::new(out))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✅ Exported {} lines to {}", lines.len(), output.display());

    Ok(())
}

/// Lines of one month, or of every month, matching `kind`
pub fn select_lines(
    summary: &Summary,
    month: Option<u32>,
    kind: KindFilter,
) -> Result<Vec<&Line>> {
    match month {
        Some(n) => Ok(summary.month(n, kind)?),
        None => Ok(summary
            .lines()
            .filter(|line| kind.matches(line.kind()))
            .collect()),
    }
}
