//! Demo command: run the bundled sample statement

use anyhow::{Context, Result};
use tally_core::{sample_rows, Summary};

use super::{print_line, print_line_header};

pub fn cmd_demo(all: bool) -> Result<()> {
    let summary =
        Summary::from_rows(&sample_rows()).context("Failed to ingest sample statement")?;

    if all {
        println!("🧾 Sample statement ({} lines)", summary.len());
        println!();
        print_line_header();
        for line in summary.lines() {
            print_line(line);
        }
    } else {
        println!("🧾 Credits naming a counterparty");
        println!();
        for line in summary.credits_with_agent() {
            println!("   {}", line.transaction());
        }
    }

    println!();
    println!("   Debits:  {}", summary.debit_count());
    println!("   Credits: {}", summary.credit_count());

    Ok(())
}
