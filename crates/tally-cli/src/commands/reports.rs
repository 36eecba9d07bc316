//! Report command implementations

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tally_core::ImportConfig;

use super::load_summary;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub fn cmd_summary(file: &Path, config: &ImportConfig, json: bool) -> Result<()> {
    let summary = load_summary(file, config)?;
    let totals = summary.month_totals()?;
    let debit_total = summary.debit_total()?;
    let credit_total = summary.credit_total()?;

    if json {
        let report = json!({
            "debit_count": summary.debit_count(),
            "credit_count": summary.credit_count(),
            "debit_total": debit_total,
            "credit_total": credit_total,
            "months": totals,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("📊 Monthly Summary");
    println!("   File: {}", file.display());
    println!("   ─────────────────────────────────────────────────────");
    println!(
        "   {:10} │ {:>5} │ {:>12} │ {:>12}",
        "Month", "Lines", "Debits", "Credits"
    );
    println!("   ───────────┼───────┼──────────────┼──────────────");

    for month in &totals {
        println!(
            "   {:10} │ {:>5} │ {:>12} │ {:>12}",
            MONTH_NAMES[month.month as usize - 1],
            month.lines,
            month.debit_total,
            month.credit_total
        );
    }

    println!("   ───────────┼───────┼──────────────┼──────────────");
    println!(
        "   {:10} │ {:>5} │ {:>12} │ {:>12}",
        "Total",
        summary.len(),
        debit_total,
        credit_total
    );
    println!();
    println!(
        "   {} debits, {} credits",
        summary.debit_count(),
        summary.credit_count()
    );

    Ok(())
}
