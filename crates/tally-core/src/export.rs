//! Export of classified lines
//!
//! Supports:
//! - CSV of lines (one record per line, classifier fields as columns)
//! - JSON of a whole summary (month buckets plus counters)

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::Line;
use crate::summary::{MonthTotals, Summary};

const CSV_HEADER: [&str; 8] = ["date", "label", "type", "id", "agent", "debit", "credit", "kind"];

/// Write lines as CSV with a header row
pub fn write_lines_csv<'a, W, I>(lines: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Line>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for line in lines {
        let tx = line.transaction();
        wtr.write_record([
            line.date().to_string(),
            tx.label().to_string(),
            tx.tx_type().to_string(),
            tx.id().to_string(),
            tx.agent().to_string(),
            line.debit().to_string(),
            line.credit().to_string(),
            line.kind().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON shape of a summary
#[derive(Debug, Serialize)]
struct SummaryExport<'a> {
    debit_count: usize,
    credit_count: usize,
    totals: Vec<MonthTotals>,
    months: BTreeMap<u32, &'a [Line]>,
}

/// Serialize a summary to pretty-printed JSON
pub fn to_json(summary: &Summary) -> Result<String> {
    let export = SummaryExport {
        debit_count: summary.debit_count(),
        credit_count: summary.credit_count(),
        totals: summary.month_totals()?,
        months: summary.all_months(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
