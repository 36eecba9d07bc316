//! CSV import of bank statement exports
//!
//! Rows are read as four text fields (date, description, debit, credit)
//! at the positions given by [`ImportConfig`]. Amount and date validation
//! happens later, when rows are folded into a [`Summary`].

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::config::ImportConfig;
use crate::error::{Error, Result};
use crate::models::RawLine;
use crate::summary::Summary;

/// Read raw rows from CSV data
pub fn read_rows<R: Read>(reader: R, config: &ImportConfig) -> Result<Vec<RawLine>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;

        // Blank lines at the end of an export come through as a single empty field
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        rows.push(record_to_row(&record, config, index + 1)?);
    }

    debug!("Read {} rows from CSV", rows.len());
    Ok(rows)
}

/// Read CSV data and fold it into a summary
pub fn parse_csv<R: Read>(reader: R, config: &ImportConfig) -> Result<Summary> {
    let rows = read_rows(reader, config)?;
    let mut summary = Summary::new();
    summary.ingest_with_format(&rows, &config.date_format)?;
    Ok(summary)
}

fn record_to_row(record: &StringRecord, config: &ImportConfig, row: usize) -> Result<RawLine> {
    let columns = &config.columns;

    let date = record
        .get(columns.date)
        .ok_or_else(|| Error::Import(format!("Row {}: missing date", row)))?;

    let description = record
        .get(columns.description)
        .ok_or_else(|| Error::Import(format!("Row {}: missing description", row)))?;

    // Exports often drop trailing empty columns
    let debit = record.get(columns.debit).unwrap_or("");
    let credit = record.get(columns.credit).unwrap_or("");

    Ok(RawLine::new(
        date.trim(),
        description.trim(),
        debit.trim(),
        credit.trim(),
    ))
}
