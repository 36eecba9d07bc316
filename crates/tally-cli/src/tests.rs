//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tally_core::{sample_rows, KindFilter};
use tempfile::{tempdir, TempDir};

use crate::commands::{self, truncate};

/// Write the bundled sample statement to a temp CSV, returning (dir, path)
fn sample_csv_file() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("statement.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    for row in sample_rows() {
        writeln!(
            file,
            "{},{},{},{}",
            row.date, row.description, row.debit, row.credit
        )
        .unwrap();
    }
    (dir, path)
}

fn default_config() -> tally_core::ImportConfig {
    commands::load_config(None).unwrap()
}

// ========== Shared Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Point of Sale - Interac", 10), "Point o...");
    assert_eq!(truncate("ÉLECTRONIQUE", 6), "ÉLE...");
}

#[test]
fn test_load_config_missing_file() {
    let result = commands::load_config(Some(Path::new("/nonexistent/import.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("import.toml");
    std::fs::write(&path, "[csv]\ndelimiter = \";\"\nhas_headers = true\n").unwrap();

    let config = commands::load_config(Some(&path)).unwrap();
    assert_eq!(config.delimiter, b';');
    assert!(config.has_headers);
}

#[test]
fn test_load_summary() {
    let (_dir, path) = sample_csv_file();
    let summary = commands::load_summary(&path, &default_config()).unwrap();
    assert_eq!(summary.debit_count(), 4);
    assert_eq!(summary.credit_count(), 3);
}

#[test]
fn test_load_summary_missing_file() {
    let result = commands::load_summary(Path::new("/nonexistent.csv"), &default_config());
    assert!(result.is_err());
}

#[test]
fn test_load_summary_malformed_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "2022-04-17,Internet Banking E-TRANSFER,,\n").unwrap();

    let err = commands::load_summary(&path, &default_config()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<tally_core::Error>(),
        Some(tally_core::Error::MalformedRow(_))
    ));
}

// ========== Command Tests ==========

#[test]
fn test_cmd_classify() {
    assert!(commands::cmd_classify("Internet Banking INTERNET BILL PAY 0000001 PANDA MOBILE").is_ok());
    assert!(commands::cmd_classify("").is_ok());
}

#[test]
fn test_cmd_import() {
    let (_dir, path) = sample_csv_file();
    let config = default_config();
    assert!(commands::cmd_import(&path, &config, None, KindFilter::All, false).is_ok());
    assert!(commands::cmd_import(&path, &config, Some(4), KindFilter::Credit, false).is_ok());
    assert!(commands::cmd_import(&path, &config, None, KindFilter::All, true).is_ok());
}

#[test]
fn test_cmd_import_invalid_month() {
    let (_dir, path) = sample_csv_file();
    let result = commands::cmd_import(&path, &default_config(), Some(13), KindFilter::All, false);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<tally_core::Error>(),
        Some(tally_core::Error::InvalidMonthKey(13))
    ));
}

#[test]
fn test_cmd_import_json_invalid_month() {
    let (_dir, path) = sample_csv_file();
    let result = commands::cmd_import(&path, &default_config(), Some(13), KindFilter::All, true);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<tally_core::Error>(),
        Some(tally_core::Error::InvalidMonthKey(13))
    ));
}

#[test]
fn test_cmd_import_json_with_filters() {
    let (_dir, path) = sample_csv_file();
    let config = default_config();
    assert!(commands::cmd_import(&path, &config, Some(4), KindFilter::Credit, true).is_ok());
    assert!(commands::cmd_import(&path, &config, None, KindFilter::Debit, true).is_ok());
}

#[test]
fn test_cmd_summary_amount_overflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("huge.csv");
    std::fs::write(
        &path,
        "2022-04-17,Interest paid,,50000000000000000000000000000\n\
         2022-04-18,Interest paid,,50000000000000000000000000000\n",
    )
    .unwrap();

    let err = commands::cmd_summary(&path, &default_config(), false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<tally_core::Error>(),
        Some(tally_core::Error::AmountOverflow(_))
    ));
    assert!(commands::cmd_import(&path, &default_config(), None, KindFilter::All, true).is_err());
}

#[test]
fn test_select_lines() {
    let (_dir, path) = sample_csv_file();
    let summary = commands::load_summary(&path, &default_config()).unwrap();

    let credits = commands::select_lines(&summary, None, KindFilter::Credit).unwrap();
    assert_eq!(credits.len(), 3);

    let january = commands::select_lines(&summary, Some(1), KindFilter::All).unwrap();
    assert_eq!(january.len(), 2);

    let april_debits = commands::select_lines(&summary, Some(4), KindFilter::Debit).unwrap();
    assert_eq!(april_debits.len(), 1);
    assert_eq!(
        april_debits[0].debit(),
        Decimal::from_str("400.00").unwrap()
    );
}

#[test]
fn test_cmd_summary() {
    let (_dir, path) = sample_csv_file();
    let config = default_config();
    assert!(commands::cmd_summary(&path, &config, false).is_ok());
    assert!(commands::cmd_summary(&path, &config, true).is_ok());
}

#[test]
fn test_cmd_export() {
    let (dir, path) = sample_csv_file();
    let output = dir.path().join("out.csv");

    commands::cmd_export(&path, &output, &default_config(), None, KindFilter::Credit).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "date,label,type,id,agent,debit,credit,kind");
    assert!(rows[1..].iter().all(|r| r.ends_with(",Credit")));
    assert!(written.contains("PAY PAYROLL"));
}

#[test]
fn test_cmd_export_month() {
    let (dir, path) = sample_csv_file();
    let output = dir.path().join("march.csv");

    commands::cmd_export(&path, &output, &default_config(), Some(3), KindFilter::All).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains("PANDA MOBILE"));
}

#[test]
fn test_cmd_demo() {
    assert!(commands::cmd_demo(false).is_ok());
    assert!(commands::cmd_demo(true).is_ok());
}
