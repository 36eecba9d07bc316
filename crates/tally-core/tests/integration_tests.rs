//! Integration tests for tally-core
//!
//! These tests exercise the full CSV → classify → summarize workflow.

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_core::{
    classify, parse_csv, read_rows, sample_rows, to_json, write_lines_csv, Error, ImportConfig,
    Kind, KindFilter, Line, RawLine, Summary,
};

/// The bundled sample statement as a CSV export
fn sample_csv() -> String {
    sample_rows()
        .iter()
        .map(|r| format!("{},{},{},{}\n", r.date, r.description, r.debit, r.credit))
        .collect()
}

// =============================================================================
// Sample Statement
// =============================================================================

#[test]
fn test_sample_counts() {
    let summary = Summary::from_rows(&sample_rows()).expect("Failed to ingest sample");

    assert_eq!(summary.debit_count(), 4);
    assert_eq!(summary.credit_count(), 3);
    assert_eq!(summary.len(), 7);
}

#[test]
fn test_sample_april_bucket() {
    let summary = Summary::from_rows(&sample_rows()).unwrap();

    let april = summary.month(4, KindFilter::All).unwrap();
    assert_eq!(april.len(), 3);
    assert!(april.iter().all(|l| l.month() == 4));

    let months = summary.all_months();
    let sizes: Vec<usize> = months.values().map(|lines| lines.len()).collect();
    assert_eq!(sizes, vec![2, 0, 1, 3, 1, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_sample_credits_with_agent() {
    let summary = Summary::from_rows(&sample_rows()).unwrap();

    let printed: Vec<String> = summary
        .credits_with_agent()
        .map(|l| l.transaction().to_string())
        .collect();

    assert_eq!(
        printed,
        vec![
            "Internet Banking, E-TRANSFER, 000000001234, JOHN SMITH",
            "Electronic Funds Transfer, PAY PAYROLL, , PAYROLL",
            "Point of Sale - Interac, RETAIL PURCHASE, D3ADB33F0000, Subshop 00001",
        ]
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_exactly_one_side_is_nonzero() {
    let summary = Summary::from_rows(&sample_rows()).unwrap();

    for line in summary.lines() {
        match line.kind() {
            Kind::Debit => {
                assert!(line.debit() > Decimal::ZERO);
                assert_eq!(line.credit(), Decimal::ZERO);
            }
            Kind::Credit => {
                assert!(line.credit() > Decimal::ZERO);
                assert_eq!(line.debit(), Decimal::ZERO);
            }
        }
    }
}

#[test]
fn test_counters_match_bucket_sizes() {
    let rows = sample_rows();
    let mut summary = Summary::new();

    for (n, row) in rows.iter().enumerate() {
        summary.ingest_row(row).unwrap();
        let bucketed: usize = summary.iter().map(Vec::len).sum();
        assert_eq!(summary.debit_count() + summary.credit_count(), n + 1);
        assert_eq!(bucketed, n + 1);
    }
}

#[test]
fn test_classification_is_pure() {
    for row in sample_rows() {
        assert_eq!(classify(&row.description), classify(&row.description));
    }
}

// =============================================================================
// Literal Cases
// =============================================================================

#[test]
fn test_payroll_deposit_line() {
    let raw = RawLine::new(
        "2022-04-17",
        "Electronic Funds Transfer PAY PAYROLL PAYROLL",
        "",
        "6000.00",
    );
    let line = Line::from_raw(&raw).unwrap();

    assert_eq!(line.kind(), Kind::Credit);
    assert_eq!(line.credit(), Decimal::from_str("6000.00").unwrap());
    assert_eq!(line.transaction().tx_type(), "PAY PAYROLL");
    assert_eq!(line.transaction().agent(), "PAYROLL");
}

#[test]
fn test_row_without_amounts_fails_ingestion() {
    let mut rows = sample_rows();
    rows.push(RawLine::new("2022-06-01", "Internet Banking E-TRANSFER", "", ""));

    let err = Summary::from_rows(&rows).unwrap_err();
    match err {
        Error::MalformedRow(row) => assert_eq!(row.date, "2022-06-01"),
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_lookup_outside_calendar() {
    let summary = Summary::from_rows(&sample_rows()).unwrap();
    assert!(matches!(
        summary.month(13, KindFilter::All),
        Err(Error::InvalidMonthKey(13))
    ));
}

// =============================================================================
// CSV Round Trip
// =============================================================================

#[test]
fn test_csv_import_matches_in_memory_ingest() {
    let csv = sample_csv();
    let config = ImportConfig::default();

    let rows = read_rows(csv.as_bytes(), &config).unwrap();
    assert_eq!(rows, sample_rows());

    let from_csv = parse_csv(csv.as_bytes(), &config).unwrap();
    let in_memory = Summary::from_rows(&sample_rows()).unwrap();
    assert_eq!(from_csv, in_memory);
}

#[test]
fn test_export_after_import() {
    let summary = parse_csv(sample_csv().as_bytes(), &ImportConfig::default()).unwrap();

    let mut out = Vec::new();
    write_lines_csv(summary.month(4, KindFilter::Credit).unwrap(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("JOHN SMITH"));
    assert!(!text.contains("S-MART"));

    let json = to_json(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["debit_count"], 4);
    assert_eq!(value["credit_count"], 3);
}
