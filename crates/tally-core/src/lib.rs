//! Tally Core Library
//!
//! Classifies bank statement lines and tallies them by month:
//! - Description classifier (label, type, identifier, agent)
//! - Line builder (date, debit/credit split, classification)
//! - Monthly summary with debit/credit counters
//! - CSV import with configurable column layout
//! - CSV and JSON export

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod models;
pub mod sample;
pub mod summary;

pub use classify::{classify, classify_detailed, Anchor, Classification};
pub use config::{ColumnMap, ImportConfig};
pub use error::{Error, Result};
pub use export::{to_json, write_lines_csv};
pub use import::{parse_csv, read_rows};
pub use models::{Kind, KindFilter, Line, RawLine, Transaction};
pub use sample::sample_rows;
pub use summary::{MonthTotals, Summary};
