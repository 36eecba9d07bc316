//! Error types for Tally

use thiserror::Error;

use crate::models::RawLine;

#[derive(Error, Debug)]
pub enum Error {
    /// A row must carry exactly one of a debit or a credit amount
    #[error("Malformed row (expected exactly one of debit/credit): {0}")]
    MalformedRow(Box<RawLine>),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month key: {0} (expected 1-12)")]
    InvalidMonthKey(u32),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
