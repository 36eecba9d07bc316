//! Line builder: turns one raw export row into a classified [`Line`]

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::models::{Kind, Line, RawLine};

/// Date format used by bank exports unless configured otherwise
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

impl Line {
    /// Build a line from a raw row with an ISO `YYYY-MM-DD` date
    pub fn from_raw(raw: &RawLine) -> Result<Line> {
        Self::from_raw_with_format(raw, DEFAULT_DATE_FORMAT)
    }

    /// Build a line from a raw row, parsing the date with `date_format`
    pub fn from_raw_with_format(raw: &RawLine, date_format: &str) -> Result<Line> {
        let (kind, amount) = split_amount(raw)?;
        let date = parse_date(&raw.date, date_format)?;
        let transaction = classify(&raw.description);
        Line::new(date, transaction, kind, amount)
    }
}

/// Decide debit vs credit from which amount field is present
fn split_amount(raw: &RawLine) -> Result<(Kind, Decimal)> {
    let debit = raw.debit.trim();
    let credit = raw.credit.trim();

    match (debit.is_empty(), credit.is_empty()) {
        (false, true) => Ok((Kind::Debit, parse_amount(debit)?)),
        (true, false) => Ok((Kind::Credit, parse_amount(credit)?)),
        _ => Err(Error::MalformedRow(Box::new(raw.clone()))),
    }
}

/// Parse a date string with the given chrono format
pub fn parse_date(s: &str, format: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .map_err(|e| Error::InvalidDate(format!("{:?} ({})", s, e)))
}

/// Parse a positive amount, tolerating currency symbols and thousands separators
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    let amount = Decimal::from_str(&cleaned)
        .map_err(|_| Error::InvalidAmount(format!("Unable to parse amount: {}", s)))?;

    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "Amount must be greater than zero: {}",
            s
        )));
    }

    Ok(amount)
}
