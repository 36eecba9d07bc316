//! Monthly aggregation of classified lines
//!
//! A [`Summary`] keeps one bucket per calendar month, always all twelve,
//! so a line can never land in a missing bucket. Buckets are append-only
//! and keep ingestion order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ledger::DEFAULT_DATE_FORMAT;
use crate::models::{Kind, KindFilter, Line, RawLine};

const MONTHS: usize = 12;

/// Classified lines bucketed by month, with debit/credit counters
///
/// Invariant: `debit_count + credit_count` equals the number of lines
/// across all buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    months: [Vec<Line>; MONTHS],
    debit_count: usize,
    credit_count: usize,
}

/// Per-month line count and amount totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub month: u32,
    pub lines: usize,
    pub debit_total: Decimal,
    pub credit_total: Decimal,
}

impl Summary {
    /// Create an empty summary with all twelve month buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold raw rows into a new summary
    pub fn from_rows<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a RawLine>,
    {
        let mut summary = Self::new();
        summary.ingest(rows)?;
        Ok(summary)
    }

    /// Ingest raw rows in order
    ///
    /// Stops at the first row that fails to build a line. Rows before it
    /// stay ingested; the failing row is not recorded.
    pub fn ingest<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a RawLine>,
    {
        self.ingest_with_format(rows, DEFAULT_DATE_FORMAT)
    }

    /// Ingest raw rows whose dates use `date_format`
    pub fn ingest_with_format<'a, I>(&mut self, rows: I, date_format: &str) -> Result<()>
    where
        I: IntoIterator<Item = &'a RawLine>,
    {
        let before = self.len();
        for (index, raw) in rows.into_iter().enumerate() {
            let line = Line::from_raw_with_format(raw, date_format).inspect_err(|e| {
                warn!("Row {} rejected: {}", index + 1, e);
            })?;
            self.push(line);
        }
        debug!(
            "Ingested {} lines ({} debits, {} credits total)",
            self.len() - before,
            self.debit_count,
            self.credit_count
        );
        Ok(())
    }

    /// Ingest a single raw row
    pub fn ingest_row(&mut self, raw: &RawLine) -> Result<()> {
        let line = Line::from_raw(raw)?;
        self.push(line);
        Ok(())
    }

    /// Append an already built line to its month and bump the matching counter
    pub fn push(&mut self, line: Line) {
        match line.kind() {
            Kind::Debit => self.debit_count += 1,
            Kind::Credit => self.credit_count += 1,
        }
        let index = month_index(line.month());
        self.months[index].push(line);
    }

    /// Every month bucket keyed 1-12, empty months included
    pub fn all_months(&self) -> BTreeMap<u32, &[Line]> {
        self.iter()
            .enumerate()
            .map(|(i, lines)| (i as u32 + 1, lines.as_slice()))
            .collect()
    }

    /// Lines for month `n` (1-12) that match `filter`
    pub fn month(&self, n: u32, filter: KindFilter) -> Result<Vec<&Line>> {
        if !(1..=MONTHS as u32).contains(&n) {
            return Err(Error::InvalidMonthKey(n));
        }
        Ok(self.months[month_index(n)]
            .iter()
            .filter(|line| filter.matches(line.kind()))
            .collect())
    }

    /// Month buckets in order January to December
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Line>> {
        self.months.iter()
    }

    /// Every line, month by month, in ingestion order within a month
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.months.iter().flatten()
    }

    /// Credit lines that name a counterparty (deposits, incoming transfers)
    pub fn credits_with_agent(&self) -> impl Iterator<Item = &Line> {
        self.lines()
            .filter(|line| line.kind() == Kind::Credit && !line.transaction().agent().is_empty())
    }

    pub fn debit_count(&self) -> usize {
        self.debit_count
    }

    pub fn credit_count(&self) -> usize {
        self.credit_count
    }

    /// Total number of lines across all months
    pub fn len(&self) -> usize {
        self.months.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of every debit, or `AmountOverflow` if it exceeds `Decimal::MAX`
    pub fn debit_total(&self) -> Result<Decimal> {
        checked_total(self.lines().map(Line::debit))
    }

    /// Sum of every credit, or `AmountOverflow` if it exceeds `Decimal::MAX`
    pub fn credit_total(&self) -> Result<Decimal> {
        checked_total(self.lines().map(Line::credit))
    }

    /// Line count and totals for each of the twelve months
    pub fn month_totals(&self) -> Result<Vec<MonthTotals>> {
        self.all_months()
            .into_iter()
            .map(|(month, lines)| {
                Ok(MonthTotals {
                    month,
                    lines: lines.len(),
                    debit_total: checked_total(lines.iter().map(Line::debit))?,
                    credit_total: checked_total(lines.iter().map(Line::credit))?,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a Vec<Line>;
    type IntoIter = std::slice::Iter<'a, Vec<Line>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal> {
    amounts.try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| {
            Error::AmountOverflow(format!("{} + {} exceeds {}", total, amount, Decimal::MAX))
        })
    })
}

/// Bucket index for a calendar month; chrono guarantees 1-12
fn month_index(month: u32) -> usize {
    month as usize - 1
}
