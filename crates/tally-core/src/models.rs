//! Domain models for Tally

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One row of a bank export before classification
///
/// Amount fields are kept as text; an empty field means "not present".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// Date as exported, normally `YYYY-MM-DD`
    pub date: String,
    /// Free-text description
    pub description: String,
    /// Debit amount, or empty
    pub debit: String,
    /// Credit amount, or empty
    pub credit: String,
}

impl RawLine {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        debit: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            debit: debit.into(),
            credit: credit.into(),
        }
    }
}

impl std::fmt::Display for RawLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.date, self.description, self.debit, self.credit
        )
    }
}

/// Whether a line takes money out of the account or puts it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Debit,
    Credit,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown kind: {} (valid: debit, credit)", s)),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        })
    }
}

/// Kind selector for month lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Debit,
    Credit,
}

impl KindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }

    pub fn matches(&self, kind: Kind) -> bool {
        match self {
            Self::All => true,
            Self::Debit => kind == Kind::Debit,
            Self::Credit => kind == Kind::Credit,
        }
    }
}

impl From<Kind> for KindFilter {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Debit => Self::Debit,
            Kind::Credit => Self::Credit,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown kind: {} (valid: all, debit, credit)", s)),
        }
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a statement description says about a transaction
///
/// Purchases, e-transfers and bill payments usually carry an identifier
/// and a counterparty; fees and payroll deposits often do not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    label: String,
    #[serde(rename = "type")]
    tx_type: String,
    id: String,
    agent: String,
}

impl Transaction {
    pub fn new(
        label: impl Into<String>,
        tx_type: impl Into<String>,
        id: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            tx_type: tx_type.into(),
            id: id.into(),
            agent: agent.into(),
        }
    }

    /// Method or channel, e.g. "Point of Sale - Interac"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stated purpose, e.g. "RETAIL PURCHASE"
    pub fn tx_type(&self) -> &str {
        &self.tx_type
    }

    /// Transaction identifier, empty when the description has none
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Counterparty (merchant, payee, depositor), possibly empty
    pub fn agent(&self) -> &str {
        &self.agent
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.label, self.tx_type, self.id, self.agent
        )
    }
}

/// A classified statement entry
///
/// Exactly one of `debit`/`credit` is nonzero and it agrees with `kind`.
/// Build one with [`Line::new`] or [`Line::from_raw`](crate::ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    date: NaiveDate,
    transaction: Transaction,
    debit: Decimal,
    credit: Decimal,
    kind: Kind,
}

impl Line {
    /// Create a line, placing `amount` on the side named by `kind`
    ///
    /// `amount` must be greater than zero.
    pub fn new(
        date: NaiveDate,
        transaction: Transaction,
        kind: Kind,
        amount: Decimal,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "{} amount must be greater than zero: {}",
                kind, amount
            )));
        }
        let (debit, credit) = match kind {
            Kind::Debit => (amount, Decimal::ZERO),
            Kind::Credit => (Decimal::ZERO, amount),
        };
        Ok(Self {
            date,
            transaction,
            debit,
            credit,
            kind,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Calendar month of the line's date (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn debit(&self) -> Decimal {
        self.debit
    }

    pub fn credit(&self) -> Decimal {
        self.credit
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The nonzero side of the line
    pub fn amount(&self) -> Decimal {
        match self.kind {
            Kind::Debit => self.debit,
            Kind::Credit => self.credit,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.date, self.transaction, self.debit, self.credit, self.kind
        )
    }
}
