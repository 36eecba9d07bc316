//! Description classifier
//!
//! Splits a free-text statement description into label, type, identifier
//! and agent using only the shape of each whitespace-separated token:
//!
//! ```text
//! Point of Sale - Interac  RETAIL PURCHASE  0000012  S-MART #0001
//! └──── label ──────────┘  └─── type ────┘  └─ id ┘  └─ agent ──┘
//! ```
//!
//! Classification never fails. Descriptions that do not follow the usual
//! layout just leave some fields empty.

use tracing::trace;

use crate::models::Transaction;

/// Token that introduces a payroll deposit ("PAY PAYROLL PAYROLL")
const PAY_TOKEN: &str = "PAY";

/// Where the identifier token sits in the description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    NotFound,
    FoundAt(usize),
}

impl Anchor {
    /// Position of an identifier that has at least one token before it
    ///
    /// An identifier in first position cannot split a label/type prefix
    /// from a counterparty suffix, so it anchors nothing.
    fn splitting_index(self) -> Option<usize> {
        match self {
            Self::FoundAt(k) if k > 0 => Some(k),
            _ => None,
        }
    }
}

/// Full classifier output, including where the identifier was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub transaction: Transaction,
    pub anchor: Anchor,
}

/// Classify a description into its transaction fields
pub fn classify(description: &str) -> Transaction {
    classify_detailed(description).transaction
}

/// Classify a description, also reporting the identifier position
pub fn classify_detailed(description: &str) -> Classification {
    let tokens: Vec<&str> = description.split_whitespace().collect();

    let label = extract_label(&tokens);
    let mut tx_type = extract_type(&tokens);
    let (id, anchor) = extract_identifier(&tokens);

    let mut agent = match anchor.splitting_index() {
        Some(k) if tokens.len() > k + 1 => tokens[k + 1..].join(" "),
        _ => String::new(),
    };

    // Payroll deposits have no digit-bearing token to anchor on
    if anchor.splitting_index().is_none() {
        if let Some(pos) = tokens.iter().position(|t| *t == PAY_TOKEN) {
            match tokens.get(pos + 1) {
                Some(next) => {
                    tx_type = format!("{} {}", PAY_TOKEN, next);
                    agent = next.to_string();
                }
                None => {
                    tx_type = PAY_TOKEN.to_string();
                    agent = String::new();
                }
            }
        }
    }

    trace!(
        "Classified {:?} as label={:?} type={:?} id={:?} agent={:?}",
        description,
        label,
        tx_type,
        id,
        agent
    );

    Classification {
        transaction: Transaction::new(label, tx_type, id, agent),
        anchor,
    }
}

/// Leading lower/title-case words (and "-") up to the first upper-case word
fn extract_label(tokens: &[&str]) -> String {
    let mut words = Vec::new();
    for token in tokens {
        if is_title(token) || is_lower(token) || *token == "-" {
            words.push(*token);
        }
        if is_upper(token) {
            break;
        }
    }
    // A single-letter or "N/A"-style token is both title- and upper-case
    words.retain(|w| !is_upper(w));
    words.join(" ")
}

/// Digit-free upper-case words before the first purely numeric word
fn extract_type(tokens: &[&str]) -> String {
    let mut words = Vec::new();
    for token in tokens {
        if is_upper(token) && !contains_digit(token) {
            words.push(*token);
        }
        if is_numeric(token) {
            break;
        }
    }
    words.join(" ")
}

/// First purely numeric or digit-bearing alphanumeric token
fn extract_identifier(tokens: &[&str]) -> (String, Anchor) {
    tokens
        .iter()
        .enumerate()
        .find(|(_, t)| is_numeric(t) || is_alphanumeric_with_digit(t))
        .map(|(k, t)| (t.to_string(), Anchor::FoundAt(k)))
        .unwrap_or((String::new(), Anchor::NotFound))
}

/// Has a cased character and no upper-case characters
fn is_lower(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Has a cased character and no lower-case characters
fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Upper-case letters only start cased runs, lower-case letters only continue them
fn is_title(s: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

fn contains_digit(s: &str) -> bool {
    s.chars().any(char::is_numeric)
}

/// e.g. "D3ADB33F0000"; "FEE$16.95" does not qualify
fn is_alphanumeric_with_digit(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric) && contains_digit(s)
}
