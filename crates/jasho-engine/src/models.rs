//! Domain models for the scoring and insight engine

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Metadata key carrying a transaction's spend category.
pub const META_CATEGORY: &str = "category";
/// Metadata key carrying a payment's due date.
pub const META_DUE_DATE: &str = "dueDate";
/// Metadata key carrying a payment's settlement time.
pub const META_PAID_AT: &str = "paidAt";

/// Fallback currency code when a snapshot carries no transactions.
pub const DEFAULT_CURRENCY: &str = "KES";

/// Opaque subject key for the user a computation is tagged with.
///
/// The engine never looks up or mutates a user record; the identity is
/// carried through to the result unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Transaction kinds recognized by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Transfer => "transfer",
            Self::Payment => "payment",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            "transfer" => Ok(Self::Transfer),
            "payment" => Ok(Self::Payment),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single metadata value on a transaction.
///
/// The ledger attaches an open string-keyed bag to each transaction; the
/// engine only distinguishes integer numbers, timestamps, and text.
/// Numbers are read as Unix epoch seconds where a timestamp is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(i64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl MetadataValue {
    /// Convert an untyped JSON value from the ledger into a typed metadata
    /// value. Returns `None` for value shapes the engine has no use for
    /// (floats, booleans, nested structures).
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Number),
            serde_json::Value::String(s) => match DateTime::parse_from_rfc3339(s) {
                Ok(ts) => Some(Self::Timestamp(ts.with_timezone(&Utc))),
                Err(_) => Some(Self::Text(s.clone())),
            },
            _ => None,
        }
    }

    /// Read this value as a UTC timestamp, if it has one.
    ///
    /// Numbers are interpreted as Unix epoch seconds; text is accepted
    /// only in RFC 3339 form. Anything else is treated as absent.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::Number(secs) => DateTime::from_timestamp(*secs, 0),
            Self::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
        }
    }

    /// Read this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A financial transaction, as supplied by the ledger collaborator.
///
/// The engine treats a transaction collection as a read-only snapshot for
/// one computation call; it has no lifecycle inside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub kind: TransactionKind,
    /// Amount in minor currency units. Non-negative per the ledger
    /// contract; see [`Transaction::sanitized_amount`] for how violations
    /// are handled.
    pub amount: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
    /// Reference into an external system (e.g. a mobile-money receipt)
    #[serde(default)]
    pub external_ref: Option<String>,
}

impl Transaction {
    /// Read a metadata entry as a timestamp. Malformed values are treated
    /// as absent.
    pub fn metadata_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.metadata.get(key).and_then(MetadataValue::as_timestamp)
    }

    /// Read a metadata entry as text.
    pub fn metadata_text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetadataValue::as_text)
    }

    /// Amount with the ledger contract enforced: negative amounts are
    /// clamped to 0 and logged, rather than silently skewing aggregates.
    /// Callers who prefer failing fast can run [`validate_snapshot`]
    /// before computing.
    pub(crate) fn sanitized_amount(&self) -> i64 {
        if self.amount < 0 {
            tracing::warn!(
                id = %self.id,
                amount = self.amount,
                "negative amount violates ledger contract, clamping to 0"
            );
            return 0;
        }
        self.amount
    }
}

/// Assert the ledger collaborator's contract over a snapshot: every
/// amount must be a non-negative minor-unit integer.
///
/// The compute functions do not require this (they clamp defensively),
/// but a hosting service can call it at the boundary to surface upstream
/// data-integrity bugs instead of masking them.
pub fn validate_snapshot(transactions: &[Transaction]) -> Result<()> {
    for tx in transactions {
        if tx.amount < 0 {
            return Err(Error::InvalidData(format!(
                "transaction {} has negative amount {}",
                tx.id, tx.amount
            )));
        }
    }
    Ok(())
}

/// Deserialize a transaction snapshot from the JSON array shape the
/// ledger ships across the RPC boundary.
pub fn snapshot_from_json(json: &str) -> Result<Vec<Transaction>> {
    Ok(serde_json::from_str(json)?)
}

/// Currency code used when presenting a snapshot's aggregates: the first
/// transaction's code, or [`DEFAULT_CURRENCY`] for an empty snapshot.
pub fn snapshot_currency(transactions: &[Transaction]) -> &str {
    transactions
        .first()
        .map(|tx| tx.currency.as_str())
        .unwrap_or(DEFAULT_CURRENCY)
}

/// Format a minor-unit amount as major units with two decimals,
/// e.g. `KES 1234.56`. Integer arithmetic throughout.
pub fn format_amount(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.abs();
    format!("{} {}{}.{:02}", currency, sign, minor / 100, minor % 100)
}
