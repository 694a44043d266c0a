//! Test helpers for building transaction snapshots

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{MetadataValue, Transaction, TransactionKind, META_DUE_DATE, META_PAID_AT};

/// Noon UTC on the given day, so date arithmetic in tests stays away from
/// midnight boundaries.
pub(crate) fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(crate) fn tx(kind: TransactionKind, amount: i64, created_at: DateTime<Utc>) -> Transaction {
    Transaction {
        id: format!("tx-{}-{}-{}", kind, amount, created_at.timestamp()),
        user_id: "user-1".to_string(),
        kind,
        amount,
        currency: "KES".to_string(),
        created_at,
        metadata: HashMap::new(),
        external_ref: None,
    }
}

pub(crate) fn deposit(amount: i64, created_at: DateTime<Utc>) -> Transaction {
    tx(TransactionKind::Deposit, amount, created_at)
}

pub(crate) fn withdrawal(amount: i64, created_at: DateTime<Utc>) -> Transaction {
    tx(TransactionKind::Withdrawal, amount, created_at)
}

pub(crate) fn tx_with_metadata(
    kind: TransactionKind,
    amount: i64,
    created_at: DateTime<Utc>,
    entries: &[(&str, MetadataValue)],
) -> Transaction {
    let mut built = tx(kind, amount, created_at);
    for (key, value) in entries {
        built.metadata.insert(key.to_string(), value.clone());
    }
    built
}

/// A payment with explicit due/paid timestamps in its metadata.
pub(crate) fn payment(
    amount: i64,
    created_at: DateTime<Utc>,
    due: Option<DateTime<Utc>>,
    paid: Option<DateTime<Utc>>,
) -> Transaction {
    let mut built = tx(TransactionKind::Payment, amount, created_at);
    if let Some(due) = due {
        built
            .metadata
            .insert(META_DUE_DATE.to_string(), MetadataValue::Timestamp(due));
    }
    if let Some(paid) = paid {
        built
            .metadata
            .insert(META_PAID_AT.to_string(), MetadataValue::Timestamp(paid));
    }
    built
}

/// Any-kind transaction tagged with a spend category.
pub(crate) fn categorized(
    kind: TransactionKind,
    amount: i64,
    created_at: DateTime<Utc>,
    category: &str,
) -> Transaction {
    let mut built = tx(kind, amount, created_at);
    built.metadata.insert(
        crate::models::META_CATEGORY.to_string(),
        MetadataValue::Text(category.to_string()),
    );
    built
}
