//! Aggregation primitives shared by the score and insight computations
//!
//! All monetary sums are carried as `i64` minor units; realistic ledger
//! volumes stay many orders of magnitude below the signed 64-bit range.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Transaction, TransactionKind};

/// Kinds that count as outgoing spend.
pub const SPENDING_KINDS: &[TransactionKind] =
    &[TransactionKind::Withdrawal, TransactionKind::Payment];

/// Trailing window length for spend averaging, in days.
pub const SPEND_WINDOW_DAYS: i64 = 180;

/// Normalization baseline for the trailing window, in months. Applied
/// even when the window holds fewer months of history, so sparse
/// snapshots average low.
pub const SPEND_WINDOW_MONTHS: i64 = 6;

/// Sum transaction amounts over the given kinds.
///
/// An empty collection (or one with no matching kinds) sums to 0.
pub fn sum_by_kinds(transactions: &[Transaction], kinds: &[TransactionKind]) -> i64 {
    transactions
        .iter()
        .filter(|tx| kinds.contains(&tx.kind))
        .map(Transaction::sanitized_amount)
        .sum()
}

/// Monthly spend average over the trailing [`SPEND_WINDOW_DAYS`] window.
///
/// Sums matching transactions created within the window ending at `now`
/// and divides by the fixed [`SPEND_WINDOW_MONTHS`] baseline. Returns 0.0
/// when nothing in the window matches.
pub fn rolling_monthly_average(
    transactions: &[Transaction],
    kinds: &[TransactionKind],
    now: DateTime<Utc>,
) -> f64 {
    let window_start = now - Duration::days(SPEND_WINDOW_DAYS);
    let total: i64 = transactions
        .iter()
        .filter(|tx| {
            kinds.contains(&tx.kind) && tx.created_at > window_start && tx.created_at <= now
        })
        .map(Transaction::sanitized_amount)
        .sum();

    total as f64 / SPEND_WINDOW_MONTHS as f64
}
