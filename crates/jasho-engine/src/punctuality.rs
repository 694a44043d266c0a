//! Payment punctuality estimation

use chrono::{DateTime, Utc};

use crate::models::{Transaction, TransactionKind, META_DUE_DATE, META_PAID_AT};

/// Fraction of payment-kind transactions settled on or before their due
/// date, in [0, 1].
///
/// For each payment, `metadata.dueDate` defaults to the Unix epoch when
/// absent or unparseable (so a payment without a due date counts as
/// late) and `metadata.paidAt` defaults to the transaction's own
/// created-at timestamp. A user with no payment history at all gets the
/// benefit of the doubt: 1.0.
pub fn payment_punctuality(transactions: &[Transaction]) -> f64 {
    let payments: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Payment)
        .collect();

    if payments.is_empty() {
        return 1.0;
    }

    let on_time = payments
        .iter()
        .filter(|tx| {
            let due = tx
                .metadata_timestamp(META_DUE_DATE)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            let paid = tx
                .metadata_timestamp(META_PAID_AT)
                .unwrap_or(tx.created_at);
            paid <= due
        })
        .count();

    on_time as f64 / payments.len() as f64
}
