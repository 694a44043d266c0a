//! Deposit stability estimation
//!
//! Rewards consistent monthly deposit totals and penalizes high
//! month-to-month variance, via the coefficient of variation.

use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{Transaction, TransactionKind};

/// Minimum deposit transactions before variance is worth measuring.
pub const MIN_DEPOSITS: usize = 3;
/// Stability returned when deposit history is too sparse to judge.
pub const NEUTRAL_STABILITY: f64 = 0.5;
/// Stability returned when all deposits fall inside a single month.
pub const SINGLE_MONTH_STABILITY: f64 = 0.6;

/// Stability of a user's deposit stream, in [0, 1].
///
/// Deposits are grouped by UTC calendar month and summed; the score is
/// `clamp(1 - coefficient_of_variation, 0, 1)` over the per-month totals
/// (population variance). Two early exits avoid drawing strong
/// conclusions from sparse history:
///
/// - fewer than [`MIN_DEPOSITS`] deposit transactions → [`NEUTRAL_STABILITY`]
/// - fewer than 2 distinct months → [`SINGLE_MONTH_STABILITY`]
///
/// A zero mean (all deposits of zero amount) counts as maximally
/// unstable.
pub fn deposit_stability(transactions: &[Transaction]) -> f64 {
    let deposits: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Deposit)
        .collect();

    if deposits.len() < MIN_DEPOSITS {
        return NEUTRAL_STABILITY;
    }

    let mut monthly_totals: HashMap<(i32, u32), i64> = HashMap::new();
    for tx in &deposits {
        let month = (tx.created_at.year(), tx.created_at.month());
        *monthly_totals.entry(month).or_insert(0) += tx.sanitized_amount();
    }

    if monthly_totals.len() < 2 {
        return SINGLE_MONTH_STABILITY;
    }

    let totals: Vec<f64> = monthly_totals.values().map(|&t| t as f64).collect();
    let mean = totals.iter().sum::<f64>() / totals.len() as f64;
    let variance = totals.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / totals.len() as f64;

    let coefficient = if mean == 0.0 {
        1.0
    } else {
        variance.sqrt() / mean
    };

    (1.0 - coefficient).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{deposit, utc, withdrawal};

    #[test]
    fn test_sparse_history_is_neutral() {
        assert_eq!(deposit_stability(&[]), NEUTRAL_STABILITY);

        let txns = vec![
            deposit(10_000, utc(2026, 1, 5)),
            deposit(10_000, utc(2026, 2, 5)),
        ];
        assert_eq!(deposit_stability(&txns), NEUTRAL_STABILITY);
    }

    #[test]
    fn test_non_deposits_do_not_count() {
        // Three transactions, but only two are deposits
        let txns = vec![
            deposit(10_000, utc(2026, 1, 5)),
            deposit(10_000, utc(2026, 2, 5)),
            withdrawal(10_000, utc(2026, 3, 5)),
        ];
        assert_eq!(deposit_stability(&txns), NEUTRAL_STABILITY);
    }

    #[test]
    fn test_single_month_history() {
        let txns = vec![
            deposit(5_000, utc(2026, 1, 2)),
            deposit(5_000, utc(2026, 1, 15)),
            deposit(5_000, utc(2026, 1, 28)),
        ];
        assert_eq!(deposit_stability(&txns), SINGLE_MONTH_STABILITY);
    }

    #[test]
    fn test_identical_monthly_totals_are_fully_stable() {
        let txns = vec![
            deposit(10_000, utc(2026, 1, 5)),
            deposit(10_000, utc(2026, 2, 5)),
            deposit(10_000, utc(2026, 3, 5)),
        ];
        assert_eq!(deposit_stability(&txns), 1.0);
    }

    #[test]
    fn test_split_deposits_sum_within_month() {
        // 4k + 6k in January equals February's single 10k deposit
        let txns = vec![
            deposit(4_000, utc(2026, 1, 3)),
            deposit(6_000, utc(2026, 1, 20)),
            deposit(10_000, utc(2026, 2, 5)),
        ];
        assert_eq!(deposit_stability(&txns), 1.0);
    }

    #[test]
    fn test_variance_lowers_stability() {
        let steady = vec![
            deposit(10_000, utc(2026, 1, 5)),
            deposit(10_000, utc(2026, 2, 5)),
            deposit(10_000, utc(2026, 3, 5)),
        ];
        let erratic = vec![
            deposit(1_000, utc(2026, 1, 5)),
            deposit(19_000, utc(2026, 2, 5)),
            deposit(10_000, utc(2026, 3, 5)),
        ];

        let steady_score = deposit_stability(&steady);
        let erratic_score = deposit_stability(&erratic);
        assert!(erratic_score < steady_score);
        assert!((0.0..=1.0).contains(&erratic_score));
    }

    #[test]
    fn test_zero_mean_is_maximally_unstable() {
        let txns = vec![
            deposit(0, utc(2026, 1, 5)),
            deposit(0, utc(2026, 2, 5)),
            deposit(0, utc(2026, 3, 5)),
        ];
        assert_eq!(deposit_stability(&txns), 0.0);
    }
}
