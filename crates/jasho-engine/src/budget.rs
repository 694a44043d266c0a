//! Per-category budget suggestions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, META_CATEGORY};

/// Category assigned to transactions with no `category` metadata.
pub const DEFAULT_CATEGORY: &str = "misc";

/// At most this many suggestions are produced per snapshot.
pub const MAX_SUGGESTIONS: usize = 5;

/// A proposed spending cap for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSuggestion {
    pub category: String,
    /// Suggested cap in minor units, 90% of historical category spend.
    pub limit: i64,
}

/// Group all transactions by category, keep the top [`MAX_SUGGESTIONS`]
/// by total spend, and cap each at 90% of its historical total.
///
/// Categories with equal totals order by ascending label, so the output
/// is reproducible regardless of input order.
pub fn suggest_budgets(transactions: &[Transaction]) -> Vec<BudgetSuggestion> {
    let mut totals: HashMap<String, i64> = HashMap::new();
    for tx in transactions {
        let category = tx.metadata_text(META_CATEGORY).unwrap_or(DEFAULT_CATEGORY);
        *totals.entry(category.to_string()).or_insert(0) += tx.sanitized_amount();
    }

    let mut ranked: Vec<(String, i64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(MAX_SUGGESTIONS);

    ranked
        .into_iter()
        .map(|(category, total)| BudgetSuggestion {
            category,
            limit: suggested_limit(total),
        })
        .collect()
}

/// `round(total * 0.9)` in integer arithmetic; never exceeds the total.
fn suggested_limit(total: i64) -> i64 {
    (total * 9 + 5) / 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::test_utils::{categorized, utc, withdrawal};

    #[test]
    fn test_empty_snapshot_yields_no_suggestions() {
        assert!(suggest_budgets(&[]).is_empty());
    }

    #[test]
    fn test_grouping_and_ordering() {
        let txns = vec![
            categorized(TransactionKind::Withdrawal, 600, utc(2026, 1, 3), "food"),
            categorized(TransactionKind::Payment, 5_000, utc(2026, 1, 4), "rent"),
            categorized(TransactionKind::Withdrawal, 400, utc(2026, 1, 8), "food"),
        ];

        let budgets = suggest_budgets(&txns);
        assert_eq!(
            budgets,
            vec![
                BudgetSuggestion {
                    category: "rent".to_string(),
                    limit: 4_500,
                },
                BudgetSuggestion {
                    category: "food".to_string(),
                    limit: 900,
                },
            ]
        );
    }

    #[test]
    fn test_uncategorized_spend_lands_in_misc() {
        let txns = vec![withdrawal(1_000, utc(2026, 1, 3))];

        let budgets = suggest_budgets(&txns);
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].category, DEFAULT_CATEGORY);
        assert_eq!(budgets[0].limit, 900);
    }

    #[test]
    fn test_top_five_cap() {
        let txns: Vec<_> = (0..8)
            .map(|i| {
                categorized(
                    TransactionKind::Withdrawal,
                    1_000 * (i + 1),
                    utc(2026, 1, 3),
                    &format!("cat{}", i),
                )
            })
            .collect();

        let budgets = suggest_budgets(&txns);
        assert_eq!(budgets.len(), MAX_SUGGESTIONS);
        // Largest categories survive the cut
        assert_eq!(budgets[0].category, "cat7");
        assert_eq!(budgets[4].category, "cat3");
    }

    #[test]
    fn test_equal_totals_break_ties_by_label() {
        let txns = vec![
            categorized(TransactionKind::Withdrawal, 1_000, utc(2026, 1, 3), "transport"),
            categorized(TransactionKind::Withdrawal, 1_000, utc(2026, 1, 4), "airtime"),
        ];

        let budgets = suggest_budgets(&txns);
        assert_eq!(budgets[0].category, "airtime");
        assert_eq!(budgets[1].category, "transport");
    }

    #[test]
    fn test_limit_never_exceeds_category_total() {
        for total in [0, 1, 9, 10, 11, 99, 12_345] {
            assert!(suggested_limit(total) <= total);
        }
        assert_eq!(suggested_limit(1), 1); // round(0.9)
        assert_eq!(suggested_limit(5), 5); // round(4.5) rounds half up
        assert_eq!(suggested_limit(6), 5); // round(5.4)
    }
}
