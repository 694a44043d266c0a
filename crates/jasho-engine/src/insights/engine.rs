//! Financial insight computation
//!
//! Summarizes a transaction snapshot into savings/income/expense
//! headlines, per-category budget suggestions, and a next-month spend
//! prediction. Pure function of the snapshot and the injected clock
//! reading; the clock fixes both the 180-day spend window and the
//! result's computed-at stamp.

use chrono::{DateTime, Utc};

use crate::budget::suggest_budgets;
use crate::metrics::{rolling_monthly_average, sum_by_kinds, SPENDING_KINDS};
use crate::models::{format_amount, snapshot_currency, Transaction, TransactionKind, UserId};

use super::types::{FinancialInsightResult, InsightEntry, PredictedNeed, PERIOD_NEXT_MONTH};

/// Headroom applied on top of the trailing monthly spend average when
/// predicting next month's needs.
pub const SPEND_GROWTH_ALLOWANCE: f64 = 1.05;

/// Compute financial insights for one user from a transaction snapshot.
pub fn compute_financial_insights(
    user_id: &UserId,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> FinancialInsightResult {
    let income = sum_by_kinds(transactions, &[TransactionKind::Deposit]);
    let expenses = sum_by_kinds(transactions, SPENDING_KINDS);
    let savings = (income - expenses).max(0);

    let monthly_avg_expense = rolling_monthly_average(transactions, SPENDING_KINDS, now);
    let predicted = (monthly_avg_expense * SPEND_GROWTH_ALLOWANCE).round().max(0.0) as i64;

    let currency = snapshot_currency(transactions);
    let entries = vec![
        InsightEntry {
            title: "Savings".to_string(),
            detail: format!(
                "You have kept {} of your income after expenses",
                format_amount(savings, currency)
            ),
            metric: Some(savings),
        },
        InsightEntry {
            title: "Income".to_string(),
            detail: format!("Total income of {}", format_amount(income, currency)),
            metric: Some(income),
        },
        InsightEntry {
            title: "Expenses".to_string(),
            detail: format!("Total spending of {}", format_amount(expenses, currency)),
            metric: Some(expenses),
        },
    ];

    let budgets = suggest_budgets(transactions);

    tracing::debug!(
        user = %user_id,
        income,
        expenses,
        predicted,
        budgets = budgets.len(),
        "financial insights computed"
    );

    FinancialInsightResult {
        user_id: user_id.clone(),
        entries,
        budgets,
        predicted_needs: vec![PredictedNeed {
            period: PERIOD_NEXT_MONTH.to_string(),
            amount: predicted,
        }],
        computed_at: now,
    }
}
