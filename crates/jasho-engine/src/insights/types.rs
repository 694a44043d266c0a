//! Core types for financial insights

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::BudgetSuggestion;
use crate::models::UserId;

/// Period label for the single near-term spend prediction.
pub const PERIOD_NEXT_MONTH: &str = "next_month";

/// One headline metric with a human-readable explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightEntry {
    /// Short title (e.g. "Savings")
    pub title: String,
    /// One-line detail embedding the formatted amount
    pub detail: String,
    /// Raw metric in minor units, for callers that chart it
    pub metric: Option<i64>,
}

/// Predicted spend for an upcoming period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedNeed {
    pub period: String,
    /// Minor-unit prediction, never negative
    pub amount: i64,
}

/// The result of one insight computation.
///
/// Ephemeral: recomputed on every call, never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInsightResult {
    pub user_id: UserId,
    /// Exactly three entries: savings, income, expenses
    pub entries: Vec<InsightEntry>,
    /// Up to five suggestions, largest category first
    pub budgets: Vec<BudgetSuggestion>,
    /// Exactly one prediction, for [`PERIOD_NEXT_MONTH`]
    pub predicted_needs: Vec<PredictedNeed>,
    pub computed_at: DateTime<Utc>,
}
