//! Jasho Engine Library
//!
//! Deterministic credit scoring and financial insights for the Jasho
//! gig-worker platform:
//! - Credit score computation with explainable factor contributions
//! - Financial insight derivation (savings, budgets, spend prediction)
//! - Deposit stability and payment punctuality estimation
//! - Aggregation primitives over ledger transaction snapshots
//!
//! Both entry points - [`score::compute_credit_score`] and
//! [`insights::compute_financial_insights`] - are pure functions of a
//! read-only transaction snapshot plus an injected clock reading, so
//! they are trivially parallelizable and deterministic under test. The
//! ledger, loan book, and result persistence all live in collaborating
//! services; this crate neither fetches nor stores anything.

pub mod budget;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod models;
pub mod punctuality;
pub mod score;
pub mod stability;

#[cfg(test)]
pub(crate) mod test_utils;

pub use budget::{suggest_budgets, BudgetSuggestion};
pub use error::{Error, Result};
pub use insights::{compute_financial_insights, FinancialInsightResult, InsightEntry, PredictedNeed};
pub use metrics::{rolling_monthly_average, sum_by_kinds};
pub use models::{
    format_amount, snapshot_currency, snapshot_from_json, validate_snapshot, MetadataValue,
    Transaction, TransactionKind, UserId,
};
pub use punctuality::payment_punctuality;
pub use score::{
    compute_credit_score, CreditRating, CreditScoreResult, FactorContribution, FactorKey,
    Priority, Recommendation, RiskIndicator, RiskKind, Severity,
};
pub use stability::deposit_stability;
