//! Credit scoring
//!
//! Turns a user's transaction snapshot into a bounded, explainable
//! credit score:
//!
//! - **Five weighted factors** - income, utilization, payment history,
//!   stability, debt - each normalized to [0, 1]
//! - **Fixed [300, 850] range** - `round(300 + 550 x weighted total)`
//! - **Rating bands, risk indicators, and recommendations** alongside
//!   the raw number, so callers can explain the score
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jasho_engine::score::compute_credit_score;
//!
//! let result = compute_credit_score(&user_id, &transactions, outstanding, Utc::now());
//! println!("{} ({})", result.score, result.rating);
//! ```

pub mod engine;
pub mod types;

pub use engine::{compute_credit_score, DEBT_SCALE, INCOME_SCALE, SCORE_FLOOR, SCORE_SPAN};
pub use types::{
    CreditRating, CreditScoreResult, FactorContribution, FactorKey, Priority, Recommendation,
    RiskIndicator, RiskKind, Severity,
};
