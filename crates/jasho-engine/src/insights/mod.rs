//! Financial insights
//!
//! Derives what the app shows on the money overview screen from a raw
//! transaction snapshot:
//!
//! - **Headline entries** - savings, income, and expense totals with
//!   formatted detail strings
//! - **Budget suggestions** - per-category caps at 90% of historical
//!   spend
//! - **Predicted needs** - next month's spend from the trailing 180-day
//!   average plus a 5% allowance
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jasho_engine::insights::compute_financial_insights;
//!
//! let result = compute_financial_insights(&user_id, &transactions, Utc::now());
//! for entry in &result.entries {
//!     println!("{}: {}", entry.title, entry.detail);
//! }
//! ```

pub mod engine;
pub mod types;

pub use engine::{compute_financial_insights, SPEND_GROWTH_ALLOWANCE};
pub use types::{FinancialInsightResult, InsightEntry, PredictedNeed, PERIOD_NEXT_MONTH};
