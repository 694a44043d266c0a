//! Core types for credit scoring

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::UserId;

/// The five fixed signals combined into a credit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    /// Total deposits relative to the income scale
    Income,
    /// How much of incoming money is spent
    Utilization,
    /// Fraction of payments settled on time
    PaymentHistory,
    /// Month-to-month consistency of deposits
    Stability,
    /// Outstanding loan balance relative to the debt scale
    Debt,
}

impl FactorKey {
    /// All factors, in the fixed order they appear on a score result.
    pub const ALL: [FactorKey; 5] = [
        FactorKey::Income,
        FactorKey::Utilization,
        FactorKey::PaymentHistory,
        FactorKey::Stability,
        FactorKey::Debt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKey::Income => "income",
            FactorKey::Utilization => "utilization",
            FactorKey::PaymentHistory => "payment_history",
            FactorKey::Stability => "stability",
            FactorKey::Debt => "debt",
        }
    }

    /// Fixed weight of this factor. The five weights sum to exactly 1.0,
    /// which keeps the weighted total in [0, 1] and the final score in
    /// bounds without clamping.
    pub fn weight(&self) -> f64 {
        match self {
            FactorKey::Income => 0.25,
            FactorKey::Utilization => 0.30,
            FactorKey::PaymentHistory => 0.30,
            FactorKey::Stability => 0.10,
            FactorKey::Debt => 0.05,
        }
    }
}

impl fmt::Display for FactorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FactorKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(FactorKey::Income),
            "utilization" => Ok(FactorKey::Utilization),
            "payment_history" => Ok(FactorKey::PaymentHistory),
            "stability" => Ok(FactorKey::Stability),
            "debt" => Ok(FactorKey::Debt),
            _ => Err(format!("Unknown factor key: {}", s)),
        }
    }
}

/// One factor's contribution to a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub key: FactorKey,
    /// Fraction of the total score this factor carries, in (0, 1]
    pub weight: f64,
    /// Normalized factor value, clamped to [0, 1] before weighting
    pub value: f64,
    /// Optional human-readable basis for the value
    pub note: Option<String>,
}

impl FactorContribution {
    /// Build a contribution for `key` at its fixed weight, clamping the
    /// raw value into [0, 1].
    pub fn new(key: FactorKey, raw_value: f64) -> Self {
        Self {
            key,
            weight: key.weight(),
            value: raw_value.clamp(0.0, 1.0),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// This factor's share of the weighted total.
    pub fn weighted_value(&self) -> f64 {
        self.weight * self.value
    }
}

/// Rating band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl CreditRating {
    /// Band for a score in the [300, 850] range.
    pub fn from_score(score: u16) -> Self {
        match score {
            750..=850 => CreditRating::Excellent,
            700..=749 => CreditRating::Good,
            650..=699 => CreditRating::Fair,
            600..=649 => CreditRating::Poor,
            _ => CreditRating::VeryPoor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditRating::Excellent => "excellent",
            CreditRating::Good => "good",
            CreditRating::Fair => "fair",
            CreditRating::Poor => "poor",
            CreditRating::VeryPoor => "very_poor",
        }
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CreditRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(CreditRating::Excellent),
            "good" => Ok(CreditRating::Good),
            "fair" => Ok(CreditRating::Fair),
            "poor" => Ok(CreditRating::Poor),
            "very_poor" => Ok(CreditRating::VeryPoor),
            _ => Err(format!("Unknown credit rating: {}", s)),
        }
    }
}

/// How urgent a risk indicator is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
    /// Requires immediate attention
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
            Severity::Alert => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Patterns in the computed inputs that put a score at risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// Irregular month-to-month deposit totals
    IncomeInstability,
    /// Spending consumes most of incoming deposits
    HighUtilization,
    /// Payments frequently settled after their due date
    LatePayments,
    /// Outstanding loans near the debt scale ceiling
    HighDebtLoad,
}

impl RiskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskKind::IncomeInstability => "income_instability",
            RiskKind::HighUtilization => "high_utilization",
            RiskKind::LatePayments => "late_payments",
            RiskKind::HighDebtLoad => "high_debt_load",
        }
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A risk pattern detected while scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIndicator {
    pub kind: RiskKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Priority of an improvement recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A concrete suggestion for improving an underperforming factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Factor this recommendation targets
    pub category: FactorKey,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

/// The result of one scoring computation.
///
/// Ephemeral: recomputed on every call, never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreResult {
    pub user_id: UserId,
    /// Bounded score in [300, 850]
    pub score: u16,
    pub rating: CreditRating,
    /// Exactly five contributions, in [`FactorKey::ALL`] order
    pub factors: Vec<FactorContribution>,
    pub risk_indicators: Vec<RiskIndicator>,
    pub recommendations: Vec<Recommendation>,
    pub computed_at: DateTime<Utc>,
}
