//! Credit score computation
//!
//! A pure function of the transaction snapshot, the outstanding-debt
//! figure, and an injected clock reading. Five weighted factors are
//! normalized into [0, 1], combined, and mapped onto the [300, 850]
//! score range.

use chrono::{DateTime, Utc};

use crate::metrics::{sum_by_kinds, SPENDING_KINDS};
use crate::models::{format_amount, snapshot_currency, Transaction, TransactionKind, UserId};
use crate::punctuality::payment_punctuality;
use crate::stability::deposit_stability;

use super::types::{
    CreditRating, CreditScoreResult, FactorContribution, FactorKey, Priority, Recommendation,
    RiskIndicator, RiskKind, Severity,
};

/// Lower bound of the score range.
pub const SCORE_FLOOR: f64 = 300.0;
/// Width of the score range; floor + span = 850.
pub const SCORE_SPAN: f64 = 550.0;

/// Minor-unit total at which the income factor saturates.
pub const INCOME_SCALE: i64 = 1_000_000;
/// Minor-unit outstanding debt at which the debt factor bottoms out.
pub const DEBT_SCALE: i64 = 1_000_000;

/// Stability below this flags irregular income.
const STABILITY_RISK_THRESHOLD: f64 = 0.7;
/// Spend-to-income ratio above this flags overspending.
const UTILIZATION_RISK_THRESHOLD: f64 = 0.8;
/// Punctuality below this flags a late-payment habit.
const PUNCTUALITY_RISK_THRESHOLD: f64 = 0.8;
/// Share of [`DEBT_SCALE`] above which outstanding loans are flagged.
const DEBT_RISK_THRESHOLD: f64 = 0.8;

/// Compute a credit score for one user from a transaction snapshot.
///
/// `other_loans_outstanding` is the minor-unit figure supplied by the
/// loan collaborator (pass 0 when unknown). `now` is only stamped onto
/// the result; the score itself does not depend on the clock.
///
/// Total over well-typed input: an empty snapshot scores from the
/// documented factor defaults, and division guards keep every ratio
/// finite.
pub fn compute_credit_score(
    user_id: &UserId,
    transactions: &[Transaction],
    other_loans_outstanding: i64,
    now: DateTime<Utc>,
) -> CreditScoreResult {
    let income = sum_by_kinds(transactions, &[TransactionKind::Deposit]);
    let expenses = sum_by_kinds(transactions, SPENDING_KINDS);
    let utilization = if expenses > 0 {
        expenses as f64 / income.max(1) as f64
    } else {
        0.0
    };
    let punctuality = payment_punctuality(transactions);
    let stability = deposit_stability(transactions);
    let debt_ratio = other_loans_outstanding as f64 / DEBT_SCALE as f64;
    let currency = snapshot_currency(transactions);

    let factors = vec![
        FactorContribution::new(FactorKey::Income, income as f64 / INCOME_SCALE as f64).with_note(
            format!("{} in total deposits", format_amount(income, currency)),
        ),
        FactorContribution::new(FactorKey::Utilization, 1.0 - utilization).with_note(format!(
            "spending is {:.0}% of income",
            utilization * 100.0
        )),
        FactorContribution::new(FactorKey::PaymentHistory, punctuality).with_note(format!(
            "{:.0}% of payments settled on time",
            punctuality * 100.0
        )),
        FactorContribution::new(FactorKey::Stability, stability),
        debt_factor(other_loans_outstanding, debt_ratio, currency),
    ];

    let weighted_total: f64 = factors
        .iter()
        .map(FactorContribution::weighted_value)
        .sum();
    let score = (SCORE_FLOOR + SCORE_SPAN * weighted_total).round() as u16;
    let rating = CreditRating::from_score(score);

    let risk_indicators = identify_risks(stability, utilization, punctuality, debt_ratio);
    let recommendations = build_recommendations(&factors);

    tracing::debug!(
        user = %user_id,
        score,
        rating = rating.as_str(),
        risks = risk_indicators.len(),
        "credit score computed"
    );

    CreditScoreResult {
        user_id: user_id.clone(),
        score,
        rating,
        factors,
        risk_indicators,
        recommendations,
        computed_at: now,
    }
}

fn debt_factor(outstanding: i64, debt_ratio: f64, currency: &str) -> FactorContribution {
    let factor = FactorContribution::new(FactorKey::Debt, 1.0 - debt_ratio);
    if outstanding > 0 {
        factor.with_note(format!(
            "{} in outstanding loans",
            format_amount(outstanding, currency)
        ))
    } else {
        factor
    }
}

/// Deterministic risk checks over the computed factor inputs. Order is
/// fixed so results are reproducible.
fn identify_risks(
    stability: f64,
    utilization: f64,
    punctuality: f64,
    debt_ratio: f64,
) -> Vec<RiskIndicator> {
    let mut risks = Vec::new();

    if stability < STABILITY_RISK_THRESHOLD {
        risks.push(RiskIndicator {
            kind: RiskKind::IncomeInstability,
            severity: Severity::Attention,
            description: "Irregular month-to-month deposit totals".to_string(),
            recommendation: "Consider diversifying income sources".to_string(),
        });
    }

    if utilization > UTILIZATION_RISK_THRESHOLD {
        risks.push(RiskIndicator {
            kind: RiskKind::HighUtilization,
            severity: Severity::Warning,
            description: "Spending consumes most of incoming deposits".to_string(),
            recommendation: "Create a budget and track expenses".to_string(),
        });
    }

    if punctuality < PUNCTUALITY_RISK_THRESHOLD {
        risks.push(RiskIndicator {
            kind: RiskKind::LatePayments,
            severity: Severity::Warning,
            description: "A large share of payments settle after their due date".to_string(),
            recommendation: "Set up reminders before each due date".to_string(),
        });
    }

    if debt_ratio > DEBT_RISK_THRESHOLD {
        risks.push(RiskIndicator {
            kind: RiskKind::HighDebtLoad,
            severity: Severity::Attention,
            description: "Outstanding loans are close to the assessable ceiling".to_string(),
            recommendation: "Pay down existing loans before taking new ones".to_string(),
        });
    }

    risks
}

/// Improvement suggestions for underperforming factors.
fn build_recommendations(factors: &[FactorContribution]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if factor_value(factors, FactorKey::PaymentHistory) < 0.8 {
        recommendations.push(Recommendation {
            category: FactorKey::PaymentHistory,
            priority: Priority::High,
            title: "Improve Payment History".to_string(),
            description: "Settle loan and bill payments on or before their due dates".to_string(),
            action_items: vec![
                "Set up automatic payments".to_string(),
                "Create payment reminders".to_string(),
                "Pay at least the minimum amount due".to_string(),
            ],
        });
    }

    if factor_value(factors, FactorKey::Utilization) < 0.7 {
        recommendations.push(Recommendation {
            category: FactorKey::Utilization,
            priority: Priority::Medium,
            title: "Reduce Credit Utilization".to_string(),
            description: "Keep spending well below incoming deposits".to_string(),
            action_items: vec![
                "Pay down existing balances".to_string(),
                "Review recurring expenses".to_string(),
                "Avoid taking on new debt".to_string(),
            ],
        });
    }

    if factor_value(factors, FactorKey::Stability) < 0.7 {
        recommendations.push(Recommendation {
            category: FactorKey::Stability,
            priority: Priority::Medium,
            title: "Stabilize Income".to_string(),
            description: "Build a steadier month-to-month deposit pattern".to_string(),
            action_items: vec![
                "Diversify income sources".to_string(),
                "Build emergency savings".to_string(),
                "Prefer recurring gigs over one-off work".to_string(),
            ],
        });
    }

    recommendations
}

fn factor_value(factors: &[FactorContribution], key: FactorKey) -> f64 {
    factors
        .iter()
        .find(|f| f.key == key)
        .map(|f| f.value)
        .unwrap_or(0.0)
}
