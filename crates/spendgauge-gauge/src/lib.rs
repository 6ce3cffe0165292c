//! Spendgauge Gauge - Budget consumption computation
//!
//! A single pure function reduces a transaction history and a monthly
//! limit to a [`GaugeResult`]: total spend, a percent clamped to
//! [0, 100], and a green/orange/red status bucket.
//!
//! The function is total over degenerate inputs. Amounts have already
//! been coerced to finite numbers by the intake normalizer, the monthly
//! limit is floored at 1 to rule out division by zero, and the percent
//! clamp absorbs anything that remains.
//!
//! # Example
//!
//! ```
//! use spendgauge_gauge::compute_gauge;
//! use spendgauge_types::{BudgetLimits, GaugeStatus};
//!
//! let gauge = compute_gauge(&[], &BudgetLimits::new(50_000.0));
//! assert_eq!(gauge.percent, 0);
//! assert_eq!(gauge.status, GaugeStatus::Green);
//! ```

use spendgauge_types::{BudgetLimits, GaugeResult, GaugeStatus, Transaction};

/// Compute the budget gauge for a transaction history
///
/// Spend is the plain sum of amounts: negative amounts (refunds) reduce
/// spend and the total is not capped at the limit. Percent is
/// `round(100 * spend / monthly)` clamped to [0, 100], and status is
/// derived from the clamped percent. Stateless and side-effect free.
pub fn compute_gauge(transactions: &[Transaction], limits: &BudgetLimits) -> GaugeResult {
    let monthly = limits.effective_monthly();
    let spend: f64 = transactions.iter().map(|t| t.amount).sum();

    let ratio = 100.0 * spend / monthly;
    let percent = if ratio.is_nan() {
        0
    } else {
        ratio.round().clamp(0.0, 100.0) as u8
    };

    GaugeResult {
        percent,
        status: GaugeStatus::from_percent(percent),
        monthly_limit: monthly,
        spend,
    }
}
