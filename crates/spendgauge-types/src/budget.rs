//! Budget limits and the gauge classification
//!
//! The gauge reduces a transaction history to one number (percent of the
//! monthly budget consumed) and one of three status buckets. Thresholds
//! are fixed: green strictly below 70, orange from 70 up to but not
//! including 90, red at 90 and above.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent at which the gauge turns orange
pub const ORANGE_THRESHOLD: u8 = 70;

/// Percent at which the gauge turns red
pub const RED_THRESHOLD: u8 = 90;

/// Default monthly budget when none is configured
pub const DEFAULT_MONTHLY_LIMIT: f64 = 50_000.0;

/// Budget limits the gauge is computed against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetLimits {
    /// Monthly spend budget
    pub monthly: f64,
}

impl BudgetLimits {
    /// Create limits with the given monthly budget
    pub fn new(monthly: f64) -> Self {
        Self { monthly }
    }

    /// The monthly limit with the division-by-zero floor applied
    ///
    /// A zero, negative or non-finite configured limit is treated as 1.
    /// This is a guard against dividing by zero, not a real budget of
    /// one unit.
    pub fn effective_monthly(&self) -> f64 {
        if self.monthly.is_finite() && self.monthly > 0.0 {
            self.monthly
        } else {
            1.0
        }
    }
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            monthly: DEFAULT_MONTHLY_LIMIT,
        }
    }
}

/// Status bucket classifying budget consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeStatus {
    /// Comfortably within budget (percent < 70)
    Green,
    /// Approaching the limit (70 <= percent < 90)
    Orange,
    /// At or over the limit (percent >= 90)
    Red,
}

impl GaugeStatus {
    /// Classify a clamped percent value into a status bucket
    pub fn from_percent(percent: u8) -> Self {
        if percent < ORANGE_THRESHOLD {
            Self::Green
        } else if percent < RED_THRESHOLD {
            Self::Orange
        } else {
            Self::Red
        }
    }
}

impl fmt::Display for GaugeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        };
        f.write_str(name)
    }
}

/// The computed budget gauge, produced fresh on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeResult {
    /// Percent of the monthly budget consumed, clamped to [0, 100]
    pub percent: u8,
    /// Status bucket derived from `percent`
    pub status: GaugeStatus,
    /// The effective monthly limit the percent was computed against
    pub monthly_limit: f64,
    /// Total spend across the buffered transactions (uncapped)
    pub spend: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(GaugeStatus::from_percent(0), GaugeStatus::Green);
        assert_eq!(GaugeStatus::from_percent(69), GaugeStatus::Green);
        assert_eq!(GaugeStatus::from_percent(70), GaugeStatus::Orange);
        assert_eq!(GaugeStatus::from_percent(89), GaugeStatus::Orange);
        assert_eq!(GaugeStatus::from_percent(90), GaugeStatus::Red);
        assert_eq!(GaugeStatus::from_percent(100), GaugeStatus::Red);
    }

    #[test]
    fn test_effective_monthly_floor() {
        assert_eq!(BudgetLimits::new(50_000.0).effective_monthly(), 50_000.0);
        assert_eq!(BudgetLimits::new(0.0).effective_monthly(), 1.0);
        assert_eq!(BudgetLimits::new(-100.0).effective_monthly(), 1.0);
        assert_eq!(BudgetLimits::new(f64::NAN).effective_monthly(), 1.0);
        assert_eq!(BudgetLimits::new(f64::INFINITY).effective_monthly(), 1.0);
    }

    #[test]
    fn test_gauge_result_wire_format() {
        let result = GaugeResult {
            percent: 70,
            status: GaugeStatus::Orange,
            monthly_limit: 50_000.0,
            spend: 35_000.0,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["percent"], 70);
        assert_eq!(value["status"], "orange");
        assert_eq!(value["monthly_limit"], 50_000.0);
        assert_eq!(value["spend"], 35_000.0);
    }
}
