//! Balance projection
//!
//! Projects the current balance from the configured initial balance and the
//! total spent. The balance never goes below zero, and an initial balance of
//! zero yields a zero ratio instead of a division.

use serde::Serialize;

use super::severity::SeverityTier;
use crate::models::{BalanceState, Money};

/// Remaining-balance ratio below which the balance is critical
pub const BALANCE_CRITICAL_RATIO: f64 = 0.3;

/// Remaining-balance ratio below which the balance is a warning
pub const BALANCE_WARNING_RATIO: f64 = 0.6;

/// Share of the initial balance spent above which usage is critical
pub const USAGE_CRITICAL_PERCENT: f64 = 70.0;

/// Share of the initial balance spent above which usage is a warning
pub const USAGE_WARNING_PERCENT: f64 = 40.0;

/// Share of the current balance suggested for savings
pub const SUGGESTED_SAVINGS_PERCENT: i64 = 20;

/// `max(0, initial - total_spent)`
pub fn current_balance(balance: BalanceState, total_spent: Money) -> Money {
    balance.initial.saturating_sub(total_spent)
}

/// `current / initial`, or `0.0` when no initial balance is configured
pub fn balance_ratio(current: Money, balance: BalanceState) -> f64 {
    if !balance.is_configured() {
        return 0.0;
    }
    current.ratio_of(balance.initial)
}

/// Bucket a remaining-balance ratio into a severity tier
pub fn balance_tier(ratio: f64) -> SeverityTier {
    if ratio < BALANCE_CRITICAL_RATIO {
        SeverityTier::Critical
    } else if ratio < BALANCE_WARNING_RATIO {
        SeverityTier::Warning
    } else {
        SeverityTier::Nominal
    }
}

/// Bucket the share of the initial balance already spent
pub fn usage_tier(spending_percentage: f64) -> SeverityTier {
    if spending_percentage > USAGE_CRITICAL_PERCENT {
        SeverityTier::Critical
    } else if spending_percentage > USAGE_WARNING_PERCENT {
        SeverityTier::Warning
    } else {
        SeverityTier::Nominal
    }
}

/// Current balance and spending health derived from the initial balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceProjection {
    pub initial: Money,
    pub total_spent: Money,
    pub current: Money,
    pub configured: bool,
    /// `current / initial`, in `0.0..=1.0`
    pub ratio: f64,
    /// `total_spent / initial * 100`; may exceed 100
    pub spending_percentage: f64,
    /// Tier from the remaining ratio; nominal when no balance is configured
    pub tier: SeverityTier,
    /// Tier from the spending percentage
    pub usage_tier: SeverityTier,
    pub suggested_savings: Money,
}

impl BalanceProjection {
    pub fn compute(balance: BalanceState, total_spent: Money) -> Self {
        let configured = balance.is_configured();
        let current = current_balance(balance, total_spent);
        let ratio = balance_ratio(current, balance);
        let spending_percentage = if configured {
            total_spent.percentage_of(balance.initial)
        } else {
            0.0
        };

        Self {
            initial: balance.initial,
            total_spent,
            current,
            configured,
            ratio,
            spending_percentage,
            tier: if configured {
                balance_tier(ratio)
            } else {
                SeverityTier::Nominal
            },
            usage_tier: usage_tier(spending_percentage),
            suggested_savings: current.percent(SUGGESTED_SAVINGS_PERCENT),
        }
    }

    /// Remaining ratio as a percentage, for display
    pub fn remaining_percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    /// Spending percentage clamped for drawing a progress bar
    pub fn bar_percentage(&self) -> f64 {
        self.spending_percentage.min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(cents: i64) -> BalanceState {
        BalanceState::new(Money::from_cents(cents))
    }

    #[test]
    fn test_overspend_clamps_to_zero() {
        let projection = BalanceProjection::compute(balance(100_000), Money::from_cents(120_000));
        assert_eq!(projection.current, Money::zero());
        assert_eq!(projection.ratio, 0.0);
        assert_eq!(projection.tier, SeverityTier::Critical);
        assert!((projection.spending_percentage - 120.0).abs() < 1e-9);
        assert_eq!(projection.bar_percentage(), 100.0);
        assert_eq!(projection.suggested_savings, Money::zero());
    }

    #[test]
    fn test_zero_initial_balance_is_degenerate() {
        let projection = BalanceProjection::compute(balance(0), Money::from_cents(5_000));
        assert!(!projection.configured);
        assert_eq!(projection.current, Money::zero());
        assert_eq!(projection.ratio, 0.0);
        assert_eq!(projection.spending_percentage, 0.0);
        assert_eq!(projection.tier, SeverityTier::Nominal);
        assert_eq!(projection.usage_tier, SeverityTier::Nominal);
    }

    #[test]
    fn test_ratio_tiers() {
        assert_eq!(balance_tier(0.0), SeverityTier::Critical);
        assert_eq!(balance_tier(0.299), SeverityTier::Critical);
        assert_eq!(balance_tier(0.3), SeverityTier::Warning);
        assert_eq!(balance_tier(0.59), SeverityTier::Warning);
        assert_eq!(balance_tier(0.6), SeverityTier::Nominal);
        assert_eq!(balance_tier(1.0), SeverityTier::Nominal);
    }

    #[test]
    fn test_usage_tiers() {
        assert_eq!(usage_tier(40.0), SeverityTier::Nominal);
        assert_eq!(usage_tier(40.1), SeverityTier::Warning);
        assert_eq!(usage_tier(70.0), SeverityTier::Warning);
        assert_eq!(usage_tier(70.1), SeverityTier::Critical);
    }

    #[test]
    fn test_partial_spend() {
        let projection = BalanceProjection::compute(balance(100_000), Money::from_cents(25_000));
        assert_eq!(projection.current, Money::from_cents(75_000));
        assert_eq!(projection.ratio, 0.75);
        assert_eq!(projection.remaining_percentage(), 75.0);
        assert_eq!(projection.spending_percentage, 25.0);
        assert_eq!(projection.tier, SeverityTier::Nominal);
        assert_eq!(projection.usage_tier, SeverityTier::Nominal);
        assert_eq!(projection.suggested_savings, Money::from_cents(15_000));
    }

    #[test]
    fn test_current_balance_never_negative() {
        for spent in [0, 1, 99_999, 100_000, 100_001, 10_000_000] {
            let current = current_balance(balance(100_000), Money::from_cents(spent));
            assert!(!current.is_negative());
        }
    }
}
