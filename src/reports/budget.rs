//! Budget progress
//!
//! Compares total spending with the configured budget limit.

use serde::Serialize;

use super::severity::SeverityTier;
use crate::models::{BudgetState, Money};

/// Percentage of budget at which progress turns to a warning
pub const BUDGET_WARNING_PERCENT: f64 = 70.0;

/// Percentage of budget at which progress turns critical
pub const BUDGET_CRITICAL_PERCENT: f64 = 90.0;

/// `total_spent / limit * 100`, or `0.0` when no budget is configured
pub fn percentage_of_budget(total_spent: Money, budget: BudgetState) -> f64 {
    if !budget.is_configured() {
        return 0.0;
    }
    total_spent.percentage_of(budget.limit)
}

/// Bucket a percentage-of-budget into a severity tier
pub fn budget_tier(percentage: f64) -> SeverityTier {
    if percentage >= BUDGET_CRITICAL_PERCENT {
        SeverityTier::Critical
    } else if percentage >= BUDGET_WARNING_PERCENT {
        SeverityTier::Warning
    } else {
        SeverityTier::Nominal
    }
}

/// Spending measured against the budget limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub total_spent: Money,
    pub limit: Money,
    /// Whether a limit is configured; when false the percentage is zero
    pub configured: bool,
    /// May exceed 100 when overspent
    pub percentage: f64,
    pub tier: SeverityTier,
}

impl BudgetProgress {
    pub fn compute(total_spent: Money, budget: BudgetState) -> Self {
        let percentage = percentage_of_budget(total_spent, budget);
        Self {
            total_spent,
            limit: budget.limit,
            configured: budget.is_configured(),
            percentage,
            tier: budget_tier(percentage),
        }
    }

    /// Percentage clamped for drawing a progress bar
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }

    /// Budget left before the limit, zero once exceeded
    pub fn remaining(&self) -> Money {
        self.limit.saturating_sub(self.total_spent)
    }

    pub fn is_over_budget(&self) -> bool {
        self.configured && self.total_spent > self.limit
    }
}
