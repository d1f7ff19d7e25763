//! Budget and balance state
//!
//! The two user-configured scalars the dashboard reports combine with the
//! transaction list. A zero value in either means "not configured".

use serde::{Deserialize, Serialize};

use super::money::Money;

/// The user's spending ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    pub limit: Money,
}

impl BudgetState {
    /// Negative limits are treated as no budget
    pub fn new(limit: Money) -> Self {
        Self {
            limit: if limit.is_negative() { Money::zero() } else { limit },
        }
    }

    /// Whether a budget has been configured
    pub fn is_configured(&self) -> bool {
        self.limit.is_positive()
    }
}

/// The user's starting funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceState {
    pub initial: Money,
}

impl BalanceState {
    /// Negative balances are treated as no balance
    pub fn new(initial: Money) -> Self {
        Self {
            initial: if initial.is_negative() { Money::zero() } else { initial },
        }
    }

    pub fn is_configured(&self) -> bool {
        self.initial.is_positive()
    }
}
