//! Dashboard summary
//!
//! Combines the category breakdown, monthly totals, budget progress and
//! balance projection for one transaction snapshot. Everything is recomputed
//! from scratch on each call.

use serde::Serialize;
use std::io::Write;

use super::balance::BalanceProjection;
use super::budget::BudgetProgress;
use super::category::{CategoryBreakdown, CategoryVisibility};
use super::monthly::MonthlySpending;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::models::{BalanceState, BudgetState, Money, Transaction};

/// Every derived dashboard metric for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub transaction_count: usize,
    pub total_spent: Money,
    pub categories: CategoryBreakdown,
    pub monthly: MonthlySpending,
    pub budget: BudgetProgress,
    pub balance: BalanceProjection,
}

impl DashboardSummary {
    pub fn compute(
        transactions: &[Transaction],
        budget: BudgetState,
        balance: BalanceState,
    ) -> Self {
        let categories = CategoryBreakdown::from_transactions(transactions);
        let total_spent = categories.total();

        Self {
            transaction_count: transactions.len(),
            total_spent,
            monthly: MonthlySpending::from_transactions(transactions),
            budget: BudgetProgress::compute(total_spent, budget),
            balance: BalanceProjection::compute(balance, total_spent),
            categories,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("PocketGuard Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.balance.configured {
            output.push_str(&format!(
                "Current Balance:   {:>14}  ({:.1}% of {}) [{}]\n",
                money(self.balance.current),
                self.balance.remaining_percentage(),
                money(self.balance.initial),
                self.balance.tier
            ));
        } else {
            output.push_str("Current Balance:   not set (use 'pocketguard balance set')\n");
        }

        output.push_str(&format!(
            "Total Spending:    {:>14}  ({} transactions)",
            money(self.total_spent),
            self.transaction_count
        ));
        if self.balance.configured {
            output.push_str(&format!(
                " {:.1}% of balance [{}]",
                self.balance.spending_percentage, self.balance.usage_tier
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "Suggested Savings: {:>14}  (20% of current balance)\n",
            money(self.balance.suggested_savings)
        ));

        if self.budget.configured {
            output.push_str(&format!(
                "Budget Progress:   {} / {}  {:.1}% [{}]\n",
                money(self.budget.total_spent),
                money(self.budget.limit),
                self.budget.percentage,
                self.budget.tier
            ));
            output.push_str(&format!("  {}\n", progress_bar(self.budget.bar_percentage(), 40)));
        }

        output.push('\n');
        if self.categories.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<30} {:>14} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in self.categories.categories() {
            output.push_str(&format!(
                "{:<30} {:>14} {:>7.1}%\n",
                entry.category,
                money(entry.amount),
                entry.percentage
            ));
        }

        output.push_str(&format!("\n{:<30} {:>14}\n", "Month", "Amount"));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for month in self.monthly.months() {
            output.push_str(&format!("{:<30} {:>14}\n", month.label, money(month.amount)));
        }

        output
    }
}

/// Render a fixed-width text progress bar
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

#[derive(Serialize)]
struct CategoryCsvRow<'a> {
    category: &'a str,
    amount: String,
    transactions: usize,
    percentage: String,
    hidden: bool,
    visible_percentage: String,
}

/// Export a category breakdown to CSV
///
/// Every category is written; hidden ones are flagged and carry an empty
/// visible percentage.
pub fn export_categories_csv<W: Write>(
    breakdown: &CategoryBreakdown,
    visibility: &CategoryVisibility,
    writer: W,
) -> PocketGuardResult<()> {
    let visible = breakdown.visible(visibility);
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in breakdown.categories() {
        let hidden = visibility.is_hidden(&entry.category);
        let visible_percentage = visible
            .get(&entry.category)
            .map(|v| format!("{:.2}", v.percentage))
            .unwrap_or_default();

        csv_writer
            .serialize(CategoryCsvRow {
                category: &entry.category,
                amount: entry.amount.to_string(),
                transactions: entry.transaction_count,
                percentage: format!("{:.2}", entry.percentage),
                hidden,
                visible_percentage,
            })
            .map_err(|e| PocketGuardError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketGuardError::Export(e.to_string()))?;
    Ok(())
}
