//! CLI commands for the budget limit and initial balance

use clap::Subcommand;

use super::expense::parse_amount;
use crate::error::PocketGuardResult;
use crate::reports::{progress_bar, BalanceProjection, BudgetProgress};
use crate::services::{ExpenseService, SettingsService};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the spending budget (0 clears it)
    Set { amount: String },
    /// Show spending against the budget
    Show,
}

#[derive(Subcommand, Debug)]
pub enum BalanceCommands {
    /// Set the initial balance (0 clears it)
    Set { amount: String },
    /// Show the projected current balance
    Show,
}

pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> PocketGuardResult<()> {
    let mut settings = SettingsService::load(storage)?;

    match cmd {
        BudgetCommands::Set { amount } => {
            let limit = parse_amount(&amount)?;
            let saved = settings.set_budget_limit(limit)?;
            println!(
                "Budget limit set to {}",
                saved.budget_limit.format_with_symbol(&saved.currency_symbol)
            );
        }
        BudgetCommands::Show => {
            let symbol = settings.settings().currency_symbol.clone();
            let spent = total_spent(storage)?;
            let progress = BudgetProgress::compute(spent, settings.budget_state());

            if !progress.configured {
                println!("No budget set. Use 'pocketguard budget set <amount>'.");
                return Ok(());
            }
            println!(
                "Spent {} of {} ({:.1}%) [{}]",
                progress.total_spent.format_with_symbol(&symbol),
                progress.limit.format_with_symbol(&symbol),
                progress.percentage,
                progress.tier
            );
            println!("{}", progress_bar(progress.bar_percentage(), 40));
            if progress.is_over_budget() {
                println!("Over budget!");
            } else {
                println!("Remaining: {}", progress.remaining().format_with_symbol(&symbol));
            }
        }
    }

    Ok(())
}

pub fn handle_balance_command(storage: &Storage, cmd: BalanceCommands) -> PocketGuardResult<()> {
    let mut settings = SettingsService::load(storage)?;

    match cmd {
        BalanceCommands::Set { amount } => {
            let initial = parse_amount(&amount)?;
            let saved = settings.set_initial_balance(initial)?;
            println!(
                "Initial balance set to {}",
                saved.initial_balance.format_with_symbol(&saved.currency_symbol)
            );
        }
        BalanceCommands::Show => {
            let symbol = settings.settings().currency_symbol.clone();
            let spent = total_spent(storage)?;
            let projection = BalanceProjection::compute(settings.balance_state(), spent);

            if !projection.configured {
                println!("No initial balance set. Use 'pocketguard balance set <amount>'.");
                return Ok(());
            }
            println!(
                "Current balance: {} of {} ({:.1}% remaining) [{}]",
                projection.current.format_with_symbol(&symbol),
                projection.initial.format_with_symbol(&symbol),
                projection.remaining_percentage(),
                projection.tier
            );
            println!(
                "Spent: {} ({:.1}% of initial) [{}]",
                projection.total_spent.format_with_symbol(&symbol),
                projection.spending_percentage,
                projection.usage_tier
            );
            println!("{}", progress_bar(projection.bar_percentage(), 40));
            println!(
                "Suggested savings: {}",
                projection.suggested_savings.format_with_symbol(&symbol)
            );
        }
    }

    Ok(())
}

fn total_spent(storage: &Storage) -> PocketGuardResult<crate::models::Money> {
    Ok(ExpenseService::new(storage)
        .transactions()?
        .iter()
        .map(|t| t.amount)
        .sum())
}
