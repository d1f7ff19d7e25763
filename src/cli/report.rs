//! CLI commands for the dashboard reports
//!
//! Reports read local expenses by default. `--feed` reads a transaction feed
//! file instead (the JSON array served by the PocketGuard API), still using
//! the locally configured budget and balance.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::dashboard::{DashboardStore, FeedSource, LocalSource, TransactionSource};
use crate::display::{format_category_table, format_monthly_table};
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::reports::{export_categories_csv, CategoryVisibility, DashboardSummary};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals, budget progress, balance and monthly spending
    Summary {
        /// Read transactions from a feed file
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spending by category
    Categories {
        /// Hide a category from the chart (repeatable)
        #[arg(long = "hide", value_name = "CATEGORY")]
        hide: Vec<String>,
        /// Only show the N largest categories
        #[arg(long)]
        top: Option<usize>,
        /// Export the breakdown to CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read transactions from a feed file
        #[arg(long)]
        feed: Option<PathBuf>,
    },

    /// Spending by month
    Monthly {
        /// Read transactions from a feed file
        #[arg(long)]
        feed: Option<PathBuf>,
        /// Sort months oldest first instead of first-seen order
        #[arg(long)]
        chronological: bool,
    },
}

pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PocketGuardResult<()> {
    match cmd {
        ReportCommands::Summary { feed, json } => with_store(storage, settings, feed, |store| {
            let summary = store.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(summary)?);
            } else {
                print!("{}", summary.format_terminal(&settings.currency_symbol));
            }
            Ok(())
        }),
        ReportCommands::Categories {
            hide,
            top,
            output,
            feed,
        } => with_store(storage, settings, feed, |store| {
            store.hide_categories(&hide);
            let breakdown = &store.summary().categories;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    PocketGuardError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                export_categories_csv(breakdown, store.visibility(), BufWriter::new(file))?;
                println!("Category report written to {}", path.display());
                return Ok(());
            }

            print!(
                "{}",
                format_category_table(breakdown, store.visibility(), &settings.currency_symbol)
            );
            if let Some(limit) = top {
                println!("\nTop {} categories:", limit);
                for (rank, entry) in breakdown.top_categories(limit).into_iter().enumerate() {
                    println!(
                        "  {}. {} {}",
                        rank + 1,
                        entry.category,
                        entry.amount.format_with_symbol(&settings.currency_symbol)
                    );
                }
            }
            Ok(())
        }),
        ReportCommands::Monthly {
            feed,
            chronological,
        } => with_store(storage, settings, feed, |store| {
            let monthly = &store.summary().monthly;
            let monthly = if chronological {
                monthly.chronological()
            } else {
                monthly.clone()
            };
            print!("{}", format_monthly_table(&monthly, &settings.currency_symbol));
            Ok(())
        }),
    }
}

/// Build a dashboard over local storage or a feed file and run `report` on it
fn with_store<F>(
    storage: &Storage,
    settings: &Settings,
    feed: Option<PathBuf>,
    report: F,
) -> PocketGuardResult<()>
where
    F: FnOnce(&mut dyn ReportStore) -> PocketGuardResult<()>,
{
    match feed {
        Some(path) => {
            let source = FeedSource::new(path, settings.budget_state(), settings.balance_state());
            report(&mut DashboardStore::new(source, None)?)
        }
        None => report(&mut DashboardStore::new(LocalSource::new(storage), None)?),
    }
}

/// The part of [`DashboardStore`] the report commands use, independent of source
trait ReportStore {
    fn summary(&self) -> &DashboardSummary;
    fn visibility(&self) -> &CategoryVisibility;
    fn hide_categories(&mut self, categories: &[String]);
}

impl<S: TransactionSource> ReportStore for DashboardStore<S> {
    fn summary(&self) -> &DashboardSummary {
        DashboardStore::summary(self)
    }

    fn visibility(&self) -> &CategoryVisibility {
        DashboardStore::visibility(self)
    }

    fn hide_categories(&mut self, categories: &[String]) {
        DashboardStore::hide_categories(self, categories)
    }
}
