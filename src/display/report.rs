//! Category and monthly report tables

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::reports::{progress_bar, CategoryBreakdown, CategoryVisibility, MonthlySpending};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Category table for the chart view
///
/// Percentages are against the visible total; hidden categories are listed
/// underneath.
pub fn format_category_table(
    breakdown: &CategoryBreakdown,
    visibility: &CategoryVisibility,
    symbol: &str,
) -> String {
    if breakdown.is_empty() {
        return "No spending to report.\n".to_string();
    }

    let visible = breakdown.visible(visibility);
    let rows = visible.categories().iter().map(|c| CategoryRow {
        category: c.category.clone(),
        amount: c.amount.format_with_symbol(symbol),
        count: c.transaction_count,
        percentage: format!("{:.1}%", c.percentage),
        bar: progress_bar(c.percentage, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));

    let mut output = format!(
        "{}\nTotal: {}\n",
        table,
        visible.total().format_with_symbol(symbol)
    );

    // hidden labels with no spending are not listed
    let hidden: Vec<&str> = visibility
        .hidden()
        .filter(|category| breakdown.get(category).is_some())
        .collect();
    if !hidden.is_empty() {
        output.push_str(&format!("Hidden: {}\n", hidden.join(", ")));
    }
    output
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
}

pub fn format_monthly_table(monthly: &MonthlySpending, symbol: &str) -> String {
    if monthly.is_empty() {
        return "No spending to report.\n".to_string();
    }

    let rows = monthly.months().iter().map(|m| MonthRow {
        label: m.label.clone(),
        amount: m.amount.format_with_symbol(symbol),
        count: m.transaction_count,
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    format!(
        "{}\nTotal: {}\n",
        table,
        monthly.total().format_with_symbol(symbol)
    )
}
