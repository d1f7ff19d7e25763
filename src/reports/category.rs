//! Category breakdown
//!
//! Groups transactions by category label, sums them, and expresses each
//! category as a share of the total. Categories keep the order in which they
//! first appear in the input.
//!
//! A [`CategoryVisibility`] set hides categories from the chart without
//! removing them from the listing: [`CategoryBreakdown::visible`] produces a
//! second breakdown whose percentages are relative to the visible total only.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::models::{Money, Transaction};

/// Summed spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    pub transaction_count: usize,
    /// Share of the breakdown total, `0.0` when the total is zero
    pub percentage: f64,
}

/// Spending grouped by category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoryBreakdown {
    categories: Vec<CategoryTotal>,
    total: Money,
}

impl CategoryBreakdown {
    /// Aggregate a transaction list
    ///
    /// An empty list yields an empty breakdown with a zero total.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
                categories.push(CategoryTotal {
                    category: txn.category.clone(),
                    amount: Money::zero(),
                    transaction_count: 0,
                    percentage: 0.0,
                });
                categories.len() - 1
            });

            let entry = &mut categories[slot];
            entry.amount += txn.amount;
            entry.transaction_count += 1;
        }

        Self::from_totals(categories)
    }

    /// Recompute the total and every percentage from the given category sums
    fn from_totals(mut categories: Vec<CategoryTotal>) -> Self {
        let total: Money = categories.iter().map(|c| c.amount).sum();
        for entry in &mut categories {
            entry.percentage = entry.amount.percentage_of(total);
        }
        Self { categories, total }
    }

    /// Category totals in first-seen order
    pub fn categories(&self) -> &[CategoryTotal] {
        &self.categories
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.total
    }

    /// A breakdown with no data: no categories or a zero total
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.total.is_zero()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Look up a category by its exact label
    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// The breakdown restricted to categories that are not hidden
    ///
    /// Percentages are recomputed against the visible total.
    pub fn visible(&self, visibility: &CategoryVisibility) -> CategoryBreakdown {
        let shown = self
            .categories
            .iter()
            .filter(|c| !visibility.is_hidden(&c.category))
            .cloned()
            .collect();
        Self::from_totals(shown)
    }

    /// Largest categories first; ties keep first-seen order
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryTotal> {
        let mut ranked: Vec<&CategoryTotal> = self.categories.iter().collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.into_iter().take(limit).collect()
    }
}

/// The set of categories hidden from the chart view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryVisibility {
    hidden: BTreeSet<String>,
}

impl CategoryVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a set of hidden categories
    pub fn hiding<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hidden: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip a category between hidden and visible
    ///
    /// Returns `true` if the category is hidden afterwards.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.hidden.remove(category) {
            false
        } else {
            self.hidden.insert(category.to_string());
            true
        }
    }

    pub fn hide(&mut self, category: &str) {
        self.hidden.insert(category.to_string());
    }

    pub fn show(&mut self, category: &str) {
        self.hidden.remove(category);
    }

    pub fn is_hidden(&self, category: &str) -> bool {
        self.hidden.contains(category)
    }

    /// Hidden categories in sorted order
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}
