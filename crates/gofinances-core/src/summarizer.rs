use gofinances_domain::{Catalog, TransactionRecord};
use serde::Serialize;
use tracing::debug;

use crate::{
    format::{fixed_decimal, CurrencyFormatter},
    period::Period,
};

/// One slice of the monthly spending breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub color: String,
    pub total: f64,
    pub total_formatted: String,
    pub percent: f64,
    /// `percent` rendered with two decimals and a trailing `%`.
    pub percent_label: String,
}

pub struct CategorySummarizer;

impl CategorySummarizer {
    /// Outflow records dated inside `period` with a parseable amount.
    pub fn period_expenses(
        records: &[TransactionRecord],
        period: Period,
    ) -> impl Iterator<Item = (&TransactionRecord, f64)> {
        records.iter().filter_map(move |record| {
            if !record.is_outflow() || !period.contains(record.date) {
                return None;
            }
            record.amount_value().map(|amount| (record, amount))
        })
    }

    /// Sum of all outflow in `period`, regardless of category.
    pub fn period_total(records: &[TransactionRecord], period: Period) -> f64 {
        Self::period_expenses(records, period)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Per-category outflow for `period`, in catalog order, omitting empty categories.
    ///
    /// Returns an empty list when the period has no outflow at all.
    pub fn summarize(
        records: &[TransactionRecord],
        period: Period,
        catalog: &Catalog,
        formatter: &dyn CurrencyFormatter,
    ) -> Vec<CategorySummary> {
        let expenses: Vec<(&TransactionRecord, f64)> =
            Self::period_expenses(records, period).collect();
        let period_total: f64 = expenses.iter().map(|(_, amount)| amount).sum();
        if period_total <= 0.0 {
            debug!(%period, "no outflow in period; summary is empty");
            return Vec::new();
        }

        let summaries: Vec<CategorySummary> = catalog
            .iter()
            .filter_map(|category| {
                let category_sum: f64 = expenses
                    .iter()
                    .filter(|(record, _)| record.category == category.key)
                    .map(|(_, amount)| amount)
                    .sum();
                if category_sum <= 0.0 {
                    return None;
                }
                let percent = category_sum / period_total * 100.0;
                Some(CategorySummary {
                    key: category.key.clone(),
                    name: category.name.clone(),
                    color: category.color.clone(),
                    total: category_sum,
                    total_formatted: formatter.format_amount(category_sum),
                    percent,
                    percent_label: format!("{}%", fixed_decimal(percent, 2)),
                })
            })
            .collect();
        debug!(
            %period,
            expenses = expenses.len(),
            categories = summaries.len(),
            "summarized spending by category"
        );
        summaries
    }
}
