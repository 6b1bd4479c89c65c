//! View-models for the dashboard, the transaction listing and the monthly resume.
//!
//! Everything here is derived from a record snapshot and rebuilt on every load.

use chrono::NaiveDate;
use gofinances_domain::{Catalog, TransactionRecord, TransactionType};
use serde::Serialize;

use crate::{
    aggregator::{AggregateResult, TransactionAggregator},
    format::{CurrencyFormatter, DateFormatter, LocaleFormatter},
    period::Period,
    summarizer::{CategorySummarizer, CategorySummary},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightKind {
    Up,
    Down,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightCard {
    pub kind: HighlightKind,
    pub amount: String,
    pub last_transaction: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightCards {
    pub entries: HighlightCard,
    pub expenses: HighlightCard,
    pub total: HighlightCard,
    pub aggregate: AggregateResult,
}

/// Dashboard highlight state: either not computed yet or computed from a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Highlights {
    #[default]
    NotComputed,
    Computed(HighlightCards),
}

impl Highlights {
    pub fn compute(records: &[TransactionRecord], formatter: &LocaleFormatter) -> Self {
        let aggregate = TransactionAggregator::aggregate(records);
        let none = formatter.no_movement_caption();

        let entries = HighlightCard {
            kind: HighlightKind::Up,
            amount: formatter.format_amount(aggregate.entries_total),
            last_transaction: aggregate
                .last_entry
                .date()
                .map(|date| formatter.last_inflow_caption(date))
                .unwrap_or_else(|| none.clone()),
        };
        let expenses = HighlightCard {
            kind: HighlightKind::Down,
            amount: formatter.format_amount(aggregate.expenses_total),
            last_transaction: aggregate
                .last_expense
                .date()
                .map(|date| formatter.last_outflow_caption(date))
                .unwrap_or_else(|| none.clone()),
        };
        let total = HighlightCard {
            kind: HighlightKind::Total,
            amount: formatter.format_amount(aggregate.net_total),
            last_transaction: aggregate
                .last_expense
                .date()
                .map(|date| formatter.interval_caption(date))
                .unwrap_or(none),
        };

        Highlights::Computed(HighlightCards {
            entries,
            expenses,
            total,
            aggregate,
        })
    }

    pub fn cards(&self) -> Option<&HighlightCards> {
        match self {
            Highlights::NotComputed => None,
            Highlights::Computed(cards) => Some(cards),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Highlights::Computed(_))
    }
}

/// A transaction formatted for the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    pub date: String,
    #[serde(skip)]
    pub sort_date: NaiveDate,
}

/// All records, newest first. Outflow amounts carry a `- ` prefix; unparseable amounts
/// are shown verbatim.
pub fn transaction_listing(
    records: &[TransactionRecord],
    catalog: &Catalog,
    formatter: &LocaleFormatter,
) -> Vec<TransactionRow> {
    let mut rows: Vec<TransactionRow> = records
        .iter()
        .map(|record| {
            let amount = record
                .amount_value()
                .map(|value| formatter.format_amount(value))
                .unwrap_or_else(|| record.amount.clone());
            let amount = match record.kind {
                TransactionType::Inflow => amount,
                TransactionType::Outflow => format!("- {amount}"),
            };
            TransactionRow {
                id: record.id.clone(),
                title: record.title.clone(),
                kind: record.kind,
                amount,
                category: catalog.name_for(&record.category).to_string(),
                date: formatter.format_short_date(record.date),
                sort_date: record.date,
            }
        })
        .collect();
    // stable sort keeps storage order for same-day rows
    rows.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));
    rows
}

/// Monthly spending breakdown plus its heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    pub period: Period,
    pub label: String,
    pub total: f64,
    pub total_formatted: String,
    pub rows: Vec<CategorySummary>,
}

impl ResumeView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn resume(
    records: &[TransactionRecord],
    period: Period,
    catalog: &Catalog,
    formatter: &LocaleFormatter,
) -> ResumeView {
    let total = CategorySummarizer::period_total(records, period);
    ResumeView {
        period,
        label: period.label(formatter),
        total,
        total_formatted: formatter.format_amount(total),
        rows: CategorySummarizer::summarize(records, period, catalog, formatter),
    }
}
