use chrono::NaiveDate;
use gofinances_domain::{TransactionRecord, TransactionType};
use tracing::debug;

/// Most recent date among a set of records, or `None` when the set was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastMovement {
    #[default]
    None,
    On(NaiveDate),
}

impl LastMovement {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            LastMovement::None => None,
            LastMovement::On(date) => Some(date),
        }
    }
}

/// Latest `date` among the records accepted by `predicate`.
pub fn latest_matching<'a, I, P>(records: I, predicate: P) -> LastMovement
where
    I: IntoIterator<Item = &'a TransactionRecord>,
    P: Fn(&TransactionRecord) -> bool,
{
    records
        .into_iter()
        .filter(|record| predicate(*record))
        .map(|record| record.date)
        .max()
        .map_or(LastMovement::None, LastMovement::On)
}

/// Totals and last-movement dates across a record set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateResult {
    pub entries_total: f64,
    pub expenses_total: f64,
    pub net_total: f64,
    pub last_entry: LastMovement,
    pub last_expense: LastMovement,
    /// Records left out of the totals because their amount did not parse.
    pub skipped: usize,
}

pub struct TransactionAggregator;

impl TransactionAggregator {
    pub fn aggregate(records: &[TransactionRecord]) -> AggregateResult {
        let mut entries_total = 0.0;
        let mut expenses_total = 0.0;
        let mut skipped = 0;

        for record in records {
            let Some(amount) = record.amount_value() else {
                skipped += 1;
                continue;
            };
            match record.kind {
                TransactionType::Inflow => entries_total += amount,
                TransactionType::Outflow => expenses_total += amount,
            }
        }

        let result = AggregateResult {
            entries_total,
            expenses_total,
            net_total: entries_total - expenses_total,
            last_entry: latest_matching(records, TransactionRecord::is_inflow),
            last_expense: latest_matching(records, TransactionRecord::is_outflow),
            skipped,
        };
        debug!(
            records = records.len(),
            skipped, "aggregated transaction totals"
        );
        result
    }
}
