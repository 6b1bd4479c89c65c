use std::{fmt, str::FromStr};

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{format::DateFormatter, CoreError};

/// Direction for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Next,
    Previous,
}

/// Moves `date` one calendar month forward or back.
///
/// When the target month is shorter, the day is clamped to its last day
/// (Jan 31 + 1 month is Feb 28 or 29). Dates outside chrono's range are returned unchanged.
pub fn advance_month(date: NaiveDate, step: MonthStep) -> NaiveDate {
    let shifted = match step {
        MonthStep::Next => date.checked_add_months(Months::new(1)),
        MonthStep::Previous => date.checked_sub_months(Months::new(1)),
    };
    shifted.unwrap_or(date)
}

/// A single calendar month used to scope category summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CoreError::InvalidPeriod(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn step(&self, step: MonthStep) -> Self {
        Self::containing(advance_month(self.first_day(), step))
    }

    pub fn next(&self) -> Self {
        self.step(MonthStep::Next)
    }

    pub fn previous(&self) -> Self {
        self.step(MonthStep::Previous)
    }

    pub fn label(&self, formatter: &dyn DateFormatter) -> String {
        formatter.format_period(self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = CoreError;

    /// Parses `YYYY-MM`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidPeriod(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Period::new(year, month).map_err(|_| invalid())
    }
}
