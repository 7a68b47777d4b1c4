//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type that defines the
//! calculation context for a payroll run: which attendance records are in
//! scope and how many calendar days the month holds.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar year and month pair.
///
/// The period determines both the attendance filter window and the
/// days-in-month denominator used to prorate earnings. The denominator is
/// the actual number of calendar days in that month, never a fixed 30.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod::new(2026, 4).unwrap();
/// assert_eq!(period.days_in_month(), 30);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct PayrollPeriod {
    /// The calendar year.
    year: i32,
    /// The calendar month (1-12).
    month: u32,
}

/// Unvalidated wire form of a payroll period.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPeriod> for PayrollPeriod {
    type Error = EngineError;

    fn try_from(raw: RawPeriod) -> EngineResult<Self> {
        PayrollPeriod::new(raw.year, raw.month)
    }
}

impl PayrollPeriod {
    /// Creates a payroll period, validating the month is within 1..=12.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the month is out of
    /// range or the year-month pair does not form a valid calendar date.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidPeriod { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the period.
    pub fn first_day(&self) -> NaiveDate {
        // Validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns the actual number of calendar days in this month.
    ///
    /// Every valid calendar month has at least 28 days, so this value is
    /// safe to use as a proration denominator.
    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        let next_month_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .unwrap_or(NaiveDate::MAX);
        next_month_first.signed_duration_since(first).num_days() as u32
    }

    /// Checks whether a date falls within this period's year-month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
