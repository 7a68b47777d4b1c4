//! Attendance models.
//!
//! This module defines the raw attendance log entries consumed by the
//! payroll computation. The core only consults records whose status
//! denotes presence.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status for one employee on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full day; contributes 1.0 day.
    Present,
    /// Present for half the day; contributes 0.5 day.
    HalfDay,
    /// Absent without leave; contributes nothing.
    Absent,
    /// On approved leave; contributes nothing.
    Leave,
}

impl AttendanceStatus {
    /// Returns the number of days this status contributes to the
    /// days-present figure.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(AttendanceStatus::Present.day_credit(), Decimal::ONE);
    /// assert_eq!(AttendanceStatus::HalfDay.day_credit(), Decimal::new(5, 1));
    /// assert_eq!(AttendanceStatus::Leave.day_credit(), Decimal::ZERO);
    /// ```
    pub fn day_credit(self) -> Decimal {
        match self {
            AttendanceStatus::Present => Decimal::ONE,
            AttendanceStatus::HalfDay => Decimal::new(5, 1),
            AttendanceStatus::Absent | AttendanceStatus::Leave => Decimal::ZERO,
        }
    }
}

/// One entry in the attendance log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded attendance status.
    pub status: AttendanceStatus,
}
