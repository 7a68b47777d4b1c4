//! Payroll Computation Core
//!
//! This crate derives, for every employee and calendar month, an
//! attendance-weighted compensation breakdown (earnings, statutory
//! deductions, net pay) from raw attendance records and a per-employee
//! salary structure, and folds those results into organization-wide
//! pay-run totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
