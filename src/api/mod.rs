//! HTTP API for the Payroll Computation Core.
//!
//! This module provides the axum router, request/response types, and
//! shared state for the payroll computation endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRecordRequest, EmployeeRequest, PayrollRequest, PeriodRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollLine, PayrollResponse};
pub use state::AppState;
