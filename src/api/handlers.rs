//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, summarize};
use crate::models::{AttendanceRecord, Employee};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollLine, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for POST /payroll/compute.
///
/// Recomputes the full record set and summary from the supplied snapshot
/// on every request; nothing is cached or persisted, so a pay-run
/// confirmation step can call this freely before any confirm action.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll computation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the period before touching the roster
    let period = match request.period.into_period() {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();

    let records = compute_payroll(&employees, &attendance, &period);
    let summary = summarize(&records);

    let config = state.config();
    let lines: Vec<PayrollLine> = employees
        .iter()
        .zip(records)
        .map(|(employee, record)| PayrollLine {
            employee_name: employee.name.clone(),
            department: config
                .department_name(employee.department_id.as_deref())
                .to_string(),
            designation: employee.designation.clone(),
            record,
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        employee_count = employees.len(),
        active_employee_count = summary.active_employee_count,
        total_net_payable = %summary.total_net_payable,
        "Payroll computation completed"
    );

    let response = PayrollResponse {
        organization: config.organization().name.clone(),
        currency: config.organization().currency.clone(),
        period: request.period,
        records: lines,
        summary,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
