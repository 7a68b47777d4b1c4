//! Comprehensive integration tests for the Payroll Computation Core.
//!
//! This test suite covers the computation pipeline end to end through the
//! HTTP API:
//! - Full, half, and zero attendance breakdowns
//! - Half-day credits
//! - Salary structure fallback
//! - Statutory deductions and the net-salary floor
//! - Active-only aggregation
//! - Department label resolution
//! - Calendar-accurate proration denominators
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/org").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

async fn post_compute(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/compute")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn standard_structure() -> Value {
    json!({
        "basic": "20000",
        "hra": "10000",
        "special_allowance": "5000",
        "pf_deduction": true,
        "professional_tax": "200",
        "tds": "1500"
    })
}

fn create_employee(id: &str, name: &str, is_active: bool, structure: Option<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_active": is_active,
        "department_id": "dept_accounts",
        "designation": "Accounts Executive",
        "salary_structure": structure
    })
}

fn present_days(employee_id: &str, year: i32, month: u32, days: u32) -> Vec<Value> {
    (1..=days)
        .map(|day| {
            json!({
                "employee_id": employee_id,
                "date": format!("{:04}-{:02}-{:02}", year, month, day),
                "status": "present"
            })
        })
        .collect()
}

fn create_request(employees: Vec<Value>, attendance: Vec<Value>, year: i32, month: u32) -> Value {
    json!({
        "employees": employees,
        "attendance": attendance,
        "period": {"year": year, "month": month}
    })
}

fn assert_field(record: &Value, field: &str, expected: &str) {
    let actual = record[field]
        .as_str()
        .unwrap_or_else(|| panic!("field '{}' missing or not a string", field));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Worked examples
// =============================================================================

#[tokio::test]
async fn test_half_attendance_breakdown() {
    // 15 of 30 days: every earnings figure halves, PF follows the
    // prorated basic, flat deductions stay whole.
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        present_days("emp_001", 2026, 4, 15),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "days_present", "15");
    assert_field(record, "attendance_factor", "0.5");
    assert_field(record, "earned_basic", "10000");
    assert_field(record, "earned_hra", "5000");
    assert_field(record, "earned_special", "2500");
    assert_field(record, "gross_earnings", "17500");
    assert_field(record, "pf", "1200");
    assert_field(record, "professional_tax", "200");
    assert_field(record, "tds", "1500");
    assert_field(record, "total_deductions", "2900");
    assert_field(record, "net_salary", "14600");
    assert_eq!(record["employment_status"].as_str().unwrap(), "active");
}

#[tokio::test]
async fn test_zero_attendance_floors_net_at_zero() {
    // Flat deductions exceed a zero gross; net floors at zero rather
    // than going negative.
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        vec![],
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "days_present", "0");
    assert_field(record, "gross_earnings", "0");
    assert_field(record, "pf", "0");
    assert_field(record, "total_deductions", "1700");
    assert_field(record, "net_salary", "0");
}

#[tokio::test]
async fn test_full_attendance_is_identity_on_structure() {
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        present_days("emp_001", 2026, 4, 30),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "attendance_factor", "1");
    assert_field(record, "earned_basic", "20000");
    assert_field(record, "earned_hra", "10000");
    assert_field(record, "earned_special", "5000");
    assert_field(record, "gross_earnings", "35000");
    assert_field(record, "pf", "2400");
    assert_field(record, "net_salary", "30900");
}

// =============================================================================
// SECTION 2: Attendance semantics
// =============================================================================

#[tokio::test]
async fn test_half_days_credit_half() {
    let router = create_router_for_test();
    let mut attendance = present_days("emp_001", 2026, 4, 10);
    attendance.push(json!({
        "employee_id": "emp_001",
        "date": "2026-04-11",
        "status": "half_day"
    }));

    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        attendance,
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result["records"][0], "days_present", "10.5");
}

#[tokio::test]
async fn test_absent_and_leave_do_not_credit() {
    let router = create_router_for_test();
    let attendance = vec![
        json!({"employee_id": "emp_001", "date": "2026-04-01", "status": "present"}),
        json!({"employee_id": "emp_001", "date": "2026-04-02", "status": "absent"}),
        json!({"employee_id": "emp_001", "date": "2026-04-03", "status": "leave"}),
    ];

    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        attendance,
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result["records"][0], "days_present", "1");
}

#[tokio::test]
async fn test_records_outside_period_are_ignored() {
    let router = create_router_for_test();
    let mut attendance = present_days("emp_001", 2026, 4, 5);
    attendance.extend(present_days("emp_001", 2026, 3, 10));
    attendance.extend(present_days("emp_001", 2025, 4, 10));

    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        attendance,
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result["records"][0], "days_present", "5");
}

#[tokio::test]
async fn test_duplicate_records_inflate_factor_unclamped() {
    // Malformed log: 30 presence rows plus 6 duplicates in a 30-day
    // month. The factor propagates above 1 without clamping.
    let router = create_router_for_test();
    let mut attendance = present_days("emp_001", 2026, 4, 30);
    attendance.extend(present_days("emp_001", 2026, 4, 6));

    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        attendance,
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "days_present", "36");
    assert_field(record, "attendance_factor", "1.2");
    assert_field(record, "earned_basic", "24000");
}

#[tokio::test]
async fn test_february_uses_28_day_denominator() {
    // 14 of 28 days in February 2026 is exactly half attendance.
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        present_days("emp_001", 2026, 2, 14),
        2026,
        2,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "attendance_factor", "0.5");
    assert_field(record, "earned_basic", "10000");
}

#[tokio::test]
async fn test_31_day_month_rounds_components_half_up() {
    // 10 of 31 days: 20000 * 10/31 = 6451.61... -> 6452
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        present_days("emp_001", 2026, 1, 10),
        2026,
        1,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "earned_basic", "6452");
    assert_field(record, "earned_hra", "3226");
    assert_field(record, "earned_special", "1613");
    // Per-component rounding: gross is the sum of the rounded parts.
    assert_field(record, "gross_earnings", "11291");
}

// =============================================================================
// SECTION 3: Structure resolution and degradation
// =============================================================================

#[tokio::test]
async fn test_base_salary_fallback() {
    let router = create_router_for_test();
    let employee = json!({
        "id": "emp_002",
        "name": "Dev Kumar",
        "is_active": true,
        "base_salary": "18000"
    });
    let request = create_request(
        vec![employee],
        present_days("emp_002", 2026, 4, 15),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "earned_basic", "9000");
    assert_field(record, "earned_hra", "0");
    assert_field(record, "pf", "0");
    assert_field(record, "total_deductions", "0");
    assert_field(record, "net_salary", "9000");
}

#[tokio::test]
async fn test_bare_roster_entry_yields_zero_record() {
    // No structure, no base salary, no attendance: still a valid record,
    // all zeroes, not an error and not an omission.
    let router = create_router_for_test();
    let employee = json!({
        "id": "emp_003",
        "name": "Meera Shah",
        "is_active": true
    });
    let request = create_request(vec![employee], vec![], 2026, 4);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["records"].as_array().unwrap().len(), 1);
    let record = &result["records"][0];
    assert_field(record, "gross_earnings", "0");
    assert_field(record, "net_salary", "0");
    assert_eq!(result["summary"]["active_employee_count"], 1);
}

#[tokio::test]
async fn test_pf_disabled_structure() {
    let router = create_router_for_test();
    let structure = json!({
        "basic": "20000",
        "hra": "10000",
        "special_allowance": "5000",
        "pf_deduction": false,
        "professional_tax": "200",
        "tds": "1500"
    });
    let request = create_request(
        vec![create_employee("emp_001", "Asha Rao", true, Some(structure))],
        present_days("emp_001", 2026, 4, 30),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["records"][0];
    assert_field(record, "pf", "0");
    assert_field(record, "total_deductions", "1700");
    assert_field(record, "net_salary", "33300");
}

// =============================================================================
// SECTION 4: Aggregation
// =============================================================================

#[tokio::test]
async fn test_terminated_excluded_from_summary_but_record_exists() {
    let router = create_router_for_test();
    let request = create_request(
        vec![
            create_employee("emp_001", "Asha Rao", true, Some(standard_structure())),
            create_employee("emp_002", "Dev Kumar", false, Some(standard_structure())),
        ],
        [
            present_days("emp_001", 2026, 4, 30),
            present_days("emp_002", 2026, 4, 30),
        ]
        .concat(),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let records = result["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["employment_status"].as_str().unwrap(), "terminated");
    assert_field(&records[1], "gross_earnings", "35000");

    let summary = &result["summary"];
    assert_eq!(summary["active_employee_count"], 1);
    assert_eq!(normalize_decimal(summary["total_gross"].as_str().unwrap()), "35000");
    assert_eq!(
        normalize_decimal(summary["total_net_payable"].as_str().unwrap()),
        "30900"
    );
}

#[tokio::test]
async fn test_summary_sums_active_records() {
    let router = create_router_for_test();
    let employee_b = json!({
        "id": "emp_002",
        "name": "Dev Kumar",
        "is_active": true,
        "base_salary": "18000"
    });
    let request = create_request(
        vec![
            create_employee("emp_001", "Asha Rao", true, Some(standard_structure())),
            employee_b,
        ],
        [
            present_days("emp_001", 2026, 4, 30),
            present_days("emp_002", 2026, 4, 30),
        ]
        .concat(),
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let summary = &result["summary"];
    assert_eq!(
        normalize_decimal(summary["total_gross"].as_str().unwrap()),
        "53000"
    );
    assert_eq!(
        normalize_decimal(summary["total_deductions"].as_str().unwrap()),
        "4100"
    );
    assert_eq!(
        normalize_decimal(summary["total_net_payable"].as_str().unwrap()),
        "48900"
    );
    assert_eq!(summary["active_employee_count"], 2);
}

#[tokio::test]
async fn test_empty_roster_yields_empty_records_and_zero_summary() {
    let router = create_router_for_test();
    let request = create_request(vec![], vec![], 2026, 4);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["records"].as_array().unwrap().is_empty());
    assert_eq!(result["summary"]["active_employee_count"], 0);
    assert_eq!(
        normalize_decimal(result["summary"]["total_net_payable"].as_str().unwrap()),
        "0"
    );
}

#[tokio::test]
async fn test_repeat_request_is_bit_identical() {
    let request = create_request(
        vec![
            create_employee("emp_001", "Asha Rao", true, Some(standard_structure())),
            create_employee("emp_002", "Dev Kumar", false, Some(standard_structure())),
        ],
        present_days("emp_001", 2026, 4, 17),
        2026,
        4,
    );

    let (status_a, result_a) = post_compute(create_router_for_test(), request.clone()).await;
    let (status_b, result_b) = post_compute(create_router_for_test(), request).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(result_a, result_b);
}

// =============================================================================
// SECTION 5: Display decoration
// =============================================================================

#[tokio::test]
async fn test_department_label_resolved_from_config() {
    let router = create_router_for_test();
    let request = create_request(
        vec![create_employee(
            "emp_001",
            "Asha Rao",
            true,
            Some(standard_structure()),
        )],
        vec![],
        2026,
        4,
    );

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["records"][0]["department"].as_str().unwrap(), "Accounts");
    assert_eq!(
        result["records"][0]["employee_name"].as_str().unwrap(),
        "Asha Rao"
    );
}

#[tokio::test]
async fn test_unknown_department_falls_back_to_general() {
    let router = create_router_for_test();
    let employee = json!({
        "id": "emp_001",
        "name": "Asha Rao",
        "is_active": true,
        "department_id": "dept_nonexistent"
    });
    let request = create_request(vec![employee], vec![], 2026, 4);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["records"][0]["department"].as_str().unwrap(), "General");
}

#[tokio::test]
async fn test_missing_department_falls_back_to_general() {
    let router = create_router_for_test();
    let employee = json!({
        "id": "emp_001",
        "name": "Asha Rao",
        "is_active": true
    });
    let request = create_request(vec![employee], vec![], 2026, 4);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["records"][0]["department"].as_str().unwrap(), "General");
}

#[tokio::test]
async fn test_response_carries_organization_and_period() {
    let router = create_router_for_test();
    let request = create_request(vec![], vec![], 2026, 4);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["organization"].as_str().unwrap(), "Sunrise Trading Co.");
    assert_eq!(result["currency"].as_str().unwrap(), "INR");
    assert_eq!(result["period"]["year"], 2026);
    assert_eq!(result["period"]["month"], 4);
}

// =============================================================================
// SECTION 6: Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_month_returns_bad_request() {
    let router = create_router_for_test();
    let request = create_request(vec![], vec![], 2026, 13);

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "INVALID_PERIOD");
}

#[tokio::test]
async fn test_malformed_json_returns_bad_request() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/compute")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"].as_str().unwrap(), "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let router = create_router_for_test();
    let request = json!({
        "employees": [{"id": "emp_001", "name": "Asha Rao", "is_active": true}]
    });

    let (status, result) = post_compute(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let router = create_router_for_test();
    let request = create_request(vec![], vec![], 2026, 4);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/compute")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"].as_str().unwrap(), "MISSING_CONTENT_TYPE");
}
