//! HTTP request handlers for the Leave Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::EntitlementSnapshot;
use crate::engine::LeaveAccrualEngine;
use crate::error::EngineResult;
use crate::models::{
    AccrualGrant, AccrualReport, ConventionComparison, LeaveYearEntry, MonthlyRow,
};

use super::request::LeaveRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type LeavePayload = Result<Json<LeaveRequest>, JsonRejection>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/ledger", post(ledger_handler))
        .route("/leave/schedule", post(schedule_handler))
        .route("/leave/table", post(table_handler))
        .route("/leave/comparison", post(comparison_handler))
        .route("/leave/entitlement", post(entitlement_handler))
        .with_state(state)
}

/// Handler for POST /leave/ledger.
async fn ledger_handler(State(state): State<AppState>, payload: LeavePayload) -> Response {
    process(&state, payload, "ledger", build_ledger)
}

/// Handler for POST /leave/schedule.
async fn schedule_handler(State(state): State<AppState>, payload: LeavePayload) -> Response {
    process(&state, payload, "schedule", build_schedule)
}

/// Handler for POST /leave/table.
async fn table_handler(State(state): State<AppState>, payload: LeavePayload) -> Response {
    process(&state, payload, "table", build_table)
}

/// Handler for POST /leave/comparison.
async fn comparison_handler(State(state): State<AppState>, payload: LeavePayload) -> Response {
    process(&state, payload, "comparison", build_comparison)
}

/// Handler for POST /leave/entitlement.
async fn entitlement_handler(State(state): State<AppState>, payload: LeavePayload) -> Response {
    process(&state, payload, "entitlement", build_entitlement)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Runs one request through the engine: parses the body, computes the
/// report, and logs the outcome under a fresh correlation ID.
fn process<T: Serialize>(
    state: &AppState,
    payload: LeavePayload,
    operation: &'static str,
    build: fn(&LeaveAccrualEngine, &LeaveRequest) -> EngineResult<AccrualReport<T>>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, operation, "Processing leave request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let start_time = Instant::now();
    match build(state.engine(), &request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                calculation_id = %report.calculation_id,
                hire_date = %report.hire_date,
                duration_us = start_time.elapsed().as_micros(),
                "Leave calculation completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Leave calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn build_ledger(
    engine: &LeaveAccrualEngine,
    request: &LeaveRequest,
) -> EngineResult<AccrualReport<Vec<LeaveYearEntry>>> {
    let record = request.record()?;
    let convention = request.convention()?;
    let horizon = engine.horizon(&record)?;
    let ledger =
        engine.compute_yearly_ledger(record.hire_date, record.termination_date, convention)?;

    Ok(AccrualReport::new(&record, ledger)
        .with_convention(convention)
        .with_horizon(horizon))
}

fn build_schedule(
    engine: &LeaveAccrualEngine,
    request: &LeaveRequest,
) -> EngineResult<AccrualReport<Vec<AccrualGrant>>> {
    let record = request.record()?;
    let convention = request.convention()?;
    let horizon = engine.horizon(&record)?;
    let grants = engine.compute_schedule(record.hire_date, record.termination_date, convention)?;

    Ok(AccrualReport::new(&record, grants)
        .with_convention(convention)
        .with_horizon(horizon))
}

fn build_table(
    engine: &LeaveAccrualEngine,
    request: &LeaveRequest,
) -> EngineResult<AccrualReport<Vec<MonthlyRow>>> {
    let record = request.record()?;
    let years = request
        .horizon_years
        .unwrap_or(engine.policy().default_table_years);
    let rows = engine.compute_monthly_table(record.hire_date, record.termination_date, years)?;

    Ok(AccrualReport::new(&record, rows))
}

fn build_comparison(
    engine: &LeaveAccrualEngine,
    request: &LeaveRequest,
) -> EngineResult<AccrualReport<ConventionComparison>> {
    let record = request.record()?;
    let years = request
        .horizon_years
        .unwrap_or(engine.policy().default_table_years);
    let comparison =
        engine.compare_conventions(record.hire_date, record.termination_date, years)?;

    Ok(AccrualReport::new(&record, comparison))
}

fn build_entitlement(
    engine: &LeaveAccrualEngine,
    request: &LeaveRequest,
) -> EngineResult<AccrualReport<EntitlementSnapshot>> {
    let record = request.record()?;
    let as_of = request.as_of()?;
    let snapshot = engine.entitlement_as_of(record.hire_date, as_of)?;

    Ok(AccrualReport::new(&record, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccrualPolicy;
    use crate::engine::FixedClock;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        AppState::new(LeaveAccrualEngine::with_clock(
            AccrualPolicy::korean_labor_standards(),
            Arc::new(FixedClock(today)),
        ))
    }

    async fn send(uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn body(request: &LeaveRequest) -> String {
        serde_json::to_string(request).unwrap()
    }

    #[tokio::test]
    async fn test_ledger_returns_report() {
        let mut request = LeaveRequest::new("2020-01-01");
        request.termination_date = Some("2023-07-01".to_string());

        let (status, json) = send("/leave/ledger", body(&request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["convention"], "anniversary");
        assert_eq!(json["horizon"]["source"]["kind"], "termination");
        let result = json["result"].as_array().unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result[3]["accrued_days"], 16);
        assert_eq!(result[3]["days"], 8);
    }

    #[tokio::test]
    async fn test_schedule_uses_fiscal_alias() {
        let mut request = LeaveRequest::new("2022-03-15");
        request.convention = "calendar_year".to_string();

        let (status, json) = send("/leave/schedule", body(&request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["convention"], "fiscal");
        let grants = json["result"].as_array().unwrap();
        assert_eq!(grants[9]["grant_date"], "2023-01-01");
        assert_eq!(grants[9]["days"], 12);
    }

    #[tokio::test]
    async fn test_table_defaults_to_policy_length() {
        let (status, json) = send("/leave/table", body(&LeaveRequest::new("2023-07-01"))).await;

        assert_eq!(status, StatusCode::OK);
        // 6 months of 2023 plus 4 full years
        assert_eq!(json["result"].as_array().unwrap().len(), 54);
    }

    #[tokio::test]
    async fn test_comparison_returns_summary() {
        let mut request = LeaveRequest::new("2023-01-01");
        request.horizon_years = Some(1);

        let (status, json) = send("/leave/comparison", body(&request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["current"]["difference"], 4);
        assert_eq!(json["result"]["per_year"][0]["year"], 2023);
    }

    #[tokio::test]
    async fn test_entitlement_as_of() {
        let mut request = LeaveRequest::new("2023-07-01");
        request.as_of = Some("2024-01-01".to_string());

        let (status, json) = send("/leave/entitlement", body(&request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["days"], 6);
        assert_eq!(json["result"]["next_grant_date"], "2024-02-01");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = send("/leave/ledger", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_hire_date_returns_validation_error() {
        let (status, json) = send("/leave/ledger", r#"{ "convention": "fiscal" }"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_termination_before_hire_returns_400() {
        let mut request = LeaveRequest::new("2023-07-01");
        request.termination_date = Some("2023-06-30".to_string());

        let (status, json) = send("/leave/schedule", body(&request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_DATE_RANGE");
    }

    #[tokio::test]
    async fn test_unparseable_date_returns_400() {
        let (status, json) = send("/leave/ledger", body(&LeaveRequest::new("2023-02-30"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn test_unknown_convention_returns_400() {
        let mut request = LeaveRequest::new("2023-07-01");
        request.convention = "lunar".to_string();

        let (status, json) = send("/leave/ledger", body(&request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "UNSUPPORTED_CONVENTION");
    }

    #[tokio::test]
    async fn test_out_of_range_horizon_returns_400() {
        let mut request = LeaveRequest::new("2023-07-01");
        request.horizon_years = Some(51);

        let (status, json) = send("/leave/table", body(&request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_HORIZON");
    }
}
