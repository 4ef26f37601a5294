//! HTTP request handlers for the GPA engine API.
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
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_cgpa, calculate_percentage, calculate_semester};
use crate::config::ConfigLoader;
use crate::external::{CreditLookup, HeuristicCreditLookup};
use crate::models::{AuditTrace, CgpaReport, SemesterReport};

use super::request::{CgpaRequest, CreditsRequest, GradeRequest, PercentageRequest, SemesterRequest};
use super::response::{ApiError, ApiErrorResponse, CreditsResponse, PercentageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/grade", post(grade_handler))
        .route("/sgpa", post(sgpa_handler))
        .route("/percentage", post(percentage_handler))
        .route("/cgpa", post(cgpa_handler))
        .route("/credits", post(credits_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
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
    };

    Err(ApiErrorResponse::bad_request(error))
}

/// Handler for POST /grade endpoint.
async fn grade_handler(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grade request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let outcome = state.config().grading().grade_of(request.total_marks);
    info!(
        correlation_id = %correlation_id,
        total_marks = %request.total_marks,
        grade = %outcome.grade,
        "Grade lookup completed"
    );
    json_ok(outcome)
}

/// Handler for POST /sgpa endpoint.
///
/// Grades a semester and returns the full report with its audit trace.
async fn sgpa_handler(
    State(state): State<AppState>,
    payload: Result<Json<SemesterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing SGPA request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let report = build_semester_report(request, state.config());
    info!(
        correlation_id = %correlation_id,
        subjects = report.result.subjects.len(),
        sgpa = %report.result.sgpa,
        duration_us = report.audit_trace.duration_us,
        "SGPA calculation completed successfully"
    );
    json_ok(report)
}

/// Runs the semester calculation and wraps it in a report.
fn build_semester_report(request: SemesterRequest, config: &ConfigLoader) -> SemesterReport {
    let start_time = Instant::now();
    let calculation = calculate_semester(
        &request.subjects,
        config.grading(),
        config.percentage_strategy(),
        1,
    );

    SemesterReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme_code: config.scheme().code.clone(),
        student: request.student,
        result: calculation.result,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: calculation.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

/// Handler for POST /percentage endpoint.
///
/// A standalone converter: the body picks the convention (`marks` or
/// `sgpa`) whatever the scheme configures, and the response names the one
/// used. The configured strategy only governs `/sgpa` reports.
async fn percentage_handler(payload: Result<Json<PercentageRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing percentage request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let input = match request.input() {
        Ok(input) => input,
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = message, "Invalid percentage request");
            return ApiErrorResponse::bad_request(ApiError::validation_error(message))
                .into_response();
        }
    };

    let result = calculate_percentage(input, 1);
    info!(
        correlation_id = %correlation_id,
        percentage = %result.percentage,
        reasoning = %result.audit_step.reasoning,
        "Percentage conversion completed"
    );
    json_ok(PercentageResponse {
        percentage: result.percentage,
        strategy: result.strategy,
    })
}

/// Handler for POST /cgpa endpoint.
async fn cgpa_handler(payload: Result<Json<CgpaRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CGPA request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let start_time = Instant::now();
    let calculation = calculate_cgpa(&request.semesters, request.is_lateral_entry, 1);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        semesters = request.semesters.len(),
        is_lateral_entry = request.is_lateral_entry,
        cgpa = %calculation.result.cgpa,
        duration_us,
        "CGPA calculation completed successfully"
    );

    json_ok(CgpaReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        is_lateral_entry: request.is_lateral_entry,
        result: calculation.result,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: Vec::new(),
            duration_us,
        },
    })
}

/// Handler for POST /credits endpoint.
///
/// Resolves credits with the scheme's heuristic defaults.
async fn credits_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreditsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing credits request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let lookup = HeuristicCreditLookup::new(*state.config().credit_heuristic());
    match lookup.lookup(&request.subject_codes).await {
        Ok(credits) => {
            info!(
                correlation_id = %correlation_id,
                codes = credits.len(),
                "Credit lookup completed"
            );
            json_ok(CreditsResponse {
                credits: credits.into_iter().collect(),
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Credit lookup failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
