//! HTTP API for the Payslip Engine.
//!
//! This module exposes a small REST API around the query and payroll
//! engines using the [`axum`](https://crates.io/crates/axum) framework.
//! It is the composition layer: employees come from an
//! [`EmployeeSource`], list requests run through a [`QueryEngine`]
//! built from the query string, and payslip requests run through the
//! shared [`PayrollDeriver`].

use crate::config::Config;
use crate::engine::run_payslips;
use crate::error::SourceError;
use crate::models::{EarningsAndDeductions, Employee};
use crate::payroll::{recompute_totals, PayrollDeriver, PayslipForm};
use crate::query::{unique_departments, EmployeeStats, QueryCriteria, QueryEngine};
use crate::source::EmployeeSource;
use crate::words::{amount_in_words, net_pay_in_words};
use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Application state shared across requests.
pub struct AppState {
    pub source: Arc<dyn EmployeeSource>,
    pub deriver: PayrollDeriver,
    pub page_size: usize,
}

/// Build the API router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees))
        .route("/api/employees/:id/payslip", get(employee_payslip))
        .route("/api/departments", get(departments))
        .route("/api/stats", get(stats))
        .route("/api/payslips", get(payslip_run))
        .route("/api/payslip/default", get(default_payslip))
        .route("/api/payslip/totals", post(totals))
        .route("/api/words/:amount", get(words))
        .with_state(state)
}

/// Handler failures as HTTP responses.
#[derive(Debug)]
enum ApiError {
    Source(SourceError),
    /// A background task panicked or was cancelled.
    Internal(String),
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        ApiError::Source(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Source(err) => {
                let status = match &err {
                    SourceError::NotFound(_) => StatusCode::NOT_FOUND,
                    SourceError::Unavailable(_) | SourceError::Malformed(_) => {
                        warn!(error = %err, "employee source failed");
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                };
                (status, err.to_string())
            }
            ApiError::Internal(message) => {
                error!(%message, "request task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Query string of `GET /api/employees`.  Unknown enum values fall
/// back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    search: Option<String>,
    department: Option<String>,
    status: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page: Option<usize>,
}

impl ListParams {
    fn query_engine(&self) -> QueryEngine {
        QueryEngine::with_criteria(QueryCriteria {
            search_text: self.search.clone().unwrap_or_default(),
            department_filter: self.department.clone().unwrap_or_default(),
            status_filter: parse_or_default(&self.status),
            sort_field: parse_or_default(&self.sort_by),
            sort_order: parse_or_default(&self.sort_order),
        })
    }
}

fn parse_or_default<T: FromStr + Default>(value: &Option<String>) -> T {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeList {
    employees: Vec<Employee>,
    total: usize,
    filtered: usize,
    has_more: bool,
    has_active_filters: bool,
    criteria: QueryCriteria,
}

async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<EmployeeList>, ApiError> {
    let employees = state.source.fetch_all().await?;
    let engine = params.query_engine();
    let rows = engine.filter_and_sort(&employees);
    let page = QueryEngine::page(&rows, params.page.unwrap_or(1), state.page_size);
    Ok(Json(EmployeeList {
        total: employees.len(),
        filtered: rows.len(),
        has_more: page.has_more,
        employees: page.employees,
        has_active_filters: engine.has_active_filters(),
        criteria: engine.criteria().clone(),
    }))
}

async fn departments(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let employees = state.source.fetch_all().await?;
    Ok(Json(unique_departments(&employees)))
}

async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<EmployeeStats>, ApiError> {
    let employees = state.source.fetch_all().await?;
    Ok(Json(EmployeeStats::of(&employees)))
}

async fn employee_payslip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let employee = state.source.fetch_by_id(&id).await?;
    let form = PayslipForm::for_employee(state.deriver.clone(), &employee);
    Ok(Json(form.into_payslip()).into_response())
}

async fn payslip_run(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let employees = state.source.fetch_all().await?;
    let deriver = state.deriver.clone();
    // Derivation is CPU bound; keep it off the async workers.
    let run = tokio::task::spawn_blocking(move || run_payslips(&employees, &deriver)).await?;
    Ok(Json(run).into_response())
}

async fn default_payslip(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.deriver.default_template())
}

async fn totals(Json(fields): Json<EarningsAndDeductions>) -> impl IntoResponse {
    let totals = recompute_totals(&fields);
    Json(json!({
        "totalEarnings": totals.total_earnings,
        "totalDeductions": totals.total_deductions,
        "netPay": totals.net_pay,
        "amountInWords": net_pay_in_words(totals.net_pay),
    }))
}

async fn words(Path(amount): Path<u64>) -> impl IntoResponse {
    Json(json!({ "amount": amount, "words": amount_in_words(amount) }))
}

/// Launch the API server.  Binds to the configured address and blocks
/// until the server terminates.
pub async fn serve(
    config: &Config,
    source: Arc<dyn EmployeeSource>,
    deriver: PayrollDeriver,
) -> Result<()> {
    let state = Arc::new(AppState {
        source,
        deriver,
        page_size: config.page_size,
    });
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
