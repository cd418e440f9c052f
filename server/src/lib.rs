//! HTTP surface for the calculator API.
//!
//! # Overview
//! Routes four arithmetic endpoints plus a health check. Every arithmetic
//! handler funnels through the same pipeline: validate the raw request with
//! [`calc_core::parse_operands`], dispatch through
//! [`Operation::apply`](calc_core::Operation::apply), encode the outcome as
//! JSON.
//!
//! # Design
//! - Handlers take `HeaderMap` + `Bytes` instead of axum's `Json` extractor
//!   so the core's strict decode owns every rejection path and its error
//!   classification.
//! - [`error_response`] is the single point converting an `ApiError` into a
//!   response; statuses and the `{"error": ...}` body shape cannot drift
//!   between endpoints.
//! - `app` and `run` are public so tests drive the router in-process.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use calc_core::{parse_operands, ApiError, Operation};

/// Process-wide configuration, loaded once at startup and passed explicitly
/// into the bind step.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. `PORT` defaults to 3000 when
    /// unset; a set-but-unparseable value is an error rather than a silent
    /// fallback.
    pub fn from_env() -> Result<Self, std::num::ParseIntError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => 3000,
        };
        Ok(Self { port })
    }
}

/// Serialized shape of every arithmetic error body. The HTTP status lives in
/// the response line only, never in the body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/health", any(health))
        .route("/add", post(add))
        .route("/subtract", post(subtract))
        .route("/multiply", post(multiply))
        .route("/divide", post(divide))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Health probe: 200 with a fixed plaintext body, whatever the method.
async fn health() -> &'static str {
    "API is running fine"
}

async fn add(headers: HeaderMap, body: Bytes) -> Response {
    evaluate(Operation::Add, &headers, &body)
}

async fn subtract(headers: HeaderMap, body: Bytes) -> Response {
    evaluate(Operation::Subtract, &headers, &body)
}

async fn multiply(headers: HeaderMap, body: Bytes) -> Response {
    evaluate(Operation::Multiply, &headers, &body)
}

async fn divide(headers: HeaderMap, body: Bytes) -> Response {
    evaluate(Operation::Divide, &headers, &body)
}

/// Shared request pipeline: validate, compute, encode, log.
fn evaluate(op: Operation, headers: &HeaderMap, body: &[u8]) -> Response {
    let operands = match parse_operands(content_type(headers), body) {
        Ok(operands) => operands,
        Err(err) => {
            warn!("[{}] Parsing error: {err}", op.name());
            return error_response(&err);
        }
    };

    match op.apply(operands) {
        Ok(result) => {
            info!(
                "[{}] {} {} {} = {}",
                op.name(),
                operands.a,
                op.symbol(),
                operands.b,
                result.value
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!("[{}] {err}", op.name());
            error_response(&err)
        }
    }
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

/// The single conversion point from [`ApiError`] to an HTTP response.
fn error_response(err: &ApiError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
