//! HTTP boundary: a thin axum app over [`interpret`].
//!
//! The core stays transport-agnostic; this module only maps JSON requests
//! to [`interpret`] calls and library errors to HTTP envelopes.

use crate::{
    interpret::{interpret, Interpretation, DEFAULT_OCCURRENCES},
    Error,
};
use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::trace::TraceLayer;

/// Timestamp format used in response bodies.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Upper bound on the requested number of occurrences.
const MAX_OCCURRENCES: usize = 100;

const PROCESS_TIME_HEADER: HeaderName = HeaderName::from_static("x-process-time");

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/cron-expression-interpreter", post(interpret_expression))
        .layer(middleware::from_fn(process_time))
        .layer(TraceLayer::new_for_http())
}

/// Request body of `POST /cron-expression-interpreter`.
#[derive(Debug, Deserialize)]
pub struct InterpretRequest {
    expression: String,
    count: Option<usize>,
}

/// Per-field display breakdown as it appears on the wire.
#[derive(Debug, Serialize)]
pub struct DetailedDescription {
    minutes: String,
    hours: String,
    day_of_month: String,
    month: String,
    day_of_week: String,
}

/// Successful response body of `POST /cron-expression-interpreter`.
#[derive(Debug, Serialize)]
pub struct InterpretResponse {
    expression: String,
    valid: bool,
    current_time: String,
    next_occurrences: Vec<String>,
    interpreted_meaning: String,
    detailed_description: DetailedDescription,
    warnings: Vec<String>,
}

impl From<Interpretation> for InterpretResponse {
    fn from(interpretation: Interpretation) -> Self {
        Self {
            expression: interpretation.expression,
            valid: true,
            current_time: interpretation.reference.format(TIMESTAMP_FORMAT).to_string(),
            next_occurrences: interpretation
                .next_occurrences
                .iter()
                .map(|occurrence| occurrence.format(TIMESTAMP_FORMAT).to_string())
                .collect(),
            interpreted_meaning: interpretation.description,
            detailed_description: DetailedDescription {
                minutes: interpretation.fields.minutes,
                hours: interpretation.fields.hours,
                day_of_month: interpretation.fields.day_of_month,
                month: interpretation.fields.month,
                day_of_week: interpretation.fields.day_of_week,
            },
            warnings: interpretation.warnings,
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldError {
    field: &'static str,
    message: String,
}

/// Everything a handler can fail with, mapped to an HTTP envelope.
#[derive(Debug)]
enum ApiError {
    /// Request-level validation failures, reported all at once.
    Validation(Vec<FieldError>),
    /// Library errors from the interpretation pipeline.
    Interpret(Error),
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self::Interpret(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            Self::Interpret(error) => {
                let status = match error {
                    Error::NoOccurrenceFound => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_REQUEST,
                };
                tracing::debug!(error = %error, status = %status, "interpretation failed");
                (
                    status,
                    Json(json!({
                        "status": status.canonical_reason().unwrap_or_default(),
                        "message": error.to_string(),
                        "status_code": status.as_u16(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the Cron Expression Interpreter API" }))
}

async fn interpret_expression(
    Json(request): Json<InterpretRequest>,
) -> Result<Json<InterpretResponse>, ApiError> {
    validate(&request)?;

    let now = Local::now().naive_local();
    let count = request.count.unwrap_or(DEFAULT_OCCURRENCES);
    let interpretation = interpret(&request.expression, &now, count)?;

    Ok(Json(interpretation.into()))
}

fn validate(request: &InterpretRequest) -> Result<(), ApiError> {
    let mut errors = Vec::new();

    if request.expression.trim().is_empty() {
        errors.push(FieldError {
            field: "expression",
            message: "expression must not be empty".to_owned(),
        });
    }
    if let Some(count) = request.count {
        if count < 1 || count > MAX_OCCURRENCES {
            errors.push(FieldError {
                field: "count",
                message: format!("count must be between 1 and {MAX_OCCURRENCES}"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Stamps each response with the request wall time in seconds.
async fn process_time(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = format!("{:.6}", started.elapsed().as_secs_f64());
    if let Ok(value) = HeaderValue::from_str(&elapsed) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}
