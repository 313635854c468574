use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use staybook_core::error::CoreError;
use staybook_core::validation::{codes, ValidationErrors};
use staybook_db::error::WriteError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, carries structured validation
/// rejections whole, and implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `staybook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The validation pipeline rejected the candidate. Carries the full
    /// field-keyed error set for the response body.
    #[error("validation failed")]
    Rejected(ValidationErrors),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource identified by something other than a numeric id.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<WriteError> for AppError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Rejected(errors) => AppError::Rejected(errors),
            WriteError::Db(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Structured rejection: the complete error set in one round trip.
            AppError::Rejected(errors) => {
                (StatusCode::BAD_REQUEST, axum::Json(json!({ "errors": errors })))
                    .into_response()
            }

            AppError::Core(core) => {
                let (status, code, message) = match core {
                    CoreError::NotFound { entity, id } => (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} with id {id} not found"),
                    ),
                    CoreError::Validation(msg) => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
                    }
                    CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
                    CoreError::Internal(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "INTERNAL_ERROR",
                            "An internal error occurred".to_string(),
                        )
                    }
                };
                error_body(status, code, message)
            }

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),

            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        }
    }
}

/// Standard `{ "error", "code" }` body used for everything except the
/// field-keyed validation envelope.
fn error_body(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP response.
///
/// - `RowNotFound` maps to 404.
/// - A unique violation (23505) on the property code maps to the 400
///   validation envelope with code `unique`, matching the shape the
///   application-level checks produce.
/// - An exclusion violation (23P01) on the reservation overlap backstop is
///   the application-level conflict check losing a race at commit time; it
///   is re-reported as a conflict, never as a 500.
/// - Everything else maps to a sanitized 500.
fn classify_sqlx_error(err: sqlx::Error) -> Response {
    match &err {
        sqlx::Error::RowNotFound => error_body(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or_default();
            match db_err.code().as_deref() {
                Some("23505") if constraint == "uq_properties_code" => {
                    let mut errors = ValidationErrors::new();
                    errors.add(
                        "code",
                        codes::UNIQUE,
                        "A property with this code already exists.",
                    );
                    AppError::Rejected(errors).into_response()
                }
                Some("23P01") if constraint == "ex_reservations_no_overlap" => error_body(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "The property is not available for one or more days of the selected interval."
                        .to_string(),
                ),
                Some("23505") => error_body(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    error_body(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
