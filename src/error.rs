//! Error types for Locadora server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Message returned whenever the database cannot be reached
pub const CONNECTION_FAILURE_MESSAGE: &str = "Falha na conexão com o banco de dados.";

/// Machine-readable error codes carried in the error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NotFound = 3,
    DbConnection = 4,
    DbFailure = 5,
    ProcedureError = 6,
    BusinessRule = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure of a multi-statement operation, reported with the
    /// operation name and the failing statement's error class.
    #[error("{context}: {kind} - {detail}")]
    Operation {
        context: String,
        kind: &'static str,
        detail: String,
    },

    /// Error raised by a stored procedure (`RAISE EXCEPTION`)
    #[error("{0}")]
    Procedure(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Attach the name of the failed operation to a database or rule error.
    ///
    /// Connection failures keep their generic message and client errors are
    /// passed through unchanged.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            AppError::Database(e) if !is_connection_error(&e) => AppError::Operation {
                context: context.to_string(),
                kind: error_kind(&e),
                detail: error_detail(&e),
            },
            AppError::BusinessRule(detail) => AppError::Operation {
                context: context.to_string(),
                kind: "BusinessRule",
                detail,
            },
            other => other,
        }
    }
}

/// True when the error means the database could not be reached at all
pub fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed
    )
}

/// Short name of the error class, used in operation failure messages
pub fn error_kind(e: &sqlx::Error) -> &'static str {
    match e {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => "UniqueViolation",
            ErrorKind::ForeignKeyViolation => "ForeignKeyViolation",
            ErrorKind::NotNullViolation => "NotNullViolation",
            ErrorKind::CheckViolation => "CheckViolation",
            _ => "DatabaseError",
        },
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "DecodeError",
        e if is_connection_error(e) => "ConnectionError",
        _ => "Error",
    }
}

fn error_detail(e: &sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone()),
            AppError::Validation(msg) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) if is_connection_error(e) => {
                tracing::error!("Database connection failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbConnection,
                    CONNECTION_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    format!("Erro de banco de dados: {}", error_detail(e)),
                )
            }
            AppError::Operation { .. } => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure, self.to_string())
            }
            AppError::Procedure(msg) => {
                tracing::error!("Procedure error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::ProcedureError, msg.clone())
            }
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::BusinessRule, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
