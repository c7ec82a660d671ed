//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. Business-rule rejections carry a plain-text message;
//! field validation failures deliberately return an empty body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: a request field breaks its format rule
/// - **Conflict Errors**: a unique key (username) is already taken
/// - **Policy Errors**: the request is well-formed but a business rule rejects it
/// - **Internal Errors**: anything unanticipated
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or one of its fields is invalid.
    ///
    /// Returns HTTP 400 Bad Request with no body.
    #[error("Invalid request")]
    InvalidRequest,

    /// Username already belongs to a registered user.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Username is taken. Please select a different username.")]
    UsernameTaken,

    /// User has not reached their 18th birthday.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("User must be over 18 years old to register.")]
    Underage,

    /// No registered user holds the payment's credit card.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Credit card is not registered against a registered user.")]
    CardNotRegistered,

    /// Unexpected failure while handling the request.
    ///
    /// Returns HTTP 500 Internal Server Error (hides details from client).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken => StatusCode::CONFLICT,
            AppError::Underage => StatusCode::FORBIDDEN,
            AppError::CardNotRegistered => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Any body the `Json` extractor cannot accept (bad syntax, missing
/// fields, wrong types, missing content type) is a bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        AppError::InvalidRequest
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request, empty body
/// - `UsernameTaken` → 409 Conflict
/// - `Underage` → 403 Forbidden
/// - `CardNotRegistered` → 404 Not Found
/// - `Internal` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::InvalidRequest => status.into_response(),
            AppError::Internal(ref detail) => {
                tracing::error!(%detail, "request failed");
                (status, "An internal error occurred").into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}
