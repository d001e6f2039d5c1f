use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::MailPresence;
use crate::contact::mailer::MailError;
use crate::contact::models::ContactResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only validation and rate-limit errors carry a specific reason back to the
/// caller; everything else is logged here and reported generically.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Too many requests")]
    RateLimited,

    #[error("Mail delivery is not configured: {0:?}")]
    NotConfigured(MailPresence),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotConfigured(_)
            | AppError::MalformedBody(_)
            | AppError::Mail(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the visitor.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingFields => "Missing fields",
            AppError::InvalidEmail => "Invalid email",
            AppError::RateLimited => "Too many requests",
            AppError::NotConfigured(_) => "Service not configured",
            AppError::MalformedBody(_) | AppError::Mail(_) | AppError::Internal(_) => {
                "Server error"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotConfigured(p) => {
                tracing::error!(
                    smtp_host = p.host,
                    smtp_port = p.port,
                    smtp_user = p.username,
                    smtp_pass = p.password,
                    contact_from = p.from,
                    contact_to = p.to,
                    "Contact form mail settings incomplete"
                );
            }
            AppError::MalformedBody(msg) => {
                tracing::error!("Contact form body rejected: {msg}");
            }
            AppError::Mail(e) => {
                tracing::error!("Contact form delivery failed: {e:?}");
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
            }
            AppError::MissingFields | AppError::InvalidEmail | AppError::RateLimited => {}
        }

        let body = Json(ContactResponse::failure(self.public_message()));
        (self.status(), body).into_response()
    }
}
