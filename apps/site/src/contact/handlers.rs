use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use tracing::{info, warn};

use crate::contact::mailer::deliver;
use crate::contact::message::OutboundEmail;
use crate::contact::models::{ContactResponse, ContactSubmission};
use crate::contact::validation::validate_submission;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let client = state
        .limiter
        .client_key(&headers, peer.map(|ConnectInfo(addr)| addr.ip()));
    if !state.limiter.check(client) {
        warn!("Contact form rate limit exceeded");
        return Err(AppError::RateLimited);
    }

    let Json(submission) = body.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    // Same answer as a real success so bots learn nothing.
    if submission.is_suspected_bot() {
        warn!("Discarded contact submission with filled honeypot");
        return Ok(Json(ContactResponse::success()));
    }

    validate_submission(&submission)?;

    let mail = state
        .config
        .mail
        .resolve()
        .ok_or_else(|| AppError::NotConfigured(state.config.mail.presence()))?;

    let email = OutboundEmail::from_submission(&submission, &mail);
    let receipt = deliver(
        state.mailer.as_ref(),
        &email,
        &mail,
        state.config.mail.timeout,
    )
    .await?;

    info!(message_id = %receipt.message_id, "Contact form message delivered");
    Ok(Json(ContactResponse::success()))
}
