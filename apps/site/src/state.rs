use std::sync::Arc;

use crate::config::Config;
use crate::contact::mailer::MailSender;
use crate::contact::rate_limit::RateLimiter;
use crate::pursuits::models::Pursuit;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable mail transport. Default: SmtpMailer.
    pub mailer: Arc<dyn MailSender>,
    pub limiter: Arc<RateLimiter>,
    /// Pursuit entries shown in the gallery widget.
    pub pursuits: Arc<[Pursuit]>,
}
