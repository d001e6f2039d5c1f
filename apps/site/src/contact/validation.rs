use std::sync::LazyLock;

use lettre::message::Mailbox;
use regex::Regex;

use crate::contact::models::ContactSubmission;
use crate::errors::AppError;

/// Permissive shape check: non-blank local part, `@`, and a dotted domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// The shape check alone lets through addresses such as `a,b@c.com` that the
/// mail builder later refuses as a Reply-To, so the address must also parse
/// as a mailbox.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email) && email.parse::<Mailbox>().is_ok()
}

/// Validates a submission that already passed the honeypot check.
///
/// Field presence is checked before email shape, so a submission with an
/// empty name and a bad address reports "Missing fields".
pub fn validate_submission(sub: &ContactSubmission) -> Result<(), AppError> {
    if sub.name.is_empty() || sub.email.is_empty() || sub.message.is_empty() {
        return Err(AppError::MissingFields);
    }
    if !is_valid_email(&sub.email) {
        return Err(AppError::InvalidEmail);
    }
    Ok(())
}
