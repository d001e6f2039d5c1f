//! Mail transport — the only place that talks SMTP.
//!
//! `AppState` holds an `Arc<dyn MailSender>`; the handler goes through
//! [`deliver`], which adds a per-attempt timeout and a bounded retry.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ResolvedMail;
use crate::contact::message::OutboundEmail;

const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mailbox address: {0}")]
    Address(#[from] AddressError),

    #[error("Could not build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("SMTP exchange timed out after {0:?}")]
    Timeout(Duration),
}

impl MailError {
    /// Address and build failures will fail the same way on every attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            MailError::Address(_) | MailError::Build(_) => false,
            MailError::Smtp(e) => !e.is_permanent(),
            MailError::Timeout(_) => true,
        }
    }
}

/// Opaque proof of delivery; safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// The mail sender trait. Implement this to swap transports without touching
/// the handler.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(
        &self,
        email: &OutboundEmail,
        mail: &ResolvedMail<'_>,
    ) -> Result<DeliveryReceipt, MailError>;
}

/// SMTP sender backed by lettre. Opens a fresh connection per message.
pub struct SmtpMailer;

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(
        &self,
        email: &OutboundEmail,
        mail: &ResolvedMail<'_>,
    ) -> Result<DeliveryReceipt, MailError> {
        let from: Mailbox = email.from.parse()?;
        let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

        let message = Message::builder()
            .message_id(Some(message_id.clone()))
            .from(from)
            .reply_to(email.reply_to.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        let tls_params = TlsParameters::new(mail.host.to_string())?;
        let tls = if mail.implicit_tls() {
            Tls::Wrapper(tls_params)
        } else {
            Tls::Opportunistic(tls_params)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(mail.host)
            .port(mail.port)
            .tls(tls)
            .credentials(Credentials::new(
                mail.username.to_string(),
                mail.password.to_string(),
            ))
            .build();

        let response = transport.send(message).await?;
        debug!("SMTP server answered {}", response.code());

        Ok(DeliveryReceipt { message_id })
    }
}

/// Sends one email through `sender`, bounding each attempt by `timeout` and
/// retrying transient failures with exponential backoff (500ms, 1s).
pub async fn deliver(
    sender: &dyn MailSender,
    email: &OutboundEmail,
    mail: &ResolvedMail<'_>,
    timeout: Duration,
) -> Result<DeliveryReceipt, MailError> {
    let mut attempt = 0;
    loop {
        attempt += 1;

        let result = match tokio::time::timeout(timeout, sender.send(email, mail)).await {
            Ok(result) => result,
            Err(_) => Err(MailError::Timeout(timeout)),
        };

        match result {
            Ok(receipt) => return Ok(receipt),
            Err(e) if attempt < MAX_ATTEMPTS && e.is_transient() => {
                let delay = Duration::from_millis(BASE_BACKOFF_MS * (1 << (attempt - 1)));
                warn!(
                    "Mail attempt {} failed ({}), retrying after {}ms...",
                    attempt,
                    e,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{HangingMailer, RecordingMailer};
    use super::*;
    use crate::config::test_mail_settings;

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            from: "site@example.com".to_string(),
            to: "kayla@example.com".to_string(),
            reply_to: "jo@example.com".to_string(),
            subject: "New contact form message from Jo".to_string(),
            text_body: "Name: Jo".to_string(),
            html_body: "<p>Name: Jo</p>".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_succeeds_first_try() {
        let mailer = RecordingMailer::default();
        let settings = test_mail_settings();
        let receipt = deliver(
            &mailer,
            &sample_email(),
            &settings.resolve().unwrap(),
            Duration::from_secs(15),
        )
        .await
        .unwrap();
        assert_eq!(mailer.attempts(), 1);
        assert_eq!(mailer.sent().len(), 1);
        assert!(receipt.message_id.starts_with('<'));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_retries_transient_failures() {
        let mailer = RecordingMailer::failing_with(vec![
            MailError::Timeout(Duration::from_secs(1)),
            MailError::Timeout(Duration::from_secs(1)),
        ]);
        let settings = test_mail_settings();
        let result = deliver(
            &mailer,
            &sample_email(),
            &settings.resolve().unwrap(),
            Duration::from_secs(15),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(mailer.attempts(), 3);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_gives_up_after_max_attempts() {
        let mailer = RecordingMailer::failing_with(vec![
            MailError::Timeout(Duration::from_secs(1)),
            MailError::Timeout(Duration::from_secs(1)),
            MailError::Timeout(Duration::from_secs(1)),
            MailError::Timeout(Duration::from_secs(1)),
        ]);
        let settings = test_mail_settings();
        let result = deliver(
            &mailer,
            &sample_email(),
            &settings.resolve().unwrap(),
            Duration::from_secs(15),
        )
        .await;
        assert!(matches!(result, Err(MailError::Timeout(_))));
        assert_eq!(mailer.attempts(), MAX_ATTEMPTS);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_does_not_retry_bad_addresses() {
        let bad = "not an address".parse::<Mailbox>().unwrap_err();
        let mailer = RecordingMailer::failing_with(vec![MailError::Address(bad)]);
        let settings = test_mail_settings();
        let result = deliver(
            &mailer,
            &sample_email(),
            &settings.resolve().unwrap(),
            Duration::from_secs(15),
        )
        .await;
        assert!(matches!(result, Err(MailError::Address(_))));
        assert_eq!(mailer.attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_times_out_hanging_transport() {
        let settings = test_mail_settings();
        let result = deliver(
            &HangingMailer,
            &sample_email(),
            &settings.resolve().unwrap(),
            Duration::from_secs(2),
        )
        .await;
        assert!(matches!(result, Err(MailError::Timeout(d)) if d == Duration::from_secs(2)));
    }
}
