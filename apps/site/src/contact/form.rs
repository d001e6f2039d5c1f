#![allow(dead_code)]

//! Browser-side contact form state.
//!
//! The submit control is disabled while a request is in flight and is
//! re-enabled by a drop guard, so every exit path (success, error response,
//! network failure, or the future being dropped) restores it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::contact::models::{ContactResponse, ContactSubmission};
use crate::contact::validation::is_valid_email;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const INCOMPLETE_MESSAGE: &str = "Please fill in every field.";
pub const BAD_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unreadable response (status {status})")]
    Decode { status: u16 },
}

/// Transport used by the form to reach the contact endpoint.
#[async_trait]
pub trait ContactClient: Send + Sync {
    async fn post(&self, submission: &ContactSubmission) -> Result<ContactResponse, ClientError>;
}

/// Posts submissions as JSON to `{base_url}/api/contact`.
#[derive(Clone)]
pub struct HttpContactClient {
    client: Client,
    endpoint: String,
}

impl HttpContactClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_ENDPOINT),
        })
    }
}

#[async_trait]
impl ContactClient for HttpContactClient {
    async fn post(&self, submission: &ContactSubmission) -> Result<ContactResponse, ClientError> {
        let response = self.client.post(&self.endpoint).json(submission).send().await?;
        let status = response.status().as_u16();
        // Error statuses still carry the `{ok, error}` envelope.
        response
            .json::<ContactResponse>()
            .await
            .map_err(|_| ClientError::Decode { status })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sent => Some(SENT_MESSAGE),
            FormStatus::Failed(msg) => Some(msg),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitButton {
    disabled: bool,
}

impl SubmitButton {
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> &'static str {
        if self.disabled {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }
}

/// Holds the submit control disabled until dropped.
struct Submitting<'a> {
    button: &'a mut SubmitButton,
}

impl<'a> Submitting<'a> {
    fn begin(button: &'a mut SubmitButton) -> Self {
        button.disabled = true;
        Self { button }
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.button.disabled = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    button: SubmitButton,
    status: FormStatus,
}

impl ContactForm {
    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Pre-submit check mirroring the browser's `required` and `type=email`.
    pub fn check(&self) -> Result<(), &'static str> {
        let f = &self.fields;
        if f.name.trim().is_empty() || f.email.trim().is_empty() || f.message.trim().is_empty() {
            return Err(INCOMPLETE_MESSAGE);
        }
        if !is_valid_email(f.email.trim()) {
            return Err(BAD_EMAIL_MESSAGE);
        }
        Ok(())
    }

    /// Sends the current fields. A second call while one is in flight is
    /// ignored. Clears the fields after a confirmed send.
    pub async fn submit(&mut self, client: &dyn ContactClient) -> &FormStatus {
        if self.button.disabled {
            return &self.status;
        }
        if let Err(reason) = self.check() {
            self.status = FormStatus::Failed(reason.to_string());
            return &self.status;
        }

        let _submitting = Submitting::begin(&mut self.button);
        self.status = FormStatus::Idle;

        let outcome = client.post(&self.fields).await;
        self.status = match outcome {
            Ok(response) if response.ok => {
                self.fields = ContactSubmission::default();
                FormStatus::Sent
            }
            Ok(response) => FormStatus::Failed(
                response
                    .error
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ),
            Err(e) => {
                tracing::warn!("Contact request did not complete: {e}");
                FormStatus::Failed(NETWORK_ERROR_MESSAGE.to_string())
            }
        };
        &self.status
    }
}
