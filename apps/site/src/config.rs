use std::time::Duration;

use anyhow::{Context, Result};

/// Port on which SMTP servers expect TLS from the first byte (SMTPS).
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// Application configuration loaded from environment variables.
/// Read once at startup; mail settings are optional and their absence only
/// disables delivery.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub public_dir: String,
    pub mail: MailSettings,
    pub rate_limit: RateLimitSettings,
}

/// Outbound mail settings. Every field is required for live delivery.
#[derive(Clone, Default)]
pub struct MailSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout: Duration,
}

/// A complete set of mail settings, produced by [`MailSettings::resolve`].
/// No `Debug`: it carries the password.
#[derive(Clone)]
pub struct ResolvedMail<'a> {
    pub host: &'a str,
    pub port: u16,
    pub username: &'a str,
    pub password: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

/// Which mail settings are present. Safe to log: never carries values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailPresence {
    pub host: bool,
    pub port: bool,
    pub username: bool,
    pub password: bool,
    pub from: bool,
    pub to: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window: Duration,
    /// Key clients on the first `X-Forwarded-For` address instead of the
    /// socket peer. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

// Hand-written so the password never ends up in a log line.
impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username.as_ref().map(|_| "<set>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MailSettings {
    pub fn presence(&self) -> MailPresence {
        MailPresence {
            host: self.host.is_some(),
            port: self.port.is_some(),
            username: self.username.is_some(),
            password: self.password.is_some(),
            from: self.from.is_some(),
            to: self.to.is_some(),
        }
    }

    /// Returns the settings only when every one of them is present.
    pub fn resolve(&self) -> Option<ResolvedMail<'_>> {
        Some(ResolvedMail {
            host: self.host.as_deref()?,
            port: self.port?,
            username: self.username.as_deref()?,
            password: self.password.as_deref()?,
            from: self.from.as_deref()?,
            to: self.to.as_deref()?,
        })
    }
}

impl ResolvedMail<'_> {
    pub fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            mail: MailSettings {
                host: optional_env("SMTP_HOST"),
                // An unparseable port counts as unset.
                port: optional_env("SMTP_PORT").and_then(|raw| raw.parse::<u16>().ok()),
                username: optional_env("SMTP_USER"),
                password: optional_env("SMTP_PASS"),
                from: optional_env("CONTACT_FROM"),
                to: optional_env("CONTACT_TO"),
                timeout: Duration::from_secs(
                    parse_env_or("MAIL_TIMEOUT_SECS", 15)
                        .context("MAIL_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
            },
            rate_limit: RateLimitSettings {
                max_requests: parse_env_or("CONTACT_RATE_LIMIT", 5)
                    .context("CONTACT_RATE_LIMIT must be a positive integer")?,
                window: Duration::from_secs(
                    parse_env_or("CONTACT_RATE_WINDOW_SECS", 600)
                        .context("CONTACT_RATE_WINDOW_SECS must be a whole number of seconds")?,
                ),
                trust_forwarded_for: parse_env_or("TRUST_FORWARDED_FOR", false)
                    .context("TRUST_FORWARDED_FOR must be true or false")?,
            },
        })
    }
}

/// Empty values count as unset, so `SMTP_HOST=` in a `.env` disables delivery.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        None => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_mail_settings() -> MailSettings {
    MailSettings {
        host: Some("smtp.example.com".to_string()),
        port: Some(587),
        username: Some("mailer".to_string()),
        password: Some("hunter2".to_string()),
        from: Some("site@example.com".to_string()),
        to: Some("kayla@example.com".to_string()),
        timeout: Duration::from_secs(15),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_requires_every_setting() {
        let complete = test_mail_settings();
        assert!(complete.resolve().is_some());

        let mut missing_to = test_mail_settings();
        missing_to.to = None;
        assert!(missing_to.resolve().is_none());

        let mut missing_port = test_mail_settings();
        missing_port.port = None;
        assert!(missing_port.resolve().is_none());
    }

    #[test]
    fn test_presence_reports_booleans() {
        let mut settings = test_mail_settings();
        settings.password = None;
        let presence = settings.presence();
        assert!(presence.host);
        assert!(!presence.password);
        assert!(presence.to);
    }

    #[test]
    fn test_implicit_tls_only_on_465() {
        let mut settings = test_mail_settings();
        assert!(!settings.resolve().unwrap().implicit_tls());
        settings.port = Some(465);
        assert!(settings.resolve().unwrap().implicit_tls());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", test_mail_settings());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
