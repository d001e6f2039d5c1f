use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One contact form submission. Lives for a single request only.
///
/// Absent fields deserialize as empty strings so that they are reported as
/// missing rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Honeypot. Hidden from people, filled in by naive bots. Accepts any
    /// JSON value; see [`honeypot_value`].
    #[serde(default, deserialize_with = "honeypot_value")]
    pub honey: String,
}

/// Response envelope for `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}

impl ContactSubmission {
    pub fn is_suspected_bot(&self) -> bool {
        !self.honey.is_empty()
    }
}

/// Bots post whatever they like in the trap field. Falsy values (`null`,
/// `false`, `0`, `""`) read as empty; anything else becomes a non-empty
/// string so the submission is still treated as a bot instead of failing to
/// parse.
fn honeypot_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
