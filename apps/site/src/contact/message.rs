use maud::{html, Markup, DOCTYPE};

use crate::config::ResolvedMail;
use crate::contact::models::ContactSubmission;

/// A fully composed notification email, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundEmail {
    /// Builds the notification for a validated submission. Replies go to the
    /// visitor, not to the site's sender address.
    pub fn from_submission(sub: &ContactSubmission, mail: &ResolvedMail<'_>) -> Self {
        Self {
            from: mail.from.to_string(),
            to: mail.to.to_string(),
            reply_to: sub.email.clone(),
            subject: format!("New contact form message from {}", sub.name),
            text_body: text_body(sub),
            html_body: html_body(sub).into_string(),
        }
    }
}

fn text_body(sub: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\n{}",
        sub.name, sub.email, sub.message
    )
}

fn html_body(sub: &ContactSubmission) -> Markup {
    html! {
        (DOCTYPE)
        html {
            body {
                p { strong { "Name:" } " " (sub.name) }
                p { strong { "Email:" } " " (sub.email) }
                p {
                    // `split` rather than `lines` keeps a trailing newline as a break.
                    @for (i, line) in sub.message.split('\n').enumerate() {
                        @if i > 0 { br; }
                        (line.strip_suffix('\r').unwrap_or(line))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_mail_settings;

    fn jo() -> ContactSubmission {
        ContactSubmission {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            message: "Hi\nthere".to_string(),
            honey: String::new(),
        }
    }

    #[test]
    fn test_text_body_is_verbatim() {
        let settings = test_mail_settings();
        let email = OutboundEmail::from_submission(&jo(), &settings.resolve().unwrap());
        assert_eq!(email.text_body, "Name: Jo\nEmail: jo@example.com\n\nHi\nthere");
    }

    #[test]
    fn test_headers_route_replies_to_visitor() {
        let settings = test_mail_settings();
        let email = OutboundEmail::from_submission(&jo(), &settings.resolve().unwrap());
        assert_eq!(email.reply_to, "jo@example.com");
        assert_eq!(email.from, "site@example.com");
        assert_eq!(email.to, "kayla@example.com");
        assert!(email.subject.contains("Jo"));
    }

    #[test]
    fn test_html_body_keeps_line_breaks() {
        let settings = test_mail_settings();
        let email = OutboundEmail::from_submission(&jo(), &settings.resolve().unwrap());
        assert!(email.html_body.contains("Hi<br>there"));
        assert!(email.html_body.contains("jo@example.com"));
    }

    #[test]
    fn test_html_body_escapes_markup() {
        let mut sub = jo();
        sub.name = "<script>".to_string();
        sub.message = "a < b\r\nb > c".to_string();
        let settings = test_mail_settings();
        let email = OutboundEmail::from_submission(&sub, &settings.resolve().unwrap());
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("a &lt; b<br>b &gt; c"));
    }

    #[test]
    fn test_html_body_keeps_trailing_and_blank_lines() {
        let settings = test_mail_settings();
        let mut sub = jo();

        sub.message = "Hi\n".to_string();
        let email = OutboundEmail::from_submission(&sub, &settings.resolve().unwrap());
        assert!(email.html_body.contains("<p>Hi<br></p>"));

        sub.message = "Hi\n\nthere\r\n".to_string();
        let email = OutboundEmail::from_submission(&sub, &settings.resolve().unwrap());
        assert!(email.html_body.contains("<p>Hi<br><br>there<br></p>"));
    }
}
