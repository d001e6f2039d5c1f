use std::sync::LazyLock;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::contact::form::{
    ContactForm, BAD_EMAIL_MESSAGE, CONTACT_ENDPOINT, FALLBACK_ERROR_MESSAGE, INCOMPLETE_MESSAGE,
    NETWORK_ERROR_MESSAGE, SENDING_LABEL, SEND_LABEL, SENT_MESSAGE,
};
use crate::page::content::{
    CurriculumItem, EDUCATION, EXPERIENCE, HIGHLIGHTS, INTERESTS, INTRO, NAV_LINKS, OWNER,
    PAGE_DESCRIPTION, PAGE_TITLE, PROFILE, TAGLINE,
};
use crate::page::styles::SITE_CSS;
use crate::pursuits::render::escape_key_script;
use crate::pursuits::widget::{Document, PursuitsWidget};

const CONTACT_SCRIPT_TEMPLATE: &str = r#"(function () {
  var form = document.getElementById("contact-form");
  if (!form) return;
  var button = form.querySelector("button[type=submit]");
  var status = form.querySelector(".form-status");
  var pattern = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
  form.addEventListener("submit", async function (e) {
    e.preventDefault();
    if (button.disabled) return;
    var f = form.elements;
    var data = {
      name: f.namedItem("name").value,
      email: f.namedItem("email").value,
      message: f.namedItem("message").value,
      honey: f.namedItem("honey").value
    };
    if (!data.name.trim() || !data.email.trim() || !data.message.trim()) { status.textContent = __INCOMPLETE__; return; }
    if (!pattern.test(data.email.trim())) { status.textContent = __BAD_EMAIL__; return; }
    button.disabled = true;
    button.textContent = __SENDING__;
    status.textContent = "";
    try {
      var res = await fetch(__ENDPOINT__, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(data)
      });
      var body = await res.json().catch(function () { return {}; });
      if (body.ok) { status.textContent = __SENT__; form.reset(); }
      else { status.textContent = body.error || __FALLBACK__; }
    } catch (err) {
      status.textContent = __NETWORK__;
    } finally {
      button.disabled = false;
      button.textContent = __SEND__;
    }
  });
})();"#;

/// The browser half of the contact form, sharing its labels and messages
/// with [`ContactForm`].
static CONTACT_SCRIPT: LazyLock<String> = LazyLock::new(|| {
    let js = |s: &str| serde_json::Value::from(s).to_string();
    CONTACT_SCRIPT_TEMPLATE
        .replace("__INCOMPLETE__", &js(INCOMPLETE_MESSAGE))
        .replace("__BAD_EMAIL__", &js(BAD_EMAIL_MESSAGE))
        .replace("__SENDING__", &js(SENDING_LABEL))
        .replace("__ENDPOINT__", &js(CONTACT_ENDPOINT))
        .replace("__SENT__", &js(SENT_MESSAGE))
        .replace("__FALLBACK__", &js(FALLBACK_ERROR_MESSAGE))
        .replace("__NETWORK__", &js(NETWORK_ERROR_MESSAGE))
        .replace("__SEND__", &js(SEND_LABEL))
});

// ============================================================================
// Page
// ============================================================================

/// Renders the full page. The body style and the Escape listener follow the
/// document state the widget left behind.
pub fn render_page(
    doc: &Document,
    widget: &PursuitsWidget<'_>,
    form: &ContactForm,
    year: i32,
) -> Markup {
    let body_style = doc.body_overflow().map(|v| format!("overflow: {v}"));
    let content = html! {
        (site_header())
        main {
            (hero())
            (about())
            (curriculum())
            (pursuits(widget))
            (correspondence(form))
        }
        footer.site-footer { "© " (year) " " (OWNER) }
        @if doc.keydown_listener_count() > 0 {
            (escape_key_script())
        }
        script { (PreEscaped(CONTACT_SCRIPT.as_str())) }
    };
    base_document(body_style.as_deref(), content)
}

fn base_document(body_style: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(PAGE_DESCRIPTION);
                title { (PAGE_TITLE) }
                style { (PreEscaped(SITE_CSS)) }
            }
            body style=[body_style] {
                (content)
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn site_header() -> Markup {
    html! {
        header.site-header {
            div.container {
                a.navlink href="#hero" { (OWNER) }
                nav.site-nav {
                    @for link in NAV_LINKS {
                        a.navlink href=(link.href) { (link.label) }
                    }
                }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section #hero .section {
            div.container.stack {
                h1.h1 { (TAGLINE) }
                p.subtle { (INTRO) }
                div.grid-4 {
                    @for link in NAV_LINKS {
                        a.card.btn href=(link.href) {
                            span { (link.label) }
                            span aria-hidden="true" { "→" }
                        }
                    }
                }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        section #kayla .section {
            div.container.stack {
                h2.h2 { (OWNER) }
                div.grid-2 {
                    div.card {
                        p.subtle { "Profile" }
                        p { (PROFILE) }
                    }
                    div.card {
                        p.subtle { "Highlights" }
                        ul {
                            @for item in HIGHLIGHTS { li { (item) } }
                        }
                    }
                }
            }
        }
    }
}

fn curriculum_list(items: &[CurriculumItem]) -> Markup {
    html! {
        ul {
            @for item in items {
                li { strong { (item.heading) } " · " (item.period) }
            }
        }
    }
}

fn curriculum() -> Markup {
    html! {
        section #curriculum .section {
            div.container.stack {
                h2.h2 { "Curriculum" }
                div.card {
                    div.grid-2 {
                        div {
                            p.subtle { "Education" }
                            (curriculum_list(EDUCATION))
                        }
                        div {
                            p.subtle { "Experience" }
                            (curriculum_list(EXPERIENCE))
                        }
                    }
                }
            }
        }
    }
}

fn pursuits(widget: &PursuitsWidget<'_>) -> Markup {
    html! {
        section #pursuits .section {
            div.container.stack {
                h2.h2 { "Pursuits" }
                div.grid-2 {
                    div.card {
                        p.subtle { "Currently working on" }
                        (widget.render())
                    }
                    div.card {
                        p.subtle { "Interests" }
                        p { (INTERESTS) }
                    }
                }
            }
        }
    }
}

fn correspondence(form: &ContactForm) -> Markup {
    let button = form.button();
    html! {
        section #correspondence .section {
            div.container.stack {
                h2.h2 { "Correspondence" }
                div.card {
                    p.subtle { "Get in touch" }
                    // No action: the script posts JSON, and a plain form post would not.
                    form #contact-form .contact-form {
                        input name="name" placeholder="Your name" required value=(form.fields.name);
                        input name="email" type="email" placeholder="Email" required value=(form.fields.email);
                        textarea name="message" placeholder="Message" rows="5" required { (form.fields.message) }
                        div.hp aria-hidden="true" {
                            label {
                                "Leave this field empty"
                                input name="honey" tabindex="-1" autocomplete="off";
                            }
                        }
                        button.btn type="submit" disabled[button.is_disabled()] { (button.label()) }
                        p.form-status role="status" aria-live="polite" {
                            @if let Some(message) = form.status().message() { (message) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pursuits::seed::seed_pursuits;

    #[test]
    fn test_closed_page_has_all_sections() {
        let items = seed_pursuits();
        let doc = Document::new();
        let widget = PursuitsWidget::new(&items, &doc);
        let html = render_page(&doc, &widget, &ContactForm::default(), 2026).into_string();

        for id in ["hero", "kayla", "curriculum", "pursuits", "correspondence"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(html.contains("<title>Kayla Scullin — CV</title>"));
        assert!(html.contains("© 2026 Kayla Scullin"));
        assert!(!html.contains("role=\"dialog\""));
        assert!(html.contains("<body>"));
        assert!(!html.contains("<body style="));
        assert!(!html.contains("e.key===\"Escape\""));
    }

    #[test]
    fn test_open_page_locks_scroll_and_listens_for_escape() {
        let items = seed_pursuits();
        let doc = Document::new();
        let mut widget = PursuitsWidget::new(&items, &doc);
        widget.select("victorian-cast-iron-restoration");

        let html = render_page(&doc, &widget, &ContactForm::default(), 2026).into_string();

        assert!(html.contains("<body style=\"overflow: hidden\">"));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("e.key===\"Escape\""));
        assert!(html.contains("Strip old paint"));
    }

    #[test]
    fn test_contact_form_fields_and_honeypot() {
        let items = seed_pursuits();
        let doc = Document::new();
        let widget = PursuitsWidget::new(&items, &doc);
        let html = render_page(&doc, &widget, &ContactForm::default(), 2026).into_string();

        assert!(html.contains("name=\"name\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("name=\"message\""));
        assert!(html.contains("name=\"honey\""));
        assert!(html.contains(">Send</button>"));
        assert!(html.contains("\"/api/contact\""));
        assert!(!html.contains("__SEND__"));
    }

    #[test]
    fn test_contact_form_has_no_urlencoded_fallback() {
        let items = seed_pursuits();
        let doc = Document::new();
        let widget = PursuitsWidget::new(&items, &doc);
        let html = render_page(&doc, &widget, &ContactForm::default(), 2026).into_string();

        assert!(html.contains("id=\"contact-form\""));
        assert!(!html.contains("action="));
        assert!(!html.contains("method=\"post\""));
        assert!(html.contains("\"Content-Type\": \"application/json\""));
    }
}
