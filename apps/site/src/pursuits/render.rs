use maud::{html, Markup, PreEscaped};

use crate::pursuits::models::Pursuit;

/// Where the overlay's close controls lead: the page with the widget closed.
pub const CLOSED_HREF: &str = "/#pursuits";

/// Registered only while the overlay is open; navigates to the closed page.
const ESCAPE_LISTENER: &str = r#"document.addEventListener("keydown",function(e){if(e.key==="Escape"){window.location.assign("/#pursuits");}});"#;

pub fn open_href(pursuit: &Pursuit) -> String {
    format!("/?pursuit={}#pursuits", pursuit.id)
}

/// The collapsed, scrollable list of cards.
pub fn pursuit_list(items: &[Pursuit]) -> Markup {
    html! {
        div.pursuits-scroll {
            div.pursuits-list {
                @for p in items {
                    a.pursuit-card href=(open_href(p)) aria-label={ "Open details for " (p.title) } {
                        div.pursuit-thumb {
                            img src=(p.preview_image.url()) alt=(p.preview_image.alt) loading="lazy";
                        }
                        div.pursuit-summary {
                            p.pursuit-title { (p.title) }
                            p class="pursuit-short clamp-2" { (p.short_description) }
                            p.pursuit-hint { "Click to expand →" }
                        }
                    }
                }
            }
        }
    }
}

/// The expanded panel. Absent detail fields are left out entirely.
pub fn pursuit_overlay(p: &Pursuit) -> Markup {
    let d = &p.details;
    html! {
        div.overlay role="dialog" aria-modal="true" aria-labelledby="overlay-title" {
            a.overlay-backdrop href=(CLOSED_HREF) aria-label="Close overlay" {}
            div.overlay-panel {
                div.overlay-header {
                    div {
                        h3 id="overlay-title" { (p.title) }
                        @if let Some(subtitle) = &p.subtitle {
                            p.overlay-subtitle { (subtitle) }
                        }
                        p.subtle { (p.short_description) }
                    }
                    a.overlay-close href=(CLOSED_HREF) aria-label="Close" { "✕" }
                }
                div.overlay-body {
                    p.overview { (d.overview) }
                    @if let Some(status) = d.status() {
                        p.status { strong { "Status: " } (status) }
                    }
                    @if let Some(bullets) = d.bullets() {
                        ul.bullets {
                            @for b in bullets { li { (b) } }
                        }
                    }
                    @if let Some(steps) = d.next_steps() {
                        div.next-steps {
                            p.subtle { "Next steps" }
                            ol {
                                @for step in steps { li { (step) } }
                            }
                        }
                    }
                    @if let Some(links) = d.links() {
                        ul.links {
                            @for link in links {
                                li { a href=(link.href) target="_blank" rel="noopener" { (link.label) } }
                            }
                        }
                    }
                    @if let Some(gallery) = d.gallery() {
                        div.gallery {
                            @for img in gallery {
                                div.gallery-item {
                                    img src=(img.url()) alt=(img.alt) loading="lazy";
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn escape_key_script() -> Markup {
    html! {
        script { (PreEscaped(ESCAPE_LISTENER)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pursuits::models::{ImageRef, Link, PursuitDetails};
    use crate::pursuits::seed::seed_pursuits;

    fn bare() -> Pursuit {
        Pursuit {
            id: "bare".to_string(),
            title: "Bare".to_string(),
            subtitle: None,
            short_description: "Nothing optional".to_string(),
            preview_image: ImageRef::new("pursuits/bare.jpg", "Bare"),
            details: PursuitDetails {
                overview: "Only an overview".to_string(),
                bullets: None,
                status: None,
                next_steps: None,
                links: None,
                gallery: None,
            },
        }
    }

    #[test]
    fn test_list_card_contents() {
        let html = pursuit_list(&seed_pursuits()).into_string();
        assert!(html.contains("Victorian Cast Iron Restoration"));
        assert!(html.contains("clamp-2"));
        assert!(html.contains("Click to expand →"));
        assert!(html.contains("src=\"/pursuits/castIronFernTable1.jpg\""));
        assert!(html.contains("href=\"/?pursuit=victorian-cast-iron-restoration#pursuits\""));
    }

    #[test]
    fn test_overlay_omits_absent_fields() {
        let html = pursuit_overlay(&bare()).into_string();
        assert!(html.contains("Only an overview"));
        for class in ["bullets", "gallery", "next-steps", "links", "status", "overlay-subtitle"] {
            assert!(
                !html.contains(&format!("class=\"{class}\"")),
                "{class} should be omitted"
            );
        }
    }

    #[test]
    fn test_overlay_renders_present_fields() {
        let mut p = bare();
        p.subtitle = Some("Ongoing".to_string());
        p.details.bullets = Some(vec!["Metal: Cast Iron".to_string()]);
        p.details.status = Some("Stripping paint".to_string());
        p.details.links = Some(vec![Link {
            label: "Notes".to_string(),
            href: "https://example.com/notes".to_string(),
        }]);
        p.details.gallery = Some(vec![ImageRef::new("pursuits/g1.jpg", "First")]);

        let html = pursuit_overlay(&p).into_string();
        assert!(html.contains("Ongoing"));
        assert!(html.contains("<li>Metal: Cast Iron</li>"));
        assert!(html.contains("Stripping paint"));
        assert!(html.contains("https://example.com/notes"));
        assert!(html.contains("src=\"/pursuits/g1.jpg\""));
        assert!(html.contains("aria-modal=\"true\""));
    }

    #[test]
    fn test_overlay_escapes_content() {
        let mut p = bare();
        p.title = "<b>bold</b>".to_string();
        let html = pursuit_overlay(&p).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
