use axum::extract::{Query, State};
use chrono::{Datelike, Utc};
use maud::Markup;
use serde::Deserialize;

use crate::contact::form::ContactForm;
use crate::page::render::render_page;
use crate::pursuits::widget::{Document, PursuitsWidget, WidgetEvent};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Id of the pursuit to show in the overlay.
    pub pursuit: Option<String>,
}

/// GET /
/// Renders the page with the widget closed, or open on `?pursuit=<id>`.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Markup {
    let doc = Document::new();
    let mut widget = PursuitsWidget::new(&state.pursuits, &doc);
    if let Some(id) = query.pursuit {
        widget.handle(WidgetEvent::Select(id));
    }
    render_page(&doc, &widget, &ContactForm::default(), Utc::now().year())
}
