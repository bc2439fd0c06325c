// ABOUTME: Page generation handler for registered slide nodes
// ABOUTME: Queries all slides and creates one routed page per slide

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::lifecycle::{Actions, SlideQuery};
use crate::model::Page;
use log::info;
use serde_json::Value;

/// Create one page per slide reported by the query, numbered from result
/// order. A query that reports errors fails the whole pass; this call creates
/// no pages from it.
pub fn create_slide_pages(
    config: &Config,
    actions: &dyn Actions,
    query: &dyn SlideQuery,
) -> Result<()> {
    let outcome = query.all_slides();
    if !outcome.errors.is_empty() {
        return Err(DeckError::QueryError(outcome.errors.join("; ")));
    }

    let template = config.template_path();
    let slides_source = config.slides_path();
    info!("Creating {} slide pages", outcome.data.len());

    // The edge's html is fetched for downstream templates, not consumed here.
    for (index, _edge) in outcome.data.iter().enumerate() {
        let number = index + 1;
        let mut page = Page::new(format!("/{number}"), template.clone());
        page.context.insert(
            "id".to_string(),
            Value::String(format!("Slide__{number}")),
        );
        page.context.insert(
            "absolute_path".to_string(),
            Value::String(format!("{}#{number}", slides_source.display())),
        );
        actions.create_page(page);
    }

    Ok(())
}
