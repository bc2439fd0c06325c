// ABOUTME: Page emission for the deck-slides binary
// ABOUTME: Maps page routes to files and writes each page's html document

use crate::errors::Result;
use crate::store::MemoryStore;
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File a page route materializes to below the output directory. The root
/// route maps to `index.html`, every other route to `<route>/index.html`.
pub fn page_output_path(out_dir: &Path, route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(trimmed).join("index.html")
    }
}

/// Wrap one slide's markup in a minimal document shell.
pub fn render_document(title: &str, body: &str) -> String {
    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(&format!("<title>{}</title>\n", title));
    html_doc.push_str("</head>\n<body>\n<div>");
    html_doc.push_str(body);
    html_doc.push_str("</div>\n</body>\n</html>");
    html_doc
}

/// Write every page in the store to the output directory. Pages whose context
/// does not name a registered slide are skipped with a warning.
pub fn write_pages(store: &MemoryStore, out_dir: &Path) -> Result<()> {
    for page in store.pages() {
        let Some(slide_id) = page.context.get("id").and_then(Value::as_str) else {
            warn!("Page {} carries no slide id; skipping", page.path);
            continue;
        };
        let Some(html) = store.node_html(slide_id) else {
            warn!("Page {} names unknown slide {}; skipping", page.path, slide_id);
            continue;
        };

        let output_path = page_output_path(out_dir, &page.path);
        // Ensure parent directory exists
        if let Some(parent) = output_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&output_path, render_document(slide_id, &html))?;
        info!("Wrote {} -> {:?}", page.path, output_path);
    }
    Ok(())
}
