// ABOUTME: Slide extraction handler for Markdown source nodes
// ABOUTME: Splits documents on the slide delimiter, renders each slide and registers nodes

use crate::errors::Result;
use crate::lifecycle::Actions;
use crate::lint;
use crate::model::{SlideNode, SourceNode, MARKDOWN_KIND, SLIDE_KIND, SYNTHETIC_PARENT};
use comrak::{markdown_to_html, ComrakOptions};
use log::{info, warn};
use md5::{Digest, Md5};
use std::thread;

/// Literal line that separates slides within a source document.
pub const SLIDE_DELIMITER: &str = "---\n";

/// One slide segment with its identity fixed before rendering starts.
struct SlideTask {
    id: String,
    text: String,
    content_digest: String,
}

/// Split a Markdown source node into slides and register one content node per
/// slide. Ids are assigned from the segment index before any rendering
/// happens, so render completion order cannot reorder or renumber them.
/// Nodes of any other kind are ignored.
pub fn extract_slides(node: &SourceNode, actions: &dyn Actions) -> Result<()> {
    if node.kind != MARKDOWN_KIND {
        return Ok(());
    }

    let tasks = plan_slides(&node.raw_body)?;
    info!("Extracting {} slides from node {}", tasks.len(), node.id);

    // One render task per slide, each writing its own pre-assigned slot.
    let mut rendered: Vec<Option<String>> = vec![None; tasks.len()];
    thread::scope(|scope| {
        for (slot, task) in rendered.iter_mut().zip(&tasks) {
            scope.spawn(move || {
                *slot = Some(render_slide(&task.id, &task.text));
            });
        }
    });

    for (task, html) in tasks.into_iter().zip(rendered) {
        // The scope joins every render thread, so each slot is filled.
        let html = html.unwrap_or_default();
        actions.create_node(SlideNode {
            id: task.id,
            parent: SYNTHETIC_PARENT.to_string(),
            children: Vec::new(),
            kind: SLIDE_KIND.to_string(),
            content_digest: task.content_digest,
            html,
        });
    }

    Ok(())
}

/// Split the raw document on the delimiter and fix each slide's id and digest
/// from its position. A document that starts or ends with the delimiter
/// yields an empty slide; literal split semantics keep it.
fn plan_slides(raw_body: &str) -> Result<Vec<SlideTask>> {
    raw_body
        .split(SLIDE_DELIMITER)
        .map(str::trim)
        .enumerate()
        .map(|(index, text)| {
            Ok(SlideTask {
                id: format!("Slide__{}", index + 1),
                content_digest: content_digest(text)?,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Stable fingerprint of one slide's text: MD5 over the canonical JSON form,
/// hex encoded. Consumed upstream for change detection only.
pub fn content_digest(text: &str) -> Result<String> {
    let canonical = serde_json::to_string(text)?;
    Ok(hex::encode(Md5::digest(canonical.as_bytes())))
}

/// Render one slide to HTML, reporting lint findings as warnings first.
fn render_slide(id: &str, text: &str) -> String {
    for finding in lint::check(text) {
        warn!(
            "{} line {}: {} ({})",
            id, finding.line, finding.message, finding.rule
        );
    }

    let mut options = ComrakOptions::default();
    options.render.unsafe_ = true; // Allow raw HTML
    markdown_to_html(text, &options)
}
