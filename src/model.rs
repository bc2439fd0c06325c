// ABOUTME: Data model for the deck-slides library
// ABOUTME: Defines output pages, source nodes and derived slide nodes

use serde_json::{Map, Value};
use std::path::PathBuf;

/// Node kind recognized by the slide extractor.
pub const MARKDOWN_KIND: &str = "Markdown";

/// Node kind registered for every extracted slide.
pub const SLIDE_KIND: &str = "Slide";

/// Synthetic parent id attached to every slide node.
pub const SYNTHETIC_PARENT: &str = "__SOURCE__";

/// A routable output page bound to a template component and a context mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Route of the page. Never ends in a trailing slash unless it is `/`.
    pub path: String,
    /// Template component that renders the page.
    pub component: PathBuf,
    /// Arbitrary context handed to the template.
    pub context: Map<String, Value>,
}

impl Page {
    pub fn new(path: impl Into<String>, component: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
            context: Map::new(),
        }
    }
}

/// A source document owned by the orchestrator's content graph. Only the kind
/// and raw body are observed here.
#[derive(Debug, Clone)]
pub struct SourceNode {
    pub id: String,
    pub kind: String,
    pub raw_body: String,
}

impl SourceNode {
    /// Convenience constructor for a Markdown source document.
    pub fn markdown(id: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MARKDOWN_KIND.to_string(),
            raw_body: raw_body.into(),
        }
    }
}

/// A content node derived from one slide segment of a source document.
/// Immutable once registered; the orchestrator replaces the whole set when
/// the source document is reprocessed.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideNode {
    /// `Slide__<n>`, 1-based, dense within the source document.
    pub id: String,
    pub parent: String,
    pub children: Vec<String>,
    pub kind: String,
    /// Stable hash of the raw slide text, used upstream for change detection.
    pub content_digest: String,
    /// Rendered markup for the slide.
    pub html: String,
}
