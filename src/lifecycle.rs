// ABOUTME: Lifecycle contract between the orchestrator and the deck handlers
// ABOUTME: Defines the actions and query boundary plus the BuildHooks registration trait

use crate::config::Config;
use crate::errors::Result;
use crate::model::{Page, SlideNode, SourceNode};
use crate::{generate, paths, slides};

/// Side-effecting orchestrator actions. Fire-and-forget from the handlers'
/// perspective; the orchestrator serializes conflicting mutations itself.
pub trait Actions {
    fn create_node(&self, node: SlideNode);
    fn create_page(&self, page: Page);
    fn delete_page(&self, page: &Page);
}

/// One row of the all-slides query result. The rendered markup rides along
/// for downstream templates.
#[derive(Debug, Clone)]
pub struct SlideEdge {
    pub html: String,
}

/// Result envelope of the slide query: data plus any reported errors.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub data: Vec<SlideEdge>,
    pub errors: Vec<String>,
}

/// Read side of the orchestrator's node store.
pub trait SlideQuery {
    /// List every registered slide node, in store order.
    fn all_slides(&self) -> QueryOutcome;
}

/// Fixed lifecycle contract. The orchestrator invokes each method at its
/// matching build phase; the handlers never call each other.
pub trait BuildHooks {
    /// Invoked after every page is created, including pages created by other
    /// handlers.
    fn on_create_page(&self, page: &Page, actions: &dyn Actions) -> Result<()>;

    /// Invoked for every node added to the content graph.
    fn on_create_node(&self, node: &SourceNode, actions: &dyn Actions) -> Result<()>;

    /// Invoked once all nodes are in place, to emit output pages.
    fn create_pages(&self, actions: &dyn Actions, query: &dyn SlideQuery) -> Result<()>;
}

/// The deck handlers, registered against the lifecycle contract.
pub struct DeckHooks {
    config: Config,
}

impl DeckHooks {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl BuildHooks for DeckHooks {
    fn on_create_page(&self, page: &Page, actions: &dyn Actions) -> Result<()> {
        paths::normalize_page(page, actions);
        Ok(())
    }

    fn on_create_node(&self, node: &SourceNode, actions: &dyn Actions) -> Result<()> {
        slides::extract_slides(node, actions)
    }

    fn create_pages(&self, actions: &dyn Actions, query: &dyn SlideQuery) -> Result<()> {
        generate::create_slide_pages(&self.config, actions, query)
    }
}
