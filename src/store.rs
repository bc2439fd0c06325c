// ABOUTME: In-memory orchestrator store used by the binary and the tests
// ABOUTME: Implements the actions and query boundary and drives the hook lifecycle

use crate::errors::Result;
use crate::lifecycle::{Actions, BuildHooks, QueryOutcome, SlideEdge, SlideQuery};
use crate::model::{Page, SlideNode, SourceNode, SLIDE_KIND};
use parking_lot::Mutex;

#[derive(Default)]
struct StoreInner {
    nodes: Vec<SlideNode>,
    pages: Vec<Page>,
    /// Pages created since the driver last drained them, so the page hook can
    /// be re-invoked for pages other handlers create.
    fresh: Vec<Page>,
}

/// Minimal node and page store standing in for the orchestrator's content
/// graph. Create, delete and query behave as atomic primitives.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every registered node, in registration order.
    pub fn nodes(&self) -> Vec<SlideNode> {
        self.inner.lock().nodes.clone()
    }

    /// Snapshot of every live page.
    pub fn pages(&self) -> Vec<Page> {
        self.inner.lock().pages.clone()
    }

    /// Rendered html of the node with the given id, if registered.
    pub fn node_html(&self, id: &str) -> Option<String> {
        self.inner
            .lock()
            .nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.html.clone())
    }

    fn take_fresh_pages(&self) -> Vec<Page> {
        std::mem::take(&mut self.inner.lock().fresh)
    }
}

impl Actions for MemoryStore {
    fn create_node(&self, node: SlideNode) {
        self.inner.lock().nodes.push(node);
    }

    fn create_page(&self, page: Page) {
        let mut inner = self.inner.lock();
        inner.pages.push(page.clone());
        inner.fresh.push(page);
    }

    fn delete_page(&self, page: &Page) {
        // Routes identify pages
        self.inner.lock().pages.retain(|p| p.path != page.path);
    }
}

impl SlideQuery for MemoryStore {
    fn all_slides(&self) -> QueryOutcome {
        let inner = self.inner.lock();
        QueryOutcome {
            data: inner
                .nodes
                .iter()
                .filter(|node| node.kind == SLIDE_KIND)
                .map(|node| SlideEdge {
                    html: node.html.clone(),
                })
                .collect(),
            errors: Vec::new(),
        }
    }
}

/// Drive one full build: feed every source node through the node hook, run
/// page creation, then invoke the page hook for every created page until no
/// handler creates another. Replacement pages are pages too and get the same
/// treatment; normalization converges because a normal route is left alone.
pub fn run_build(
    hooks: &dyn BuildHooks,
    store: &MemoryStore,
    sources: &[SourceNode],
) -> Result<()> {
    for node in sources {
        hooks.on_create_node(node, store)?;
    }
    hooks.create_pages(store, store)?;

    let mut pending = store.take_fresh_pages();
    while !pending.is_empty() {
        for page in &pending {
            hooks.on_create_page(page, store)?;
        }
        pending = store.take_fresh_pages();
    }
    Ok(())
}
