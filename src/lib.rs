// ABOUTME: Library module for the deck-slides program.
// ABOUTME: Contains the build-lifecycle handlers that derive slide pages from Markdown.

// Reexport modules
pub mod config;
pub mod emit;
pub mod errors;
pub mod generate;
pub mod lifecycle;
pub mod lint;
pub mod model;
pub mod paths;
pub mod slides;
pub mod store;

// Reexport common types and functions
pub use config::Config;
pub use errors::{DeckError, Result};
pub use lifecycle::{Actions, BuildHooks, DeckHooks, QueryOutcome, SlideEdge, SlideQuery};
pub use model::{Page, SlideNode, SourceNode};
pub use paths::normalized_path;
pub use slides::{content_digest, extract_slides, SLIDE_DELIMITER};
pub use store::{run_build, MemoryStore};
