// ABOUTME: Configuration module for the deck-slides library
// ABOUTME: Holds the project root and the conventional template and slide locations

use std::path::PathBuf;

/// Build configuration shared by the lifecycle handlers.
///
/// The project root is passed in explicitly; nothing here reads the process
/// working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the site project. All conventional locations resolve against it.
    pub project_root: PathBuf,
    /// Template component rendered for every slide page, relative to the root.
    pub template_component: PathBuf,
    /// Source location named in each generated page's context, relative to the root.
    pub slides_source: PathBuf,
}

impl Config {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            template_component: PathBuf::from("src/templates/slide"),
            slides_source: PathBuf::from("src/slides"),
        }
    }

    /// Resolved path of the slide template component.
    pub fn template_path(&self) -> PathBuf {
        self.project_root.join(&self.template_component)
    }

    /// Resolved path of the slides source referenced by page contexts.
    pub fn slides_path(&self) -> PathBuf {
        self.project_root.join(&self.slides_source)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
