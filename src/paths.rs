// ABOUTME: Page path normalization handler
// ABOUTME: Strips trailing slashes from page routes, replacing changed pages

use crate::lifecycle::Actions;
use crate::model::Page;
use log::debug;

/// Candidate route with exactly one trailing slash removed. Returns `None`
/// when the route is already normal; the root route `/` is never touched.
pub fn normalized_path(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }
    path.strip_suffix('/').map(str::to_string)
}

/// Replace `page` with a copy at the normalized route when it differs.
pub fn normalize_page(page: &Page, actions: &dyn Actions) {
    if let Some(path) = normalized_path(&page.path) {
        debug!("Normalizing page route {} -> {}", page.path, path);
        // Remove the old page, then add the replacement
        actions.delete_page(page);
        let mut replacement = page.clone();
        replacement.path = path;
        actions.create_page(replacement);
    }
}
