use super::{Block, Page};
use crate::router::{Route, Router};

/// Catch-all page; the attempted path is logged by the caller
pub fn not_found_page(router: &Router) -> Page {
    Page::new(Route::NotFound).with_blocks([
        Block::Banner("404".to_string()),
        Block::Text("Oops! Page not found".to_string()),
        Block::Button(format!("Return to Home ({})", router.href(Route::Home))),
    ])
}
