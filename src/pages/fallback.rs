use super::{Block, Page};
use crate::router::Route;

/// Replaces the whole interface after an uncaught rendering error
pub fn fallback_page(route: Route) -> Page {
    Page::new(route).with_blocks([
        Block::Banner("Oops!".to_string()),
        Block::Text("Something went wrong. Please refresh the page.".to_string()),
        Block::Button("Refresh Page".to_string()),
    ])
}
