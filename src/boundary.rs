//! Top-level error boundary around page rendering

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crate::pages::{fallback_page, Page};
use crate::router::Route;

/// Catches rendering failures and swaps the whole interface for a fallback
///
/// Once tripped the boundary keeps showing the fallback until
/// [`reload`](Self::reload); no view state survives the recovery.
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    error: Option<String>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page, or the fallback if building panics or the boundary has tripped
    pub fn render<F>(&mut self, route: Route, build: F) -> Page
    where
        F: FnOnce() -> Page,
    {
        if self.error.is_some() {
            return fallback_page(route);
        }

        match panic::catch_unwind(AssertUnwindSafe(build)) {
            Ok(page) => page,
            Err(payload) => {
                self.fail(panic_message(payload.as_ref()));
                fallback_page(route)
            }
        }
    }

    /// Trip the boundary with an error raised outside of `render`
    pub fn fail(&mut self, error: impl Display) {
        log::error!("ErrorBoundary caught an error: {}", error);
        self.error = Some(error.to_string());
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The message of the error that tripped the boundary
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the error (the "Refresh Page" action)
    pub fn reload(&mut self) {
        if self.error.take().is_some() {
            log::info!("Error boundary reset");
        }
    }
}

/// Text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Block;

    fn ok_page() -> Page {
        Page::new(Route::Home).with_blocks([Block::Text("fine".to_string())])
    }

    #[test]
    fn test_passes_through_healthy_page() {
        let mut boundary = ErrorBoundary::new();
        let page = boundary.render(Route::Home, ok_page);
        assert!(page.contains_text("fine"));
        assert!(!boundary.has_error());
    }

    #[test]
    fn test_panic_shows_fallback() {
        let mut boundary = ErrorBoundary::new();
        let page = boundary.render(Route::Home, || panic!("bad render"));
        assert!(page.contains_text("Oops!"));
        assert!(page.contains_text("Something went wrong. Please refresh the page."));
        assert!(page.contains_text("Refresh Page"));
        assert_eq!(boundary.error(), Some("bad render"));
    }

    #[test]
    fn test_stays_tripped_until_reload() {
        let mut boundary = ErrorBoundary::new();
        boundary.fail("boom");

        let page = boundary.render(Route::Home, ok_page);
        assert!(!page.contains_text("fine"));
        assert!(page.contains_text("Oops!"));

        boundary.reload();
        let page = boundary.render(Route::Home, ok_page);
        assert!(page.contains_text("fine"));
    }

    #[test]
    fn test_panic_message_formats() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
