//! Per-view remote document state

use crate::documents::DocumentKind;
use crate::error::ContentError;

/// What a view currently has to show for a remote document
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    /// First load still in flight
    Loading,
    /// Document available
    Ready(T),
    /// First load failed; carries the failure message
    Failed(String),
}

/// Load state of one document as seen by one view
///
/// Every fetch is issued with a fresh generation from
/// [`begin_refresh`](Self::begin_refresh). Responses older than the latest
/// issued generation are discarded, so rapid refreshes cannot leave the view
/// showing a stale response. A failed refresh keeps the last good document.
#[derive(Debug, Clone)]
pub struct Remote<T> {
    kind: DocumentKind,
    state: RemoteState<T>,
    refreshing: bool,
    issued: u64,
}

impl<T> Remote<T> {
    /// New state for `kind`, waiting on its first load
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            state: RemoteState::Loading,
            refreshing: false,
            issued: 0,
        }
    }

    /// Issue the generation for a new fetch
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued += 1;
        self.refreshing = true;
        if let RemoteState::Failed(_) = self.state {
            self.state = RemoteState::Loading;
        }
        self.issued
    }

    /// Apply a fetch result; returns false if it was stale and dropped
    pub fn apply(&mut self, generation: u64, result: Result<T, ContentError>) -> bool {
        if generation < self.issued {
            log::debug!(
                "Discarding stale {} response (generation {} < {})",
                self.kind,
                generation,
                self.issued
            );
            return false;
        }

        match result {
            Ok(document) => {
                log::info!("Loaded {}", self.kind);
                self.state = RemoteState::Ready(document);
            }
            Err(err) => {
                log::error!("Error fetching {}: {}", self.kind, err);
                if !matches!(self.state, RemoteState::Ready(_)) {
                    self.state = RemoteState::Failed(err.to_string());
                }
            }
        }
        self.refreshing = false;
        true
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn state(&self) -> &RemoteState<T> {
        &self.state
    }

    /// The document, if one has loaded
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            RemoteState::Ready(document) => Some(document),
            _ => None,
        }
    }

    /// True while no document is available and a fetch is pending
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RemoteState::Loading)
    }

    /// True while any fetch is in flight
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, RemoteState::Failed(_))
    }

    /// Latest generation issued
    pub fn generation(&self) -> u64 {
        self.issued
    }

    /// Forget everything, back to the initial loading state
    pub fn reset(&mut self) {
        self.state = RemoteState::Loading;
        self.refreshing = false;
    }
}
