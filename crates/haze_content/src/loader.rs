//! Background document loading
//!
//! The [`ContentLoader`] fetches and parses documents off the calling thread
//! and hands results back over a channel. Every request runs on its own
//! worker, so a slow fetch never holds up the ones issued after it, and
//! results arrive in completion order. Loads are fire-and-forget: there is
//! no cancellation, retry or timeout. Each request carries a caller-chosen
//! generation so the receiving view can tell a stale response from the
//! latest one.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::documents::{Document, DocumentKind, LoadedDocument};
use crate::error::ContentError;
use crate::request::DocumentRequest;
use crate::source::DocumentSource;

/// One in-flight fetch
struct LoadRequest {
    kind: DocumentKind,
    generation: u64,
    request: DocumentRequest,
}

impl LoadRequest {
    fn run(self, source: &dyn DocumentSource) -> LoadResult {
        let result = source
            .fetch(&self.request)
            .and_then(|text| self.kind.parse(&text));
        LoadResult {
            kind: self.kind,
            generation: self.generation,
            result,
        }
    }
}

/// Result of a background document load
#[derive(Debug)]
pub struct LoadResult {
    /// Which document was requested
    pub kind: DocumentKind,
    /// Generation the request was issued with
    pub generation: u64,
    /// The parsed document or the failure
    pub result: Result<LoadedDocument, ContentError>,
}

impl LoadResult {
    /// Site path of the requested document
    pub fn path(&self) -> &'static str {
        self.kind.path()
    }
}

/// Background document loader, one worker thread per request
///
/// # Example
/// ```ignore
/// let loader = ContentLoader::new(DirSource::new("public"), "/");
/// loader.request::<Profile>(1);
///
/// // Later, once per frame:
/// for loaded in loader.poll_all() {
///     match loaded.result {
///         Ok(document) => { /* hand to the view */ }
///         Err(e) => { /* log and show failure */ }
///     }
/// }
/// ```
pub struct ContentLoader {
    source: Arc<dyn DocumentSource>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
    base_path: String,
}

impl ContentLoader {
    /// Create a loader serving from `source`, with requests built under `base_path`
    pub fn new(source: impl DocumentSource + 'static, base_path: impl Into<String>) -> Self {
        Self::with_shared(Arc::new(source), base_path)
    }

    /// Create a loader around an already shared source
    pub fn with_shared(source: Arc<dyn DocumentSource>, base_path: impl Into<String>) -> Self {
        let (result_tx, result_rx) = channel::<LoadResult>();

        log::debug!("Content loader serving from {}", source.describe());

        Self {
            source,
            sender: result_tx,
            receiver: result_rx,
            base_path: base_path.into(),
        }
    }

    /// Request document `D` in the background
    pub fn request<D: Document>(&self, generation: u64) {
        self.request_kind(D::KIND, generation);
    }

    /// Request a document by kind, stamped with the current time
    pub fn request_kind(&self, kind: DocumentKind, generation: u64) {
        let request = DocumentRequest::now(&self.base_path, kind.path());
        self.submit(kind, generation, request);
    }

    /// Submit a fully built request
    pub fn submit(&self, kind: DocumentKind, generation: u64, request: DocumentRequest) {
        log::debug!("Fetching {} (generation {})", request.url(), generation);
        let load = LoadRequest { kind, generation, request };
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        let spawned = thread::Builder::new()
            .name(format!("content-{}", kind))
            .spawn(move || {
                // Receiver dropped: the loader is gone and nobody wants it
                let _ = sender.send(load.run(source.as_ref()));
            });
        if let Err(err) = spawned {
            log::warn!("Could not start {} fetch: {}", kind, err);
        }
    }

    /// Check for one finished load (non-blocking)
    pub fn poll(&self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect every finished load (non-blocking)
    pub fn poll_all(&self) -> Vec<LoadResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        results
    }

    /// Wait for one finished load, up to `timeout`
    pub fn wait(&self, timeout: std::time::Duration) -> Option<LoadResult> {
        self.receiver.recv_timeout(timeout).ok()
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{Profile, MusicLibrary};
    use crate::source::MemorySource;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(2);

    #[test]
    fn test_poll_returns_none_when_empty() {
        let loader = ContentLoader::new(MemorySource::new(), "/");
        assert!(loader.poll().is_none());
        assert!(loader.poll_all().is_empty());
    }

    #[test]
    fn test_load_profile() {
        let source = MemorySource::new().with_document("/profile.json", r#"{"name":"Haze"}"#);
        let loader = ContentLoader::new(source, "/");
        loader.request::<Profile>(7);

        let loaded = loader.wait(WAIT).unwrap();
        assert_eq!(loaded.kind, DocumentKind::Profile);
        assert_eq!(loaded.generation, 7);
        assert_eq!(loaded.path(), "/profile.json");
        match loaded.result.unwrap() {
            LoadedDocument::Profile(profile) => assert_eq!(profile.name, "Haze"),
            other => panic!("unexpected document {:?}", other),
        }
    }

    #[test]
    fn test_missing_document_is_error() {
        let loader = ContentLoader::new(MemorySource::new(), "/");
        loader.request::<MusicLibrary>(1);
        let loaded = loader.wait(WAIT).unwrap();
        assert!(matches!(loaded.result, Err(ContentError::NotFound(_))));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let source = MemorySource::new().with_document("/music.json", "<html>");
        let loader = ContentLoader::new(source, "/");
        loader.request::<MusicLibrary>(1);
        let loaded = loader.wait(WAIT).unwrap();
        assert!(matches!(loaded.result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_every_request_answers() {
        let source = MemorySource::new()
            .with_document("/profile.json", "{}")
            .with_document("/music.json", "{}");
        let loader = ContentLoader::new(source, "/");
        loader.request::<Profile>(1);
        loader.request::<MusicLibrary>(2);
        loader.request::<Profile>(3);

        let mut generations: Vec<u64> = (0..3)
            .filter_map(|_| loader.wait(WAIT))
            .map(|r| r.generation)
            .collect();
        generations.sort_unstable();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    /// Holds `/profile.json` for a while before answering
    struct SlowProfile {
        inner: MemorySource,
        delay: Duration,
    }

    impl DocumentSource for SlowProfile {
        fn fetch(&self, request: &DocumentRequest) -> Result<String, ContentError> {
            if request.path() == "/profile.json" {
                std::thread::sleep(self.delay);
            }
            self.inner.fetch(request)
        }

        fn describe(&self) -> String {
            "slow profile".to_string()
        }
    }

    #[test]
    fn test_slow_fetch_does_not_block_later_requests() {
        let source = SlowProfile {
            inner: MemorySource::new()
                .with_document("/profile.json", "{}")
                .with_document("/music.json", "{}"),
            delay: Duration::from_secs(3),
        };
        let loader = ContentLoader::new(source, "/");
        loader.request::<Profile>(1);
        loader.request::<MusicLibrary>(2);

        let first = loader.wait(Duration::from_millis(1500)).unwrap();
        assert_eq!(first.kind, DocumentKind::Music);
        assert_eq!(first.generation, 2);
    }
}
