//! Document sources
//!
//! A [`DocumentSource`] answers a [`DocumentRequest`] with the raw document
//! text. Sources are shared with the loader's worker thread, so they must be
//! `Send + Sync`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ContentError;
use crate::request::DocumentRequest;

/// Something that can serve site documents
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw text of the requested document
    fn fetch(&self, request: &DocumentRequest) -> Result<String, ContentError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Serves documents from a static directory (the site's `public/` folder)
///
/// The base path and the cache-busting query play no part in locating the
/// file; only the document path does.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, request: &DocumentRequest) -> Result<PathBuf, ContentError> {
        let relative = request.path().trim_start_matches('/');
        // Keep lookups inside the root
        if relative.split('/').any(|part| part == "..") {
            return Err(ContentError::NotFound(request.path().to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl DocumentSource for DirSource {
    fn fetch(&self, request: &DocumentRequest) -> Result<String, ContentError> {
        let file = self.resolve(request)?;
        log::debug!("Reading {} from {}", request.url(), file.display());
        std::fs::read_to_string(&file).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound(request.path().to_string()),
            _ => ContentError::Io(err),
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// In-memory documents keyed by site path
///
/// Paths with a registered failure answer with that failure instead.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: Mutex<HashMap<String, String>>,
    failures: Mutex<HashMap<String, u16>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_document(self, path: &str, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    /// Serve `body` at `path`, replacing any earlier body or failure
    pub fn insert(&self, path: &str, body: impl Into<String>) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.remove(path);
        }
        if let Ok(mut documents) = self.documents.lock() {
            documents.insert(path.to_string(), body.into());
        }
    }

    /// Answer requests for `path` with an HTTP failure status
    pub fn fail(&self, path: &str, status: u16) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(path.to_string(), status);
        }
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, request: &DocumentRequest) -> Result<String, ContentError> {
        let path = request.path();
        let failure = self
            .failures
            .lock()
            .map_err(|_| ContentError::Transport("document store poisoned".to_string()))?
            .get(path)
            .copied();
        if let Some(status) = failure {
            return Err(ContentError::Http(status));
        }
        self.documents
            .lock()
            .map_err(|_| ContentError::Transport("document store poisoned".to_string()))?
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }

    fn describe(&self) -> String {
        "in-memory documents".to_string()
    }
}

/// Fetches documents with HTTP GET from a deployed origin
///
/// No timeout and no retry: a request either completes or fails once.
#[cfg(feature = "network")]
pub struct HttpSource {
    origin: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl HttpSource {
    /// Create a source for `origin` (e.g. `https://example.github.io`)
    pub fn new(origin: impl Into<String>) -> Result<Self, ContentError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| ContentError::Transport(e.to_string()))?;
        Ok(Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Absolute URL for a request
    pub fn url_for(&self, request: &DocumentRequest) -> String {
        format!("{}{}", self.origin, request.url())
    }
}

#[cfg(feature = "network")]
impl DocumentSource for HttpSource {
    fn fetch(&self, request: &DocumentRequest) -> Result<String, ContentError> {
        let url = self.url_for(request);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentError::Http(response.status().as_u16()));
        }

        response
            .text()
            .map_err(|e| ContentError::Transport(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("origin {}", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("haze_content_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_dir_source_reads_file_ignoring_query_and_base() {
        let root = temp_root("dir_read");
        std::fs::write(root.join("profile.json"), r#"{"name":"Haze"}"#).unwrap();

        let source = DirSource::new(&root);
        let request = DocumentRequest::new("/hazesite/", "/profile.json", 123);
        let text = source.fetch(&request).unwrap();
        assert!(text.contains("Haze"));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_dir_source_missing_file_is_not_found() {
        let root = temp_root("dir_missing");
        let source = DirSource::new(&root);
        let err = source
            .fetch(&DocumentRequest::new("/", "/games.json", 1))
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound(ref p) if p == "/games.json"));
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_dir_source_rejects_parent_segments() {
        let source = DirSource::new("/tmp");
        let err = source
            .fetch(&DocumentRequest::new("/", "/../etc/passwd", 1))
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }

    #[test]
    fn test_memory_source_serves_and_fails() {
        let source = MemorySource::new().with_document("/music.json", r#"{"songs":[]}"#);
        let request = DocumentRequest::new("/", "/music.json", 1);
        assert_eq!(source.fetch(&request).unwrap(), r#"{"songs":[]}"#);

        source.fail("/music.json", 500);
        assert!(matches!(source.fetch(&request), Err(ContentError::Http(500))));

        source.insert("/music.json", "{}");
        assert_eq!(source.fetch(&request).unwrap(), "{}");
    }

    #[test]
    fn test_memory_source_unknown_path() {
        let source = MemorySource::new();
        let request = DocumentRequest::new("/", "/movies.json", 1);
        assert!(matches!(source.fetch(&request), Err(ContentError::NotFound(_))));
    }
}
