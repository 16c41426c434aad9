//! Cache-busting document requests

use std::time::{SystemTime, UNIX_EPOCH};

/// A GET for one document with a cache-busting timestamp query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    base_path: String,
    path: String,
    timestamp_ms: u64,
}

impl DocumentRequest {
    /// Build a request for `path` (e.g. `/profile.json`) under `base_path`
    pub fn new(base_path: &str, path: &str, timestamp_ms: u64) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            path: format!("/{}", path.trim_start_matches('/')),
            timestamp_ms,
        }
    }

    /// Build a request stamped with the current time
    pub fn now(base_path: &str, path: &str) -> Self {
        Self::new(base_path, path, timestamp_millis())
    }

    /// Site path of the document, without base path or query
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Normalized base path the site is deployed under
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Full request URL relative to the origin: `<base>profile.json?t=<ms>`
    pub fn url(&self) -> String {
        format!(
            "{}{}?t={}",
            self.base_path,
            self.path.trim_start_matches('/'),
            self.timestamp_ms
        )
    }
}

/// Milliseconds since the Unix epoch (0 if the clock is before it)
pub fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Normalize a deployment base path
///
/// Trims whitespace; an empty value or `/` becomes `/`; anything else gets
/// a leading and trailing `/`.
pub fn normalize_base_path(raw: &str) -> String {
    let base = raw.trim();
    if base.is_empty() || base == "/" {
        return "/".to_string();
    }
    let mut normalized = String::with_capacity(base.len() + 2);
    if !base.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(base);
    if !base.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Router basename for a base path: `/` stays `/`, otherwise the trailing
/// slash is dropped
pub fn router_basename(base_path: &str) -> String {
    let normalized = normalize_base_path(base_path);
    if normalized == "/" {
        normalized
    } else {
        normalized.trim_end_matches('/').to_string()
    }
}
