//! Content error types

use std::fmt;
use std::io;

use crate::documents::DocumentKind;

/// Error type for document fetches
#[derive(Debug)]
pub enum ContentError {
    /// IO error reading a local document
    Io(io::Error),
    /// Server answered with a non-success status
    Http(u16),
    /// Request could not be completed (connection refused, DNS, body read)
    Transport(String),
    /// Document is not valid JSON for its type
    Parse(serde_json::Error),
    /// No document at the requested path
    NotFound(String),
    /// A loaded document was handed to a view expecting another kind
    WrongKind {
        expected: DocumentKind,
        found: DocumentKind,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(err) => write!(f, "Content IO error: {}", err),
            ContentError::Http(status) => write!(f, "HTTP error! status: {}", status),
            ContentError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ContentError::Parse(err) => write!(f, "Content parse error: {}", err),
            ContentError::NotFound(path) => write!(f, "Document not found: {}", path),
            ContentError::WrongKind { expected, found } => {
                write!(f, "Expected {} document, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io(err) => Some(err),
            ContentError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ContentError {
    fn from(err: io::Error) -> Self {
        ContentError::Io(err)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_http_error_display() {
        let msg = format!("{}", ContentError::Http(404));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_io_error_has_source() {
        let err = ContentError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("denied"));
    }

    #[test]
    fn test_wrong_kind_display() {
        let err = ContentError::WrongKind {
            expected: DocumentKind::Movies,
            found: DocumentKind::Games,
        };
        assert_eq!(format!("{}", err), "Expected movies document, got games");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContentError = json_err.into();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(format!("{}", err).contains("parse error"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ContentError::NotFound("/games.json".to_string());
        assert!(format!("{}", err).contains("/games.json"));
        assert!(err.source().is_none());
    }
}
