//! Process-wide handling of unhandled failures
//!
//! [`ErrorPolicy`] is installed once at startup and lives for the rest of
//! the process. It classifies two kinds of event:
//!
//! - [`Rejection`] - an async failure nobody handled. Those carrying the
//!   noisy signature are suppressed with a warning; all others are logged
//!   as errors. Either way the default action is prevented.
//! - [`ScriptError`] - an uncaught error. Those carrying the signature in
//!   their message, or raised from the noisy script file, are suppressed;
//!   all others pass through untouched.
//!
//! Matching is a plain substring check. Once installed, the policy also
//! serves as the panic hook: panics on worker threads are rejections,
//! panics on the main thread are script errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::boundary::panic_message;

/// Signature of a known noisy third-party failure
pub const NOISY_SIGNATURE: &str = "checkoutUrls";

/// Script file whose errors are always third-party noise
pub const NOISY_SCRIPT: &str = "content.js";

static POLICY: OnceLock<ErrorPolicy> = OnceLock::new();

/// The reason attached to an unhandled rejection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rejection {
    /// `message` property, if the reason has one
    pub message: Option<String>,
    /// Property names, if the reason is an object
    pub keys: Vec<String>,
    /// String form of the reason
    pub display: String,
}

impl Rejection {
    /// A reason that is only a message
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            display: message.clone(),
            message: Some(message),
            keys: Vec::new(),
        }
    }

    /// A reason built from an error value
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::from_message(error.to_string())
    }

    /// A reason given as arbitrary JSON
    pub fn from_json(value: &serde_json::Value) -> Self {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        let keys = value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default();
        let display = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self { message, keys, display }
    }

    fn mentions(&self, signature: &str) -> bool {
        self.message.as_deref().is_some_and(|m| m.contains(signature))
            || self.display.contains(signature)
            || self.keys.iter().any(|k| k == signature)
    }
}

/// An uncaught script error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptError {
    pub message: String,
    /// Source file the error was raised from
    pub filename: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            filename: filename.into(),
        }
    }
}

/// How an event was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Known noise: logged at warn
    Suppressed,
    /// Real failure: logged at error
    Logged,
    /// Left to the default handler
    PassedThrough,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    /// True when the default handler must not run
    pub default_prevented: bool,
}

impl Outcome {
    fn prevented(verdict: Verdict) -> Self {
        Self {
            verdict,
            default_prevented: true,
        }
    }
}

/// Filters unhandled failures by a known noisy signature
#[derive(Debug)]
pub struct ErrorPolicy {
    signature: String,
    noisy_script: String,
    suppressed: AtomicUsize,
    logged: AtomicUsize,
    passed_through: AtomicUsize,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPolicy {
    pub fn new() -> Self {
        Self {
            signature: NOISY_SIGNATURE.to_string(),
            noisy_script: NOISY_SCRIPT.to_string(),
            suppressed: AtomicUsize::new(0),
            logged: AtomicUsize::new(0),
            passed_through: AtomicUsize::new(0),
        }
    }

    /// Use a different noisy signature
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Use a different noisy script file
    pub fn with_noisy_script(mut self, filename: impl Into<String>) -> Self {
        self.noisy_script = filename.into();
        self
    }

    /// Install the process-wide policy and its panic hook
    ///
    /// Only the first call installs; later calls return the same policy.
    pub fn install() -> &'static ErrorPolicy {
        let mut installed = false;
        let policy = POLICY.get_or_init(|| {
            installed = true;
            ErrorPolicy::new()
        });
        if installed {
            policy.install_panic_hook();
            log::debug!("Error policy installed (signature {:?})", policy.signature);
        }
        policy
    }

    /// The installed policy, if any
    pub fn global() -> Option<&'static ErrorPolicy> {
        POLICY.get()
    }

    /// Classify an unhandled rejection
    pub fn handle_rejection(&self, rejection: &Rejection) -> Outcome {
        if rejection.mentions(&self.signature) {
            log::warn!("Suppressed error from browser extension: {}", rejection.display);
            self.suppressed.fetch_add(1, Ordering::Relaxed);
            return Outcome::prevented(Verdict::Suppressed);
        }

        log::error!("Unhandled promise rejection: {}", rejection.display);
        self.logged.fetch_add(1, Ordering::Relaxed);
        Outcome::prevented(Verdict::Logged)
    }

    /// Classify an uncaught script error
    pub fn handle_error(&self, error: &ScriptError) -> Outcome {
        if error.message.contains(&self.signature) || error.filename.contains(&self.noisy_script) {
            log::warn!("Suppressed error from browser extension: {}", error.message);
            self.suppressed.fetch_add(1, Ordering::Relaxed);
            return Outcome::prevented(Verdict::Suppressed);
        }

        self.passed_through.fetch_add(1, Ordering::Relaxed);
        Outcome {
            verdict: Verdict::PassedThrough,
            default_prevented: false,
        }
    }

    pub fn suppressed_count(&self) -> usize {
        self.suppressed.load(Ordering::Relaxed)
    }

    pub fn logged_count(&self) -> usize {
        self.logged.load(Ordering::Relaxed)
    }

    pub fn passed_through_count(&self) -> usize {
        self.passed_through.load(Ordering::Relaxed)
    }

    fn install_panic_hook(&'static self) {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let message = panic_message(info.payload());
            let on_main = std::thread::current().name() == Some("main");

            let outcome = if on_main {
                let filename = info
                    .location()
                    .map(|location| location.file().to_string())
                    .unwrap_or_default();
                self.handle_error(&ScriptError::new(message, filename))
            } else {
                self.handle_rejection(&Rejection::from_message(message))
            };

            if !outcome.default_prevented {
                previous(info);
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_message_suppressed() {
        let policy = ErrorPolicy::new();
        let outcome = policy.handle_rejection(&Rejection::from_message(
            "Cannot read properties of undefined (reading 'checkoutUrls')",
        ));
        assert_eq!(outcome.verdict, Verdict::Suppressed);
        assert!(outcome.default_prevented);
        assert_eq!(policy.suppressed_count(), 1);
        assert_eq!(policy.logged_count(), 0);
    }

    #[test]
    fn test_rejection_key_suppressed() {
        let policy = ErrorPolicy::new();
        let reason = Rejection::from_json(&json!({ "checkoutUrls": [] }));
        assert_eq!(policy.handle_rejection(&reason).verdict, Verdict::Suppressed);
    }

    #[test]
    fn test_other_rejection_logged_and_prevented() {
        let policy = ErrorPolicy::new();
        let outcome = policy.handle_rejection(&Rejection::from_json(&json!({
            "message": "network down"
        })));
        assert_eq!(outcome.verdict, Verdict::Logged);
        assert!(outcome.default_prevented);
        assert_eq!(policy.logged_count(), 1);
    }

    #[test]
    fn test_script_error_signature_or_file() {
        let policy = ErrorPolicy::new();
        let by_message = policy.handle_error(&ScriptError::new("checkoutUrls is null", "app.js"));
        assert_eq!(by_message.verdict, Verdict::Suppressed);
        assert!(by_message.default_prevented);

        let by_file = policy.handle_error(&ScriptError::new(
            "x is undefined",
            "chrome-extension://abc/content.js",
        ));
        assert_eq!(by_file.verdict, Verdict::Suppressed);
        assert_eq!(policy.suppressed_count(), 2);
    }

    #[test]
    fn test_other_script_error_passes_through() {
        let policy = ErrorPolicy::new();
        let outcome = policy.handle_error(&ScriptError::new("real bug", "src/main.rs"));
        assert_eq!(outcome.verdict, Verdict::PassedThrough);
        assert!(!outcome.default_prevented);
        assert_eq!(policy.passed_through_count(), 1);
    }

    #[test]
    fn test_from_json_string_reason() {
        let reason = Rejection::from_json(&json!("plain string"));
        assert_eq!(reason.display, "plain string");
        assert!(reason.message.is_none());
        assert!(reason.keys.is_empty());
    }

    #[test]
    fn test_custom_signature() {
        let policy = ErrorPolicy::new().with_signature("adblock");
        let outcome = policy.handle_rejection(&Rejection::from_message("adblock blew up"));
        assert_eq!(outcome.verdict, Verdict::Suppressed);
    }
}
