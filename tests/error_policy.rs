//! The installed error policy as the process panic hook
//!
//! Kept in its own test binary: installing replaces the panic hook for the
//! whole process.

use hazesite::error_policy::{ErrorPolicy, Rejection, ScriptError, Verdict};
use serial_test::serial;

#[test]
#[serial]
fn test_install_is_idempotent() {
    let first = ErrorPolicy::install() as *const ErrorPolicy;
    let second = ErrorPolicy::install() as *const ErrorPolicy;
    assert_eq!(first, second);
    assert!(ErrorPolicy::global().is_some());
}

#[test]
#[serial]
fn test_worker_panic_with_signature_is_suppressed() {
    let policy = ErrorPolicy::install();
    let before = policy.suppressed_count();

    let joined = std::thread::spawn(|| {
        panic!("TypeError: Cannot read properties of undefined (reading 'checkoutUrls')");
    })
    .join();

    // The worker still unwinds; only the report is suppressed
    assert!(joined.is_err());
    assert_eq!(policy.suppressed_count(), before + 1);
}

#[test]
#[serial]
fn test_other_worker_panic_is_logged() {
    let policy = ErrorPolicy::install();
    let before = policy.logged_count();

    let joined = std::thread::Builder::new()
        .name("loader".to_string())
        .spawn(|| panic!("worker fell over"))
        .unwrap()
        .join();

    assert!(joined.is_err());
    assert_eq!(policy.logged_count(), before + 1);
}

#[test]
#[serial]
fn test_global_error_event_with_signature() {
    let policy = ErrorPolicy::install();
    let outcome = policy.handle_error(&ScriptError::new(
        "Uncaught TypeError: checkoutUrls is not iterable",
        "https://example.com/assets/index.js",
    ));
    assert_eq!(outcome.verdict, Verdict::Suppressed);
    assert!(outcome.default_prevented);

    let outcome = policy.handle_rejection(&Rejection::from_message("fetch failed"));
    assert_eq!(outcome.verdict, Verdict::Logged);
    assert!(outcome.default_prevented);
}
