//! Tests for the list2d tracing setup.

use std::sync::Mutex;

use list2d_core::tracing::setup::{init_tracing, LOG_ENV_VAR};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_list2d_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    // Output goes to stderr; we only verify initialization succeeds.
    std::env::set_var(LOG_ENV_VAR, "debug");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_per_module_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "list2d_manipulator=debug,list2d_core=warn");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "this_is=garbage=not=a=filter");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}
