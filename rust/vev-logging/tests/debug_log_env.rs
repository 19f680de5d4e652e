//! Runs in its own process so the env switch is set before `debug_enabled` caches it.

use vev_logging::{debug_enabled, debug_log, DEBUG_LOG_ENV};

#[test]
fn env_switch_enables_debug_log() {
    std::env::set_var(DEBUG_LOG_ENV, "1");
    assert!(debug_enabled());
    // Cached for the rest of the process.
    std::env::set_var(DEBUG_LOG_ENV, "0");
    assert!(debug_enabled());
    debug_log("debug_log_env", "enabled", serde_json::json!({ "ok": true }));
}
