//! Custom test assertions
//!
//! Checks on the JSON bodies the relay hands back to callers.

use serde_json::Value;

/// Assertions for relay response bodies
pub trait RelayBodyAssertions {
    /// Assert the body is a success object carrying `text`
    fn assert_success_with(&self, text: &str);

    /// Assert the body is a failure object with exactly `error`
    fn assert_failure(&self, error: &str);

    /// Assert the body is a failure object whose error starts with `prefix`
    fn assert_failure_starting_with(&self, prefix: &str);
}

impl RelayBodyAssertions for Value {
    fn assert_success_with(&self, text: &str) {
        assert_eq!(self["success"], true, "expected success body, got {}", self);
        assert_eq!(self["response"], text);
        assert!(
            self["timestamp"].is_i64(),
            "expected numeric timestamp, got {}",
            self["timestamp"]
        );
    }

    fn assert_failure(&self, error: &str) {
        let object = self.as_object().expect("body should be an object");
        assert_eq!(object.len(), 2, "failure body has extra keys: {}", self);
        assert_eq!(self["success"], false);
        assert_eq!(self["error"], error);
    }

    fn assert_failure_starting_with(&self, prefix: &str) {
        assert_eq!(self["success"], false, "expected failure body, got {}", self);
        let error = self["error"].as_str().expect("error should be a string");
        assert!(
            error.starts_with(prefix),
            "expected error starting with {:?}, got {:?}",
            prefix,
            error
        );
    }
}
