//! Mock stamper for testing.
//!
//! Lets transport and client tests assert exactly which bytes were stamped
//! without key material, and exercise signing-failure paths on demand.

use std::sync::Mutex;

use crate::error::Error;
use crate::stamper::{StampHeader, Stamper, STAMP_HEADER_NAME};

/// A [`Stamper`] that records payloads instead of signing them.
///
/// Returns a fixed, non-cryptographic header value. Configure it to fail to
/// test error propagation.
pub struct MockStamper {
    stamped: Mutex<Vec<Vec<u8>>>,
    fail_with: Mutex<Option<String>>,
}

impl MockStamper {
    /// Create a mock stamper that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stamped: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// Make subsequent `stamp` calls fail with a signing error.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().expect("lock poisoned") = Some(message.to_string());
    }

    /// All payloads stamped so far, in call order.
    #[must_use]
    pub fn stamped_payloads(&self) -> Vec<Vec<u8>> {
        self.stamped.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockStamper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stamper for MockStamper {
    fn stamp(&self, payload: &[u8]) -> Result<StampHeader, Error> {
        if let Some(message) = self.fail_with.lock().expect("lock poisoned").clone() {
            return Err(Error::Signing(message));
        }

        self.stamped
            .lock()
            .expect("lock poisoned")
            .push(payload.to_vec());

        Ok(StampHeader {
            name: STAMP_HEADER_NAME,
            value: "mock-stamp".to_string(),
        })
    }
}
