//! Test doubles for the Turnkey SDK.

pub mod mock;

// Re-exports
pub use mock::MockStamper;
