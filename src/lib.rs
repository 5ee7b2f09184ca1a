//! Turnkey SDK for Rust
//!
//! Client SDK for the Turnkey API: typed request/response shapes, a stamped
//! HTTP client, and the API-key request stamper that authenticates every
//! call.
//!
//! # Quick Start
//!
//! ```rust
//! use turnkey_sdk::{generate_api_keypair, ApiKeyStamper, Stamp, Stamper, StamperConfig};
//!
//! // Generate a new P-256 API keypair
//! let (public_key, private_key) = generate_api_keypair();
//!
//! // Stamp a request payload
//! let stamper = ApiKeyStamper::new(StamperConfig {
//!     api_public_key: public_key,
//!     api_private_key: private_key,
//! }).unwrap();
//! let header = stamper.stamp(br#"{"organizationId":"abc"}"#).unwrap();
//! assert_eq!(header.name, "X-Stamp");
//!
//! // The header value decodes back to the signed envelope
//! let stamp = Stamp::decode(&header.value).unwrap();
//! assert_eq!(stamp.scheme, "SIGNATURE_SCHEME_TK_API_P256");
//! ```

pub mod client;
pub mod clients;
pub mod error;
pub mod stamper;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::{TurnkeyClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use clients::{ActivitiesClient, ApiKeysClient, OrganizationsClient, UsersClient};
pub use error::{ApiError, Error, ErrorCode};
pub use stamper::{
    generate_api_keypair, ApiKeyStamper, Stamp, StampHeader, Stamper, StamperConfig,
    SIGNATURE_SCHEME, STAMP_HEADER_NAME,
};
pub use transport::{HttpTransport, PollingConfig, SignedRequest, CLIENT_VERSION};
pub use types::{
    Activity, ActivityStatus, ApiKey, ApiKeyCurve, ApiKeyParams, User, WhoamiResponse,
};
