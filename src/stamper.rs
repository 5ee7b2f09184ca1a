//! API-key request stamping for the Turnkey API.
//!
//! Every request to the Turnkey API carries an `X-Stamp` header proving the
//! caller holds the private half of a registered P-256 API key. The stamp is
//! a base64url-encoded JSON envelope containing the hex public key, a scheme
//! identifier, and a DER-then-hex ECDSA signature over the exact request body
//! bytes.
//!
//! # Example
//!
//! ```rust
//! use turnkey_sdk::{generate_api_keypair, ApiKeyStamper, Stamper, StamperConfig};
//!
//! let (public_key, private_key) = generate_api_keypair();
//! let stamper = ApiKeyStamper::new(StamperConfig {
//!     api_public_key: public_key,
//!     api_private_key: private_key,
//! }).unwrap();
//!
//! let header = stamper.stamp(br#"{"organizationId":"abc"}"#).unwrap();
//! assert_eq!(header.name, "X-Stamp");
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine};
use p256::ecdsa::{
    signature::Signer as EcdsaSignerTrait, signature::Verifier as EcdsaVerifierTrait,
    Signature as P256Signature, SigningKey as P256SigningKey, VerifyingKey as P256VerifyingKey,
};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// HTTP header carrying the stamp on every API request.
pub const STAMP_HEADER_NAME: &str = "X-Stamp";

/// Scheme identifier the Turnkey verifier expects for P-256 API keys.
pub const SIGNATURE_SCHEME: &str = "SIGNATURE_SCHEME_TK_API_P256";

/// Trait for request stampers.
///
/// The HTTP transport is polymorphic over this single capability, so tests
/// can substitute a mock without key material (see [`crate::testing`]).
pub trait Stamper: Send + Sync {
    /// Produce a stamp header for the exact payload bytes.
    ///
    /// The payload must be the bytes that go on the wire as the request
    /// body. Any re-serialization between stamping and sending changes the
    /// signature and breaks verification server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the signing primitive fails.
    fn stamp(&self, payload: &[u8]) -> Result<StampHeader, Error>;
}

/// Configuration for an [`ApiKeyStamper`].
///
/// Both keys are hex strings: the public key is a 33-byte SEC1 compressed
/// point (66 hex chars, `02`/`03` prefix), the private key a 32-byte scalar.
#[derive(Debug, Clone)]
pub struct StamperConfig {
    /// Hex-encoded compressed P-256 public key.
    pub api_public_key: String,
    /// Hex-encoded P-256 private scalar.
    pub api_private_key: String,
}

/// The JSON envelope placed (base64url-encoded) in the stamp header.
///
/// Field order is fixed so the encoded stamp is reproducible in tests; the
/// server parses it order-independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stamp {
    /// Hex-encoded compressed public key of the signing API key.
    #[serde(rename = "publicKey")]
    pub public_key: String,
    /// Fixed scheme identifier, [`SIGNATURE_SCHEME`].
    pub scheme: String,
    /// Hex-encoded DER signature over the payload.
    pub signature: String,
}

impl Stamp {
    /// Decode a stamp header value back into its envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not base64url or not a valid
    /// envelope.
    pub fn decode(header_value: &str) -> Result<Self, Error> {
        let json = BASE64_URL
            .decode(header_value)
            .map_err(|e| Error::Encoding(format!("stamp is not valid base64url: {e}")))?;
        serde_json::from_slice(&json).map_err(Error::from)
    }
}

/// A ready-to-send stamp header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampHeader {
    /// Header name, always [`STAMP_HEADER_NAME`].
    pub name: &'static str,
    /// Base64url-encoded (no padding) JSON envelope.
    pub value: String,
}

/// Stamps request payloads with a Turnkey P-256 API key.
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// callers.
#[derive(Debug)]
pub struct ApiKeyStamper {
    signing_key: P256SigningKey,
    verifying_key: P256VerifyingKey,
    public_key_hex: String,
}

impl ApiKeyStamper {
    /// Create a stamper, validating the keypair up front.
    ///
    /// Validation order: both fields present and hex, public key is a
    /// 33-byte compressed point, private key is a valid P-256 scalar, and
    /// the public key derived from the scalar matches the configured one.
    /// A config that passes here cannot fail later for key reasons.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed key material and
    /// [`Error::InvalidKey`] for a bad scalar or a mismatched pair.
    pub fn new(config: StamperConfig) -> Result<Self, Error> {
        if config.api_public_key.is_empty() {
            return Err(Error::Config("api_public_key is empty".to_string()));
        }
        if config.api_private_key.is_empty() {
            return Err(Error::Config("api_private_key is empty".to_string()));
        }

        let public_bytes = hex::decode(&config.api_public_key)
            .map_err(|e| Error::Config(format!("api_public_key is not valid hex: {e}")))?;
        if public_bytes.len() != 33 || !matches!(public_bytes[0], 0x02 | 0x03) {
            return Err(Error::Config(format!(
                "api_public_key must be a 33-byte compressed point with an 02/03 prefix, got {} bytes with prefix {:02x}",
                public_bytes.len(),
                public_bytes.first().copied().unwrap_or(0),
            )));
        }

        let private_bytes = hex::decode(&config.api_private_key)
            .map_err(|e| Error::Config(format!("api_private_key is not valid hex: {e}")))?;
        let signing_key = P256SigningKey::from_slice(&private_bytes)
            .map_err(|e| Error::InvalidKey(format!("api_private_key is not a valid P-256 scalar: {e}")))?;
        let verifying_key = *signing_key.verifying_key();

        // The pair must actually belong together; signing with a mismatched
        // pair would produce stamps the server rejects with no local error.
        let derived_hex = hex::encode(verifying_key.to_encoded_point(true).as_bytes());
        if derived_hex != config.api_public_key.to_lowercase() {
            return Err(Error::InvalidKey(format!(
                "api_public_key does not match api_private_key: expected {derived_hex}, got {}",
                config.api_public_key
            )));
        }

        Ok(Self {
            signing_key,
            verifying_key,
            public_key_hex: derived_hex,
        })
    }

    /// Hex-encoded compressed public key of this stamper.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key_hex
    }

    /// Verify a DER-encoded signature over a payload (for testing).
    #[must_use]
    pub fn verify(&self, der_signature: &[u8], payload: &[u8]) -> bool {
        let Ok(sig) = P256Signature::from_der(der_signature) else {
            return false;
        };
        EcdsaVerifierTrait::verify(&self.verifying_key, payload, &sig).is_ok()
    }
}

impl Stamper for ApiKeyStamper {
    fn stamp(&self, payload: &[u8]) -> Result<StampHeader, Error> {
        // ECDSA over P-256 with SHA-256, DER-encoded then hex-encoded. The
        // signature itself is randomized; only the envelope encoding is
        // deterministic.
        let signature: P256Signature = self
            .signing_key
            .try_sign(payload)
            .map_err(|e| Error::Signing(e.to_string()))?;

        let stamp = Stamp {
            public_key: self.public_key_hex.clone(),
            scheme: SIGNATURE_SCHEME.to_string(),
            signature: hex::encode(signature.to_der().as_bytes()),
        };

        let json = serde_json::to_string(&stamp)?;

        Ok(StampHeader {
            name: STAMP_HEADER_NAME,
            value: BASE64_URL.encode(json.as_bytes()),
        })
    }
}

/// Generate a fresh P-256 API keypair as `(public_hex, private_hex)`.
///
/// The public key is SEC1 compressed (66 hex chars), the private key the raw
/// 32-byte scalar. This is the keypair format Turnkey registers for API keys.
#[must_use]
pub fn generate_api_keypair() -> (String, String) {
    let signing_key = P256SigningKey::random(&mut OsRng);
    let public_hex = hex::encode(signing_key.verifying_key().to_encoded_point(true).as_bytes());
    let private_hex = hex::encode(signing_key.to_bytes());
    (public_hex, private_hex)
}
