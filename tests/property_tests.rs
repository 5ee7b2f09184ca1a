//! Property-based tests for the API-key stamper.
//!
//! These validate the header contract across arbitrary payload bytes.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
use proptest::prelude::*;

use turnkey_sdk::{
    generate_api_keypair, ApiKeyStamper, Stamp, Stamper, StamperConfig, SIGNATURE_SCHEME,
};

fn fresh_stamper() -> ApiKeyStamper {
    let (public_key, private_key) = generate_api_keypair();
    ApiKeyStamper::new(StamperConfig {
        api_public_key: public_key,
        api_private_key: private_key,
    })
    .expect("generated keypair should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every stamp over any byte payload decodes to the fixed
    /// envelope shape and verifies against the embedded public key.
    #[test]
    fn any_payload_stamps_and_verifies(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        let stamper = fresh_stamper();
        let header = stamper.stamp(&payload).expect("stamping should succeed");

        // Encoding wrapper is deterministic and unpadded base64url.
        prop_assert!(!header.value.contains('='));
        let decoded = URL_SAFE_NO_PAD.decode(&header.value).expect("base64url");
        let stamp: Stamp = serde_json::from_slice(&decoded).expect("envelope JSON");

        prop_assert_eq!(stamp.scheme.as_str(), SIGNATURE_SCHEME);
        prop_assert_eq!(stamp.public_key.as_str(), stamper.public_key());

        // Signature verifies against the exact payload bytes.
        let public_bytes = hex::decode(&stamp.public_key).expect("hex public key");
        let verifying_key = VerifyingKey::from_sec1_bytes(&public_bytes).expect("P-256 point");
        let der = hex::decode(&stamp.signature).expect("hex signature");
        let signature = Signature::from_der(&der).expect("DER signature");
        prop_assert!(verifying_key.verify(&payload, &signature).is_ok());
    }

    /// Property: a stamp never verifies against a mutated payload.
    #[test]
    fn stamp_rejects_mutated_payload(
        payload in prop::collection::vec(any::<u8>(), 1..512),
        flip_index in any::<prop::sample::Index>(),
    ) {
        let stamper = fresh_stamper();
        let header = stamper.stamp(&payload).expect("stamping should succeed");

        let mut mutated = payload.clone();
        let i = flip_index.index(mutated.len());
        mutated[i] ^= 0x01;

        let stamp = Stamp::decode(&header.value).expect("should decode");
        let der = hex::decode(&stamp.signature).expect("hex signature");
        prop_assert!(stamper.verify(&der, &payload));
        prop_assert!(!stamper.verify(&der, &mutated));
    }

    /// Property: decoding is idempotent even though signing is randomized.
    #[test]
    fn decode_is_idempotent(payload in prop::collection::vec(any::<u8>(), 0..256)) {
        let stamper = fresh_stamper();
        let header = stamper.stamp(&payload).expect("stamping should succeed");

        let first = Stamp::decode(&header.value).expect("should decode");
        let second = Stamp::decode(&header.value).expect("should decode");
        prop_assert_eq!(first, second);
    }
}
