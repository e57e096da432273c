//! Property tests for RECORD digests.

use proptest::prelude::*;

use wheelsmith::RecordDigest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every digest is `sha256=` plus 43 URL-safe, unpadded characters.
    #[test]
    fn property_digest_format(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let digest = RecordDigest::from_bytes(&payload);
        prop_assert!(digest.as_str().starts_with("sha256="));
        let encoded = digest.encoded();
        prop_assert_eq!(encoded.len(), 43);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    /// PROPERTY: the digest depends only on the payload bytes.
    #[test]
    fn property_digest_deterministic(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
        let owned = payload.clone();
        prop_assert_eq!(RecordDigest::from_bytes(&payload), RecordDigest::from_bytes(&owned));
    }
}
