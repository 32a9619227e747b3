//! HMAC signing and verification for pixel request parameters.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Separator joining the signed parts. Fixed so that a signature computed
/// when the link was issued stays valid for every later open.
const PART_SEPARATOR: &str = "|";

/// Computes and verifies a keyed MAC over an ordered tuple of tracking
/// identifiers.
///
/// The signature is a pure function of (secret, parts) with no nonce or
/// timestamp component. This is intentional: it allows a signed link to be
/// embedded once in a static pixel URL and remain valid for repeated opens.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Creates a signer with the shared secret loaded once from configuration.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Signs the ordered parts, returning a 64-character lowercase
    /// hex-encoded HMAC-SHA256 digest.
    pub fn sign(&self, parts: &[&str]) -> String {
        hex::encode(self.mac(parts).finalize().into_bytes())
    }

    /// Verifies a hex-encoded digest against the signature of `parts`.
    ///
    /// Comparison is constant-time via the MAC's own verification. Any
    /// malformed hex input simply fails verification.
    pub fn verify(&self, provided: &str, parts: &[&str]) -> bool {
        let Ok(provided_bytes) = hex::decode(provided) else {
            return false;
        };

        self.mac(parts).verify_slice(&provided_bytes).is_ok()
    }

    fn mac(&self, parts: &[&str]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(parts.join(PART_SEPARATOR).as_bytes());
        mac
    }
}
