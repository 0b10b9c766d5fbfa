//! PKCE (Proof Key for Code Exchange) implementation
//!
//! Implements RFC 7636 for OAuth 2.0 authorization code flow security

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// PKCE parameters for OAuth 2.0 authorization code flow
#[derive(Debug, Clone)]
pub struct PkceParams {
    pub code_verifier: String,
    pub code_challenge: String,
}

impl PkceParams {
    /// Generate new PKCE parameters
    ///
    /// Creates a random code verifier and computes the code challenge
    /// using SHA256: BASE64URL(SHA256(verifier))
    pub fn generate() -> Self {
        let code_verifier = generate_code_verifier();
        let code_challenge = code_challenge(&code_verifier);

        PkceParams {
            code_verifier,
            code_challenge,
        }
    }
}

/// Generate a random state parameter for CSRF protection
///
/// 32 bytes from the thread-local CSPRNG, base64url-encoded (43 characters).
pub fn generate_state() -> String {
    random_urlsafe(32)
}

/// Generate a PKCE code verifier
///
/// 64 bytes of entropy, base64url-encoded to 86 characters. RFC 7636
/// requires 43-128 characters from the unreserved set; base64url output
/// (A-Z, a-z, 0-9, `-`, `_`) satisfies that.
pub fn generate_code_verifier() -> String {
    random_urlsafe(64)
}

/// Compute the S256 code challenge for a verifier
///
/// BASE64URL(SHA256(verifier)) with padding stripped, exactly the transform
/// the provider applies when verifying the token exchange.
pub fn code_challenge(verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

fn random_urlsafe(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}
