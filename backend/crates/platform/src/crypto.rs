//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac, digest::KeyInit};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// HMAC zero-pads keys shorter than the 64-byte block, so padding here
/// yields the same MAC as keying with the raw 32 bytes.
fn mac(key: &[u8; 32], payload: &str) -> HmacSha256 {
    let mut block = [0u8; 64];
    block[..32].copy_from_slice(key);
    let mut mac = <HmacSha256 as KeyInit>::new(&block.into());
    mac.update(payload.as_bytes());
    mac
}

/// Sign `payload` as `<payload>.<base64url(HMAC-SHA256)>`
pub fn sign_token(key: &[u8; 32], payload: &str) -> String {
    let signature = mac(key, payload).finalize().into_bytes();
    format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token made by [`sign_token`] and return its payload.
///
/// Comparison is constant-time.
pub fn verify_token<'a>(key: &[u8; 32], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

    mac(key, payload).verify_slice(&signature).ok()?;
    Some(payload)
}
