//! `Sec-WebSocket-Key` generation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// A freshly generated `Sec-WebSocket-Key` value.
///
/// Base64 text of a random 16-byte nonce, as RFC 6455 section 4.1 requires.
/// A new key is generated for every handshake attempt; reconnecting after a
/// close never reuses the previous key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecKey(String);

impl SecKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let nonce: [u8; 16] = rand::random();
        Self(BASE64.encode(nonce))
    }

    /// The base64 header text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SecKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
