//! `Sec-WebSocket-Accept` derivation (RFC 6455 section 4.2.2).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha1::{Digest, Sha1};

/// Fixed GUID concatenated with the client key, per RFC 6455.
pub const WS_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Derive the `Sec-WebSocket-Accept` value for a `Sec-WebSocket-Key`.
///
/// Concatenates the key's base64 text with [`WS_GUID`], SHA-1 hashes, and
/// base64-encodes the raw 20-byte digest. Deterministic and side-effect
/// free; the response validator relies on calling this exactly once per
/// attempt and comparing the result exactly once.
pub fn derive_accept_key(key_text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key_text.as_bytes());
    hasher.update(WS_GUID.as_bytes());
    BASE64.encode(hasher.finalize())
}
