//! The WebSocket opening handshake (RFC 6455 section 4, client side).
//!
//! One handshake attempt is a linear sequence built from these pieces:
//! - [`endpoint`]: URL scheme acceptance and `ws`→`http` rewriting
//! - [`key`]: random `Sec-WebSocket-Key` generation
//! - [`accept`]: expected `Sec-WebSocket-Accept` derivation
//! - [`request`]: HTTP GET upgrade request assembly
//! - [`validate`]: response verification against protocol requirements
//!
//! The [`ws`](crate::ws) module orchestrates these per connection; the
//! pieces themselves are pure and independently testable.

pub mod accept;
pub mod endpoint;
pub mod key;
pub mod request;
pub mod validate;

pub use accept::{derive_accept_key, WS_GUID};
pub use endpoint::{Endpoint, IntoEndpoint};
pub use key::SecKey;
pub use request::build_upgrade_request;
pub use validate::validate_response;
