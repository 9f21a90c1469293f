//! Upgrade request assembly (RFC 6455 section 4.1).

use http::{header, Method, Request};

use crate::base::error::WsError;
use crate::handshake::endpoint::Endpoint;
use crate::handshake::key::SecKey;
use crate::ws::Protocols;

/// Build the HTTP GET upgrade request for one handshake attempt.
///
/// The request targets [`Endpoint::handshake_url`] (scheme rewritten to
/// `http`/`https`) and carries no body. `Sec-WebSocket-Protocol` is included
/// only when the protocol list is non-empty, joined with `", "`.
pub fn build_upgrade_request(
    endpoint: &Endpoint,
    protocols: &Protocols,
    key: &SecKey,
) -> Result<Request<()>, WsError> {
    let url = endpoint.handshake_url();

    let mut builder = Request::builder()
        .method(Method::GET)
        .uri(url.as_str())
        .header(header::UPGRADE, "websocket")
        .header(header::CONNECTION, "Upgrade")
        .header(header::SEC_WEBSOCKET_KEY, key.as_str())
        .header(header::SEC_WEBSOCKET_VERSION, "13");

    if !protocols.is_empty() {
        builder = builder.header(header::SEC_WEBSOCKET_PROTOCOL, protocols.join());
    }

    builder.body(()).map_err(|e| {
        tracing::debug!("Failed to build upgrade request: {e:?}");
        WsError::InvalidRequest
    })
}
