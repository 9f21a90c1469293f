use http::StatusCode;
use thiserror::Error;

/// Errors produced while opening or driving a WebSocket connection.
///
/// Argument errors (`InvalidUrl`, `DisallowedScheme`, `InvalidProtocol`) are
/// returned synchronously from construction, before any network activity.
/// Handshake errors are delivered asynchronously through the connection's
/// event channel and always leave the connection closed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WsError {
    /// The URL could not be parsed.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The URL scheme is outside the accepted set.
    #[error("URL scheme `{0}:` is not in the list of accepted schemes: ws:, wss:, http:, https:")]
    DisallowedScheme(String),

    /// A sub-protocol entry is not a valid HTTP token.
    #[error("Invalid sub-protocol name: {0:?}")]
    InvalidProtocol(String),

    /// The upgrade request could not be assembled.
    #[error("Failed to build the handshake request")]
    InvalidRequest,

    /// The transport failed before a response was captured.
    #[error("Handshake transport error: {0}")]
    Transport(String),

    /// Handshake response status was not 101 Switching Protocols.
    #[error("Handshake response status is {0}, expected 101")]
    UnexpectedStatus(StatusCode),

    /// Handshake response `Upgrade` header does not equal `websocket`.
    #[error("Handshake Upgrade header does not equal websocket")]
    InvalidUpgradeHeader,

    /// Handshake response `Connection` header does not equal `Upgrade`.
    #[error("Handshake Connection header does not equal Upgrade")]
    InvalidConnectionHeader,

    /// Handshake response carries no `Sec-WebSocket-Accept` header.
    #[error("Handshake Sec-WebSocket-Accept header is not present")]
    MissingAcceptHeader,

    /// The server's accept value does not match the one derived from our key.
    #[error("Sec-WebSocket-Accept mismatch: expected {expected}, received {received}")]
    AcceptMismatch {
        /// Accept value derived from the `Sec-WebSocket-Key` we sent.
        expected: String,
        /// Accept value the server returned.
        received: String,
    },

    /// A lifecycle operation requires an open connection.
    #[error("Connection is not open")]
    NotConnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_error_lists_accepted_set() {
        let err = WsError::DisallowedScheme("ftp".into());
        let msg = err.to_string();
        assert!(msg.contains("ftp"));
        for scheme in ["ws:", "wss:", "http:", "https:"] {
            assert!(msg.contains(scheme), "missing {scheme} in {msg}");
        }
    }

    #[test]
    fn test_accept_mismatch_reports_both_values() {
        let err = WsError::AcceptMismatch {
            expected: "aaa".into(),
            received: "bbb".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("aaa") && msg.contains("bbb"));
    }
}
