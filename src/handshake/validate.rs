//! Upgrade response validation (RFC 6455 section 4.2.2, client side).

use http::{header, StatusCode};

use crate::base::error::WsError;
use crate::transport::TransportResponse;

/// Validate a captured handshake response against the expected accept value.
///
/// Checks run in order and fail fast on the first violation:
/// status 101, `Upgrade: websocket`, `Connection: Upgrade`, presence of
/// `Sec-WebSocket-Accept`, and the accept value itself. Header values are
/// matched exactly. All five checks run against the single captured
/// response; nothing is re-fetched.
pub fn validate_response(
    response: &TransportResponse,
    expected_accept: &str,
) -> Result<(), WsError> {
    if response.status != StatusCode::SWITCHING_PROTOCOLS {
        tracing::debug!("Handshake rejected: status {}", response.status);
        return Err(WsError::UnexpectedStatus(response.status));
    }

    match response.headers.get(header::UPGRADE) {
        Some(value) if value.as_bytes() == b"websocket" => {}
        other => {
            tracing::debug!("Handshake rejected: Upgrade header {other:?}");
            return Err(WsError::InvalidUpgradeHeader);
        }
    }

    match response.headers.get(header::CONNECTION) {
        Some(value) if value.as_bytes() == b"Upgrade" => {}
        other => {
            tracing::debug!("Handshake rejected: Connection header {other:?}");
            return Err(WsError::InvalidConnectionHeader);
        }
    }

    let accept = response
        .headers
        .get(header::SEC_WEBSOCKET_ACCEPT)
        .ok_or(WsError::MissingAcceptHeader)?;

    if accept.as_bytes() != expected_accept.as_bytes() {
        let received = String::from_utf8_lossy(accept.as_bytes()).into_owned();
        tracing::debug!("Handshake rejected: accept mismatch, received {received}");
        return Err(WsError::AcceptMismatch {
            expected: expected_accept.to_string(),
            received,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    const ACCEPT: &str = "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=";

    fn valid_response() -> TransportResponse {
        let mut headers = HeaderMap::new();
        headers.insert(header::UPGRADE, "websocket".parse().unwrap());
        headers.insert(header::CONNECTION, "Upgrade".parse().unwrap());
        headers.insert(header::SEC_WEBSOCKET_ACCEPT, ACCEPT.parse().unwrap());
        TransportResponse {
            status: StatusCode::SWITCHING_PROTOCOLS,
            headers,
        }
    }

    #[test]
    fn test_valid_response_passes() {
        assert_eq!(validate_response(&valid_response(), ACCEPT), Ok(()));
    }

    #[test]
    fn test_non_101_status() {
        let mut response = valid_response();
        response.status = StatusCode::OK;
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::UnexpectedStatus(StatusCode::OK))
        );
    }

    #[test]
    fn test_wrong_upgrade_header() {
        let mut response = valid_response();
        response
            .headers
            .insert(header::UPGRADE, "h2c".parse().unwrap());
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::InvalidUpgradeHeader)
        );
    }

    #[test]
    fn test_missing_upgrade_header() {
        let mut response = valid_response();
        response.headers.remove(header::UPGRADE);
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::InvalidUpgradeHeader)
        );
    }

    #[test]
    fn test_wrong_connection_header() {
        let mut response = valid_response();
        response
            .headers
            .insert(header::CONNECTION, "keep-alive".parse().unwrap());
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::InvalidConnectionHeader)
        );
    }

    #[test]
    fn test_missing_accept_header() {
        let mut response = valid_response();
        response.headers.remove(header::SEC_WEBSOCKET_ACCEPT);
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::MissingAcceptHeader)
        );
    }

    #[test]
    fn test_accept_mismatch() {
        let mut response = valid_response();
        response
            .headers
            .insert(header::SEC_WEBSOCKET_ACCEPT, "bogus=".parse().unwrap());
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::AcceptMismatch {
                expected: ACCEPT.into(),
                received: "bogus=".into(),
            })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Status and every header are wrong; only the status check fires.
        let mut response = valid_response();
        response.status = StatusCode::BAD_GATEWAY;
        response.headers.clear();
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::UnexpectedStatus(StatusCode::BAD_GATEWAY))
        );

        // With the status corrected, the next check in order fires.
        response.status = StatusCode::SWITCHING_PROTOCOLS;
        assert_eq!(
            validate_response(&response, ACCEPT),
            Err(WsError::InvalidUpgradeHeader)
        );
    }
}
