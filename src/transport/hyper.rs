//! Plain-TCP handshake transport on hyper's legacy client.

use async_trait::async_trait;
use bytes::Bytes;
use http::Request;
use http_body_util::Empty;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::base::error::WsError;
use crate::transport::{Transport, TransportResponse};

/// [`Transport`] implementation over hyper for `http` handshake URLs.
///
/// Performs exactly one round trip per call: DNS resolution, TCP connect,
/// request write and response-head read all happen inside hyper. `https`
/// upgrades need a caller-supplied transport that layers TLS underneath.
pub struct HyperTransport {
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl HyperTransport {
    /// Create a transport with a fresh connector.
    pub fn new() -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn round_trip(&self, request: Request<()>) -> Result<TransportResponse, WsError> {
        let (parts, ()) = request.into_parts();
        let request = Request::from_parts(parts, Empty::new());

        let response = self.client.request(request).await.map_err(|e| {
            tracing::debug!("Handshake transport error: {e:?}");
            WsError::Transport(e.to_string())
        })?;

        // Only the response head matters for handshake validation; the
        // body (if any) stays with the transport.
        let (parts, _body) = response.into_parts();
        Ok(TransportResponse {
            status: parts.status,
            headers: parts.headers,
        })
    }
}
