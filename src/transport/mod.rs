//! The HTTP round-trip collaborator for the opening handshake.
//!
//! The handshake core never touches sockets. It hands a fully formed
//! upgrade request to a [`Transport`] and gets back the response head;
//! network I/O, TLS and DNS live behind the trait. [`HyperTransport`] is
//! the bundled implementation for plain `http` endpoints.

mod hyper;

use async_trait::async_trait;
use http::{HeaderMap, Request, StatusCode};

use crate::base::error::WsError;

pub use self::hyper::HyperTransport;

/// The captured head of a handshake response.
///
/// Everything the response validator needs: the status code and the header
/// map of the single captured response. The body never reaches the
/// handshake core.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

/// One asynchronous HTTP round trip.
///
/// A connection calls [`round_trip`](Transport::round_trip) exactly once
/// per handshake attempt and suspends only there. Implementations own all
/// transport concerns (sockets, TLS, DNS) and report faults as
/// [`WsError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and await the response head.
    async fn round_trip(&self, request: Request<()>) -> Result<TransportResponse, WsError>;
}
