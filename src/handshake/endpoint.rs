//! Endpoint URL validation and handshake-scheme rewriting.

use url::Url;

use crate::base::error::WsError;

/// Schemes a connection may be constructed with. `ws`/`wss` are the
/// client-facing pair; `http`/`https` are their handshake-transport
/// equivalents and pass through unchanged.
const ACCEPTED_SCHEMES: [&str; 4] = ["ws", "wss", "http", "https"];

/// A validated WebSocket endpoint.
///
/// Wraps an absolute [`Url`] whose scheme is one of `ws`, `wss`, `http` or
/// `https`; construction fails with [`WsError::DisallowedScheme`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Validate a parsed URL as a WebSocket endpoint.
    pub fn new(url: Url) -> Result<Self, WsError> {
        if !ACCEPTED_SCHEMES.contains(&url.scheme()) {
            return Err(WsError::DisallowedScheme(url.scheme().to_string()));
        }
        Ok(Self { url })
    }

    /// Parse and validate an endpoint from a string.
    pub fn parse(input: &str) -> Result<Self, WsError> {
        let url = Url::parse(input).map_err(|e| {
            tracing::debug!("Endpoint parse error: {e:?}");
            WsError::InvalidUrl
        })?;
        Self::new(url)
    }

    /// The endpoint URL as constructed.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether the endpoint uses a TLS scheme (`wss` or `https`).
    pub fn is_secure(&self) -> bool {
        matches!(self.url.scheme(), "wss" | "https")
    }

    /// The URL the upgrade request is issued against: `ws` becomes `http`
    /// and `wss` becomes `https`; `http`/`https` pass through.
    pub fn handshake_url(&self) -> Url {
        let mut url = self.url.clone();
        // All four schemes are "special" to the url crate, so rewriting
        // between them cannot fail.
        match url.scheme() {
            "ws" => {
                let _ = url.set_scheme("http");
            }
            "wss" => {
                let _ = url.set_scheme("https");
            }
            _ => {}
        }
        url
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.url.fmt(f)
    }
}

/// Conversion into a validated [`Endpoint`], accepted by
/// [`WebSocket::connect`](crate::ws::WebSocket::connect) so callers can pass
/// a string or an already-parsed [`Url`].
pub trait IntoEndpoint {
    /// Validate `self` as an endpoint.
    fn into_endpoint(self) -> Result<Endpoint, WsError>;
}

impl IntoEndpoint for Endpoint {
    fn into_endpoint(self) -> Result<Endpoint, WsError> {
        Ok(self)
    }
}

impl IntoEndpoint for Url {
    fn into_endpoint(self) -> Result<Endpoint, WsError> {
        Endpoint::new(self)
    }
}

impl IntoEndpoint for &str {
    fn into_endpoint(self) -> Result<Endpoint, WsError> {
        Endpoint::parse(self)
    }
}

impl IntoEndpoint for String {
    fn into_endpoint(self) -> Result<Endpoint, WsError> {
        Endpoint::parse(&self)
    }
}
