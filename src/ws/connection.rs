//! WebSocket connection orchestration.
//!
//! Owns the `CONNECTING → OPEN | CLOSED` state machine and drives one
//! opening handshake per connection: generate a key, derive the expected
//! accept value, issue the upgrade request through the transport, validate
//! the captured response, transition. The caller observes the outcome
//! through [`Event`]s and [`WebSocket::state`], never through a blocking
//! return value.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use url::Url;

use crate::base::error::WsError;
use crate::base::state::ConnectionState;
use crate::handshake::{
    build_upgrade_request, derive_accept_key, validate_response, Endpoint, IntoEndpoint, SecKey,
};
use crate::transport::Transport;
use crate::ws::event::{self, Event, EventReceiver, EventSender};
use crate::ws::message::Message;
use crate::ws::protocols::Protocols;

/// State shared between the connection handle and its handshake task.
struct Shared {
    state: AtomicU8,
    events: EventSender,
}

impl Shared {
    fn new(events: EventSender) -> Self {
        Self {
            state: AtomicU8::new(ConnectionState::Connecting as u8),
            events,
        }
    }

    fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// `CONNECTING → OPEN`. Fails if the connection already left
    /// `CONNECTING`, in which case the late handshake result is discarded.
    fn transition_open(&self) -> bool {
        let swapped = self
            .state
            .compare_exchange(
                ConnectionState::Connecting as u8,
                ConnectionState::Open as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok();
        if swapped {
            let _ = self.events.send(Event::Open);
        }
        swapped
    }

    /// Any non-`CLOSED` state → `CLOSED`. Emits `Error` (when a failure
    /// caused the close) and `Close` exactly once; repeated calls are
    /// no-ops. Event sends to a dropped receiver are ignored.
    fn transition_closed(&self, error: Option<WsError>) -> bool {
        let prev = self.state.swap(ConnectionState::Closed as u8, Ordering::SeqCst);
        if prev == ConnectionState::Closed as u8 {
            return false;
        }
        if let Some(err) = &error {
            let _ = self.events.send(Event::Error(err.clone()));
        }
        let _ = self.events.send(Event::Close { error });
        true
    }
}

/// A client WebSocket connection.
///
/// Construction validates the endpoint and sub-protocol list, then starts
/// the opening handshake on a background task without blocking the caller.
/// Multiple connections are fully independent; each owns its endpoint,
/// protocol list and handshake key.
///
/// # Example
/// ```ignore
/// use wsnet::{HyperTransport, WebSocket};
///
/// let mut ws = WebSocket::connect("ws://example.com/chat", "graphql-ws", HyperTransport::new())?;
/// let mut events = ws.events().unwrap();
/// while let Some(event) = events.recv().await {
///     println!("{event:?}");
/// }
/// ```
pub struct WebSocket {
    endpoint: Endpoint,
    protocols: Protocols,
    shared: Arc<Shared>,
    events: Option<EventReceiver>,
}

impl WebSocket {
    /// Create a new connection builder.
    pub fn builder() -> WebSocketBuilder {
        WebSocketBuilder::new()
    }

    /// Validate inputs and begin the opening handshake.
    ///
    /// The URL may be a string or a parsed [`Url`]; `protocols` may be a
    /// single name, a sequence of names, or [`Protocols::none()`].
    /// Argument errors are returned here, before any network activity; the
    /// handshake outcome arrives through the event channel.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect<U, P, T>(url: U, protocols: P, transport: T) -> Result<Self, WsError>
    where
        U: IntoEndpoint,
        P: Into<Protocols>,
        T: Transport + 'static,
    {
        let endpoint = url.into_endpoint()?;
        let protocols = protocols.into();
        protocols.validate()?;

        let (tx, rx) = event::channel();
        let shared = Arc::new(Shared::new(tx));

        tokio::spawn(run_handshake(
            shared.clone(),
            Arc::new(transport),
            endpoint.clone(),
            protocols.clone(),
        ));

        Ok(Self {
            endpoint,
            protocols,
            shared,
            events: Some(rx),
        })
    }

    /// The URL this connection was constructed with.
    pub fn url(&self) -> &Url {
        self.endpoint.url()
    }

    /// The sub-protocols offered during the handshake.
    pub fn protocols(&self) -> &Protocols {
        &self.protocols
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.shared.state()
    }

    /// Take the event receiver for this connection.
    /// Can only be called once - subsequent calls return None.
    pub fn events(&mut self) -> Option<EventReceiver> {
        self.events.take()
    }

    /// Send a message over the open connection.
    ///
    /// Returns [`WsError::NotConnected`] unless the connection is `OPEN`.
    pub fn send(&self, message: impl Into<Message>) -> Result<(), WsError> {
        if self.state() != ConnectionState::Open {
            return Err(WsError::NotConnected);
        }
        let message = message.into();
        // TODO: encode and mask the outgoing frame (RFC 6455 section 5).
        // Until the framing layer lands the payload goes nowhere.
        tracing::trace!("Dropping {}-byte message, no framing layer", message.len());
        Ok(())
    }

    /// Close the connection.
    ///
    /// Valid from any state and idempotent: the first call from a
    /// non-`CLOSED` state transitions to `CLOSED` and emits one
    /// [`Event::Close`]; repeated calls are no-ops. Closing while the
    /// handshake is in flight cancels it; a response arriving afterwards
    /// is discarded.
    pub fn close(&self) {
        if self.shared.transition_closed(None) {
            tracing::debug!("Connection to {} closed", self.endpoint);
        }
    }
}

impl Drop for WebSocket {
    fn drop(&mut self) {
        self.shared.transition_closed(None);
    }
}

/// One handshake attempt: key → expected accept → request → round trip →
/// validation → transition. Suspends only at the network round trip.
async fn run_handshake(
    shared: Arc<Shared>,
    transport: Arc<dyn Transport>,
    endpoint: Endpoint,
    protocols: Protocols,
) {
    let key = SecKey::generate();
    let expected_accept = derive_accept_key(key.as_str());

    let request = match build_upgrade_request(&endpoint, &protocols, &key) {
        Ok(request) => request,
        Err(err) => {
            shared.transition_closed(Some(err));
            return;
        }
    };

    tracing::debug!("Opening handshake with {}", endpoint);
    let response = match transport.round_trip(request).await {
        Ok(response) => response,
        Err(err) => {
            // No event if the caller already closed the connection.
            shared.transition_closed(Some(err));
            return;
        }
    };

    if shared.state() != ConnectionState::Connecting {
        tracing::trace!("Handshake response after close, discarding");
        return;
    }

    match validate_response(&response, &expected_accept) {
        Ok(()) => {
            if shared.transition_open() {
                tracing::debug!("Handshake with {} complete, connection open", endpoint);
            } else {
                tracing::trace!("Handshake response after close, discarding");
            }
        }
        Err(err) => {
            tracing::debug!("Handshake with {} failed: {err}", endpoint);
            shared.transition_closed(Some(err));
        }
    }
}

/// WebSocket connection builder.
///
/// # Example
/// ```ignore
/// let ws = WebSocket::builder()
///     .url("wss://example.com/chat")?
///     .subprotocol("graphql-ws")
///     .connect(transport)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebSocketBuilder {
    endpoint: Option<Endpoint>,
    protocols: Vec<String>,
}

impl WebSocketBuilder {
    /// Create a new WebSocket builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL to connect to.
    pub fn url(mut self, url: &str) -> Result<Self, WsError> {
        self.endpoint = Some(Endpoint::parse(url)?);
        Ok(self)
    }

    /// Add a sub-protocol to offer.
    pub fn subprotocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocols.push(protocol.into());
        self
    }

    /// Add several sub-protocols, preserving order.
    pub fn subprotocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protocols.extend(protocols.into_iter().map(Into::into));
        self
    }

    /// Get the URL if set.
    pub fn get_url(&self) -> Option<&Url> {
        self.endpoint.as_ref().map(Endpoint::url)
    }

    /// Check if secure (`wss://` or `https://`).
    pub fn is_secure(&self) -> bool {
        self.endpoint.as_ref().is_some_and(Endpoint::is_secure)
    }

    /// Validate the remaining inputs and begin the handshake.
    pub fn connect<T>(self, transport: T) -> Result<WebSocket, WsError>
    where
        T: Transport + 'static,
    {
        let endpoint = self.endpoint.ok_or(WsError::InvalidUrl)?;
        WebSocket::connect(endpoint, Protocols::from(self.protocols), transport)
    }
}
