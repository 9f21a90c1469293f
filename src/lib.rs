//! # wsnet
//!
//! A client-side implementation of the WebSocket opening handshake
//! (RFC 6455) for Rust.
//!
//! `wsnet` performs the HTTP upgrade negotiation against a server,
//! cryptographically verifies the `Sec-WebSocket-Accept` response, and
//! reports the outcome through lifecycle events. Network I/O, TLS and DNS
//! live behind a pluggable [`Transport`]; the handshake core never touches
//! sockets.
//!
//! ## Features
//!
//! - **RFC 6455 handshake**: key generation, accept derivation, and the
//!   full five-step response validation with specific errors
//! - **Pluggable transport**: one async HTTP round trip behind a trait,
//!   with a bundled hyper-based implementation for plain `http` endpoints
//! - **Non-blocking lifecycle**: construction validates and returns; the
//!   handshake runs on a background task and resolves through events
//! - **Independent connections**: no shared state, no pooling, no retries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wsnet::{Event, HyperTransport, WebSocket};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wsnet::WsError> {
//!     let mut ws = WebSocket::connect("ws://example.com/chat", "chat", HyperTransport::new())?;
//!     let mut events = ws.events().unwrap();
//!     while let Some(event) = events.recv().await {
//!         println!("{event:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy and connection states
//! - [`handshake`] - The five handshake components (endpoint, key, accept,
//!   request, validation)
//! - [`transport`] - The HTTP round-trip collaborator
//! - [`ws`] - Connection orchestration, events and message payloads
//!
//! ## Out of scope
//!
//! Data framing (masking, opcodes, fragmentation, ping/pong), server-side
//! handshakes, HTTP/2 and HTTP/3 upgrades, reconnection policy and TLS
//! certificate handling all belong to other layers.

pub mod base;
pub mod handshake;
pub mod transport;
pub mod ws;

pub use base::error::WsError;
pub use base::state::ConnectionState;
pub use transport::{HyperTransport, Transport, TransportResponse};
pub use ws::{Event, EventReceiver, Message, Protocols, WebSocket, WebSocketBuilder};
