//! WebSocket client connections.
//!
//! Implements the client side of the opening handshake (RFC 6455 section
//! 1.3) over a pluggable HTTP transport, and exposes the post-handshake
//! lifecycle surface (`send`/`close` plus lifecycle events) to the
//! consumer. Data framing is an extension point, not implemented here.
//!
//! # Example
//! ```ignore
//! use wsnet::ws::{Event, WebSocket};
//! use wsnet::transport::HyperTransport;
//!
//! let mut ws = WebSocket::connect("ws://echo.example.org", "chat", HyperTransport::new())?;
//! let mut events = ws.events().unwrap();
//! match events.recv().await {
//!     Some(Event::Open) => ws.send("Hello")?,
//!     other => eprintln!("handshake failed: {other:?}"),
//! }
//! ```

mod connection;
mod event;
mod message;
mod protocols;

pub use connection::{WebSocket, WebSocketBuilder};
pub use event::{Event, EventReceiver};
pub use message::Message;
pub use protocols::Protocols;
