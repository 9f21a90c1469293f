//! Connection lifecycle events.

use tokio::sync::mpsc;

use crate::base::error::WsError;
use crate::ws::message::Message;

/// A lifecycle notification delivered to the connection's consumer.
///
/// Each variant is emitted at most once per transition: one `Open` per
/// successful handshake, one `Close` per connection. `Error` precedes the
/// `Close` it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The handshake succeeded; the connection is `OPEN`.
    Open,
    /// An incoming message. Reserved for the framing layer; the handshake
    /// core never emits it.
    Message(Message),
    /// A transport or validation fault was observed.
    Error(WsError),
    /// The connection became `CLOSED`, with the error that caused it, if
    /// any.
    Close {
        /// `None` for an explicit close, `Some` for a failure.
        error: Option<WsError>,
    },
}

/// Receiving half of a connection's event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

pub(crate) type EventSender = mpsc::UnboundedSender<Event>;

/// Create the event channel for one connection.
pub(crate) fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
