use std::fmt;

/// The lifecycle state of a WebSocket connection.
///
/// A connection starts in [`Connecting`](ConnectionState::Connecting),
/// reaches [`Open`](ConnectionState::Open) only after the full handshake
/// response validated, and ends in [`Closed`](ConnectionState::Closed)
/// either by explicit close or by any handshake failure. `Closed` is
/// terminal; no transition leaves it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// The opening handshake is in flight.
    #[default]
    Connecting = 0,

    /// Handshake validated; the connection is usable.
    Open = 1,

    /// Terminal: closed by the caller or by a handshake failure.
    Closed = 2,
}

impl ConnectionState {
    /// Decode the atomic representation used by the connection.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Open,
            _ => ConnectionState::Closed,
        }
    }

    /// Whether the connection has reached its terminal state.
    pub fn is_closed(&self) -> bool {
        matches!(self, ConnectionState::Closed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Connecting => "CONNECTING",
            ConnectionState::Open => "OPEN",
            ConnectionState::Closed => "CLOSED",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_u8() {
        for state in [
            ConnectionState::Connecting,
            ConnectionState::Open,
            ConnectionState::Closed,
        ] {
            assert_eq!(ConnectionState::from_u8(state as u8), state);
        }
    }

    #[test]
    fn test_default_is_connecting() {
        assert_eq!(ConnectionState::default(), ConnectionState::Connecting);
        assert!(!ConnectionState::Connecting.is_closed());
        assert!(ConnectionState::Closed.is_closed());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConnectionState::Open.to_string(), "OPEN");
    }
}
