//! Sub-protocol list handling.

use crate::base::error::WsError;

/// An ordered, immutable list of WebSocket sub-protocol names.
///
/// Built from a single name, a sequence of names (order preserved), or
/// nothing at all. The list is fixed once a connection is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Protocols(Vec<String>);

impl Protocols {
    /// The empty list: no `Sec-WebSocket-Protocol` header is sent.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of sub-protocols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The names in construction order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Render the `Sec-WebSocket-Protocol` header value.
    pub fn join(&self) -> String {
        self.0.join(", ")
    }

    /// Reject malformed entries before any network activity.
    ///
    /// Every name must be a non-empty HTTP token (RFC 7230); an entry with
    /// separators, whitespace or control characters would corrupt the
    /// comma-joined header value.
    pub(crate) fn validate(&self) -> Result<(), WsError> {
        for name in &self.0 {
            if !is_token(name) {
                return Err(WsError::InvalidProtocol(name.clone()));
            }
        }
        Ok(())
    }
}

/// RFC 7230 `token` check.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            matches!(b,
                b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
                | b'^' | b'_' | b'`' | b'|' | b'~'
                | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
        })
}

impl From<&str> for Protocols {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for Protocols {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for Protocols {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for Protocols {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Protocols {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for Protocols {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<T> From<Option<T>> for Protocols
where
    T: Into<Protocols>,
{
    fn from(names: Option<T>) -> Self {
        names.map(Into::into).unwrap_or_default()
    }
}
