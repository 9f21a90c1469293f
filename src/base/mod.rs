//! Base types and error handling.
//!
//! Foundational types shared by every layer:
//! - [`WsError`](error::WsError): the crate-wide error taxonomy
//! - [`ConnectionState`](state::ConnectionState): connection lifecycle states

pub mod error;
pub mod state;
