//! Client
//!
//! Action-based session state machine for the chatter protocol. Owns the
//! handshake (screen name negotiation) and the guard on chat sending.
//!
//! # Architecture
//!
//! The session is Sans-IO. It receives events ([`SessionEvent`]), processes
//! them through pure state machine logic, and returns actions
//! ([`SessionAction`]) for the caller to execute — transport writes and
//! presentation requests alike. The caller decodes raw lines with
//! [`chatter_proto::ServerEvent::decode`] and feeds them in; the session
//! never touches a socket or a screen.
//!
//! # Components
//!
//! - [`Session`]: the state machine (`AwaitingName` → `Authenticated` →
//!   `Closed`)
//! - [`SessionEvent`]: events fed into the session
//! - [`SessionAction`]: actions produced by the session
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::ConnectedSession`]: channel handles over a TCP connection
//! - [`transport::connect`]: connect to a server

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod event;
mod session;

#[cfg(feature = "transport")]
pub mod transport;

pub use chatter_proto::ServerEvent;
pub use error::SessionError;
pub use event::{SessionAction, SessionEvent};
pub use session::{Session, SessionState};
