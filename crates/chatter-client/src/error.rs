//! Session errors.
//!
//! Guard violations on the send path. These are local to the session and
//! never process-wide: the caller reports them and carries on.

use thiserror::Error;

/// Errors returned by [`crate::Session::handle`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Chat text was submitted before the server accepted a screen name.
    ///
    /// The send is rejected, never forwarded to the transport. The only line
    /// the session writes before authentication is the name reply to a
    /// `SUBMITNAME` request.
    #[error("not authenticated: chat sending requires an accepted screen name")]
    NotAuthenticated,

    /// The session has ended; no further sending is possible.
    #[error("session closed")]
    Closed,
}
