//! UI events
//!
//! Events fed into the App state machine from terminal input and from the
//! session via the bridge.

use crossterm::event::KeyCode;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyCode),

    /// Periodic tick (for animations, polling).
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The session wants a screen name from the user.
    NamePrompted,

    /// The server rejected an empty screen name.
    NameRejectedEmpty,

    /// The server rejected a screen name already in use.
    NameRejectedTaken {
        /// The rejected name.
        name: String,
    },

    /// The handshake completed.
    Authenticated {
        /// The accepted screen name.
        name: String,
    },

    /// Server-originated notice for the transcript.
    ServerNotice {
        /// Notice text.
        text: String,
    },

    /// Chat message for the transcript.
    ChatMessage {
        /// Message text.
        text: String,
    },

    /// The session ended (graceful or not).
    SessionClosed,

    /// Error notification.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
