//! Session events and actions.

use chatter_proto::ServerEvent;

/// Events the caller feeds into the session.
///
/// The caller is responsible for:
/// - Reading lines from the transport and decoding them
/// - Forwarding the presentation sink's reply to a name prompt
/// - Forwarding the user's send intents
/// - Reporting stream termination
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A decoded line received from the server.
    Line(ServerEvent),

    /// The presentation sink's reply to a [`SessionAction::PromptName`].
    ///
    /// `None` means the user declined; the session still replies to the
    /// server, as an empty line, and lets the server reject it.
    NameChosen(Option<String>),

    /// The user wants to send chat text.
    SendChat {
        /// The text to send, verbatim.
        text: String,
    },

    /// The transport ended: graceful end-of-stream or I/O failure. Both
    /// drive the same `Closed` transition and neither is retried.
    StreamClosed,
}

/// Actions the session produces for the caller to execute.
///
/// `SendLine` goes to the transport; everything else is a request to the
/// presentation sink. The session makes no assumption about rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Write one line to the transport.
    Send(String),

    /// Ask the user for a screen name; answer via
    /// [`SessionEvent::NameChosen`].
    PromptName,

    /// The server rejected an empty screen name.
    NotifyNameEmpty,

    /// The server rejected a screen name already in use.
    NotifyNameUsed {
        /// The rejected name.
        name: String,
    },

    /// The handshake completed; enable chat sending and show the identity.
    NotifyAuthenticated {
        /// The accepted screen name.
        name: String,
    },

    /// Display a server-originated notice, distinct from user chat.
    AppendServerNotice {
        /// Notice text.
        text: String,
    },

    /// Display an ordinary chat message.
    AppendChatMessage {
        /// Message text.
        text: String,
    },

    /// The session ended. Fired exactly once, for graceful and ungraceful
    /// termination alike.
    NotifyClosed,
}
