//! Server line decoding.
//!
//! Dispatch is prefix-match, case-sensitive, most-specific first. Payload
//! extraction skips the prefix plus exactly one separator character
//! (conventionally a space). A line that is a bare prefix, or a prefix
//! followed by nothing but the separator, decodes with an empty payload.

/// Literal control-line prefixes sent by the server.
pub mod prefix {
    /// Server requests a screen name.
    pub const SUBMIT_NAME: &str = "SUBMITNAME";
    /// Server rejected an empty screen name.
    pub const NAME_EMPTY: &str = "NAMEEMPTY";
    /// Server rejected a screen name already in use.
    pub const NAME_USED: &str = "NAMEUSED";
    /// Server accepted the screen name.
    pub const NAME_ACCEPTED: &str = "NAMEACCEPTED";
    /// Server-originated notice, displayed distinctly from chat.
    pub const SERVER_MESSAGE: &str = "SERVERMESSAGE";
    /// Ordinary chat message.
    pub const MESSAGE: &str = "MESSAGE";
}

/// One decoded server line.
///
/// Produced from exactly one raw line by [`ServerEvent::decode`]; consumed
/// once by the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// The server wants a screen name; the client must reply with one line.
    SubmitNameRequest,

    /// The submitted name was empty; the server will re-request.
    NameEmpty,

    /// The submitted name is already taken.
    NameUsed {
        /// The rejected name, echoed by the server.
        name: String,
    },

    /// The handshake completed; chat sending is now allowed.
    NameAccepted {
        /// The accepted name, echoed by the server.
        name: String,
    },

    /// A server-originated notice (distinct from user chat).
    ServerNotice {
        /// Notice text.
        text: String,
    },

    /// A chat message broadcast by the server.
    ChatMessage {
        /// Message text.
        text: String,
    },

    /// A line with no recognized prefix. Ignored by the session; never an
    /// error, so unknown extensions pass through harmlessly.
    Unrecognized {
        /// The raw line as received.
        raw: String,
    },
}

impl ServerEvent {
    /// Decode one raw server line.
    ///
    /// Total: every input maps to an event, unmatched prefixes to
    /// [`ServerEvent::Unrecognized`]. First match wins, so a chat payload
    /// beginning with a reserved prefix cannot be told apart from a control
    /// line — literal protocol behavior.
    pub fn decode(line: &str) -> Self {
        if line.starts_with(prefix::SUBMIT_NAME) {
            Self::SubmitNameRequest
        } else if line.starts_with(prefix::NAME_EMPTY) {
            Self::NameEmpty
        } else if let Some(rest) = line.strip_prefix(prefix::NAME_USED) {
            Self::NameUsed { name: payload(rest) }
        } else if let Some(rest) = line.strip_prefix(prefix::NAME_ACCEPTED) {
            Self::NameAccepted { name: payload(rest) }
        } else if let Some(rest) = line.strip_prefix(prefix::SERVER_MESSAGE) {
            Self::ServerNotice { text: payload(rest) }
        } else if let Some(rest) = line.strip_prefix(prefix::MESSAGE) {
            Self::ChatMessage { text: payload(rest) }
        } else {
            Self::Unrecognized { raw: line.to_string() }
        }
    }
}

/// Extract the payload after a matched prefix: skip one separator character,
/// keep the rest verbatim. Empty if the separator or payload is missing.
fn payload(rest: &str) -> String {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str().to_string()
}

/// Encode an outgoing line (a screen name or chat text).
///
/// The identity function: outgoing lines are unprefixed, verbatim text with
/// no escaping. The transport appends the line delimiter.
pub fn encode_outgoing(text: &str) -> &str {
    text
}
