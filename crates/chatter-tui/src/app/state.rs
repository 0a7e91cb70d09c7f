//! UI state types
//!
//! State structures used by the App state machine.

/// Connection phase as the UI sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Connection attempt in progress; no server line seen yet.
    Connecting,

    /// Handshake phase: the server is negotiating a screen name.
    AwaitingName {
        /// A name prompt is open and Enter submits the input as the name.
        prompt_open: bool,
    },

    /// The server accepted a screen name; chat sending enabled.
    Connected {
        /// The accepted identity, shown in the title and status bar.
        screen_name: String,
    },

    /// The session ended; display-only from here on.
    Closed,
}

/// How a transcript entry is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Ordinary chat content.
    Chat,

    /// Server-originated notice, styled distinctly from chat.
    Notice,

    /// Local status line (rejections, session end).
    Status,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Display category.
    pub kind: EntryKind,
    /// Line text, verbatim.
    pub text: String,
}

impl TranscriptEntry {
    /// Create an entry.
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}
