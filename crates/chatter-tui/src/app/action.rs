//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Answer an open name prompt. `None` means the user declined.
    SubmitName {
        /// The chosen screen name, if any.
        name: Option<String>,
    },

    /// Send chat text.
    SendChat {
        /// The text to send, verbatim.
        text: String,
    },
}
