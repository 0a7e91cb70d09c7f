//! Bridge between App and Session.
//!
//! Translates between App actions/events and Session events/actions,
//! keeping the UI layer decoupled from protocol details.

use chatter_client::{Session, SessionAction, SessionError, SessionEvent};
use chatter_proto::ServerEvent;

use crate::app::{AppAction, AppEvent};

/// Bridge between App UI and Session protocol logic.
///
/// Holds the Session state machine and buffers outgoing lines for the
/// transport layer to send.
pub struct Bridge {
    session: Session,
    /// Lines pending transmission to the server.
    outgoing: Vec<String>,
}

impl Bridge {
    /// Create a bridge with a fresh session.
    pub fn new() -> Self {
        Self { session: Session::new(), outgoing: Vec::new() }
    }

    /// Handle a raw line received from the server.
    pub fn handle_line(&mut self, raw: &str) -> Vec<AppEvent> {
        let event = ServerEvent::decode(raw);

        // The session drops these silently; logging is this layer's job
        if let ServerEvent::Unrecognized { raw } = &event {
            tracing::debug!(line = %raw, "ignoring unrecognized server line");
        }

        let result = self.session.handle(SessionEvent::Line(event));
        self.handle_session_result(result)
    }

    /// Handle the end of the transport stream, graceful or not.
    pub fn handle_stream_end(&mut self) -> Vec<AppEvent> {
        let result = self.session.handle(SessionEvent::StreamClosed);
        self.handle_session_result(result)
    }

    /// Process an App action and return resulting App events.
    pub fn process_app_action(&mut self, action: AppAction) -> Vec<AppEvent> {
        match action {
            AppAction::SubmitName { name } => {
                let result = self.session.handle(SessionEvent::NameChosen(name));
                self.handle_session_result(result)
            },

            AppAction::SendChat { text } => {
                let result = self.session.handle(SessionEvent::SendChat { text });
                self.handle_session_result(result)
            },

            AppAction::Render | AppAction::Quit => vec![],
        }
    }

    /// Take all pending outgoing lines.
    pub fn take_outgoing(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outgoing)
    }

    /// Convert a Session result to App events, handling actions and errors.
    fn handle_session_result(
        &mut self,
        result: Result<Vec<SessionAction>, SessionError>,
    ) -> Vec<AppEvent> {
        match result {
            Ok(actions) => self.process_session_actions(actions),
            Err(e) => vec![AppEvent::Error { message: e.to_string() }],
        }
    }

    /// Convert Session actions to App events.
    fn process_session_actions(&mut self, actions: Vec<SessionAction>) -> Vec<AppEvent> {
        let mut events = Vec::new();

        for action in actions {
            match action {
                SessionAction::Send(line) => self.outgoing.push(line),

                SessionAction::PromptName => events.push(AppEvent::NamePrompted),

                SessionAction::NotifyNameEmpty => events.push(AppEvent::NameRejectedEmpty),

                SessionAction::NotifyNameUsed { name } => {
                    events.push(AppEvent::NameRejectedTaken { name });
                },

                SessionAction::NotifyAuthenticated { name } => {
                    tracing::info!(%name, "screen name accepted");
                    events.push(AppEvent::Authenticated { name });
                },

                SessionAction::AppendServerNotice { text } => {
                    events.push(AppEvent::ServerNotice { text });
                },

                SessionAction::AppendChatMessage { text } => {
                    events.push(AppEvent::ChatMessage { text });
                },

                SessionAction::NotifyClosed => events.push(AppEvent::SessionClosed),
            }
        }

        events
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}
