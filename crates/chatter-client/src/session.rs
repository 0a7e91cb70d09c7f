//! Session state machine.
//!
//! The `Session` is the client-side state machine for one connection. It
//! drives the handshake (screen name negotiation), guards chat sending, and
//! handles termination at any point.
//!
//! State is monotonic: `AwaitingName` → `Authenticated` → `Closed`, with
//! `Closed` reachable from any state on stream end or failure. There is no
//! renegotiation and no reconnection; one session per connection.

use chatter_proto::{ServerEvent, encode_outgoing};

use crate::{
    error::SessionError,
    event::{SessionAction, SessionEvent},
};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Handshake phase: negotiating a screen name. Chat sending disallowed.
    AwaitingName,

    /// The server accepted a screen name; chat sending allowed.
    Authenticated,

    /// The connection ended. Terminal; every event is inert.
    Closed,
}

/// Client session for one connection.
///
/// Created when the connection is established, mutated only through
/// [`Session::handle`], done when the transport closes or fails.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current lifecycle state.
    state: SessionState,

    /// The accepted screen name, set on `NAMEACCEPTED`.
    screen_name: Option<String>,

    /// A name prompt is outstanding and the reply line is still owed.
    ///
    /// This is what ties the single permitted pre-authentication write to a
    /// `SUBMITNAME` request: `NameChosen` without it is ignored.
    name_pending: bool,
}

impl Session {
    /// Create a session at the start of the handshake.
    pub fn new() -> Self {
        Self { state: SessionState::AwaitingName, screen_name: None, name_pending: false }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The accepted screen name. `None` until `NAMEACCEPTED` arrives.
    pub fn screen_name(&self) -> Option<&str> {
        self.screen_name.as_deref()
    }

    /// Whether chat sending is currently permitted.
    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Process an event and return resulting actions.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<SessionAction>, SessionError> {
        match event {
            SessionEvent::Line(server_event) => Ok(self.handle_line(server_event)),
            SessionEvent::NameChosen(name) => Ok(self.handle_name_chosen(name)),
            SessionEvent::SendChat { text } => self.handle_send_chat(text),
            SessionEvent::StreamClosed => Ok(self.handle_stream_closed()),
        }
    }

    fn handle_line(&mut self, event: ServerEvent) -> Vec<SessionAction> {
        match self.state {
            SessionState::AwaitingName => self.handle_line_awaiting_name(event),
            SessionState::Authenticated => Self::handle_line_authenticated(event),
            SessionState::Closed => vec![],
        }
    }

    fn handle_line_awaiting_name(&mut self, event: ServerEvent) -> Vec<SessionAction> {
        match event {
            ServerEvent::SubmitNameRequest => {
                self.name_pending = true;
                vec![SessionAction::PromptName]
            },
            ServerEvent::NameEmpty => vec![SessionAction::NotifyNameEmpty],
            ServerEvent::NameUsed { name } => vec![SessionAction::NotifyNameUsed { name }],
            ServerEvent::NameAccepted { name } => {
                self.state = SessionState::Authenticated;
                self.screen_name = Some(name.clone());
                vec![SessionAction::NotifyAuthenticated { name }]
            },
            // The server may broadcast notices and chat during the
            // handshake; they are display-only and do not transition
            ServerEvent::ServerNotice { text } => {
                vec![SessionAction::AppendServerNotice { text }]
            },
            ServerEvent::ChatMessage { text } => vec![SessionAction::AppendChatMessage { text }],
            ServerEvent::Unrecognized { .. } => vec![],
        }
    }

    fn handle_line_authenticated(event: ServerEvent) -> Vec<SessionAction> {
        match event {
            ServerEvent::ServerNotice { text } => {
                vec![SessionAction::AppendServerNotice { text }]
            },
            ServerEvent::ChatMessage { text } => vec![SessionAction::AppendChatMessage { text }],
            // The protocol defines no renegotiation: name-negotiation lines
            // after acceptance are treated like unrecognized input
            ServerEvent::SubmitNameRequest
            | ServerEvent::NameEmpty
            | ServerEvent::NameUsed { .. }
            | ServerEvent::NameAccepted { .. }
            | ServerEvent::Unrecognized { .. } => vec![],
        }
    }

    fn handle_name_chosen(&mut self, name: Option<String>) -> Vec<SessionAction> {
        if self.state != SessionState::AwaitingName || !self.name_pending {
            // Unsolicited reply: nothing is owed, nothing is written
            return vec![];
        }

        self.name_pending = false;

        // Reply regardless of validity; a decline becomes an empty line and
        // the server answers with NAMEEMPTY
        let line = name.unwrap_or_default();
        vec![SessionAction::Send(encode_outgoing(&line).to_string())]
    }

    fn handle_send_chat(&mut self, text: String) -> Result<Vec<SessionAction>, SessionError> {
        match self.state {
            SessionState::Authenticated => {
                Ok(vec![SessionAction::Send(encode_outgoing(&text).to_string())])
            },
            SessionState::AwaitingName => Err(SessionError::NotAuthenticated),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }

    fn handle_stream_closed(&mut self) -> Vec<SessionAction> {
        if self.state == SessionState::Closed {
            return vec![];
        }

        self.state = SessionState::Closed;
        self.name_pending = false;
        vec![SessionAction::NotifyClosed]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &str) -> SessionEvent {
        SessionEvent::Line(ServerEvent::decode(raw))
    }

    fn authenticated_session() -> Session {
        let mut session = Session::new();
        let _ = session.handle(line("NAMEACCEPTED alice")).unwrap();
        session
    }

    #[test]
    fn submit_name_prompts_then_sends_reply() {
        let mut session = Session::new();

        let actions = session.handle(line("SUBMITNAME")).unwrap();
        assert_eq!(actions, vec![SessionAction::PromptName]);

        let actions = session.handle(SessionEvent::NameChosen(Some("alice".into()))).unwrap();
        assert_eq!(actions, vec![SessionAction::Send("alice".into())]);
        assert_eq!(session.state(), SessionState::AwaitingName);
    }

    #[test]
    fn declined_prompt_sends_empty_line() {
        let mut session = Session::new();
        let _ = session.handle(line("SUBMITNAME")).unwrap();

        let actions = session.handle(SessionEvent::NameChosen(None)).unwrap();
        assert_eq!(actions, vec![SessionAction::Send(String::new())]);
        assert_eq!(session.state(), SessionState::AwaitingName);
    }

    #[test]
    fn unsolicited_name_reply_writes_nothing() {
        let mut session = Session::new();

        let actions = session.handle(SessionEvent::NameChosen(Some("alice".into()))).unwrap();
        assert!(actions.is_empty());

        // One prompt, one reply; a second reply is also unsolicited
        let _ = session.handle(line("SUBMITNAME")).unwrap();
        let _ = session.handle(SessionEvent::NameChosen(Some("alice".into()))).unwrap();
        let actions = session.handle(SessionEvent::NameChosen(Some("bob".into()))).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn name_used_notifies_and_stays_awaiting() {
        let mut session = Session::new();

        let actions = session.handle(line("NAMEUSED alice")).unwrap();
        assert_eq!(actions, vec![SessionAction::NotifyNameUsed { name: "alice".into() }]);
        assert_eq!(session.state(), SessionState::AwaitingName);
    }

    #[test]
    fn name_empty_notifies_and_stays_awaiting() {
        let mut session = Session::new();

        let actions = session.handle(line("NAMEEMPTY")).unwrap();
        assert_eq!(actions, vec![SessionAction::NotifyNameEmpty]);
        assert_eq!(session.state(), SessionState::AwaitingName);
    }

    #[test]
    fn name_accepted_authenticates() {
        let mut session = Session::new();

        let actions = session.handle(line("NAMEACCEPTED alice")).unwrap();
        assert_eq!(actions, vec![SessionAction::NotifyAuthenticated { name: "alice".into() }]);
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.screen_name(), Some("alice"));
    }

    #[test]
    fn rejection_cycles_are_unbounded() {
        let mut session = Session::new();

        for _ in 0..100 {
            let _ = session.handle(line("SUBMITNAME")).unwrap();
            let _ = session.handle(SessionEvent::NameChosen(Some("alice".into()))).unwrap();
            let _ = session.handle(line("NAMEUSED alice")).unwrap();
            assert_eq!(session.state(), SessionState::AwaitingName);
        }

        let _ = session.handle(line("NAMEACCEPTED alice2")).unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[test]
    fn chat_message_is_forwarded_while_authenticated() {
        let mut session = authenticated_session();

        let actions = session.handle(line("MESSAGE hello there")).unwrap();
        assert_eq!(actions, vec![SessionAction::AppendChatMessage { text: "hello there".into() }]);
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[test]
    fn server_notice_is_forwarded_distinctly() {
        let mut session = authenticated_session();

        let actions = session.handle(line("SERVERMESSAGE welcome")).unwrap();
        assert_eq!(actions, vec![SessionAction::AppendServerNotice { text: "welcome".into() }]);
    }

    #[test]
    fn notices_are_displayed_during_handshake_too() {
        let mut session = Session::new();

        let actions = session.handle(line("SERVERMESSAGE maintenance at noon")).unwrap();
        assert_eq!(
            actions,
            vec![SessionAction::AppendServerNotice { text: "maintenance at noon".into() }]
        );
        assert_eq!(session.state(), SessionState::AwaitingName);
    }

    #[test]
    fn renegotiation_lines_are_ignored_after_acceptance() {
        let mut session = authenticated_session();

        assert!(session.handle(line("SUBMITNAME")).unwrap().is_empty());
        assert!(session.handle(line("NAMEUSED alice")).unwrap().is_empty());
        assert!(session.handle(line("NAMEACCEPTED mallory")).unwrap().is_empty());
        assert_eq!(session.screen_name(), Some("alice"));
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[test]
    fn unrecognized_lines_are_dropped_in_any_state() {
        let mut session = Session::new();
        assert!(session.handle(line("PING")).unwrap().is_empty());
        assert_eq!(session.state(), SessionState::AwaitingName);

        let mut session = authenticated_session();
        assert!(session.handle(line("PING")).unwrap().is_empty());
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[test]
    fn chat_send_requires_authentication() {
        let mut session = Session::new();

        let result = session.handle(SessionEvent::SendChat { text: "hi".into() });
        assert_eq!(result, Err(SessionError::NotAuthenticated));

        let mut session = authenticated_session();
        let actions = session.handle(SessionEvent::SendChat { text: "hi".into() }).unwrap();
        assert_eq!(actions, vec![SessionAction::Send("hi".into())]);
    }

    #[test]
    fn stream_close_notifies_exactly_once() {
        let mut session = authenticated_session();

        let actions = session.handle(SessionEvent::StreamClosed).unwrap();
        assert_eq!(actions, vec![SessionAction::NotifyClosed]);
        assert_eq!(session.state(), SessionState::Closed);

        let actions = session.handle(SessionEvent::StreamClosed).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn close_is_reachable_mid_handshake() {
        let mut session = Session::new();
        let _ = session.handle(line("SUBMITNAME")).unwrap();

        let actions = session.handle(SessionEvent::StreamClosed).unwrap();
        assert_eq!(actions, vec![SessionAction::NotifyClosed]);

        // The owed name reply dies with the session
        let actions = session.handle(SessionEvent::NameChosen(Some("alice".into()))).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn closed_session_is_inert() {
        let mut session = authenticated_session();
        let _ = session.handle(SessionEvent::StreamClosed).unwrap();

        assert!(session.handle(line("MESSAGE late")).unwrap().is_empty());
        assert!(session.handle(line("SUBMITNAME")).unwrap().is_empty());
        assert_eq!(
            session.handle(SessionEvent::SendChat { text: "hi".into() }),
            Err(SessionError::Closed)
        );
        assert_eq!(session.state(), SessionState::Closed);
    }
}
