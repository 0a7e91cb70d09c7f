//! UI state machine
//!
//! Pure state machine that processes terminal and session events, producing
//! actions for the runtime to execute. Completely decoupled from I/O.
//!
//! # Architecture
//!
//! The App owns UI-specific state: the input buffer, the transcript, and
//! the connection phase as the user should see it. Protocol decisions stay
//! in the session; the App only decides what Enter means right now —
//! answering an open name prompt, sending chat once authenticated, or
//! nothing at all. This mirrors the original client's text field, which is
//! not editable until the name is accepted.

mod action;
mod event;
mod state;

pub use action::AppAction;
pub use event::AppEvent;
pub use state::{ConnectionState, EntryKind, TranscriptEntry};

/// UI state machine.
///
/// Manages UI state and translates terminal events into session operations
/// and session events into display updates. Pure and testable.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection phase.
    state: ConnectionState,
    /// Server address, for the status bar.
    server_addr: String,
    /// Transcript lines in receipt order.
    transcript: Vec<TranscriptEntry>,
    /// Input line buffer.
    input_buffer: String,
    /// Cursor position in input buffer.
    input_cursor: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Status message to display.
    status_message: Option<String>,
}

impl App {
    /// Create a new App in connecting state.
    pub fn new(server_addr: String) -> Self {
        Self {
            state: ConnectionState::Connecting,
            server_addr,
            transcript: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::NamePrompted => {
                self.state = ConnectionState::AwaitingName { prompt_open: true };
                self.status_message = Some("Choose a screen name".into());
                vec![AppAction::Render]
            },
            AppEvent::NameRejectedEmpty => {
                self.push_status("The name cannot be empty");
                vec![AppAction::Render]
            },
            AppEvent::NameRejectedTaken { name } => {
                self.push_status(format!("The name {name} is already in use"));
                vec![AppAction::Render]
            },
            AppEvent::Authenticated { name } => {
                self.status_message = Some(format!("Chatting as {name}"));
                self.state = ConnectionState::Connected { screen_name: name };
                vec![AppAction::Render]
            },
            AppEvent::ServerNotice { text } => {
                self.transcript.push(TranscriptEntry::new(EntryKind::Notice, text));
                vec![AppAction::Render]
            },
            AppEvent::ChatMessage { text } => {
                self.transcript.push(TranscriptEntry::new(EntryKind::Chat, text));
                vec![AppAction::Render]
            },
            AppEvent::SessionClosed => {
                self.state = ConnectionState::Closed;
                self.push_status("Connection closed");
                self.status_message = Some("Connection closed - press Esc to quit".into());
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Vec<AppAction> {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char(c) => {
                self.input_buffer.insert(self.input_cursor, c);
                self.input_cursor = self.input_cursor.saturating_add(1);
                vec![AppAction::Render]
            },
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    self.input_cursor = self.input_cursor.saturating_sub(1);
                    self.input_buffer.remove(self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyCode::Delete => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_buffer.remove(self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyCode::Left => {
                self.input_cursor = self.input_cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyCode::Right => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_cursor = self.input_cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyCode::Home => {
                self.input_cursor = 0;
                vec![AppAction::Render]
            },
            KeyCode::End => {
                self.input_cursor = self.input_buffer.len();
                vec![AppAction::Render]
            },
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Esc => self.handle_esc(),
            _ => vec![],
        }
    }

    /// Handle Enter: answer an open name prompt, or send chat.
    fn handle_enter(&mut self) -> Vec<AppAction> {
        let input = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;

        match &mut self.state {
            ConnectionState::AwaitingName { prompt_open } if *prompt_open => {
                *prompt_open = false;
                self.status_message = None;
                // Submitted even when empty; the server answers NAMEEMPTY
                // and the retry loop takes it from there
                vec![AppAction::SubmitName { name: Some(input) }, AppAction::Render]
            },
            ConnectionState::Connected { .. } if !input.is_empty() => {
                vec![AppAction::SendChat { text: input }, AppAction::Render]
            },
            // Sending is not enabled yet (or anymore); the input is dropped
            _ => vec![AppAction::Render],
        }
    }

    /// Handle Esc: decline an open name prompt, otherwise quit.
    fn handle_esc(&mut self) -> Vec<AppAction> {
        match &mut self.state {
            ConnectionState::AwaitingName { prompt_open } if *prompt_open => {
                *prompt_open = false;
                self.input_buffer.clear();
                self.input_cursor = 0;
                vec![AppAction::SubmitName { name: None }, AppAction::Render]
            },
            _ => vec![AppAction::Quit],
        }
    }

    /// Append a status line to the transcript and the status bar.
    fn push_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.status_message = Some(text.clone());
        self.transcript.push(TranscriptEntry::new(EntryKind::Status, text));
    }

    /// Connection phase.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    /// Server address.
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    /// Transcript lines in receipt order.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Whether a name prompt is currently open.
    pub fn name_prompt_open(&self) -> bool {
        matches!(self.state, ConnectionState::AwaitingName { prompt_open: true })
    }

    /// Input buffer contents.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Cursor position in input buffer.
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Status message to display. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
