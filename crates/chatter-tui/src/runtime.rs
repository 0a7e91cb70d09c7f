//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine, Bridge, and the line transport. Uses tokio::select! to
//! handle terminal events and server lines concurrently.
//!
//! The select loop is the sole owner of the session (via the bridge), so
//! server lines are processed strictly in arrival order and the send guard
//! is checked by the same context that mutates session state.

use std::io::{self, stdout};

use chatter_client::transport::{self, ConnectedSession, TransportError, TransportEvent};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{
    App,
    app::{AppAction, AppEvent},
    bridge::Bridge,
    ui,
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error. Connection failure at startup is fatal.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown, the main event loop, and coordinates
/// between App (UI) and Bridge (protocol) state machines.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    bridge: Bridge,
    connection: Option<ConnectedSession>,
    server_addr: String,
}

impl Runtime {
    /// Create a new runtime that will connect to the given server.
    pub fn new(server_addr: String) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let app = App::new(server_addr.clone());

        Ok(Self { terminal, app, bridge: Bridge::new(), connection: None, server_addr })
    }

    /// Run the main event loop.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;
        self.connect().await?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(std::time::Duration::from_millis(100));

        loop {
            // Server connection active
            let should_quit = if let Some(ref mut conn) = self.connection {
                tokio::select! {
                    // Terminal events
                    maybe_event = event_stream.next() => {
                        match maybe_event {
                            Some(Ok(event)) => self.handle_terminal_event(event).await?,
                            Some(Err(e)) => return Err(RuntimeError::Io(e)),
                            None => true,
                        }
                    }

                    // Lines (or termination) from the server
                    maybe_transport = conn.from_server.recv() => {
                        self.handle_transport_event(maybe_transport).await?
                    }

                    // Periodic tick
                    _ = tick_interval.tick() => {
                        let actions = self.app.handle(AppEvent::Tick);
                        self.process_actions(actions).await?
                    }
                }
            } else {
                tokio::select! {
                    // No server connection active (terminal events only)
                    maybe_event = event_stream.next() => {
                        match maybe_event {
                            Some(Ok(event)) => self.handle_terminal_event(event).await?,
                            Some(Err(e)) => return Err(RuntimeError::Io(e)),
                            None => true,
                        }
                    }

                    // Periodic tick
                    _ = tick_interval.tick() => {
                        let actions = self.app.handle(AppEvent::Tick);
                        self.process_actions(actions).await?
                    }
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a transport event and return whether to quit.
    async fn handle_transport_event(
        &mut self,
        event: Option<TransportEvent>,
    ) -> Result<bool, RuntimeError> {
        let events = match event {
            Some(TransportEvent::Line(line)) => {
                let events = self.bridge.handle_line(&line);
                self.send_outgoing().await;
                events
            },
            Some(TransportEvent::Closed) | None => {
                self.disconnect();
                self.bridge.handle_stream_end()
            },
            Some(TransportEvent::Failed { reason }) => {
                tracing::warn!(%reason, "transport failed, closing session");
                self.disconnect();
                self.bridge.handle_stream_end()
            },
        };

        self.process_app_events(events).await
    }

    /// Handle a terminal event and return whether to quit.
    async fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key.code),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => return Ok(false),
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions).await
    }

    /// Process actions returned by the app. Returns true if should quit.
    ///
    /// Uses iterative processing to avoid async recursion between actions
    /// and events.
    async fn process_actions(
        &mut self,
        initial_actions: Vec<AppAction>,
    ) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),

                    // Protocol operations go through the bridge
                    AppAction::SubmitName { name: _ } | AppAction::SendChat { text: _ } => {
                        let events = self.bridge.process_app_action(action);
                        for event in events {
                            let new_actions = self.app.handle(event);
                            pending_actions.extend(new_actions);
                        }
                        self.send_outgoing().await;
                    },
                }
            }
        }
        Ok(false)
    }

    /// Process events from the bridge back to the app.
    async fn process_app_events(&mut self, events: Vec<AppEvent>) -> Result<bool, RuntimeError> {
        for event in events {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Connect to the server. Failure here aborts startup.
    async fn connect(&mut self) -> Result<(), RuntimeError> {
        let connection = transport::connect(&self.server_addr).await?;
        self.connection = Some(connection);
        Ok(())
    }

    /// Release the connection. No reconnection is attempted.
    fn disconnect(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.stop();
        }
    }

    /// Send all pending outgoing lines to the server.
    async fn send_outgoing(&mut self) {
        let lines = self.bridge.take_outgoing();
        if lines.is_empty() {
            return;
        }

        let Some(conn) = self.connection.as_ref() else {
            tracing::warn!("dropping outgoing lines: no connection");
            return;
        };

        for line in lines {
            if let Err(e) = conn.to_server.send(line).await {
                tracing::warn!(error = %e, "failed to queue outgoing line");
            }
        }
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.disconnect();

        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
