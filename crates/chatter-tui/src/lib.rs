//! Terminal UI for the chatter protocol
//!
//! The concrete presentation sink: renders the transcript, collects user
//! input, and answers the session's name prompts. Layered the same way as
//! the protocol core:
//!
//! - [`App`]: pure UI state machine (input buffer, transcript, phase)
//! - [`Bridge`]: translates between session actions and UI events
//! - [`runtime::Runtime`]: terminal lifecycle and the async event loop
//! - [`ui`]: pure render functions over [`App`] state

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod app;
pub mod bridge;
pub mod runtime;
pub mod ui;

pub use app::{App, AppAction, AppEvent};
pub use bridge::Bridge;
