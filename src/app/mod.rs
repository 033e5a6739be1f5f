//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditCommand, EditorIntent, EditorKey};
pub use state::{EditSession, EditorState, SessionMode};
