//! EditorIntent- und EditCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::EditCommand;
pub use intent::{EditorIntent, EditorKey};
