//! Input handling.

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
