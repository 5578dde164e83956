//! Application state.

mod app;
mod focus;
mod navigation;
pub mod state;

pub use app::{App, Screen};
pub use focus::FocusPanel;
pub use navigation::{NavEntry, NavigationState};
