//! opsvault TUI
//!
//! Terminal admin console for the opsvault backend, built on the Elm
//! architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: input translated to intent (`message/`)
//! - **Update**: the only place state changes (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: raw input handling (`event/`)
//! - **Backend**: the bridge to the async client stack (`backend/`)

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = model::App::new().and_then(|mut app| app::run(&mut terminal, &mut app));

    // Restore the terminal whether the loop succeeded or not.
    restore_terminal(&mut terminal)?;

    result
}
