//! Application main loop.
//!
//! Classic draw/poll/update cycle: render the model, wait up to 100ms for
//! input, translate it into a message, apply it. Network calls happen
//! inside update via the backend bridge.

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
