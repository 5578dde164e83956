//! View layer. Reads the model, draws the frame, mutates nothing.

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::{App, Screen};

pub fn render(app: &App, frame: &mut Frame) {
    match app.screen {
        Screen::Login => pages::login::render(app, frame),
        Screen::Main => layout::render(app, frame),
    }
}
