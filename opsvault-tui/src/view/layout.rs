//! Main screen layout.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::label;
use crate::model::App;

use opsvault_core::schema;

use super::components;
use super::pages;
use super::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar, content, status bar.
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_records_panel(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal on top of everything.
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" opsvault v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_records_panel(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_content() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let page = schema(app.backend.page());
    let block = Block::default()
        .title(format!(" {} {} ", page.icon, label(page.title)))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    pages::records::render(app, frame, inner);
}
