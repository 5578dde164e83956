//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::Modal;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let selected = app.backend.selected_count();
    if selected > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{selected} ✓"),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if let Some(ref modal) = app.modal.active {
        match modal {
            Modal::Form { .. } => {
                hints.push(("Tab", "Field"));
                hints.push(("←→", "Option"));
                hints.push(("Alt+s", "Secrets"));
                hints.push(("Alt+g", "Generate"));
                hints.push(("Enter", "Save"));
                hints.push(("Esc", "Cancel"));
            }
            Modal::ConfirmDelete { .. } => {
                hints.push(("Tab", "Switch"));
                hints.push(("Enter", "Confirm"));
                hints.push(("Esc", "Cancel"));
            }
            Modal::ImportFile { .. } => {
                hints.push(("Enter", "Import"));
                hints.push(("Esc", "Cancel"));
            }
            Modal::Help | Modal::Error { .. } => {
                hints.push(("Enter", "Close"));
            }
        }
        return hints;
    }

    if app.records.search.is_some() && app.focus.is_content() {
        hints.push(("Enter", "Search"));
        hints.push(("Esc", "Cancel"));
        return hints;
    }

    hints.push(("Tab", "Panel"));
    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => {
            hints.push(("↑↓", "Select"));
            hints.push(("←→", "Page"));
            hints.push(("Space", "Mark"));
            hints.push(("Alt+a", "Add"));
            hints.push(("Alt+d", "Delete"));
            hints.push(("/", "Search"));
        }
    }
    hints.push(("?", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
