//! Login screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use opsvault_core::SECRET_MASK;

use crate::i18n::t;
use crate::model::state::LoginField;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let texts = t();
    let c = colors();

    let area = centered(46, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} · opsvault ", texts.login.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = |name: &str, value: String, focused: bool| {
        let name_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{name}: "), name_style),
            Span::styled(value, Style::default().fg(c.fg)),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
        }
        Line::from(spans)
    };

    let password_shown = if app.login.password.is_empty() {
        String::new()
    } else {
        SECRET_MASK.to_string()
    };

    let mut lines = vec![
        Line::from(""),
        field(
            texts.login.username,
            app.login.username.clone(),
            app.login.focus == LoginField::Username,
        ),
        Line::from(""),
        field(
            texts.login.password,
            password_shown,
            app.login.focus == LoginField::Password,
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.login.hint),
            Style::default().fg(c.muted),
        )),
    ];

    if let Some(ref error) = app.login.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {error}"),
            Style::default().fg(c.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Center a fixed-size box in the frame.
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
