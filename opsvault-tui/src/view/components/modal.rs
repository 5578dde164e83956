//! Modal overlay rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use opsvault_core::{FieldState, FieldValue, FormState, PendingDelete, SECRET_MASK};

use crate::i18n::{label, t};
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Form {
            title,
            creating,
            form,
            ports_text,
        } => render_form(frame, title, *creating, form, ports_text.as_deref()),
        Modal::ConfirmDelete {
            pending,
            yes_focused,
        } => render_confirm_delete(frame, pending, *yes_focused),
        Modal::ImportFile { path } => render_import(frame, path),
        Modal::Help => render_help(frame),
        Modal::Error { message } => render_error(frame, message),
    }
}

/// Centered rect taking the given percentages of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn modal_block(title: String) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
}

fn render_form(
    frame: &mut Frame,
    title: &'static str,
    creating: bool,
    form: &FormState,
    ports_text: Option<&str>,
) {
    let texts = t();
    let c = colors();
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let verb = if creating {
        texts.modal.create_title
    } else {
        texts.modal.edit_title
    };
    let block = modal_block(format!(" {} · {} ", verb, label(title)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for row in &form.rows {
        let mut spans: Vec<Span> = Vec::new();
        for (n, &index) in row.iter().enumerate() {
            if n > 0 {
                spans.push(Span::raw("   "));
            }
            field_spans(&mut spans, &form.fields[index], index == form.focus, ports_text);
        }
        lines.push(Line::from(spans));

        // Validation errors get their own line under the row.
        for &index in row {
            if form.fields[index].error.is_some() {
                lines.push(Line::from(Span::styled(
                    format!("  ✗ {}", texts.modal.field_required),
                    Style::default().fg(c.error),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn field_spans(spans: &mut Vec<Span>, field: &FieldState, focused: bool, ports_text: Option<&str>) {
    let texts = t();
    let c = colors();

    let mut name = label(field.def.label).to_string();
    if field.def.required {
        name.push_str(texts.modal.required_mark);
    }
    let name_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    spans.push(Span::styled(format!("{name}: "), name_style));

    let value_style = if focused {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };

    match &field.value {
        FieldValue::Text {
            buffer,
            masked,
            revealed,
        } => {
            let shown = if *masked && !*revealed {
                SECRET_MASK.to_string()
            } else {
                buffer.clone()
            };
            spans.push(Span::styled(shown, value_style));
            if *masked && focused {
                spans.push(Span::styled(
                    format!("  {}", texts.modal.generate_hint),
                    Style::default().fg(c.muted),
                ));
            }
        }
        FieldValue::Json { buffer } => {
            spans.push(Span::styled(buffer.clone(), value_style));
        }
        FieldValue::Capacity { buffer, unit } => {
            spans.push(Span::styled(buffer.clone(), value_style));
            spans.push(Span::styled(
                format!(" ◂{}▸", unit.label()),
                Style::default().fg(c.muted),
            ));
        }
        FieldValue::Ports { entries } => {
            let shown = ports_text
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} ports", entries.len()));
            spans.push(Span::styled(shown, value_style));
        }
        FieldValue::Logo {
            value,
            options,
            enabled,
        } => {
            if *enabled {
                let shown = if value.is_empty() { "-" } else { value.as_str() };
                spans.push(Span::styled(shown.to_string(), value_style));
                if !options.is_empty() {
                    spans.push(Span::styled(" ◂▸", Style::default().fg(c.muted)));
                }
            } else {
                spans.push(Span::styled(
                    texts.modal.logo_disabled,
                    Style::default().fg(c.muted),
                ));
            }
        }
        FieldValue::ReadOnly { display } => {
            spans.push(Span::styled(
                display.clone(),
                Style::default().fg(c.muted),
            ));
        }
    }

    // Show where typing lands.
    if focused {
        match &field.value {
            FieldValue::Logo { .. } | FieldValue::ReadOnly { .. } => {}
            _ => spans.push(Span::styled("▏", Style::default().fg(c.highlight))),
        }
    }
}

fn render_confirm_delete(frame: &mut Frame, pending: &PendingDelete, yes_focused: bool) {
    let texts = t();
    let c = colors();
    let area = centered_rect(44, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(format!(" {} ", texts.modal.delete_title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = if pending.count() == 1 {
        texts.modal.delete_one.to_string()
    } else {
        texts
            .modal
            .delete_many
            .replace("{}", &pending.count().to_string())
    };

    let focused = Style::default()
        .bg(c.selected_bg)
        .fg(c.selected_fg)
        .add_modifier(Modifier::BOLD);
    let blurred = Style::default().fg(c.muted);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!("  {message}"))),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("[ {} ]", texts.common.yes),
                if yes_focused { focused } else { blurred },
            ),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", texts.common.no),
                if yes_focused { blurred } else { focused },
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_import(frame: &mut Frame, path: &str) {
    let c = colors();
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(format!(" {} · CSV ", t().common.add));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  File: ", Style::default().fg(c.muted)),
            Span::styled(path.to_string(), Style::default().fg(c.fg)),
            Span::styled("▏", Style::default().fg(c.highlight)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 72, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(format!(" {} ", texts.help.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = texts
        .help
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(c.fg))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, message: &str) {
    let c = colors();
    let area = centered_rect(50, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(" ✗ ".to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(c.error))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
