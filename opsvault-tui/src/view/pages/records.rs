//! Records listing page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use opsvault_core::TableView;

use crate::i18n::{label, t};
use crate::model::App;
use crate::view::theme::colors;

/// Width of the leading checkbox column.
const MARK_WIDTH: usize = 4;
/// Fallback width for columns without a preference.
const DEFAULT_COL_WIDTH: usize = 16;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // search line
            Constraint::Min(1),    // table
            Constraint::Length(1), // pager
        ])
        .split(area);

    render_search_line(app, frame, rows[0]);

    match app.records.view.as_ref() {
        Some(view) if !view.is_empty() => {
            render_table(app, view, frame, rows[1]);
            render_pager(view, frame, rows[2]);
        }
        _ => render_empty(app, frame, rows[1]),
    }
}

fn render_search_line(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let line = match app.records.search.as_deref() {
        Some(buffer) => Line::from(vec![
            Span::styled(
                format!(" {}: ", texts.records.search),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(buffer.to_string(), Style::default().fg(c.fg)),
            Span::styled("▏", Style::default().fg(c.highlight)),
        ]),
        None => {
            let keyword = app.backend.keyword();
            if keyword.is_empty() {
                Line::from("")
            } else {
                Line::from(Span::styled(
                    format!(" {}: {keyword}", texts.records.search),
                    Style::default().fg(c.muted),
                ))
            }
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Pad or truncate to the display width, unicode-aware.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

fn column_widths(view: &TableView) -> Vec<usize> {
    view.widths
        .iter()
        .map(|w| w.map_or(DEFAULT_COL_WIDTH, usize::from))
        .collect()
}

fn render_table(app: &App, view: &TableView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let widths = column_widths(view);
    let mut lines: Vec<Line> = Vec::new();

    // Header.
    let mut spans = vec![Span::styled(
        fit("", MARK_WIDTH),
        Style::default().fg(c.muted),
    )];
    for (col, key) in view.headers.iter().enumerate() {
        let style = if col == app.records.col {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(fit(label(key), widths[col] + 1), style));
    }
    lines.push(Line::from(spans));

    // Rows.
    for (i, row) in view.rows.iter().enumerate() {
        let is_cursor = i == app.records.cursor;
        let marked = row.id.is_some_and(|id| app.backend.is_selected(id));
        let mark = if marked { " [x]" } else { " [ ]" };

        let row_style = if is_cursor {
            Style::default().bg(c.selected_bg).fg(c.selected_fg)
        } else {
            Style::default().fg(c.fg)
        };

        let mut spans = vec![Span::styled(fit(mark, MARK_WIDTH), row_style)];
        for (col, cell) in row.cells.iter().enumerate() {
            let mut style = row_style;
            if is_cursor && col == app.records.col {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if cell.link.is_some() {
                style = style.add_modifier(Modifier::ITALIC);
            }
            spans.push(Span::styled(fit(cell.text(), widths[col] + 1), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_pager(view: &TableView, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let Some(pager) = view.pager.as_ref() else {
        let line = Line::from(Span::styled(
            format!(" {} {}", texts.records.total, view.total),
            Style::default().fg(c.muted),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let mut spans = vec![Span::styled(
        if pager.prev_enabled { " ◂ " } else { "   " }.to_string(),
        Style::default().fg(c.fg),
    )];
    for page in &pager.pages {
        let style = if *page == pager.current {
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }
    spans.push(Span::styled(
        if pager.next_enabled { " ▸ " } else { "   " }.to_string(),
        Style::default().fg(c.fg),
    ));
    spans.push(Span::styled(
        format!(
            "  {}-{} {} {} {}",
            pager.range_start, pager.range_end, texts.records.page_of, texts.records.total, pager.total
        ),
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let (title, hint) = match app.records.failure.as_deref() {
        Some(message) => (message.to_string(), String::new()),
        None => (
            texts.records.empty_title.to_string(),
            texts.records.empty_hint.to_string(),
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {hint}"),
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_truncates_and_pads_by_display_width() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        // wide characters count double
        assert_eq!(fit("主机名", 4), "主机");
        assert_eq!(fit("主机", 5), "主机 ");
    }
}
