//! Left navigation panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use opsvault_core::{schema, PageKind};

use crate::i18n::t;
use crate::model::{App, NavEntry};
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let border_style = if app.focus.is_navigation() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let content = match entry {
                NavEntry::Page(kind) => {
                    let label = match kind {
                        PageKind::Accounts => texts.nav.accounts,
                        PageKind::Hosts => texts.nav.hosts,
                        PageKind::Secrets => texts.nav.secrets,
                        PageKind::Sites => texts.nav.sites,
                    };
                    format!("{}{} {}", prefix, schema(*kind).icon, label)
                }
                NavEntry::Logout => format!("{}⏻ {}", prefix, texts.nav.logout),
            };

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
