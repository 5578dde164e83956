//! Theme and shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme. A single dark scheme for now; the struct keeps the
/// render code free of literal colors.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub muted: Color,
}

#[must_use]
pub fn colors() -> ThemeColors {
    ThemeColors {
        fg: Color::Rgb(212, 212, 212),
        border: Color::Rgb(62, 62, 62),
        border_focused: Color::Rgb(0, 122, 204),
        highlight: Color::Rgb(0, 122, 204),
        selected_bg: Color::Rgb(38, 79, 120),
        selected_fg: Color::White,
        error: Color::Rgb(244, 135, 113),
        muted: Color::Rgb(128, 128, 128),
    }
}

pub struct Styles;

impl Styles {
    #[must_use]
    pub fn statusbar() -> Style {
        Style::default().bg(Color::Rgb(0, 122, 204)).fg(Color::White)
    }

    #[must_use]
    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
