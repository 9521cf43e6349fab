//! Sentient palette.

use ratatui::style::{Color, Modifier, Style};

pub const PURPLE: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const CYAN: Color = Color::Rgb(0x06, 0xb6, 0xd4);
pub const DARK_BG: Color = Color::Rgb(0x0f, 0x0f, 0x1e);
pub const DARK_CARD: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
pub const MUTED: Color = Color::Gray;
pub const FAINT: Color = Color::DarkGray;

pub fn base() -> Style {
    Style::default().fg(Color::White).bg(DARK_BG)
}

pub fn card() -> Style {
    Style::default().fg(Color::White).bg(DARK_CARD)
}

/// Card border: purple, dimmed unless focused.
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(CYAN)
    } else {
        Style::default().fg(PURPLE).add_modifier(Modifier::DIM)
    }
}

pub fn heading() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn faint() -> Style {
    Style::default().fg(FAINT)
}
