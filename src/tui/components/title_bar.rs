//! # TitleBar Component
//!
//! Chat header: brand mark, "Dobby AI", the tagline, the model in use and
//! the transient status message ("Dobby is typing...", "Request failed").
//!
//! Stateless. All fields are props copied from `App` each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme;

/// Rows used by the header, including its bottom rule.
pub const TITLE_BAR_HEIGHT: u16 = 3;

pub struct TitleBar {
    pub model_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(model_name: String, status_message: String) -> Self {
        Self {
            model_name,
            status_message,
        }
    }

    /// Last path segment of the model id, e.g. `dobby-unhinged-llama-3-3-70b-new`.
    fn short_model(&self) -> &str {
        self.model_name
            .rsplit('/')
            .next()
            .unwrap_or(&self.model_name)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border(false))
            .style(theme::card());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [brand_area, info_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Min(0)]).areas(inner);

        let brand = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("◆ ", Style::default().fg(theme::CYAN)),
                Span::styled("Dobby AI", theme::heading()),
            ]),
            Line::from(Span::styled("  The First Loyal AI", theme::muted())),
        ]);
        frame.render_widget(brand, brand_area);

        let mut info = vec![Line::from(Span::styled(
            format!("model: {}", self.short_model()),
            theme::faint(),
        ))];
        if !self.status_message.is_empty() {
            info.push(Line::from(Span::styled(
                self.status_message.clone(),
                Style::default()
                    .fg(theme::CYAN)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        frame.render_widget(
            Paragraph::new(info).alignment(Alignment::Right),
            info_area,
        );
    }
}
