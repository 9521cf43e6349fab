//! # Sidebar Component
//!
//! Left column of the chat view: navigation hints and the recent-chats list
//! from the history recorder, most recent first.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::core::history::History;
use crate::tui::component::Component;
use crate::tui::theme;

/// Fixed width of the sidebar column.
pub const SIDEBAR_WIDTH: u16 = 30;

pub struct Sidebar<'a> {
    pub history: &'a History,
}

impl<'a> Sidebar<'a> {
    pub fn new(history: &'a History) -> Self {
        Self { history }
    }

    fn entries(&self, width: u16) -> Vec<ListItem<'a>> {
        let title_width = width.saturating_sub(2) as usize;
        self.history
            .iter()
            .map(|entry| {
                let title: String = entry.title.chars().take(title_width).collect();
                ListItem::new(vec![
                    Line::from(Span::styled(
                        title,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(entry.timestamp(), theme::faint())),
                    Line::default(),
                ])
            })
            .collect()
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme::border(false))
            .style(theme::card());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [nav_area, heading_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let nav = Paragraph::new(vec![
            Line::from(Span::styled("← Esc  Back to Home", theme::muted())),
            Line::from(vec![
                Span::styled("+ ", Style::default().fg(theme::CYAN)),
                Span::styled("Ctrl+N  New Chat", theme::heading()),
            ]),
        ]);
        frame.render_widget(nav, nav_area);

        frame.render_widget(
            Paragraph::new(Span::styled("RECENT CHATS", theme::faint())),
            heading_area,
        );

        if self.history.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No chat history yet",
                    theme::faint().add_modifier(Modifier::ITALIC),
                )),
                list_area,
            );
        } else {
            frame.render_widget(List::new(self.entries(list_area.width)), list_area);
        }

        frame.render_widget(
            Paragraph::new(Span::styled("Ctrl+L  Clear History", theme::muted())),
            footer_area,
        );
    }
}
