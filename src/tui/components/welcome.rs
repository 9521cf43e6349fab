//! # Welcome Panel Component
//!
//! Shown in place of the message list while the conversation is empty.
//! Offers suggested prompts; Up/Down moves the highlight and Enter on an
//! empty draft sends the highlighted one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const SUGGESTED_PROMPTS: [&str; 6] = [
    "Tell me about Sentient AGI",
    "Why is crypto important?",
    "What makes you different from GPT-4?",
    "Explain decentralized AI",
    "What is blockchain?",
    "How does Sentient work?",
];

const PROMPT_HEIGHT: u16 = 3;
const GRID_COLUMNS: usize = 2;

/// Highlighted suggestion. Persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct WelcomeState {
    pub selected: usize,
}

impl WelcomeState {
    pub fn selected_prompt(&self) -> &'static str {
        SUGGESTED_PROMPTS[self.selected % SUGGESTED_PROMPTS.len()]
    }
}

impl EventHandler for WelcomeState {
    /// The highlight changed.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let last = SUGGESTED_PROMPTS.len() - 1;
        let next = match event {
            TuiEvent::CursorUp => self.selected.checked_sub(1).unwrap_or(last),
            TuiEvent::CursorDown => {
                if self.selected >= last {
                    0
                } else {
                    self.selected + 1
                }
            }
            _ => return None,
        };
        self.selected = next;
        Some(next)
    }
}

pub struct WelcomePanel<'a> {
    pub state: &'a WelcomeState,
}

impl<'a> WelcomePanel<'a> {
    pub fn new(state: &'a WelcomeState) -> Self {
        Self { state }
    }
}

impl<'a> Component for WelcomePanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = SUGGESTED_PROMPTS.len().div_ceil(GRID_COLUMNS) as u16;
        let [column] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(area);
        let [intro_area, grid_area, hint_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(rows * PROMPT_HEIGHT),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(column);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled("◆", Style::default().fg(theme::CYAN))),
            Line::default(),
            Line::from(Span::styled("Welcome to Dobby", theme::heading())),
            Line::from(Span::styled(
                "The world's first Loyal AI is ready to chat. Ask me anything!",
                theme::muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, intro_area);

        let row_areas = Layout::vertical(vec![Constraint::Length(PROMPT_HEIGHT); rows as usize])
            .split(grid_area);
        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .spacing(1)
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * GRID_COLUMNS + col;
                let Some(prompt) = SUGGESTED_PROMPTS.get(index) else {
                    continue;
                };
                let focused = index == self.state.selected;
                let text_style = if focused {
                    Style::default().fg(theme::CYAN).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let card = Paragraph::new(Span::styled(*prompt, text_style))
                    .style(theme::card())
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(theme::border(focused)),
                    );
                frame.render_widget(card, *cell);
            }
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "↑/↓ pick a suggestion · Enter to send it",
                theme::faint(),
            ))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
