use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::conversation::{Message, Sender};
use crate::tui::theme;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
pub const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders (top + bottom) plus the timestamp row.
pub const VERTICAL_OVERHEAD: u16 = 3;
/// Bubbles never take more than this share of the row, in percent.
const MAX_BUBBLE_PERCENT: u16 = 75;
/// Narrowest bubble that still fits the sender label and timestamp.
const MIN_BUBBLE_WIDTH: u16 = 12;

/// Build textwrap options matching the bubble's inner width.
fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// A single chat bubble: user messages on the right, Dobby's on the left.
///
/// Transient: built each frame from a `&Message`. Text is wrapped here with
/// `textwrap` rather than by `Paragraph`, so `calculate_height` and the
/// rendered height always agree.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    fn max_bubble_width(row_width: u16) -> u16 {
        let share = (row_width as u32 * MAX_BUBBLE_PERCENT as u32 / 100) as u16;
        share.max(MIN_BUBBLE_WIDTH).min(row_width)
    }

    fn wrapped(text: &str, row_width: u16) -> Vec<String> {
        let inner = Self::max_bubble_width(row_width).saturating_sub(HORIZONTAL_OVERHEAD);
        if inner == 0 {
            return vec![String::new()];
        }
        let lines: Vec<String> = textwrap::wrap(text, wrap_options(inner as usize))
            .into_iter()
            .map(|l| l.into_owned())
            .collect();
        if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        }
    }

    /// Height of this message's bubble in a row of `row_width` columns.
    pub fn calculate_height(message: &Message, row_width: u16) -> u16 {
        if row_width <= HORIZONTAL_OVERHEAD {
            return 1;
        }
        u16::try_from(Self::wrapped(&message.text, row_width).len())
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn label(&self) -> &'static str {
        match self.message.sender {
            Sender::User => "you",
            Sender::Assistant => "dobby",
        }
    }

    fn styles(&self) -> (Style, Style) {
        match self.message.sender {
            Sender::User => (
                Style::default().fg(Color::White).bg(theme::PURPLE),
                Style::default().fg(theme::BLUE),
            ),
            Sender::Assistant => (theme::card(), theme::border(false)),
        }
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= HORIZONTAL_OVERHEAD {
            return;
        }

        let lines = Self::wrapped(&self.message.text, area.width);
        let timestamp = self.message.timestamp();
        let content_width = lines
            .iter()
            .map(|l| l.width())
            .chain([timestamp.width(), self.label().width()])
            .max()
            .unwrap_or(0) as u16;
        let bubble_width = content_width
            .saturating_add(HORIZONTAL_OVERHEAD)
            .max(MIN_BUBBLE_WIDTH)
            .min(Self::max_bubble_width(area.width));

        let x = match self.message.sender {
            Sender::User => area.x + area.width - bubble_width,
            Sender::Assistant => area.x,
        };
        let bubble = Rect::new(x, area.y, bubble_width, area.height);

        let (style, border_style) = self.styles();
        let block = Block::bordered()
            .title(self.label())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H))
            .style(style);
        let inner = block.inner(bubble);
        block.render(bubble, buf);

        let mut text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        text.push(Line::from(Span::styled(
            timestamp,
            style.add_modifier(Modifier::DIM),
        )));
        Paragraph::new(text).style(style).render(inner, buf);
    }
}
