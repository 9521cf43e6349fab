//! # InputBox Component
//!
//! Single-line message field at the bottom of the chat view.
//!
//! ## State Management
//!
//! The editing buffer and cursor are internal state. The conversation
//! store's draft is the source of truth: every edit is reported as
//! `ContentChanged` so the parent can dispatch `SetDraft`, and `sync()`
//! pulls the store's draft back in after each action (e.g. cleared on
//! submit, cleared on new chat).
//!
//! `dimmed` is a prop: set while Dobby is replying. Editing stays possible,
//! only sending is gated (by the store, not here).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const INPUT_HEIGHT: u16 = 3;
const PLACEHOLDER: &str = "Ask Dobby anything...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed. Carries the buffer, possibly blank.
    Submit(String),
    /// Buffer text changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible display column
    scroll: usize,
    /// Reply pending (Prop)
    pub dimmed: bool,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
            dimmed: false,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with `draft` if they differ, cursor at the end.
    pub fn sync(&mut self, draft: &str) {
        if self.buffer != draft {
            self.buffer = draft.to_string();
            self.cursor = self.buffer.len();
            if self.buffer.is_empty() {
                self.scroll = 0;
            }
        }
    }

    fn insert_str(&mut self, text: &str) {
        // Single-line field: line breaks become spaces
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &flattened);
        self.cursor += flattened.len();
    }

    /// Keep the cursor inside a window of `width` columns.
    fn update_scroll(&mut self, width: usize) {
        let cursor_col = self.buffer[..self.cursor].width();
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if width > 0 && cursor_col >= self.scroll + width {
            self.scroll = cursor_col + 1 - width;
        }
    }

    /// The part of the buffer that fits in `width` columns from `self.scroll`.
    fn visible_text(&self, width: usize) -> String {
        let mut col = 0;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col >= self.scroll {
                if col + w > self.scroll + width {
                    break;
                }
                out.push(c);
            }
            col += w;
        }
        out
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.dimmed {
            theme::border(false)
        } else {
            theme::border(true)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_bottom(Line::from(Span::styled(" Enter to send ", theme::faint())).right_aligned())
            .style(Style::default().bg(theme::DARK_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        self.update_scroll(width);

        let text_style = if self.dimmed {
            Style::default().fg(Color::White).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, theme::faint()))
        } else {
            Line::from(Span::styled(self.visible_text(width), text_style))
        };
        frame.render_widget(Paragraph::new(line), inner);

        if inner.width > 0 && inner.height > 0 {
            let cursor_col = self.buffer[..self.cursor].width().saturating_sub(self.scroll);
            let x = inner.x + (cursor_col as u16).min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    fn render(input: &mut InputBox, width: u16) -> String {
        let backend = TestBackend::new(width, INPUT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer(), "ab");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer(), "a");
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut input = typed("gm");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(input.buffer(), ">gm");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer(), ">g");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héé");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer(), "hé");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("gm\nfren".into()));
        assert_eq!(input.buffer(), "gm fren");
    }

    #[test]
    fn test_submit_reports_buffer_without_clearing() {
        let mut input = typed("hello");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit("hello".into()))
        );
        assert_eq!(input.buffer(), "hello");

        // Store cleared the draft
        input.sync("");
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn test_sync_moves_cursor_to_end() {
        let mut input = InputBox::new();
        input.sync("abc");
        input.handle_event(&TuiEvent::InputChar('d'));
        assert_eq!(input.buffer(), "abcd");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut input = InputBox::new();
        assert!(render(&mut input, 40).contains("Ask Dobby anything..."));

        let mut input = typed("hi");
        assert!(!render(&mut input, 40).contains("Ask Dobby anything..."));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        let mut input = typed(&format!("{}END", "a".repeat(50)));
        let text = render(&mut input, 20);
        assert!(text.contains("END"));
    }
}
