//! # Landing Page Component
//!
//! Brand screen shown at startup: title, pitch, the four feature cards and
//! a short about line. Enter opens the chat.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme;

pub const FEATURES: [(&str, &str); 4] = [
    ("Loyal AI", "Explicitly aligned with your values"),
    ("Community-Owned", "700k+ members building together"),
    ("Unhinged", "Honest, blunt, refreshingly human"),
    ("Pro-Crypto", "Deep knowledge of decentralization"),
];

const PITCH: &str = "Experience conversation with an AI that's genuinely on your side. \
                     Dobby is pro-crypto, pro-freedom, and built by the community.";

const ABOUT: &str = "Sentient is building the world's first community-owned AGI. \
                     With $85M+ in funding and 700,000+ community members, \
                     we're creating AI loyal to humanity.";

const LINKS: [(&str, &str); 2] = [
    ("Website", "https://www.sentient.xyz"),
    ("Discord", "https://discord.gg/sentientfoundation"),
];

const FOOTER: &str = "Built for Sentient Discord Builder Program | MIT License";

const CARD_HEIGHT: u16 = 5;

pub struct LandingPage {
    /// 0.0..=1.0, drives the call-to-action highlight.
    pub pulse: f32,
}

impl LandingPage {
    pub fn new(pulse: f32) -> Self {
        Self { pulse }
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let cta_style = if self.pulse > 0.5 {
            Style::default()
                .fg(theme::CYAN)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::PURPLE).add_modifier(Modifier::BOLD)
        };

        vec![
            Line::from(Span::styled("◆", Style::default().fg(theme::CYAN))),
            Line::default(),
            Line::from(vec![
                Span::styled("Sentient ", Style::default().fg(theme::PURPLE).add_modifier(Modifier::BOLD)),
                Span::styled("Dobby", Style::default().fg(theme::CYAN).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled("The World's First Loyal AI", theme::muted())),
            Line::default(),
            Line::from(Span::styled(PITCH, theme::faint())),
            Line::default(),
            Line::from(Span::styled("Press Enter to start chatting with Dobby →", cta_style)),
        ]
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(theme::base()), area);

        let content_width = area.width.saturating_sub(4).min(100);
        let header = Paragraph::new(self.header_lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let header_height = header.line_count(content_width) as u16;

        let about = Paragraph::new(Span::styled(ABOUT, theme::muted()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let about_height = about.line_count(content_width) as u16;

        let [column] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);
        let [
            header_area,
            _,
            features_heading_area,
            cards_area,
            _,
            about_heading_area,
            about_area,
            links_area,
            _,
            footer_area,
            hint_area,
        ] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(about_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(header, header_area);
        frame.render_widget(
            Paragraph::new(Span::styled("Why Dobby is Different", theme::heading()))
                .alignment(Alignment::Center),
            features_heading_area,
        );

        let card_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4])
            .spacing(1)
            .split(cards_area);
        for ((title, desc), card_area) in FEATURES.iter().zip(card_areas.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(*title, theme::heading())),
                Line::from(Span::styled(*desc, theme::muted())),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme::card())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border(false))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, *card_area);
        }

        frame.render_widget(
            Paragraph::new(Span::styled("About Sentient", theme::heading()))
                .alignment(Alignment::Center),
            about_heading_area,
        );
        frame.render_widget(about, about_area);

        let links: Vec<Span> = LINKS
            .iter()
            .enumerate()
            .flat_map(|(i, (name, url))| {
                let sep = if i == 0 { "" } else { "  ·  " };
                [
                    Span::styled(sep, theme::faint()),
                    Span::styled(format!("{name}: "), Style::default().fg(theme::PURPLE)),
                    Span::styled(*url, Style::default().fg(theme::CYAN)),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(links)).alignment(Alignment::Center),
            links_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(FOOTER, theme::faint())).alignment(Alignment::Center),
            footer_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Enter: chat · Esc/q: quit", theme::faint()))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}
