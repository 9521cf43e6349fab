use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::{App, Page};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::sidebar::SIDEBAR_WIDTH;
use crate::tui::components::title_bar::TITLE_BAR_HEIGHT;
use crate::tui::components::{
    LandingPage, MessageList, Sidebar, TitleBar, WelcomePanel,
};
use crate::tui::theme;

/// Narrower terminals hide the sidebar.
const MIN_WIDTH_FOR_SIDEBAR: u16 = 70;

/// Areas of the chat view.
pub struct ChatLayout {
    pub sidebar: Option<Rect>,
    pub title: Rect,
    pub messages: Rect,
    pub input: Rect,
}

pub fn chat_layout(area: Rect) -> ChatLayout {
    let (sidebar, main) = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);
        (Some(sidebar), main)
    } else {
        (None, area)
    };

    let [title, messages, input] = Layout::vertical([
        Constraint::Length(TITLE_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(main);

    ChatLayout {
        sidebar,
        title,
        messages,
        input,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match app.page {
        Page::Landing => {
            LandingPage::new(tui.pulse_value).render(frame, frame.area());
        }
        Page::Chat => draw_chat(frame, app, tui, spinner_frame),
    }
}

fn draw_chat(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    frame.render_widget(Block::default().style(theme::base()), frame.area());
    let layout = chat_layout(frame.area());

    if let Some(sidebar_area) = layout.sidebar {
        Sidebar::new(&app.history).render(frame, sidebar_area);
    }

    TitleBar::new(app.model_name.clone(), app.status_message.clone()).render(frame, layout.title);

    if app.conversation.is_empty() {
        WelcomePanel::new(&tui.welcome).render(frame, layout.messages);
    } else {
        MessageList::new(
            &mut tui.message_list,
            app.conversation.messages(),
            app.conversation.is_loading(),
            spinner_frame,
        )
        .render(frame, layout.messages);
    }

    tui.input_box.dimmed = app.conversation.is_loading();
    tui.input_box.render(frame, layout.input);
}
