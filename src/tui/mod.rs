//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Threading
//!
//! Everything that touches `App` runs on the event-loop thread. Gateway
//! calls run on tokio tasks and report back through a `std::sync::mpsc`
//! channel of `Action`s, drained once per loop iteration.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (landing page, typing indicator): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or replies.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, Settlement, update};
use crate::core::config::ResolvedConfig;
use crate::core::conversation::Submission;
use crate::core::state::{App, Page};
use crate::inference::{CompletionGateway, CompletionRequest, DOBBY_MODEL, FireworksProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState, WelcomeState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub welcome: WelcomeState,
    // Animation state
    pub pulse_value: f32,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            welcome: WelcomeState::default(),
            pulse_value: 0.0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Blink timer resets on every draw
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the Fireworks gateway from resolved config.
pub fn build_gateway(config: &ResolvedConfig) -> Arc<dyn CompletionGateway> {
    Arc::new(FireworksProvider::new(
        config.api_key.clone(),
        Some(config.base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_gateway(&config), DOBBY_MODEL.to_string());
    if config.start_in_chat {
        update(&mut app, Action::OpenChat);
    }
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = app.page == Page::Landing || app.conversation.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 2.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 4.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in actions_for_event(&app, &mut tui, event) {
                if dispatch(&mut app, &mut tui, action, &tx) {
                    should_quit = true;
                }
            }
        }
        if should_quit {
            break Ok(());
        }

        // Replies from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("Dobby shutting down");
    result
}

/// Run one action through the reducer and perform its effect.
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let starts_new_conversation = matches!(action, Action::NewChat);
    let effect = update(app, action);

    if starts_new_conversation && app.conversation.is_empty() {
        tui.message_list.reset();
    }
    tui.input_box.sync(app.conversation.draft());

    match effect {
        Effect::None => false,
        Effect::SpawnRequest(submission) => {
            tui.message_list.stick_to_bottom = true;
            spawn_request(app, submission, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Translate a terminal event into zero or more actions for the current page.
/// Presentation-only events (scrolling, suggestion highlight) are applied here.
fn actions_for_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    if matches!(event, TuiEvent::Quit) {
        return vec![Action::Quit];
    }
    if matches!(event, TuiEvent::Resize) {
        return Vec::new();
    }

    match app.page {
        Page::Landing => match event {
            TuiEvent::Submit => vec![Action::OpenChat],
            TuiEvent::Escape | TuiEvent::InputChar('q') => vec![Action::Quit],
            _ => Vec::new(),
        },
        Page::Chat => chat_actions(app, tui, event),
    }
}

fn chat_actions(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    let welcome_visible = app.conversation.is_empty();
    match event {
        TuiEvent::Escape => vec![Action::GoHome],
        TuiEvent::NewChat => vec![Action::NewChat],
        TuiEvent::ClearHistory => vec![Action::ClearHistory],
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(&event);
            Vec::new()
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown if welcome_visible => {
            tui.welcome.handle_event(&event);
            Vec::new()
        }
        TuiEvent::CursorUp => {
            tui.message_list.handle_event(&TuiEvent::ScrollUp);
            Vec::new()
        }
        TuiEvent::CursorDown => {
            tui.message_list.handle_event(&TuiEvent::ScrollDown);
            Vec::new()
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::ContentChanged) => {
                vec![Action::SetDraft(tui.input_box.buffer().to_string())]
            }
            Some(InputEvent::Submit(text)) => {
                if text.trim().is_empty() && welcome_visible {
                    vec![Action::Submit(tui.welcome.selected_prompt().to_string())]
                } else {
                    vec![Action::Submit(text)]
                }
            }
            None => Vec::new(),
        },
    }
}

fn spawn_request(app: &App, submission: Submission, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning gateway request ({} prior messages)",
        submission.prior.len()
    );
    let gateway = app.gateway.clone();

    tokio::spawn(async move {
        // Settles as interrupted if this task dies before resolving
        let settlement = Settlement::new(submission.prompt.clone(), tx);
        let outcome = gateway
            .complete(CompletionRequest {
                history: &submission.prior,
                prompt: &submission.prompt,
            })
            .await;
        if let Err(e) = &outcome {
            warn!("Gateway request failed: {}", e);
        }
        settlement.resolve(outcome);
    });
}
