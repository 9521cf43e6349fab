//! # Actions
//!
//! Everything that can happen in Dobby becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The gateway answers? That's `Action::Settled { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` telling the adapter what I/O to perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::sync::mpsc;

use log::{debug, info, warn};

use crate::core::conversation::Submission;
use crate::core::state::{App, Page};
use crate::inference::ProviderError;

#[derive(Debug)]
pub enum Action {
    /// Leave the landing page for the chat view.
    OpenChat,
    /// Back to the landing page. The conversation is kept.
    GoHome,
    SetDraft(String),
    Submit(String),
    /// The gateway call for `prompt` finished.
    Settled {
        prompt: String,
        outcome: Result<String, ProviderError>,
    },
    NewChat,
    ClearHistory,
    Quit,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug)]
pub enum Effect {
    None,
    /// Send this submission to the gateway and report back with `Action::Settled`.
    SpawnRequest(Submission),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenChat => {
            app.page = Page::Chat;
            Effect::None
        }
        Action::GoHome => {
            app.page = Page::Landing;
            Effect::None
        }
        Action::SetDraft(text) => {
            app.conversation.set_draft(text);
            Effect::None
        }
        Action::Submit(text) => match app.conversation.submit(&text) {
            Some(submission) => {
                app.status_message = String::from("Dobby is typing...");
                Effect::SpawnRequest(submission)
            }
            None => Effect::None,
        },
        Action::Settled { prompt, outcome } => {
            let succeeded = outcome.is_ok();
            if app.conversation.settle(outcome) {
                if succeeded {
                    let entry = app.history.record(&prompt);
                    debug!("Recorded history entry \"{}\"", entry.title);
                    app.status_message.clear();
                } else {
                    app.status_message = String::from("Request failed");
                }
            }
            Effect::None
        }
        Action::NewChat => {
            if app.conversation.is_loading() {
                info!("New chat refused while a reply is pending");
                app.status_message = String::from("Wait for Dobby to finish replying");
                return Effect::None;
            }
            app.conversation.start_new();
            app.status_message.clear();
            Effect::None
        }
        Action::ClearHistory => {
            app.history.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Guarantees that a spawned gateway call reports back exactly once.
///
/// `resolve()` sends the real outcome. If the owning task ends without
/// resolving (aborted, panicked), `Drop` sends an `Interrupted` failure so the
/// conversation never stays stuck in the loading state.
pub struct Settlement {
    prompt: String,
    tx: Option<mpsc::Sender<Action>>,
}

impl Settlement {
    pub fn new(prompt: String, tx: mpsc::Sender<Action>) -> Self {
        Self {
            prompt,
            tx: Some(tx),
        }
    }

    pub fn resolve(mut self, outcome: Result<String, ProviderError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<String, ProviderError>) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        let action = Action::Settled {
            prompt: std::mem::take(&mut self.prompt),
            outcome,
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver settlement: receiver dropped");
        }
    }
}

impl Drop for Settlement {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!("Request ended without a result, settling as interrupted");
            self.send(Err(ProviderError::Interrupted));
        }
    }
}
