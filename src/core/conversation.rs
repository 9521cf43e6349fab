//! # Conversation Store
//!
//! Owns the active conversation: the ordered message list, the draft in the
//! input box, and the loading flag that gates sending.
//!
//! ```text
//!   IDLE ──submit()──▶ SENDING ──settle(Ok)──▶ IDLE   (+ assistant reply)
//!                        │
//!                        └────settle(Err)──▶ IDLE     (+ failure notice)
//! ```
//!
//! `is_loading` is the only admission gate: a submit while SENDING is
//! rejected, never queued. List order is conversation order.

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use serde::Serialize;

use crate::inference::ProviderError;

/// Shown in place of a reply when the gateway fails for any reason.
pub const GATEWAY_FAILURE_NOTICE: &str =
    "⚠️ Sorry, error. Check your API key and Fireworks AI account.";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat bubble. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Local>,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            created_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    /// Display-only creation time, e.g. `14:05`.
    pub fn timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// An admitted submission, ready to hand to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Messages as they stood immediately before this submission.
    pub prior: Vec<Message>,
    /// The newly submitted user text.
    pub prompt: String,
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    draft: String,
    is_loading: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Admit a new user message.
    ///
    /// Returns `None` (and changes nothing) when the text is blank or a reply
    /// is still pending. Otherwise appends the user message, clears the draft,
    /// raises the loading flag and returns what the gateway needs.
    pub fn submit(&mut self, text: &str) -> Option<Submission> {
        if text.trim().is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }
        if self.is_loading {
            debug!("Ignoring submission while a reply is pending");
            return None;
        }

        let prior = self.messages.clone();
        self.messages.push(Message::user(text));
        self.draft.clear();
        self.is_loading = true;
        info!(
            "Submission admitted ({} prior messages, {} bytes)",
            prior.len(),
            text.len()
        );

        Some(Submission {
            prior,
            prompt: text.to_string(),
        })
    }

    /// Resolve the pending submission with the gateway outcome.
    ///
    /// Appends exactly one assistant message and lowers the loading flag.
    /// Returns `false` if nothing was in flight (the outcome is dropped).
    pub fn settle(&mut self, outcome: Result<String, ProviderError>) -> bool {
        if !self.is_loading {
            warn!("Settlement arrived with no submission in flight, dropping it");
            return false;
        }

        let reply = match outcome {
            Ok(text) => Message::assistant(text),
            Err(e) => {
                if e.is_auth() {
                    warn!("Completion failed (authentication): {}", e);
                } else {
                    warn!("Completion failed: {}", e);
                }
                Message::assistant(GATEWAY_FAILURE_NOTICE)
            }
        };
        self.messages.push(reply);
        self.is_loading = false;
        true
    }

    /// Clear messages and draft. Leaves the loading flag alone.
    pub fn start_new(&mut self) {
        self.messages.clear();
        self.draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }
}
