//! # Application State
//!
//! Core business state for Dobby. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── gateway: Arc<dyn CompletionGateway>  // remote completion endpoint
//! ├── conversation: Conversation           // messages, draft, loading flag
//! ├── history: History                     // recent exchanges (max 10)
//! ├── page: Page                           // landing or chat
//! ├── status_message: String               // status line text
//! └── model_name: String                   // shown in the header
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::conversation::Conversation;
use crate::core::history::History;
use crate::inference::CompletionGateway;

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Chat,
}

pub struct App {
    pub gateway: Arc<dyn CompletionGateway>,
    pub conversation: Conversation,
    pub history: History,
    pub page: Page,
    pub status_message: String,
    pub model_name: String,
}

impl App {
    pub fn new(gateway: Arc<dyn CompletionGateway>, model_name: String) -> Self {
        Self {
            gateway,
            conversation: Conversation::new(),
            history: History::new(),
            page: Page::default(),
            status_message: String::new(),
            model_name,
        }
    }
}
