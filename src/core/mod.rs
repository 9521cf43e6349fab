//! # Core Application Logic
//!
//! This module contains Dobby's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Conversation store   │
//!                    │  • History recorder     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  One-shot  │
//!           │  Adapter   │              │   (stdin/  │
//!           │ (ratatui)  │              │   stdout)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`conversation`]: messages, draft and the loading gate
//! - [`history`]: bounded most-recent-first list of past exchanges
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: `~/.dobby/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod conversation;
pub mod history;
pub mod state;
