//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `LandingPage`: brand screen shown at startup
//! - `TitleBar`: chat header with model and status
//! - `Sidebar`: recent chats from the history recorder
//! - `MessageBubble`: a single chat message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: message field, mirrors the conversation draft
//! - `MessageList`: scrollable conversation with layout caching
//! - `WelcomePanel`: suggested prompts for an empty conversation
//!
//! Components receive external data as props rather than reading `App`
//! directly, which keeps them testable with `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── landing.rs       (Landing page)
//! ├── title_bar.rs     (Chat header)
//! ├── sidebar.rs       (Recent chats)
//! ├── message.rs       (Single message bubble)
//! ├── message_list.rs  (Scrollable message container)
//! ├── welcome.rs       (Empty-conversation suggestions)
//! └── input_box.rs     (Message field)
//! ```

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod sidebar;
pub mod title_bar;
pub mod welcome;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use message_list::{MessageList, MessageListState};
pub use sidebar::Sidebar;
pub use title_bar::TitleBar;
pub use welcome::{WelcomePanel, WelcomeState};
