//! # One-shot mode
//!
//! Drives a single submission through the same reducer the TUI uses, then
//! prints the assistant's reply. Used by `dobby --prompt <TEXT>`.

use std::io::{self, Write};
use std::sync::Arc;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::conversation::Sender;
use crate::core::state::App;
use crate::inference::{CompletionRequest, DOBBY_MODEL, FireworksProvider};

/// Submit `text` and wait for the gateway to settle.
///
/// Returns `false` if the submission was not admitted (blank text or a reply
/// already pending), in which case nothing changed.
pub async fn exchange(app: &mut App, text: &str) -> bool {
    let submission = match update(app, Action::Submit(text.to_string())) {
        Effect::SpawnRequest(submission) => submission,
        _ => return false,
    };

    let outcome = app
        .gateway
        .complete(CompletionRequest {
            history: &submission.prior,
            prompt: &submission.prompt,
        })
        .await;

    update(
        app,
        Action::Settled {
            prompt: submission.prompt,
            outcome,
        },
    );
    true
}

/// The latest assistant message, if any.
fn last_reply(app: &App) -> Option<&str> {
    app.conversation
        .messages()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Assistant)
        .map(|m| m.text.as_str())
}

pub async fn run(config: ResolvedConfig, prompt: String) -> io::Result<()> {
    let gateway = FireworksProvider::new(config.api_key, Some(config.base_url));
    let mut app = App::new(Arc::new(gateway), DOBBY_MODEL.to_string());

    info!("One-shot prompt ({} bytes)", prompt.len());
    if !exchange(&mut app, &prompt).await {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "prompt must not be blank",
        ));
    }

    let mut stdout = io::stdout().lock();
    if let Some(reply) = last_reply(&app) {
        writeln!(stdout, "{reply}")?;
    }
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversation::GATEWAY_FAILURE_NOTICE;
    use crate::test_support::{ScriptedProvider, test_app, test_app_with};

    #[tokio::test]
    async fn test_exchange_appends_user_and_reply() {
        let gateway = Arc::new(ScriptedProvider::replying(
            "Blockchain is a distributed ledger.",
        ));
        let mut app = test_app_with(gateway.clone());

        assert!(exchange(&mut app, "What is blockchain?").await);

        let texts: Vec<&str> = app
            .conversation
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["What is blockchain?", "Blockchain is a distributed ledger."]
        );
        assert_eq!(last_reply(&app), Some("Blockchain is a distributed ledger."));
        assert!(!app.conversation.is_loading());
        assert_eq!(app.history.iter().next().unwrap().title, "What is blockchain?");
    }

    #[tokio::test]
    async fn test_exchange_passes_prior_history() {
        let gateway = Arc::new(ScriptedProvider::replying("ok"));
        let mut app = test_app_with(gateway.clone());

        exchange(&mut app, "first").await;
        exchange(&mut app, "second").await;

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].0.is_empty());
        assert_eq!(seen[0].1, "first");
        let prior: Vec<&str> = seen[1].0.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(prior, vec!["first", "ok"]);
        assert_eq!(seen[1].1, "second");
    }

    #[tokio::test]
    async fn test_exchange_failure_appends_notice() {
        let mut app = test_app_with(Arc::new(ScriptedProvider::failing()));

        assert!(exchange(&mut app, "hi").await);

        assert_eq!(app.conversation.messages().len(), 2);
        assert_eq!(last_reply(&app), Some(GATEWAY_FAILURE_NOTICE));
        assert!(app.history.is_empty());
        assert!(!app.conversation.is_loading());
    }

    #[tokio::test]
    async fn test_blank_exchange_is_not_admitted() {
        let gateway = Arc::new(ScriptedProvider::replying("never"));
        let mut app = test_app_with(gateway.clone());

        assert!(!exchange(&mut app, "  ").await);

        assert!(app.conversation.messages().is_empty());
        assert!(gateway.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_last_reply_empty_conversation() {
        assert_eq!(last_reply(&test_app()), None);
    }
}
