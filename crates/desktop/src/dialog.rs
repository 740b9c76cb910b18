//! User-facing dialogs: delete confirmation and failure alerts.
//!
//! Both are capabilities injected into the view-model so frontends (and
//! tests) decide how a question is asked or an alert is shown.

use async_trait::async_trait;

/// Asks the user a yes/no question before a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Synchronous predicates work as confirmations directly.
#[async_trait]
impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers yes without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, "auto-confirmed");
        true
    }
}

/// Blocking, user-visible alert.
pub trait Notify: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAlert;

impl Notify for StderrAlert {
    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
