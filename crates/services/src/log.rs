//! Tracing-backed stand-ins for the excluded UI surfaces.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::traits::{CategoryState, Destination, Navigator, Notifier};

/// Category sub-state with nothing to prepare. The demo CLI has no category
/// rail to hydrate, but the orchestrator still awaits initialization in the
/// same order the real screen would.
pub struct NoopCategoryState;

#[async_trait]
impl CategoryState for NoopCategoryState {
    async fn initialize(&self) {}
}

/// Notifier that reports failures on the log instead of a dialog.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn show_failure(&self, title: &str, message: &str, dismiss: &str) {
        warn!(title, message, dismiss, "failure notification");
    }
}

/// Navigator that records navigation requests on the log.
pub struct LogNavigator;

#[async_trait]
impl Navigator for LogNavigator {
    async fn go_to(&self, destination: Destination) {
        info!(?destination, "navigation requested");
    }
}
