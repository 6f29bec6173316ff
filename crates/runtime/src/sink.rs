//! The notification-sink collaborator.
//!
//! The wrapper reports through a [`ProgressSink`] at up to three points:
//! a status message before the unit of work runs, a summary after it
//! succeeds (only when techniques were active), and the stringified error
//! when it fails. Messages are displayable text with no schema.

use tracing::{error, info};

/// Receives human-readable progress and error messages from [`wrap`].
///
/// Implementations are typically toast queues, log adapters, or channel
/// senders feeding a UI.
///
/// [`wrap`]: crate::wrap
pub trait ProgressSink: Send + Sync {
    /// A status or summary message.
    fn progress(&self, message: &str);

    /// The unit of work failed; `message` is the stringified error.
    fn error(&self, _message: &str) {}
}

/// A [`ProgressSink`] that forwards to the `tracing` subscriber.
///
/// The default sink for headless deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn progress(&self, message: &str) {
        info!(target: "promptgate::progress", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "promptgate::progress", "{message}");
    }
}
