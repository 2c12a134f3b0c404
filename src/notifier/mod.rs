//! Notification transports.

pub mod slack;

pub use slack::SlackNotifier;

use crate::error::DeliveryError;
use crate::notification::ChatNotification;

/// Delivers a chat notification. Implementations may block.
pub trait Notifier: Send + Sync {
    /// Transport name, used in error reports.
    fn name(&self) -> &str;

    /// Deliver one notification.
    ///
    /// Return [`DeliveryError::Transport`] for recoverable network or remote
    /// failures; the adapter logs those and carries on.
    fn send(&self, notification: &ChatNotification) -> Result<(), DeliveryError>;
}
