//! Email → chat notification adapter.
//!
//! Classifies an email-shaped value, extracts subject and body, composes a
//! [`ChatNotification`], and delivers it through the injected [`Notifier`].
//! Transport failures are logged and swallowed; everything else surfaces.

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::mime::EmailLike;
use crate::notification::ChatNotification;
use crate::notifier::Notifier;

/// Subject used for raw messages, which carry no headers of their own.
pub const RAW_MESSAGE_SUBJECT: &str = "New Message";

/// Converts email-like messages into chat notifications and sends them.
#[derive(Clone)]
pub struct NotificationAdapter {
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl NotificationAdapter {
    pub fn new(notifier: Arc<dyn Notifier>, logger: Arc<dyn Logger>) -> Self {
        Self { notifier, logger }
    }

    /// Whether `message` is one of the supported email shapes.
    pub fn supports(message: &dyn Any) -> bool {
        EmailLike::from_any(message).is_some()
    }

    /// Convert and deliver a type-erased message.
    ///
    /// Returns `Ok(true)` once delivery was attempted, including when the
    /// transport failed (that failure goes to the logger instead).
    pub fn send(&self, message: &dyn Any) -> Result<bool> {
        if !Self::supports(message) {
            return Err(Error::UnsupportedType);
        }

        let notification = Self::classify_and_compose(message)?;
        self.deliver(&notification)
    }

    /// Convert and deliver an already-classified message.
    pub fn send_mail(&self, mail: EmailLike<'_>) -> Result<bool> {
        let notification = Self::compose(mail)?;
        self.deliver(&notification)
    }

    /// Build the notification for a type-erased message.
    ///
    /// Unlike [`send`](Self::send) there is no membership check up front, so
    /// unknown types land in the fallback and fail with `InvalidInput`.
    pub fn classify_and_compose(message: &dyn Any) -> Result<ChatNotification> {
        match EmailLike::from_any(message) {
            Some(mail) => Self::compose(mail),
            None => Err(Error::InvalidInput),
        }
    }

    /// Build the notification for a classified message.
    pub fn compose(mail: EmailLike<'_>) -> Result<ChatNotification> {
        let (subject, content): (Option<&str>, Option<String>) = match mail {
            EmailLike::Email(email) => (email.subject(), email.text_body().map(str::to_string)),
            EmailLike::Composed(message) => {
                (message.subject(), Some(message.message().to_mime_string()?))
            }
            EmailLike::Raw(raw) => (Some(RAW_MESSAGE_SUBJECT), Some(raw.to_string())),
        };

        if subject.is_none() && content.is_none() {
            return Err(Error::EmptyContent);
        }

        tracing::debug!(
            kind = mail.kind(),
            has_subject = subject.is_some(),
            has_body = content.is_some(),
            "Composing chat notification"
        );

        ChatNotification::compose(subject, content.as_deref()).ok_or(Error::EmptyContent)
    }

    fn deliver(&self, notification: &ChatNotification) -> Result<bool> {
        match self.notifier.send(notification) {
            Ok(()) => {
                tracing::debug!(notifier = self.notifier.name(), "Notification sent");
            }
            Err(e) if e.is_transport() => {
                self.logger.error(&e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
