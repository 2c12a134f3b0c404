//! Chat notification — the single value the adapter hands to a notifier.

use std::fmt;

use serde::Serialize;

/// A formatted text notification destined for a chat channel.
///
/// Only the adapter builds these, and never with empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatNotification {
    text: String,
}

impl ChatNotification {
    /// Join the present parts as `*subject*` then body, one `\n` apart.
    ///
    /// Returns `None` when the result would be empty.
    pub(crate) fn compose(subject: Option<&str>, body: Option<&str>) -> Option<Self> {
        let mut parts = Vec::with_capacity(2);
        if let Some(subject) = subject {
            parts.push(format!("*{subject}*"));
        }
        if let Some(body) = body {
            parts.push(body.to_string());
        }

        let text = parts.join("\n");
        if text.is_empty() {
            return None;
        }
        Some(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for ChatNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
