//! Email-shaped message types — structured emails, raw messages, and the
//! composed wrapper the notifier layer hands around.

pub mod parse;

use std::any::Any;
use std::fmt;

use lettre::Message;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;

use crate::error::{Error, Result};

// ── Structured email ────────────────────────────────────────────────

/// A structured email with optional subject and plain-text body.
///
/// Built fluently:
///
/// ```
/// use mail2chat::mime::Email;
///
/// let email = Email::new()
///     .with_from("hello@example.com")
///     .with_to("you@example.com")
///     .with_subject("Time for Symfony Mailer!")
///     .with_text("This is Symfony Mailer body text");
/// assert_eq!(email.subject(), Some("Time for Symfony Mailer!"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    subject: Option<String>,
    text: Option<String>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender mailbox (`addr@host` or `Name <addr@host>`).
    pub fn with_from(mut self, mailbox: impl Into<String>) -> Self {
        self.from = Some(mailbox.into());
        self
    }

    /// Append a `To` recipient.
    pub fn with_to(mut self, mailbox: impl Into<String>) -> Self {
        self.to.push(mailbox.into());
        self
    }

    /// Append a `Cc` recipient.
    pub fn with_cc(mut self, mailbox: impl Into<String>) -> Self {
        self.cc.push(mailbox.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn recipients(&self) -> &[String] {
        &self.to
    }

    pub fn cc_recipients(&self) -> &[String] {
        &self.cc
    }

    /// Subject line, if one was set.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Plain-text body, if one was set.
    pub fn text_body(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Render the email as an RFC 5322 message.
    ///
    /// Fails when there is no sender, no recipient, or an address does not
    /// parse as a mailbox.
    pub fn to_mime_string(&self) -> Result<String> {
        let mut builder = Message::builder();

        if let Some(from) = &self.from {
            builder = builder.from(parse_mailbox("from", from)?);
        }
        for to in &self.to {
            builder = builder.to(parse_mailbox("to", to)?);
        }
        for cc in &self.cc {
            builder = builder.cc(parse_mailbox("cc", cc)?);
        }
        if let Some(subject) = &self.subject {
            builder = builder.subject(subject.as_str());
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(self.text.clone().unwrap_or_default())
            .map_err(|e| Error::Render(e.to_string()))?;

        Ok(String::from_utf8_lossy(&message.formatted()).into_owned())
    }
}

fn parse_mailbox(field: &str, value: &str) -> Result<Mailbox> {
    value
        .parse::<Mailbox>()
        .map_err(|e| Error::Render(format!("invalid {field} address {value:?}: {e}")))
}

// ── Raw message ─────────────────────────────────────────────────────

/// An unstructured message. Its text is its serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    content: String,
}

impl RawMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for RawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

// ── Composed message ────────────────────────────────────────────────

/// Payload wrapped by an [`EmailMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerMessage {
    Email(Email),
    Raw(RawMessage),
}

impl InnerMessage {
    /// Full textual serialization of the wrapped message.
    pub fn to_mime_string(&self) -> Result<String> {
        match self {
            Self::Email(email) => email.to_mime_string(),
            Self::Raw(raw) => Ok(raw.to_string()),
        }
    }
}

impl From<Email> for InnerMessage {
    fn from(email: Email) -> Self {
        Self::Email(email)
    }
}

impl From<RawMessage> for InnerMessage {
    fn from(raw: RawMessage) -> Self {
        Self::Raw(raw)
    }
}

/// A notification-layer message wrapping an email or raw message.
///
/// Its subject belongs to the wrapper, not the payload, and is empty unless
/// set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    subject: String,
    message: InnerMessage,
}

impl EmailMessage {
    pub fn new(message: impl Into<InnerMessage>) -> Self {
        Self {
            subject: String::new(),
            message: message.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Always present; empty by default.
    pub fn subject(&self) -> Option<&str> {
        Some(&self.subject)
    }

    pub fn message(&self) -> &InnerMessage {
        &self.message
    }
}

// ── Variant dispatch ────────────────────────────────────────────────

/// Borrowed view over the three message shapes the adapter understands.
#[derive(Debug, Clone, Copy)]
pub enum EmailLike<'a> {
    Email(&'a Email),
    Composed(&'a EmailMessage),
    Raw(&'a RawMessage),
}

impl<'a> EmailLike<'a> {
    /// Recognize a type-erased value. `None` for any other type.
    pub fn from_any(value: &'a dyn Any) -> Option<Self> {
        if let Some(email) = value.downcast_ref::<Email>() {
            Some(Self::Email(email))
        } else if let Some(message) = value.downcast_ref::<EmailMessage>() {
            Some(Self::Composed(message))
        } else {
            value.downcast_ref::<RawMessage>().map(Self::Raw)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Composed(_) => "email_message",
            Self::Raw(_) => "raw_message",
        }
    }
}

impl<'a> From<&'a Email> for EmailLike<'a> {
    fn from(email: &'a Email) -> Self {
        Self::Email(email)
    }
}

impl<'a> From<&'a EmailMessage> for EmailLike<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self::Composed(message)
    }
}

impl<'a> From<&'a RawMessage> for EmailLike<'a> {
    fn from(raw: &'a RawMessage) -> Self {
        Self::Raw(raw)
    }
}
