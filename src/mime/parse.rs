//! Raw RFC 5322 input → structured [`Email`], via mail-parser.

use mail_parser::{Addr, Address, MessageParser};

use super::Email;
use crate::error::{Error, Result};

/// Parse raw message bytes into a structured email.
///
/// Keeps the first sender, all `To`/`Cc` mailboxes (display names included),
/// the subject, and the first text body part. HTML-only messages end up
/// without a text body.
pub fn parse_email(raw: &[u8]) -> Result<Email> {
    let message = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| Error::Parse("input is not an RFC 5322 message".into()))?;

    let mut email = Email::new();

    if let Some(sender) = mailboxes(message.from()).into_iter().next() {
        email = email.with_from(sender);
    }
    for to in mailboxes(message.to()) {
        email = email.with_to(to);
    }
    for cc in mailboxes(message.cc()) {
        email = email.with_cc(cc);
    }
    if let Some(subject) = message.subject() {
        email = email.with_subject(subject);
    }
    if let Some(body) = message.body_text(0) {
        email = email.with_text(body.trim_end().to_string());
    }

    tracing::debug!(
        subject = email.subject().unwrap_or_default(),
        recipients = email.recipients().len(),
        "Parsed structured email"
    );

    Ok(email)
}

/// Flatten a header's addresses (lists and groups alike) into mailbox
/// strings `Email` can render back, e.g. `Alice <alice@example.com>`.
/// Entries without an address are dropped.
fn mailboxes(header: Option<&Address>) -> Vec<String> {
    let addrs: Vec<&Addr> = match header {
        None => return Vec::new(),
        Some(Address::List(list)) => list.iter().collect(),
        Some(Address::Group(groups)) => groups.iter().flat_map(|g| g.addresses.iter()).collect(),
    };

    addrs
        .into_iter()
        .filter_map(|addr| {
            let address = addr.address.as_deref()?;
            Some(match addr.name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => format!("{} <{address}>", quote_name(name)),
                _ => address.to_string(),
            })
        })
        .collect()
}

/// Quote a display name when it holds RFC 5322 specials.
fn quote_name(name: &str) -> String {
    const SPECIALS: &[char] = &['(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '.', '"'];
    if !name.contains(SPECIALS) {
        return name.to_string();
    }
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
