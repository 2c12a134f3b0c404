//! Command-line front end — argument parsing and message loading.

use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;
use crate::mime::{Email, EmailLike, RawMessage, parse::parse_email};

pub const USAGE: &str = "usage: mail2chat [--structured] [--dry-run] <FILE|->";

/// Where to read the message from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: Input,
    /// Parse the input as an RFC 5322 email instead of passing it through raw.
    pub structured: bool,
    /// Print the composed notification instead of sending it.
    pub dry_run: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> std::result::Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut structured = false;
        let mut dry_run = false;
        let mut input = None;

        for arg in args {
            match arg.as_str() {
                "--structured" => structured = true,
                "--dry-run" => dry_run = true,
                "-" => input = Some(Input::Stdin),
                flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
                path => {
                    if input.is_some() {
                        return Err(format!("unexpected argument: {path}"));
                    }
                    input = Some(Input::File(PathBuf::from(path)));
                }
            }
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input".to_string())?,
            structured,
            dry_run,
        })
    }
}

/// A message loaded from the command line, owned so it can be borrowed as
/// an [`EmailLike`].
#[derive(Debug)]
pub enum LoadedMessage {
    Email(Email),
    Raw(RawMessage),
}

impl LoadedMessage {
    pub fn as_email_like(&self) -> EmailLike<'_> {
        match self {
            Self::Email(email) => EmailLike::Email(email),
            Self::Raw(raw) => EmailLike::Raw(raw),
        }
    }
}

/// Read the input and turn it into a message.
pub fn load_message(args: &CliArgs) -> Result<LoadedMessage> {
    let bytes = match &args.input {
        Input::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
        Input::File(path) => std::fs::read(path)?,
    };

    if args.structured {
        Ok(LoadedMessage::Email(parse_email(&bytes)?))
    } else {
        let text = String::from_utf8_lossy(&bytes);
        Ok(LoadedMessage::Raw(RawMessage::new(text.trim_end())))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(list: &[&str]) -> std::result::Result<CliArgs, String> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_file_with_flags() {
        let parsed = args(&["--structured", "--dry-run", "mail.eml"]).unwrap();
        assert_eq!(parsed.input, Input::File(PathBuf::from("mail.eml")));
        assert!(parsed.structured);
        assert!(parsed.dry_run);
    }

    #[test]
    fn parse_stdin() {
        let parsed = args(&["-"]).unwrap();
        assert_eq!(parsed.input, Input::Stdin);
        assert!(!parsed.structured);
    }

    #[test]
    fn parse_rejects_missing_input() {
        assert_eq!(args(&["--dry-run"]).unwrap_err(), "missing input");
    }

    #[test]
    fn parse_rejects_unknown_flag() {
        assert!(args(&["--verbose", "x"]).unwrap_err().contains("--verbose"));
    }

    #[test]
    fn parse_rejects_second_path() {
        assert!(args(&["a.eml", "b.eml"]).is_err());
    }

    #[test]
    fn load_raw_trims_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server is down").unwrap();

        let loaded = load_message(&CliArgs {
            input: Input::File(file.path().to_path_buf()),
            structured: false,
            dry_run: true,
        })
        .unwrap();

        match loaded {
            LoadedMessage::Raw(raw) => assert_eq!(raw.as_str(), "server is down"),
            other => panic!("expected raw message, got {other:?}"),
        }
    }

    #[test]
    fn load_structured_parses_email() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "From: ops@example.com\r\nTo: team@example.com\r\nSubject: Backup done\r\n\r\n42 GB copied\r\n"
        )
        .unwrap();

        let loaded = load_message(&CliArgs {
            input: Input::File(file.path().to_path_buf()),
            structured: true,
            dry_run: true,
        })
        .unwrap();

        match loaded {
            LoadedMessage::Email(email) => {
                assert_eq!(email.subject(), Some("Backup done"));
                assert_eq!(email.text_body(), Some("42 GB copied"));
            }
            other => panic!("expected email, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_message(&CliArgs {
            input: Input::File(PathBuf::from("/nonexistent/mail.eml")),
            structured: false,
            dry_run: true,
        })
        .unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
