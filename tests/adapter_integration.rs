//! End-to-end flow: an `.eml` file on disk is loaded the way the binary
//! loads it, composed, and handed to a recording transport.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use mail2chat::NotificationAdapter;
use mail2chat::cli::{self, CliArgs, Input};
use mail2chat::error::DeliveryError;
use mail2chat::logger::Logger;
use mail2chat::notification::ChatNotification;
use mail2chat::notifier::Notifier;

const DEPLOY_EML: &str = "From: \"Build Bot\" <ci@example.com>\r\n\
    To: team@example.com\r\n\
    Subject: Deploy finished\r\n\
    Content-Type: text/plain; charset=utf-8\r\n\
    \r\n\
    All services are green.\r\n\
    \r\n";

/// Records every notification; optionally fails like an unreachable webhook.
struct RecordingTransport {
    fail: bool,
    sent: Mutex<Vec<String>>,
}

impl Notifier for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, notification: &ChatNotification) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(notification.text().to_string());
        if self.fail {
            return Err(DeliveryError::Transport {
                transport: "recording".into(),
                reason: "webhook returned 503 Service Unavailable".into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingLogger {
    errors: Mutex<Vec<String>>,
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

fn write_eml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args_for(path: &Path, structured: bool) -> CliArgs {
    CliArgs {
        input: Input::File(path.to_path_buf()),
        structured,
        dry_run: false,
    }
}

fn run(args: &CliArgs, fail: bool) -> (bool, Vec<String>, Vec<String>) {
    let transport = Arc::new(RecordingTransport {
        fail,
        sent: Mutex::new(Vec::new()),
    });
    let logger = Arc::new(RecordingLogger::default());
    let adapter = NotificationAdapter::new(transport.clone(), logger.clone());

    let message = cli::load_message(args).unwrap();
    let delivered = adapter.send_mail(message.as_email_like()).unwrap();

    let sent = transport.sent.lock().unwrap().clone();
    let errors = logger.errors.lock().unwrap().clone();
    (delivered, sent, errors)
}

#[test]
fn structured_eml_is_sent_as_subject_and_body() {
    let file = write_eml(DEPLOY_EML);

    let (delivered, sent, errors) = run(&args_for(file.path(), true), false);

    assert!(delivered);
    assert_eq!(sent, ["*Deploy finished*\nAll services are green."]);
    assert!(errors.is_empty());
}

#[test]
fn unstructured_eml_is_sent_verbatim_under_fixed_subject() {
    let file = write_eml(DEPLOY_EML);

    let (delivered, sent, _) = run(&args_for(file.path(), false), false);

    assert!(delivered);
    assert_eq!(sent.len(), 1);
    let (subject, body) = sent[0].split_once('\n').unwrap();
    assert_eq!(subject, "*New Message*");
    assert!(body.starts_with("From: \"Build Bot\" <ci@example.com>"));
    assert!(body.ends_with("All services are green."));
}

#[test]
fn structured_eml_with_failing_transport_is_logged_once() {
    let file = write_eml(DEPLOY_EML);

    let (delivered, sent, errors) = run(&args_for(file.path(), true), true);

    assert!(delivered);
    assert_eq!(sent.len(), 1);
    assert_eq!(
        errors,
        ["Transport recording failed: webhook returned 503 Service Unavailable"]
    );
}
