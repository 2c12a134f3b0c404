//! Slack notifier — posts notifications to an incoming webhook.
//!
//! Slack renders `*text*` as bold with `mrkdwn`, which is how the adapter
//! emphasizes the subject line.

use secrecy::ExposeSecret;

use crate::config::{SlackConfig, validate_webhook_url};
use crate::error::{ConfigError, DeliveryError};
use crate::notification::ChatNotification;
use crate::notifier::Notifier;

/// Slack incoming-webhook transport (blocking HTTP).
pub struct SlackNotifier {
    config: SlackConfig,
    client: reqwest::blocking::Client,
}

impl SlackNotifier {
    pub fn new(config: SlackConfig) -> Result<Self, ConfigError> {
        validate_webhook_url(config.webhook_url.expose_secret())?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Build the webhook JSON body.
    fn build_payload(&self, notification: &ChatNotification) -> serde_json::Value {
        let mut body = serde_json::json!({
            "text": notification.text(),
            "mrkdwn": true,
        });

        if let Some(channel) = &self.config.channel {
            body["channel"] = serde_json::json!(channel);
        }
        if let Some(username) = &self.config.username {
            body["username"] = serde_json::json!(username);
        }

        body
    }
}

impl Notifier for SlackNotifier {
    fn name(&self) -> &str {
        "slack"
    }

    fn send(&self, notification: &ChatNotification) -> Result<(), DeliveryError> {
        let payload = self.build_payload(notification);

        let resp = self
            .client
            .post(self.config.webhook_url.expose_secret())
            .json(&payload)
            .send()
            .map_err(|e| DeliveryError::Transport {
                transport: "slack".into(),
                reason: e.without_url().to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(DeliveryError::Transport {
                transport: "slack".into(),
                reason: format!("webhook returned {status}: {body}"),
            });
        }

        tracing::info!(chars = notification.text().len(), "Slack notification delivered");
        Ok(())
    }
}
