//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default HTTP timeout for webhook delivery.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Slack incoming-webhook configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Incoming webhook URL. Contains the posting token.
    pub webhook_url: SecretString,
    /// Channel override (`#alerts`), if the webhook allows one.
    pub channel: Option<String>,
    /// Display name override.
    pub username: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl SlackConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: SecretString::from(webhook_url.into()),
            channel: None,
            username: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build config from the process environment.
    ///
    /// Requires `SLACK_WEBHOOK_URL`; `SLACK_CHANNEL`, `SLACK_USERNAME` and
    /// `SLACK_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let webhook_url = non_empty("SLACK_WEBHOOK_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("SLACK_WEBHOOK_URL".into()))?;

        validate_webhook_url(&webhook_url)?;

        let timeout = match non_empty("SLACK_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SLACK_TIMEOUT_SECS".into(),
                    message: format!("expected whole seconds, got {raw:?}"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "SLACK_TIMEOUT_SECS".into(),
                        message: "must be at least 1 second".into(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            webhook_url: SecretString::from(webhook_url),
            channel: non_empty("SLACK_CHANNEL"),
            username: non_empty("SLACK_USERNAME"),
            timeout,
        })
    }
}

/// Webhook URLs must be http(s).
pub(crate) fn validate_webhook_url(url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ConfigError::InvalidValue {
            key: "SLACK_WEBHOOK_URL".into(),
            message: "must be an http(s) URL".into(),
        });
    }
    Ok(())
}
