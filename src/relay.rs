use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::contact::RelayRecord;

/// Outcome of a single relay attempt. Logged, never surfaced to the
/// submitting client: downstream availability must not affect the
/// client-visible result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Skipped,
    Failed(String),
}

/// Forwards validated submissions to the configured relay target.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Attempt delivery exactly once. Must not panic and must not
    /// return an error type - failure is an outcome, not an exception.
    async fn deliver(&self, record: &RelayRecord) -> RelayOutcome;
}

/// Production relay: one POST to the configured webhook, no retry.
pub struct WebhookRelay {
    client: reqwest::Client,
    target: Option<String>,
}

impl WebhookRelay {
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            target: config.webhook_url.clone(),
        })
    }
}

#[async_trait]
impl ContactRelay for WebhookRelay {
    async fn deliver(&self, record: &RelayRecord) -> RelayOutcome {
        let Some(target) = &self.target else {
            return RelayOutcome::Skipped;
        };

        match self.client.post(target).json(record).send().await {
            Ok(response) if response.status().is_success() => RelayOutcome::Delivered,
            Ok(response) => RelayOutcome::Failed(format!(
                "webhook responded with status {}",
                response.status()
            )),
            Err(err) => RelayOutcome::Failed(err.to_string()),
        }
    }
}

/// Log a relay outcome at the appropriate level.
pub fn log_outcome(outcome: &RelayOutcome, record: &RelayRecord) {
    match outcome {
        RelayOutcome::Delivered => {
            info!(email = %record.email, "Contact submission relayed to webhook");
        }
        RelayOutcome::Skipped => {
            // No webhook configured: the log line is the only record
            info!(
                email = %record.email,
                full_name = %record.full_name,
                subject = %record.subject,
                timestamp = %record.timestamp,
                "No relay webhook configured, contact submission logged only"
            );
        }
        RelayOutcome::Failed(reason) => {
            warn!(email = %record.email, %reason, "Contact relay failed, acknowledging anyway");
        }
    }
}
