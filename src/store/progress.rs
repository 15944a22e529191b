use async_trait::async_trait;

use crate::config::Config;

use super::{AnswerEvent, ProgressSink, StoreError};

/// REST client for the progress table. Holds the service-role key — the only
/// credential allowed to write — and is a separate instance from the read-tier
/// question client.
#[derive(Clone)]
pub struct ProgressRecorder {
    base_url: Option<String>,
    service_key: Option<String>,
    client: reqwest::Client,
}

impl ProgressRecorder {
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.store_url.clone(),
            service_key: config.service_role_key.clone(),
            client,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), StoreError> {
        let base = self
            .base_url
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(StoreError::NotConfigured("SUPABASE_URL"))?;
        let key = self
            .service_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(StoreError::NotConfigured("SUPABASE_SERVICE_ROLE_KEY"))?;
        Ok((base, key))
    }
}

#[async_trait]
impl ProgressSink for ProgressRecorder {
    async fn append(&self, event: &AnswerEvent) -> Result<(), StoreError> {
        let (base, key) = self.credentials()?;
        let url = format!("{}/rest/v1/practice_progress", base.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(event)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::HttpStatus { status, body });
        }

        Ok(())
    }
}
