use async_trait::async_trait;

use crate::config::Config;

use super::{Question, QuestionSource, StoreError};

/// REST client for the external question table. Holds the low-privilege
/// (anonymous) key; never writes.
#[derive(Clone)]
pub struct QuestionStore {
    base_url: Option<String>,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl QuestionStore {
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.store_url.clone(),
            api_key: config.anon_key.clone(),
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
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(StoreError::NotConfigured("SUPABASE_ANON_KEY"))?;
        Ok((base, key))
    }

    /// Issues one `select=*&limit=1` query with the given extra filters and
    /// returns the single row, if any.
    async fn fetch_one(&self, filters: &[(&str, String)]) -> Result<Option<Question>, StoreError> {
        let (base, key) = self.credentials()?;
        let url = format!("{}/rest/v1/questions", base.trim_end_matches('/'));

        let mut query: Vec<(&str, String)> =
            vec![("select", "*".to_string()), ("limit", "1".to_string())];
        query.extend(filters.iter().cloned());

        let resp = self
            .client
            .get(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .query(&query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::HttpStatus { status, body });
        }

        let bytes = resp.bytes().await?;
        let rows: Vec<Question> = serde_json::from_slice(&bytes)?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl QuestionSource for QuestionStore {
    async fn fetch_random(&self) -> Result<Option<Question>, StoreError> {
        self.fetch_one(&[("order", "random()".to_string())]).await
    }

    async fn fetch_random_at(&self, difficulty: i32) -> Result<Option<Question>, StoreError> {
        self.fetch_one(&[
            ("difficulty", format!("eq.{difficulty}")),
            ("order", "random()".to_string()),
        ])
        .await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        self.fetch_one(&[("id", format!("eq.{id}"))]).await
    }
}
