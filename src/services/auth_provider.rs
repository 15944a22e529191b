use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth service not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("auth service returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },
}

#[derive(Serialize)]
struct CredentialsPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Delegates signup and login to the external auth service. Uses the
/// low-privilege key; token issuance and password handling stay upstream.
#[derive(Clone)]
pub struct AuthProvider {
    base_url: Option<String>,
    api_key: Option<String>,
    signup_redirect_url: Option<String>,
    client: reqwest::Client,
}

impl AuthProvider {
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.store_url.clone(),
            api_key: config.anon_key.clone(),
            signup_redirect_url: config.signup_redirect_url.clone(),
            client,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), AuthError> {
        let base = self
            .base_url
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(AuthError::NotConfigured("SUPABASE_URL"))?;
        let key = self
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(AuthError::NotConfigured("SUPABASE_ANON_KEY"))?;
        Ok((base, key))
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let (base, key) = self.credentials()?;
        let url = format!("{}/auth/v1/signup", base.trim_end_matches('/'));

        let mut request = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&CredentialsPayload { email, password });

        if let Some(redirect) = self.signup_redirect_url.as_deref() {
            request = request.query(&[("redirect_to", redirect)]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::Upstream {
                status,
                message: upstream_message(resp, "Signup failed").await,
            });
        }

        Ok(())
    }

    /// On success the upstream token body is returned verbatim.
    pub async fn login(&self, email: &str, password: &str) -> Result<serde_json::Value, AuthError> {
        let (base, key) = self.credentials()?;
        let url = format!("{}/auth/v1/token", base.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", key)
            .bearer_auth(key)
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthError::Upstream {
                status,
                message: upstream_message(resp, "Login failed").await,
            });
        }

        Ok(resp.json().await?)
    }
}

async fn upstream_message(resp: reqwest::Response, fallback: &str) -> String {
    match resp.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("msg")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}
