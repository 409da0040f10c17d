use gloo_net::http::Request;
use thiserror::Error;

use crate::config;
use crate::lead::Lead;

#[derive(Debug, Error)]
pub enum LeadStoreError {
    #[error("lead store URL is not configured")]
    NotConfigured,
    #[error("could not build lead request: {0}")]
    Request(gloo_net::Error),
    #[error("network error while saving lead: {0}")]
    Network(gloo_net::Error),
    #[error("lead store rejected write with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Client for the hosted `lead` table. Only inserts are ever issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadStore {
    base_url: String,
    api_key: String,
}

impl LeadStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_lead_store_url(), config::get_lead_store_key())
    }

    pub fn endpoint(&self) -> Result<String, LeadStoreError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(LeadStoreError::NotConfigured);
        }
        Ok(format!("{}/rest/v1/lead", base))
    }

    pub async fn create(&self, lead: &Lead) -> Result<(), LeadStoreError> {
        let url = self.endpoint()?;

        let response = Request::post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(&[lead])
            .map_err(LeadStoreError::Request)?
            .send()
            .await
            .map_err(LeadStoreError::Network)?;

        if response.ok() {
            log::info!("Lead saved");
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(LeadStoreError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_lead_table() {
        let store = LeadStore::new("https://xyz.supabase.co", "anon");
        assert_eq!(store.endpoint().unwrap(), "https://xyz.supabase.co/rest/v1/lead");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let store = LeadStore::new("https://xyz.supabase.co/", "anon");
        assert_eq!(store.endpoint().unwrap(), "https://xyz.supabase.co/rest/v1/lead");
    }

    #[test]
    fn empty_url_is_not_configured() {
        let store = LeadStore::new("  ", "anon");
        assert!(matches!(store.endpoint(), Err(LeadStoreError::NotConfigured)));
    }

    #[test]
    fn rejection_message_carries_status() {
        let err = LeadStoreError::Rejected { status: 401, body: "JWT expired".to_string() };
        assert_eq!(err.to_string(), "lead store rejected write with status 401: JWT expired");
    }

    #[test]
    fn insert_body_is_a_single_row_array() {
        let lead = Lead {
            email: "ada@acme.io".to_string(),
            company_name: "Acme".to_string(),
            phone_number: None,
            challenges: Some("Flows everywhere".to_string()),
        };
        let body = serde_json::to_value([&lead]).unwrap();
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert!(body[0]["phone_number"].is_null());
        assert_eq!(body[0]["challenges"], "Flows everywhere");
    }
}
