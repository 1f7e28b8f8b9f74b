use super::constants::{self, headers};
use super::models::{CustomerId, PaymentMethodsResponse, PaymentOption};
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// Anything that can produce the payment methods of a customer
#[async_trait]
pub trait PaymentMethodSource: Send + Sync {
    async fn fetch_payment_methods(&self, customer_id: &CustomerId) -> Result<Vec<PaymentOption>>;
}

/// HTTP client for the payment methods endpoint
#[derive(Clone)]
pub struct PaymentClient {
    base_url: String,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

impl PaymentClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("payment-picker/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(config, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(config: &ApiConfig, http_client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http_client,
            access_token: config.access_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PaymentMethodSource for PaymentClient {
    async fn fetch_payment_methods(&self, customer_id: &CustomerId) -> Result<Vec<PaymentOption>> {
        let url = constants::payment_methods_endpoint(&self.base_url, customer_id.as_str());
        debug!("GET {}", url);

        let mut request = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, headers::ACCEPT_JSON);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to request payment methods for customer {}", customer_id))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Payment methods request failed with status {}: {}", status, body);
        }

        let options = response
            .json::<PaymentMethodsResponse>()
            .await
            .context("Failed to parse payment methods response")?
            .into_options();

        info!("Fetched {} payment methods for customer {}", options.len(), customer_id);
        Ok(options)
    }
}

/// Reads payment methods from a JSON file instead of the network
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PaymentMethodSource for FileSource {
    async fn fetch_payment_methods(&self, customer_id: &CustomerId) -> Result<Vec<PaymentOption>> {
        debug!("Loading payment methods for {} from {:?}", customer_id, self.path);
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read payment methods file: {:?}", self.path))?;

        let options = serde_json::from_str::<PaymentMethodsResponse>(&content)
            .with_context(|| format!("Failed to parse payment methods file: {:?}", self.path))?
            .into_options();
        Ok(options)
    }
}
