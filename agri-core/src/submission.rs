//! Wire types for the farmer submission endpoint, and (with the `api`
//! feature) an HTTP client for it.

#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Path of the submission endpoint relative to the server base URL.
pub const SUBMISSION_PATH: &str = "/api/farmer";

/// `message` returned when a submission is stored.
pub const SAVED_MESSAGE: &str = "Farmer info saved!";

/// `error` returned when a submission could not be stored.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save farmer info.";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
    /// Path of the record written on the server.
    pub file: String,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionError {
    pub error: String,
}

#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: Client,
    endpoint: String,
}

#[cfg(feature = "api")]
impl SubmissionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint_url(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` as JSON and return the server's receipt.
    pub async fn submit<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> anyhow::Result<SubmissionReceipt> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = match response.json::<SubmissionError>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            warn!("Submission to {} failed: {}", self.endpoint, detail);
            anyhow::bail!("submission rejected ({}): {}", status, detail);
        }

        let receipt: SubmissionReceipt = response.json().await?;
        info!("Submission saved as {}", receipt.file);
        Ok(receipt)
    }
}

/// Full endpoint URL for a server base URL.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUBMISSION_PATH)
}
