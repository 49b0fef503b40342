//! Submit a saved farmer profile to a running endpoint.

use agri_core::submission::SubmissionClient;
use log::info;
use std::path::Path;

/// Read `file` as JSON and POST it to `base_url`. Prints the stored path.
pub async fn run_submit(file: &Path, base_url: &str) -> anyhow::Result<()> {
    let payload = read_payload(file)?;
    let client = SubmissionClient::new(base_url);
    info!("Submitting {} to {}", file.display(), client.endpoint());

    let receipt = client.submit(&payload).await?;
    println!("{} {}", receipt.message, receipt.file);
    Ok(())
}

fn read_payload(file: &Path) -> anyhow::Result<serde_json::Value> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;
    serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("{} is not valid JSON: {}", file.display(), e))
}
