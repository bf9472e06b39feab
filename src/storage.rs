//! HTTP storage gateway client
//!
//! Uploads image bytes and metadata JSON documents to the configured
//! gateway and hands back the URIs it assigns. One agent, one fixed
//! timeout for connects and uploads alike.

use std::time::Duration;

use serde_json::Value;

use crate::error::{LaunchError, LaunchResult};
use crate::types::OffchainMetadata;

pub struct StorageClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl StorageClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Upload raw bytes under a file name, returning the assigned URI
    pub fn upload(&self, bytes: &[u8], file_name: &str) -> LaunchResult<String> {
        let response = self
            .agent
            .post(&self.upload_url(file_name))
            .set("Content-Type", "application/octet-stream")
            .send_bytes(bytes)
            .map_err(|e| LaunchError::StorageUpload(e.to_string()))?;
        parse_uri(response)
    }

    /// Upload a metadata JSON document, returning its URI
    pub fn upload_metadata(&self, metadata: &OffchainMetadata) -> LaunchResult<String> {
        let response = self
            .agent
            .post(&self.upload_url("metadata.json"))
            .send_json(metadata)
            .map_err(|e| LaunchError::StorageUpload(e.to_string()))?;
        parse_uri(response)
    }

    fn upload_url(&self, file_name: &str) -> String {
        format!("{}/upload/{}", self.endpoint, file_name)
    }
}

fn parse_uri(response: ureq::Response) -> LaunchResult<String> {
    let body: Value = response
        .into_json()
        .map_err(|e| LaunchError::StorageUpload(e.to_string()))?;
    body.get("uri")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| LaunchError::StorageUpload("response has no uri field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_urls_normalize_trailing_slashes() {
        let client = StorageClient::new("http://gateway.local/", Duration::from_secs(1));
        assert_eq!(
            client.upload_url("poop.png"),
            "http://gateway.local/upload/poop.png"
        );
        assert_eq!(
            client.upload_url("metadata.json"),
            "http://gateway.local/upload/metadata.json"
        );
    }
}
