//! Configuration for a probe run.

use serde::{Deserialize, Serialize};

/// Configuration for a Bedrock probe run.
///
/// Unlike long-lived services, the probe takes explicit credentials (the
/// operator types them in or passes them as flags) instead of the ambient
/// AWS credential chain, so a run can target any account without touching
/// the local shared config.
///
/// # Example
///
/// ```rust,ignore
/// use bedrock_probe::ProbeConfig;
///
/// let config = ProbeConfig::new("us-east-1", "AKIA...", "...");
///
/// // With a custom endpoint (e.g., a VPC endpoint)
/// let config = ProbeConfig::new("us-west-2", "AKIA...", "...")
///     .with_endpoint_url("https://vpce-xxx.bedrock-runtime.us-west-2.vpce.amazonaws.com");
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// AWS region to probe (e.g., `"us-east-1"`).
    pub region: String,
    /// AWS access key id.
    pub access_key_id: String,
    /// AWS secret access key. Never serialized.
    #[serde(skip_serializing, default)]
    pub secret_access_key: String,
    /// Optional custom endpoint URL (e.g., a VPC endpoint).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub endpoint_url: Option<String>,
}

impl ProbeConfig {
    /// Create a new probe config for the given region and credentials.
    pub fn new(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            endpoint_url: None,
        }
    }

    /// Set a custom endpoint URL (e.g., a VPC endpoint).
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

impl std::fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret key never goes to logs.
        f.debug_struct("ProbeConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}
