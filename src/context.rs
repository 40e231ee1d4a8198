//! Shared AWS client context for a probe run.

use crate::config::ProbeConfig;
use crate::error::Result;
use aws_credential_types::Credentials;
use tracing::info;

/// The four service clients a probe run talks to, built once from a single
/// `SdkConfig` and passed by reference to each operation. There is no
/// process-wide client state.
///
/// - `bedrock`: control plane (`ListFoundationModels`)
/// - `runtime`: data plane (`InvokeModel`, `StartAsyncInvoke`, `GetAsyncInvoke`)
/// - `s3`: output bucket for asynchronous invocations
/// - `sts`: caller identity for the deterministic bucket name
pub struct ProbeContext {
    pub bedrock: aws_sdk_bedrock::Client,
    pub runtime: aws_sdk_bedrockruntime::Client,
    pub s3: aws_sdk_s3::Client,
    pub sts: aws_sdk_sts::Client,
    pub region: String,
}

impl ProbeContext {
    /// Build all service clients from the given configuration.
    ///
    /// Credentials come from the config rather than the ambient credential
    /// chain; the region and optional endpoint override apply to every
    /// client uniformly.
    pub async fn new(config: &ProbeConfig) -> Result<Self> {
        let region = config.region.clone();

        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "bedrock-probe",
        );

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()))
            .credentials_provider(credentials);

        if let Some(endpoint_url) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint_url);
        }

        let sdk_config = sdk_config_loader.load().await;

        let bedrock = aws_sdk_bedrock::Client::new(&sdk_config);
        let runtime = aws_sdk_bedrockruntime::Client::new(&sdk_config);
        let s3 = aws_sdk_s3::Client::new(&sdk_config);
        let sts = aws_sdk_sts::Client::new(&sdk_config);

        info!("aws clients created for region={region}");

        Ok(Self { bedrock, runtime, s3, sts, region })
    }
}
