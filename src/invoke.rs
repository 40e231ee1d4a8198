//! Synchronous and asynchronous model invocation.
//!
//! The [`InvocationApi`] trait is the seam between the probe logic and the
//! Bedrock runtime client, so the fallback and polling behaviour can be
//! exercised against a scripted mock. [`ModelProber`] drives one model at a
//! time to a terminal [`ProbeOutcome`]; every failure is converted to an
//! outcome at the per-model boundary and nothing propagates into the batch
//! loop.

use crate::error::{ProbeError, Result};
use crate::payload::{self, InvocationPlan};
use crate::report::ProbeOutcome;
use crate::routing;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::ProvideErrorMetadata;
use aws_sdk_bedrockruntime::types::{
    AsyncInvokeOutputDataConfig, AsyncInvokeS3OutputDataConfig, AsyncInvokeStatus,
};
use aws_smithy_types::{Blob, Document};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Status of an asynchronous invocation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    InProgress,
    Completed,
    Failed,
}

/// The slice of the Bedrock runtime API the prober needs.
#[async_trait]
pub trait InvocationApi: Send + Sync {
    /// Synchronous `InvokeModel` with a JSON body. The response body is
    /// irrelevant for a liveness probe; only success/failure matters.
    async fn invoke_model(&self, model_id: &str, body: &str) -> Result<()>;

    /// Start an asynchronous invocation writing to the given S3 URI.
    /// Returns the invocation ARN.
    async fn start_async_invoke(&self, model_id: &str, input: &Value, s3_uri: &str)
    -> Result<String>;

    /// Poll the status of an asynchronous invocation.
    async fn async_invoke_status(&self, invocation_arn: &str) -> Result<JobStatus>;
}

/// `InvocationApi` over the real Bedrock runtime client.
pub struct AwsInvocationApi {
    client: aws_sdk_bedrockruntime::Client,
}

impl AwsInvocationApi {
    pub fn new(client: aws_sdk_bedrockruntime::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvocationApi for AwsInvocationApi {
    async fn invoke_model(&self, model_id: &str, body: &str) -> Result<()> {
        self.client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .body(Blob::new(body.as_bytes()))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Invocation(e.code().unwrap_or("Unknown").to_string()))
    }

    async fn start_async_invoke(
        &self,
        model_id: &str,
        input: &Value,
        s3_uri: &str,
    ) -> Result<String> {
        let s3_config = AsyncInvokeS3OutputDataConfig::builder()
            .s3_uri(s3_uri)
            .build()
            .map_err(|e| ProbeError::Invocation(format!("invalid output config: {e}")))?;

        let response = self
            .client
            .start_async_invoke()
            .model_id(model_id)
            .model_input(json_value_to_document(input))
            .output_data_config(AsyncInvokeOutputDataConfig::S3OutputDataConfig(s3_config))
            .send()
            .await
            .map_err(|e| ProbeError::Invocation(e.code().unwrap_or("Unknown").to_string()))?;

        Ok(response.invocation_arn)
    }

    async fn async_invoke_status(&self, invocation_arn: &str) -> Result<JobStatus> {
        let response = self
            .client
            .get_async_invoke()
            .invocation_arn(invocation_arn)
            .send()
            .await
            .map_err(|e| ProbeError::Invocation(e.code().unwrap_or("Unknown").to_string()))?;

        Ok(match response.status {
            AsyncInvokeStatus::Completed => JobStatus::Completed,
            AsyncInvokeStatus::Failed => JobStatus::Failed,
            _ => JobStatus::InProgress,
        })
    }
}

/// Convert a `serde_json::Value` to an `aws_smithy_types::Document`, which
/// is what `StartAsyncInvoke` takes for `modelInput`.
pub(crate) fn json_value_to_document(value: &Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(aws_smithy_types::Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(aws_smithy_types::Number::NegInt(i))
            } else if let Some(f) = n.as_f64() {
                Document::Number(aws_smithy_types::Number::Float(f))
            } else {
                Document::Null
            }
        }
        Value::String(s) => Document::String(s.clone()),
        Value::Array(arr) => Document::Array(arr.iter().map(json_value_to_document).collect()),
        Value::Object(obj) => Document::Object(
            obj.iter().map(|(k, v)| (k.clone(), json_value_to_document(v))).collect(),
        ),
    }
}

/// Polling bounds for asynchronous invocations: 20 attempts at 3 s apart,
/// roughly a minute of waiting before the job is left to finish on its own.
#[derive(Clone, Debug)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(3), max_attempts: 20 }
    }
}

impl PollConfig {
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Drives one model at a time to a terminal outcome.
pub struct ModelProber<'a, A: InvocationApi> {
    api: &'a A,
    region: &'a str,
    output_bucket: Option<&'a str>,
    poll: PollConfig,
}

impl<'a, A: InvocationApi> ModelProber<'a, A> {
    pub fn new(api: &'a A, region: &'a str, output_bucket: Option<&'a str>) -> Self {
        Self { api, region, output_bucket, poll: PollConfig::default() }
    }

    #[must_use]
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Probe a single model. Never returns an error: every failure becomes
    /// a `Failed` or `Skipped` outcome.
    #[instrument(skip(self), fields(region = %self.region))]
    pub async fn probe(&self, model_id: &str) -> ProbeOutcome {
        match payload::plan_for(model_id) {
            InvocationPlan::Unsupported { reason } => {
                ProbeOutcome::Skipped { reason: reason.to_string() }
            }
            InvocationPlan::AsyncInvoke { input } => self.probe_async(model_id, &input).await,
            InvocationPlan::Invoke { primary, fallbacks } => {
                self.probe_sync(model_id, &primary, &fallbacks).await
            }
        }
    }

    /// Synchronous path: resolve the routing profile, try the primary body,
    /// then each fallback in order. Terminal on first success.
    async fn probe_sync(&self, model_id: &str, primary: &Value, fallbacks: &[Value]) -> ProbeOutcome {
        let profile = routing::resolve_profile(self.region, model_id);
        let target_id = profile.unwrap_or(model_id);
        let routed = profile.map(str::to_string);

        let primary_err = match self.try_invoke(target_id, primary).await {
            Ok(()) => return ProbeOutcome::Success { routed, via_async: false },
            Err(e) => e,
        };

        for fallback in fallbacks {
            debug!("retrying {target_id} with fallback payload");
            if self.try_invoke(target_id, fallback).await.is_ok() {
                return ProbeOutcome::Success { routed, via_async: false };
            }
        }

        // Known-unreachable variant; exhaustion here is not a real failure.
        if model_id.to_ascii_lowercase().contains("premier:mm") {
            return ProbeOutcome::Skipped { reason: "no access".to_string() };
        }

        ProbeOutcome::Failed { code: failure_code(&primary_err) }
    }

    async fn try_invoke(&self, model_id: &str, body: &Value) -> Result<()> {
        let body = serde_json::to_string(body)?;
        self.api.invoke_model(model_id, &body).await
    }

    /// Asynchronous path: start the job with S3 output and poll until a
    /// terminal status or the attempt budget runs out. A budget overrun is
    /// a skip, not a failure; the job may still complete out-of-band.
    async fn probe_async(&self, model_id: &str, input: &Value) -> ProbeOutcome {
        let Some(bucket) = self.output_bucket else {
            return ProbeOutcome::Failed { code: "OutputBucketRequired".to_string() };
        };
        let s3_uri = format!("s3://{bucket}/bedrock-output/");

        let invocation_arn = match self.api.start_async_invoke(model_id, input, &s3_uri).await {
            Ok(arn) => arn,
            Err(e) => return ProbeOutcome::Failed { code: failure_code(&e) },
        };

        for attempt in 0..self.poll.max_attempts {
            match self.api.async_invoke_status(&invocation_arn).await {
                Ok(JobStatus::Completed) => {
                    return ProbeOutcome::Success { routed: None, via_async: true };
                }
                Ok(JobStatus::Failed) => {
                    return ProbeOutcome::Failed { code: "AsyncInvokeFailed".to_string() };
                }
                Ok(JobStatus::InProgress) => {
                    debug!("{model_id}: async job in progress (attempt {})", attempt + 1);
                }
                Err(e) => return ProbeOutcome::Failed { code: failure_code(&e) },
            }

            if attempt + 1 < self.poll.max_attempts {
                tokio::time::sleep(self.poll.interval).await;
            }
        }

        ProbeOutcome::Skipped { reason: "async job still in progress".to_string() }
    }
}

/// The code shown on a failure line: the service error code when we have
/// one, the error text otherwise.
fn failure_code(err: &ProbeError) -> String {
    match err {
        ProbeError::Invocation(code) => code.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted mock: invoke results and async statuses are consumed in
    /// order; an empty script means "succeed" / "in progress".
    #[derive(Default)]
    struct MockApi {
        invoke_script: Mutex<VecDeque<std::result::Result<(), String>>>,
        status_script: Mutex<VecDeque<JobStatus>>,
        invoked: Mutex<Vec<(String, String)>>,
        started: Mutex<Vec<(String, String)>>,
        status_polls: Mutex<u32>,
    }

    impl MockApi {
        fn failing_invokes(codes: &[&str]) -> Self {
            let api = Self::default();
            api.invoke_script
                .lock()
                .unwrap()
                .extend(codes.iter().map(|c| Err(c.to_string())));
            api
        }

        fn with_statuses(statuses: impl IntoIterator<Item = JobStatus>) -> Self {
            let api = Self::default();
            api.status_script.lock().unwrap().extend(statuses);
            api
        }

        fn invoked(&self) -> Vec<(String, String)> {
            self.invoked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InvocationApi for MockApi {
        async fn invoke_model(&self, model_id: &str, body: &str) -> Result<()> {
            self.invoked.lock().unwrap().push((model_id.to_string(), body.to_string()));
            match self.invoke_script.lock().unwrap().pop_front() {
                Some(Err(code)) => Err(ProbeError::Invocation(code)),
                _ => Ok(()),
            }
        }

        async fn start_async_invoke(
            &self,
            model_id: &str,
            _input: &Value,
            s3_uri: &str,
        ) -> Result<String> {
            self.started.lock().unwrap().push((model_id.to_string(), s3_uri.to_string()));
            Ok("arn:aws:bedrock:us-east-1:123456789012:async-invoke/test".to_string())
        }

        async fn async_invoke_status(&self, _invocation_arn: &str) -> Result<JobStatus> {
            *self.status_polls.lock().unwrap() += 1;
            Ok(self.status_script.lock().unwrap().pop_front().unwrap_or(JobStatus::InProgress))
        }
    }

    fn zero_interval() -> PollConfig {
        PollConfig::default().with_interval(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_routed_invocation_targets_profile_id() {
        let api = MockApi::default();
        let prober = ModelProber::new(&api, "us-east-1", None);

        let outcome = prober.probe("anthropic.claude-3-5-sonnet-20241022-v2:0").await;

        assert_eq!(
            outcome,
            ProbeOutcome::Success {
                routed: Some("us.anthropic.claude-3-5-sonnet-20241022-v2:0".to_string()),
                via_async: false,
            }
        );
        let calls = api.invoked();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "us.anthropic.claude-3-5-sonnet-20241022-v2:0");
        assert!(calls[0].1.contains("anthropic_version"));
    }

    #[tokio::test]
    async fn test_unmapped_region_uses_base_id() {
        let api = MockApi::default();
        let prober = ModelProber::new(&api, "eu-west-1", None);

        let outcome = prober.probe("amazon.nova-pro-v1:0").await;

        assert_eq!(outcome, ProbeOutcome::Success { routed: None, via_async: false });
        assert_eq!(api.invoked()[0].0, "amazon.nova-pro-v1:0");
    }

    #[tokio::test]
    async fn test_fallback_payload_rescues_failure() {
        let api = MockApi::failing_invokes(&["ValidationException"]);
        let prober = ModelProber::new(&api, "eu-west-1", None);

        let outcome = prober.probe("amazon.nova-pro-v1:0").await;

        assert!(outcome.is_success());
        let calls = api.invoked();
        assert_eq!(calls.len(), 2);
        // The fallback is the plain-messages shape, not the structured one.
        assert!(calls[1].1.contains("max_tokens"));
    }

    #[tokio::test]
    async fn test_exhaustion_reports_primary_error_code() {
        let api = MockApi::failing_invokes(&[
            "AccessDeniedException",
            "ValidationException",
            "ValidationException",
        ]);
        let prober = ModelProber::new(&api, "eu-west-1", None);

        let outcome = prober.probe("meta.llama3-1-8b-instruct-v1:0").await;

        assert_eq!(outcome, ProbeOutcome::Failed { code: "AccessDeniedException".to_string() });
        assert_eq!(api.invoked().len(), 3);
    }

    #[tokio::test]
    async fn test_premier_mm_exhaustion_is_a_skip() {
        let api = MockApi::failing_invokes(&["AccessDeniedException", "AccessDeniedException"]);
        let prober = ModelProber::new(&api, "eu-west-1", None);

        let outcome = prober.probe("amazon.nova-premier:mm-v1:0").await;

        assert!(matches!(outcome, ProbeOutcome::Skipped { .. }));
    }

    #[tokio::test]
    async fn test_nova_sonic_is_never_invoked() {
        let api = MockApi::default();
        let prober = ModelProber::new(&api, "us-east-1", Some("bucket"));

        let outcome = prober.probe("amazon.nova-sonic-v1:0").await;

        assert!(matches!(outcome, ProbeOutcome::Skipped { .. }));
        assert!(api.invoked().is_empty());
        assert!(api.started.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_async_requires_bucket() {
        let api = MockApi::default();
        let prober = ModelProber::new(&api, "us-east-1", None);

        let outcome = prober.probe("twelvelabs.marengo-embed-2-7-v1:0").await;

        assert_eq!(outcome, ProbeOutcome::Failed { code: "OutputBucketRequired".to_string() });
        assert!(api.started.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_async_targets_bucket_output_prefix() {
        let api = MockApi::with_statuses([JobStatus::Completed]);
        let prober = ModelProber::new(&api, "us-east-1", Some("bedrock-output-123-us-east-1"))
            .with_poll_config(zero_interval());

        let outcome = prober.probe("amazon.nova-reel-v1:0").await;

        assert_eq!(outcome, ProbeOutcome::Success { routed: None, via_async: true });
        let started = api.started.lock().unwrap().clone();
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].1, "s3://bedrock-output-123-us-east-1/bedrock-output/");
        assert!(api.invoked().is_empty(), "async families never use InvokeModel");
    }

    #[tokio::test]
    async fn test_poll_succeeds_on_twentieth_attempt() {
        let mut statuses = vec![JobStatus::InProgress; 19];
        statuses.push(JobStatus::Completed);
        let api = MockApi::with_statuses(statuses);
        let prober = ModelProber::new(&api, "us-east-1", Some("bucket"))
            .with_poll_config(zero_interval());

        let outcome = prober.probe("twelvelabs.marengo-embed-2-7-v1:0").await;

        assert!(outcome.is_success());
        assert_eq!(*api.status_polls.lock().unwrap(), 20);
    }

    #[tokio::test]
    async fn test_poll_budget_overrun_is_a_skip() {
        let api = MockApi::with_statuses(vec![JobStatus::InProgress; 21]);
        let prober = ModelProber::new(&api, "us-east-1", Some("bucket"))
            .with_poll_config(zero_interval());

        let outcome = prober.probe("twelvelabs.marengo-embed-2-7-v1:0").await;

        assert_eq!(
            outcome,
            ProbeOutcome::Skipped { reason: "async job still in progress".to_string() }
        );
        assert_eq!(*api.status_polls.lock().unwrap(), 20);
    }

    #[tokio::test]
    async fn test_async_job_failure_is_a_failure() {
        let api = MockApi::with_statuses([JobStatus::InProgress, JobStatus::Failed]);
        let prober = ModelProber::new(&api, "us-east-1", Some("bucket"))
            .with_poll_config(zero_interval());

        let outcome = prober.probe("amazon.nova-reel-v1:1").await;

        assert_eq!(outcome, ProbeOutcome::Failed { code: "AsyncInvokeFailed".to_string() });
    }

    #[test]
    fn test_json_value_to_document() {
        let value = serde_json::json!({
            "taskType": "TEXT_VIDEO",
            "videoGenerationConfig": {"durationSeconds": 6, "fps": 24},
            "flags": [true, false],
            "nothing": null
        });
        let Document::Object(obj) = json_value_to_document(&value) else {
            panic!("expected an object document");
        };
        assert_eq!(obj["taskType"], Document::String("TEXT_VIDEO".to_string()));
        let Document::Object(config) = &obj["videoGenerationConfig"] else {
            panic!("expected a nested object");
        };
        assert_eq!(config["fps"], Document::Number(aws_smithy_types::Number::PosInt(24)));
    }
}
