//! Output bucket provisioning for asynchronous invocations.
//!
//! Asynchronous Bedrock jobs write their results to S3, so a run needs one
//! bucket up front. The name is deterministic per account and region, which
//! makes repeated runs reuse the same bucket instead of accumulating new ones.

use crate::context::ProbeContext;
use crate::error::{ProbeError, Result};
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use tracing::info;

/// Compute the deterministic output bucket name for an account and region.
pub fn output_bucket_name(account_id: &str, region: &str) -> String {
    format!("bedrock-output-{account_id}-{region}")
}

/// Ensure the async output bucket exists, creating it if necessary.
///
/// Looks up the caller's account id, derives the bucket name, and creates
/// the bucket when `HeadBucket` says it is missing. Regions other than
/// `us-east-1` need an explicit location constraint.
///
/// # Errors
///
/// Returns `ProbeError::Identity` when the caller identity lookup fails and
/// `ProbeError::Storage` when bucket creation fails. The caller downgrades
/// either to "no bucket": the run continues and async-dependent models fail
/// individually.
pub async fn ensure_output_bucket(ctx: &ProbeContext) -> Result<String> {
    let identity = ctx
        .sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| ProbeError::Identity(format!("get_caller_identity failed: {e}")))?;

    let account_id = identity
        .account()
        .ok_or_else(|| ProbeError::Identity("caller identity has no account id".to_string()))?;

    let bucket = output_bucket_name(account_id, &ctx.region);

    match ctx.s3.head_bucket().bucket(&bucket).send().await {
        Ok(_) => {
            info!("using existing output bucket {bucket}");
        }
        Err(_) => {
            let mut request = ctx.s3.create_bucket().bucket(&bucket);

            // us-east-1 is the S3 default location and rejects an explicit
            // constraint; every other region requires one.
            if ctx.region != "us-east-1" {
                let constraint = BucketLocationConstraint::from(ctx.region.as_str());
                let bucket_config =
                    CreateBucketConfiguration::builder().location_constraint(constraint).build();
                request = request.create_bucket_configuration(bucket_config);
            }

            request
                .send()
                .await
                .map_err(|e| ProbeError::Storage(format!("create_bucket {bucket} failed: {e}")))?;

            info!("created output bucket {bucket}");
        }
    }

    Ok(bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name_is_deterministic() {
        assert_eq!(
            output_bucket_name("123456789012", "us-east-1"),
            "bedrock-output-123456789012-us-east-1"
        );
        assert_eq!(
            output_bucket_name("123456789012", "ap-northeast-2"),
            "bedrock-output-123456789012-ap-northeast-2"
        );
    }
}
