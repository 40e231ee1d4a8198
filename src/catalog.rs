//! Foundation model enumeration and filtering.

use crate::context::ProbeContext;
use crate::error::{ProbeError, Result};

/// Substrings that mark a listing entry as not invocable through
/// `InvokeModel`: multimodal (`:mm`) and token-limited (`:512`) variants,
/// plus three legacy entries whose listed version string is rejected by the
/// runtime API.
const SKIP_PATTERNS: [&str; 5] = [
    ":mm",
    ":512",
    "titan-image-generator-v1:0",
    "titan-embed-image-v1:0",
    "stable-diffusion-xl-v1:0",
];

/// Whether a listed model id can be probed at all.
///
/// Ids ending in `k` are context-window variants (e.g. `...:0:100k`) that
/// duplicate the base model under an uninvocable alias.
pub fn is_invocable(model_id: &str) -> bool {
    !model_id.ends_with('k') && !SKIP_PATTERNS.iter().any(|p| model_id.contains(p))
}

/// List every invocable foundation model id in the context's region.
///
/// Order is exactly the order the service returns; the probe loop and the
/// report both follow it.
///
/// # Errors
///
/// Returns `ProbeError::Listing` when the listing call fails; the runner
/// treats that as an empty catalog and ends the run.
pub async fn list_invocable_models(ctx: &ProbeContext) -> Result<Vec<String>> {
    let response = ctx
        .bedrock
        .list_foundation_models()
        .send()
        .await
        .map_err(|e| ProbeError::Listing(format!("list_foundation_models failed: {e}")))?;

    Ok(response
        .model_summaries()
        .iter()
        .map(|summary| summary.model_id().to_string())
        .filter(|model_id| is_invocable(model_id))
        .collect())
}
