//! Cross-region inference profile routing.
//!
//! Some models cannot be invoked through their base id in every region;
//! Bedrock exposes them behind cross-region inference profiles instead
//! (`us.` / `apac.` prefixed ids). Only `us-east-1` and `ap-northeast-2`
//! carry such mappings here; every other region invokes the base id
//! directly.

/// Static routing table: `(region, base model id, inference profile id)`.
///
/// A single table for both regions, keyed by the `(region, base id)` pair,
/// so the two regions cannot drift apart structurally. An absent pair means
/// "invoke the base id directly".
const INFERENCE_PROFILES: &[(&str, &str, &str)] = &[
    // us-east-1
    ("us-east-1", "amazon.nova-pro-v1:0", "us.amazon.nova-pro-v1:0"),
    ("us-east-1", "amazon.nova-lite-v1:0", "us.amazon.nova-lite-v1:0"),
    ("us-east-1", "amazon.nova-micro-v1:0", "us.amazon.nova-micro-v1:0"),
    (
        "us-east-1",
        "anthropic.claude-3-sonnet-20240229-v1:0",
        "us.anthropic.claude-3-sonnet-20240229-v1:0",
    ),
    (
        "us-east-1",
        "anthropic.claude-3-5-sonnet-20241022-v2:0",
        "us.anthropic.claude-3-5-sonnet-20241022-v2:0",
    ),
    (
        "us-east-1",
        "anthropic.claude-3-7-sonnet-20250219-v1:0",
        "us.anthropic.claude-3-7-sonnet-20250219-v1:0",
    ),
    (
        "us-east-1",
        "anthropic.claude-sonnet-4-20250514-v1:0",
        "us.anthropic.claude-sonnet-4-20250514-v1:0",
    ),
    (
        "us-east-1",
        "anthropic.claude-3-5-haiku-20241022-v1:0",
        "us.anthropic.claude-3-5-haiku-20241022-v1:0",
    ),
    ("us-east-1", "meta.llama3-1-8b-instruct-v1:0", "us.meta.llama3-1-8b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-1-70b-instruct-v1:0", "us.meta.llama3-1-70b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-2-11b-instruct-v1:0", "us.meta.llama3-2-11b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-2-90b-instruct-v1:0", "us.meta.llama3-2-90b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-2-1b-instruct-v1:0", "us.meta.llama3-2-1b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-2-3b-instruct-v1:0", "us.meta.llama3-2-3b-instruct-v1:0"),
    ("us-east-1", "meta.llama3-3-70b-instruct-v1:0", "us.meta.llama3-3-70b-instruct-v1:0"),
    ("us-east-1", "meta.llama4-scout-17b-instruct-v1:0", "us.meta.llama4-scout-17b-instruct-v1:0"),
    (
        "us-east-1",
        "meta.llama4-maverick-17b-instruct-v1:0",
        "us.meta.llama4-maverick-17b-instruct-v1:0",
    ),
    ("us-east-1", "deepseek.r1-v1:0", "us.deepseek.r1-v1:0"),
    ("us-east-1", "amazon.nova-premier-v1:0", "us.amazon.nova-premier-v1:0"),
    ("us-east-1", "amazon.titan-image-generator-v1:0", "us.amazon.titan-image-generator-v1:0"),
    ("us-east-1", "amazon.titan-embed-image-v1:0", "us.amazon.titan-embed-image-v1:0"),
    ("us-east-1", "stability.stable-diffusion-xl-v1:0", "us.stability.stable-diffusion-xl-v1:0"),
    ("us-east-1", "mistral.pixtral-large-2502-v1:0", "us.mistral.pixtral-large-2502-v1:0"),
    ("us-east-1", "cohere.embed-english-v3:0:512", "us.cohere.embed-english-v3:0:512"),
    ("us-east-1", "cohere.embed-multilingual-v3:0:512", "us.cohere.embed-multilingual-v3:0:512"),
    ("us-east-1", "amazon.nova-canvas-v1:0", "us.amazon.nova-canvas-v1:0"),
    ("us-east-1", "amazon.nova-reel-v1:0", "us.amazon.nova-reel-v1:0"),
    ("us-east-1", "amazon.nova-reel-v1:1", "us.amazon.nova-reel-v1:1"),
    ("us-east-1", "amazon.nova-sonic-v1:0", "us.amazon.nova-sonic-v1:0"),
    ("us-east-1", "anthropic.claude-3-opus-20240229-v1:0", "us.anthropic.claude-3-opus-20240229-v1:0"),
    ("us-east-1", "anthropic.claude-opus-4-20250514-v1:0", "us.anthropic.claude-opus-4-20250514-v1:0"),
    // ap-northeast-2 (no claude-3-5-haiku profile in this region)
    ("ap-northeast-2", "amazon.nova-pro-v1:0", "apac.amazon.nova-pro-v1:0"),
    ("ap-northeast-2", "amazon.nova-lite-v1:0", "apac.amazon.nova-lite-v1:0"),
    ("ap-northeast-2", "amazon.nova-micro-v1:0", "apac.amazon.nova-micro-v1:0"),
    (
        "ap-northeast-2",
        "anthropic.claude-3-sonnet-20240229-v1:0",
        "apac.anthropic.claude-3-sonnet-20240229-v1:0",
    ),
    (
        "ap-northeast-2",
        "anthropic.claude-3-5-sonnet-20241022-v2:0",
        "apac.anthropic.claude-3-5-sonnet-20241022-v2:0",
    ),
    (
        "ap-northeast-2",
        "anthropic.claude-3-7-sonnet-20250219-v1:0",
        "apac.anthropic.claude-3-7-sonnet-20250219-v1:0",
    ),
    (
        "ap-northeast-2",
        "anthropic.claude-sonnet-4-20250514-v1:0",
        "apac.anthropic.claude-sonnet-4-20250514-v1:0",
    ),
    ("ap-northeast-2", "meta.llama3-1-8b-instruct-v1:0", "apac.meta.llama3-1-8b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-1-70b-instruct-v1:0", "apac.meta.llama3-1-70b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-2-11b-instruct-v1:0", "apac.meta.llama3-2-11b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-2-90b-instruct-v1:0", "apac.meta.llama3-2-90b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-2-1b-instruct-v1:0", "apac.meta.llama3-2-1b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-2-3b-instruct-v1:0", "apac.meta.llama3-2-3b-instruct-v1:0"),
    ("ap-northeast-2", "meta.llama3-3-70b-instruct-v1:0", "apac.meta.llama3-3-70b-instruct-v1:0"),
    (
        "ap-northeast-2",
        "meta.llama4-scout-17b-instruct-v1:0",
        "apac.meta.llama4-scout-17b-instruct-v1:0",
    ),
    (
        "ap-northeast-2",
        "meta.llama4-maverick-17b-instruct-v1:0",
        "apac.meta.llama4-maverick-17b-instruct-v1:0",
    ),
    ("ap-northeast-2", "deepseek.r1-v1:0", "apac.deepseek.r1-v1:0"),
    ("ap-northeast-2", "amazon.nova-premier-v1:0", "apac.amazon.nova-premier-v1:0"),
    (
        "ap-northeast-2",
        "amazon.titan-image-generator-v1:0",
        "apac.amazon.titan-image-generator-v1:0",
    ),
    ("ap-northeast-2", "amazon.titan-embed-image-v1:0", "apac.amazon.titan-embed-image-v1:0"),
    (
        "ap-northeast-2",
        "stability.stable-diffusion-xl-v1:0",
        "apac.stability.stable-diffusion-xl-v1:0",
    ),
    ("ap-northeast-2", "mistral.pixtral-large-2502-v1:0", "apac.mistral.pixtral-large-2502-v1:0"),
    ("ap-northeast-2", "cohere.embed-english-v3:0:512", "apac.cohere.embed-english-v3:0:512"),
    (
        "ap-northeast-2",
        "cohere.embed-multilingual-v3:0:512",
        "apac.cohere.embed-multilingual-v3:0:512",
    ),
    ("ap-northeast-2", "amazon.nova-canvas-v1:0", "apac.amazon.nova-canvas-v1:0"),
    ("ap-northeast-2", "amazon.nova-reel-v1:0", "apac.amazon.nova-reel-v1:0"),
    ("ap-northeast-2", "amazon.nova-reel-v1:1", "apac.amazon.nova-reel-v1:1"),
    ("ap-northeast-2", "amazon.nova-sonic-v1:0", "apac.amazon.nova-sonic-v1:0"),
    (
        "ap-northeast-2",
        "anthropic.claude-3-opus-20240229-v1:0",
        "apac.anthropic.claude-3-opus-20240229-v1:0",
    ),
    (
        "ap-northeast-2",
        "anthropic.claude-opus-4-20250514-v1:0",
        "apac.anthropic.claude-opus-4-20250514-v1:0",
    ),
];

/// Resolve the inference profile id for a `(region, base model id)` pair.
///
/// `None` means the model is invoked through its base id unmodified.
pub fn resolve_profile(region: &str, model_id: &str) -> Option<&'static str> {
    INFERENCE_PROFILES
        .iter()
        .find(|(r, base, _)| *r == region && *base == model_id)
        .map(|(_, _, profile)| *profile)
}
