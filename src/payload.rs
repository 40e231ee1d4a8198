//! Per-family request payload dispatch.
//!
//! Every Bedrock model family expects its own request body shape. The probe
//! sends the smallest request each family accepts (single-digit token caps,
//! one short prompt), so a success means "the model is callable", nothing
//! more. Classification is an ordered case-insensitive substring match on
//! the model id; the first matching family wins.

use serde_json::{Value, json};

/// Model family, classified from the model id.
///
/// Families that share a vendor prefix but need different payloads get their
/// own variant (`NovaCanvas` vs `Nova`, `CohereEmbed` vs `Cohere`, ...).
/// `LlamaChat` marks the llama3-1/3-2/3-3/4 generations, which also accept
/// the chat-messages shape as a fallback; older llama models only take the
/// templated prompt form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Claude,
    NovaCanvas,
    NovaReel,
    NovaSonic,
    Nova,
    TitanEmbed,
    MarengoEmbed,
    TitanImageGenerator,
    Titan,
    LlamaChat,
    Llama,
    Jamba,
    CohereEmbed,
    CohereCommandR,
    Cohere,
    StableDiffusion,
    DeepSeek,
    Pixtral,
    Generic,
}

impl ModelFamily {
    /// Classify a model id. Match order matters: `titan-embed` must be
    /// checked before `titan`, `embed`/`command-r` before plain `cohere`.
    pub fn classify(model_id: &str) -> Self {
        let id = model_id.to_ascii_lowercase();

        if id.contains("claude") {
            Self::Claude
        } else if id.contains("nova") {
            if id.contains("canvas") {
                Self::NovaCanvas
            } else if id.contains("reel") {
                Self::NovaReel
            } else if id.contains("sonic") {
                Self::NovaSonic
            } else {
                Self::Nova
            }
        } else if id.contains("titan-embed") {
            Self::TitanEmbed
        } else if id.contains("marengo-embed") {
            Self::MarengoEmbed
        } else if id.contains("titan") {
            if id.contains("image-generator") { Self::TitanImageGenerator } else { Self::Titan }
        } else if id.contains("llama") {
            if ["llama3-1", "llama3-2", "llama3-3", "llama4"].iter().any(|v| id.contains(v)) {
                Self::LlamaChat
            } else {
                Self::Llama
            }
        } else if id.contains("jamba") {
            Self::Jamba
        } else if id.contains("cohere") {
            if id.contains("embed") {
                Self::CohereEmbed
            } else if id.contains("command-r") {
                Self::CohereCommandR
            } else {
                Self::Cohere
            }
        } else if id.contains("stable-diffusion") {
            Self::StableDiffusion
        } else if id.contains("deepseek") {
            Self::DeepSeek
        } else if id.contains("pixtral") {
            Self::Pixtral
        } else {
            Self::Generic
        }
    }
}

/// How a model gets probed.
#[derive(Debug, Clone)]
pub enum InvocationPlan {
    /// Synchronous `InvokeModel`: one primary body, then each fallback in
    /// order until one succeeds or all are exhausted.
    Invoke { primary: Value, fallbacks: Vec<Value> },
    /// Asynchronous `StartAsyncInvoke` with S3 output and status polling.
    AsyncInvoke { input: Value },
    /// Family cannot be probed through the invocation APIs at all;
    /// reported as a skip without any call.
    Unsupported { reason: &'static str },
}

/// Build the invocation plan for a model id.
pub fn plan_for(model_id: &str) -> InvocationPlan {
    ModelFamily::classify(model_id).plan()
}

impl ModelFamily {
    /// The request plan for this family.
    ///
    /// Fallback lists are fixed per family; a shape identical to the
    /// family's primary payload is never repeated as a fallback.
    pub fn plan(self) -> InvocationPlan {
        match self {
            Self::Claude => InvocationPlan::Invoke {
                primary: json!({
                    "messages": [{"role": "user", "content": "Hello"}],
                    "max_tokens": 10,
                    "anthropic_version": "bedrock-2023-05-31"
                }),
                fallbacks: vec![],
            },

            Self::NovaCanvas => InvocationPlan::Invoke {
                primary: text_image_payload(),
                fallbacks: vec![],
            },

            // Nova Reel only supports the asynchronous path.
            Self::NovaReel => InvocationPlan::AsyncInvoke {
                input: json!({
                    "taskType": "TEXT_VIDEO",
                    "textToVideoParams": {"text": "Hello world"},
                    "videoGenerationConfig": {
                        "durationSeconds": 6,
                        "fps": 24,
                        "dimension": "1280x720"
                    }
                }),
            },

            // Nova Sonic is speech-to-speech over the bidirectional
            // streaming API; InvokeModel cannot reach it.
            Self::NovaSonic => InvocationPlan::Unsupported { reason: "streaming API required" },

            Self::Nova => InvocationPlan::Invoke {
                primary: json!({
                    "messages": [{"role": "user", "content": [{"text": "Hello"}]}],
                    "inferenceConfig": {"max_new_tokens": 10}
                }),
                fallbacks: vec![json!({
                    "messages": [{"role": "user", "content": "Hello"}],
                    "max_tokens": 10
                })],
            },

            Self::TitanEmbed => InvocationPlan::Invoke {
                primary: json!({"inputText": "Hello world"}),
                fallbacks: vec![],
            },

            // TwelveLabs Marengo only supports the asynchronous path.
            Self::MarengoEmbed => InvocationPlan::AsyncInvoke {
                input: json!({"inputType": "text", "inputText": "Hello world"}),
            },

            Self::TitanImageGenerator => InvocationPlan::Invoke {
                primary: text_image_payload(),
                fallbacks: vec![],
            },

            Self::Titan => InvocationPlan::Invoke {
                primary: json!({
                    "inputText": "Hello",
                    "textGenerationConfig": {"maxTokenCount": 10}
                }),
                fallbacks: vec![],
            },

            Self::LlamaChat => InvocationPlan::Invoke {
                primary: llama_prompt_payload(),
                fallbacks: vec![
                    json!({
                        "messages": [{"role": "user", "content": "Hello"}],
                        "max_tokens": 10,
                        "temperature": 0.1
                    }),
                    llama_template_payload(),
                ],
            },

            Self::Llama => InvocationPlan::Invoke {
                primary: llama_prompt_payload(),
                fallbacks: vec![
                    llama_template_payload(),
                    json!({
                        "messages": [{"role": "user", "content": "Hello"}],
                        "max_tokens": 10
                    }),
                ],
            },

            Self::Jamba => InvocationPlan::Invoke {
                primary: json!({
                    "messages": [{"role": "user", "content": "Hello"}],
                    "max_tokens": 10
                }),
                fallbacks: vec![json!({"prompt": "Hello", "max_tokens": 10})],
            },

            Self::CohereEmbed => InvocationPlan::Invoke {
                primary: json!({
                    "texts": ["Hello world"],
                    "input_type": "search_document"
                }),
                fallbacks: vec![
                    json!({"texts": ["Hello world"], "input_type": "classification"}),
                    json!({"texts": ["Hello world"]}),
                ],
            },

            Self::CohereCommandR => InvocationPlan::Invoke {
                primary: json!({"message": "Hello", "max_tokens": 10}),
                fallbacks: vec![json!({"prompt": "Hello", "max_tokens": 10})],
            },

            Self::Cohere => InvocationPlan::Invoke {
                primary: json!({"prompt": "Hello", "max_tokens": 10}),
                fallbacks: vec![],
            },

            Self::StableDiffusion => InvocationPlan::Invoke {
                primary: json!({
                    "text_prompts": [{"text": "Hello world"}],
                    "cfg_scale": 10,
                    "seed": 0,
                    "steps": 50
                }),
                fallbacks: vec![],
            },

            Self::DeepSeek => InvocationPlan::Invoke {
                primary: json!({
                    "messages": [{"role": "user", "content": "Hello"}],
                    "max_tokens": 10,
                    "temperature": 0.1
                }),
                fallbacks: vec![json!({
                    "prompt": "Hello",
                    "max_tokens": 10,
                    "temperature": 0.1
                })],
            },

            Self::Pixtral => InvocationPlan::Invoke {
                primary: json!({
                    "messages": [{"role": "user", "content": "Hello"}],
                    "max_tokens": 10
                }),
                fallbacks: vec![],
            },

            Self::Generic => InvocationPlan::Invoke {
                primary: json!({"prompt": "Hello", "max_tokens": 10}),
                fallbacks: vec![],
            },
        }
    }
}

/// Shared TEXT_IMAGE body for Nova Canvas and Titan image generators.
fn text_image_payload() -> Value {
    json!({
        "taskType": "TEXT_IMAGE",
        "textToImageParams": {"text": "Hello world"},
        "imageGenerationConfig": {
            "numberOfImages": 1,
            "height": 512,
            "width": 512
        }
    })
}

fn llama_prompt_payload() -> Value {
    json!({"prompt": "Hello", "max_gen_len": 10, "temperature": 0.1})
}

/// Llama 3+ instruct template form, used when the bare prompt is rejected.
fn llama_template_payload() -> Value {
    json!({
        "prompt": "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\nHello<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n",
        "max_gen_len": 10
    })
}
