//! # bedrock-probe
//!
//! Liveness probe for Amazon Bedrock foundation models.
//!
//! ## Overview
//!
//! Given a region and credentials, the probe enumerates every invocable
//! foundation model, sends each one the smallest request its family
//! accepts, and prints a per-model success/failure/skip report plus a
//! summary. Model families that only support asynchronous invocation
//! (Nova Reel, TwelveLabs Marengo) are probed through `StartAsyncInvoke`
//! with S3 output and bounded status polling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock_probe::{ProbeConfig, runner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProbeConfig::new("us-east-1", "AKIA...", "...");
//!     runner::run(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Structure
//!
//! - [`catalog`] - model enumeration and filtering
//! - [`routing`] - cross-region inference profile table
//! - [`payload`] - per-family request payload dispatch
//! - [`invoke`] - synchronous/asynchronous invocation and polling
//! - [`bucket`] - S3 output bucket provisioning
//! - [`report`] - console reporting

pub mod bucket;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod invoke;
pub mod payload;
pub mod report;
pub mod routing;
pub mod runner;

pub use config::ProbeConfig;
pub use context::ProbeContext;
pub use error::{ProbeError, Result};
pub use invoke::{AwsInvocationApi, InvocationApi, JobStatus, ModelProber, PollConfig};
pub use payload::{InvocationPlan, ModelFamily};
pub use report::{ProbeOutcome, Reporter};
