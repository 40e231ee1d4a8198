//! Whole-run orchestration: bucket setup, enumeration, sequential probing.

use crate::bucket;
use crate::catalog;
use crate::config::ProbeConfig;
use crate::context::ProbeContext;
use crate::error::Result;
use crate::invoke::{AwsInvocationApi, InvocationApi, ModelProber};
use crate::report::{ProbeOutcome, Reporter};
use tracing::warn;

/// Probe every model in order, printing one report line each, and return
/// the outcomes. Models are probed strictly sequentially; a failure never
/// stops the batch.
pub async fn probe_all<A: InvocationApi>(
    prober: &ModelProber<'_, A>,
    models: &[String],
) -> Vec<ProbeOutcome> {
    let mut outcomes = Vec::with_capacity(models.len());
    for model_id in models {
        let outcome = prober.probe(model_id).await;
        Reporter::model_line(model_id, &outcome);
        outcomes.push(outcome);
    }
    outcomes
}

/// Run a full probe pass against the configured region.
///
/// Bucket provisioning failure is downgraded to a warning (async-dependent
/// models then fail individually); an enumeration failure ends the run with
/// an empty report. The process exits successfully either way.
pub async fn run(config: ProbeConfig) -> Result<()> {
    let ctx = ProbeContext::new(&config).await?;

    let output_bucket = match bucket::ensure_output_bucket(&ctx).await {
        Ok(name) => Some(name),
        Err(e) => {
            warn!("output bucket unavailable, async models will fail: {e}");
            None
        }
    };

    let models = match catalog::list_invocable_models(&ctx).await {
        Ok(models) => models,
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    };

    if models.is_empty() {
        println!("No invocable models available.");
        return Ok(());
    }

    Reporter::model_list(&models);

    let api = AwsInvocationApi::new(ctx.runtime.clone());
    let prober = ModelProber::new(&api, &ctx.region, output_bucket.as_deref());

    let outcomes = probe_all(&prober, &models).await;
    let successes = outcomes.iter().filter(|o| o.is_success()).count();

    Reporter::summary(successes, models.len());

    Ok(())
}
