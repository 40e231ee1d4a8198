//! Per-model outcomes and console reporting.

/// Terminal outcome of probing one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The model answered a probe request. `routed` carries the inference
    /// profile id when the call went through cross-region routing.
    Success { routed: Option<String>, via_async: bool },
    /// Every payload attempt failed; `code` is the service error code of
    /// the primary attempt.
    Failed { code: String },
    /// Deliberately not probed (or probe left in progress); not a failure.
    Skipped { reason: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Human-readable console report. One glyph per outcome: `✓` success,
/// `✗` failure, `-` skip. Report lines go to stdout; diagnostics go to the
/// tracing stream.
pub struct Reporter;

impl Reporter {
    /// Print the enumerated model list before probing starts.
    pub fn model_list(models: &[String]) {
        println!("\nInvocable models ({}):", models.len());
        for (i, model_id) in models.iter().enumerate() {
            println!("{}. {}", i + 1, model_id);
        }
        println!("\nSending probe requests...\n");
    }

    /// Print one result line for a model.
    pub fn model_line(model_id: &str, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Success { routed: Some(profile), .. } => {
                println!("✓ {model_id}: ok (cross-region: {profile})");
            }
            ProbeOutcome::Success { via_async: true, .. } => {
                println!("✓ {model_id}: ok (async)");
            }
            ProbeOutcome::Success { .. } => {
                println!("✓ {model_id}: ok");
            }
            ProbeOutcome::Failed { code } => {
                println!("✗ {model_id}: failed - {code}");
            }
            ProbeOutcome::Skipped { reason } => {
                println!("- {model_id}: skipped ({reason})");
            }
        }
    }

    /// Print the final summary. Skips count toward the total but not as
    /// successes.
    pub fn summary(successes: usize, total: usize) {
        println!("\nDone: {successes}/{total} models succeeded");
    }
}
