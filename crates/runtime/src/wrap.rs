//! Executing a unit of work under a technique decision.

use crate::envelope::{CallEnvelope, VerificationBadge, ENVELOPE_CONFIDENCE};
use crate::sink::ProgressSink;
use chrono::Utc;
use promptgate_core::{InferenceRequest, Technique, TechniqueDecision};
use std::time::Instant;
use tracing::{debug, warn};

/// Run `unit_of_work` once, notifying `sink` and enveloping the result.
///
/// The unit of work is an arbitrary model call supplied by the caller; it
/// is awaited exactly once and its error, if any, is returned unmodified.
/// The progress notification strictly precedes the await; the summary
/// notification (emitted only when at least one technique is active)
/// strictly follows it. If the unit of work never resolves, neither does
/// this function — timeouts belong inside the closure.
pub async fn wrap<T, E, F, Fut>(
    unit_of_work: F,
    request: &InferenceRequest,
    decision: &TechniqueDecision,
    sink: Option<&dyn ProgressSink>,
) -> Result<CallEnvelope<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let active = decision.active_techniques();
    let status = running_status(&active, decision);
    if let Some(sink) = sink {
        sink.progress(&status);
    }
    debug!(
        tier = %request.tier,
        task = request.task.map(|t| t.as_str()).unwrap_or("unrecognized"),
        "{status}"
    );

    let started_at = Utc::now();
    let start = Instant::now();

    match unit_of_work().await {
        Ok(result) => {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            if !active.is_empty() {
                let summary = format!(
                    "Inference complete in {elapsed_ms}ms using {}",
                    technique_list(&active, decision)
                );
                if let Some(sink) = sink {
                    sink.progress(&summary);
                }
                debug!("{summary}");
            }
            Ok(CallEnvelope {
                result,
                techniques: decision.clone(),
                elapsed_ms,
                confidence: ENVELOPE_CONFIDENCE,
                badge: VerificationBadge::from_decision(decision),
                started_at,
            })
        }
        Err(err) => {
            let message = err.to_string();
            warn!(
                tier = %request.tier,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "inference failed: {message}"
            );
            if let Some(sink) = sink {
                sink.error(&message);
            }
            Err(err)
        }
    }
}

fn running_status(active: &[Technique], decision: &TechniqueDecision) -> String {
    if active.is_empty() {
        "Running standard inference".to_string()
    } else {
        format!(
            "Running inference with {}",
            technique_list(active, decision)
        )
    }
}

fn technique_list(active: &[Technique], decision: &TechniqueDecision) -> String {
    active
        .iter()
        .map(|t| match t {
            Technique::SelfConsistency => {
                format!("{} ({} samples)", t.label(), decision.num_samples)
            }
            _ => t.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
