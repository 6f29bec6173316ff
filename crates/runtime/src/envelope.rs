//! The decorated result returned by the call wrapper.

use chrono::{DateTime, Utc};
use promptgate_core::TechniqueDecision;
use serde::Serialize;

/// Confidence reported on every envelope.
///
/// The value is asserted, not measured — it exists so downstream display
/// code always has a number to show.
pub const ENVELOPE_CONFIDENCE: f32 = 0.95;

/// Whether the output carries a verification badge.
///
/// Derived solely from chain-of-verification having been active for the
/// call; no inspection of the result takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationBadge {
    Verified,
    None,
}

impl VerificationBadge {
    pub fn from_decision(decision: &TechniqueDecision) -> Self {
        if decision.use_chain_of_verification {
            VerificationBadge::Verified
        } else {
            VerificationBadge::None
        }
    }
}

/// A unit-of-work result decorated with technique and timing metadata.
///
/// The caller's value is always wrapped, never annotated in place, so the
/// result type is unambiguous regardless of what `T` is.
#[derive(Debug, Clone, Serialize)]
pub struct CallEnvelope<T> {
    /// The unit of work's return value, untouched.
    pub result: T,

    /// The decision that was in force for this call.
    pub techniques: TechniqueDecision,

    /// Wall-clock duration of the unit of work.
    pub elapsed_ms: u64,

    /// Fixed confidence score ([`ENVELOPE_CONFIDENCE`]).
    pub confidence: f32,

    /// Verification badge derived from the decision.
    pub badge: VerificationBadge,

    /// When the unit of work started.
    pub started_at: DateTime<Utc>,
}
