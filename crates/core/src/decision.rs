//! The outcome of routing one inference request.

use crate::technique::Technique;
use serde::{Deserialize, Serialize};

/// Sample count used when self-consistency is configured without one.
pub const DEFAULT_NUM_SAMPLES: u32 = 3;

/// Which techniques apply to a single inference, plus the sample count.
///
/// A decision is a pure function of the request and the technique config —
/// it carries no identity and is recomputed on every call, never cached.
///
/// `num_samples` always reflects the configured self-consistency sample
/// count (default 3) even when `use_self_consistency` is `false`;
/// downstream callers rely on the number being present unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueDecision {
    pub use_speculative_decoding: bool,
    pub use_self_consistency: bool,
    pub use_skeleton_of_thought: bool,
    pub use_chain_of_verification: bool,
    pub num_samples: u32,
}

impl TechniqueDecision {
    /// The cold-start decision: no techniques, minimal sample count.
    ///
    /// Returned when no [`TechniqueConfig`] has been supplied at all.
    ///
    /// [`TechniqueConfig`]: https://docs.rs/promptgate-config
    pub fn none() -> Self {
        Self {
            use_speculative_decoding: false,
            use_self_consistency: false,
            use_skeleton_of_thought: false,
            use_chain_of_verification: false,
            num_samples: 1,
        }
    }

    /// Is the given technique active in this decision?
    pub fn uses(&self, technique: Technique) -> bool {
        match technique {
            Technique::SpeculativeDecoding => self.use_speculative_decoding,
            Technique::SelfConsistency => self.use_self_consistency,
            Technique::SkeletonOfThought => self.use_skeleton_of_thought,
            Technique::ChainOfVerification => self.use_chain_of_verification,
        }
    }

    /// Active techniques, in canonical order.
    pub fn active_techniques(&self) -> Vec<Technique> {
        Technique::ALL.into_iter().filter(|t| self.uses(*t)).collect()
    }

    /// At least one technique is active.
    pub fn any_active(&self) -> bool {
        Technique::ALL.iter().any(|t| self.uses(*t))
    }
}
