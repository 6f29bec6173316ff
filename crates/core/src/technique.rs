//! The four prompting/decoding augmentation techniques.

use serde::{Deserialize, Serialize};

/// A prompting or decoding augmentation that can be layered onto an
/// inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Transport/decoding-level speedup; has no prompt-text effect.
    SpeculativeDecoding,
    /// Best-of-N sampling with majority agreement.
    SelfConsistency,
    /// Outline-then-expand prompting.
    SkeletonOfThought,
    /// Post-hoc self-check prompting.
    ChainOfVerification,
}

impl Technique {
    /// All techniques, in the order they are reported and logged.
    pub const ALL: [Technique; 4] = [
        Technique::SpeculativeDecoding,
        Technique::SelfConsistency,
        Technique::SkeletonOfThought,
        Technique::ChainOfVerification,
    ];

    /// Human-readable label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            Technique::SpeculativeDecoding => "speculative decoding",
            Technique::SelfConsistency => "self-consistency",
            Technique::SkeletonOfThought => "skeleton-of-thought",
            Technique::ChainOfVerification => "chain-of-verification",
        }
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<&str> = Technique::ALL.iter().map(|t| t.label()).collect();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Technique::ChainOfVerification).unwrap(),
            r#""chain_of_verification""#
        );
        let t: Technique = serde_json::from_str(r#""speculative_decoding""#).unwrap();
        assert_eq!(t, Technique::SpeculativeDecoding);
    }
}
