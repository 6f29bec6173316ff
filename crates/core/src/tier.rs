//! Subscription tiers and the tier-access matrix.
//!
//! The matrix is the product's capability table: it decides which
//! augmentation techniques a tier may use at all, before any per-task
//! configuration is consulted.

use crate::technique::Technique;
use serde::{Deserialize, Serialize};

/// A subscription tier.
///
/// Tiers are ordered by capability count (`Free` ⊆ `Core` ⊆ `Pro` ⊆
/// `Hunter`), though nothing enforces the ordering — each cell of the
/// access matrix is declared explicitly in [`Tier::allows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Core,
    Pro,
    Hunter,
}

impl Tier {
    /// The tier-access matrix: does this tier grant the given technique?
    ///
    /// | Tier   | speculative | self-consistency | skeleton | verification |
    /// |--------|-------------|------------------|----------|--------------|
    /// | free   | no          | no               | no       | no           |
    /// | core   | no          | yes              | no       | no           |
    /// | pro    | yes         | yes              | yes      | yes          |
    /// | hunter | yes         | yes              | yes      | yes          |
    pub fn allows(&self, technique: Technique) -> bool {
        match (self, technique) {
            (Tier::Free, _) => false,
            (Tier::Core, Technique::SelfConsistency) => true,
            (Tier::Core, _) => false,
            (Tier::Pro | Tier::Hunter, _) => true,
        }
    }

    /// Paid tiers are everything above `Free`.
    pub fn is_paid(&self) -> bool {
        !matches!(self, Tier::Free)
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Core => "core",
            Tier::Pro => "pro",
            Tier::Hunter => "hunter",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
