//! Technique configuration for promptgate.
//!
//! A [`TechniqueConfig`] is account-level configuration: one record per
//! augmentation technique, each with a global `enabled` switch and
//! per-task auto-activation flags. It is supplied wholesale on every
//! routing decision and treated as immutable input — there is no global
//! setter and no shared mutable state anywhere in the router.
//!
//! Configs load from TOML with every field defaulted, so a partial file
//! (or no file at all) degrades to the all-off cold-start config:
//!
//! ```toml
//! [self_consistency]
//! enabled = true
//! num_samples = 3
//! auto_consistency_score = true
//!
//! [chain_of_verification]
//! enabled = true
//! auto_verify_all_paid_outputs = true
//! ```

use promptgate_core::Task;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Errors from the configuration subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("self_consistency.num_samples must be between 1 and 5, got {0}")]
    InvalidSamples(u32),
}

/// Account-level technique configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueConfig {
    #[serde(default)]
    pub speculative_decoding: SpeculativeDecodingConfig,

    #[serde(default)]
    pub self_consistency: SelfConsistencyConfig,

    #[serde(default)]
    pub skeleton_of_thought: SkeletonOfThoughtConfig,

    #[serde(default)]
    pub chain_of_verification: ChainOfVerificationConfig,
}

impl TechniqueConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TechniqueConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        debug!(path = %path.display(), "technique config loaded");
        Ok(config)
    }

    /// Validate load-time constraints.
    ///
    /// Only the sample-count range is checked here; the selector itself
    /// never enforces it, so programmatically built configs behave as
    /// supplied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(n) = self.self_consistency.num_samples {
            if !(1..=5).contains(&n) {
                return Err(ConfigError::InvalidSamples(n));
            }
        }
        Ok(())
    }
}

/// Speculative decoding — a transport/decoding-level speedup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeculativeDecodingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub auto_campaign_generation: bool,

    #[serde(default)]
    pub auto_website_generation: bool,

    #[serde(default)]
    pub auto_deep_analysis: bool,
}

impl SpeculativeDecodingConfig {
    /// Does this config auto-activate speculative decoding for `task`?
    pub fn auto_activates_for(&self, task: Task) -> bool {
        match task {
            Task::CampaignGen => self.auto_campaign_generation,
            Task::WebsiteGen => self.auto_website_generation,
            Task::DeepAnalysis => self.auto_deep_analysis,
            _ => false,
        }
    }
}

/// Self-consistency — best-of-N sampling with majority agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfConsistencyConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Candidate count, intended range 1–5. Absent means "use the
    /// default of 3".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<u32>,

    #[serde(default)]
    pub auto_consistency_score: bool,

    #[serde(default)]
    pub auto_dna_extraction: bool,

    #[serde(default)]
    pub auto_closer_reply: bool,
}

impl SelfConsistencyConfig {
    /// Does this config auto-activate self-consistency for `task`?
    pub fn auto_activates_for(&self, task: Task) -> bool {
        match task {
            Task::ConsistencyScore => self.auto_consistency_score,
            Task::DnaExtraction => self.auto_dna_extraction,
            Task::CloserReply => self.auto_closer_reply,
            _ => false,
        }
    }
}

/// Skeleton-of-thought — outline-then-expand prompting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletonOfThoughtConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Display-only flag: show the skeleton live in the UI while it fills
    /// in. Never consulted by routing.
    #[serde(default)]
    pub live_ui_enabled: bool,

    #[serde(default)]
    pub auto_battle_mode: bool,

    /// Campaign planning shares the campaign-generation task.
    #[serde(default)]
    pub auto_campaign_planning: bool,

    #[serde(default)]
    pub auto_deep_analysis: bool,
}

impl SkeletonOfThoughtConfig {
    /// Does this config auto-activate skeleton-of-thought for `task`?
    pub fn auto_activates_for(&self, task: Task) -> bool {
        match task {
            Task::BattleMode => self.auto_battle_mode,
            Task::CampaignGen => self.auto_campaign_planning,
            Task::DeepAnalysis => self.auto_deep_analysis,
            _ => false,
        }
    }
}

/// Chain-of-verification — post-hoc self-check prompting.
///
/// Unlike the other three techniques this one is task-independent: it
/// blankets every paid-tier output when `auto_verify_all_paid_outputs`
/// is set. The three refinement flags describe how thorough the
/// verification pass should be; they are carried configuration surface
/// and do not affect whether the technique activates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOfVerificationConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub auto_verify_all_paid_outputs: bool,

    #[serde(default)]
    pub check_cross_references: bool,

    #[serde(default)]
    pub flag_inconsistencies: bool,

    #[serde(default)]
    pub reverify_math_logic: bool,
}
