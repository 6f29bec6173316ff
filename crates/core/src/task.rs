//! Task classification — what the caller is generating.
//!
//! Tasks drive per-technique auto-activation. The set is closed; callers
//! with free-form task labels go through [`Task::parse`], which maps
//! unknown labels to `None` so that no technique auto-activates for them.

use serde::{Deserialize, Serialize};

/// The eight recognized task classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Marketing campaign generation.
    CampaignGen,
    /// Website copy generation.
    WebsiteGen,
    /// Deep (RLM) analysis runs.
    DeepAnalysis,
    /// Head-to-head brand battle mode.
    BattleMode,
    /// Brand DNA extraction from a site.
    DnaExtraction,
    /// Consistency scoring of existing assets.
    ConsistencyScore,
    /// Closer-agent reply drafting.
    CloserReply,
    /// Anything unclassified.
    General,
}

impl Task {
    /// Parse a caller-supplied task label.
    ///
    /// Returns `None` for labels outside the recognized set — the router
    /// treats those as "no technique auto-activates", not as an error.
    pub fn parse(label: &str) -> Option<Task> {
        match label {
            "campaign_gen" => Some(Task::CampaignGen),
            "website_gen" => Some(Task::WebsiteGen),
            // Older callers still send the rlm_ prefix.
            "deep_analysis" | "rlm_analysis" => Some(Task::DeepAnalysis),
            "battle_mode" => Some(Task::BattleMode),
            "dna_extraction" => Some(Task::DnaExtraction),
            "consistency_score" => Some(Task::ConsistencyScore),
            "closer_reply" => Some(Task::CloserReply),
            "general" => Some(Task::General),
            _ => None,
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::CampaignGen => "campaign_gen",
            Task::WebsiteGen => "website_gen",
            Task::DeepAnalysis => "deep_analysis",
            Task::BattleMode => "battle_mode",
            Task::DnaExtraction => "dna_extraction",
            Task::ConsistencyScore => "consistency_score",
            Task::CloserReply => "closer_reply",
            Task::General => "general",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
