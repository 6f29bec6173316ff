//! Technique selection — the decision table.
//!
//! A technique applies to a request only when three gates all pass:
//!
//! 1. the technique's global `enabled` switch in the config,
//! 2. the tier-access matrix grants the technique to the request's tier,
//! 3. the config's auto-activation flag for the request's task.
//!
//! Chain-of-verification replaces gate 3 with a task-independent rule: it
//! blankets every paid-tier output when `auto_verify_all_paid_outputs` is
//! set.

use promptgate_config::TechniqueConfig;
use promptgate_core::{
    InferenceRequest, Technique, TechniqueDecision, DEFAULT_NUM_SAMPLES,
};
use tracing::debug;

/// Decide which techniques apply to `request` under `config`.
///
/// Pure and infallible: a missing config or an unrecognized task degrades
/// to the conservative all-off outcome instead of erroring. Identical
/// inputs always produce identical decisions.
pub fn select_techniques(
    request: &InferenceRequest,
    config: Option<&TechniqueConfig>,
) -> TechniqueDecision {
    let Some(config) = config else {
        // Cold start: account has never configured techniques.
        return TechniqueDecision::none();
    };

    let tier = request.tier;

    // Reported unconditionally, active or not; callers read it either way.
    let num_samples = config
        .self_consistency
        .num_samples
        .unwrap_or(DEFAULT_NUM_SAMPLES);

    let decision = match request.task {
        None => {
            // Unrecognized task label: nothing auto-activates, silently.
            TechniqueDecision {
                use_speculative_decoding: false,
                use_self_consistency: false,
                use_skeleton_of_thought: false,
                use_chain_of_verification: false,
                num_samples,
            }
        }
        Some(task) => TechniqueDecision {
            use_speculative_decoding: config.speculative_decoding.enabled
                && tier.allows(Technique::SpeculativeDecoding)
                && config.speculative_decoding.auto_activates_for(task),

            use_self_consistency: config.self_consistency.enabled
                && tier.allows(Technique::SelfConsistency)
                && config.self_consistency.auto_activates_for(task),

            use_skeleton_of_thought: config.skeleton_of_thought.enabled
                && tier.allows(Technique::SkeletonOfThought)
                && config.skeleton_of_thought.auto_activates_for(task),

            // Task-independent: verification blankets all paid outputs.
            use_chain_of_verification: config.chain_of_verification.enabled
                && tier.allows(Technique::ChainOfVerification)
                && config.chain_of_verification.auto_verify_all_paid_outputs
                && tier.is_paid(),

            num_samples,
        },
    };

    debug!(
        tier = %tier,
        task = request.task.map(|t| t.as_str()).unwrap_or("unrecognized"),
        speculative = decision.use_speculative_decoding,
        self_consistency = decision.use_self_consistency,
        skeleton = decision.use_skeleton_of_thought,
        verification = decision.use_chain_of_verification,
        num_samples = decision.num_samples,
        "technique decision"
    );

    decision
}

/// Bundles an immutable [`TechniqueConfig`] with the routing functions.
///
/// Call sites that route many requests under one account config hold a
/// `TechniqueRouter` instead of threading the config through every call.
/// The config is fixed at construction; rebuilding the router is the only
/// way to change it, so decisions can never observe a half-updated config.
pub struct TechniqueRouter {
    config: TechniqueConfig,
}

impl TechniqueRouter {
    /// Create a router over a fixed config.
    pub fn new(config: TechniqueConfig) -> Self {
        Self { config }
    }

    /// Decide which techniques apply to `request`.
    pub fn decide(&self, request: &InferenceRequest) -> TechniqueDecision {
        select_techniques(request, Some(&self.config))
    }

    /// Augment `base` according to a prior decision.
    pub fn augment(&self, base: &str, decision: &TechniqueDecision) -> String {
        crate::augment_prompt(base, decision)
    }

    /// The config this router was built with.
    pub fn config(&self) -> &TechniqueConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgate_config::{
        ChainOfVerificationConfig, SelfConsistencyConfig, SkeletonOfThoughtConfig,
        SpeculativeDecodingConfig,
    };
    use promptgate_core::{Task, Tier};

    /// Everything enabled, every auto flag on, samples = 3.
    fn full_config() -> TechniqueConfig {
        TechniqueConfig {
            speculative_decoding: SpeculativeDecodingConfig {
                enabled: true,
                auto_campaign_generation: true,
                auto_website_generation: true,
                auto_deep_analysis: true,
            },
            self_consistency: SelfConsistencyConfig {
                enabled: true,
                num_samples: Some(3),
                auto_consistency_score: true,
                auto_dna_extraction: true,
                auto_closer_reply: true,
            },
            skeleton_of_thought: SkeletonOfThoughtConfig {
                enabled: true,
                live_ui_enabled: false,
                auto_battle_mode: true,
                auto_campaign_planning: true,
                auto_deep_analysis: true,
            },
            chain_of_verification: ChainOfVerificationConfig {
                enabled: true,
                auto_verify_all_paid_outputs: true,
                check_cross_references: true,
                flag_inconsistencies: true,
                reverify_math_logic: true,
            },
        }
    }

    #[test]
    fn missing_config_returns_cold_start_defaults() {
        let req = InferenceRequest::new("p", Task::CampaignGen, Tier::Hunter);
        let decision = select_techniques(&req, None);
        assert_eq!(decision, TechniqueDecision::none());
        assert_eq!(decision.num_samples, 1);
    }

    #[test]
    fn unrecognized_task_disables_everything_regardless_of_config() {
        let config = full_config();
        let req = InferenceRequest::with_task_label("p", "video_gen", Tier::Hunter);
        assert_eq!(req.task, None);

        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_speculative_decoding);
        assert!(!decision.use_self_consistency);
        assert!(!decision.use_skeleton_of_thought);
        assert!(!decision.use_chain_of_verification);
        // Sample count is still the configured one.
        assert_eq!(decision.num_samples, 3);
    }

    #[test]
    fn identical_inputs_yield_identical_decisions() {
        let config = full_config();
        let req = InferenceRequest::new("p", Task::DeepAnalysis, Tier::Pro);
        let first = select_techniques(&req, Some(&config));
        let second = select_techniques(&req, Some(&config));
        assert_eq!(first, second);
    }

    #[test]
    fn num_samples_reported_when_self_consistency_active() {
        let mut config = full_config();
        config.self_consistency.num_samples = Some(5);
        let req = InferenceRequest::new("p", Task::DnaExtraction, Tier::Core);
        let decision = select_techniques(&req, Some(&config));
        assert!(decision.use_self_consistency);
        assert_eq!(decision.num_samples, 5);
    }

    #[test]
    fn num_samples_reported_when_self_consistency_inactive() {
        let mut config = full_config();
        config.self_consistency.num_samples = Some(5);
        // CampaignGen is outside self-consistency's task set.
        let req = InferenceRequest::new("p", Task::CampaignGen, Tier::Pro);
        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_self_consistency);
        assert_eq!(decision.num_samples, 5);
    }

    #[test]
    fn num_samples_defaults_to_three_when_unset() {
        let mut config = full_config();
        config.self_consistency.num_samples = None;
        let req = InferenceRequest::new("p", Task::General, Tier::Free);
        let decision = select_techniques(&req, Some(&config));
        assert_eq!(decision.num_samples, 3);
    }

    #[test]
    fn verification_is_task_independent_on_paid_tiers() {
        let config = full_config();
        // General is in no technique's task set, yet verification fires.
        let req = InferenceRequest::new("p", Task::General, Tier::Pro);
        let decision = select_techniques(&req, Some(&config));
        assert!(decision.use_chain_of_verification);
        assert!(!decision.use_speculative_decoding);
        assert!(!decision.use_self_consistency);
        assert!(!decision.use_skeleton_of_thought);
    }

    #[test]
    fn verification_never_fires_on_free_tier() {
        let config = full_config();
        let req = InferenceRequest::new("p", Task::General, Tier::Free);
        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_chain_of_verification);
    }

    #[test]
    fn verification_requires_auto_verify_flag() {
        let mut config = full_config();
        config.chain_of_verification.auto_verify_all_paid_outputs = false;
        let req = InferenceRequest::new("p", Task::General, Tier::Hunter);
        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_chain_of_verification);
    }

    #[test]
    fn core_tier_consistency_scoring_scenario() {
        let config = full_config();
        let req = InferenceRequest::new("score this", Task::ConsistencyScore, Tier::Core);
        let decision = select_techniques(&req, Some(&config));

        // Core grants only self-consistency; the other three are tier-blocked.
        assert!(decision.use_self_consistency);
        assert!(!decision.use_speculative_decoding);
        assert!(!decision.use_skeleton_of_thought);
        assert!(!decision.use_chain_of_verification);
        assert_eq!(decision.num_samples, 3);
    }

    #[test]
    fn pro_tier_campaign_scenario() {
        let config = full_config();
        let req = InferenceRequest::new("plan a launch", Task::CampaignGen, Tier::Pro);
        let decision = select_techniques(&req, Some(&config));

        assert!(decision.use_speculative_decoding);
        assert!(decision.use_skeleton_of_thought);
        // CampaignGen is not in self-consistency's task set.
        assert!(!decision.use_self_consistency);
        // Paid tier + auto_verify_all_paid_outputs.
        assert!(decision.use_chain_of_verification);
    }

    #[test]
    fn disabled_switch_blocks_despite_tier_and_task() {
        let mut config = full_config();
        config.skeleton_of_thought.enabled = false;
        let req = InferenceRequest::new("p", Task::BattleMode, Tier::Hunter);
        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_skeleton_of_thought);
    }

    #[test]
    fn auto_flag_off_blocks_despite_tier_and_enabled() {
        let mut config = full_config();
        config.speculative_decoding.auto_website_generation = false;
        let req = InferenceRequest::new("p", Task::WebsiteGen, Tier::Hunter);
        let decision = select_techniques(&req, Some(&config));
        assert!(!decision.use_speculative_decoding);
        // The sibling flags are untouched.
        let req = InferenceRequest::new("p", Task::CampaignGen, Tier::Hunter);
        assert!(select_techniques(&req, Some(&config)).use_speculative_decoding);
    }

    #[test]
    fn free_tier_gets_nothing_even_fully_configured() {
        let config = full_config();
        for task in [
            Task::CampaignGen,
            Task::WebsiteGen,
            Task::DeepAnalysis,
            Task::BattleMode,
            Task::DnaExtraction,
            Task::ConsistencyScore,
            Task::CloserReply,
            Task::General,
        ] {
            let req = InferenceRequest::new("p", task, Tier::Free);
            let decision = select_techniques(&req, Some(&config));
            assert!(!decision.any_active(), "free tier leaked on {task}");
        }
    }

    #[test]
    fn router_decides_like_the_free_function() {
        let config = full_config();
        let router = TechniqueRouter::new(config.clone());
        let req = InferenceRequest::new("p", Task::BattleMode, Tier::Hunter);

        assert_eq!(router.decide(&req), select_techniques(&req, Some(&config)));
        assert_eq!(router.config(), &config);
    }
}
