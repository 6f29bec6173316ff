//! Prompt augmentation — instruction blocks for active techniques.
//!
//! Blocks are appended in a fixed order: skeleton-of-thought first (it
//! restructures the whole answer), then self-consistency, then
//! chain-of-verification (it post-processes whatever the earlier
//! instructions produced). Speculative decoding is a decoding-level
//! optimization and contributes no prompt text.

use promptgate_core::TechniqueDecision;

const SKELETON_BLOCK: &str = "\n\n---\nSTRUCTURE: First write a skeleton \
outline of your answer as 3-6 numbered points, a few words each. Then \
expand every point into a full section, keeping the original numbering \
and order.";

const VERIFICATION_BLOCK: &str = "\n\n---\nVERIFY: After drafting your \
answer, list the verification questions that would expose factual or \
logical errors in it, answer each question independently, then revise \
the draft to resolve every discrepancy before returning the final \
version. Return only the final version.";

fn self_consistency_block(num_samples: u32) -> String {
    format!(
        "\n\n---\nCONSISTENCY: Internally generate {num_samples} \
independent candidate answers to this request, reasoning through each \
from scratch. Compare the candidates and return only the answer the \
majority agrees on."
    )
}

/// Append the instruction blocks for every active technique to `base`.
///
/// Deterministic for a given decision; a decision with no active
/// techniques returns the base prompt unchanged.
pub fn augment_prompt(base: &str, decision: &TechniqueDecision) -> String {
    let mut prompt = String::from(base);
    if decision.use_skeleton_of_thought {
        prompt.push_str(SKELETON_BLOCK);
    }
    if decision.use_self_consistency {
        prompt.push_str(&self_consistency_block(decision.num_samples));
    }
    if decision.use_chain_of_verification {
        prompt.push_str(VERIFICATION_BLOCK);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(sot: bool, sc: bool, cov: bool, samples: u32) -> TechniqueDecision {
        TechniqueDecision {
            use_speculative_decoding: false,
            use_self_consistency: sc,
            use_skeleton_of_thought: sot,
            use_chain_of_verification: cov,
            num_samples: samples,
        }
    }

    #[test]
    fn no_active_techniques_leaves_prompt_unchanged() {
        let base = "Describe the brand voice.";
        assert_eq!(augment_prompt(base, &TechniqueDecision::none()), base);
    }

    #[test]
    fn speculative_decoding_adds_no_text() {
        let mut d = TechniqueDecision::none();
        d.use_speculative_decoding = true;
        assert_eq!(augment_prompt("base", &d), "base");
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let out = augment_prompt("base", &decision(true, true, true, 3));
        let skeleton = out.find("STRUCTURE:").unwrap();
        let consistency = out.find("CONSISTENCY:").unwrap();
        let verify = out.find("VERIFY:").unwrap();
        assert!(out.starts_with("base"));
        assert!(skeleton < consistency);
        assert!(consistency < verify);
    }

    #[test]
    fn sample_count_is_interpolated() {
        let out = augment_prompt("base", &decision(false, true, false, 5));
        assert!(out.contains("5 independent candidate answers"));
        assert!(!out.contains("STRUCTURE:"));
        assert!(!out.contains("VERIFY:"));
    }

    #[test]
    fn single_technique_appends_only_its_block() {
        let out = augment_prompt("base", &decision(false, false, true, 3));
        assert!(out.contains("VERIFY:"));
        assert!(!out.contains("CONSISTENCY:"));
        assert_eq!(out.matches("---").count(), 1);
    }

    #[test]
    fn augmentation_is_deterministic() {
        let d = decision(true, false, true, 3);
        assert_eq!(augment_prompt("base", &d), augment_prompt("base", &d));
    }
}
