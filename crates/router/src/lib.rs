//! Tier-gated technique routing for promptgate.
//!
//! Given one inference request and an account's technique configuration,
//! the router decides which prompting/decoding augmentations apply and
//! rewrites the prompt accordingly:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌────────────────┐
//! │ Inference     │───▶│ select_techniques  │───▶│ augment_prompt  │
//! │ Request       │    │ (tier + task gate) │    │ (instruction    │
//! └──────────────┘    └───────────────────┘    │  blocks)        │
//!                             │                 └────────────────┘
//!                      TechniqueDecision
//! ```
//!
//! Both functions are pure: no shared state, no I/O, never an error.
//! Configuration is threaded explicitly through every call — there is no
//! module-level setter to race against.

mod augment;
mod selector;

pub use augment::augment_prompt;
pub use selector::{select_techniques, TechniqueRouter};
