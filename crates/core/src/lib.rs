//! # Promptgate Core
//!
//! Domain types for the promptgate inference-technique router.
//! This crate has **zero framework dependencies** — it defines the domain
//! model that all other crates implement against.
//!
//! The model is deliberately small:
//! - [`Tier`] — subscription level, the access-control key for technique gating
//! - [`Technique`] — the four prompting/decoding augmentations
//! - [`Task`] — closed classification of what the caller is generating
//! - [`InferenceRequest`] — one inference to be routed
//! - [`TechniqueDecision`] — which techniques apply, and the sample count

pub mod decision;
pub mod request;
pub mod task;
pub mod technique;
pub mod tier;

// Re-export key types at crate root for ergonomics
pub use decision::{TechniqueDecision, DEFAULT_NUM_SAMPLES};
pub use request::InferenceRequest;
pub use task::Task;
pub use technique::Technique;
pub use tier::Tier;
