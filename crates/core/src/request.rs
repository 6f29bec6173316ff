//! One inference request, as seen by the router.

use crate::task::Task;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single inference to be routed.
///
/// The prompt may be empty (some callers route before assembling the final
/// prompt text) and the context bag is opaque key-value data the router
/// never inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Free-text prompt; may be empty.
    #[serde(default)]
    pub prompt: String,

    /// Opaque caller context, passed through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,

    /// The recognized task classification, or `None` when the caller's
    /// task label was outside the recognized set. `None` means no
    /// technique auto-activates for this request.
    #[serde(default)]
    pub task: Option<Task>,

    /// The caller's current subscription tier.
    pub tier: Tier,
}

impl InferenceRequest {
    /// Build a request with a recognized task.
    pub fn new(prompt: impl Into<String>, task: Task, tier: Tier) -> Self {
        Self {
            prompt: prompt.into(),
            context: Map::new(),
            task: Some(task),
            tier,
        }
    }

    /// Build a request from a free-form task label.
    ///
    /// Unknown labels leave `task` as `None`, which the selector treats as
    /// "no technique applies" rather than an error.
    pub fn with_task_label(prompt: impl Into<String>, label: &str, tier: Tier) -> Self {
        Self {
            prompt: prompt.into(),
            context: Map::new(),
            task: Task::parse(label),
            tier,
        }
    }

    /// Attach a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}
