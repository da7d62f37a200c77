use serde::{Deserialize, Serialize};

use crate::interpret::DisplayModel;

/// Where the interaction currently stands. Exactly one variant is active;
/// the embedded `url` always equals the most recently submitted one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum InteractionState {
    Idle,
    Loading { url: String },
    Results { url: String, model: DisplayModel },
    Error { url: String, message: String },
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState::Idle
    }
}

impl InteractionState {
    /// A request is in flight; the rendering layer disables submission
    /// while this holds.
    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Loading { url }
            | InteractionState::Results { url, .. }
            | InteractionState::Error { url, .. } => Some(url),
        }
    }
}
