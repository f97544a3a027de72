//! Suggestion model.

use serde::{Deserialize, Serialize};

/// Suggestion identifier.
pub type SuggestionId = u32;

/// A free-text schedule adjustment hint.
///
/// `applied` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub text: String,
    pub applied: bool,
}

impl Suggestion {
    /// Creates an unapplied suggestion.
    pub fn new(id: SuggestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            applied: false,
        }
    }
}
