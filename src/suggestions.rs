//! Suggestion tracking.
//!
//! Suggestions are externally supplied text. The tracker only flips their
//! `applied` flag, following the same replace-the-collection pattern as
//! the assignment engine.

use crate::models::{Suggestion, SuggestionId};

/// Marks suggestions as applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionTracker;

impl SuggestionTracker {
    /// Returns a copy of `suggestions` with `id` marked applied.
    ///
    /// Idempotent. An unknown id yields an unchanged copy.
    pub fn apply(&self, suggestions: &[Suggestion], id: SuggestionId) -> Vec<Suggestion> {
        suggestions
            .iter()
            .map(|s| {
                if s.id == id {
                    Suggestion {
                        applied: true,
                        ..s.clone()
                    }
                } else {
                    s.clone()
                }
            })
            .collect()
    }

    /// Number of suggestions not yet applied.
    pub fn pending(&self, suggestions: &[Suggestion]) -> usize {
        suggestions.iter().filter(|s| !s.applied).count()
    }
}
