//! Professor model.
//!
//! A professor is the human resource dropped onto grid slots. Availability
//! is a set of tokens, one per free (day, time) pair, in the format
//! `"{3-letter-day}-{time-label}"`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Professor identifier.
pub type ProfessorId = u32;

/// A professor that can be assigned to slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Unique identifier, assigned by the store.
    pub id: ProfessorId,
    /// Display name. Lessons reference professors by this name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Availability tokens (e.g., "mon-19h00").
    pub availability: BTreeSet<String>,
}

/// Field tuple for a professor that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfessor {
    pub name: String,
    pub email: String,
    pub availability: BTreeSet<String>,
}

impl NewProfessor {
    /// Creates a professor record with empty availability.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            availability: BTreeSet::new(),
        }
    }

    /// Adds an availability token. Duplicates collapse.
    pub fn with_availability(mut self, token: impl Into<String>) -> Self {
        self.availability.insert(token.into());
        self
    }

    /// Adds several availability tokens.
    pub fn with_availabilities<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Attaches an identity.
    pub fn into_professor(self, id: ProfessorId) -> Professor {
        Professor {
            id,
            name: self.name,
            email: self.email,
            availability: self.availability,
        }
    }
}

impl Professor {
    /// Whether the professor holds a given availability token.
    pub fn has_token(&self, token: &str) -> bool {
        self.availability.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_builder() {
        let p = NewProfessor::new("Ana Souza", "ana@uel.br")
            .with_availability("mon-19h00")
            .with_availabilities(["wed-20h45", "fri-19h00"])
            .into_professor(7);

        assert_eq!(p.id, 7);
        assert_eq!(p.name, "Ana Souza");
        assert_eq!(p.email, "ana@uel.br");
        assert_eq!(p.availability.len(), 3);
        assert!(p.has_token("wed-20h45"));
        assert!(!p.has_token("Wed-20h45"));
    }

    #[test]
    fn test_availability_tokens_unique() {
        let p = NewProfessor::new("Carlos Lima", "carlos@uel.br")
            .with_availability("tue-19h00")
            .with_availability("tue-19h00")
            .into_professor(1);
        assert_eq!(p.availability.len(), 1);
    }
}
