//! Quick-add forms for professors and rooms.
//!
//! Forms carry raw user input. `validate` turns them into the field tuples
//! the store accepts, or a [`FormError`] the session reports as a warning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewProfessor, NewRoom, RoomType};
use crate::notify::OutcomeCode;

/// Form rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Fill in all required fields")]
    MissingRequiredFields,
    #[error("capacity '{0}' is not a positive number")]
    InvalidCapacity(String),
}

impl From<&FormError> for OutcomeCode {
    fn from(err: &FormError) -> Self {
        match err {
            FormError::MissingRequiredFields => OutcomeCode::MissingRequiredFields,
            FormError::InvalidCapacity(_) => OutcomeCode::InvalidCapacity,
        }
    }
}

/// Raw "add professor" input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessorForm {
    pub name: String,
    pub email: String,
}

impl ProfessorForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Validates the form. New professors get `default_availability`.
    pub fn validate(&self, default_availability: &[String]) -> Result<NewProfessor, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(FormError::MissingRequiredFields);
        }
        Ok(NewProfessor::new(name, email).with_availabilities(default_availability.iter().cloned()))
    }
}

/// Raw "add room" input. Capacity arrives as typed text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomForm {
    pub name: String,
    pub capacity: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl RoomForm {
    pub fn new(name: impl Into<String>, capacity: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            capacity: capacity.into(),
            room_type,
            equipment: Vec::new(),
        }
    }

    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Validates the form.
    pub fn validate(&self) -> Result<NewRoom, FormError> {
        let name = self.name.trim();
        let capacity = self.capacity.trim();
        if name.is_empty() || capacity.is_empty() {
            return Err(FormError::MissingRequiredFields);
        }
        let capacity = match capacity.parse::<u32>() {
            Ok(c) if c > 0 => c,
            _ => return Err(FormError::InvalidCapacity(capacity.to_string())),
        };
        let mut room = NewRoom::new(name, capacity, self.room_type);
        room.equipment = self.equipment.clone();
        Ok(room)
    }
}
