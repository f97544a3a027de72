//! Integrity checks for a timetable store.
//!
//! The store itself never validates. This module checks a whole store
//! (typically a seed or a deserialized session) for structural problems:
//! - Duplicate professor or room IDs
//! - Malformed availability tokens
//! - Zero room capacity
//! - Fully empty lessons
//! - Lessons whose id does not match their slot
//! - More than one lesson for a slot

use crate::availability::AvailabilityToken;
use crate::store::TimetableStore;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An availability token is not `{day}-{time}`.
    MalformedToken,
    /// A room has zero capacity.
    InvalidCapacity,
    /// A lesson has neither professor nor room.
    EmptyLesson,
    /// A lesson id is not derived from its slot.
    LessonIdMismatch,
    /// Two lessons occupy the same slot.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a store.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_store(store: &TimetableStore) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in store.professors() {
        if !professor_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id),
            ));
        }
        for token in &p.availability {
            if !AvailabilityToken::is_valid(token) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedToken,
                    format!("Professor '{}' has malformed availability '{token}'", p.name),
                ));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for r in store.rooms() {
        if !room_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Room '{}' has zero capacity", r.name),
            ));
        }
    }

    let mut slots = HashSet::new();
    for lesson in store.timetable().iter() {
        let slot = lesson.slot();
        if lesson.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLesson,
                format!("Lesson at {slot} has neither professor nor room"),
            ));
        }
        if lesson.id != slot.lesson_id() {
            errors.push(ValidationError::new(
                ValidationErrorKind::LessonIdMismatch,
                format!("Lesson id '{}' does not match slot {slot}", lesson.id),
            ));
        }
        if !slots.insert(slot.clone()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("More than one lesson at {slot}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lesson, NewProfessor, NewRoom, Slot, Timetable, Weekday};

    fn store_with(lessons: Vec<Lesson>) -> TimetableStore {
        TimetableStore::from_parts(
            vec![NewProfessor::new("Ana Souza", "ana@uel.br")
                .with_availability("mon-19h00")
                .into_professor(1)],
            vec![NewRoom::laboratory("Lab 1", 20).into_room(1)],
            Timetable::from(lessons),
            vec![],
        )
    }

    fn mon_19() -> Slot {
        Slot::new(Weekday::Monday, "19h00")
    }

    #[test]
    fn test_valid_store() {
        let store = store_with(vec![Lesson::at(&mon_19()).with_professor("Ana Souza")]);
        assert!(validate_store(&store).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let store = TimetableStore::from_parts(
            vec![
                NewProfessor::new("A", "a@uel.br").into_professor(1),
                NewProfessor::new("B", "b@uel.br").into_professor(1),
            ],
            vec![
                NewRoom::standard("R1", 10).into_room(2),
                NewRoom::standard("R2", 10).into_room(2),
            ],
            Timetable::new(),
            vec![],
        );
        let errors = validate_store(&store).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
                .count(),
            2
        );
        assert!(errors.iter().any(|e| e.message.contains("room")));
    }

    #[test]
    fn test_malformed_token() {
        let store = TimetableStore::from_parts(
            vec![NewProfessor::new("A", "a@uel.br")
                .with_availability("Monday 19h00")
                .into_professor(1)],
            vec![],
            Timetable::new(),
            vec![],
        );
        let errors = validate_store(&store).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedToken));
    }

    #[test]
    fn test_zero_capacity() {
        let store = TimetableStore::from_parts(
            vec![],
            vec![NewRoom::standard("Closet", 0).into_room(1)],
            Timetable::new(),
            vec![],
        );
        let errors = validate_store(&store).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCapacity));
    }

    #[test]
    fn test_empty_lesson() {
        let store = store_with(vec![Lesson::at(&mon_19())]);
        let errors = validate_store(&store).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyLesson));
    }

    #[test]
    fn test_lesson_id_mismatch() {
        let mut lesson = Lesson::at(&mon_19()).with_room("Lab 1");
        lesson.id = "mon-19h00-1".into();
        let errors = validate_store(&store_with(vec![lesson])).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LessonIdMismatch));
    }

    #[test]
    fn test_duplicate_slot() {
        let store = store_with(vec![
            Lesson::at(&mon_19()).with_room("Lab 1"),
            Lesson::at(&mon_19()).with_professor("Ana Souza"),
        ]);
        let errors = validate_store(&store).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlot));
    }

    #[test]
    fn test_multiple_errors() {
        let store = store_with(vec![Lesson::at(&mon_19()), Lesson::at(&mon_19())]);
        let errors = validate_store(&store).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
