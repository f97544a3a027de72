//! Lesson (grid cell) model.
//!
//! A lesson records what occupies one slot: a professor, a room, or both.
//! The timetable holds at most one lesson per slot and never holds a
//! lesson with both fields empty.
//!
//! # Partial assignments
//! Professor and room are dropped separately, so a lesson can be
//! professor-only or room-only. An empty string means "unassigned".

use serde::{Deserialize, Serialize};

use super::{Slot, Weekday};

/// An assignment record occupying one slot.
///
/// Wire names map to the Portuguese form of the same record:
/// `room` = `sala`, `day` = `dia`, `time` = `hora`; `id` and `professor`
/// are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Derived id, `"{abbrev}-{time}"`. A cache of the slot, not a key.
    pub id: String,
    /// Professor name (empty = unassigned).
    pub professor: String,
    /// Room name (empty = unassigned).
    pub room: String,
    /// Weekday.
    pub day: Weekday,
    /// Time label.
    pub time: String,
}

impl Lesson {
    /// Creates an empty lesson at a slot. Callers fill at least one field.
    pub fn at(slot: &Slot) -> Self {
        Self {
            id: slot.lesson_id(),
            professor: String::new(),
            room: String::new(),
            day: slot.day,
            time: slot.time.clone(),
        }
    }

    /// Sets the professor name.
    pub fn with_professor(mut self, name: impl Into<String>) -> Self {
        self.professor = name.into();
        self
    }

    /// Sets the room name.
    pub fn with_room(mut self, name: impl Into<String>) -> Self {
        self.room = name.into();
        self
    }

    /// The slot this lesson occupies.
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.time.clone())
    }

    /// Whether the lesson sits at the given (day, time).
    #[inline]
    pub fn is_at(&self, day: Weekday, time: &str) -> bool {
        self.day == day && self.time == time
    }

    #[inline]
    pub fn has_professor(&self) -> bool {
        !self.professor.is_empty()
    }

    #[inline]
    pub fn has_room(&self) -> bool {
        !self.room.is_empty()
    }

    /// Both professor and room assigned.
    pub fn is_complete(&self) -> bool {
        self.has_professor() && self.has_room()
    }

    /// Neither professor nor room assigned. Never stored.
    pub fn is_empty(&self) -> bool {
        !self.has_professor() && !self.has_room()
    }
}

/// The lesson collection (grid state).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    /// Lessons in insertion order.
    pub lessons: Vec<Lesson>,
}

impl From<Vec<Lesson>> for Timetable {
    fn from(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lesson at (day, time), if any.
    pub fn lesson_at(&self, day: Weekday, time: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.is_at(day, time))
    }

    /// All lessons held in a room.
    pub fn lessons_for_room(&self, name: &str) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.room == name).collect()
    }

    /// Number of complete cells.
    pub fn complete_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_complete()).count()
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.lessons.iter()
    }
}
