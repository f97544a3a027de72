//! In-memory entity store for one session.
//!
//! Holds professors, rooms, the timetable and suggestions. Professors and
//! rooms are append-only; the timetable and suggestions are replaced
//! wholesale. The store does not validate business rules: inputs are
//! validated by callers (see [`crate::forms`]) and the timetable comes
//! from the assignment engine.

use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{
    NewProfessor, NewRoom, Professor, ProfessorId, Room, RoomId, Suggestion, Timetable,
};

/// Session-scoped store of all timetable entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableStore {
    professors: Vec<Professor>,
    rooms: Vec<Room>,
    timetable: Timetable,
    suggestions: Vec<Suggestion>,
}

impl TimetableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing collections, as-is.
    pub fn from_parts(
        professors: Vec<Professor>,
        rooms: Vec<Room>,
        timetable: Timetable,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        Self {
            professors,
            rooms,
            timetable,
            suggestions,
        }
    }

    /// Adds a professor with the next unused id.
    pub fn add_professor(&mut self, data: NewProfessor) -> Professor {
        let id = next_id(self.professors.iter().map(|p| p.id));
        let professor = data.into_professor(id);
        info!("professor #{id} '{}' added", professor.name);
        self.professors.push(professor.clone());
        professor
    }

    /// Adds a room with the next unused id.
    pub fn add_room(&mut self, data: NewRoom) -> Room {
        let id = next_id(self.rooms.iter().map(|r| r.id));
        let room = data.into_room(id);
        info!("room #{id} '{}' added", room.name);
        self.rooms.push(room.clone());
        room
    }

    /// Replaces the timetable.
    pub fn set_lessons(&mut self, timetable: Timetable) {
        self.timetable = timetable;
    }

    /// Replaces the suggestions.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Finds a professor by id.
    pub fn professor(&self, id: ProfessorId) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// Max existing id + 1, or 1 when there are none.
///
/// Once `u32::MAX` is taken, falls back to the smallest unused id.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    let mut ids: Vec<u32> = ids.collect();
    match ids.iter().max() {
        None => 1,
        Some(&max) => max.checked_add(1).unwrap_or_else(|| {
            ids.sort_unstable();
            ids.dedup();
            smallest_unused(&ids)
        }),
    }
}

/// First id >= 1 missing from sorted, deduplicated `ids`.
fn smallest_unused(ids: &[u32]) -> u32 {
    let mut candidate = 1;
    for &id in ids {
        if id == candidate {
            candidate = candidate.saturating_add(1);
        } else if id > candidate {
            break;
        }
    }
    candidate
}
