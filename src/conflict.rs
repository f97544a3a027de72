//! Conflict validation for drops onto the grid.
//!
//! Decides whether dropping a professor or a room on a (day, time) cell is
//! legal given the current timetable, and classifies the failure if not.
//!
//! # Rules
//! - **Break slot**: every drop is ignored. No rejection, no mutation.
//! - **Professor**: rejected when the professor is not available at the
//!   slot, then when the cell already has any professor (the same
//!   professor included).
//! - **Room**: rejected when the same room is already booked at the same
//!   time label on a *different* day. Same-cell and same-day reuse pass.
//!
//! The room rule is narrower than the professor rule on purpose: it is the
//! observed booking policy and is kept exactly.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::is_available_at;
use crate::models::{Lesson, Professor, Room, ScheduleShape, Slot, Timetable};

/// Why a drop was refused.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DropRejection {
    /// Professor has no availability token for the slot.
    #[error("Professor unavailable at this time")]
    ProfessorUnavailable,
    /// The cell already holds a professor.
    #[error("A professor is already assigned to this slot")]
    SlotProfessorOccupied,
    /// The room is booked at the same time on another day.
    #[error("This room is already booked on another day at this time")]
    RoomDoubleBooked,
}

impl DropRejection {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            DropRejection::ProfessorUnavailable => "professor_unavailable",
            DropRejection::SlotProfessorOccupied => "slot_professor_occupied",
            DropRejection::RoomDoubleBooked => "room_double_booked",
        }
    }
}

/// An entity being dropped on the grid.
#[derive(Debug, Clone, Copy)]
pub enum Dropped<'a> {
    Professor(&'a Professor),
    Room(&'a Room),
}

impl Dropped<'_> {
    /// Name written into the lesson.
    pub fn name(&self) -> &str {
        match self {
            Dropped::Professor(p) => &p.name,
            Dropped::Room(r) => &r.name,
        }
    }

    /// Short kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Dropped::Professor(_) => "professor",
            Dropped::Room(_) => "room",
        }
    }
}

/// Result of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The drop is legal.
    Pass,
    /// The target is the break slot. Drop silently.
    Ignore,
}

/// Validates drops against the schedule shape and current timetable.
#[derive(Debug, Clone, Default)]
pub struct ConflictValidator {
    shape: ScheduleShape,
}

impl ConflictValidator {
    /// Creates a validator for a schedule shape.
    pub fn new(shape: ScheduleShape) -> Self {
        Self { shape }
    }

    /// The schedule shape in use.
    pub fn shape(&self) -> &ScheduleShape {
        &self.shape
    }

    /// Validates a drop of `entity` on `slot`.
    ///
    /// `existing` is the lesson currently at `slot`, if any.
    pub fn validate(
        &self,
        entity: Dropped<'_>,
        slot: &Slot,
        existing: Option<&Lesson>,
        timetable: &Timetable,
    ) -> Result<Verdict, DropRejection> {
        if self.shape.is_break(&slot.time) {
            debug!("{} drop on break slot {slot} ignored", entity.kind());
            return Ok(Verdict::Ignore);
        }

        let verdict = match entity {
            Dropped::Professor(p) => check_professor(p, slot, existing),
            Dropped::Room(r) => check_room(r, slot, timetable),
        };

        match verdict {
            Ok(()) => Ok(Verdict::Pass),
            Err(rejection) => {
                debug!(
                    "{} '{}' rejected at {slot}: {}",
                    entity.kind(),
                    entity.name(),
                    rejection.code()
                );
                Err(rejection)
            }
        }
    }
}

/// Professor rule: availability first, then occupancy.
pub fn check_professor(
    professor: &Professor,
    slot: &Slot,
    existing: Option<&Lesson>,
) -> Result<(), DropRejection> {
    if !is_available_at(professor, slot) {
        return Err(DropRejection::ProfessorUnavailable);
    }
    if existing.is_some_and(Lesson::has_professor) {
        return Err(DropRejection::SlotProfessorOccupied);
    }
    Ok(())
}

/// Room rule: no booking of the same room at the same time on another day.
pub fn check_room(room: &Room, slot: &Slot, timetable: &Timetable) -> Result<(), DropRejection> {
    let double_booked = timetable
        .lessons_for_room(&room.name)
        .iter()
        .any(|l| l.time == slot.time && l.day != slot.day);
    if double_booked {
        return Err(DropRejection::RoomDoubleBooked);
    }
    Ok(())
}
