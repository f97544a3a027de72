//! Assignment engine: the drop state transition.
//!
//! # Algorithm
//!
//! 1. If the time label is the break slot, return [`Placement::Ignored`].
//! 2. Look up the lesson currently at (day, time).
//! 3. Validate the drop; on rejection return the reason unchanged.
//! 4. On pass, either overwrite the dropped field of the existing lesson
//!    or append a new lesson with the dropped field set and the other
//!    field empty.
//! 5. Return the new timetable as a full replacement.
//!
//! The input timetable is never mutated. Callers swap in the returned
//! timetable, so a rejected drop is observable only as the error value.

use log::{debug, info};

use crate::conflict::{ConflictValidator, DropRejection, Dropped, Verdict};
use crate::models::{Lesson, ScheduleShape, Slot, Timetable, Weekday};

/// Successful result of a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The drop was accepted. Holds the full replacement timetable.
    Assigned(Timetable),
    /// The drop targeted the break slot and was ignored.
    Ignored,
}

impl Placement {
    /// The replacement timetable, if the drop was accepted.
    pub fn into_timetable(self) -> Option<Timetable> {
        match self {
            Placement::Assigned(t) => Some(t),
            Placement::Ignored => None,
        }
    }
}

/// Computes timetable transitions for drops.
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    validator: ConflictValidator,
}

impl AssignmentEngine {
    /// Creates an engine for a schedule shape.
    pub fn new(shape: ScheduleShape) -> Self {
        Self {
            validator: ConflictValidator::new(shape),
        }
    }

    /// The schedule shape in use.
    pub fn shape(&self) -> &ScheduleShape {
        self.validator.shape()
    }

    /// Drops `entity` on (day, time).
    ///
    /// Returns the replacement timetable, [`Placement::Ignored`] for the
    /// break slot, or the rejection reason. `timetable` is left untouched
    /// in every case.
    pub fn drop(
        &self,
        timetable: &Timetable,
        entity: Dropped<'_>,
        day: Weekday,
        time: &str,
    ) -> Result<Placement, DropRejection> {
        let slot = Slot::new(day, time);
        let existing = timetable.lesson_at(day, time);

        match self.validator.validate(entity, &slot, existing, timetable)? {
            Verdict::Ignore => return Ok(Placement::Ignored),
            Verdict::Pass => {}
        }

        let next = if existing.is_some() {
            debug!("{} '{}' merged into {}", entity.kind(), entity.name(), slot);
            merge_into(timetable, &slot, entity)
        } else {
            info!("new lesson {} with {} '{}'", slot.lesson_id(), entity.kind(), entity.name());
            append_new(timetable, &slot, entity)
        };

        Ok(Placement::Assigned(next))
    }
}

/// Copy of `timetable` where only the lesson at `slot` has its field set.
fn merge_into(timetable: &Timetable, slot: &Slot, entity: Dropped<'_>) -> Timetable {
    timetable
        .iter()
        .map(|l| {
            if l.is_at(slot.day, &slot.time) {
                set_field(l.clone(), entity)
            } else {
                l.clone()
            }
        })
        .collect::<Vec<_>>()
        .into()
}

/// Copy of `timetable` with a new lesson appended at `slot`.
fn append_new(timetable: &Timetable, slot: &Slot, entity: Dropped<'_>) -> Timetable {
    let mut lessons = Vec::with_capacity(timetable.len() + 1);
    lessons.extend(timetable.iter().cloned());
    lessons.push(set_field(Lesson::at(slot), entity));
    lessons.into()
}

fn set_field(lesson: Lesson, entity: Dropped<'_>) -> Lesson {
    match entity {
        Dropped::Professor(p) => lesson.with_professor(p.name.clone()),
        Dropped::Room(r) => lesson.with_room(r.name.clone()),
    }
}
