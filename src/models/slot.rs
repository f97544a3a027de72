//! Weekdays, slots and the schedule shape.
//!
//! A slot is a (day, time) coordinate in the weekly grid. The composite
//! `(Weekday, time label)` is the key; the string lesson id
//! (`"mon-19h00"`) is derived from it and never parsed back.
//!
//! # Normalization
//! Day strings coming from a UI are normalized once, through
//! [`Weekday::parse`], into the enum. Everything past that boundary works
//! with `Weekday` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time label of the break slot.
pub const BREAK_TIME: &str = "20h30";

/// Default ordered time labels. The middle one is the break.
pub const DEFAULT_TIMES: [&str; 3] = ["19h00", BREAK_TIME, "20h45"];

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays, in grid order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Display name ("Monday").
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Lowercase three-letter abbreviation used in availability tokens.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "mon",
            Weekday::Tuesday => "tue",
            Weekday::Wednesday => "wed",
            Weekday::Thursday => "thu",
            Weekday::Friday => "fri",
        }
    }

    /// Parses a day string in any case, full or abbreviated.
    ///
    /// Only the first three characters are significant, so `"Monday"`,
    /// `"MON"` and `"mon"` all map to [`Weekday::Monday`].
    /// Returns `None` for anything that is not a teaching weekday.
    pub fn parse(day: &str) -> Option<Self> {
        let abbrev = day_abbrev(day);
        Self::ALL.into_iter().find(|d| d.abbrev() == abbrev)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase first three characters of a day string.
///
/// Works on characters, not bytes, so short or non-ASCII input never panics.
pub fn day_abbrev(day: &str) -> String {
    day.chars().take(3).collect::<String>().to_lowercase()
}

/// A (day, time) coordinate in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Weekday.
    pub day: Weekday,
    /// Time label (e.g., "19h00").
    pub time: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Weekday, time: impl Into<String>) -> Self {
        Self {
            day,
            time: time.into(),
        }
    }

    /// Derived lesson id: `"{abbrev}-{time}"`.
    pub fn lesson_id(&self) -> String {
        format!("{}-{}", self.day.abbrev(), self.time)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// The fixed shape of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleShape {
    /// Columns, in display order.
    pub days: Vec<Weekday>,
    /// Rows, in display order.
    pub times: Vec<String>,
    /// Time label that never accepts assignments.
    pub break_time: String,
}

impl Default for ScheduleShape {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.to_vec(),
            times: DEFAULT_TIMES.iter().map(|t| t.to_string()).collect(),
            break_time: BREAK_TIME.to_string(),
        }
    }
}

impl ScheduleShape {
    /// Whether a time label is the break slot.
    #[inline]
    pub fn is_break(&self, time: &str) -> bool {
        time == self.break_time
    }

    /// Whether a time label is one of the grid rows.
    pub fn has_time(&self, time: &str) -> bool {
        self.times.iter().any(|t| t == time)
    }

    /// Every slot of the grid, row by row.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.times
            .iter()
            .flat_map(move |t| self.days.iter().map(move |d| Slot::new(*d, t.clone())))
    }

    /// Number of assignable (non-break) slots.
    pub fn assignable_slot_count(&self) -> usize {
        self.slots().filter(|s| !self.is_break(&s.time)).count()
    }
}
