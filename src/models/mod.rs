//! Timetable domain models.
//!
//! Provides the data types the assignment engine works on: the entities
//! dragged onto the grid (professors, rooms), the grid cells they produce
//! (lessons), and the grid coordinates themselves (slots).
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Professor | Human resource |
//! | Room | Primary resource |
//! | Lesson | Assignment |
//! | Timetable | Schedule |
//! | Slot | Time window |

mod lesson;
mod professor;
mod room;
mod slot;
mod suggestion;

pub use lesson::{Lesson, Timetable};
pub use professor::{NewProfessor, Professor, ProfessorId};
pub use room::{NewRoom, Room, RoomId, RoomType};
pub use slot::{day_abbrev, ScheduleShape, Slot, Weekday, BREAK_TIME, DEFAULT_TIMES};
pub use suggestion::{Suggestion, SuggestionId};
