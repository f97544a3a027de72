//! Weekly timetable assignment core for the U-Engine ecosystem.
//!
//! Professors and rooms are dropped onto a grid of (day, time) slots. The
//! engine checks availability and occupancy and computes the replacement
//! timetable; the session layer wraps it with drag state, hover
//! highlighting, quick-add forms and notifications.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Professor`, `Room`, `Lesson`,
//!   `Timetable`, `Suggestion`, `Slot`, `ScheduleShape`
//! - **`availability`**: Availability token resolution
//! - **`conflict`**: Drop validation and rejection reasons
//! - **`engine`**: The drop state transition
//! - **`store`**: Session-scoped entity store
//! - **`suggestions`**: Applied-flag tracking for suggestions
//! - **`session`**: Interaction controller (drag state machine)
//! - **`grid`**, **`notify`**, **`forms`**: UI-facing derived state
//! - **`config`**, **`seed`**, **`validation`**: Setup and integrity checks
//!
//! # Example
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//! use u_timetable::notify::OutcomeCode;
//! use u_timetable::session::Session;
//!
//! let mut session = Session::new(TimetableConfig::default());
//! session.begin_drag_professor(2); // Carlos Lima, free on Tuesday 19h00
//! assert_eq!(session.drop_on("Tuesday", "19h00"), OutcomeCode::ProfessorAssigned);
//! ```

pub mod availability;
pub mod config;
pub mod conflict;
pub mod engine;
pub mod forms;
pub mod grid;
pub mod models;
pub mod notify;
pub mod seed;
pub mod session;
pub mod store;
pub mod suggestions;
pub mod validation;
