//! Outcome codes and transient notifications.
//!
//! Every user gesture handled by the session yields a stable
//! [`OutcomeCode`]. The code maps to at most one [`Notification`]; the
//! no-op code maps to none. Display and timing belong to the UI layer;
//! [`NotificationQueue`] is the in-memory model it renders from.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::conflict::DropRejection;

/// How long a notification stays visible by default.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(2000);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Stable, enumerable result of a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCode {
    ProfessorAssigned,
    RoomAssigned,
    ProfessorUnavailable,
    SlotProfessorOccupied,
    RoomDoubleBooked,
    ProfessorAdded,
    RoomAdded,
    MissingRequiredFields,
    InvalidCapacity,
    SuggestionApplied,
    /// Nothing happened. Never notified.
    NoOp,
}

impl From<DropRejection> for OutcomeCode {
    fn from(rejection: DropRejection) -> Self {
        match rejection {
            DropRejection::ProfessorUnavailable => OutcomeCode::ProfessorUnavailable,
            DropRejection::SlotProfessorOccupied => OutcomeCode::SlotProfessorOccupied,
            DropRejection::RoomDoubleBooked => OutcomeCode::RoomDoubleBooked,
        }
    }
}

impl OutcomeCode {
    /// Severity and message, or `None` for [`OutcomeCode::NoOp`].
    pub fn notice(self) -> Option<(Severity, &'static str)> {
        use OutcomeCode::*;
        let notice = match self {
            ProfessorAssigned => (Severity::Success, "Professor assigned successfully"),
            RoomAssigned => (Severity::Success, "Room assigned successfully"),
            ProfessorUnavailable => (Severity::Error, "Professor unavailable at this time"),
            SlotProfessorOccupied => (
                Severity::Error,
                "A professor is already assigned to this slot",
            ),
            RoomDoubleBooked => (
                Severity::Error,
                "This room is already booked on another day at this time",
            ),
            ProfessorAdded => (Severity::Success, "Professor added successfully"),
            RoomAdded => (Severity::Success, "Room added successfully"),
            MissingRequiredFields => (Severity::Warning, "Fill in all required fields"),
            InvalidCapacity => (Severity::Warning, "Capacity must be a positive number"),
            SuggestionApplied => (Severity::Success, "Suggestion applied"),
            NoOp => return None,
        };
        Some(notice)
    }

    /// Whether the gesture changed session state.
    pub fn is_success(self) -> bool {
        matches!(self.notice(), Some((Severity::Success, _)))
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub code: OutcomeCode,
}

/// Visible notifications, oldest first.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    ttl: Duration,
    next_id: u64,
    entries: Vec<(Notification, Instant)>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationQueue {
    /// Creates an empty queue whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Pushes the notification for `code`, raised at `now`.
    ///
    /// Returns `None` (and pushes nothing) for [`OutcomeCode::NoOp`].
    pub fn push(&mut self, code: OutcomeCode, now: Instant) -> Option<&Notification> {
        let (severity, message) = code.notice()?;
        let notification = Notification {
            id: self.next_id,
            severity,
            message: message.to_string(),
            code,
        };
        self.next_id += 1;
        self.entries.push((notification, now));
        self.entries.last().map(|(n, _)| n)
    }

    /// Closes a notification early.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(n, _)| n.id != id);
    }

    /// Drops notifications that have been visible for `ttl` or longer.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|(_, raised)| now.saturating_duration_since(*raised) < ttl);
    }

    /// Currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display duration.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
