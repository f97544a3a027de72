//! Interaction controller for one user session.
//!
//! Owns the store, the engine and the UI-facing state the engine does not
//! care about: what is being dragged, which professor is hovered, and the
//! visible notifications.
//!
//! # Drag state machine
//!
//! ```text
//!            begin_drag_professor            drop_on / end_drag
//!   Idle ─────────────────────────▶ DraggingProfessor ───────────▶ Idle
//!   Idle ─────────────────────────▶ DraggingRoom      ───────────▶ Idle
//!            begin_drag_room
//! ```
//!
//! `drop_on` always returns to `Idle`, whatever the outcome. Starting a new
//! drag replaces the current one.

use log::{debug, info, warn};
use std::mem;
use std::time::Instant;

use crate::config::TimetableConfig;
use crate::conflict::Dropped;
use crate::engine::{AssignmentEngine, Placement};
use crate::forms::{FormError, ProfessorForm, RoomForm};
use crate::grid::GridView;
use crate::models::{Professor, ProfessorId, Room, RoomId, SuggestionId, Weekday};
use crate::notify::{NotificationQueue, OutcomeCode};
use crate::seed::demo_store;
use crate::store::TimetableStore;
use crate::suggestions::SuggestionTracker;
use crate::validation::validate_store;

/// What is currently being dragged.
///
/// Holds a snapshot of the entity taken at drag-start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingProfessor(Professor),
    DraggingRoom(Room),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// One user session.
#[derive(Debug)]
pub struct Session {
    config: TimetableConfig,
    store: TimetableStore,
    engine: AssignmentEngine,
    tracker: SuggestionTracker,
    drag: DragState,
    hovered: Option<ProfessorId>,
    notifications: NotificationQueue,
}

impl Session {
    /// Starts a session. Seeds the demo data if the config asks for it.
    pub fn new(config: TimetableConfig) -> Self {
        let store = if config.seed_demo_data {
            demo_store()
        } else {
            TimetableStore::new()
        };
        Self::with_store(config, store)
    }

    /// Starts a session over an existing store.
    ///
    /// Integrity problems are logged, not fatal.
    pub fn with_store(config: TimetableConfig, store: TimetableStore) -> Self {
        if let Err(errors) = validate_store(&store) {
            for e in &errors {
                warn!("store integrity: {}", e.message);
            }
        }
        Self {
            engine: AssignmentEngine::new(config.shape.clone()),
            notifications: NotificationQueue::new(config.notification_ttl()),
            tracker: SuggestionTracker,
            drag: DragState::Idle,
            hovered: None,
            store,
            config,
        }
    }

    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    pub fn store(&self) -> &TimetableStore {
        &self.store
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Starts dragging a professor. Unknown ids leave the state unchanged.
    pub fn begin_drag_professor(&mut self, id: ProfessorId) -> bool {
        match self.store.professor(id) {
            Some(p) => {
                debug!("drag start: professor '{}'", p.name);
                self.drag = DragState::DraggingProfessor(p.clone());
                true
            }
            None => {
                warn!("drag start: unknown professor #{id}");
                false
            }
        }
    }

    /// Starts dragging a room. Unknown ids leave the state unchanged.
    pub fn begin_drag_room(&mut self, id: RoomId) -> bool {
        match self.store.room(id) {
            Some(r) => {
                debug!("drag start: room '{}'", r.name);
                self.drag = DragState::DraggingRoom(r.clone());
                true
            }
            None => {
                warn!("drag start: unknown room #{id}");
                false
            }
        }
    }

    /// Abandons the current drag without dropping.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Drops the dragged entity on (day, time).
    ///
    /// The drag state is cleared whatever happens. No active drag and the
    /// break slot yield [`OutcomeCode::NoOp`]. A target outside the grid
    /// means the professor is not available there; a room dropped outside
    /// the grid is ignored.
    pub fn drop_on(&mut self, day: &str, time: &str) -> OutcomeCode {
        let dragged = mem::take(&mut self.drag);
        let code = self.resolve_drop(&dragged, day, time);
        self.notify(code);
        code
    }

    fn resolve_drop(&mut self, dragged: &DragState, day: &str, time: &str) -> OutcomeCode {
        let (entity, success, off_grid) = match dragged {
            DragState::Idle => return OutcomeCode::NoOp,
            DragState::DraggingProfessor(p) => (
                Dropped::Professor(p),
                OutcomeCode::ProfessorAssigned,
                OutcomeCode::ProfessorUnavailable,
            ),
            DragState::DraggingRoom(r) => {
                (Dropped::Room(r), OutcomeCode::RoomAssigned, OutcomeCode::NoOp)
            }
        };

        let Some(weekday) = Weekday::parse(day).filter(|d| self.engine.shape().days.contains(d)) else {
            warn!("drop of {} '{}' on unknown day '{day}'", entity.kind(), entity.name());
            return off_grid;
        };
        if !self.engine.shape().has_time(time) {
            warn!("drop of {} '{}' on unknown time '{time}'", entity.kind(), entity.name());
            return off_grid;
        }

        match self.engine.drop(self.store.timetable(), entity, weekday, time) {
            Ok(Placement::Assigned(next)) => {
                self.store.set_lessons(next);
                success
            }
            Ok(Placement::Ignored) => OutcomeCode::NoOp,
            Err(rejection) => rejection.into(),
        }
    }

    /// Number of suggestions not yet applied.
    pub fn pending_suggestions(&self) -> usize {
        self.tracker.pending(self.store.suggestions())
    }

    /// Sets or clears the hovered professor.
    pub fn hover_professor(&mut self, id: Option<ProfessorId>) {
        self.hovered = id;
    }

    /// The current grid, with highlights for the hovered professor.
    pub fn grid(&self) -> GridView {
        let hovered = self.hovered.and_then(|id| self.store.professor(id));
        GridView::build(self.engine.shape(), self.store.timetable(), hovered)
    }

    /// Adds a professor from the quick-add form.
    pub fn add_professor(&mut self, form: &ProfessorForm) -> Result<Professor, FormError> {
        let result = form
            .validate(&self.config.default_availability)
            .map(|data| self.store.add_professor(data));
        self.notify_form(&result, OutcomeCode::ProfessorAdded);
        result
    }

    /// Adds a room from the quick-add form.
    pub fn add_room(&mut self, form: &RoomForm) -> Result<Room, FormError> {
        let result = form.validate().map(|data| self.store.add_room(data));
        self.notify_form(&result, OutcomeCode::RoomAdded);
        result
    }

    /// Marks a suggestion applied.
    ///
    /// Every apply of a known suggestion is notified, including a repeat;
    /// the flag itself only ever goes false → true. An unknown id is a no-op.
    pub fn apply_suggestion(&mut self, id: SuggestionId) -> OutcomeCode {
        let current = self.store.suggestions();
        if !current.iter().any(|s| s.id == id) {
            warn!("apply of unknown suggestion #{id}");
            return OutcomeCode::NoOp;
        }
        let next = self.tracker.apply(current, id);
        self.store.set_suggestions(next);

        info!("suggestion #{id} applied");
        let code = OutcomeCode::SuggestionApplied;
        self.notify(code);
        code
    }

    fn notify_form<T>(&mut self, result: &Result<T, FormError>, success: OutcomeCode) {
        let code = match result {
            Ok(_) => success,
            Err(e) => {
                debug!("form rejected: {e}");
                e.into()
            }
        };
        self.notify(code);
    }

    fn notify(&mut self, code: OutcomeCode) {
        let now = Instant::now();
        self.notifications.prune(now);
        self.notifications.push(code, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use crate::models::{RoomType, Slot};
    use crate::notify::Severity;

    fn empty_session() -> Session {
        Session::new(TimetableConfig {
            seed_demo_data: false,
            ..TimetableConfig::default()
        })
    }

    fn demo_session() -> Session {
        Session::new(TimetableConfig::default())
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut s = demo_session();
        assert_eq!(s.drop_on("Monday", "20h45"), OutcomeCode::NoOp);
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_drag_cleared_after_success_and_rejection() {
        let mut s = demo_session();
        // Carlos Lima: tue-19h00
        assert!(s.begin_drag_professor(2));
        assert_eq!(s.drop_on("Tuesday", "19h00"), OutcomeCode::ProfessorAssigned);
        assert!(s.drag_state().is_idle());

        assert!(s.begin_drag_professor(2));
        assert_eq!(s.drop_on("Monday", "19h00"), OutcomeCode::ProfessorUnavailable);
        assert!(s.drag_state().is_idle());
    }

    #[test]
    fn test_drag_cleared_after_break_drop() {
        let mut s = demo_session();
        assert!(s.begin_drag_room(1));
        let before = s.store().timetable().clone();
        assert_eq!(s.drop_on("Monday", "20h30"), OutcomeCode::NoOp);
        assert!(s.drag_state().is_idle());
        assert_eq!(s.store().timetable(), &before);
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_unknown_drag_ids() {
        let mut s = demo_session();
        assert!(!s.begin_drag_professor(99));
        assert!(!s.begin_drag_room(99));
        assert!(s.drag_state().is_idle());
    }

    #[test]
    fn test_new_drag_replaces_current() {
        let mut s = demo_session();
        s.begin_drag_professor(1);
        s.begin_drag_room(2);
        assert!(matches!(s.drag_state(), DragState::DraggingRoom(r) if r.name == "Room 203"));
        s.end_drag();
        assert!(s.drag_state().is_idle());
    }

    #[test]
    fn test_room_outside_grid_is_noop() {
        let mut s = demo_session();
        s.begin_drag_room(1);
        assert_eq!(s.drop_on("Saturday", "19h00"), OutcomeCode::NoOp);
        s.begin_drag_room(1);
        assert_eq!(s.drop_on("Monday", "22h15"), OutcomeCode::NoOp);
        assert_eq!(s.store().timetable().len(), 1);
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_professor_outside_grid_is_unavailable() {
        let mut s = demo_session();
        s.begin_drag_professor(1);
        assert_eq!(s.drop_on("Saturday", "19h00"), OutcomeCode::ProfessorUnavailable);
        assert!(s.drag_state().is_idle());
        s.begin_drag_professor(1);
        assert_eq!(s.drop_on("Monday", "22h15"), OutcomeCode::ProfessorUnavailable);

        assert_eq!(s.store().timetable().len(), 1);
        assert_eq!(s.notifications().len(), 2);
        assert!(s
            .notifications()
            .visible()
            .all(|n| n.severity == Severity::Error && n.code == OutcomeCode::ProfessorUnavailable));

        // The break label is on the grid, so it stays a silent no-op.
        s.begin_drag_professor(1);
        assert_eq!(s.drop_on("Monday", "20h30"), OutcomeCode::NoOp);
        assert_eq!(s.notifications().len(), 2);
    }

    #[test]
    fn test_day_normalized_at_boundary() {
        let mut s = empty_session();
        s.add_room(&RoomForm::new("Lab 1", "20", RoomType::Laboratory)).unwrap();
        s.begin_drag_room(1);
        assert_eq!(s.drop_on("WEDNESDAY", "19h00"), OutcomeCode::RoomAssigned);
        let lesson = &s.store().timetable().lessons[0];
        assert_eq!(lesson.day, Weekday::Wednesday);
        assert_eq!(lesson.id, "wed-19h00");
    }

    #[test]
    fn test_notifications_follow_outcomes() {
        let mut s = demo_session();
        s.begin_drag_room(1); // Lab 1 is already on Monday 19h00
        assert_eq!(s.drop_on("Friday", "19h00"), OutcomeCode::RoomDoubleBooked);
        let n = s.notifications().visible().last().unwrap();
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.code, OutcomeCode::RoomDoubleBooked);
    }

    #[test]
    fn test_hover_highlight() {
        let mut s = demo_session();
        s.hover_professor(Some(1));
        let grid = s.grid();
        let lit: Vec<_> = grid.cells().filter(|c| c.highlighted).map(|c| c.slot.clone()).collect();
        assert_eq!(
            lit,
            vec![
                Slot::new(Weekday::Monday, "19h00"),
                Slot::new(Weekday::Friday, "19h00"),
                Slot::new(Weekday::Wednesday, "20h45"),
            ]
        );
        s.hover_professor(None);
        assert!(s.grid().cells().all(|c| !c.highlighted));
    }

    #[test]
    fn test_add_professor_form() {
        let mut s = demo_session();
        let p = s.add_professor(&ProfessorForm::new("Dana Reis", "dana@uel.br")).unwrap();
        assert_eq!(p.id, 4);
        assert!(p.availability.contains("mon-19h00"));
        assert!(p.availability.contains("wed-19h00"));
        assert_eq!(
            s.notifications().visible().last().map(|n| n.code),
            Some(OutcomeCode::ProfessorAdded)
        );

        assert_eq!(
            s.add_professor(&ProfessorForm::new("", "")),
            Err(FormError::MissingRequiredFields)
        );
        assert_eq!(s.store().professors().len(), 4);
        assert_eq!(
            s.notifications().visible().last().map(|n| n.severity),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_add_room_form() {
        let mut s = demo_session();
        let r = s.add_room(&RoomForm::new("Lab 5", "18", RoomType::Laboratory)).unwrap();
        assert_eq!(r.id, 5);
        assert!(s.add_room(&RoomForm::new("Lab 6", "-3", RoomType::Laboratory)).is_err());
        assert_eq!(s.store().rooms().len(), 5);
    }

    #[test]
    fn test_apply_suggestion() {
        let mut s = demo_session();
        assert_eq!(s.pending_suggestions(), 3);
        assert_eq!(s.apply_suggestion(2), OutcomeCode::SuggestionApplied);
        assert_eq!(s.apply_suggestion(2), OutcomeCode::SuggestionApplied);
        assert_eq!(s.pending_suggestions(), 2);
        assert_eq!(s.apply_suggestion(42), OutcomeCode::NoOp);
        let applied: Vec<_> = s.store().suggestions().iter().map(|x| x.applied).collect();
        assert_eq!(applied, vec![false, true, false]);
        assert_eq!(s.notifications().len(), 2);
        assert!(s
            .notifications()
            .visible()
            .all(|n| n.code == OutcomeCode::SuggestionApplied && n.severity == Severity::Success));
    }

    #[test]
    fn test_complete_cell_through_session() {
        let mut s = empty_session();
        s.add_professor(&ProfessorForm::new("Ana Souza", "ana@uel.br")).unwrap();
        s.add_room(&RoomForm::new("Lab 1", "20", RoomType::Laboratory)).unwrap();

        s.begin_drag_professor(1);
        assert_eq!(s.drop_on("Monday", "19h00"), OutcomeCode::ProfessorAssigned);
        s.begin_drag_room(1);
        assert_eq!(s.drop_on("Monday", "19h00"), OutcomeCode::RoomAssigned);

        let grid = s.grid();
        let cell = grid.cell(&Slot::new(Weekday::Monday, "19h00")).unwrap();
        assert_eq!(cell.state, CellState::Complete);
        assert_eq!(s.store().timetable().len(), 1);
    }
}
