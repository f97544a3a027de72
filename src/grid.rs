//! Render-ready view of the weekly grid.
//!
//! Derived from the schedule shape, the timetable and the hovered
//! professor. Rebuilt after every mutation; never stored.

use serde::Serialize;

use crate::availability::is_available_at;
use crate::models::{Lesson, Professor, ScheduleShape, Slot, Timetable};

/// What a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellState {
    /// Break slot. Never accepts drops.
    Break,
    /// No lesson.
    Empty,
    /// Professor-only or room-only lesson.
    Partial,
    /// Professor and room assigned.
    Complete,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub slot: Slot,
    pub state: CellState,
    pub lesson: Option<Lesson>,
    /// The hovered professor is available here.
    pub highlighted: bool,
}

/// One grid row (a time label across all days).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub time: String,
    pub cells: Vec<GridCell>,
}

/// The whole grid, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub rows: Vec<GridRow>,
}

impl GridView {
    /// Builds the grid.
    pub fn build(shape: &ScheduleShape, timetable: &Timetable, hovered: Option<&Professor>) -> Self {
        let rows = shape
            .times
            .iter()
            .map(|time| GridRow {
                time: time.clone(),
                cells: shape
                    .days
                    .iter()
                    .map(|&day| build_cell(shape, timetable, hovered, Slot::new(day, time.clone())))
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    /// The cell at a slot.
    pub fn cell(&self, slot: &Slot) -> Option<&GridCell> {
        self.cells().find(|c| &c.slot == slot)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Number of cells in a state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|c| c.state == state).count()
    }
}

fn build_cell(
    shape: &ScheduleShape,
    timetable: &Timetable,
    hovered: Option<&Professor>,
    slot: Slot,
) -> GridCell {
    if shape.is_break(&slot.time) {
        return GridCell {
            slot,
            state: CellState::Break,
            lesson: None,
            highlighted: false,
        };
    }

    let lesson = timetable.lesson_at(slot.day, &slot.time).cloned();
    let state = match &lesson {
        None => CellState::Empty,
        Some(l) if l.is_complete() => CellState::Complete,
        Some(_) => CellState::Partial,
    };
    let highlighted = hovered.is_some_and(|p| is_available_at(p, &slot));

    GridCell {
        slot,
        state,
        lesson,
        highlighted,
    }
}
