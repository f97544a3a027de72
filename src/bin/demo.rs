//! Replays a JSON event script against a seeded session.
//!
//! Usage: `u-timetable-demo [script.json]` (reads stdin when no path).
//!
//! Script format:
//! ```json
//! [
//!   {"event": "drag_professor", "id": 2},
//!   {"event": "drop", "day": "Tuesday", "time": "19h00"},
//!   {"event": "apply_suggestion", "id": 1}
//! ]
//! ```

use log::{error, info};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::process::ExitCode;

use u_timetable::config::TimetableConfig;
use u_timetable::forms::{ProfessorForm, RoomForm};
use u_timetable::notify::OutcomeCode;
use u_timetable::session::Session;

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event {
    DragProfessor { id: u32 },
    DragRoom { id: u32 },
    EndDrag,
    Drop { day: String, time: String },
    Hover { id: Option<u32> },
    AddProfessor(ProfessorForm),
    AddRoom(RoomForm),
    ApplySuggestion { id: u32 },
}

#[derive(Debug, Serialize)]
struct Step {
    index: usize,
    code: Option<OutcomeCode>,
    message: Option<&'static str>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = TimetableConfig::load()?;
    let script = read_script()?;
    let events: Vec<Event> = serde_json::from_str(&script)?;
    info!("replaying {} events", events.len());

    let mut session = Session::new(config);
    let mut steps = Vec::with_capacity(events.len());

    for (index, event) in events.into_iter().enumerate() {
        let code = apply(&mut session, event);
        steps.push(Step {
            index,
            code,
            message: code.and_then(|c| c.notice()).map(|(_, m)| m),
        });
    }

    let report = serde_json::json!({
        "steps": steps,
        "lessons": session.store().timetable(),
        "grid": session.grid(),
        "suggestions": session.store().suggestions(),
        "pending_suggestions": session.pending_suggestions(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn apply(session: &mut Session, event: Event) -> Option<OutcomeCode> {
    match event {
        Event::DragProfessor { id } => {
            session.begin_drag_professor(id);
            None
        }
        Event::DragRoom { id } => {
            session.begin_drag_room(id);
            None
        }
        Event::EndDrag => {
            session.end_drag();
            None
        }
        Event::Drop { day, time } => Some(session.drop_on(&day, &time)),
        Event::Hover { id } => {
            session.hover_professor(id);
            None
        }
        Event::AddProfessor(form) => Some(match session.add_professor(&form) {
            Ok(_) => OutcomeCode::ProfessorAdded,
            Err(e) => (&e).into(),
        }),
        Event::AddRoom(form) => Some(match session.add_room(&form) {
            Ok(_) => OutcomeCode::RoomAdded,
            Err(e) => (&e).into(),
        }),
        Event::ApplySuggestion { id } => Some(session.apply_suggestion(id)),
    }
}

fn read_script() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
