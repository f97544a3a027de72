//! Demo session data.

use crate::models::{
    Lesson, NewProfessor, NewRoom, Slot, Suggestion, Timetable, Weekday,
};
use crate::store::TimetableStore;

/// A store with three professors, four rooms, one lesson and three
/// suggestions.
pub fn demo_store() -> TimetableStore {
    let mut store = TimetableStore::new();

    store.add_professor(
        NewProfessor::new("Ana Souza", "ana@uel.br")
            .with_availabilities(["mon-19h00", "wed-20h45", "fri-19h00"]),
    );
    store.add_professor(
        NewProfessor::new("Carlos Lima", "carlos@uel.br")
            .with_availabilities(["tue-19h00", "thu-20h45", "fri-20h45"]),
    );
    store.add_professor(
        NewProfessor::new("Beatriz Oliveira", "beatriz@uel.br")
            .with_availabilities(["mon-20h45", "wed-19h00", "thu-19h00"]),
    );

    store.add_room(
        NewRoom::laboratory("Lab 1", 20)
            .with_equipment("Computers")
            .with_equipment("Projector"),
    );
    store.add_room(
        NewRoom::standard("Room 203", 40)
            .with_equipment("Projector")
            .with_equipment("Air conditioning"),
    );
    store.add_room(
        NewRoom::laboratory("Lab 3", 30)
            .with_equipment("Computers")
            .with_equipment("Digital whiteboard"),
    );
    store.add_room(
        NewRoom::auditorium("Auditorium A", 100)
            .with_equipment("Sound system")
            .with_equipment("Projector")
            .with_equipment("Microphone"),
    );

    store.set_lessons(Timetable::from(vec![Lesson::at(&Slot::new(
        Weekday::Monday,
        "19h00",
    ))
    .with_professor("Ana Souza")
    .with_room("Lab 1")]));

    store.set_suggestions(vec![
        Suggestion::new(1, "Swap Room 2 for Room 5 on Tuesday at 19h"),
        Suggestion::new(2, "Professor Carlos Lima is available on Thursday at 20h45"),
        Suggestion::new(3, "Lab 3 is free on Friday at 20h45"),
    ]);

    store
}
