//! Room model.
//!
//! Rooms are the physical resource dropped onto grid slots. Each room has
//! a type, a seat capacity and free-text equipment tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room identifier.
pub type RoomId = u32;

/// A room that can be assigned to slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier, assigned by the store.
    pub id: RoomId,
    /// Display name. Lessons reference rooms by this name.
    pub name: String,
    /// Number of seats (positive).
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Equipment tags, in insertion order. Duplicates are kept.
    pub equipment: Vec<String>,
}

/// Room classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Regular classroom.
    #[default]
    StandardRoom,
    /// Computer or science laboratory.
    Laboratory,
    /// Large lecture hall.
    Auditorium,
}

impl RoomType {
    /// Every room type, in form order.
    pub const ALL: [RoomType; 3] = [
        RoomType::StandardRoom,
        RoomType::Laboratory,
        RoomType::Auditorium,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RoomType::StandardRoom => "Standard Room",
            RoomType::Laboratory => "Laboratory",
            RoomType::Auditorium => "Auditorium",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field tuple for a room that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub capacity: u32,
    pub room_type: RoomType,
    pub equipment: Vec<String>,
}

impl NewRoom {
    /// Creates a room record with no equipment.
    pub fn new(name: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            capacity,
            room_type,
            equipment: Vec::new(),
        }
    }

    /// Creates a standard room.
    pub fn standard(name: impl Into<String>, capacity: u32) -> Self {
        Self::new(name, capacity, RoomType::StandardRoom)
    }

    /// Creates a laboratory.
    pub fn laboratory(name: impl Into<String>, capacity: u32) -> Self {
        Self::new(name, capacity, RoomType::Laboratory)
    }

    /// Creates an auditorium.
    pub fn auditorium(name: impl Into<String>, capacity: u32) -> Self {
        Self::new(name, capacity, RoomType::Auditorium)
    }

    /// Appends an equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Attaches an identity.
    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            capacity: self.capacity,
            room_type: self.room_type,
            equipment: self.equipment,
        }
    }
}
