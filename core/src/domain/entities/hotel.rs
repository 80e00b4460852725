//! Hotel, room and booking domain entities
//!
//! Hotels and rooms are read-only catalog data here. Bookings link a user
//! to a reserved room and are created by the out-of-scope booking flow.
//! The composed `*With*` value objects are explicit fetch results so the
//! core never assumes a specific query-building API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enrollment::UserId;

/// Unique identifier for a hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotelId(pub Uuid);

impl HotelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HotelId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for HotelId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HotelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RoomId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookingId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image_url: Option<String>,
}

/// A room belonging to exactly one hotel
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}

/// Record linking a user to a reserved room. At most one active per user.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
}

/// A hotel together with its rooms
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

/// A room together with its current bookings
#[derive(Debug, Clone, Serialize)]
pub struct RoomWithBookings {
    pub room: Room,
    pub bookings: Vec<Booking>,
}

/// A hotel with rooms and each room's bookings
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithOccupancy {
    pub hotel: Hotel,
    pub rooms: Vec<RoomWithBookings>,
}

impl RoomWithBookings {
    /// Free beds remaining in this room
    pub fn vacancies(&self) -> i32 {
        self.capacity_remaining().max(0)
    }

    fn capacity_remaining(&self) -> i32 {
        self.room.capacity - self.bookings.len() as i32
    }
}
