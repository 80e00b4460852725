//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod activity;
pub mod enrollment;
pub mod hotel;
pub mod ticket;

pub use activity::{
    Activity, ActivityId, ActivityRegistration, ActivityWithSubscription, PlaceId, RegistrationId,
};
pub use enrollment::{Address, Enrollment, EnrollmentId, UserId};
pub use hotel::{
    Booking, BookingId, Hotel, HotelId, HotelWithOccupancy, HotelWithRooms, Room, RoomId,
    RoomWithBookings,
};
pub use ticket::{Ticket, TicketId, TicketStatus, TicketType, TicketTypeId};
