//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! All accesses are discrete reads or writes; no port spans a
//! multi-statement transaction. The registration uniqueness invariant is
//! enforced by the store and surfaced as `DomainError::Conflict`.

use async_trait::async_trait;

use crate::domain::entities::{
    Activity, ActivityId, ActivityRegistration, Booking, Enrollment, EnrollmentId, Hotel, HotelId,
    HotelWithOccupancy, HotelWithRooms, Ticket, UserId,
};
use crate::error::DomainError;

/// Repository for Enrollment entities
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find a user's enrollment, with its address included
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError>;
}

/// Repository for Ticket entities
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the ticket for an enrollment, with its ticket type embedded
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}

/// Repository for Booking entities
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a user's active booking
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError>;
}

/// Repository for Hotel and Room entities
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List all hotels, without rooms, in store-defined order
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Find one hotel by id, with its rooms
    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError>;

    /// List all hotels, each with rooms and each room's bookings
    async fn find_all_with_rooms_and_bookings(
        &self,
    ) -> Result<Vec<HotelWithOccupancy>, DomainError>;
}

/// Repository for Activity entities and registrations
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// List the full activity catalog in store-defined order
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError>;

    /// Find an activity by id
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError>;

    /// List a user's activity registrations
    async fn find_registrations_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ActivityRegistration>, DomainError>;

    /// Insert a registration row for (user, activity).
    ///
    /// Fails with `DomainError::Conflict` when the store's uniqueness
    /// constraint rejects a duplicate registration for the user.
    async fn insert_registration(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<ActivityRegistration, DomainError>;
}
