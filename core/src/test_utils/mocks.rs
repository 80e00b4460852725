//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Activity, ActivityId, ActivityRegistration, Booking, Enrollment, EnrollmentId, Hotel, HotelId,
    HotelWithOccupancy, HotelWithRooms, RegistrationId, Room, RoomWithBookings, Ticket, UserId,
};
use crate::domain::ports::{
    ActivityRepository, BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Enrollment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<HashMap<UserId, Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an enrollment for testing
    pub fn with_enrollment(self, enrollment: Enrollment) -> Self {
        {
            let mut enrollments = self.enrollments.write().unwrap();
            enrollments.insert(enrollment.user_id, enrollment);
        }
        self
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().unwrap();
        Ok(enrollments.get(user_id).cloned())
    }
}

// ============================================================================
// In-Memory Ticket Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: Arc<RwLock<HashMap<EnrollmentId, Ticket>>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        {
            let mut tickets = self.tickets.write().unwrap();
            tickets.insert(ticket.enrollment_id, ticket);
        }
        self
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let tickets = self.tickets.read().unwrap();
        Ok(tickets.get(enrollment_id).cloned())
    }
}

// ============================================================================
// In-Memory Booking Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<UserId, Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_booking(self, booking: Booking) -> Self {
        {
            let mut bookings = self.bookings.write().unwrap();
            bookings.insert(booking.user_id, booking);
        }
        self
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings.get(user_id).cloned())
    }
}

// ============================================================================
// In-Memory Hotel Repository
// ============================================================================

/// Hotels, rooms, and room bookings in insertion order, matching the
/// store-defined listing order the services rely on.
#[derive(Default)]
pub struct InMemoryHotelRepository {
    hotels: Arc<RwLock<Vec<Hotel>>>,
    rooms: Arc<RwLock<Vec<Room>>>,
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryHotelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotel(self, hotel: Hotel) -> Self {
        {
            let mut hotels = self.hotels.write().unwrap();
            hotels.push(hotel);
        }
        self
    }

    pub fn with_room(self, room: Room) -> Self {
        {
            let mut rooms = self.rooms.write().unwrap();
            rooms.push(room);
        }
        self
    }

    /// Attach a booking to a previously added room
    pub fn with_room_booking(self, booking: Booking) -> Self {
        {
            let mut bookings = self.bookings.write().unwrap();
            bookings.push(booking);
        }
        self
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let hotels = self.hotels.read().unwrap();
        Ok(hotels.clone())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotels = self.hotels.read().unwrap();
        let rooms = self.rooms.read().unwrap();

        let hotel = match hotels.iter().find(|h| h.id == *hotel_id) {
            Some(h) => h.clone(),
            None => return Ok(None),
        };
        let rooms = rooms
            .iter()
            .filter(|r| r.hotel_id == *hotel_id)
            .cloned()
            .collect();

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }

    async fn find_all_with_rooms_and_bookings(
        &self,
    ) -> Result<Vec<HotelWithOccupancy>, DomainError> {
        let hotels = self.hotels.read().unwrap();
        let rooms = self.rooms.read().unwrap();
        let bookings = self.bookings.read().unwrap();

        Ok(hotels
            .iter()
            .map(|hotel| {
                let rooms = rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel.id)
                    .map(|room| {
                        let bookings = bookings
                            .iter()
                            .filter(|b| b.room_id == room.id)
                            .cloned()
                            .collect();
                        RoomWithBookings {
                            room: room.clone(),
                            bookings,
                        }
                    })
                    .collect();
                HotelWithOccupancy {
                    hotel: hotel.clone(),
                    rooms,
                }
            })
            .collect())
    }
}

// ============================================================================
// In-Memory Activity Repository
// ============================================================================

/// Activities in insertion order. `insert_registration` enforces the same
/// per-user unique constraint the real store carries, so duplicate inserts
/// surface as `Conflict` exactly as the postgres adapter reports them.
#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<Vec<Activity>>>,
    registrations: Arc<RwLock<Vec<ActivityRegistration>>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity(self, activity: Activity) -> Self {
        {
            let mut activities = self.activities.write().unwrap();
            activities.push(activity);
        }
        self
    }

    pub fn with_registration(self, registration: ActivityRegistration) -> Self {
        {
            let mut registrations = self.registrations.write().unwrap();
            registrations.push(registration);
        }
        self
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError> {
        let activities = self.activities.read().unwrap();
        Ok(activities.clone())
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let activities = self.activities.read().unwrap();
        Ok(activities.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_registrations_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ActivityRegistration>, DomainError> {
        let registrations = self.registrations.read().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn insert_registration(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<ActivityRegistration, DomainError> {
        let mut registrations = self.registrations.write().unwrap();

        // Unique constraint scoped to the user alone
        if registrations.iter().any(|r| r.user_id == *user_id) {
            return Err(DomainError::Conflict(format!(
                "User {} already has an activity registration",
                user_id
            )));
        }

        let now = Utc::now();
        let registration = ActivityRegistration {
            id: RegistrationId::new(),
            user_id: *user_id,
            activity_id: *activity_id,
            created_at: now,
            updated_at: now,
        };
        registrations.push(registration.clone());
        Ok(registration)
    }
}
