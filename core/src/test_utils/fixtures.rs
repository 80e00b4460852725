//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::entities::{
    Activity, ActivityId, ActivityRegistration, Address, Booking, BookingId, Enrollment,
    EnrollmentId, Hotel, HotelId, PlaceId, RegistrationId, Room, RoomId, Ticket, TicketId,
    TicketStatus, TicketType, TicketTypeId, UserId,
};

/// Create a test enrollment for a user, with an address
pub fn test_enrollment(user_id: UserId) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(),
        user_id,
        address: Some(Address {
            street: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
        }),
    }
}

fn test_ticket_type(is_remote: bool, includes_hotel: bool) -> TicketType {
    TicketType {
        id: TicketTypeId::new(),
        name: "Conference Pass".to_string(),
        price: 25_000,
        is_remote,
        includes_hotel,
    }
}

/// Paid, in-person, hotel-inclusive ticket: passes every guard
pub fn test_paid_ticket(enrollment_id: EnrollmentId) -> Ticket {
    Ticket {
        id: TicketId::new(),
        enrollment_id,
        status: TicketStatus::Paid,
        ticket_type: test_ticket_type(false, true),
    }
}

/// Reserved (unpaid) ticket
pub fn test_reserved_ticket(enrollment_id: EnrollmentId) -> Ticket {
    Ticket {
        id: TicketId::new(),
        enrollment_id,
        status: TicketStatus::Reserved,
        ticket_type: test_ticket_type(false, true),
    }
}

/// Paid but remote-only ticket
pub fn test_remote_ticket(enrollment_id: EnrollmentId) -> Ticket {
    Ticket {
        id: TicketId::new(),
        enrollment_id,
        status: TicketStatus::Paid,
        ticket_type: test_ticket_type(true, false),
    }
}

/// Paid in-person ticket without the hotel entitlement
pub fn test_in_person_ticket_without_hotel(enrollment_id: EnrollmentId) -> Ticket {
    Ticket {
        id: TicketId::new(),
        enrollment_id,
        status: TicketStatus::Paid,
        ticket_type: test_ticket_type(false, false),
    }
}

/// Create a test hotel with a given name
pub fn test_hotel(name: &str) -> Hotel {
    Hotel {
        id: HotelId::new(),
        name: name.to_string(),
        image_url: Some(format!(
            "https://images.test/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        )),
    }
}

/// Create a test room in a hotel
pub fn test_room(hotel_id: HotelId) -> Room {
    Room {
        id: RoomId::new(),
        hotel_id,
        name: "101".to_string(),
        capacity: 3,
    }
}

/// Create a test booking linking a user to a room
pub fn test_booking(user_id: UserId, room_id: RoomId) -> Booking {
    Booking {
        id: BookingId::new(),
        user_id,
        room_id,
    }
}

/// Create a test activity with a given name
pub fn test_activity(name: &str) -> Activity {
    let day = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
    Activity {
        id: ActivityId::new(),
        name: name.to_string(),
        day,
        starts_at: Utc.with_ymd_and_hms(2026, 10, 23, 9, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2026, 10, 23, 10, 0, 0).unwrap(),
        place_id: PlaceId::new(),
        capacity: 30,
    }
}

/// Create a test registration linking a user to an activity
pub fn test_registration(user_id: UserId, activity_id: ActivityId) -> ActivityRegistration {
    let now = Utc::now();
    ActivityRegistration {
        id: RegistrationId::new(),
        user_id,
        activity_id,
        created_at: now,
        updated_at: now,
    }
}
