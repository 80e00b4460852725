//! Hotel catalog service
//!
//! Read-only hotel and hotel+room listings, gated by the eligibility
//! guard. No caching: every call re-queries the store and re-runs the
//! guard, so all operations are idempotent and safe to retry.

use std::sync::Arc;

use crate::app::eligibility::EligibilityGuard;
use crate::domain::entities::{Hotel, HotelId, HotelWithOccupancy, HotelWithRooms, UserId};
use crate::domain::ports::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};
use crate::error::DomainError;

/// Service for guarded hotel catalog reads
pub struct HotelCatalogService<ER, TR, BR, HR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
    HR: HotelRepository,
{
    guard: EligibilityGuard<ER, TR, BR>,
    hotels: Arc<HR>,
}

impl<ER, TR, BR, HR> HotelCatalogService<ER, TR, BR, HR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
    HR: HotelRepository,
{
    pub fn new(guard: EligibilityGuard<ER, TR, BR>, hotels: Arc<HR>) -> Self {
        Self { guard, hotels }
    }

    /// List all hotels, without rooms, in store-defined order
    pub async fn get_hotels(&self, user_id: &UserId) -> Result<Vec<Hotel>, DomainError> {
        self.guard.assert_hotel_access(user_id).await?;
        self.hotels.find_all().await
    }

    /// Fetch one hotel by id, with its rooms
    pub async fn get_hotel_with_rooms(
        &self,
        user_id: &UserId,
        hotel_id: &HotelId,
    ) -> Result<HotelWithRooms, DomainError> {
        self.guard.assert_hotel_access(user_id).await?;

        self.hotels
            .find_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Hotel {} not found", hotel_id)))
    }

    /// List all hotels, each with rooms and each room's bookings
    pub async fn get_all_hotels_with_rooms(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<HotelWithOccupancy>, DomainError> {
        self.guard.assert_hotel_access(user_id).await?;
        self.hotels.find_all_with_rooms_and_bookings().await
    }
}
