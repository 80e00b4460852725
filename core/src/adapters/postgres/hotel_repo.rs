//! PostgreSQL adapter for HotelRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::entities::{
    Booking, Hotel, HotelId, HotelWithOccupancy, HotelWithRooms, Room, RoomId, RoomWithBookings,
};
use crate::domain::ports::HotelRepository;
use crate::entity::{bookings, hotels, rooms};
use crate::error::DomainError;

/// PostgreSQL implementation of HotelRepository
pub struct PostgresHotelRepository {
    db: DatabaseConnection,
}

impl PostgresHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for PostgresHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let models = hotels::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(models.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(
        &self,
        hotel_id: &HotelId,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel = hotels::Entity::find_by_id(hotel_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = rooms::Entity::find()
            .filter(rooms::Column::HotelId.eq(hotel_id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }

    async fn find_all_with_rooms_and_bookings(
        &self,
    ) -> Result<Vec<HotelWithOccupancy>, DomainError> {
        let hotels = hotels::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rooms = rooms::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let bookings = bookings::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Group in memory rather than issuing a query per hotel.
        let mut bookings_by_room: HashMap<Uuid, Vec<Booking>> = HashMap::new();
        for booking in bookings {
            bookings_by_room
                .entry(booking.room_id)
                .or_default()
                .push(booking.into());
        }

        let mut rooms_by_hotel: HashMap<Uuid, Vec<RoomWithBookings>> = HashMap::new();
        for room in rooms {
            let bookings = bookings_by_room.remove(&room.id).unwrap_or_default();
            rooms_by_hotel
                .entry(room.hotel_id)
                .or_default()
                .push(RoomWithBookings {
                    room: room.into(),
                    bookings,
                });
        }

        Ok(hotels
            .into_iter()
            .map(|hotel| HotelWithOccupancy {
                rooms: rooms_by_hotel.remove(&hotel.id).unwrap_or_default(),
                hotel: hotel.into(),
            })
            .collect())
    }
}

impl From<hotels::Model> for Hotel {
    fn from(model: hotels::Model) -> Self {
        Hotel {
            id: HotelId(model.id),
            name: model.name,
            image_url: model.image_url,
        }
    }
}

impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Room {
            id: RoomId(model.id),
            hotel_id: HotelId(model.hotel_id),
            name: model.name,
            capacity: model.capacity,
        }
    }
}
