//! PostgreSQL adapter for BookingRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{Booking, BookingId, RoomId, UserId};
use crate::domain::ports::BookingRepository;
use crate::entity::bookings;
use crate::error::DomainError;

/// PostgreSQL implementation of BookingRepository
pub struct PostgresBookingRepository {
    db: DatabaseConnection,
}

impl PostgresBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Booking>, DomainError> {
        let result = bookings::Entity::find()
            .filter(bookings::Column::UserId.eq(user_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

impl From<bookings::Model> for Booking {
    fn from(model: bookings::Model) -> Self {
        Booking {
            id: BookingId(model.id),
            user_id: UserId(model.user_id),
            room_id: RoomId(model.room_id),
        }
    }
}
