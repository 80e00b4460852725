//! PostgreSQL adapter for ActivityRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{
    Activity, ActivityId, ActivityRegistration, PlaceId, RegistrationId, UserId,
};
use crate::domain::ports::ActivityRepository;
use crate::entity::{activities, activity_registrations};
use crate::error::DomainError;

/// PostgreSQL implementation of ActivityRepository
pub struct PostgresActivityRepository {
    db: DatabaseConnection,
}

impl PostgresActivityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError> {
        let models = activities::Entity::find()
            .order_by_asc(activities::Column::StartsAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(models.into_iter().map(Activity::from).collect())
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let model = activities::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(model.map(Activity::from))
    }

    async fn find_registrations_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ActivityRegistration>, DomainError> {
        let models = activity_registrations::Entity::find()
            .filter(activity_registrations::Column::UserId.eq(user_id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(models.into_iter().map(ActivityRegistration::from).collect())
    }

    async fn insert_registration(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<ActivityRegistration, DomainError> {
        let now = Utc::now().fixed_offset();
        let model = activity_registrations::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.0),
            activity_id: Set(activity_id.0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(format!(
                "User {} already has an activity registration",
                user_id
            )),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                DomainError::Validation(format!("Activity {} does not exist", activity_id))
            }
            _ => DomainError::Database(e.to_string()),
        })?;

        Ok(inserted.into())
    }
}

impl From<activities::Model> for Activity {
    fn from(model: activities::Model) -> Self {
        Activity {
            id: ActivityId(model.id),
            name: model.name,
            day: model.day,
            starts_at: model.starts_at.with_timezone(&Utc),
            ends_at: model.ends_at.with_timezone(&Utc),
            place_id: PlaceId(model.place_id),
            capacity: model.capacity,
        }
    }
}

impl From<activity_registrations::Model> for ActivityRegistration {
    fn from(model: activity_registrations::Model) -> Self {
        ActivityRegistration {
            id: RegistrationId(model.id),
            user_id: UserId(model.user_id),
            activity_id: ActivityId(model.activity_id),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
