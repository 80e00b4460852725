//! PostgreSQL adapter for EnrollmentRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{Address, Enrollment, EnrollmentId, UserId};
use crate::domain::ports::EnrollmentRepository;
use crate::entity::{addresses, enrollments};
use crate::error::DomainError;

/// PostgreSQL implementation of EnrollmentRepository
pub struct PostgresEnrollmentRepository {
    db: DatabaseConnection,
}

impl PostgresEnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn find_with_address_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let result = enrollments::Entity::find()
            .filter(enrollments::Column::UserId.eq(user_id.0))
            .find_also_related(addresses::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|(enrollment, address)| Enrollment {
            id: EnrollmentId(enrollment.id),
            user_id: UserId(enrollment.user_id),
            address: address.map(Address::from),
        }))
    }
}

impl From<addresses::Model> for Address {
    fn from(model: addresses::Model) -> Self {
        Address {
            street: model.street,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
        }
    }
}
