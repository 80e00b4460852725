//! PostgreSQL adapter for TicketRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{
    EnrollmentId, Ticket, TicketId, TicketType, TicketTypeId,
};
use crate::domain::ports::TicketRepository;
use crate::entity::{ticket_types, tickets};
use crate::error::DomainError;

/// PostgreSQL implementation of TicketRepository
pub struct PostgresTicketRepository {
    db: DatabaseConnection,
}

impl PostgresTicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for PostgresTicketRepository {
    async fn find_by_enrollment(
        &self,
        enrollment_id: &EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let result = tickets::Entity::find()
            .filter(tickets::Column::EnrollmentId.eq(enrollment_id.0))
            .find_also_related(ticket_types::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match result {
            None => Ok(None),
            Some((ticket, Some(ticket_type))) => {
                let status = ticket.status.parse().map_err(|e: String| {
                    tracing::error!(ticket_id = %ticket.id, "bad ticket status in store: {e}");
                    DomainError::Internal(e)
                })?;

                Ok(Some(Ticket {
                    id: TicketId(ticket.id),
                    enrollment_id: EnrollmentId(ticket.enrollment_id),
                    status,
                    ticket_type: ticket_type.into(),
                }))
            }
            Some((ticket, None)) => Err(DomainError::Internal(format!(
                "Ticket {} has no ticket type",
                ticket.id
            ))),
        }
    }
}

impl From<ticket_types::Model> for TicketType {
    fn from(model: ticket_types::Model) -> Self {
        TicketType {
            id: TicketTypeId(model.id),
            name: model.name,
            price: model.price,
            is_remote: model.is_remote,
            includes_hotel: model.includes_hotel,
        }
    }
}
