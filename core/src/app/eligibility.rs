//! Eligibility guard
//!
//! Answers "may this user access hotel/activity features right now?" from
//! enrollment, ticket, and booking records. Both checks are short-circuit
//! conjunctions over the ticket type's entitlement flags and return a
//! tagged result instead of throwing; success means "proceed".
//!
//! Note the asymmetry preserved from observed behavior: hotel access
//! requires `includes_hotel`, activity access does not.

use std::sync::Arc;

use crate::domain::entities::UserId;
use crate::domain::ports::{BookingRepository, EnrollmentRepository, TicketRepository};
use crate::error::DomainError;

/// Validates enrollment/ticket/booking prerequisites for gated features
pub struct EligibilityGuard<ER, TR, BR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
{
    enrollments: Arc<ER>,
    tickets: Arc<TR>,
    bookings: Arc<BR>,
}

impl<ER, TR, BR> Clone for EligibilityGuard<ER, TR, BR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
{
    fn clone(&self) -> Self {
        Self {
            enrollments: self.enrollments.clone(),
            tickets: self.tickets.clone(),
            bookings: self.bookings.clone(),
        }
    }
}

impl<ER, TR, BR> EligibilityGuard<ER, TR, BR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
{
    pub fn new(enrollments: Arc<ER>, tickets: Arc<TR>, bookings: Arc<BR>) -> Self {
        Self {
            enrollments,
            tickets,
            bookings,
        }
    }

    /// Hotel eligibility: enrollment exists, ticket paid, in-person, and
    /// hotel-inclusive.
    pub async fn assert_hotel_access(&self, user_id: &UserId) -> Result<(), DomainError> {
        let enrollment = self
            .enrollments
            .find_with_address_by_user(user_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Enrollment for user {} not found", user_id))
            })?;

        let ticket = self.tickets.find_by_enrollment(&enrollment.id).await?;

        match ticket {
            Some(t) if t.grants_hotel_access() => Ok(()),
            _ => {
                tracing::debug!(%user_id, "hotel access denied");
                Err(DomainError::Forbidden("cannot list hotels".to_string()))
            }
        }
    }

    /// Activity eligibility: enrollment exists, ticket paid and in-person
    /// (hotel entitlement not required), and the user has a booking.
    pub async fn assert_activity_access(&self, user_id: &UserId) -> Result<(), DomainError> {
        let enrollment = self
            .enrollments
            .find_with_address_by_user(user_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Enrollment for user {} not found", user_id))
            })?;

        let ticket = self.tickets.find_by_enrollment(&enrollment.id).await?;

        match ticket {
            Some(t) if t.admits_in_person() => {}
            _ => {
                tracing::debug!(%user_id, "activity access denied");
                return Err(DomainError::Forbidden("cannot list activities".to_string()));
            }
        }

        self.bookings.find_by_user(user_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("Booking for user {} not found", user_id))
        })?;

        Ok(())
    }
}
