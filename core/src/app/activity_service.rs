//! Activity catalog service
//!
//! Lists activities annotated with the requesting user's subscription
//! status and handles the single registration write. Both operations are
//! gated by the activity eligibility guard (which also requires a
//! booking).

use std::collections::HashSet;
use std::sync::Arc;

use crate::app::eligibility::EligibilityGuard;
use crate::domain::entities::{
    ActivityId, ActivityRegistration, ActivityWithSubscription, UserId,
};
use crate::domain::ports::{
    ActivityRepository, BookingRepository, EnrollmentRepository, TicketRepository,
};
use crate::error::DomainError;

/// Service for guarded activity listing and registration
pub struct ActivityCatalogService<ER, TR, BR, AR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
    AR: ActivityRepository,
{
    guard: EligibilityGuard<ER, TR, BR>,
    activities: Arc<AR>,
}

impl<ER, TR, BR, AR> ActivityCatalogService<ER, TR, BR, AR>
where
    ER: EnrollmentRepository,
    TR: TicketRepository,
    BR: BookingRepository,
    AR: ActivityRepository,
{
    pub fn new(guard: EligibilityGuard<ER, TR, BR>, activities: Arc<AR>) -> Self {
        Self { guard, activities }
    }

    /// List the full catalog, each activity annotated with whether the
    /// user is subscribed to it.
    ///
    /// The set lookup keeps the reconciliation O(A+R); a user's
    /// registration count is small.
    pub async fn get_activities(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ActivityWithSubscription>, DomainError> {
        self.guard.assert_activity_access(user_id).await?;

        let catalog = self.activities.find_all().await?;
        let registrations = self.activities.find_registrations_by_user(user_id).await?;

        let subscribed: HashSet<ActivityId> =
            registrations.iter().map(|r| r.activity_id).collect();

        Ok(catalog
            .into_iter()
            .map(|activity| {
                let user_subscribed = subscribed.contains(&activity.id);
                ActivityWithSubscription {
                    activity,
                    user_subscribed,
                }
            })
            .collect())
    }

    /// Register the user for an activity.
    ///
    /// Fails with `Validation` when the activity does not exist and with
    /// `Conflict` when the store's uniqueness constraint rejects a second
    /// registration for the user. The guard-then-insert sequence is not
    /// atomic; correctness under a racing duplicate insert rests on the
    /// store constraint alone.
    pub async fn create_registration(
        &self,
        user_id: &UserId,
        activity_id: &ActivityId,
    ) -> Result<ActivityRegistration, DomainError> {
        self.guard.assert_activity_access(user_id).await?;

        if self.activities.find_by_id(activity_id).await?.is_none() {
            return Err(DomainError::Validation(format!(
                "Activity {} does not exist",
                activity_id
            )));
        }

        self.activities
            .insert_registration(user_id, activity_id)
            .await
    }
}
