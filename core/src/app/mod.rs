//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports; each exposed
//! operation is an independent unit of work that re-runs its eligibility
//! guard and issues discrete store reads or writes.

pub mod activity_service;
pub mod eligibility;
pub mod hotel_service;

pub use activity_service::ActivityCatalogService;
pub use eligibility::EligibilityGuard;
pub use hotel_service::HotelCatalogService;
