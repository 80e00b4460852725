//! Confera event platform core
//!
//! Authorization-gated catalog services for a conference-style event
//! platform: hotel/room listings and activity listing/registration, each
//! gated by enrollment and paid-ticket checks.
//!
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns. The embedding request-handling layer consumes the services in
//! [`app`] and maps [`error::DomainError`] kinds to its transport; no
//! transport concepts appear in this crate.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod telemetry;



pub use app::{ActivityCatalogService, EligibilityGuard, HotelCatalogService};
pub use config::Config;
pub use error::DomainError;
