//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod activity_repo;
pub mod booking_repo;
pub mod enrollment_repo;
pub mod hotel_repo;
pub mod ticket_repo;

pub use activity_repo::PostgresActivityRepository;
pub use booking_repo::PostgresBookingRepository;
pub use enrollment_repo::PostgresEnrollmentRepository;
pub use hotel_repo::PostgresHotelRepository;
pub use ticket_repo::PostgresTicketRepository;
