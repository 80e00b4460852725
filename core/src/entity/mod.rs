//! SeaORM table entities
//!
//! Database-facing models for the postgres adapters. Domain code never
//! touches these; adapters convert them into the entities in
//! `domain::entities`.

pub mod activities;
pub mod activity_registrations;
pub mod addresses;
pub mod bookings;
pub mod enrollments;
pub mod hotels;
pub mod rooms;
pub mod ticket_types;
pub mod tickets;
