//! Ticket domain entity
//!
//! A ticket is a purchase record tied to an enrollment, carrying a payment
//! status and a ticket type. The ticket type is immutable catalog data
//! describing price and entitlements (remote-only, hotel-inclusive), kept
//! as independently toggleable flags rather than a single eligibility flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enrollment::EnrollmentId;

/// Unique identifier for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub Uuid);

impl TicketId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TicketId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ticket type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeId(pub Uuid);

impl TicketTypeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TicketTypeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TicketTypeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TicketTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Reserved => write!(f, "RESERVED"),
            TicketStatus::Paid => write!(f, "PAID"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            _ => Err(format!("Unknown ticket status: {}", s)),
        }
    }
}

/// Catalog entry describing price and entitlements
#[derive(Debug, Clone, Serialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in cents
    pub price: i64,
    /// Remote-only ticket: holder does not attend in person
    pub is_remote: bool,
    /// Whether the ticket includes hotel accommodation
    pub includes_hotel: bool,
}

/// A purchase record tied to exactly one enrollment
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    /// Paid, in-person ticket: the baseline for any on-site feature
    pub fn admits_in_person(&self) -> bool {
        self.is_paid() && !self.ticket_type.is_remote
    }

    /// In-person admission plus hotel entitlement
    pub fn grants_hotel_access(&self) -> bool {
        self.admits_in_person() && self.ticket_type.includes_hotel
    }
}
