use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::destination::Destination;
use crate::models::spaceship::Spaceship;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Solo,
    Couple,
    Family,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lodging {
    Tent,
    #[default]
    Dome,
    Hotel,
}

impl Lodging {
    /// Flat surcharge added to the trip subtotal.
    pub fn surcharge(&self) -> i64 {
        match self {
            Lodging::Tent => 0,
            Lodging::Dome => 5_000,
            Lodging::Hotel => 15_000,
        }
    }
}

/// `Draft` is the live draft's only status. A booking becomes `Confirmed`
/// when it is snapshotted into history, and a confirmed record may move to
/// `Cancelled`; nothing ever moves back to `Draft`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Draft,
    Confirmed,
    Cancelled,
}

/// The single in-progress booking being edited by the wizard.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BookingDraft {
    pub traveler_name: String,
    pub email: String,
    pub destination: Option<Destination>,
    pub spaceship: Option<Spaceship>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub trip_type: TripType,
    pub lodging: Lodging,
    pub activities: Vec<String>,
    pub passengers: u32,
    /// Derived; recomputed whenever a cost input changes.
    pub total_cost: i64,
    /// Derived, one-way days; recomputed when destination or ship changes.
    pub travel_time_days: i64,
    pub status: BookingStatus,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            traveler_name: String::new(),
            email: String::new(),
            destination: None,
            spaceship: None,
            departure_date: None,
            return_date: None,
            trip_type: TripType::Solo,
            lodging: Lodging::Dome,
            activities: Vec::new(),
            passengers: 1,
            total_cost: 0,
            travel_time_days: 0,
            status: BookingStatus::Draft,
        }
    }
}

/// Partial field update merged into the live draft. Absent fields are left
/// untouched.
#[derive(Debug, Deserialize, Default)]
pub struct DraftUpdate {
    pub traveler_name: Option<String>,
    pub email: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub trip_type: Option<TripType>,
    pub lodging: Option<Lodging>,
    pub passengers: Option<u32>,
}

/// Immutable snapshot appended to history when a draft is confirmed. The
/// destination and ship are guaranteed present by confirmation validation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConfirmedBooking {
    pub id: Uuid,
    pub traveler_name: String,
    pub email: String,
    pub destination: Destination,
    pub spaceship: Spaceship,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub trip_type: TripType,
    pub lodging: Lodging,
    pub activities: Vec<String>,
    pub passengers: u32,
    pub total_cost: i64,
    pub travel_time_days: i64,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

/// Field-scoped validation failure. Carries one message per offending field
/// so the wizard can render errors inline; handlers turn this into a response
/// body, never a crash.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: BTreeMap<String, String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Raised when a booking id does not match any confirmed booking in history.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotFoundError {
    pub booking_id: Uuid,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no confirmed booking with id {}", self.booking_id)
    }
}

impl std::error::Error for NotFoundError {}
