use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::booking::{
    BookingDraft, BookingStatus, ConfirmedBooking, DraftUpdate, NotFoundError, ValidationError,
};
use crate::models::destination::Destination;
use crate::models::spaceship::Spaceship;
use crate::services::packing_service::PackingService;
use crate::services::pricing_service::PricingService;
use crate::services::travel_service::TravelService;
use crate::services::validation_service::StepValidator;

/// The one mutable object of the booking core: the live draft, its derived
/// packing list, and the history of confirmed bookings. All mutation goes
/// through these methods; derived fields are recomputed before any method
/// returns, so a read always sees consistent totals.
pub struct BookingSession {
    draft: BookingDraft,
    packing_list: Vec<String>,
    history: Vec<ConfirmedBooking>,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            draft: BookingDraft::default(),
            packing_list: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn packing_list(&self) -> &[String] {
        &self.packing_list
    }

    pub fn history(&self) -> &[ConfirmedBooking] {
        &self.history
    }

    pub fn booking(&self, id: Uuid) -> Option<&ConfirmedBooking> {
        self.history.iter().find(|b| b.id == id)
    }

    /// Merge a partial update into the draft. Passenger counts are clamped
    /// into 1..=10; other fields are taken as-is.
    pub fn update_details(&mut self, update: DraftUpdate) {
        let mut derived_inputs_changed = false;

        if let Some(name) = update.traveler_name {
            self.draft.traveler_name = name;
        }
        if let Some(email) = update.email {
            self.draft.email = email;
        }
        if let Some(date) = update.departure_date {
            self.draft.departure_date = Some(date);
        }
        if let Some(date) = update.return_date {
            self.draft.return_date = Some(date);
        }
        if let Some(trip_type) = update.trip_type {
            self.draft.trip_type = trip_type;
        }
        if let Some(lodging) = update.lodging {
            self.draft.lodging = lodging;
            derived_inputs_changed = true;
        }
        if let Some(passengers) = update.passengers {
            self.draft.passengers = passengers.clamp(1, 10);
            derived_inputs_changed = true;
        }

        if derived_inputs_changed {
            self.recalculate();
        }
    }

    pub fn set_destination(&mut self, destination: Destination) {
        self.draft.destination = Some(destination);
        self.recalculate();
    }

    pub fn set_spaceship(&mut self, spaceship: Spaceship) {
        self.draft.spaceship = Some(spaceship);
        self.recalculate();
    }

    /// Add an activity by name. Adding one already selected is a no-op.
    pub fn add_activity(&mut self, name: &str) {
        if self.draft.activities.iter().any(|a| a == name) {
            return;
        }
        self.draft.activities.push(name.to_string());
        self.recalculate();
    }

    /// Remove an activity by name. Removing one not selected is a no-op.
    pub fn remove_activity(&mut self, name: &str) {
        let before = self.draft.activities.len();
        self.draft.activities.retain(|a| a != name);
        if self.draft.activities.len() != before {
            self.recalculate();
        }
    }

    /// Validate the whole draft and, on success, freeze it into history as a
    /// confirmed booking with a fresh id and timestamp. The live draft resets
    /// to a new empty draft so another booking can start immediately.
    ///
    /// On failure nothing changes: the draft keeps its fields and status, and
    /// history is untouched.
    pub fn confirm(&mut self, now: DateTime<Utc>) -> Result<ConfirmedBooking, ValidationError> {
        let errors = StepValidator::validate_all(&self.draft, now);
        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }

        // Totals must be current at the moment of confirmation.
        self.recalculate();

        let draft = std::mem::take(&mut self.draft);
        let (Some(destination), Some(spaceship), Some(departure_date), Some(return_date)) = (
            draft.destination,
            draft.spaceship,
            draft.departure_date,
            draft.return_date,
        ) else {
            // validate_all checked presence of all four just above
            unreachable!("confirm ran against an incompletely validated draft");
        };

        let confirmed = ConfirmedBooking {
            id: Uuid::new_v4(),
            traveler_name: draft.traveler_name,
            email: draft.email,
            destination,
            spaceship,
            departure_date,
            return_date,
            trip_type: draft.trip_type,
            lodging: draft.lodging,
            activities: draft.activities,
            passengers: draft.passengers,
            total_cost: draft.total_cost,
            travel_time_days: draft.travel_time_days,
            status: BookingStatus::Confirmed,
            booked_at: now,
        };

        self.packing_list.clear();
        self.history.push(confirmed.clone());
        Ok(confirmed)
    }

    /// Cancel a confirmed booking in history. The record is kept, only its
    /// status changes. Unknown ids are an error; cancelling an already
    /// cancelled booking is a no-op that reports success.
    pub fn cancel(&mut self, id: Uuid) -> Result<ConfirmedBooking, NotFoundError> {
        match self.history.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                Ok(booking.clone())
            }
            None => Err(NotFoundError { booking_id: id }),
        }
    }

    /// Discard the live draft and start over. History is unaffected.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::default();
        self.packing_list.clear();
    }

    /// Recompute every derived value from the current draft. Cost and travel
    /// time degrade to partial estimates while selections are missing; the
    /// packing list exists only once a destination is chosen.
    fn recalculate(&mut self) {
        self.draft.total_cost = PricingService::total_cost(&self.draft);

        let distance = self.draft.destination.as_ref().map_or(0.0, |d| d.distance);
        let speed = self.draft.spaceship.as_ref().map_or(0.0, |s| s.max_speed);
        self.draft.travel_time_days = TravelService::travel_time_days(distance, speed);

        self.packing_list = match &self.draft.destination {
            Some(destination) => PackingService::generate(&destination.tags),
            None => Vec::new(),
        };
    }
}
