use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::booking::BookingDraft;

/// Same loose pattern the booking form applies: something before an @,
/// something after it, and a dot somewhere in the domain part.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Wizard step numbers with validation rules. Later steps (medical
/// clearance, payment review, confirmation screen) gate nothing.
pub const STEP_TRAVELER_PROFILE: u8 = 1;
pub const STEP_DESTINATION: u8 = 2;
pub const STEP_SPACECRAFT: u8 = 3;
pub const STEP_MISSION_PARAMETERS: u8 = 4;

pub struct StepValidator;

impl StepValidator {
    /// Field errors blocking advancement past `step`. An empty map means the
    /// step is valid.
    ///
    /// Stateless and re-entrant. `now` is an explicit argument so repeated
    /// calls at the same instant agree; only the departure-date rule reads it.
    pub fn validate_step(
        step: u8,
        draft: &BookingDraft,
        now: DateTime<Utc>,
    ) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        match step {
            STEP_TRAVELER_PROFILE => {
                if draft.traveler_name.trim().is_empty() {
                    errors.insert("traveler_name".to_string(), "Name is required".to_string());
                }
                if draft.email.trim().is_empty() {
                    errors.insert("email".to_string(), "Email is required".to_string());
                }
                let email_pattern = Regex::new(EMAIL_PATTERN).unwrap();
                if !email_pattern.is_match(&draft.email) {
                    // Overwrites the required message for an empty email,
                    // matching the form's historical behavior.
                    errors.insert("email".to_string(), "Email is invalid".to_string());
                }
            }
            STEP_DESTINATION => {
                if draft.destination.is_none() {
                    errors.insert(
                        "destination".to_string(),
                        "Please select a destination".to_string(),
                    );
                }
            }
            STEP_SPACECRAFT => {
                if draft.spaceship.is_none() {
                    errors.insert(
                        "spaceship".to_string(),
                        "Please select a spaceship".to_string(),
                    );
                }
            }
            STEP_MISSION_PARAMETERS => {
                match draft.departure_date {
                    None => {
                        errors.insert(
                            "departure_date".to_string(),
                            "Departure date is required".to_string(),
                        );
                    }
                    Some(departure) if departure <= now.date_naive() => {
                        errors.insert(
                            "departure_date".to_string(),
                            "Departure date must be in the future".to_string(),
                        );
                    }
                    Some(_) => {}
                }
                match (draft.return_date, draft.departure_date) {
                    (None, _) => {
                        errors.insert(
                            "return_date".to_string(),
                            "Return date is required".to_string(),
                        );
                    }
                    (Some(ret), Some(departure)) if ret <= departure => {
                        errors.insert(
                            "return_date".to_string(),
                            "Return date must be after departure date".to_string(),
                        );
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        errors
    }

    /// Everything `confirm` requires: the four validated steps merged.
    pub fn validate_all(draft: &BookingDraft, now: DateTime<Utc>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for step in STEP_TRAVELER_PROFILE..=STEP_MISSION_PARAMETERS {
            errors.extend(Self::validate_step(step, draft, now));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2090, 7, 1, 12, 0, 0).unwrap()
    }

    fn named_draft() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.traveler_name = "Ellen Ripley".to_string();
        draft.email = "ripley@weyland.example".to_string();
        draft
    }

    #[test]
    fn test_traveler_profile_requires_name_and_email() {
        let draft = BookingDraft::default();
        let errors = StepValidator::validate_step(STEP_TRAVELER_PROFILE, &draft, fixed_now());
        assert_eq!(errors.get("traveler_name").unwrap(), "Name is required");
        // The pattern check runs after the required check, so an empty email
        // is reported as invalid.
        assert_eq!(errors.get("email").unwrap(), "Email is invalid");
    }

    #[test]
    fn test_traveler_profile_rejects_malformed_email() {
        let mut draft = named_draft();
        draft.email = "not-an-email".to_string();
        let errors = StepValidator::validate_step(STEP_TRAVELER_PROFILE, &draft, fixed_now());
        assert_eq!(errors.get("email").unwrap(), "Email is invalid");
    }

    #[test]
    fn test_traveler_profile_accepts_complete_input() {
        let errors =
            StepValidator::validate_step(STEP_TRAVELER_PROFILE, &named_draft(), fixed_now());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_departure_yesterday_fails_regardless_of_other_fields() {
        let now = fixed_now();
        let mut draft = named_draft();
        draft.departure_date = Some(now.date_naive() - Duration::days(1));
        draft.return_date = Some(now.date_naive() + Duration::days(30));

        let errors = StepValidator::validate_step(STEP_MISSION_PARAMETERS, &draft, now);
        assert_eq!(
            errors.get("departure_date").unwrap(),
            "Departure date must be in the future"
        );
    }

    #[test]
    fn test_departure_today_is_not_strictly_future() {
        let now = fixed_now();
        let mut draft = named_draft();
        draft.departure_date = Some(now.date_naive());
        draft.return_date = Some(now.date_naive() + Duration::days(5));

        let errors = StepValidator::validate_step(STEP_MISSION_PARAMETERS, &draft, now);
        assert!(errors.contains_key("departure_date"));
    }

    #[test]
    fn test_return_must_follow_departure() {
        let now = fixed_now();
        let mut draft = named_draft();
        draft.departure_date = Some(now.date_naive() + Duration::days(10));
        draft.return_date = Some(now.date_naive() + Duration::days(10));

        let errors = StepValidator::validate_step(STEP_MISSION_PARAMETERS, &draft, now);
        assert_eq!(
            errors.get("return_date").unwrap(),
            "Return date must be after departure date"
        );
    }

    #[test]
    fn test_mission_parameters_valid_window() {
        let now = fixed_now();
        let mut draft = named_draft();
        draft.departure_date = Some(now.date_naive() + Duration::days(10));
        draft.return_date = Some(now.date_naive() + Duration::days(24));

        let errors = StepValidator::validate_step(STEP_MISSION_PARAMETERS, &draft, now);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unvalidated_steps_pass() {
        let draft = BookingDraft::default();
        assert!(StepValidator::validate_step(5, &draft, fixed_now()).is_empty());
        assert!(StepValidator::validate_step(0, &draft, fixed_now()).is_empty());
    }

    #[test]
    fn test_validation_is_repeatable_at_a_fixed_instant() {
        let draft = named_draft();
        let now = fixed_now();
        let first = StepValidator::validate_all(&draft, now);
        let second = StepValidator::validate_all(&draft, now);
        assert_eq!(first, second);
    }
}
