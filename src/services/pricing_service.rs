use crate::models::booking::BookingDraft;

/// Base cost assumed while no destination is selected.
pub const DEFAULT_BASE_COST: i64 = 10_000;
/// Multiplier assumed while no spaceship is selected.
pub const DEFAULT_COST_MULTIPLIER: f64 = 1.0;
/// Flat surcharge per selected activity.
pub const ACTIVITY_SURCHARGE: i64 = 2_000;

pub struct PricingService;

impl PricingService {
    /// Total trip cost in whole currency units.
    ///
    /// A draft with no destination or ship selected yet still prices: the
    /// defaults above stand in and the result is a partial estimate. Rounding
    /// happens once, after the passenger multiply, half away from zero.
    pub fn total_cost(draft: &BookingDraft) -> i64 {
        let base_cost = draft
            .destination
            .as_ref()
            .map_or(DEFAULT_BASE_COST, |d| d.base_cost);
        let multiplier = draft
            .spaceship
            .as_ref()
            .map_or(DEFAULT_COST_MULTIPLIER, |s| s.cost_multiplier);
        let lodging_surcharge = draft.lodging.surcharge();
        let activity_surcharge = draft.activities.len() as i64 * ACTIVITY_SURCHARGE;

        let subtotal =
            base_cost as f64 * multiplier + (lodging_surcharge + activity_surcharge) as f64;
        (subtotal * draft.passengers as f64).round() as i64
    }
}
