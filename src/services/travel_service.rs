/// Kilometres in one light-year. Fixed so computed travel times reproduce
/// across the catalog and the tests.
pub const KM_PER_LIGHT_YEAR: f64 = 9.461e12;

pub struct TravelService;

impl TravelService {
    /// One-way travel time in whole days for a given distance and cruise
    /// speed. Callers decide whether round-trip doubling applies; none is
    /// applied here.
    ///
    /// A zero or negative speed yields 0 days rather than an error, so an
    /// unselected ship degrades quietly.
    pub fn travel_time_days(distance_light_years: f64, max_speed_kmh: f64) -> i64 {
        if max_speed_kmh <= 0.0 {
            return 0;
        }
        let distance_km = distance_light_years * KM_PER_LIGHT_YEAR;
        let hours = distance_km / max_speed_kmh;
        (hours / 24.0).round() as i64
    }
}
