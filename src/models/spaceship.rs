use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A vessel available for assignment. Immutable catalog entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Spaceship {
    pub id: String,
    pub name: String,
    /// Cruise speed in km/h.
    pub max_speed: f64,
    pub cost_multiplier: f64,
    pub capacity: u32,
    /// 0 to 10.
    pub comfort_level: u8,
    /// Named amenity flags (cryosleep, wifi, restaurant, ...).
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    pub description: String,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Spaceship {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }
}
