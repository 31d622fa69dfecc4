use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A place the portal sells trips to. Catalog entries are immutable after
/// load; the booking draft stores a copy of the selected one.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Distance from Earth in light-years.
    pub distance: f64,
    pub base_cost: i64,
    pub tags: Vec<String>,
    pub activities: Vec<String>,
    pub description: String,
    /// Descriptive fields outside the required set (gravity, atmosphere,
    /// trivia). Nothing the booking core computes may depend on these.
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Destination {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
