use crate::models::destination::Destination;
use crate::models::spaceship::Spaceship;

const DESTINATIONS_JSON: &str = include_str!("../../data/destinations.json");
const SPACESHIPS_JSON: &str = include_str!("../../data/spaceships.json");

/// The combined set of destinations and spaceships available for selection.
/// The built-in catalog ships inside the binary; exoplanets fetched at
/// runtime may be appended, the catalog never shrinks.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
    spaceships: Vec<Spaceship>,
}

impl Catalog {
    /// Load the catalog embedded in the binary.
    pub fn load() -> Result<Self, serde_json::Error> {
        Ok(Self {
            destinations: serde_json::from_str(DESTINATIONS_JSON)?,
            spaceships: serde_json::from_str(SPACESHIPS_JSON)?,
        })
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn spaceships(&self) -> &[Spaceship] {
        &self.spaceships
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn spaceship(&self, id: &str) -> Option<&Spaceship> {
        self.spaceships.iter().find(|s| s.id == id)
    }

    pub fn destinations_with_tag(&self, tag: &str) -> Vec<&Destination> {
        self.destinations.iter().filter(|d| d.has_tag(tag)).collect()
    }

    /// Case-insensitive name substring search.
    pub fn search_destinations(&self, term: &str) -> Vec<&Destination> {
        let term = term.to_lowercase();
        self.destinations
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&term))
            .collect()
    }

    pub fn spaceships_with_feature(&self, feature: &str) -> Vec<&Spaceship> {
        self.spaceships
            .iter()
            .filter(|s| s.has_feature(feature))
            .collect()
    }

    /// Append destinations fetched at runtime. Ids already present win; the
    /// built-in catalog is never replaced by fetched data.
    pub fn extend_destinations(&mut self, extra: Vec<Destination>) {
        for destination in extra {
            if self.destination(&destination.id).is_none() {
                self.destinations.push(destination);
            }
        }
    }
}
