//! Best-effort exoplanet catalog fetch.
//!
//! Queries the NASA Exoplanet Archive TAP endpoint for the nearest known
//! exoplanets and maps them into catalog destinations. The archive is flaky
//! about request styles, so a POST is attempted first and a GET second, both
//! under a bounded timeout. Any failure collapses into a built-in fallback
//! list; the booking flow never observes an error from this module.

use std::collections::BTreeMap;
use std::time::Duration;

use rand::Rng;
use serde_json::{json, Value};

use crate::models::destination::Destination;

const EXOPLANET_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
/// How many nearby systems to ask the archive for.
const FETCH_LIMIT: usize = 50;

const DESCRIPTIONS: [&str; 4] = [
    "A mysterious exoplanet in a distant star system.",
    "An intriguing world in a distant star system, perfect for space exploration.",
    "A fascinating planet that challenges our understanding of planetary formation.",
    "An exotic world with unique characteristics waiting to be explored.",
];

const ACTIVITY_POOL: [&str; 7] = [
    "Surface Exploration",
    "Atmospheric Analysis",
    "Mineral Collection",
    "Star Gazing",
    "Zero-G Sports",
    "Scientific Research",
    "Photography Expedition",
];

pub struct ExoplanetService {
    http_client: reqwest::Client,
}

impl ExoplanetService {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http_client })
    }

    /// Fetch the nearest known exoplanets as catalog destinations, falling
    /// back to a built-in list when the archive is unreachable or returns
    /// nothing usable.
    pub async fn fetch_destinations(&self) -> Vec<Destination> {
        match self.fetch_from_archive().await {
            Ok(destinations) if !destinations.is_empty() => {
                log::info!(
                    "Loaded {} exoplanets from the NASA archive",
                    destinations.len()
                );
                destinations
            }
            Ok(_) => {
                log::warn!("NASA archive returned no usable rows, using fallback exoplanets");
                Self::fallback_destinations()
            }
            Err(err) => {
                log::warn!("NASA archive unavailable ({}), using fallback exoplanets", err);
                Self::fallback_destinations()
            }
        }
    }

    async fn fetch_from_archive(&self) -> Result<Vec<Destination>, Box<dyn std::error::Error>> {
        let query = format!(
            "SELECT TOP {} pl_name,sy_dist,pl_rade,pl_masse,pl_orbper,pl_eqt,disc_year \
             FROM ps WHERE pl_name IS NOT NULL AND sy_dist IS NOT NULL AND sy_dist < 100 \
             ORDER BY sy_dist ASC",
            FETCH_LIMIT
        );

        let rows = match self.post_query(&query).await {
            Ok(rows) => rows,
            Err(post_err) => {
                log::warn!("Archive POST failed ({}), retrying as GET", post_err);
                self.get_query(&query).await?
            }
        };

        Ok(rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| Self::row_to_destination(index, row))
            .collect())
    }

    async fn post_query(&self, query: &str) -> Result<Vec<Vec<Value>>, Box<dyn std::error::Error>> {
        let response = self
            .http_client
            .post(EXOPLANET_TAP_URL)
            .form(&[("query", query), ("format", "json")])
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    async fn get_query(&self, query: &str) -> Result<Vec<Vec<Value>>, Box<dyn std::error::Error>> {
        let response = self
            .http_client
            .get(EXOPLANET_TAP_URL)
            .query(&[("query", query), ("format", "json")])
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    /// Map one archive row (pl_name, sy_dist, pl_rade, pl_masse, pl_orbper,
    /// pl_eqt, disc_year) into a destination. Rows without a name or
    /// distance are dropped.
    fn row_to_destination(index: usize, row: &[Value]) -> Option<Destination> {
        let name = row.first()?.as_str()?.to_string();
        let distance = row.get(1)?.as_f64()?;
        let temperature = row.get(5).and_then(Value::as_f64);
        let discovery_year = row.get(6).and_then(Value::as_i64);

        let mut rng = rand::thread_rng();
        let base_cost = (distance * 500.0).floor() as i64 + rng.gen_range(0..20_000) + 15_000;

        let activity_count = rng.gen_range(2..=5);
        let activities = ACTIVITY_POOL
            .iter()
            .take(activity_count)
            .map(|a| a.to_string())
            .collect();

        let mut metadata = BTreeMap::new();
        metadata.insert("type".to_string(), json!("exoplanet"));
        metadata.insert(
            "atmosphere".to_string(),
            json!(Self::atmosphere_for(temperature)),
        );
        if let Some(temp) = temperature {
            metadata.insert(
                "temperature".to_string(),
                json!(format!("{}°C", (temp - 273.15).round() as i64)),
            );
        }
        if let Some(year) = discovery_year {
            metadata.insert("discovery_year".to_string(), json!(year));
        }
        metadata.insert("population".to_string(), json!("Uninhabited"));

        Some(Destination {
            id: format!("exo-{}", index),
            name,
            distance,
            base_cost,
            tags: Self::tags_for(temperature, &mut rng),
            activities,
            description: DESCRIPTIONS[index % DESCRIPTIONS.len()].to_string(),
            metadata,
        })
    }

    /// Tag synthesis from equilibrium temperature in Kelvin, with a sprinkle
    /// of chance for the purely promotional tags.
    fn tags_for(temperature: Option<f64>, rng: &mut impl Rng) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(temp) = temperature {
            if temp > 273.0 && temp < 373.0 {
                tags.push("Has Water".to_string());
            }
            if temp < 200.0 {
                tags.push("Cold".to_string());
            }
            if temp > 400.0 {
                tags.push("Hot".to_string());
            }
            if temp > 250.0 && temp < 350.0 {
                tags.push("Kid-Friendly".to_string());
            }
        }
        if rng.gen::<f64>() > 0.7 {
            tags.push("Adventure".to_string());
        }
        if rng.gen::<f64>() > 0.8 {
            tags.push("Romantic".to_string());
        }
        tags
    }

    fn atmosphere_for(temperature: Option<f64>) -> &'static str {
        match temperature {
            None => "Unknown",
            Some(temp) if temp < 200.0 => "Frozen, requires heating",
            Some(temp) if temp > 400.0 => "Toxic, requires cooling",
            Some(temp) if temp > 250.0 && temp < 350.0 => "Potentially breathable",
            Some(_) => "Requires life support",
        }
    }

    /// Curated real exoplanets served when the archive is unreachable.
    pub fn fallback_destinations() -> Vec<Destination> {
        let planets = [
            (
                "kepler-452b",
                "Kepler-452b",
                1402.0,
                45_000,
                vec!["Has Water", "Kid-Friendly"],
                vec!["Surface Analysis", "Climate Study", "Atmospheric Research", "Stellar Observation"],
                "Earth's cousin, a potentially habitable super-Earth in the habitable zone of a sun-like star.",
                2015,
            ),
            (
                "proxima-b",
                "Proxima Centauri b",
                4.24,
                35_000,
                vec!["Adventure", "Has Water"],
                vec!["Proximity Research", "Stellar Observation", "Red Dwarf Analysis"],
                "The closest exoplanet to Earth, orbiting in the habitable zone of our nearest stellar neighbor.",
                2016,
            ),
            (
                "trappist-1e",
                "TRAPPIST-1e",
                40.0,
                42_000,
                vec!["Has Water"],
                vec!["Multi-planet Observation", "System Dynamics Study", "Habitability Research"],
                "One of seven Earth-sized planets in the TRAPPIST-1 system, potentially habitable.",
                2017,
            ),
            (
                "k2-18b",
                "K2-18b",
                124.0,
                38_000,
                vec!["Has Water"],
                vec!["Atmospheric Research", "Water Detection Study", "Spectroscopy"],
                "A sub-Neptune exoplanet with water vapor detected in its atmosphere.",
                2015,
            ),
            (
                "toi-715b",
                "TOI-715b",
                137.0,
                41_000,
                vec!["Adventure"],
                vec!["New World Exploration", "Habitability Assessment", "Future Research"],
                "A recently discovered super-Earth in the habitable zone, found by TESS.",
                2024,
            ),
        ];

        planets
            .into_iter()
            .map(
                |(id, name, distance, base_cost, tags, activities, description, year)| {
                    let mut metadata = BTreeMap::new();
                    metadata.insert("type".to_string(), json!("exoplanet"));
                    metadata.insert("population".to_string(), json!("Uninhabited"));
                    metadata.insert("discovery_year".to_string(), json!(year));

                    Destination {
                        id: id.to_string(),
                        name: name.to_string(),
                        distance,
                        base_cost,
                        tags: tags.into_iter().map(String::from).collect(),
                        activities: activities.into_iter().map(String::from).collect(),
                        description: description.to_string(),
                        metadata,
                    }
                },
            )
            .collect()
    }
}
