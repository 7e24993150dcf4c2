//! Place-name lookup.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::traits::Geocoder;

/// Fixed table of known places, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct StaticGeocoder {
    places: HashMap<String, Coordinate>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self {
            places: HashMap::new(),
        }
    }

    pub fn with_place(mut self, name: &str, coord: Coordinate) -> Self {
        self.places.insert(name.trim().to_lowercase(), coord);
        self
    }
}

impl Default for StaticGeocoder {
    fn default() -> Self {
        Self::new()
            .with_place("chennai", Coordinate::new(13.0827, 80.2707))
            .with_place("kanchipuram", Coordinate::new(12.8342, 79.7043))
            .with_place("bengaluru", Coordinate::new(12.9716, 77.5946))
            .with_place("mysuru", Coordinate::new(12.2958, 76.6394))
    }
}

impl Geocoder for StaticGeocoder {
    fn locate(&self, place: &str) -> Result<Coordinate> {
        self.places
            .get(&place.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::LocationNotFound(place.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("safepath/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

/// Geocoder backed by a Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    fn locate(&self, place: &str) -> Result<Coordinate> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let results: Vec<NominatimPlace> = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", place), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        let coord = first_coordinate(&results).ok_or_else(|| Error::LocationNotFound(place.to_string()))?;
        debug!(lat = coord.lat, lon = coord.lon, "geocoded place");
        coord.validate()
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_coordinate(results: &[NominatimPlace]) -> Option<Coordinate> {
    let place = results.first()?;
    let lat = place.lat.parse().ok()?;
    let lon = place.lon.parse().ok()?;
    Some(Coordinate::new(lat, lon))
}
