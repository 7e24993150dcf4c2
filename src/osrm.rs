//! OSRM HTTP adapter for route geometry.

use serde::Deserialize;
use tracing::{info, instrument};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::polyline::{Polyline, RouteSummary};
use crate::traits::RouteProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson&steps=true",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.lon,
            from.lat,
            to.lon,
            to.lat
        )
    }
}

impl RouteProvider for OsrmClient {
    #[instrument(skip(self))]
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary> {
        let body: OsrmRouteResponse = self
            .client
            .get(self.route_url(from, to))
            .send()?
            .error_for_status()?
            .json()?;

        let summary = summarize(body)?;
        info!(
            points = summary.polyline.len(),
            distance_km = summary.distance_km,
            "fetched route"
        );
        Ok(summary)
    }
}

fn summarize(body: OsrmRouteResponse) -> Result<RouteSummary> {
    let route = body
        .routes
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| Error::RouteNotFound(body.code.clone()))?;

    let steps = route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .map(OsrmStep::instruction)
        .collect();

    Ok(RouteSummary {
        polyline: Polyline::from_geojson(&route.geometry.coordinates),
        distance_km: route.distance / 1000.0,
        duration_min: route.duration / 60.0,
        steps,
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    code: String,
    routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    #[serde(default)]
    name: String,
    maneuver: OsrmManeuver,
}

#[derive(Debug, Deserialize)]
struct OsrmManeuver {
    #[serde(rename = "type")]
    kind: String,
    modifier: Option<String>,
    instruction: Option<String>,
}

impl OsrmStep {
    /// Uses the server-provided instruction text when present, otherwise
    /// builds one from the maneuver type, modifier and road name.
    fn instruction(&self) -> String {
        if let Some(text) = &self.maneuver.instruction {
            return text.clone();
        }
        let mut text = self.maneuver.kind.clone();
        if let Some(modifier) = &self.maneuver.modifier {
            text.push(' ');
            text.push_str(modifier);
        }
        if !self.name.is_empty() {
            text.push_str(" onto ");
            text.push_str(&self.name);
        }
        text
    }
}
