//! Hazard catalog and proximity queries.
//!
//! The catalog is built once, validated, and never mutated afterwards.
//! Query results keep catalog order and contain each hazard at most once.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::hazard::Hazard;
use crate::haversine::{distance_meters, distance_to_segment_meters};
use crate::polyline::Polyline;
use crate::traits::HazardSource;

const BUILTIN_CATALOG: &str = include_str!("../data/hazards.json");

/// How a route is compared against hazard radii.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouteSampling {
    /// Only the polyline's sample points are tested. A hazard near the
    /// middle of a long segment but outside the radius of both endpoints is
    /// not detected.
    #[default]
    Vertices,
    /// Distance to each segment between consecutive points is tested.
    Segments,
}

/// Immutable, validated hazard catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HazardCatalog {
    hazards: Vec<Hazard>,
}

impl HazardCatalog {
    /// Validates every hazard and checks that ids are unique.
    pub fn new(hazards: Vec<Hazard>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(hazards.len());
        for hazard in &hazards {
            hazard.validate()?;
            if !seen.insert(hazard.id) {
                return Err(Error::DuplicateHazardId(hazard.id));
            }
            match &hazard.active_hours {
                Some(window) if !window.is_recognized() => warn!(
                    hazard_id = hazard.id,
                    active_hours = window.as_str(),
                    "unrecognized activity window, hazard will never be active"
                ),
                None => warn!(hazard_id = hazard.id, "hazard has no activity window"),
                _ => {}
            }
        }
        Ok(Self { hazards })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::new(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.as_ref().display(), hazards = catalog.len(), "loaded hazard catalog");
        Ok(catalog)
    }

    /// The bundled catalog of hazards around Chennai and Kanchipuram.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Hazard> {
        self.hazards.iter().find(|hazard| hazard.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.hazards)?)
    }

    pub fn near_point(&self, point: Coordinate) -> Vec<&Hazard> {
        near_point(point, &self.hazards)
    }

    pub fn near_polyline(&self, route: &Polyline, sampling: RouteSampling) -> Vec<&Hazard> {
        match sampling {
            RouteSampling::Vertices => near_polyline(route, &self.hazards),
            RouteSampling::Segments => near_polyline_segments(route, &self.hazards),
        }
    }
}

/// Hazards whose radius contains `point`, in catalog order.
pub fn near_point(point: Coordinate, hazards: &[Hazard]) -> Vec<&Hazard> {
    hazards
        .iter()
        .filter(|hazard| within_radius(hazard, point))
        .collect()
}

/// Hazards with at least one route sample point inside their radius, in
/// catalog order.
pub fn near_polyline<'a>(route: &Polyline, hazards: &'a [Hazard]) -> Vec<&'a Hazard> {
    let matched: Vec<&Hazard> = hazards
        .iter()
        .filter(|hazard| route.points().iter().any(|point| within_radius(hazard, *point)))
        .collect();
    debug!(points = route.len(), matched = matched.len(), "vertex proximity query");
    matched
}

/// Like [`near_polyline`], but measures distance to every segment of the
/// route. A single-point route is tested as a point.
pub fn near_polyline_segments<'a>(route: &Polyline, hazards: &'a [Hazard]) -> Vec<&'a Hazard> {
    let matched: Vec<&Hazard> = hazards
        .iter()
        .filter(|hazard| {
            if route.len() == 1 {
                return route.points().iter().any(|point| within_radius(hazard, *point));
            }
            let center = hazard.center();
            route
                .segments()
                .any(|(start, end)| distance_to_segment_meters(center, start, end) <= hazard.radius_meters)
        })
        .collect();
    debug!(points = route.len(), matched = matched.len(), "segment proximity query");
    matched
}

fn within_radius(hazard: &Hazard, point: Coordinate) -> bool {
    distance_meters(hazard.center(), point) <= hazard.radius_meters
}

/// Reads the catalog from a JSON file.
#[derive(Debug, Clone)]
pub struct FileHazardSource {
    pub path: PathBuf,
}

impl FileHazardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HazardSource for FileHazardSource {
    fn load(&self) -> Result<HazardCatalog> {
        HazardCatalog::from_path(&self.path)
    }
}

/// Serves the bundled catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHazardSource;

impl HazardSource for BuiltinHazardSource {
    fn load(&self) -> Result<HazardCatalog> {
        HazardCatalog::builtin()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000/hazards.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fetches the catalog over HTTP.
#[derive(Debug, Clone)]
pub struct HttpHazardSource {
    config: CatalogConfig,
    client: reqwest::blocking::Client,
}

impl HttpHazardSource {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl HazardSource for HttpHazardSource {
    #[instrument(skip(self), fields(url = %self.config.url))]
    fn load(&self) -> Result<HazardCatalog> {
        let hazards: Vec<Hazard> = self
            .client
            .get(&self.config.url)
            .send()?
            .error_for_status()?
            .json()?;
        let catalog = HazardCatalog::new(hazards)?;
        info!(hazards = catalog.len(), "fetched hazard catalog");
        Ok(catalog)
    }
}
