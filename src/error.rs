//! Error type shared by the catalog, matcher and collaborator adapters.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("Invalid radius for hazard {id}: {radius}")]
    InvalidRadius { id: u64, radius: f64 },
    #[error("Duplicate hazard id: {0}")]
    DuplicateHazardId(u64),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Route calculation failed: {0}")]
    RouteNotFound(String),
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Please enter both source and destination.")]
    MissingLocation,
}
