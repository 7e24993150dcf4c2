//! Seams to the external collaborators.
//!
//! The matching core works on materialized inputs only. Geocoding,
//! routing and catalog retrieval sit behind these traits so callers can
//! swap HTTP services for static data in tests.

use crate::catalog::HazardCatalog;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::polyline::RouteSummary;

/// Resolves a place name to a coordinate.
pub trait Geocoder {
    fn locate(&self, place: &str) -> Result<Coordinate>;
}

/// Computes a route between two coordinates.
pub trait RouteProvider {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary>;
}

/// Supplies the hazard catalog.
pub trait HazardSource {
    fn load(&self) -> Result<HazardCatalog>;
}
