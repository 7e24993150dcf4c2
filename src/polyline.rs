//! Route polyline as decoded coordinate samples.
//!
//! Routing services return GeoJSON `[lon, lat]` pairs; conversion to
//! `[lat, lon]` happens once at the boundary, in [`Polyline::from_geojson`].

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// An ordered sequence of route sample points.
///
/// Serializes as an array of `[latitude, longitude]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON-ordered `[lon, lat]` pairs.
    pub fn from_geojson(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates
                .iter()
                .map(|[lon, lat]| Coordinate::from_lon_lat(*lon, *lat))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Coordinate::from).collect())
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A computed route: geometry plus the figures shown alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub polyline: Polyline,
    pub distance_km: f64,
    pub duration_min: f64,
    pub steps: Vec<String>,
}

impl RouteSummary {
    /// Google Maps directions link from the first to the last route point.
    pub fn navigation_url(&self) -> Option<String> {
        if self.polyline.len() < 2 {
            return None;
        }
        let start = self.polyline.first()?;
        let end = self.polyline.last()?;
        Some(format!(
            "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
            start.lat, start.lon, end.lat, end.lon
        ))
    }
}
