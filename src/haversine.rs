//! Great-circle distance helpers.
//!
//! All distances are in meters on a spherical Earth. Inputs are not
//! validated: NaN coordinates produce NaN distances, which compare false
//! against any radius.

use crate::coordinate::Coordinate;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates in meters.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());

    EARTH_RADIUS_M * c
}

/// Distance in meters from `point` to the segment `start`-`end`.
///
/// The closest point is located on a local equirectangular projection
/// centred on `point` and then measured with [`distance_meters`]. The
/// result never exceeds the distance to either endpoint.
pub fn distance_to_segment_meters(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let to_start = distance_meters(point, start);
    let to_end = distance_meters(point, end);
    let endpoint_min = to_start.min(to_end);

    let cos_lat = point.lat.to_radians().cos();
    let project = |c: Coordinate| {
        (
            (c.lon - point.lon).to_radians() * cos_lat,
            (c.lat - point.lat).to_radians(),
        )
    };

    let (ax, ay) = project(start);
    let (bx, by) = project(end);
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 || !len_sq.is_finite() {
        return endpoint_min;
    }

    // Parameter of the foot of the perpendicular from the origin (the point).
    let t = (-(ax * dx + ay * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Coordinate::new(
        start.lat + (end.lat - start.lat) * t,
        start.lon + (end.lon - start.lon) * t,
    );

    distance_meters(point, closest).min(endpoint_min)
}
