//! Route hazard matching.
//!
//! Two entry points with deliberately different filters:
//!
//! - [`match_along_route`] surfaces every hazard geometrically near the
//!   route, whatever its activity window says.
//! - [`match_near_point`] surfaces hazards near a single location that are
//!   also active at the given instant.
//!
//! Whether route matching should also honour activity windows is an open
//! product decision; the two flows are kept distinct until it is made.

use chrono::{Datelike, Timelike};
use tracing::{debug, info, instrument};

use crate::catalog::{self, HazardCatalog, RouteSampling};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::hazard::Hazard;
use crate::polyline::{Polyline, RouteSummary};
use crate::time_window;
use crate::traits::{Geocoder, RouteProvider};

pub const SAFE_ROUTE_MESSAGE: &str = "No major hazards detected. Safe route.";

/// Hazards near any sample point of `route`, in catalog order.
pub fn match_along_route<'a>(route: &Polyline, hazards: &'a [Hazard]) -> Vec<&'a Hazard> {
    catalog::near_polyline(route, hazards)
}

/// Hazards within radius of `point` whose activity window covers `now`.
pub fn match_near_point<'a, T>(point: Coordinate, hazards: &'a [Hazard], now: &T) -> Vec<&'a Hazard>
where
    T: Datelike + Timelike,
{
    catalog::near_point(point, hazards)
        .into_iter()
        .filter(|hazard| time_window::is_active(hazard.active_hours.as_ref(), now))
        .collect()
}

/// Spoken/displayed summary for a set of matched hazards.
pub fn alert_message(hazards: &[&Hazard]) -> String {
    if hazards.is_empty() {
        return SAFE_ROUTE_MESSAGE.to_string();
    }
    let messages: Vec<String> = hazards
        .iter()
        .map(|hazard| format!("{} at {}", hazard.description, hazard.name))
        .collect();
    format!("Attention: {}", messages.join(". "))
}

#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub sampling: RouteSampling,
}

/// Matcher bound to one catalog.
///
/// Unlike the free functions, inputs coming from outside (route points,
/// query locations) are validated before matching.
#[derive(Debug, Clone)]
pub struct RouteHazardMatcher<'a> {
    catalog: &'a HazardCatalog,
    options: MatchOptions,
}

impl<'a> RouteHazardMatcher<'a> {
    pub fn new(catalog: &'a HazardCatalog) -> Self {
        Self::with_options(catalog, MatchOptions::default())
    }

    pub fn with_options(catalog: &'a HazardCatalog, options: MatchOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &'a HazardCatalog {
        self.catalog
    }

    pub fn match_along_route(&self, route: &Polyline) -> Result<Vec<&'a Hazard>> {
        for point in route.points() {
            point.validate()?;
        }
        let matched = self.catalog.near_polyline(route, self.options.sampling);
        debug!(
            sampling = ?self.options.sampling,
            matched = matched.len(),
            "matched hazards along route"
        );
        Ok(matched)
    }

    pub fn match_near_point<T>(&self, point: Coordinate, now: &T) -> Result<Vec<&'a Hazard>>
    where
        T: Datelike + Timelike,
    {
        let point = point.validate()?;
        let matched = match_near_point(point, self.catalog.hazards(), now);
        debug!(lat = point.lat, lon = point.lon, matched = matched.len(), "matched hazards near point");
        Ok(matched)
    }
}

/// Outcome of planning a route between two named places.
#[derive(Debug, Clone)]
pub struct SafeRoute<'a> {
    pub from: Coordinate,
    pub to: Coordinate,
    pub route: RouteSummary,
    pub hazards: Vec<&'a Hazard>,
    pub message: String,
}

impl SafeRoute<'_> {
    pub fn hazard_ids(&self) -> Vec<u64> {
        self.hazards.iter().map(|hazard| hazard.id).collect()
    }
}

/// Geocodes both places, fetches a route and matches hazards along it.
///
/// Blank place names are rejected before any lookup.
#[instrument(skip(geocoder, router, matcher))]
pub fn plan_safe_route<'a, G, R>(
    geocoder: &G,
    router: &R,
    matcher: &RouteHazardMatcher<'a>,
    from: &str,
    to: &str,
) -> Result<SafeRoute<'a>>
where
    G: Geocoder,
    R: RouteProvider,
{
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(Error::MissingLocation);
    }
    let from_coords = geocoder.locate(from)?;
    let to_coords = geocoder.locate(to)?;
    let route = router.route(from_coords, to_coords)?;
    let hazards = matcher.match_along_route(&route.polyline)?;
    let message = alert_message(&hazards);

    info!(
        distance_km = route.distance_km,
        hazards = hazards.len(),
        "planned route"
    );

    Ok(SafeRoute {
        from: from_coords,
        to: to_coords,
        route,
        hazards,
        message,
    })
}
