//! safepath: hazard matching for planned routes.
//!
//! Given a route polyline and a hazard catalog, finds the hazards within
//! range of the route, and the hazards near a single location that are
//! active at a given time. Geocoding, routing and catalog retrieval are
//! external collaborators behind the traits in [`traits`].

pub mod catalog;
pub mod command;
pub mod coordinate;
pub mod error;
pub mod geocode;
pub mod hazard;
pub mod haversine;
pub mod matcher;
pub mod osrm;
pub mod osrm_data;
pub mod polyline;
pub mod recent;
pub mod time_window;
pub mod traits;

pub use catalog::{HazardCatalog, RouteSampling};
pub use command::Command;
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use hazard::{Hazard, HazardCategory};
pub use haversine::distance_meters;
pub use matcher::{
    alert_message, match_along_route, match_near_point, plan_safe_route, MatchOptions,
    RouteHazardMatcher, SafeRoute,
};
pub use polyline::{Polyline, RouteSummary};
pub use time_window::{is_active, ActivityWindow};
