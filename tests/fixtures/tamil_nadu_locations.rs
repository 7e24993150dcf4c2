//! Named locations along the Chennai - Kanchipuram - Chengalpattu corridor.
#![allow(dead_code)]

use safepath::{Coordinate, Hazard, HazardCategory};

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

pub const CHENNAI: Location = Location::new("Chennai", 13.0827, 80.2707);
pub const KANCHIPURAM: Location = Location::new("Kanchipuram", 12.8342, 79.7043);
pub const BENGALURU: Location = Location::new("Bengaluru", 12.9716, 77.5946);
pub const MYSURU: Location = Location::new("Mysuru", 12.2958, 76.6394);
pub const CHENGALPATTU: Location = Location::new("Chengalpattu", 12.6819, 79.9888);
pub const SRIPERUMBUDUR: Location = Location::new("Sriperumbudur", 12.9675, 79.9419);

/// Inside the Kanchipuram Flood Zone radius, ~460 m from the market.
pub const KANCHIPURAM_TEMPLE_STREET: Location = Location::new("Kanchipuram Temple Street", 12.834, 79.704);

/// Offshore, far from every bundled hazard.
pub const BAY_OF_BENGAL: Location = Location::new("Bay of Bengal", 13.5, 80.5);

/// Builder for hazards with sensible defaults.
pub struct HazardBuilder {
    hazard: Hazard,
}

impl HazardBuilder {
    pub fn new(id: u64, at: Location) -> Self {
        Self {
            hazard: Hazard {
                id,
                category: HazardCategory::new(HazardCategory::CONSTRUCTION),
                name: at.name.to_string(),
                lat: at.lat,
                lon: at.lon,
                radius_meters: 1_000.0,
                description: format!("Hazard near {}", at.name),
                active_hours: Some("All day".into()),
                icon: None,
            },
        }
    }

    pub fn radius(mut self, meters: f64) -> Self {
        self.hazard.radius_meters = meters;
        self
    }

    pub fn active_hours(mut self, window: &str) -> Self {
        self.hazard.active_hours = Some(window.into());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.hazard.category = HazardCategory::new(category);
        self
    }

    pub fn build(self) -> Hazard {
        self.hazard
    }
}
