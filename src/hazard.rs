//! Hazard catalog records.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::time_window::ActivityWindow;

/// Icon shown when a hazard carries none of its own.
pub const DEFAULT_ICON: &str = "⚠️";

/// Hazard category.
///
/// Kept as an open string so catalogs can introduce new categories; the
/// known ones are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardCategory(String);

impl HazardCategory {
    pub const CONSTRUCTION: &'static str = "construction";
    pub const ACCIDENT: &'static str = "accident";
    pub const RAILWAY_CROSSING: &'static str = "railway_crossing";
    pub const WEATHER: &'static str = "weather";
    pub const CROWDED_AREA: &'static str = "crowded_area";

    const KNOWN: [&'static str; 5] = [
        Self::CONSTRUCTION,
        Self::ACCIDENT,
        Self::RAILWAY_CROSSING,
        Self::WEATHER,
        Self::CROWDED_AREA,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl fmt::Display for HazardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stationary hazard with a proximity radius and an activity window.
///
/// Field names follow the catalog JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u64,
    #[serde(rename = "type")]
    pub category: HazardCategory,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub lat: f64,
    #[serde(serialize_with = "serialize_number")]
    pub lon: f64,
    #[serde(serialize_with = "serialize_number")]
    pub radius_meters: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_hours: Option<ActivityWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Hazard {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn display_icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Checks the center coordinate and that the radius is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        self.center().validate()?;
        if !(self.radius_meters.is_finite() && self.radius_meters > 0.0) {
            return Err(Error::InvalidRadius {
                id: self.id,
                radius: self.radius_meters,
            });
        }
        Ok(())
    }
}

/// Writes whole numbers without a fractional part, so `6000` in a catalog
/// is written back as `6000` rather than `6000.0`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    // Largest magnitude below which every integer is exactly representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
