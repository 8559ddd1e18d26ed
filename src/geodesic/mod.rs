//! Geodesic measurements: polyline distances, bearings, great-circle
//! densification and circle tessellation.

pub mod arc;
pub mod circle;
pub mod distance;

use crate::proj::code::EPSG_4326;
use crate::proj::registry::ProjectionRegistry;
use crate::reproject::reproject;

/// Mean Earth radius used by the spherical distance formula, in metres.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// Distance formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formula {
    Haversine,
    Vincenty,
}

impl Formula {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "haversine" => Some(Self::Haversine),
            "vincenty" => Some(Self::Vincenty),
            _ => None,
        }
    }

    /// Length in metres of the polyline through `points` (lon/lat degrees).
    pub fn distance(&self, points: &[[f64; 2]]) -> Option<f64> {
        match self {
            Self::Haversine => Some(distance::haversine(points)),
            Self::Vincenty => distance::vincenty(points),
        }
    }
}

/// Length of a lon/lat polyline. Fewer than two points measure 0.
pub fn calculate_distance(points: &[[f64; 2]], formula: Formula) -> Option<f64> {
    if points.len() < 2 {
        return Some(0.0);
    }
    formula.distance(points)
}

/// Initial bearing from `p1` to `p2`, both given in `crs`, in degrees
/// clockwise from north within [0, 360).
pub fn calculate_azimuth(registry: &ProjectionRegistry, p1: [f64; 2], p2: [f64; 2], crs: &str) -> Option<f64> {
    let from = reproject(registry, p1, crs, EPSG_4326)?;
    let to = reproject(registry, p2, crs, EPSG_4326)?;

    let (lat1, lat2) = (from.y.to_radians(), to.y.to_radians());
    let dlon = (to.x - from.x).to_radians();
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    Some((y.atan2(x).to_degrees() + 360.0) % 360.0)
}
