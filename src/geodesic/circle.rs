//! Circle tessellation on the sphere.

use std::f64::consts::PI;

use geojson::{Geometry, Value};

/// Sphere radius for circle offsets, in metres.
const CIRCLE_EARTH_RADIUS: f64 = 6_371_008.8;
/// Metres per degree of arc used to turn a radius in degrees into a distance.
const METRES_PER_DEGREE: f64 = 111_325.0;

pub const DEFAULT_CIRCLE_SIDES: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CircleUnit {
    #[default]
    Degrees,
    Meters,
}

impl CircleUnit {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "degrees" => Some(Self::Degrees),
            "meters" | "metres" => Some(Self::Meters),
            _ => None,
        }
    }

    /// Angular distance, in radians, of `length` in this unit.
    fn to_radians(self, length: f64) -> f64 {
        match self {
            Self::Degrees => length / (CIRCLE_EARTH_RADIUS / METRES_PER_DEGREE),
            Self::Meters => length / CIRCLE_EARTH_RADIUS,
        }
    }
}

fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0) * PI / 180.0
}

fn radians_to_degrees(radians: f64) -> f64 {
    (radians % (2.0 * PI)) * 180.0 / PI
}

/// Point at angular `distance` from `origin` along `bearing` (degrees).
fn destination(origin: [f64; 2], distance: f64, bearing: f64) -> [f64; 2] {
    let lon1 = degrees_to_radians(origin[0]);
    let lat1 = degrees_to_radians(origin[1]);
    let bearing = degrees_to_radians(bearing);

    let lat2 = (lat1.sin() * distance.cos() + lat1.cos() * distance.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * distance.sin() * lat1.cos()).atan2(distance.cos() - lat1.sin() * lat2.sin());
    [radians_to_degrees(lon2), radians_to_degrees(lat2)]
}

/// Polygon approximating the circle of `radius` around `center` (lon/lat).
///
/// `None` when center or radius is missing, or when fewer than three sides
/// are asked for. The ring has `sides + 1` positions, the first repeated last.
pub fn polygon_from_circle(
    center: Option<[f64; 2]>,
    radius: Option<f64>,
    unit: CircleUnit,
    sides: usize,
) -> Option<Geometry> {
    let (center, radius) = (center?, radius?);
    if sides < 3 {
        return None;
    }
    let distance = unit.to_radians(radius);
    let mut ring: Vec<Vec<f64>> = (0..sides)
        .map(|i| destination(center, distance, i as f64 * -360.0 / sides as f64).to_vec())
        .collect();
    let first = ring[0].clone();
    ring.push(first);
    Some(Geometry::new(Value::Polygon(vec![ring])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(geometry: &Geometry) -> &Vec<Vec<f64>> {
        match &geometry.value {
            Value::Polygon(rings) => &rings[0],
            other => panic!("expected a polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_arguments() {
        assert!(polygon_from_circle(None, None, CircleUnit::Degrees, DEFAULT_CIRCLE_SIDES).is_none());
        assert!(polygon_from_circle(Some([40.0, 15.0]), None, CircleUnit::Degrees, DEFAULT_CIRCLE_SIDES).is_none());
        assert!(polygon_from_circle(None, Some(6.13), CircleUnit::Degrees, DEFAULT_CIRCLE_SIDES).is_none());
        let polygon = polygon_from_circle(Some([40.0, 15.0]), Some(6.13), CircleUnit::default(), DEFAULT_CIRCLE_SIDES);
        assert_eq!(ring(&polygon.unwrap()).len(), DEFAULT_CIRCLE_SIDES + 1);
    }

    #[test]
    fn test_radius_in_degrees() {
        let polygon = polygon_from_circle(Some([40.0, 15.0]), Some(6.13), CircleUnit::Degrees, 50).unwrap();
        let ring = ring(&polygon);
        assert_eq!(ring.len(), 51);
        assert_eq!(ring[0][0], 40.0);
        assert_relative_eq!(ring[0][1], 21.137162260837176, epsilon = 1e-9);
        assert_eq!(ring[50], ring[0]);
        assert_relative_eq!(ring[20][0], 36.34143838801184, epsilon = 1e-9);
        assert_relative_eq!(ring[20][1], 10.00834658343667, epsilon = 1e-9);
    }

    #[test]
    fn test_radius_in_meters() {
        let polygon = polygon_from_circle(Some([40.0, 15.0]), Some(6000.0), CircleUnit::Meters, 50).unwrap();
        let ring = ring(&polygon);
        assert_eq!(ring.len(), 51);
        assert_eq!(ring[0][0], 40.0);
        assert_relative_eq!(ring[0][1], 15.053959221823476, epsilon = 1e-9);
        assert_eq!(ring[50], ring[0]);
        assert_relative_eq!(ring[20][0], 39.96717142640955, epsilon = 1e-9);
        assert_relative_eq!(ring[20][1], 14.956343723081114, epsilon = 1e-9);
    }

    #[test]
    fn test_too_few_sides() {
        assert!(polygon_from_circle(Some([0.0, 0.0]), Some(1.0), CircleUnit::Degrees, 2).is_none());
    }

    #[test]
    fn test_unit_from_name() {
        assert_eq!(CircleUnit::from_name("meters"), Some(CircleUnit::Meters));
        assert_eq!(CircleUnit::from_name("Degrees"), Some(CircleUnit::Degrees));
        assert_eq!(CircleUnit::from_name("miles"), None);
    }
}
