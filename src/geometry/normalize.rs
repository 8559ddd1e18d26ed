//! Longitude wrapping into [-180, 180].

use geojson::Geometry;
use serde::{Deserialize, Serialize};

use crate::geometry::for_each_position_mut;

/// A map-click style coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Wrap a longitude into [-180, 180]. Values already at ±180 are kept.
pub fn normalize_lng(lng: f64) -> f64 {
    let wrapped = lng / 360.0 % 1.0 * 360.0;
    if wrapped < -180.0 {
        wrapped + 360.0
    } else if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Copy of `geometry` with every longitude wrapped. Latitudes, extra
/// ordinates and structure are kept.
pub fn normalize_geometry(geometry: &Geometry) -> Geometry {
    let mut normalized = geometry.clone();
    for_each_position_mut(&mut normalized.value, |position| {
        if let Some(lng) = position.first_mut() {
            *lng = normalize_lng(*lng);
        }
    });
    normalized
}

/// Wrap the longitude of one coordinate; the latitude is not touched.
pub fn normalized_lat_lng(point: LatLng) -> LatLng {
    LatLng {
        lat: point.lat,
        lng: normalize_lng(point.lng),
    }
}

/// `[lon, lat]` of a clicked point, longitude wrapped.
pub fn lon_lat_from_point(point: LatLng) -> [f64; 2] {
    let LatLng { lat, lng } = normalized_lat_lng(point);
    [lng, lat]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geojson::Value;

    #[test]
    fn test_normalize_lng() {
        assert_eq!(normalize_lng(9.0), 9.0);
        assert_eq!(normalize_lng(-210.0), 150.0);
        assert_eq!(normalize_lng(-280.0), 80.0);
        assert_eq!(normalize_lng(280.0), -80.0);
        assert_eq!(normalize_lng(180.0), 180.0);
        assert_eq!(normalize_lng(-180.0), -180.0);
        assert_eq!(normalize_lng(540.0), 180.0);
    }

    #[test]
    fn test_normalized_lat_lng() {
        let point = normalized_lat_lng(LatLng { lat: 45.0, lng: 9.0 });
        assert_eq!(point, LatLng { lat: 45.0, lng: 9.0 });

        for lng in [369.0, -351.0] {
            let point = normalized_lat_lng(LatLng { lat: 45.0, lng });
            assert_eq!(point.lat, 45.0);
            assert_relative_eq!(point.lng, 9.0, epsilon = 1e-9);
        }

        // no polar wrap
        assert_eq!(normalized_lat_lng(LatLng { lat: 95.0, lng: 0.0 }).lat, 95.0);
    }

    #[test]
    fn test_lon_lat_from_point() {
        assert_eq!(lon_lat_from_point(LatLng { lat: 40.0, lng: -280.0 }), [80.0, 40.0]);
    }

    #[test]
    fn test_normalize_point() {
        let geometry = Geometry::new(Value::Point(vec![-210.0, 2.0]));
        let normalized = normalize_geometry(&geometry);
        assert_ne!(normalized, geometry);
        assert_eq!(normalized.value, Value::Point(vec![150.0, 2.0]));
    }

    #[test]
    fn test_normalize_line_string() {
        let geometry = Geometry::new(Value::LineString(vec![
            vec![-230.0, 10.0],
            vec![-210.0, 30.0],
            vec![-240.0, 40.0],
        ]));
        assert_eq!(
            normalize_geometry(&geometry).value,
            Value::LineString(vec![
                vec![130.00000000000003, 10.0],
                vec![150.0, 30.0],
                vec![120.0, 40.0],
            ])
        );
    }

    #[test]
    fn test_normalize_polygon() {
        let geometry = Geometry::new(Value::Polygon(vec![
            vec![
                vec![-190.0, 10.0],
                vec![-192.0, 45.0],
                vec![196.0, 40.0],
                vec![-198.0, 20.0],
                vec![-200.0, 10.0],
            ],
            vec![vec![200.0, 30.0], vec![210.0, 35.0], vec![-220.0, 20.0], vec![230.0, 30.0]],
        ]));
        assert_eq!(
            normalize_geometry(&geometry).value,
            Value::Polygon(vec![
                vec![
                    vec![170.0, 10.0],
                    vec![168.0, 45.0],
                    vec![-164.00000000000003, 40.0],
                    vec![161.99999999999997, 20.0],
                    vec![160.0, 10.0],
                ],
                vec![
                    vec![-160.0, 30.0],
                    vec![-150.0, 35.0],
                    vec![139.99999999999997, 20.0],
                    vec![-130.00000000000003, 30.0],
                ],
            ])
        );
    }

    #[test]
    fn test_normalize_multi_polygon() {
        let geometry = Geometry::new(Value::MultiPolygon(vec![
            vec![vec![vec![230.0, 20.0], vec![545.0, 40.0], vec![-210.0, 40.0], vec![330.0, 20.0]]],
            vec![vec![
                vec![-215.0, 5.0],
                vec![240.0, 10.0],
                vec![310.0, 20.0],
                vec![-205.0, 10.0],
                vec![215.0, 5.0],
            ]],
        ]));
        assert_eq!(
            normalize_geometry(&geometry).value,
            Value::MultiPolygon(vec![
                vec![vec![
                    vec![-130.00000000000003, 20.0],
                    vec![-175.00000000000003, 40.0],
                    vec![150.0, 40.0],
                    vec![-30.0, 20.0],
                ]],
                vec![vec![
                    vec![145.0, 5.0],
                    vec![-120.0, 10.0],
                    vec![-50.0, 20.0],
                    vec![155.0, 10.0],
                    vec![-145.0, 5.0],
                ]],
            ])
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let geometry = Geometry::new(Value::GeometryCollection(vec![
            Geometry::new(Value::MultiPoint(vec![
                vec![-210.0, 40.0],
                vec![-140.0, 30.0],
                vec![-220.0, 20.0],
                vec![-230.0, 10.0],
            ])),
            Geometry::new(Value::MultiLineString(vec![vec![
                vec![-189.0, 40.0],
                vec![230.0, 10.0],
            ]])),
        ]));
        let once = normalize_geometry(&geometry);
        let twice = normalize_geometry(&once);
        let mut first = Vec::new();
        let mut second = Vec::new();
        crate::geometry::for_each_position(&once.value, &mut |p| first.push(p[0]));
        crate::geometry::for_each_position(&twice.value, &mut |p| second.push(p[0]));
        assert_eq!(first.len(), 6);
        for (a, b) in first.iter().zip(&second) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
            assert!((-180.0..=180.0).contains(a));
        }
        assert_eq!(first[0], 150.0);
        assert_eq!(first[4], 171.0);
    }
}
