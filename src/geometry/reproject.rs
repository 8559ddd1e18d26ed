use geojson::GeoJson;

use crate::error::ProjError;
use crate::geometry::try_for_each_geojson_position_mut;
use crate::proj::pipeline::Pipeline;
use crate::proj::registry::ProjectionRegistry;

/// Reproject every position of `geojson` from `source` to `dest`.
///
/// Positions keep any extra ordinates (elevation). Fails as a whole: the
/// first position that cannot be transformed aborts the traversal.
pub fn try_reproject_geojson(
    registry: &ProjectionRegistry,
    geojson: &GeoJson,
    source: &str,
    dest: &str,
) -> Result<GeoJson, ProjError> {
    let pipeline = Pipeline::new(registry, source, dest)?;
    let mut reprojected = geojson.clone();
    try_for_each_geojson_position_mut(&mut reprojected, &mut |position| {
        if position.len() < 2 {
            return Err(ProjError::InvalidParameter(format!(
                "position with {} ordinates",
                position.len()
            )));
        }
        let (x, y) = pipeline.transform(position[0], position[1])?;
        position[0] = x;
        position[1] = y;
        Ok(())
    })?;
    Ok(reprojected)
}

/// Reprojected copy of `geojson`.
///
/// When any position cannot be reprojected the failure is logged and an
/// unmodified copy of the input is returned.
pub fn reproject_geojson(registry: &ProjectionRegistry, geojson: &GeoJson, source: &str, dest: &str) -> GeoJson {
    match try_reproject_geojson(registry, geojson, source, dest) {
        Ok(reprojected) => reprojected,
        Err(e) => {
            log::warn!("could not reproject geojson from {source} to {dest}: {e}");
            geojson.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geojson::{Feature, Geometry, Value};

    const FEATURE: &str = r#"{
        "type": "Feature",
        "id": "roads.1",
        "properties": {"name": "main"},
        "geometry": {
            "type": "Point",
            "coordinates": [-112.50042920000001, 42.22829164089942]
        }
    }"#;

    #[test]
    fn test_reproject_feature_point() {
        let registry = ProjectionRegistry::new();
        let geojson: GeoJson = FEATURE.parse().unwrap();
        let reprojected = reproject_geojson(&registry, &geojson, "EPSG:4326", "EPSG:900913");

        let GeoJson::Feature(feature) = reprojected else {
            panic!("expected a feature");
        };
        let Some(Geometry { value: Value::Point(position), .. }) = &feature.geometry else {
            panic!("expected a point");
        };
        assert_relative_eq!(position[0], -12523490.492568726, epsilon = 1e-6);
        assert_relative_eq!(position[1], 5195238.005360028, epsilon = 1e-6);

        let GeoJson::Feature(original) = geojson else {
            unreachable!()
        };
        assert_eq!(feature.id, original.id);
        assert_eq!(feature.properties, original.properties);
    }

    #[test]
    fn test_reproject_nested_collection() {
        let registry = ProjectionRegistry::new();
        let geojson: GeoJson = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": null, "geometry": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Point", "coordinates": [10.0, 20.0, 5.0]},
                        {"type": "MultiPolygon", "coordinates": [[[[0, 0], [0, 1], [1, 1], [0, 0]]]]}
                    ]
                }},
                {"type": "Feature", "properties": null, "geometry": null}
            ]
        }"#
        .parse()
        .unwrap();

        let there = reproject_geojson(&registry, &geojson, "EPSG:4326", "EPSG:3857");
        assert_ne!(there, geojson);
        let back = reproject_geojson(&registry, &there, "EPSG:3857", "EPSG:4326");

        let (GeoJson::FeatureCollection(back), GeoJson::FeatureCollection(original)) = (back, geojson) else {
            panic!("expected feature collections");
        };
        assert!(back.features[1].geometry.is_none());
        let mut restored = Vec::new();
        let mut expected = Vec::new();
        crate::geometry::for_each_position(&back.features[0].geometry.as_ref().unwrap().value, &mut |p| {
            restored.push(p.to_vec())
        });
        crate::geometry::for_each_position(&original.features[0].geometry.as_ref().unwrap().value, &mut |p| {
            expected.push(p.to_vec())
        });
        assert_eq!(restored.len(), 5);
        for (r, e) in restored.iter().zip(&expected) {
            assert_eq!(r.len(), e.len());
            assert_relative_eq!(r[0], e[0], epsilon = 1e-9);
            assert_relative_eq!(r[1], e[1], epsilon = 1e-9);
        }
        // elevation untouched
        assert_eq!(restored[0][2], 5.0);
    }

    #[test]
    fn test_unknown_crs_returns_input() {
        let registry = ProjectionRegistry::new();
        let geojson = GeoJson::Feature(Feature {
            geometry: Some(Geometry::new(Value::Point(vec![1.0, 2.0]))),
            ..Default::default()
        });
        assert_eq!(reproject_geojson(&registry, &geojson, "EPSG:4326", "EPSG:3004"), geojson);
        assert!(try_reproject_geojson(&registry, &geojson, "EPSG:4326", "EPSG:3004").is_err());
    }

    #[test]
    fn test_failed_position_returns_input() {
        let registry = ProjectionRegistry::new();
        // the pole has no Web Mercator image
        let geojson = GeoJson::Geometry(Geometry::new(Value::LineString(vec![
            vec![1.0, 2.0],
            vec![0.0, 90.0],
        ])));
        assert_eq!(reproject_geojson(&registry, &geojson, "EPSG:4326", "EPSG:3857"), geojson);
    }
}
