//! GeoJSON geometry helpers: reprojection, extent, axis order and
//! longitude normalization.
//!
//! All of them are built on the position walkers below, which visit every
//! coordinate tuple of a [`geojson::Value`] at any nesting depth.

pub mod axes;
pub mod extent;
pub mod normalize;
pub mod reproject;

use std::convert::Infallible;

use geojson::{GeoJson, Geometry, Position, Value};

/// Visit every position of `value`, stopping at the first error.
pub(crate) fn try_for_each_position_mut<E, F>(value: &mut Value, f: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Position) -> Result<(), E>,
{
    match value {
        Value::Point(position) => f(position),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            positions.iter_mut().try_for_each(|p| f(p))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .iter_mut()
            .flat_map(|line| line.iter_mut())
            .try_for_each(|p| f(p)),
        Value::MultiPolygon(polygons) => polygons
            .iter_mut()
            .flat_map(|polygon| polygon.iter_mut())
            .flat_map(|ring| ring.iter_mut())
            .try_for_each(|p| f(p)),
        Value::GeometryCollection(geometries) => geometries
            .iter_mut()
            .try_for_each(|geometry| try_for_each_position_mut(&mut geometry.value, &mut *f)),
    }
}

pub(crate) fn for_each_position_mut<F>(value: &mut Value, mut f: F)
where
    F: FnMut(&mut Position),
{
    let result: Result<(), Infallible> = try_for_each_position_mut(value, &mut |p| {
        f(p);
        Ok(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Visit every position of every geometry in a document.
pub(crate) fn try_for_each_geojson_position_mut<E, F>(geojson: &mut GeoJson, f: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Position) -> Result<(), E>,
{
    match geojson {
        GeoJson::Geometry(geometry) => try_for_each_position_mut(&mut geometry.value, f),
        GeoJson::Feature(feature) => match feature.geometry.as_mut() {
            Some(geometry) => try_for_each_position_mut(&mut geometry.value, f),
            None => Ok(()),
        },
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter_mut()
            .filter_map(|feature| feature.geometry.as_mut())
            .try_for_each(|geometry| try_for_each_position_mut(&mut geometry.value, &mut *f)),
    }
}

pub(crate) fn for_each_position<F>(value: &Value, f: &mut F)
where
    F: FnMut(&[f64]),
{
    match value {
        Value::Point(position) => f(position),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            positions.iter().for_each(|p| f(p))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().flatten().for_each(|p| f(p))
        }
        Value::MultiPolygon(polygons) => polygons.iter().flatten().flatten().for_each(|p| f(p)),
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .for_each(|geometry| for_each_position(&geometry.value, &mut *f)),
    }
}

/// Every geometry of a document, features without geometry skipped.
pub(crate) fn geometries(geojson: &GeoJson) -> Vec<&Geometry> {
    match geojson {
        GeoJson::Geometry(geometry) => vec![geometry],
        GeoJson::Feature(feature) => feature.geometry.iter().collect(),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Value {
        Value::GeometryCollection(vec![
            Geometry::new(Value::Point(vec![1.0, 2.0])),
            Geometry::new(Value::MultiPolygon(vec![vec![vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]]])),
        ])
    }

    #[test]
    fn test_visits_nested_positions() {
        let mut count = 0;
        for_each_position(&collection(), &mut |_| count += 1);
        assert_eq!(count, 5);
    }

    #[test]
    fn test_try_walk_stops_at_first_error() {
        let mut value = collection();
        let mut visited = 0;
        let result = try_for_each_position_mut(&mut value, &mut |p| {
            visited += 1;
            if p[0] == 0.0 {
                Err("zero")
            } else {
                p[0] += 10.0;
                Ok(())
            }
        });
        assert_eq!(result, Err("zero"));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_mutable_walk() {
        let mut value = Value::LineString(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        for_each_position_mut(&mut value, |p| p[1] = 0.0);
        assert_eq!(value, Value::LineString(vec![vec![1.0, 0.0], vec![3.0, 0.0]]));
    }
}
