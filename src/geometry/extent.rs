use geojson::GeoJson;

use crate::bbox::BoundingBox;
use crate::geometry::{for_each_position, geometries};
use crate::proj::registry::ProjectionRegistry;

/// `[minx, miny, maxx, maxy]` over every position of the document, `None`
/// when it holds no positions.
pub fn geojson_extent(geojson: &GeoJson) -> Option<[f64; 4]> {
    let mut bbox: Option<BoundingBox> = None;
    for geometry in geometries(geojson) {
        for_each_position(&geometry.value, &mut |position| {
            if position.len() < 2 {
                return;
            }
            let point = [position[0], position[1]];
            match bbox.as_mut() {
                Some(bbox) => bbox.extend_point(point),
                None => bbox = Some(BoundingBox::from_corners(point, point)),
            }
        });
    }
    bbox.map(|bbox| bbox.to_array())
}

/// Whether the whole layer lies inside the extent registered for `crs`.
pub fn layer_fits_extent(registry: &ProjectionRegistry, geojson: &GeoJson, crs: &str) -> bool {
    let Some(layer) = geojson_extent(geojson) else {
        return false;
    };
    let projection = BoundingBox::from_array(registry.extent_for_projection(crs).extent);
    projection.contains(&BoundingBox::from_array(layer))
}
