//! Visible part of a map partly covered by overlay panels.
//!
//! Layout insets are pixel widths hidden on each side of the map. A point is
//! visible when its pixel position lies inside the map rectangle shrunk by
//! the insets; recentering moves the map so that the point sits in the middle
//! of that smaller rectangle.

use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::bbox::BoundingBox;
use crate::geometry::normalize::LatLng;
use crate::proj::code::EPSG_4326;
use crate::proj::registry::ProjectionRegistry;
use crate::reproject::{reproject, reproject_bbox};
use crate::viewport::{viewport_geometry, ViewportExtent};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MapBbox {
    pub bounds: BoundingBox,
    pub crs: String,
}

/// The parts of a map's state needed to locate points on screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MapState {
    pub size: MapSize,
    pub zoom: f64,
    pub projection: String,
    pub bbox: MapBbox,
}

/// Pixels covered on each side of the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CenterPosition {
    pub x: f64,
    pub y: f64,
}

/// A map center with the zoom to keep, in lon/lat.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapCenter {
    pub pos: CenterPosition,
    pub zoom: f64,
    pub crs: String,
}

/// View extent parts in the map projection.
fn view_parts(registry: &ProjectionRegistry, map: &MapState) -> Option<ViewportExtent> {
    let bounds = if map.bbox.crs == map.projection {
        map.bbox.bounds
    } else {
        let extent = reproject_bbox(registry, map.bbox.bounds.to_array(), &map.bbox.crs, &map.projection)?;
        BoundingBox::from_array(extent)
    };
    Some(viewport_geometry(&bounds, &map.projection).extent)
}

/// Width of the whole world in the map projection.
fn world_width(registry: &ProjectionRegistry, projection: &str) -> Option<f64> {
    let antimeridian = reproject(registry, [180.0, 0.0], EPSG_4326, projection)?;
    Some(2.0 * antimeridian.x)
}

fn project_coords(registry: &ProjectionRegistry, coords: LatLng, projection: &str) -> Option<[f64; 2]> {
    reproject(registry, [coords.lng, coords.lat], EPSG_4326, projection).map(|p| p.to_array())
}

/// Pixel position of `coords`, origin at the top-left corner of the map.
fn pixel_position(
    registry: &ProjectionRegistry,
    coords: LatLng,
    map: &MapState,
    resolution: f64,
) -> Option<[f64; 2]> {
    let [mut x, y] = project_coords(registry, coords, &map.projection)?;
    let origin = match view_parts(registry, map)? {
        ViewportExtent::Single(extent) => [extent[0], extent[3]],
        // the screen starts at the west edge of the eastern part
        ViewportExtent::Split([_, east]) => {
            if x < east[0] {
                x += world_width(registry, &map.projection)?;
            }
            [east[0], east[3]]
        }
    };
    let to_pixels = Affine::screen(origin, resolution).inverse().ok()?;
    let (col, row) = to_pixels.forward(x, y);
    Some([col, row])
}

/// Whether `coords` shows inside the map area left uncovered by `layout`.
pub fn is_inside_visible_area(
    registry: &ProjectionRegistry,
    coords: LatLng,
    map: &MapState,
    layout: &LayoutInsets,
    resolution: f64,
) -> bool {
    let Some([col, row]) = pixel_position(registry, coords, map, resolution) else {
        return false;
    };
    col >= layout.left
        && col <= map.size.width - layout.right
        && row >= layout.top
        && row <= map.size.height - layout.bottom
}

/// Map center that puts `coords` in the middle of the area left uncovered
/// by `layout`. The returned longitude is not wrapped.
pub fn center_to_visible_area(
    registry: &ProjectionRegistry,
    coords: LatLng,
    map: &MapState,
    layout: &LayoutInsets,
    resolution: f64,
) -> Option<MapCenter> {
    let [mut x, y] = project_coords(registry, coords, &map.projection)?;

    if let ViewportExtent::Split(parts) = view_parts(registry, map)? {
        let [west, east] = parts.map(BoundingBox::from_array);
        let reference = if west.width() > east.width() { west } else { east };
        let world = world_width(registry, &map.projection)?;
        if x < reference.minx {
            x += world;
        } else if x > reference.maxx {
            x -= world;
        }
    }

    let center = [
        x - (layout.left - layout.right) / 2.0 * resolution,
        y - (layout.bottom - layout.top) / 2.0 * resolution,
    ];
    let lon_lat = reproject(registry, center, &map.projection, EPSG_4326)?;
    Some(MapCenter {
        pos: CenterPosition {
            x: lon_lat.x,
            y: lon_lat.y,
        },
        zoom: map.zoom,
        crs: EPSG_4326.to_string(),
    })
}
