//! Viewport geometry of a map view, split at the antimeridian when the view
//! crosses it.
//!
//! Geographic views are handled in degrees. Web Mercator views are unprojected
//! to degrees, split there, and projected back. Views in any other projection
//! are returned as a single rectangle.

use geojson::{Geometry, Value};
use serde::Serialize;

use crate::bbox::BoundingBox;
use crate::error::ProjError;
use crate::proj::code::{is_web_mercator, make_numeric_epsg, EPSG_4326};
use crate::proj::mercator::WebMercator;

/// Extent of the view: one box, or the west and east parts of a split view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewportExtent {
    Single([f64; 4]),
    Split([[f64; 4]; 2]),
}

impl ViewportExtent {
    pub fn is_split(&self) -> bool {
        matches!(self, ViewportExtent::Split(_))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewportGeometry {
    /// A Polygon, or a MultiPolygon of the two parts of a split view.
    pub geometry: Geometry,
    pub radius: f64,
    pub projection: String,
    pub extent: ViewportExtent,
    pub center: [f64; 2],
}

/// Lon/lat parts of a view plus the wrapped center longitude.
struct WrappedView {
    parts: Vec<BoundingBox>,
    center_lng: f64,
}

/// Bring a longitude into [-180, 180] by whole turns. In-range values,
/// including ±180, are returned as given.
fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

fn wrap_view(bounds: &BoundingBox) -> WrappedView {
    if bounds.maxx - bounds.minx >= 360.0 {
        return WrappedView {
            parts: vec![BoundingBox::new(-180.0, bounds.miny, 180.0, bounds.maxy)],
            center_lng: 0.0,
        };
    }
    // edges landing on the antimeridian open or close the view there
    let minx = match wrap_lng(bounds.minx) {
        x if x == 180.0 => -180.0,
        x => x,
    };
    let maxx = match wrap_lng(bounds.maxx) {
        x if x == -180.0 => 180.0,
        x => x,
    };
    if minx <= maxx {
        return WrappedView {
            parts: vec![BoundingBox::new(minx, bounds.miny, maxx, bounds.maxy)],
            center_lng: (minx + maxx) / 2.0,
        };
    }
    WrappedView {
        parts: vec![
            BoundingBox::new(-180.0, bounds.miny, maxx, bounds.maxy),
            BoundingBox::new(minx, bounds.miny, 180.0, bounds.maxy),
        ],
        center_lng: wrap_lng((minx + maxx + 360.0) / 2.0),
    }
}

/// Build the output from parts already expressed in the map projection.
fn assemble(parts: Vec<BoundingBox>, center_x: f64, projection: &str) -> ViewportGeometry {
    let center_y = (parts[0].miny + parts[0].maxy) / 2.0;
    let (geometry, extent) = match parts.as_slice() {
        [west, east] => (
            Value::MultiPolygon(vec![vec![west.ring()], vec![east.ring()]]),
            ViewportExtent::Split([west.to_array(), east.to_array()]),
        ),
        _ => (Value::Polygon(vec![parts[0].ring()]), ViewportExtent::Single(parts[0].to_array())),
    };
    ViewportGeometry {
        geometry: Geometry::new(geometry),
        radius: 0.0,
        projection: projection.to_string(),
        extent,
        center: [center_x, center_y],
    }
}

fn unwrapped(bounds: &BoundingBox, projection: &str) -> ViewportGeometry {
    assemble(vec![*bounds], bounds.center()[0], projection)
}

fn web_mercator_viewport(bounds: &BoundingBox, projection: &str) -> Result<ViewportGeometry, ProjError> {
    let merc = WebMercator::new();
    let (minx, miny) = merc.unproject_deg(bounds.minx, bounds.miny)?;
    let (maxx, maxy) = merc.unproject_deg(bounds.maxx, bounds.maxy)?;
    let wrapped = wrap_view(&BoundingBox::new(minx, miny, maxx, maxy));

    let parts = wrapped
        .parts
        .iter()
        .map(|part| {
            let (minx, miny) = merc.project_deg(part.minx, part.miny)?;
            let (maxx, maxy) = merc.project_deg(part.maxx, part.maxy)?;
            Ok(BoundingBox::new(minx, miny, maxx, maxy))
        })
        .collect::<Result<Vec<_>, ProjError>>()?;
    let (center_x, _) = merc.project_deg(wrapped.center_lng, 0.0)?;
    Ok(assemble(parts, center_x, projection))
}

/// Geometry of the area covered by `bounds`, given in `projection` units.
pub fn viewport_geometry(bounds: &BoundingBox, projection: &str) -> ViewportGeometry {
    if make_numeric_epsg(projection).as_deref() == Some(EPSG_4326) {
        let wrapped = wrap_view(bounds);
        return assemble(wrapped.parts, wrapped.center_lng, projection);
    }
    if is_web_mercator(projection) {
        return match web_mercator_viewport(bounds, projection) {
            Ok(viewport) => viewport,
            Err(e) => {
                log::warn!("could not wrap {projection} viewport: {e}");
                unwrapped(bounds, projection)
            }
        };
    }
    unwrapped(bounds, projection)
}
