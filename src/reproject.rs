//! Point and bounding-box reprojection.
//!
//! The public functions keep a null contract: a transformation that is not
//! available (empty or unknown CRS, failed projection) yields `None`. The
//! `try_` variants expose the underlying [`ProjError`].

use serde::Deserialize;

use crate::affine::Affine;
use crate::bbox::BoundingBox;
use crate::error::ProjError;
use crate::proj::code::EPSG_4326;
use crate::proj::pipeline::Pipeline;
use crate::proj::registry::ProjectionRegistry;

/// A reprojected coordinate tagged with its CRS.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub srs: String,
}

impl ProjectedPoint {
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

pub fn try_reproject(
    registry: &ProjectionRegistry,
    point: [f64; 2],
    source: &str,
    dest: &str,
) -> Result<ProjectedPoint, ProjError> {
    if source.is_empty() || dest.is_empty() {
        return Err(ProjError::InvalidParameter("missing source or destination CRS".into()));
    }
    let pipeline = Pipeline::new(registry, source, dest)?;
    let (x, y) = pipeline.transform(point[0], point[1])?;
    Ok(ProjectedPoint {
        x,
        y,
        srs: dest.to_string(),
    })
}

/// Reproject one coordinate; `None` when either CRS is empty or unusable.
pub fn reproject(
    registry: &ProjectionRegistry,
    point: [f64; 2],
    source: &str,
    dest: &str,
) -> Option<ProjectedPoint> {
    try_reproject(registry, point, source, dest).ok()
}

pub fn try_reproject_bbox(
    registry: &ProjectionRegistry,
    bbox: [f64; 4],
    source: &str,
    dest: &str,
) -> Result<[f64; 4], ProjError> {
    if source.is_empty() || dest.is_empty() {
        return Err(ProjError::InvalidParameter("missing source or destination CRS".into()));
    }
    let pipeline = Pipeline::new(registry, source, dest)?;
    // Every corner: straight edges do not stay straight under reprojection.
    let mut corners = BoundingBox::from_array(bbox).corners().map(|[x, y]| (x, y));
    pipeline.transform_batch(&mut corners)?;
    let envelope = BoundingBox::from_points(corners.iter().map(|&(x, y)| [x, y]))
        .ok_or_else(|| ProjError::TransformFailed("empty bbox".into()))?;
    Ok(envelope.to_array())
}

/// Reproject `[minx, miny, maxx, maxy]`; the result is the envelope of the
/// four reprojected corners.
pub fn reproject_bbox(
    registry: &ProjectionRegistry,
    bbox: [f64; 4],
    source: &str,
    dest: &str,
) -> Option<[f64; 4]> {
    try_reproject_bbox(registry, bbox, source, dest).ok()
}

/// Map extent covered by a view of `size` pixels around `center`, rotated by
/// `rotation` radians.
pub fn projected_bbox(center: [f64; 2], resolution: f64, rotation: f64, size: [f64; 2]) -> BoundingBox {
    let view = Affine::view(center, resolution, rotation);
    let (dx, dy) = (size[0] / 2.0, size[1] / 2.0);
    let corners = [(-dx, -dy), (-dx, dy), (dx, dy), (dx, -dy)].map(|(col, row)| {
        let (x, y) = view.forward(col, row);
        [x, y]
    });
    let [first, rest @ ..] = corners;
    let mut bbox = BoundingBox::from_corners(first, first);
    for corner in rest {
        bbox.extend_point(corner);
    }
    bbox
}

/// A `<BoundingBox>` element from WMS capabilities, attributes still as text.
#[derive(Clone, Debug, Deserialize)]
pub struct WmsBoundingBox {
    #[serde(rename = "SRS", alias = "CRS")]
    pub srs: String,
    pub minx: String,
    pub miny: String,
    pub maxx: String,
    pub maxy: String,
}

impl WmsBoundingBox {
    fn extent(&self) -> Option<[f64; 4]> {
        let parse = |value: &str| value.trim().parse::<f64>().ok();
        Some([
            parse(&self.minx)?,
            parse(&self.miny)?,
            parse(&self.maxx)?,
            parse(&self.maxy)?,
        ])
    }
}

/// Lon/lat bounding box of a layer from its advertised bounding boxes.
///
/// Uses the first record whose SRS is registered and whose numbers parse.
pub fn wms_bounding_box(registry: &ProjectionRegistry, records: &[WmsBoundingBox]) -> Option<BoundingBox> {
    records.iter().find_map(|record| {
        if !registry.contains(&record.srs) {
            return None;
        }
        let extent = record.extent()?;
        match try_reproject_bbox(registry, extent, &record.srs, EPSG_4326) {
            Ok(bbox) => Some(BoundingBox::from_array(bbox)),
            Err(e) => {
                log::warn!("skipping WMS bounding box in {}: {e}", record.srs);
                None
            }
        }
    })
}

/// Parse `"x y"` into a coordinate. Anything that is not two numbers gives `None`.
pub fn parse_string(text: &str) -> Option<[f64; 2]> {
    let mut tokens = text.split_whitespace();
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    if tokens.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some([x, y])
}
