use crate::error::ProjError;
use crate::proj::registry::ProjectionDefinition;
use proj4rs::Proj;

/// Thin wrapper around proj4rs that handles radians/degrees conversion transparently.
///
/// proj4rs uses radians for geographic CRS, while registry definitions and
/// callers speak degrees. This wrapper auto-converts.
pub struct CrsTransform {
    src: Proj,
    dst: Proj,
    src_is_geo: bool,
    dst_is_geo: bool,
}

impl CrsTransform {
    /// Create a transform between two registered definitions.
    pub fn new(src: &ProjectionDefinition, dst: &ProjectionDefinition) -> Result<Self, ProjError> {
        let src_proj = parse_definition(src)?;
        let dst_proj = parse_definition(dst)?;
        let src_is_geo = src_proj.is_latlong();
        let dst_is_geo = dst_proj.is_latlong();
        Ok(Self {
            src: src_proj,
            dst: dst_proj,
            src_is_geo,
            dst_is_geo,
        })
    }

    /// Transform a single point from source CRS to destination CRS.
    ///
    /// Input/output coordinates are in CRS native units (degrees for geographic,
    /// metres for projected).
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let mut point = if self.src_is_geo {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        proj4rs::transform::transform(&self.src, &self.dst, &mut point)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;

        if self.dst_is_geo {
            Ok((point.0.to_degrees(), point.1.to_degrees()))
        } else {
            Ok(point)
        }
    }

    /// Batch transform from source CRS to destination CRS, in place.
    pub fn transform_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        if self.src_is_geo {
            for c in coords.iter_mut() {
                c.0 = c.0.to_radians();
                c.1 = c.1.to_radians();
            }
        }

        proj4rs::transform::transform(&self.src, &self.dst, coords)
            .map_err(|e| ProjError::TransformFailed(e.to_string()))?;

        if self.dst_is_geo {
            for c in coords.iter_mut() {
                c.0 = c.0.to_degrees();
                c.1 = c.1.to_degrees();
            }
        }
        Ok(())
    }
}

/// Check that a proj4 string can be used for transforms.
pub fn validate_proj4(definition: &str) -> Result<(), ProjError> {
    Proj::from_proj_string(definition)
        .map(|_| ())
        .map_err(|e| ProjError::InvalidParameter(e.to_string()))
}

fn parse_definition(definition: &ProjectionDefinition) -> Result<Proj, ProjError> {
    Proj::from_proj_string(&definition.proj4)
        .map_err(|e| ProjError::UnknownCrs(format!("{}: {e}", definition.code)))
}
