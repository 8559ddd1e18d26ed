//! Pipeline: CRS-to-CRS transform chain that dispatches between
//! native pure-Rust projections and proj4rs fallback.

use crate::error::ProjError;
use crate::proj::code::{is_web_mercator, make_numeric_epsg, EPSG_4326};
use crate::proj::crs::CrsTransform;
use crate::proj::mercator::WebMercator;
use crate::proj::registry::{ProjectionDefinition, ProjectionRegistry};
use crate::proj::Projection;

/// Describes a CRS endpoint in the pipeline.
enum CrsEndpoint {
    /// Geographic CRS. Coordinates are in degrees externally, radians internally.
    Geographic,
    /// Projected CRS. Coordinates are in meters.
    Projected(Box<dyn Projection>),
}

/// A CRS-to-CRS transform pipeline.
///
/// Codes must be registered in the [`ProjectionRegistry`]. WGS84 and Web
/// Mercator use native math; everything else goes through proj4rs.
pub enum Pipeline {
    /// Source and destination are the same CRS.
    Identity,
    /// Both src and dst are recognized native projections.
    #[allow(private_interfaces)]
    Native { src: CrsEndpoint, dst: CrsEndpoint },
    /// Fallback to proj4rs for other definitions.
    Proj4rs(Box<CrsTransform>),
}

impl Pipeline {
    /// Create a Pipeline from source and destination CRS codes.
    pub fn new(registry: &ProjectionRegistry, src_crs: &str, dst_crs: &str) -> Result<Self, ProjError> {
        let src_def = registry
            .resolve(src_crs)
            .ok_or_else(|| ProjError::UnknownCrs(src_crs.to_string()))?;
        let dst_def = registry
            .resolve(dst_crs)
            .ok_or_else(|| ProjError::UnknownCrs(dst_crs.to_string()))?;

        if src_crs == dst_crs {
            return Ok(Pipeline::Identity);
        }

        if let (Some(src), Some(dst)) = (native_endpoint(src_def), native_endpoint(dst_def)) {
            Ok(Pipeline::Native { src, dst })
        } else {
            let ct = CrsTransform::new(src_def, dst_def)?;
            Ok(Pipeline::Proj4rs(Box::new(ct)))
        }
    }

    /// Transform a single point from source CRS to destination CRS.
    ///
    /// Input/output coordinates are in CRS native units (degrees for geographic,
    /// metres for projected).
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        match self {
            Pipeline::Identity => Ok((x, y)),
            Pipeline::Native { src, dst } => {
                // Step 1: src coords → (lon_rad, lat_rad)
                let (lon, lat) = match src {
                    CrsEndpoint::Geographic => (x.to_radians(), y.to_radians()),
                    CrsEndpoint::Projected(proj) => proj.inverse(x, y)?,
                };

                // Step 2: (lon_rad, lat_rad) → dst coords
                match dst {
                    CrsEndpoint::Geographic => Ok((lon.to_degrees(), lat.to_degrees())),
                    CrsEndpoint::Projected(proj) => proj.forward(lon, lat),
                }
            }
            Pipeline::Proj4rs(ct) => ct.transform(x, y),
        }
    }

    /// Batch transform from source CRS to destination CRS, in place.
    pub fn transform_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        match self {
            Pipeline::Proj4rs(ct) => ct.transform_batch(coords),
            _ => {
                for c in coords.iter_mut() {
                    *c = self.transform(c.0, c.1)?;
                }
                Ok(())
            }
        }
    }
}

fn native_endpoint(definition: &ProjectionDefinition) -> Option<CrsEndpoint> {
    if is_web_mercator(&definition.code) {
        return Some(CrsEndpoint::Projected(Box::new(WebMercator::new())));
    }
    match make_numeric_epsg(&definition.code)?.as_str() {
        EPSG_4326 => Some(CrsEndpoint::Geographic),
        _ => None,
    }
}
