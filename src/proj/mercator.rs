//! Web Mercator (EPSG:3857, spherical):
//!   forward: x = a·(λ - λ₀), y = a·ln(tan(π/4 + φ/2))
//!   inverse: λ = λ₀ + x/a, φ = 2·atan(exp(y/a)) - π/2
//!
//! Longitudes are not wrapped in either direction, so views scrolled past the
//! antimeridian keep their continuous x values.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::ProjError;
use crate::proj::ellipsoid::{Ellipsoid, WEB_MERCATOR_SPHERE};
use crate::proj::Projection;

/// Half the width of the projected world (x of the antimeridian), in metres.
pub const HALF_WORLD_WIDTH: f64 = PI * 6_378_137.0;

const POLE_EPSILON: f64 = 1e-10;

/// Web Mercator projection (EPSG:3857) on the WGS84 semi-major sphere.
pub struct WebMercator {
    ellipsoid: Ellipsoid,
    lon0: f64,
}

impl WebMercator {
    pub fn new() -> Self {
        Self {
            ellipsoid: WEB_MERCATOR_SPHERE,
            lon0: 0.0,
        }
    }

    /// Degrees in, metres out.
    pub fn project_deg(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        self.forward(lon.to_radians(), lat.to_radians())
    }

    /// Metres in, degrees out.
    pub fn unproject_deg(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        let (lon, lat) = self.inverse(x, y)?;
        Ok((lon.to_degrees(), lat.to_degrees()))
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for WebMercator {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjError> {
        if (lat.abs() - FRAC_PI_2).abs() <= POLE_EPSILON || lat.abs() > FRAC_PI_2 {
            return Err(ProjError::TransformFailed(format!(
                "latitude {:.6} is outside Web Mercator",
                lat.to_degrees()
            )));
        }
        let x = self.ellipsoid.a * (lon - self.lon0);
        let y = self.ellipsoid.a * (FRAC_PI_4 + lat / 2.0).tan().ln();
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjError::TransformFailed(format!(
                "non-finite Web Mercator coordinate ({x}, {y})"
            )));
        }
        let lon = self.lon0 + x / self.ellipsoid.a;
        let lat = 2.0 * (y / self.ellipsoid.a).exp().atan() - FRAC_PI_2;
        Ok((lon, lat))
    }
}
