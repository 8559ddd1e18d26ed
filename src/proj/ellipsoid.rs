/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            f,
            b: a * (1.0 - f),
            e2: 2.0 * f - f * f,
        }
    }

    /// A sphere of the given radius.
    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

/// Sphere used by EPSG:3857 (radius = WGS84 semi-major axis).
pub const WEB_MERCATOR_SPHERE: Ellipsoid = Ellipsoid::sphere(6_378_137.0);
