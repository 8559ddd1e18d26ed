/// A 2D affine transform between screen pixels and map coordinates.
///
/// Maps (col, row) to (x, y):
///   x = a * col + b * row + c
///   y = d * col + e * row + f
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pixel offsets from the view center (y up) to map coordinates, for a
    /// view rotated by `rotation` radians.
    pub fn view(center: [f64; 2], resolution: f64, rotation: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self {
            a: resolution * cos,
            b: -resolution * sin,
            c: center[0],
            d: resolution * sin,
            e: resolution * cos,
            f: center[1],
        }
    }

    /// Screen pixels (origin top-left, rows growing down) to map coordinates
    /// for a north-up view whose top-left corner is `origin`.
    pub fn screen(origin: [f64; 2], resolution: f64) -> Self {
        Self::new(resolution, 0.0, origin[0], 0.0, -resolution, origin[1])
    }

    /// Apply the forward transform: (col, row) -> (x, y).
    pub fn forward(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.a * col + self.b * row + self.c;
        let y = self.d * col + self.e * row + self.f;
        (x, y)
    }

    /// Compute the inverse affine transform.
    pub fn inverse(&self) -> Result<Affine, crate::error::ProjError> {
        let det = self.a * self.e - self.b * self.d;
        if det == 0.0 || !det.is_finite() {
            return Err(crate::error::ProjError::InvalidParameter(
                "Singular affine transform (determinant is zero)".into(),
            ));
        }
        let inv_det = 1.0 / det;
        Ok(Affine {
            a: self.e * inv_det,
            b: -self.b * inv_det,
            c: (self.b * self.f - self.e * self.c) * inv_det,
            d: -self.d * inv_det,
            e: self.a * inv_det,
            f: (self.d * self.c - self.a * self.f) * inv_det,
        })
    }
}
