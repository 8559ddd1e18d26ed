//! Spherical (haversine) and ellipsoidal (Vincenty inverse) distances.
//!
//! Both sum the segments of a lon/lat polyline and round the total to
//! millimetres.

use crate::geodesic::EARTH_MEAN_RADIUS;
use crate::proj::ellipsoid::{Ellipsoid, WGS84};

const VINCENTY_TOLERANCE: f64 = 1e-12;
const VINCENTY_MAX_ITERATIONS: usize = 100;

fn round_mm(metres: f64) -> f64 {
    (metres * 1000.0).round() / 1000.0
}

fn haversine_segment(p1: [f64; 2], p2: [f64; 2]) -> f64 {
    let (lat1, lat2) = (p1[1].to_radians(), p2[1].to_radians());
    let dlat = lat2 - lat1;
    let dlon = (p2[0] - p1[0]).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_MEAN_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle length of the polyline on a sphere of radius
/// [`EARTH_MEAN_RADIUS`].
pub fn haversine(points: &[[f64; 2]]) -> f64 {
    round_mm(points.windows(2).map(|w| haversine_segment(w[0], w[1])).sum())
}

/// Vincenty inverse on `ellipsoid`. `None` when the iteration does not
/// converge (nearly antipodal points).
fn vincenty_segment(ellipsoid: &Ellipsoid, p1: [f64; 2], p2: [f64; 2]) -> Option<f64> {
    let (a, b, f) = (ellipsoid.a, ellipsoid.b, ellipsoid.f);
    let l = (p2[0] - p1[0]).to_radians();
    let u1 = ((1.0 - f) * p1[1].to_radians().tan()).atan();
    let u2 = ((1.0 - f) * p2[1].to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
    let (mut cos_sq_alpha, mut cos_2sigma_m) = (0.0, 0.0);

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        if (lambda - previous).abs() <= VINCENTY_TOLERANCE {
            converged = true;
            break;
        }
    }
    if !converged {
        return None;
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
    Some(b * big_a * (sigma - delta_sigma))
}

/// Geodesic length of the polyline on the WGS84 ellipsoid.
pub fn vincenty(points: &[[f64; 2]]) -> Option<f64> {
    let mut total = 0.0;
    for w in points.windows(2) {
        match vincenty_segment(&WGS84, w[0], w[1]) {
            Some(d) => total += d,
            None => {
                log::warn!("vincenty did not converge between {:?} and {:?}", w[0], w[1]);
                return None;
            }
        }
    }
    Some(round_mm(total))
}
