//! Great-circle densification of polylines and the reverse thinning.

/// Points generated per segment by [`transform_line_to_arcs`].
pub const ARC_POINTS: usize = 100;

/// `npoints` positions along the great circle from `p1` to `p2`, both ends
/// included. Empty for coincident or antipodal endpoints.
fn great_circle(p1: [f64; 2], p2: [f64; 2], npoints: usize) -> Vec<[f64; 2]> {
    let (lon1, lat1) = (p1[0].to_radians(), p1[1].to_radians());
    let (lon2, lat2) = (p2[0].to_radians(), p2[1].to_radians());

    let h = ((lat2 - lat1) / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);
    let d = 2.0 * h.sqrt().asin();
    if d == 0.0 {
        return Vec::new();
    }
    let sin_d = d.sin();
    if sin_d.abs() < 1e-12 {
        log::warn!("no unique great circle between antipodal points {p1:?} and {p2:?}");
        return Vec::new();
    }

    let steps = npoints.saturating_sub(1).max(1) as f64;
    (0..npoints)
        .map(|i| {
            let fraction = i as f64 / steps;
            let a = ((1.0 - fraction) * d).sin() / sin_d;
            let b = (fraction * d).sin() / sin_d;
            let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
            let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
            let z = a * lat1.sin() + b * lat2.sin();
            let lat = z.atan2((x * x + y * y).sqrt());
            let lon = y.atan2(x);
            [lon.to_degrees(), lat.to_degrees()]
        })
        .collect()
}

/// Densify every segment of `line` into `npoints` great-circle positions.
pub fn transform_line_to_arcs_with(line: &[[f64; 2]], npoints: usize) -> Vec<[f64; 2]> {
    line.windows(2)
        .flat_map(|segment| great_circle(segment[0], segment[1], npoints))
        .collect()
}

/// Densify every segment of `line` into [`ARC_POINTS`] great-circle positions.
pub fn transform_line_to_arcs(line: &[[f64; 2]]) -> Vec<[f64; 2]> {
    transform_line_to_arcs_with(line, ARC_POINTS)
}

/// Keep every `every_n`-th point and always the last one. `0` behaves as `1`.
pub fn transform_arcs_to_line(points: &[[f64; 2]], every_n: usize) -> Vec<[f64; 2]> {
    let Some(last) = points.last() else {
        return Vec::new();
    };
    let mut line: Vec<[f64; 2]> = points.iter().step_by(every_n.max(1)).copied().collect();
    if (points.len() - 1) % every_n.max(1) != 0 {
        line.push(*last);
    }
    line
}
