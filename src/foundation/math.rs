use glam::{DMat3, DQuat, DVec3};

/// Unit vector from azimuth `phi` and elevation `theta` (radians).
///
/// `phi = 0` lies on +x and `phi = pi/2` on +y; `theta = pi/2` is the +z pole.
pub(crate) fn from_spherical(phi: f64, theta: f64) -> DVec3 {
    DVec3::new(
        theta.cos() * phi.cos(),
        theta.cos() * phi.sin(),
        theta.sin(),
    )
}

/// Rotate `v` about `axis` by `angle` radians.
pub(crate) fn rotate_about(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    DQuat::from_axis_angle(axis.normalize(), angle) * v
}

/// Rotation about an arbitrary axis in the renderer's 12-value row-vector matrix layout.
///
/// The translation row is zero. `axis` must be non-zero.
pub(crate) fn axis_rotation_matrix(axis: DVec3, angle_deg: f64) -> [f64; 12] {
    // Row-vector convention: the rows are the columns of glam's column-vector matrix.
    let m = DMat3::from_axis_angle(axis.normalize(), angle_deg.to_radians());
    let c = m.to_cols_array();
    [
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8], 0.0, 0.0, 0.0,
    ]
}

/// Mirror `p` through `center`.
pub(crate) fn reflect_point(p: DVec3, center: DVec3) -> DVec3 {
    2.0 * center - p
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
