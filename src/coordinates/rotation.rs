use nalgebra as na;

/// Perifocal-to-reference rotation `Rz(raan) · Rx(i) · Rz(argp)`, angles in degrees.
///
/// Applied to a perifocal vector this first turns it by the argument of perigee
/// inside the orbital plane, then tilts the plane by the inclination about the
/// line of nodes, then turns the node line by the RAAN.
pub fn rotation_matrix(i_deg: f64, raan_deg: f64, argp_deg: f64) -> na::Rotation3<f64> {
    let rot_argp = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), argp_deg.to_radians());
    let rot_i = na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), i_deg.to_radians());
    let rot_raan = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), raan_deg.to_radians());

    rot_raan * rot_i * rot_argp
}

/// Rotates every perifocal point into the reference frame. Never fails; any
/// real angle yields an orthonormal transform.
pub fn rotate_to_reference(
    points_planar: &[na::Vector3<f64>],
    i_deg: f64,
    raan_deg: f64,
    argp_deg: f64,
) -> Vec<na::Vector3<f64>> {
    let transform = rotation_matrix(i_deg, raan_deg, argp_deg);
    points_planar.iter().map(|p| transform * p).collect()
}
