use crate::coordinates::rotate_to_reference;
use crate::errors::OrbitVizError;
use crate::input::Field;
use crate::models::{OrbitPath, OrbitalElements};
use crate::physics::conic::classify_and_sample;

/// Generates the reference-frame path of the conic described by the elements.
///
/// Input
/// -----
/// * `a`: semi-major axis magnitude [km]
/// * `e`: eccentricity [-]
/// * `i`, `raan`, `argp`: inclination, RAAN and argument of perigee [deg]
/// * `_nu_start`: true anomaly at epoch [deg]; accepted but has no effect on the path
///
/// No validation happens here: `a <= 0` or `e < 0` give a defined path that
/// has no physical meaning. Use [`generate_orbit_checked`] to reject them.
pub fn generate_orbit(a: f64, e: f64, i: f64, raan: f64, argp: f64, _nu_start: f64) -> OrbitPath {
    let sampling = classify_and_sample(a, e);
    let planar = sampling.planar_points();
    OrbitPath::new(rotate_to_reference(&planar, i, raan, argp))
}

/// Same as [`generate_orbit`], after checking the elements describe a real conic.
pub fn generate_orbit_checked(elements: &OrbitalElements) -> Result<OrbitPath, OrbitVizError> {
    validate_elements(elements)?;
    Ok(generate_from_elements(elements))
}

pub fn generate_from_elements(elements: &OrbitalElements) -> OrbitPath {
    generate_orbit(
        elements.a,
        elements.e,
        elements.i,
        elements.raan,
        elements.argp,
        elements.nu,
    )
}

pub fn validate_elements(elements: &OrbitalElements) -> Result<(), OrbitVizError> {
    let fields = [
        (Field::SemiMajorAxis, elements.a),
        (Field::Eccentricity, elements.e),
        (Field::Inclination, elements.i),
        (Field::Raan, elements.raan),
        (Field::ArgumentOfPerigee, elements.argp),
        (Field::TrueAnomaly, elements.nu),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(OrbitVizError::NonFiniteElement(*field));
    }
    if elements.a <= 0.0 {
        return Err(OrbitVizError::NonPositiveSemiMajorAxis(elements.a));
    }
    if elements.e < 0.0 {
        return Err(OrbitVizError::NegativeEccentricity(elements.e));
    }
    Ok(())
}
