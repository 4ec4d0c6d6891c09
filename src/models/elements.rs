use crate::constants::{
    CIRCULAR_ECCENTRICITY, PARABOLIC_LABEL_TOLERANCE, PARABOLIC_SAMPLER_TOLERANCE,
};
use serde::Serialize;
use std::fmt;

/// Classical orbital elements as entered by the user.
///
/// Units
/// -----
/// * `a`: km (positive magnitude, also for hyperbolic orbits)
/// * `e`: unitless
/// * `i`, `raan`, `argp`, `nu`: degrees
///
/// `nu` is carried along for display only; path generation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub raan: f64,
    pub argp: f64,
    pub nu: f64,
}

impl OrbitalElements {
    pub fn new(a: f64, e: f64, i: f64, raan: f64, argp: f64, nu: f64) -> Self {
        Self {
            a,
            e,
            i,
            raan,
            argp,
            nu,
        }
    }

    /// Class shown to the user, using the loose parabolic tolerance.
    pub fn display_class(&self) -> ConicClass {
        ConicClass::for_display(self.e)
    }
}

/// Conic section family, derived from the eccentricity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConicClass {
    Circular,
    Elliptic,
    Parabolic,
    Hyperbolic,
}

impl ConicClass {
    /// Thresholds are checked in order: circular, elliptic, parabolic, hyperbolic.
    fn with_parabolic_tolerance(e: f64, tolerance: f64) -> Self {
        if e < CIRCULAR_ECCENTRICITY {
            ConicClass::Circular
        } else if e < 1.0 {
            ConicClass::Elliptic
        } else if (e - 1.0).abs() < tolerance {
            ConicClass::Parabolic
        } else {
            ConicClass::Hyperbolic
        }
    }

    /// Label class. For `1e-3 <= |e - 1| < 1e-2` this says parabolic while the
    /// sampled path is hyperbolic.
    pub fn for_display(e: f64) -> Self {
        Self::with_parabolic_tolerance(e, PARABOLIC_LABEL_TOLERANCE)
    }

    /// Class that selects the sampling formula.
    pub fn for_sampling(e: f64) -> Self {
        Self::with_parabolic_tolerance(e, PARABOLIC_SAMPLER_TOLERANCE)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConicClass::Circular => "Circular",
            ConicClass::Elliptic => "Elliptic",
            ConicClass::Parabolic => "Parabolic",
            ConicClass::Hyperbolic => "Hyperbolic",
        }
    }
}

impl fmt::Display for ConicClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0 => ConicClass::Circular; "zero")]
    #[test_case(9.99e-4 => ConicClass::Circular; "just below circular threshold")]
    #[test_case(1e-3 => ConicClass::Elliptic; "circular threshold is exclusive")]
    #[test_case(0.5 => ConicClass::Elliptic; "ellipse")]
    #[test_case(0.9999 => ConicClass::Elliptic; "near parabolic from below")]
    #[test_case(1.0 => ConicClass::Parabolic; "exact parabola")]
    #[test_case(1.0005 => ConicClass::Parabolic; "inside sampler tolerance")]
    #[test_case(1.005 => ConicClass::Hyperbolic; "between the two tolerances")]
    #[test_case(1.5 => ConicClass::Hyperbolic; "hyperbola")]
    #[test_case(-0.2 => ConicClass::Circular; "negative eccentricity")]
    fn sampling_class(e: f64) -> ConicClass {
        ConicClass::for_sampling(e)
    }

    #[test_case(1.0005 => ConicClass::Parabolic; "inside sampler tolerance")]
    #[test_case(1.005 => ConicClass::Parabolic; "between the two tolerances")]
    #[test_case(1.0099 => ConicClass::Parabolic; "just inside label tolerance")]
    #[test_case(1.01 => ConicClass::Hyperbolic; "label tolerance is exclusive")]
    #[test_case(0.3 => ConicClass::Elliptic; "ellipse")]
    fn display_class(e: f64) -> ConicClass {
        ConicClass::for_display(e)
    }

    #[test]
    fn label_and_sampler_disagree_between_tolerances() {
        let elements = OrbitalElements::new(7000.0, 1.005, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(elements.display_class(), ConicClass::Parabolic);
        assert_eq!(ConicClass::for_sampling(elements.e), ConicClass::Hyperbolic);
    }

    #[test]
    fn nan_eccentricity_falls_through_to_hyperbolic() {
        assert_eq!(ConicClass::for_sampling(f64::NAN), ConicClass::Hyperbolic);
    }
}
