use crate::constants::{HYPERBOLIC_ANOMALY_LIMIT_DEG, PARABOLIC_ANOMALY_LIMIT_DEG, PI, SAMPLE_COUNT};
use crate::models::ConicClass;
use nalgebra as na;

/// Samples of a conic in its own orbital plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ConicSampling {
    pub class: ConicClass,
    /// True anomaly of each sample [rad]
    pub anomalies: Vec<f64>,
    /// Focal radius of each sample [km]
    pub radii: Vec<f64>,
}

impl ConicSampling {
    /// Perifocal points: x towards periapsis, z along the orbit normal.
    pub fn planar_points(&self) -> Vec<na::Vector3<f64>> {
        self.anomalies
            .iter()
            .zip(&self.radii)
            .map(|(theta, r)| na::Vector3::new(r * theta.cos(), r * theta.sin(), 0.0))
            .collect()
    }
}

/// `n` evenly spaced values over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Picks the anomaly window and radius formula for `e` and samples the conic.
///
/// Closed orbits cover the full revolution. Open orbits use fixed windows of
/// ±89° (parabola) and ±60° (hyperbola) around periapsis, independent of `e`.
/// `a` is a positive magnitude in every branch.
pub fn classify_and_sample(a: f64, e: f64) -> ConicSampling {
    let class = ConicClass::for_sampling(e);

    let (anomalies, radii): (Vec<f64>, Vec<f64>) = match class {
        ConicClass::Circular | ConicClass::Elliptic => {
            let p = a * (1.0 - e * e);
            let theta = linspace(0.0, 2.0 * PI, SAMPLE_COUNT);
            let r = theta.iter().map(|t| p / (1.0 + e * t.cos())).collect();
            (theta, r)
        }
        ConicClass::Parabolic => {
            let limit = PARABOLIC_ANOMALY_LIMIT_DEG.to_radians();
            let p = 2.0 * a;
            let theta = linspace(-limit, limit, SAMPLE_COUNT);
            let r = theta.iter().map(|t| p / (1.0 + t.cos())).collect();
            (theta, r)
        }
        ConicClass::Hyperbolic => {
            let limit = HYPERBOLIC_ANOMALY_LIMIT_DEG.to_radians();
            let p = a * (e * e - 1.0);
            let theta = linspace(-limit, limit, SAMPLE_COUNT);
            let r = theta.iter().map(|t| p / (1.0 + e * t.cos())).collect();
            (theta, r)
        }
    };

    tracing::debug!(?class, a, e, samples = anomalies.len(), "sampled conic");

    ConicSampling {
        class,
        anomalies,
        radii,
    }
}
