pub mod conic;
pub mod orbit;

pub use conic::{classify_and_sample, ConicSampling};
pub use orbit::{generate_from_elements, generate_orbit, generate_orbit_checked};
