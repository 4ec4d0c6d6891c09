pub mod app;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod input;
pub mod models;
pub mod physics;
pub mod render;

pub use errors::OrbitVizError;
pub use models::{ConicClass, OrbitPath, OrbitalElements};
pub use physics::{generate_orbit, generate_orbit_checked};
