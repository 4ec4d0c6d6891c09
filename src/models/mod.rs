pub mod elements;
pub mod path;

pub use elements::{ConicClass, OrbitalElements};
pub use path::OrbitPath;
