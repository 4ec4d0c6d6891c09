pub mod rotation;

pub use rotation::{rotate_to_reference, rotation_matrix};
