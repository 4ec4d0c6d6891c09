use crate::input::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitVizError {
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: Field, value: String },

    #[error("{0} is not a finite number")]
    NonFiniteElement(Field),

    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    #[error("eccentricity must not be negative, got {0}")]
    NegativeEccentricity(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Unable to show details: {0}")]
    DetailsUnavailable(String),
}

impl PartialEq for OrbitVizError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitVizError::*;
        match (self, other) {
            (
                InvalidField { field: f1, value: v1 },
                InvalidField { field: f2, value: v2 },
            ) => f1 == f2 && v1 == v2,
            (NonFiniteElement(a), NonFiniteElement(b)) => a == b,
            (NonPositiveSemiMajorAxis(a), NonPositiveSemiMajorAxis(b)) => {
                a.to_bits() == b.to_bits()
            }
            (NegativeEccentricity(a), NegativeEccentricity(b)) => a.to_bits() == b.to_bits(),
            (DetailsUnavailable(a), DetailsUnavailable(b)) => a == b,

            // Wrapped library errors only compare by variant
            (Io(_), Io(_)) => true,
            (Csv(_), Csv(_)) => true,
            (Image(_), Image(_)) => true,
            (Settings(_), Settings(_)) => true,

            _ => false,
        }
    }
}
