// Sampling
pub const SAMPLE_COUNT: usize = 800; // Points per generated path

// Eccentricity thresholds
pub const CIRCULAR_ECCENTRICITY: f64 = 1e-3; // Below this the orbit is labelled circular
pub const PARABOLIC_SAMPLER_TOLERANCE: f64 = 1e-3; // |e - 1| below this selects p / (1 + cos θ)
pub const PARABOLIC_LABEL_TOLERANCE: f64 = 1e-2; // |e - 1| below this is displayed as parabolic

// Open-conic anomaly windows (degrees, symmetric about periapsis)
pub const PARABOLIC_ANOMALY_LIMIT_DEG: f64 = 89.0;
pub const HYPERBOLIC_ANOMALY_LIMIT_DEG: f64 = 60.0;

// Default figure, matching the original window size
pub const DEFAULT_FIGURE_WIDTH: u32 = 1200;
pub const DEFAULT_FIGURE_HEIGHT: u32 = 700;
pub const DEFAULT_VIEW_ELEVATION_DEG: f64 = 30.0;
pub const DEFAULT_VIEW_AZIMUTH_DEG: f64 = -60.0;
pub const DEFAULT_FIGURE_FILE: &str = "orbita.png";

// Math
pub const PI: f64 = std::f64::consts::PI;
