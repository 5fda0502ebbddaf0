// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s², cancels out of both range formulas

// Model Constants
pub const POINT_MASS_COEFFICIENT: f64 = 2.0; // A = 2 * sqrt(h0 * h)
pub const RIGID_BODY_FACTOR: f64 = 20.0 / 7.0; // solid sphere, I = 2/5 m r²

// Experiment Parameters
pub const DEFAULT_LAUNCH_HEIGHT: f64 = 0.85; // m (table height)
// Ramp heights, m
pub const DEFAULT_HEIGHTS: [f64; 10] = [0.02, 0.04, 0.06, 0.08, 0.10, 0.12, 0.14, 0.16, 0.18, 0.20];

// Synthetic Data
pub const NOISE_AMPLITUDE: f64 = 0.01; // m, uniform in [-a, a)

// Measurement
pub const MEASUREMENT_UNCERTAINTY: f64 = 0.005; // m (5 mm placeholder)

// Comparison
pub const TIE_TOLERANCE: f64 = 1e-9; // relative

// Chart Output
pub const OUTPUT_PATH: &str = "result.png";
pub const OUTPUT_DPI: u32 = 300;
pub const FIGURE_SIZE_INCHES: (f64, f64) = (10.0, 7.0);
pub const GRID_POINTS: usize = 100;
