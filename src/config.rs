use std::path::PathBuf;

use crate::constants::{
    DEFAULT_LAUNCH_HEIGHT, FIGURE_SIZE_INCHES, GRID_POINTS, MEASUREMENT_UNCERTAINTY, OUTPUT_DPI,
    OUTPUT_PATH,
};
use crate::errors::AnalysisError;

/// Which model wins when both percentage errors are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    PreferPointMass,
    PreferRigidBody,
}

/// Parameters of one analysis run.
///
/// Table height, error bar size and chart output are plain values here so a
/// different rig can be analysed without touching the code.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub launch_height: f64, // m
    pub measurement_uncertainty: f64, // m, symmetric error bar on A
    pub grid_points: usize,
    pub tie_break: TieBreak,
    pub output_path: PathBuf,
    pub dpi: u32,
    pub figure_size: (f64, f64), // inches
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            launch_height: DEFAULT_LAUNCH_HEIGHT,
            measurement_uncertainty: MEASUREMENT_UNCERTAINTY,
            grid_points: GRID_POINTS,
            tie_break: TieBreak::default(),
            output_path: PathBuf::from(OUTPUT_PATH),
            dpi: OUTPUT_DPI,
            figure_size: FIGURE_SIZE_INCHES,
        }
    }
}

impl AnalysisConfig {
    pub fn new(launch_height: f64) -> Self {
        AnalysisConfig {
            launch_height,
            ..Default::default()
        }
    }

    pub fn with_measurement_uncertainty(mut self, uncertainty: f64) -> Self {
        self.measurement_uncertainty = uncertainty;
        self
    }

    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    /// Raster size of the chart in pixels.
    pub fn image_size(&self) -> (u32, u32) {
        let (width, height) = self.figure_size;
        (
            (width * self.dpi as f64).round() as u32,
            (height * self.dpi as f64).round() as u32,
        )
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.launch_height.is_finite() || self.launch_height <= 0.0 {
            return Err(AnalysisError::ValidationError(format!(
                "launch height must be positive, got {}",
                self.launch_height
            )));
        }
        if !self.measurement_uncertainty.is_finite() || self.measurement_uncertainty < 0.0 {
            return Err(AnalysisError::ValidationError(format!(
                "measurement uncertainty must be non-negative, got {}",
                self.measurement_uncertainty
            )));
        }
        if self.grid_points < 2 {
            return Err(AnalysisError::ValidationError(format!(
                "chart grid needs at least 2 points, got {}",
                self.grid_points
            )));
        }
        if self.dpi == 0 || self.figure_size.0 <= 0.0 || self.figure_size.1 <= 0.0 {
            return Err(AnalysisError::ValidationError(
                "figure size and dpi must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
