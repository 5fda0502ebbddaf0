use rand::Rng;
use tracing::debug;

use crate::analysis::models::RangeModel;
use crate::constants::NOISE_AMPLITUDE;
use crate::errors::AnalysisError;

/// Something that can produce a measured range for every ramp height.
pub trait RangeSource {
    fn ranges(&mut self, heights: &[f64], launch_height: f64) -> Result<Vec<f64>, AnalysisError>;
}

/// Fake measurements: the rigid body model plus uniform noise.
///
/// The random source is injected so runs can be reproduced with a seeded
/// generator, or left non-deterministic with `rand::thread_rng()`.
pub struct SyntheticRanges<R: Rng> {
    rng: R,
    model: RangeModel,
    noise_amplitude: f64,
}

impl<R: Rng> SyntheticRanges<R> {
    pub fn new(rng: R) -> Self {
        SyntheticRanges {
            rng,
            model: RangeModel::RigidBody,
            noise_amplitude: NOISE_AMPLITUDE,
        }
    }

    pub fn with_model(mut self, model: RangeModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_noise_amplitude(mut self, noise_amplitude: f64) -> Self {
        self.noise_amplitude = noise_amplitude;
        self
    }

    fn sample_noise(&mut self) -> f64 {
        if self.noise_amplitude == 0.0 {
            0.0
        } else {
            self.rng
                .gen_range(-self.noise_amplitude..self.noise_amplitude)
        }
    }
}

impl<R: Rng> RangeSource for SyntheticRanges<R> {
    fn ranges(&mut self, heights: &[f64], launch_height: f64) -> Result<Vec<f64>, AnalysisError> {
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(AnalysisError::ValidationError(format!(
                "noise amplitude must be non-negative, got {}",
                self.noise_amplitude
            )));
        }
        let slope = self.model.slope(launch_height)?;
        debug!(
            model = self.model.short_name(),
            slope,
            noise = self.noise_amplitude,
            "Generating synthetic ranges"
        );

        let mut ranges = Vec::with_capacity(heights.len());
        for &h in heights {
            if !h.is_finite() || h <= 0.0 {
                return Err(AnalysisError::ValidationError(format!(
                    "height must be positive, got {}",
                    h
                )));
            }
            ranges.push(self.model.predict(slope, h.sqrt()) + self.sample_noise());
        }
        Ok(ranges)
    }
}

/// Real measurements taken on the rig, one per height.
#[derive(Debug, Clone)]
pub struct MeasuredRanges {
    ranges: Vec<f64>,
}

impl MeasuredRanges {
    pub fn new(ranges: Vec<f64>) -> Self {
        MeasuredRanges { ranges }
    }
}

impl RangeSource for MeasuredRanges {
    fn ranges(&mut self, heights: &[f64], _launch_height: f64) -> Result<Vec<f64>, AnalysisError> {
        if heights.len() != self.ranges.len() {
            return Err(AnalysisError::ValidationError(format!(
                "{} measured ranges supplied for {} heights",
                self.ranges.len(),
                heights.len()
            )));
        }
        Ok(self.ranges.clone())
    }
}
