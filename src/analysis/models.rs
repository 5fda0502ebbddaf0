use std::fmt;

use crate::constants::{POINT_MASS_COEFFICIENT, RIGID_BODY_FACTOR};
use crate::errors::AnalysisError;

/// Theoretical description of a ball leaving the ramp and falling off the
/// table.
///
/// Both models predict `A = slope * sqrt(h)` with `slope = k * sqrt(h0)`;
/// they differ only in `k`. The point mass keeps all of its potential energy
/// as translation (`k = 2`). The rolling solid sphere loses 2/7 of it to
/// rotation, giving `k = sqrt(20/7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeModel {
    PointMass,
    RigidBody,
}

impl RangeModel {
    pub const ALL: [RangeModel; 2] = [RangeModel::PointMass, RangeModel::RigidBody];

    pub fn coefficient(&self) -> f64 {
        match self {
            RangeModel::PointMass => POINT_MASS_COEFFICIENT,
            RangeModel::RigidBody => RIGID_BODY_FACTOR.sqrt(),
        }
    }

    /// Slope of `A` against `sqrt(h)` for a table of height `launch_height`.
    pub fn slope(&self, launch_height: f64) -> Result<f64, AnalysisError> {
        if !launch_height.is_finite() || launch_height <= 0.0 {
            return Err(AnalysisError::ModelError(format!(
                "launch height must be positive, got {}",
                launch_height
            )));
        }
        Ok(self.coefficient() * launch_height.sqrt())
    }

    pub fn predict(&self, slope: f64, sqrt_height: f64) -> f64 {
        slope * sqrt_height
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeModel::PointMass => "Model 1 (Point Mass)",
            RangeModel::RigidBody => "Model 2 (Rigid Body)",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            RangeModel::PointMass => "Model 1",
            RangeModel::RigidBody => "Model 2",
        }
    }
}

impl fmt::Display for RangeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both theoretical slopes for one launch height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSlopes {
    pub point_mass: f64,
    pub rigid_body: f64,
}

impl ModelSlopes {
    pub fn new(launch_height: f64) -> Result<Self, AnalysisError> {
        Ok(ModelSlopes {
            point_mass: RangeModel::PointMass.slope(launch_height)?,
            rigid_body: RangeModel::RigidBody.slope(launch_height)?,
        })
    }

    pub fn get(&self, model: RangeModel) -> f64 {
        match model {
            RangeModel::PointMass => self.point_mass,
            RangeModel::RigidBody => self.rigid_body,
        }
    }
}
