use tracing::debug;

use crate::analysis::models::{ModelSlopes, RangeModel};
use crate::config::TieBreak;
use crate::constants::TIE_TOLERANCE;
use crate::errors::AnalysisError;

/// Relative deviation of the fitted slope from a model slope, in percent.
pub fn percentage_error(slope_exp: f64, slope_model: f64) -> Result<f64, AnalysisError> {
    if !slope_model.is_finite() || slope_model == 0.0 {
        return Err(AnalysisError::ComparisonError(format!(
            "model slope must be finite and non-zero, got {}",
            slope_model
        )));
    }
    if !slope_exp.is_finite() {
        return Err(AnalysisError::ComparisonError(format!(
            "fitted slope is not a finite number: {}",
            slope_exp
        )));
    }
    Ok(100.0 * (slope_exp - slope_model).abs() / slope_model.abs())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub error_point_mass: f64, // %
    pub error_rigid_body: f64, // %
    pub winner: RangeModel,
    pub tied: bool,
}

impl Comparison {
    /// Picks the model whose slope is closer, in percent, to the fitted one.
    ///
    /// Errors within `TIE_TOLERANCE` of each other count as a tie and are
    /// settled by `tie_break`.
    pub fn evaluate(
        slope_exp: f64,
        slopes: &ModelSlopes,
        tie_break: TieBreak,
    ) -> Result<Self, AnalysisError> {
        let error_point_mass = percentage_error(slope_exp, slopes.point_mass)?;
        let error_rigid_body = percentage_error(slope_exp, slopes.rigid_body)?;

        let scale = error_point_mass.max(error_rigid_body).max(f64::MIN_POSITIVE);
        let tied = (error_point_mass - error_rigid_body).abs() <= TIE_TOLERANCE * scale;

        let winner = if tied {
            match tie_break {
                TieBreak::PreferPointMass => RangeModel::PointMass,
                TieBreak::PreferRigidBody => RangeModel::RigidBody,
            }
        } else if error_rigid_body < error_point_mass {
            RangeModel::RigidBody
        } else {
            RangeModel::PointMass
        };

        debug!(
            error_point_mass,
            error_rigid_body,
            tied,
            winner = winner.short_name(),
            "Compared fitted slope with models"
        );

        Ok(Comparison {
            error_point_mass,
            error_rigid_body,
            winner,
            tied,
        })
    }

    pub fn error_for(&self, model: RangeModel) -> f64 {
        match model {
            RangeModel::PointMass => self.error_point_mass,
            RangeModel::RigidBody => self.error_rigid_body,
        }
    }
}
