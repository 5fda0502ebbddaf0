use crate::errors::AnalysisError;
use crate::experiment::data_source::RangeSource;

/// Paired measurements of ramp height `h` and horizontal range `A`, both in
/// meters.
///
/// Heights are strictly positive and both sequences have the same non-zero
/// length; the only way to get a `SampleSet` is through [`SampleSet::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    heights: Vec<f64>,
    ranges: Vec<f64>,
}

impl SampleSet {
    pub fn new(heights: Vec<f64>, ranges: Vec<f64>) -> Result<Self, AnalysisError> {
        if heights.is_empty() || ranges.is_empty() {
            return Err(AnalysisError::ValidationError(
                "sample set must not be empty".to_string(),
            ));
        }
        if heights.len() != ranges.len() {
            return Err(AnalysisError::ValidationError(format!(
                "got {} heights but {} ranges",
                heights.len(),
                ranges.len()
            )));
        }
        if let Some((i, h)) = heights
            .iter()
            .enumerate()
            .find(|(_, h)| !h.is_finite() || **h <= 0.0)
        {
            return Err(AnalysisError::ValidationError(format!(
                "height #{} must be positive, got {}",
                i, h
            )));
        }
        if let Some((i, a)) = ranges.iter().enumerate().find(|(_, a)| !a.is_finite()) {
            return Err(AnalysisError::ValidationError(format!(
                "range #{} is not a finite number: {}",
                i, a
            )));
        }

        Ok(SampleSet { heights, ranges })
    }

    /// Builds a sample set by asking `source` for the range at every height.
    pub fn from_source<S: RangeSource + ?Sized>(
        heights: Vec<f64>,
        launch_height: f64,
        source: &mut S,
    ) -> Result<Self, AnalysisError> {
        let ranges = source.ranges(&heights, launch_height)?;
        SampleSet::new(heights, ranges)
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// The linearized x axis, `sqrt(h)`.
    pub fn sqrt_heights(&self) -> Vec<f64> {
        self.heights.iter().map(|h| h.sqrt()).collect()
    }

    /// `(sqrt(h), A)` pairs in sample order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.heights
            .iter()
            .zip(&self.ranges)
            .map(|(h, a)| (h.sqrt(), *a))
            .collect()
    }
}
