use std::fmt;

use crate::analysis::models::RangeModel;
use crate::analysis::pipeline::AnalysisResult;

const SEPARATOR_WIDTH: usize = 30;

/// Console summary of an analysis run.
pub struct AnalysisReport<'a> {
    result: &'a AnalysisResult,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        AnalysisReport { result }
    }

    fn separator() -> String {
        "-".repeat(SEPARATOR_WIDTH)
    }

    pub fn conclusion(&self) -> String {
        format!(
            "Conclusion: {} is more accurate.",
            self.result.comparison.winner.label()
        )
    }

    pub fn display_report(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "--- ANALYSIS REPORT ---")?;
        writeln!(f, "Launch height (h0): {:.4} m", result.launch_height)?;
        writeln!(f, "{}", Self::separator())?;

        writeln!(f, "THEORETICAL SLOPES (slope = A / sqrt(h))")?;
        for model in RangeModel::ALL {
            writeln!(f, "{}: {:.4}", model.label(), result.slopes.get(model))?;
        }
        writeln!(f, "{}", Self::separator())?;

        writeln!(f, "EXPERIMENTAL RESULTS")?;
        writeln!(f, "Linear Fit Slope: {:.4}", result.fit.slope)?;
        writeln!(f, "Linear Fit Intercept: {:.4}", result.fit.intercept)?;
        writeln!(f, "{}", Self::separator())?;

        writeln!(f, "COMPARISON (Smaller error = better fit):")?;
        for model in RangeModel::ALL {
            writeln!(
                f,
                "Error in {}: {:.2} %",
                model.short_name(),
                result.comparison.error_for(model)
            )?;
        }
        writeln!(f, "{}", Self::separator())?;

        writeln!(f, "{}", self.conclusion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pipeline::RangeAnalysis;
    use crate::config::AnalysisConfig;
    use crate::constants::DEFAULT_HEIGHTS;
    use crate::experiment::data_source::MeasuredRanges;

    fn noiseless_result() -> AnalysisResult {
        let ranges: Vec<f64> = DEFAULT_HEIGHTS
            .iter()
            .map(|h| (20.0_f64 / 7.0).sqrt() * (0.85 * h).sqrt())
            .collect();
        let mut source = MeasuredRanges::new(ranges);
        RangeAnalysis::new(AnalysisConfig::default())
            .run_with_source(DEFAULT_HEIGHTS.to_vec(), &mut source)
            .unwrap()
    }

    #[test]
    fn test_report_layout() {
        let result = noiseless_result();
        let text = AnalysisReport::new(&result).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "--- ANALYSIS REPORT ---");
        assert_eq!(lines[1], "Launch height (h0): 0.8500 m");
        assert_eq!(lines[2], "------------------------------");
        assert_eq!(lines[3], "THEORETICAL SLOPES (slope = A / sqrt(h))");
        assert_eq!(lines[4], "Model 1 (Point Mass): 1.8439");
        assert_eq!(lines[5], "Model 2 (Rigid Body): 1.5584");
        assert_eq!(lines[7], "EXPERIMENTAL RESULTS");
        assert_eq!(lines[8], "Linear Fit Slope: 1.5584");
        assert!(lines[9].starts_with("Linear Fit Intercept: ") && lines[9].ends_with("0.0000"));
        assert_eq!(lines[11], "COMPARISON (Smaller error = better fit):");
        assert_eq!(lines[12], "Error in Model 1: 15.48 %");
        assert_eq!(lines[13], "Error in Model 2: 0.00 %");
        assert_eq!(lines[15], "Conclusion: Model 2 (Rigid Body) is more accurate.");
    }

    #[test]
    fn test_conclusion_names_point_mass() {
        let ranges: Vec<f64> = DEFAULT_HEIGHTS.iter().map(|h| 2.0 * h.sqrt()).collect();
        let mut source = MeasuredRanges::new(ranges);
        let result = RangeAnalysis::new(AnalysisConfig::new(1.0))
            .run_with_source(DEFAULT_HEIGHTS.to_vec(), &mut source)
            .unwrap();

        assert_eq!(
            AnalysisReport::new(&result).conclusion(),
            "Conclusion: Model 1 (Point Mass) is more accurate."
        );
    }
}
