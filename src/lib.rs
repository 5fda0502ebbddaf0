pub mod analysis;
pub mod config;
pub mod constants;
pub mod errors;
pub mod experiment;
pub mod report_system;
pub mod utils;

pub use config::{AnalysisConfig, TieBreak};
pub use constants::*;
pub use errors::AnalysisError;

// Re-export commonly used items from analysis
pub use analysis::comparison::{percentage_error, Comparison};
pub use analysis::fit::LinearFit;
pub use analysis::models::{ModelSlopes, RangeModel};
pub use analysis::pipeline::{AnalysisResult, RangeAnalysis};

// Re-export commonly used items from experiment
pub use experiment::data_source::{MeasuredRanges, RangeSource, SyntheticRanges};
pub use experiment::samples::SampleSet;

// Re-export commonly used items from report_system
pub use report_system::chart::ChartData;
pub use report_system::report::AnalysisReport;
