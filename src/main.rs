use projectile_analysis::*;
use tracing::{info, warn};

fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => info!("Logging initialised"),
        Err(e) => eprintln!("Failed to init logging. {}", e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = AnalysisConfig::new(DEFAULT_LAUNCH_HEIGHT);
    let heights = DEFAULT_HEIGHTS.to_vec();

    // Example data: rigid body model plus noise. Swap in
    // `MeasuredRanges::new(vec![...])` to analyse real measurements.
    warn!("Using synthetic ranges, replace with measured data");
    let mut source = SyntheticRanges::new(rand::thread_rng());

    let analysis = RangeAnalysis::new(config.clone());
    let result = analysis.run_with_source(heights, &mut source)?;

    let chart = ChartData::build(&result, &config)?;
    if let Err(e) = chart.render_png(&config) {
        warn!("Chart not written: {}", e);
    }

    AnalysisReport::new(&result).display_report();

    Ok(())
}
