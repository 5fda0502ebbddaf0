use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::analysis::models::RangeModel;
use crate::analysis::pipeline::AnalysisResult;
use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::utils::grid::{bounds, linspace, points_to_pixels};

const AXIS_PADDING: f64 = 0.05; // fraction of the data span

/// The four series of the range chart, in data coordinates.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub points: Vec<(f64, f64)>, // (sqrt(h), A)
    pub uncertainty: f64,
    pub point_mass_line: Vec<(f64, f64)>,
    pub rigid_body_line: Vec<(f64, f64)>,
    pub fit_line: Vec<(f64, f64)>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ChartData {
    pub fn build(result: &AnalysisResult, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        let points = result.samples.points();
        let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
        let (x_min, x_max) = bounds(&xs)
            .ok_or_else(|| AnalysisError::ChartError("no samples to plot".to_string()))?;

        let grid = linspace(x_min, x_max, config.grid_points);
        let model_line = |model: RangeModel| -> Vec<(f64, f64)> {
            let slope = result.slopes.get(model);
            grid.iter().map(|&x| (x, model.predict(slope, x))).collect()
        };
        let point_mass_line = model_line(RangeModel::PointMass);
        let rigid_body_line = model_line(RangeModel::RigidBody);
        let fit_line: Vec<(f64, f64)> = grid.iter().map(|&x| (x, result.fit.predict(x))).collect();

        let uncertainty = config.measurement_uncertainty;
        let ys: Vec<f64> = points
            .iter()
            .flat_map(|(_, y)| [y - uncertainty, y + uncertainty])
            .chain(
                point_mass_line
                    .iter()
                    .chain(&rigid_body_line)
                    .chain(&fit_line)
                    .map(|(_, y)| *y),
            )
            .collect();
        let (y_min, y_max) = bounds(&ys)
            .ok_or_else(|| AnalysisError::ChartError("no values to plot".to_string()))?;

        Ok(ChartData {
            points,
            uncertainty,
            point_mass_line,
            rigid_body_line,
            fit_line,
            x_range: padded(x_min, x_max),
            y_range: padded(y_min, y_max),
        })
    }

    /// Writes the chart as a PNG to `config.output_path`.
    pub fn render_png(&self, config: &AnalysisConfig) -> Result<(), AnalysisError> {
        let root =
            BitMapBackend::new(&config.output_path, config.image_size()).into_drawing_area();
        self.draw(&root, config.dpi)?;
        info!(path = %config.output_path.display(), "Chart saved");
        Ok(())
    }

    pub fn render_svg(&self, path: &Path, config: &AnalysisConfig) -> Result<(), AnalysisError> {
        let root = SVGBackend::new(path, config.image_size()).into_drawing_area();
        self.draw(&root, config.dpi)?;
        info!(path = %path.display(), "Chart saved");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        dpi: u32,
    ) -> Result<(), AnalysisError> {
        let px = |pt: f64| points_to_pixels(pt, dpi);
        let axis_font = FontDesc::new(FontFamily::SansSerif, px(14.0), FontStyle::Normal);
        let tick_font = FontDesc::new(FontFamily::SansSerif, px(12.0), FontStyle::Normal);
        let legend_font = FontDesc::new(FontFamily::SansSerif, px(12.0), FontStyle::Normal);
        let line_width = px(1.5).round() as u32;
        let marker_size = px(3.0).round() as u32;
        let cap_width = px(5.0).round() as u32;

        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(root)
            .margin(px(10.0) as u32)
            .set_label_area_size(LabelAreaPosition::Bottom, px(45.0) as u32)
            .set_label_area_size(LabelAreaPosition::Left, px(55.0) as u32)
            .build_cartesian_2d(
                self.x_range.0..self.x_range.1,
                self.y_range.0..self.y_range.1,
            )
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .set_all_tick_mark_size(-(px(5.0) as i32))
            .x_desc("√h (m^1/2)")
            .y_desc("A (m)")
            .axis_desc_style(axis_font.color(&BLACK))
            .label_style(tick_font.color(&BLACK))
            .x_label_formatter(&|x: &f64| format!("{:.2}", x))
            .y_label_formatter(&|y: &f64| format!("{:.2}", y))
            .draw()
            .map_err(chart_error)?;

        let u = self.uncertainty;
        chart
            .draw_series(self.points.iter().map(|&(x, y)| {
                ErrorBar::new_vertical(
                    x,
                    y - u,
                    y,
                    y + u,
                    BLACK.stroke_width(line_width),
                    cap_width,
                )
            }))
            .map_err(chart_error)?;
        chart
            .draw_series(
                self.points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), marker_size, BLACK.filled())),
            )
            .map_err(chart_error)?
            .label("Experimental Data")
            .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, BLACK.filled()));

        let dash = px(4.0).round() as u32;
        chart
            .draw_series(DashedLineSeries::new(
                self.point_mass_line.iter().copied(),
                dash,
                dash / 2,
                BLUE.stroke_width(line_width),
            ))
            .map_err(chart_error)?
            .label(RangeModel::PointMass.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(line_width))
            });

        chart
            .draw_series(LineSeries::new(
                self.rigid_body_line.iter().copied(),
                RED.stroke_width(line_width),
            ))
            .map_err(chart_error)?
            .label(RangeModel::RigidBody.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(line_width))
            });

        let dot = line_width.max(1);
        chart
            .draw_series(DashedLineSeries::new(
                self.fit_line.iter().copied(),
                dot,
                dot * 2,
                GREEN.stroke_width(line_width),
            ))
            .map_err(chart_error)?
            .label("Linear Fit (Experimental)")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(line_width))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(legend_font.color(&BLACK))
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * AXIS_PADDING
    } else {
        (max.abs() * AXIS_PADDING).max(1e-3)
    };
    (min - pad, max + pad)
}

fn chart_error<E: Display>(err: E) -> AnalysisError {
    AnalysisError::ChartError(err.to_string())
}
