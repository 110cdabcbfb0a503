//! Render analysis series to figure files
//!
//! `run_plots` drives a whole batch: it simulates each configured mass
//! factor, derives the requested series, and persists one PNG per job,
//! named after the figure title. The simulation results never depend on
//! rendering succeeding, and a failed fit only drops the overlay series
//! from the figure.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use plotters::prelude::*;

use crate::analysis::fit::poly_fit;
use crate::analysis::series::{phase_portrait, velocity_decay, Series, SeriesStyle};
use crate::simulation::engine::simulate;
use crate::simulation::scenario::{PlotKind, Scenario};

/// A complete figure: title, axis labels, and the series to draw.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// Run every configured plot job and write the figures to disk.
pub fn run_plots(scenario: Scenario) -> Result<()> {
    fs::create_dir_all(&scenario.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            scenario.output_dir.display()
        )
    })?;

    for job in &scenario.plots {
        let result = simulate(job.mass_factor)?;
        info!(
            "mass factor {}: {} events",
            job.mass_factor, result.collision_count
        );

        let raw = match job.kind {
            PlotKind::VelocityVsVelocity => phase_portrait(&result, job.mass_factor),
            PlotKind::VelocityVsCollision => velocity_decay(&result),
        };

        let mut series = vec![raw];
        if let Some(model) = job.fit {
            // Fit against the series as plotted so the overlay shares the
            // raw data's axes
            let (xs, ys): (Vec<f64>, Vec<f64>) = series[0].points.iter().copied().unzip();
            match poly_fit(&xs, &ys, model) {
                Ok(fit) => series.push(fit.overlay_series(&xs)),
                Err(e) => warn!(
                    "skipping fit overlay for mass factor {}: {e}",
                    job.mass_factor
                ),
            }
        }

        let (x_label, y_label, base_title) = match job.kind {
            PlotKind::VelocityVsVelocity => (
                "block 1 velocity (scaled)",
                "block 2 velocity",
                "velocity vs velocity",
            ),
            PlotKind::VelocityVsCollision => (
                "collision number",
                "block 1 velocity",
                "velocity vs collision",
            ),
        };

        let figure = Figure {
            title: format!("{base_title} (mass factor {})", job.mass_factor),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series,
        };

        let path = render_figure(&figure, &scenario.output_dir, scenario.figure_size)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Draw a figure and save it as `<title>.png` under `out_dir`.
/// Returns the path of the written file.
pub fn render_figure(figure: &Figure, out_dir: &Path, size: u32) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.png", figure.title));

    {
        let root = BitMapBackend::new(&path, (size, size)).into_drawing_area();
        root.fill(&WHITE)?;

        let ((x_lo, x_hi), (y_lo, y_hi)) = axis_bounds(&figure.series);

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc(&figure.x_label)
            .y_desc(&figure.y_label)
            .draw()?;

        for (i, s) in figure.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            match s.style {
                SeriesStyle::Line => {
                    chart
                        .draw_series(LineSeries::new(s.points.iter().copied(), &color))?
                        .label(&s.label)
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 16, y)], color)
                        });
                }
                SeriesStyle::Scatter => {
                    chart
                        .draw_series(
                            s.points
                                .iter()
                                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                        )?
                        .label(&s.label)
                        .legend(move |(x, y)| Circle::new((x + 8, y), 3, color.filled()));
                }
            }
        }

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;

        root.present()?;
    }

    Ok(path)
}

/// Data bounds over all series, padded so edge markers stay visible.
fn axis_bounds(series: &[Series]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    // No points at all: fall back to a unit window
    if !x_min.is_finite() || !y_min.is_finite() {
        return ((0.0, 1.0), (0.0, 1.0));
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        let pad = 0.05 * (hi - lo);
        (lo - pad, hi + pad)
    }
}
