//! Build a runnable plot batch from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - resolved output settings (directory, figure size)
//! - one `PlotJob` per configured figure (view kind, mass factor,
//!   optional fit model)
//!
//! The scenario is consumed by the visualization layer, which runs the
//! simulation for each job and renders the derived series.

use std::path::PathBuf;

use crate::analysis::fit::PolyModel;
use crate::configuration::config::{FitModelConfig, PlotKindConfig, ScenarioConfig};

const DEFAULT_FIGURE_SIZE: u32 = 700;

/// Which derived view a job draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    VelocityVsVelocity,  // phase portrait
    VelocityVsCollision, // heavy block decay across collisions
}

/// One figure to produce: a simulation run plus its derived view.
#[derive(Debug, Clone)]
pub struct PlotJob {
    pub kind: PlotKind,
    pub mass_factor: f64,
    pub fit: Option<PolyModel>, // overlay model, if any
}

/// Fully-initialized plot batch
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the output settings and the list of plot jobs, and is read
/// by the visualization layer responsible for running and rendering them.
pub struct Scenario {
    pub output_dir: PathBuf,
    pub figure_size: u32,
    pub plots: Vec<PlotJob>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Jobs: map `PlotConfig` -> runtime `PlotJob`
        let plots: Vec<PlotJob> = cfg
            .plots
            .iter()
            .map(|pc| PlotJob {
                kind: match pc.kind {
                    PlotKindConfig::VelocityVsVelocity => PlotKind::VelocityVsVelocity,
                    PlotKindConfig::VelocityVsCollision => PlotKind::VelocityVsCollision,
                },
                mass_factor: pc.mass_factor,
                fit: pc.fit.map(|fc| match fc {
                    FitModelConfig::Linear => PolyModel::Linear,
                    FitModelConfig::Quadratic => PolyModel::Quadratic,
                    FitModelConfig::Cubic => PolyModel::Cubic,
                }),
            })
            .collect();

        Self {
            output_dir: PathBuf::from(cfg.output.directory),
            figure_size: cfg.output.size.unwrap_or(DEFAULT_FIGURE_SIZE),
            plots,
        }
    }
}
