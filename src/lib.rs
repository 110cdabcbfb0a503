pub mod simulation;
pub mod analysis;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Block, SimulationResult};
pub use simulation::engine::{simulate, SimulationError};
pub use simulation::scenario::{PlotJob, PlotKind, Scenario};

pub use analysis::series::{phase_portrait, velocity_decay, Series, SeriesStyle};
pub use analysis::fit::{poly_fit, FitError, PolyFit, PolyModel};

pub use configuration::config::{
    FitModelConfig, OutputConfig, PlotConfig, PlotKindConfig, ScenarioConfig,
};

pub use visualization::figure::{render_figure, run_plots, Figure};

pub use benchmark::benchmark::bench_simulation;
