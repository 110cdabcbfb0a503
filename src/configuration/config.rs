//! Configuration types for loading plot scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! plot batch. A scenario consists of:
//!
//! - [`OutputConfig`]   – where figures are written and how large they are
//! - [`PlotConfig`]     – one entry per figure to produce
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! output:
//!   directory: "figures"
//!   size: 700               # square figure edge in pixels
//!
//! plots:
//!   - kind: "velocity_vs_velocity"
//!     mass_factor: 100.0
//!   - kind: "velocity_vs_collision"
//!     mass_factor: 1.0e4
//!     fit: "cubic"          # optional least-squares overlay
//! ```
//!
//! The runtime scenario builder maps this configuration into the structs
//! consumed by the simulation and visualization layers.

use serde::Deserialize;

/// Which polynomial model to overlay on a plot
/// `fit: "linear"`, `fit: "quadratic"` or `fit: "cubic"`
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum FitModelConfig {
    #[serde(rename = "linear")] // degree 1
    Linear,

    #[serde(rename = "quadratic")] // degree 2
    Quadratic,

    #[serde(rename = "cubic")] // degree 3
    Cubic,
}

/// Which derived view a plot draws
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum PlotKindConfig {
    #[serde(rename = "velocity_vs_velocity")] // phase portrait of the two block velocities
    VelocityVsVelocity,

    #[serde(rename = "velocity_vs_collision")] // heavy block velocity against collision number
    VelocityVsCollision,
}

/// Configuration for a single figure
#[derive(Deserialize, Debug)]
pub struct PlotConfig {
    pub kind: PlotKindConfig, // which derived view to draw
    pub mass_factor: f64, // heavy block mass relative to the light block
    pub fit: Option<FitModelConfig>, // optional polynomial overlay
}

/// Output settings for rendered figures
#[derive(Deserialize, Debug)]
pub struct OutputConfig {
    pub directory: String, // directory figure files are written into
    pub size: Option<u32>, // square figure edge in pixels
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub output: OutputConfig, // figure output settings
    pub plots: Vec<PlotConfig>, // list of figures to produce
}
