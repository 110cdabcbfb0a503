//! Derived plot series over a simulation result
//!
//! Two views of the recorded trajectories:
//! - the velocity-velocity phase portrait, with the heavy-block axis
//!   scaled by sqrt(mass_factor) so the kinetic-energy circle shows up
//!   as an actual circle
//! - the heavy block's velocity decay across block-block collisions only
//!   (even event indices; wall bounces leave its velocity untouched)

use crate::simulation::states::SimulationResult;

/// How the renderer should draw a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,    // connected line
    Scatter, // discrete markers
}

/// A labeled 2-D point series handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String, // legend entry
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

/// Phase portrait: (v1 * sqrt(mass_factor), v2) for every recorded event.
///
/// In the scaled coordinates an elastic collision preserves the distance
/// from the origin and a wall bounce mirrors across the x axis, so the
/// trajectory walks around a circle.
pub fn phase_portrait(result: &SimulationResult, mass_factor: f64) -> Series {
    let scale = mass_factor.sqrt();
    Series {
        label: format!("collisions = {}", result.collision_count),
        points: result
            .trajectory1
            .iter()
            .zip(result.trajectory2.iter())
            .map(|(&v1, &v2)| (v1 * scale, v2))
            .collect(),
        style: SeriesStyle::Line,
    }
}

/// Heavy-block velocity at even event indices, i.e. the snapshots taken
/// immediately before each block-block collision. Isolates the decay of
/// the heavy block across successive collisions.
pub fn velocity_decay(result: &SimulationResult) -> Series {
    Series {
        label: format!("collisions = {}", result.collision_count),
        points: result
            .trajectory1
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(i, &v)| (i as f64, v))
            .collect(),
        style: SeriesStyle::Scatter,
    }
}
