//! Event loop for the pi-collisions scenario
//!
//! The heavy block starts with unit negative velocity and runs into the
//! light block, which sits at rest next to the wall. Events alternate
//! between a block-block collision and a wall bounce of the light block
//! until both blocks move away from the wall and the heavy block can no
//! longer catch the light one. The simulation does not factor, measure
//! or utilize time: only the ordered sequence of events matters.

use thiserror::Error;

use super::states::{Block, SimulationResult};

/// Errors from the simulation loop.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A non-positive or non-finite mass ratio. The loop is only
    /// guaranteed to terminate for positive masses, so this is rejected
    /// up front instead of propagating NaN or spinning forever.
    #[error("mass factor must be finite and positive, got {0}")]
    InvalidMassFactor(f64),
}

/// Run the pi-collisions scenario for the given mass ratio.
///
/// Block 1 is `mass_factor` times as massive as block 2 and is initially
/// incumbent on it with unit negative velocity; block 2 is at rest.
///
/// Returns the total event count (block-block collisions plus wall
/// bounces) and the velocity trajectory of both blocks. Velocities are
/// recorded before each event, with one final snapshot appended after the
/// loop exits, so each trajectory holds `collision_count + 1` entries.
///
/// For `mass_factor = 100^n` the event count approximates the first
/// `n + 1` digits of pi.
pub fn simulate(mass_factor: f64) -> Result<SimulationResult, SimulationError> {
    if !mass_factor.is_finite() || mass_factor <= 0.0 {
        return Err(SimulationError::InvalidMassFactor(mass_factor));
    }

    let mut b1 = Block::new(mass_factor, -1.0);
    let mut b2 = Block::new(1.0, 0.0);

    let mut trajectory1 = Vec::new();
    let mut trajectory2 = Vec::new();
    let mut collision_count: u32 = 0;

    // Run until both blocks move away from the wall and the heavy block
    // is at least as fast as the light one, so no further event can occur
    while !(b1.velocity >= 0.0 && b2.velocity >= 0.0 && b1.velocity >= b2.velocity) {
        trajectory1.push(b1.velocity);
        trajectory2.push(b2.velocity);

        // Events alternate: block-block collision on even counts, wall
        // bounce of the light block on odd counts. The heavy block never
        // touches the wall in this model.
        if collision_count % 2 == 0 {
            b1.collide(&mut b2);
        } else {
            b2.reflect();
        }

        collision_count += 1;
    }

    // One final snapshot of the post-termination state
    trajectory1.push(b1.velocity);
    trajectory2.push(b2.velocity);

    Ok(SimulationResult {
        collision_count,
        trajectory1,
        trajectory2,
    })
}
