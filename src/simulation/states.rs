//! Core state types for the pi-collisions simulation.
//!
//! Defines the block and result structs:
//! - `Block` holds mass and x-axis velocity and applies the elastic
//!   collision / wall bounce updates
//! - `SimulationResult` holds the event count and the recorded velocity
//!   trajectory of both blocks
//!
//! Velocities are one-dimensional and signed (negative means toward the
//! wall). Positions are never tracked: the event count and the velocity
//! sequences do not depend on them.

/// One of the two sliding blocks.
///
/// Mass is fixed for the lifetime of a run; only the velocity changes,
/// in place, as events are applied.
#[derive(Debug, Clone)]
pub struct Block {
    pub mass: f64, // mass, fixed for the run
    pub velocity: f64, // signed x-axis velocity
}

impl Block {
    pub fn new(mass: f64, velocity: f64) -> Self {
        Self { mass, velocity }
    }

    /// Elastic collision between `self` and `other`.
    ///
    /// Both velocities are updated from the pre-collision values
    /// (simultaneous update), conserving momentum and kinetic energy:
    ///
    /// v1' = ((m1 - m2) v1 + 2 m2 v2) / (m1 + m2)
    /// v2' = ((m2 - m1) v2 + 2 m1 v1) / (m1 + m2)
    ///
    /// Requires mass > 0 on both blocks so the denominator m1 + m2
    /// never vanishes.
    pub fn collide(&mut self, other: &mut Block) {
        let (m1, v1) = (self.mass, self.velocity);
        let (m2, v2) = (other.mass, other.velocity);

        self.velocity = ((m1 - m2) * v1 + 2.0 * m2 * v2) / (m1 + m2);
        other.velocity = ((m2 - m1) * v2 + 2.0 * m1 * v1) / (m1 + m2);
    }

    /// Perfectly elastic wall bounce: velocity -> -velocity.
    pub fn reflect(&mut self) {
        self.velocity = -self.velocity;
    }
}

/// Outcome of one simulation run. Immutable once returned.
///
/// The trajectories record each block's velocity immediately before every
/// event, plus one final snapshot after termination, so both have exactly
/// `collision_count + 1` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub collision_count: u32, // total events: block-block collisions + wall bounces
    pub trajectory1: Vec<f64>, // heavy block velocities
    pub trajectory2: Vec<f64>, // light block velocities
}
