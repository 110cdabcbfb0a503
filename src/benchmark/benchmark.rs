use std::time::Instant;

use crate::simulation::engine::simulate;

/// Time the event loop across growing mass ratios.
/// The event count grows like pi * sqrt(mass_factor), so runtime should
/// grow by roughly 10x per row.
pub fn bench_simulation() {
    // Different mass ratios to test
    let mass_factors = [1.0, 100.0, 1.0e4, 1.0e6, 1.0e8, 1.0e10];

    for mf in mass_factors {
        // Warm up
        let _ = simulate(mf);

        let t0 = Instant::now();
        let result = simulate(mf).expect("positive mass factor");
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "mass factor = {mf:>14.0}, events = {:>8}, time = {dt:8.6} s",
            result.collision_count
        );
    }
}
