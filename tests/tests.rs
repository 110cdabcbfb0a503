use pisim::analysis::fit::{poly_fit, FitError, PolyModel};
use pisim::analysis::series::{phase_portrait, velocity_decay, SeriesStyle};
use pisim::simulation::engine::{simulate, SimulationError};
use pisim::simulation::states::{Block, SimulationResult};

/// Total momentum of a block pair
pub fn momentum(b1: &Block, b2: &Block) -> f64 {
    b1.mass * b1.velocity + b2.mass * b2.velocity
}

/// Total kinetic energy of a block pair
pub fn kinetic_energy(b1: &Block, b2: &Block) -> f64 {
    0.5 * b1.mass * b1.velocity * b1.velocity + 0.5 * b2.mass * b2.velocity * b2.velocity
}

/// Run the scenario for a valid mass factor
pub fn run(mass_factor: f64) -> SimulationResult {
    simulate(mass_factor).expect("valid mass factor")
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collide_equal_masses_swap_velocities() {
    let mut b1 = Block::new(1.0, -1.0);
    let mut b2 = Block::new(1.0, 0.5);

    b1.collide(&mut b2);

    assert!((b1.velocity - 0.5).abs() < 1e-12, "got {}", b1.velocity);
    assert!((b2.velocity + 1.0).abs() < 1e-12, "got {}", b2.velocity);
}

#[test]
fn collide_conserves_momentum_and_energy() {
    let mut b1 = Block::new(5.0, -1.3);
    let mut b2 = Block::new(2.0, 0.4);

    let p_before = momentum(&b1, &b2);
    let ke_before = kinetic_energy(&b1, &b2);

    b1.collide(&mut b2);

    assert!((momentum(&b1, &b2) - p_before).abs() < 1e-12);
    assert!((kinetic_energy(&b1, &b2) - ke_before).abs() < 1e-12);
}

#[test]
fn collide_uses_pre_collision_velocities() {
    // The same pair through both call orderings lands in the same state,
    // so neither update can see the other's result
    let mut a1 = Block::new(3.0, -2.0);
    let mut a2 = Block::new(1.0, 0.7);
    a1.collide(&mut a2);

    let mut b1 = Block::new(3.0, -2.0);
    let mut b2 = Block::new(1.0, 0.7);
    b2.collide(&mut b1);

    assert!((a1.velocity - b1.velocity).abs() < 1e-12);
    assert!((a2.velocity - b2.velocity).abs() < 1e-12);
}

#[test]
fn reflect_negates_velocity() {
    let mut b = Block::new(1.0, -0.25);
    b.reflect();
    assert_eq!(b.velocity, 0.25);
    b.reflect();
    assert_eq!(b.velocity, -0.25);
}

// ==================================================================================
// Simulation loop tests
// ==================================================================================

#[test]
fn equal_masses_take_three_events() {
    let result = run(1.0);

    // Equal masses: swap, bounce, swap. Exact arithmetic, so compare exactly.
    assert_eq!(result.collision_count, 3);
    assert_eq!(result.trajectory1, vec![-1.0, 0.0, 0.0, 1.0]);
    assert_eq!(result.trajectory2, vec![0.0, -1.0, 1.0, 0.0]);
}

#[test]
fn mass_factor_100_approximates_pi_times_10() {
    assert_eq!(run(100.0).collision_count, 31);
}

#[test]
fn mass_factor_10_4_approximates_pi_times_100() {
    assert_eq!(run(1.0e4).collision_count, 314);
}

#[test]
fn mass_factor_10_6_approximates_pi_times_1000() {
    assert_eq!(run(1.0e6).collision_count, 3141);
}

#[test]
fn trajectories_have_count_plus_one_entries() {
    for mf in [1.0, 2.0, 100.0, 12345.0, 1.0e6] {
        let result = run(mf);
        let expected = result.collision_count as usize + 1;

        assert_eq!(result.trajectory1.len(), expected, "mass factor {mf}");
        assert_eq!(result.trajectory2.len(), expected, "mass factor {mf}");
    }
}

#[test]
fn final_state_satisfies_termination_ordering() {
    for mf in [1.0, 3.0, 100.0, 1.0e4] {
        let result = run(mf);
        let v1 = *result.trajectory1.last().unwrap();
        let v2 = *result.trajectory2.last().unwrap();

        assert!(v1 >= 0.0, "mass factor {mf}: v1 = {v1}");
        assert!(v2 >= 0.0, "mass factor {mf}: v2 = {v2}");
        assert!(v1 >= v2, "mass factor {mf}: v1 = {v1} < v2 = {v2}");
    }
}

#[test]
fn simulate_has_no_hidden_state() {
    let first = run(1.0e4);
    let second = run(1.0e4);

    assert_eq!(first, second);
}

#[test]
fn simulate_rejects_invalid_mass_factors() {
    for mf in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(simulate(mf), Err(SimulationError::InvalidMassFactor(_))),
            "mass factor {mf} should be rejected"
        );
    }
}

// ==================================================================================
// Analysis tests
// ==================================================================================

#[test]
fn phase_portrait_scales_heavy_axis() {
    let result = run(100.0);
    let series = phase_portrait(&result, 100.0);

    assert_eq!(series.style, SeriesStyle::Line);
    assert_eq!(series.label, "collisions = 31");
    assert_eq!(series.points.len(), result.trajectory1.len());

    // First recorded state is (v1, v2) = (-1, 0), scaled by sqrt(100)
    assert!((series.points[0].0 + 10.0).abs() < 1e-12);
    assert!(series.points[0].1.abs() < 1e-12);
}

#[test]
fn velocity_decay_keeps_even_indices_only() {
    let result = run(1.0e4);
    let series = velocity_decay(&result);

    let expected = (result.trajectory1.len() + 1) / 2;
    assert_eq!(series.style, SeriesStyle::Scatter);
    assert_eq!(series.points.len(), expected);

    // x values step through the even event indices
    assert_eq!(series.points[0], (0.0, -1.0));
    for pair in series.points.windows(2) {
        assert!((pair[1].0 - pair[0].0 - 2.0).abs() < 1e-12);
    }
}

// ==================================================================================
// Polynomial fit tests
// ==================================================================================

#[test]
fn fit_recovers_exact_cubic() {
    let xs: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|&x| 2.0 * x * x * x - x * x + 0.5 * x - 3.0)
        .collect();

    let fit = poly_fit(&xs, &ys, PolyModel::Cubic).expect("well-posed fit");

    let expected = [2.0, -1.0, 0.5, -3.0];
    assert_eq!(fit.coefficients.len(), 4);
    for (c, e) in fit.coefficients.iter().zip(expected) {
        assert!((c - e).abs() < 1e-6, "coefficient {c} vs expected {e}");
    }
}

#[test]
fn fit_eval_matches_coefficients() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [1.0, 3.0, 5.0, 7.0]; // y = 2x + 1

    let fit = poly_fit(&xs, &ys, PolyModel::Linear).expect("well-posed fit");

    assert!((fit.eval(10.0) - 21.0).abs() < 1e-9);
    assert!((fit.eval(-4.0) + 7.0).abs() < 1e-9);
}

#[test]
fn fit_overlay_covers_the_data_domain() {
    let xs = [0.0, 2.0, 4.0, 6.0];
    let ys = [0.5, 1.0, 2.5, 5.0];

    let fit = poly_fit(&xs, &ys, PolyModel::Quadratic).expect("well-posed fit");
    let overlay = fit.overlay_series(&xs);

    assert_eq!(overlay.style, SeriesStyle::Line);
    assert_eq!(overlay.label, "2 degree fit");
    assert_eq!(overlay.points.len(), xs.len());
    for (point, &x) in overlay.points.iter().zip(xs.iter()) {
        assert_eq!(point.0, x);
        assert!((point.1 - fit.eval(x)).abs() < 1e-12);
    }
}

#[test]
fn fit_needs_more_points_than_coefficients() {
    let xs = [0.0, 1.0];
    let ys = [1.0, 2.0];

    assert!(matches!(
        poly_fit(&xs, &ys, PolyModel::Cubic),
        Err(FitError::TooFewPoints { needed: 4, got: 2, .. })
    ));
}

#[test]
fn fit_rejects_degenerate_x_values() {
    // All x coincide: the system cannot determine a slope
    let xs = [2.0; 5];
    let ys = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert!(matches!(
        poly_fit(&xs, &ys, PolyModel::Linear),
        Err(FitError::IllConditioned { .. })
    ));
}

#[test]
fn fit_rejects_mismatched_lengths() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [1.0, 2.0];

    assert!(matches!(
        poly_fit(&xs, &ys, PolyModel::Linear),
        Err(FitError::LengthMismatch { x_len: 3, y_len: 2 })
    ));
}
