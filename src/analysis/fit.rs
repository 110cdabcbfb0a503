//! Least-squares polynomial fitting for overlay curves
//!
//! Fits a low-degree polynomial to an (x, y) series by solving the
//! Vandermonde system with an SVD. Coefficients come back ordered from
//! the highest degree down, and the fitted curve can be evaluated over
//! the data's x domain as a second series for overlay comparison.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use super::series::{Series, SeriesStyle};

/// Singular values below this are treated as zero when ranking and
/// solving the Vandermonde system.
const RANK_EPS: f64 = 1.0e-10;

/// Polynomial model to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyModel {
    Linear,    // degree 1
    Quadratic, // degree 2
    Cubic,     // degree 3
}

impl PolyModel {
    pub fn degree(self) -> usize {
        match self {
            PolyModel::Linear => 1,
            PolyModel::Quadratic => 2,
            PolyModel::Cubic => 3,
        }
    }
}

/// Errors from the fitting layer. Callers may render the raw data
/// without an overlay when a fit fails.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("mismatched series lengths: {x_len} x values vs {y_len} y values")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("need at least {needed} points for a degree {degree} fit, got {got}")]
    TooFewPoints {
        degree: usize,
        needed: usize,
        got: usize,
    },

    /// The Vandermonde matrix is rank deficient (e.g. all x values
    /// coincide), so the coefficients are not determined by the data.
    #[error("fit is ill-conditioned: system rank {rank} < {needed}")]
    IllConditioned { rank: usize, needed: usize },

    #[error("least-squares solve failed: {0}")]
    SolveFailed(&'static str),
}

/// A fitted polynomial: `degree + 1` coefficients, highest degree first.
#[derive(Debug, Clone)]
pub struct PolyFit {
    pub model: PolyModel,
    pub coefficients: Vec<f64>,
}

/// Least-squares fit of `model` to the given samples, minimizing the
/// squared residual between the polynomial and `y_vals`.
pub fn poly_fit(x_vals: &[f64], y_vals: &[f64], model: PolyModel) -> Result<PolyFit, FitError> {
    if x_vals.len() != y_vals.len() {
        return Err(FitError::LengthMismatch {
            x_len: x_vals.len(),
            y_len: y_vals.len(),
        });
    }

    let degree = model.degree();
    let needed = degree + 1;
    if x_vals.len() < needed {
        return Err(FitError::TooFewPoints {
            degree,
            needed,
            got: x_vals.len(),
        });
    }

    // Vandermonde matrix with columns ordered x^d .. x^0 to match the
    // coefficient ordering
    let a = DMatrix::from_fn(x_vals.len(), needed, |r, c| {
        x_vals[r].powi((degree - c) as i32)
    });
    let b = DVector::from_column_slice(y_vals);

    let svd = a.svd(true, true);
    let rank = svd.rank(RANK_EPS);
    if rank < needed {
        return Err(FitError::IllConditioned { rank, needed });
    }

    let solution = svd.solve(&b, RANK_EPS).map_err(FitError::SolveFailed)?;

    Ok(PolyFit {
        model,
        coefficients: solution.iter().copied().collect(),
    })
}

impl PolyFit {
    /// Evaluate the fitted polynomial at `x` (Horner form).
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// The fitted curve over the same x domain as the raw data, as a
    /// line series for overlay.
    pub fn overlay_series(&self, x_vals: &[f64]) -> Series {
        Series {
            label: format!("{} degree fit", self.model.degree()),
            points: x_vals.iter().map(|&x| (x, self.eval(x))).collect(),
            style: SeriesStyle::Line,
        }
    }
}
