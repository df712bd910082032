//! Small dense linear-algebra kernels for the spectral and fractal scorers.
//!
//! Everything here reports trouble through [`NumericInstability`] instead of
//! panicking; callers turn that into a neutral score.

use thiserror::Error;

const MAX_SWEEPS: usize = 100;
const EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NumericInstability {
    #[error("need at least two nodes, got {0}")]
    TooFewNodes(usize),
    #[error("matrix is not square")]
    NotSquare,
    #[error("matrix contains a non-finite entry")]
    NonFinite,
    #[error("Jacobi iteration did not converge")]
    NoConvergence,
    #[error("need at least two finite samples, got {0}")]
    TooFewSamples(usize),
    #[error("x values have no spread")]
    DegenerateFit,
}

/// Eigenvalues of a symmetric matrix, ascending, by cyclic Jacobi rotation.
/// The input must be symmetric; that is not checked.
pub fn symmetric_eigenvalues(matrix: &[Vec<f64>]) -> Result<Vec<f64>, NumericInstability> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return Err(NumericInstability::NotSquare);
    }
    if matrix.iter().flatten().any(|v| !v.is_finite()) {
        return Err(NumericInstability::NonFinite);
    }

    let mut a: Vec<Vec<f64>> = matrix.to_vec();
    let scale: f64 = a.iter().flatten().map(|v| v * v).sum::<f64>().sqrt();

    for _ in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum::<f64>()
            .sqrt();
        if off <= EPS * (scale + EPS) {
            let mut eig: Vec<f64> = (0..n).map(|i| a[i][i]).collect();
            eig.sort_by(|x, y| x.total_cmp(y));
            return Ok(eig);
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p][q];
                if apq.abs() <= f64::MIN_POSITIVE {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
                let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                let t = sign / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (akp, akq) = (row[p], row[q]);
                    row[p] = c * akp - s * akq;
                    row[q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
            }
        }

        if a.iter().flatten().any(|v| !v.is_finite()) {
            return Err(NumericInstability::NonFinite);
        }
    }
    Err(NumericInstability::NoConvergence)
}

/// Slope of the ordinary least-squares line through `(xs[i], ys[i])`.
///
/// Pairs with a non-finite coordinate are dropped first.
pub fn least_squares_slope(xs: &[f64], ys: &[f64]) -> Result<f64, NumericInstability> {
    let pts: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    if pts.len() < 2 {
        return Err(NumericInstability::TooFewSamples(pts.len()));
    }

    let n = pts.len() as f64;
    let mean_x = pts.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pts.iter().map(|p| p.1).sum::<f64>() / n;
    let sxx: f64 = pts.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let sxy: f64 = pts.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
    if sxx <= EPS {
        return Err(NumericInstability::DegenerateFit);
    }
    Ok(sxy / sxx)
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod numeric_tests;
