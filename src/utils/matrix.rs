//! Matrix utility functions.

use faer::{Col, Mat};

/// Prepend a column of ones to the design matrix.
pub fn add_constant(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Flag columns that are numerically linear combinations of earlier columns.
///
/// Columns are visited left to right and orthogonalised against the ones
/// already kept, so the first member of a collinear group survives. A column
/// is aliased when less than `tolerance` of its norm remains.
pub fn detect_aliased_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut basis: Vec<Col<f64>> = Vec::new();
    let mut aliased = vec![false; n_cols];

    for j in 0..n_cols {
        let mut v = Col::from_fn(n_rows, |i| x[(i, j)]);
        let original_norm = norm(&v);

        if original_norm == 0.0 || !original_norm.is_finite() {
            aliased[j] = true;
            continue;
        }

        // Two passes of Gram-Schmidt keep the residual orthogonal in floating point.
        for _ in 0..2 {
            for b in &basis {
                let d = dot(&v, b);
                for i in 0..n_rows {
                    v[i] -= d * b[i];
                }
            }
        }

        let remaining = norm(&v);
        if remaining <= tolerance * original_norm {
            aliased[j] = true;
        } else {
            basis.push(Col::from_fn(n_rows, |i| v[i] / remaining));
        }
    }

    aliased
}

/// Build the design matrix restricted to non-aliased columns.
pub fn select_columns(x: &Mat<f64>, aliased: &[bool]) -> Mat<f64> {
    let kept: Vec<usize> = aliased
        .iter()
        .enumerate()
        .filter(|(_, &is_aliased)| !is_aliased)
        .map(|(j, _)| j)
        .collect();

    Mat::from_fn(x.nrows(), kept.len(), |i, j| x[(i, kept[j])])
}

/// Solve the upper triangular system `R[..k, ..k] * b = rhs[..k]`.
pub fn back_substitute(r: &Mat<f64>, rhs: &Col<f64>, k: usize) -> Col<f64> {
    let mut solution = Col::zeros(k);
    for i in (0..k).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..k {
            sum -= r[(i, j)] * solution[j];
        }
        solution[i] = sum / r[(i, i)];
    }
    solution
}

fn dot(a: &Col<f64>, b: &Col<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

fn norm(v: &Col<f64>) -> f64 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_constant() {
        let x = Mat::from_fn(3, 2, |i, j| (i * 2 + j) as f64);
        let design = add_constant(&x);

        assert_eq!(design.ncols(), 3);
        for i in 0..3 {
            assert_eq!(design[(i, 0)], 1.0);
            assert_eq!(design[(i, 1)], x[(i, 0)]);
            assert_eq!(design[(i, 2)], x[(i, 1)]);
        }
    }

    #[test]
    fn test_detect_aliased_columns() {
        let mut x = Mat::zeros(5, 4);
        for i in 0..5 {
            x[(i, 0)] = 1.0;
            x[(i, 1)] = i as f64;
            x[(i, 2)] = 3.0 - 2.0 * i as f64; // 3 * col0 - 2 * col1
            x[(i, 3)] = (i * i) as f64;
        }

        let aliased = detect_aliased_columns(&x, 1e-10);
        assert_eq!(aliased, vec![false, false, true, false]);
    }

    #[test]
    fn test_zero_column_is_aliased() {
        let x = Mat::from_fn(4, 2, |i, j| if j == 0 { 0.0 } else { i as f64 });
        let aliased = detect_aliased_columns(&x, 1e-10);
        assert_eq!(aliased, vec![true, false]);
    }

    #[test]
    fn test_select_columns() {
        let x = Mat::from_fn(3, 3, |i, j| (10 * i + j) as f64);
        let reduced = select_columns(&x, &[false, true, false]);

        assert_eq!(reduced.ncols(), 2);
        assert_eq!(reduced[(2, 0)], 20.0);
        assert_eq!(reduced[(2, 1)], 22.0);
    }

    #[test]
    fn test_back_substitute() {
        let mut r = Mat::zeros(2, 2);
        r[(0, 0)] = 2.0;
        r[(0, 1)] = 1.0;
        r[(1, 1)] = 4.0;
        let rhs = Col::from_fn(2, |i| if i == 0 { 5.0 } else { 8.0 });

        let solution = back_substitute(&r, &rhs, 2);
        assert!((solution[1] - 2.0).abs() < 1e-12);
        assert!((solution[0] - 1.5).abs() < 1e-12);
    }
}
