use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Counts of negative, zero and positive eigenvalues of a symmetric matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inertia {
    pub negative: usize,
    pub zero: usize,
    pub positive: usize,
}

impl Inertia {
    pub fn total(&self) -> usize {
        self.negative + self.zero + self.positive
    }
}

/// Reduces the symmetric matrix `b` to a congruent diagonal matrix in place
/// and classifies the signs of the diagonal.
///
/// By Sylvester's law of inertia the counts equal the numbers of negative,
/// zero and positive eigenvalues of the original matrix. `tol` decides when a
/// value counts as zero.
pub fn inertia(b: &mut Array2<f64>, tol: f64) -> Inertia {
    let n = b.nrows();
    debug_assert_eq!(n, b.ncols(), "inertia needs a square matrix");

    for k in 0..n {
        if b[[k, k]].abs() < tol && !fix_zero_pivot(b, k, tol) {
            // column k is already zero below the diagonal
            continue;
        }

        let alpha = b[[k, k]].abs().sqrt();
        b.row_mut(k).mapv_inplace(|x| x / alpha);
        b.column_mut(k).mapv_inplace(|x| x / alpha);

        // row operations against a copy of row k, then the matching column
        // operations, which only clear row k right of the pivot
        let pivot = b[[k, k]];
        let row_k = b.row(k).to_owned();
        for i in (k + 1)..n {
            let beta = b[[i, k]] / pivot;
            if beta != 0. {
                b.row_mut(i).scaled_add(-beta, &row_k);
            }
            b[[i, k]] = 0.;
            b[[k, i]] = 0.;
        }
    }

    b.diag().iter().fold(Inertia::default(), |mut acc, &d| {
        if d.abs() < tol {
            acc.zero += 1;
        } else if d < 0. {
            acc.negative += 1;
        } else {
            acc.positive += 1;
        }
        acc
    })
}

/// Replaces a vanishing pivot `b[k][k]` by adding (or subtracting) a later
/// row and the matching column to row and column `k`.
///
/// Adding row/column `i` turns the pivot into `b[k][k] + 2 b[i][k] + b[i][i]`,
/// subtracting into `b[k][k] - 2 b[i][k] + b[i][i]`. For a nonzero `b[i][k]`
/// at least one of them is nonzero. Returns false if column `k` has no
/// nonzero entry below the diagonal.
fn fix_zero_pivot(b: &mut Array2<f64>, k: usize, tol: f64) -> bool {
    let n = b.nrows();
    for i in (k + 1)..n {
        let off = b[[i, k]];
        if off.abs() < tol {
            continue;
        }

        let base = b[[k, k]] + b[[i, i]];
        let sign = if (base + 2. * off).abs() >= (base - 2. * off).abs() {
            1.
        } else {
            -1.
        };

        // congruence with the elementary matrix I + sign * e_k e_i^T
        let row_i = b.index_axis(Axis(0), i).to_owned();
        b.index_axis_mut(Axis(0), k).scaled_add(sign, &row_i);
        let col_i = b.index_axis(Axis(1), i).to_owned();
        b.index_axis_mut(Axis(1), k).scaled_add(sign, &col_i);

        return b[[k, k]].abs() >= tol;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const TOL: f64 = 1e-9;

    #[test]
    fn diagonal_matrix_signs() {
        let mut m = array![[3., 0., 0.], [0., -2., 0.], [0., 0., 0.]];
        assert_eq!(
            inertia(&mut m, TOL),
            Inertia {
                negative: 1,
                zero: 1,
                positive: 1
            }
        );
    }

    #[test]
    fn zero_diagonal_needs_fix_up() {
        // eigenvalues -1 and 1
        let mut m = array![[0., 1.], [1., 0.]];
        assert_eq!(
            inertia(&mut m, TOL),
            Inertia {
                negative: 1,
                zero: 0,
                positive: 1
            }
        );
    }

    #[test]
    fn fix_up_accounts_for_later_diagonal() {
        // eigenvalues 1 +- sqrt(2), one of each sign
        let mut m = array![[0., 1.], [1., 2.]];
        let res = inertia(&mut m, TOL);
        assert_eq!((res.negative, res.zero, res.positive), (1, 0, 1));

        // adding row 1 would cancel the pivot: 0 + 2 * 1 - 2 == 0
        let mut m = array![[0., 1.], [1., -2.]];
        let res = inertia(&mut m, TOL);
        assert_eq!((res.negative, res.zero, res.positive), (1, 0, 1));
    }

    #[test]
    fn singular_matrix_reports_zero() {
        // rank one, eigenvalues 0 and 2
        let mut m = array![[1., 1.], [1., 1.]];
        assert_eq!(
            inertia(&mut m, TOL),
            Inertia {
                negative: 0,
                zero: 1,
                positive: 1
            }
        );
    }

    #[test]
    fn zero_diagonal_chains_reduce_fully() {
        // P3: -sqrt(2), 0, sqrt(2)
        let mut p3 = array![[0., 1., 0.], [1., 0., 1.], [0., 1., 0.]];
        let res = inertia(&mut p3, TOL);
        assert_eq!((res.negative, res.zero, res.positive), (1, 1, 1));

        // C6: -2, -1, -1, 1, 1, 2
        let mut c6 = Array2::<f64>::zeros((6, 6));
        for i in 0..6 {
            c6[[i, (i + 1) % 6]] = 1.;
            c6[[(i + 1) % 6, i]] = 1.;
        }
        let res = inertia(&mut c6, TOL);
        assert_eq!((res.negative, res.zero, res.positive), (3, 0, 3));
        for i in 0..6 {
            for j in 0..6 {
                if i != j {
                    assert!(c6[[i, j]].abs() < 1e-12, "({i}, {j}) = {}", c6[[i, j]]);
                }
            }
        }
    }

    #[test]
    fn triangle_shifted() {
        // K3 has eigenvalues -1, -1, 2. Shift by 0.5.
        let mut m = array![[-0.5, 1., 1.], [1., -0.5, 1.], [1., 1., -0.5]];
        let res = inertia(&mut m, TOL);
        assert_eq!((res.negative, res.zero, res.positive), (2, 0, 1));
        assert_eq!(res.total(), 3);
    }
}
