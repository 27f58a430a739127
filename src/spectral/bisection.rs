use ndarray::{Array2, ArrayView2};

use super::inertia::{inertia, Inertia};
use crate::SettingsSpectrum;

/// Half-open search interval together with the number of eigenvalues already
/// known to lie below `lo` and at or above `hi`.
#[derive(Debug, Clone, Copy)]
struct Interval {
    lo: f64,
    hi: f64,
    below: usize,
    above: usize,
}

/// All eigenvalues of the symmetric matrix `a` inside `[lo, hi)`, ascending,
/// with multiplicity.
pub fn eigenvalues_in(
    a: ArrayView2<'_, f64>,
    lo: f64,
    hi: f64,
    settings: &SettingsSpectrum,
) -> Vec<f64> {
    let n = a.nrows();
    if n == 0 || hi <= lo {
        return Vec::new();
    }

    let mut scratch = Array2::zeros((n, n));
    let at_lo = shifted_inertia(a, lo, &mut scratch, settings);
    let at_hi = shifted_inertia(a, hi, &mut scratch, settings);

    bisect(
        a,
        Interval {
            lo,
            hi,
            below: at_lo.negative,
            above: at_hi.zero + at_hi.positive,
        },
        settings,
    )
}

/// Full spectrum of a symmetric 0/1 adjacency matrix.
///
/// Eigenvalues of such a matrix are bounded by the maximum row sum, at most
/// `n` once self loops put ones on the diagonal. The half-open search
/// interval `[-(n + 1), n + 1)` contains all of them, so the search starts
/// with nothing resolved.
pub fn adjacency_spectrum(a: ArrayView2<'_, f64>, settings: &SettingsSpectrum) -> Vec<f64> {
    let bound = a.nrows() as f64 + 1.;
    bisect(
        a,
        Interval {
            lo: -bound,
            hi: bound,
            below: 0,
            above: 0,
        },
        settings,
    )
}

fn shifted_inertia(
    a: ArrayView2<'_, f64>,
    shift: f64,
    scratch: &mut Array2<f64>,
    settings: &SettingsSpectrum,
) -> Inertia {
    scratch.assign(&a);
    scratch.diag_mut().mapv_inplace(|d| d - shift);
    inertia(scratch, settings.zero_tolerance)
}

/// Every step shifts `a` by the interval midpoint and counts eigenvalues on
/// each side through [`inertia`]. Eigenvalues equal to the midpoint are
/// emitted directly, sub-intervals with unresolved eigenvalues are searched
/// further. An interval narrower than `settings.interval_tolerance` is
/// emitted as a cluster at its midpoint, which is how repeated eigenvalues
/// terminate. The search uses an explicit stack, so depth is bounded by the
/// heap, not the call stack.
fn bisect(a: ArrayView2<'_, f64>, start: Interval, settings: &SettingsSpectrum) -> Vec<f64> {
    let n = a.nrows();
    let mut found = Vec::with_capacity(n);
    let mut scratch = Array2::zeros((n, n));

    let mut pending = vec![start];
    while let Some(Interval {
        lo,
        hi,
        below,
        above,
    }) = pending.pop()
    {
        if below + above >= n {
            continue;
        }

        let mid = (lo + hi) / 2.;
        if hi - lo < settings.interval_tolerance {
            found.extend(std::iter::repeat_n(mid, n - below - above));
            continue;
        }

        let counts = shifted_inertia(a, mid, &mut scratch, settings);

        found.extend(std::iter::repeat_n(mid, counts.zero));
        pending.push(Interval {
            lo: mid,
            hi,
            below: counts.negative + counts.zero,
            above,
        });
        pending.push(Interval {
            lo,
            hi: mid,
            below,
            above: counts.zero + counts.positive,
        });
    }

    found.sort_by(f64::total_cmp);
    found
}
