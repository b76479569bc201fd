//! Basis-weight evaluation for the supported curve families.
//!
//! Each function returns the full weight row for one parameter value `t`:
//! `weights[j]` is the coefficient of control point `j`, so the curve point
//! is `Σ weights[j] · P_j`. All three are computed with bottom-up dynamic
//! programming over the degree; the recursive definitions re-evaluate
//! exponentially many subterms and are never used directly.

/// Degree of the uniform B-spline family.
pub const BSPLINE_DEGREE: usize = 2;

/// Bernstein weights `B(j, n-1, t)` for `count` control points.
///
/// Built as a Pascal-triangle-style table: the degree-`g` row is derived from
/// the degree-`g-1` row via `B(i, g, t) = (1-t)·B(i, g-1, t) + t·B(i-1, g-1, t)`,
/// walking each row from the right so the previous degree is still readable
/// in place. O(count²) time, O(count) space.
pub fn bernstein(count: usize, t: f64) -> Vec<f64> {
    let mut row = vec![0.0; count];
    row[0] = 1.0;

    for degree in 1..count {
        for i in (1..=degree).rev() {
            row[i] = (1.0 - t) * row[i] + t * row[i - 1];
        }
        row[0] *= 1.0 - t;
    }

    row
}

/// Lagrange interpolation weights over integer abscissas `u_i = i`.
///
/// `L_i(t) = Π_{k≠i} (t - k) / (i - k)`. The abscissas are distinct
/// integers, so no denominator can vanish.
pub fn lagrange(count: usize, t: f64) -> Vec<f64> {
    (0..count)
        .map(|i| {
            (0..count)
                .filter(|&k| k != i)
                .map(|k| (t - k as f64) / (i as f64 - k as f64))
                .product()
        })
        .collect()
}

/// Uniform B-spline weights of degree [`BSPLINE_DEGREE`] via Cox–de Boor.
///
/// The knot vector is `u_i = i` for `i` in `0..=count + degree`. The degree-0
/// row is the indicator of the half-open knot spans `[u_i, u_{i+1})`; each
/// higher row combines two entries of the previous one. A term whose
/// denominator is zero contributes `0`, the standard B-spline convention for
/// repeated knots, kept as an explicit policy even though this integer knot
/// vector never triggers it.
pub fn bspline(count: usize, t: f64) -> Vec<f64> {
    let d = BSPLINE_DEGREE;
    let knots: Vec<f64> = (0..=count + d).map(|i| i as f64).collect();

    let spans = count + d;
    let mut row: Vec<f64> = (0..spans)
        .map(|i| {
            if knots[i] <= t && t < knots[i + 1] {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    for g in 1..=d {
        for i in 0..spans - g {
            let a = guarded(t - knots[i], knots[i + g] - knots[i], row[i]);
            let b = guarded(
                knots[i + 1 + g] - t,
                knots[i + 1 + g] - knots[i + 1],
                row[i + 1],
            );
            row[i] = a + b;
        }
    }

    row.truncate(count);
    row
}

/// One Cox–de Boor term, with the zero-denominator term defined as 0.
#[inline]
fn guarded(numerator: f64, denominator: f64, basis: f64) -> f64 {
    if denominator.abs() < 1e-30 {
        0.0
    } else {
        numerator / denominator * basis
    }
}
