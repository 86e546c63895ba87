use crate::errors::LagrangeError;

/// Finds a root of `f` inside `[lower, upper]` by repeated halving.
///
/// The bracket must contain a sign change: `f(lower)` and `f(upper)` are
/// checked up front and `NoBracketedRoot` is returned when they share a sign
/// (or either is NaN). An endpoint that evaluates to exactly zero is returned
/// as the root.
///
/// Iteration stops once the half-width `(upper - lower) / 2` is at most
/// `tolerance`, or when the interval can no longer be split in `f64`.
pub fn bisection<F>(lower: f64, upper: f64, f: F, tolerance: f64) -> Result<f64, LagrangeError>
where
    F: Fn(f64) -> f64,
{
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(LagrangeError::InvalidTolerance(tolerance));
    }
    if !(lower.is_finite() && upper.is_finite()) || lower >= upper {
        return Err(LagrangeError::InvalidBracket { lower, upper });
    }

    let mut f_lower = f(lower);
    let f_upper = f(upper);

    if f_lower == 0.0 {
        return Ok(lower);
    }
    if f_upper == 0.0 {
        return Ok(upper);
    }
    if f_lower.is_nan() || f_upper.is_nan() || !opposite_signs(f_lower, f_upper) {
        return Err(LagrangeError::NoBracketedRoot {
            lower,
            upper,
            f_lower,
            f_upper,
        });
    }

    let (mut l, mut u) = (lower, upper);
    let mut mid = (l + u) / 2.0;

    while (u - l) / 2.0 > tolerance {
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        } else if opposite_signs(f_lower, f_mid) {
            u = mid;
        } else {
            l = mid;
            f_lower = f_mid;
        }

        let next = (l + u) / 2.0;
        if next == l || next == u {
            // Interval is down to adjacent floats
            return Ok(next);
        }
        mid = next;
    }

    Ok(mid)
}

// Sign comparison rather than a product, which underflows for tiny values
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0) != (b < 0.0)
}
