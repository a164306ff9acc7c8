use num_traits::Float;

/// Upper bound on the ascending fence that moves the first tic onto `xmin`.
///
/// Starting one interval below `trunc(xmin / d) * d`, exact arithmetic needs at
/// most two steps; the bound only matters once `f + d == f`.
const MAX_FENCE_STEPS: usize = 4;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Small integer constants built from `one` so they exist for every `Float`.
pub fn two<D: Float>() -> D {
    D::one() + D::one()
}

pub fn five<D: Float>() -> D {
    two::<D>() + two::<D>() + D::one()
}

pub fn ten<D: Float>() -> D {
    five::<D>() + five::<D>()
}

/// Relative tolerance equality: `|a - b| <= max(|a|, |b|) * 100 * epsilon`.
///
/// Used to decide whether a computed logarithm is an integer up to rounding.
pub fn almost_equal<D: Float>(a: D, b: D) -> bool {
    let hundred = ten::<D>() * ten::<D>();
    (a - b).abs() <= a.abs().max(b.abs()) * hundred * D::epsilon()
}

/// Converts a count or index into `D`, saturating to infinity when it does not fit.
pub fn from_count<D: Float>(n: usize) -> D {
    D::from(n).unwrap_or_else(D::infinity)
}

/// Lossy view of a value for log fields.
pub fn as_f64<D: Float>(value: D) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Smallest value `k * delta` (integer `k`) that is not less than `xmin`.
///
/// The start point truncates toward zero and then backs off one interval, so
/// it lies below `xmin` for either sign before the fence walks it upward.
pub fn first_at_or_above<D: Float>(xmin: D, delta: D) -> D {
    let mut first = ((xmin / delta).trunc() - D::one()) * delta;
    for _ in 0..MAX_FENCE_STEPS {
        if first >= xmin {
            break;
        }
        first = first + delta;
    }
    first
}

/// Number of grid values `first + i * delta` that do not exceed `xmax`.
///
/// Zero when `first` already lies beyond `xmax`. A NaN quotient counts the
/// first value only.
pub fn count_through<D: Float>(first: D, delta: D, xmax: D) -> usize {
    if first > xmax {
        return 0;
    }
    let steps = ((xmax - first) / delta).trunc();
    match steps.to_usize() {
        Some(steps) => steps.saturating_add(1),
        None if steps.is_nan() => 1,
        None => usize::MAX,
    }
}

/// Whole grid steps of size `delta` from `from` up to `to`, rounded to the
/// nearest step. Zero when `to` lies below `from` or the quotient is NaN.
pub fn steps_between<D: Float>(from: D, to: D, delta: D) -> usize {
    ((to - from) / delta).round().to_usize().unwrap_or(0)
}
