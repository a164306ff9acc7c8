use num_traits::Float;

use super::{TicMultiple, TicSequence, util};

/// Minor tics that split every major interval into `multiple` parts.
///
/// Walks back from the first major tic one minor interval at a time while the
/// next step would still be `>= xmin`, so the first minor tic is the smallest
/// minor grid value inside the range. The walk never takes more than
/// `multiple` steps because the major tic before the first one lies below
/// `xmin`.
///
/// The count normally stops at the last minor grid value not above `xmax`,
/// but never short of the last major tic: when truncation of the minor
/// quotient loses that tic to rounding, the count is extended to include it.
pub(crate) fn subdivide<D: Float>(
    xmin: D,
    xmax: D,
    major: &TicSequence<D>,
    multiple: TicMultiple,
) -> TicSequence<D> {
    let delta = major.delta() / multiple.as_float();
    let mut first = major.first();
    for _ in 0..multiple.factor() {
        if first - delta < xmin {
            break;
        }
        first = first - delta;
    }
    let mut count = util::count_through(first, delta, xmax);
    if let Some(last_major) = major.count().checked_sub(1) {
        let stride = multiple.factor() as usize;
        let offset = util::steps_between(first, major.first(), delta);
        let last = offset.saturating_add(last_major.saturating_mul(stride));
        count = count.max(last.saturating_add(1));
    }
    TicSequence::new(first, delta, count)
}
