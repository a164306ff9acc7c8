use num_traits::Float;
use tracing::{debug, trace};

use super::{TicMultiple, TicSequence, util};

/// Decades scanned by [`search_descending`] before giving up. A finite span
/// needs at most `log10(max_count) + 2` of them.
const MAX_SEARCH_DECADES: usize = 32;

/// Major tics for a caller-chosen interval. The sign of `dtic` is ignored.
pub(crate) fn solve_interval<D: Float>(xmin: D, xmax: D, dtic: D) -> TicSequence<D> {
    let delta = dtic.abs();
    let first = util::first_at_or_above(xmin, delta);
    TicSequence::new(first, delta, util::count_through(first, delta, xmax))
}

#[derive(Clone, Copy)]
struct Candidate<D> {
    multiple: TicMultiple,
    major: TicSequence<D>,
}

impl<D: Float> Candidate<D> {
    fn evaluate(xmin: D, xmax: D, multiple: TicMultiple, delta: D) -> Self {
        let candidate = Self {
            multiple,
            major: solve_interval(xmin, xmax, delta),
        };
        trace!(
            multiple = %multiple,
            delta = util::as_f64(delta),
            count = candidate.major.count(),
            "evaluated major tic candidate"
        );
        candidate
    }

    /// More tics than `best_count`, but still within `max_count`.
    fn beats(&self, best_count: usize, max_count: usize) -> bool {
        let count = self.major.count();
        count <= max_count && count > best_count
    }
}

/// Major tics for at most `max_count` tics, with the interval chosen from
/// `{1, 2, 5, 10} * 10^k`. Returns the multiple that subdivides the winner.
///
/// Each multiple `m` gets the exponent `trunc(log10(span / (m * max_count)))`;
/// the candidate with the most tics not exceeding `max_count` wins, earlier
/// multiples winning ties. When no candidate fits, the search falls back to
/// scanning nice intervals from the top down.
pub(crate) fn solve_count<D: Float>(
    xmin: D,
    xmax: D,
    max_count: usize,
) -> (TicMultiple, TicSequence<D>) {
    let max_count = max_count.max(1);
    let span = xmax - xmin;
    let limit: D = util::from_count(max_count);
    let ten = util::ten::<D>();

    let mut best: Option<Candidate<D>> = None;
    for multiple in TicMultiple::CANDIDATES {
        let factor = multiple.as_float::<D>();
        // Truncation, not floor: negative exponents round toward zero.
        let exponent = (span / (factor * limit)).log10().trunc();
        let candidate = Candidate::evaluate(xmin, xmax, multiple, factor * ten.powf(exponent));
        let best_count = best.map_or(0, |b| b.major.count());
        if candidate.beats(best_count, max_count) {
            best = Some(candidate);
        }
    }

    let best = best.unwrap_or_else(|| {
        debug!(
            xmin = util::as_f64(xmin),
            xmax = util::as_f64(xmax),
            max_count,
            "no truncated-exponent candidate fits, scanning nice intervals"
        );
        search_descending(xmin, xmax, max_count)
    });
    (best.multiple.promote_unit(), best.major)
}

/// Scans `10^(e+1)`, then `{5, 2, 1} * 10^k` for `k = e, e-1, ...` with
/// `e = ceil(log10(span))`, keeping the candidate with the most tics within
/// `max_count`. Stops once an interval is small enough that at least
/// `max_count + 1` tics must fit. The first interval exceeds the span, so it
/// yields at most one tic and serves as the result when nothing else fits.
fn search_descending<D: Float>(xmin: D, xmax: D, max_count: usize) -> Candidate<D> {
    let span = xmax - xmin;
    let limit: D = util::from_count(max_count.saturating_add(1));
    let ten = util::ten::<D>();

    let mut exponent = span.log10().ceil();
    let mut best = Candidate::evaluate(xmin, xmax, TicMultiple::Ten, ten.powf(exponent + D::one()));
    for _ in 0..MAX_SEARCH_DECADES {
        let decade = ten.powf(exponent);
        for multiple in [TicMultiple::Five, TicMultiple::Two, TicMultiple::One] {
            let delta = multiple.as_float::<D>() * decade;
            if delta * limit <= span {
                return best;
            }
            let candidate = Candidate::evaluate(xmin, xmax, multiple, delta);
            if candidate.beats(best.major.count(), max_count) {
                best = candidate;
            }
        }
        exponent = exponent - D::one();
    }
    best
}
