//! Major and minor tic parameters for a linear axis.
//!
//! [`AxisTics`] is built once from the two axis endpoints and either a major
//! tic interval ([`AxisTics::from_interval`]) or an upper bound on the number
//! of major tics ([`AxisTics::from_count`]). Every major tic is also a minor
//! tic; the [`TicMultiple`] tells how many minor intervals make up one major
//! interval.

mod major;
mod minor;
mod multiple;
mod tick_iter;
mod util;

use num_traits::Float;
use tracing::debug;

use crate::{TicMode, TicsError};

pub use multiple::TicMultiple;
pub use tick_iter::TickIter;

/// A tic mark produced by [`AxisTics::ticks`].
///
/// `level` 0 marks a major tic, level 1 a minor tic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick<D> {
    pub value: D,
    pub level: u8,
}

impl<D> Tick<D> {
    pub const MAJOR: u8 = 0;
    pub const MINOR: u8 = 1;

    pub fn is_major(&self) -> bool {
        self.level == Self::MAJOR
    }
}

/// A uniform run of tics: `first + i * delta` for `i` in `0..count`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TicSequence<D> {
    first: D,
    delta: D,
    count: usize,
}

impl<D: Float> TicSequence<D> {
    pub(crate) fn new(first: D, delta: D, count: usize) -> Self {
        Self { first, delta, count }
    }

    /// Value of the first tic. When `count` is zero this is the first grid
    /// value above the axis and lies outside it.
    pub fn first(&self) -> D {
        self.first
    }

    /// Spacing between consecutive tics.
    pub fn delta(&self) -> D {
        self.delta
    }

    /// Number of tics in the run.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Value of the tic at `index`, computed from `first` without
    /// accumulating rounding error.
    pub fn value(&self, index: usize) -> D {
        self.first + self.delta * util::from_count(index)
    }

    /// Iterates over the tic values in ascending order.
    ///
    /// ```
    /// use axis_tics::AxisTics;
    ///
    /// let tics = AxisTics::from_interval(0.0, 1.0, 0.25);
    /// let values: Vec<f64> = tics.major().values().collect();
    /// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn values(&self) -> impl ExactSizeIterator<Item = D> + DoubleEndedIterator + use<D> {
        let sequence = *self;
        (0..sequence.count).map(move |index| sequence.value(index))
    }
}

/// Tic parameters for one axis.
///
/// Construction fixes all values; there are no setters. The first major tic
/// is the smallest multiple of the major interval that is not less than the
/// lower endpoint, and the major count stops at the last multiple that does
/// not exceed the upper endpoint. Minor tics extend the same grid at
/// `1 / multiple` of the spacing, so they may start below the first major tic.
///
/// # Examples
///
/// ## Fixed interval
///
/// ```
/// use axis_tics::{AxisTics, TicMultiple};
///
/// let tics = AxisTics::from_interval(-1.0, 1.0, 0.5);
/// assert_eq!(tics.count_major(), 5);
/// assert_eq!(tics.first_major(), -1.0);
/// assert_eq!(tics.multiple(), TicMultiple::Five);
/// assert_eq!(tics.count_minor(), 21);
/// ```
///
/// ## Bounded count
///
/// ```
/// use axis_tics::AxisTics;
///
/// let tics = AxisTics::from_count(0.0, 1.0, 4);
/// assert_eq!(tics.count_major(), 3);
/// assert_eq!(tics.delta_major(), 0.5);
/// ```
///
/// ## Walking the tics
///
/// ```
/// use axis_tics::AxisTics;
///
/// let tics = AxisTics::from_interval(0.0, 10.0, 5.0);
/// let majors: Vec<f64> = tics.ticks().filter(|t| t.is_major()).map(|t| t.value).collect();
/// assert_eq!(majors, vec![0.0, 5.0, 10.0]);
/// assert_eq!(tics.ticks().len(), 11);
/// ```
///
/// With the `serde` feature the whole record serializes, but deserializing
/// only reads `xmin`, `xmax` and `mode` and rebuilds the tics from them with
/// [`AxisTics::try_new`]; the derived fields of the input are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "AxisSettings<D>",
        bound(deserialize = "D: Float + serde::Deserialize<'de>")
    )
)]
pub struct AxisTics<D = f64> {
    xmin: D,
    xmax: D,
    mode: TicMode<D>,
    multiple: TicMultiple,
    major: TicSequence<D>,
    minor: TicSequence<D>,
}

impl<D: Float> AxisTics<D> {
    /// Builds tics from either construction mode.
    pub fn new(x1: D, x2: D, mode: TicMode<D>) -> Self {
        match mode {
            TicMode::Interval(dtic) => Self::from_interval(x1, x2, dtic),
            TicMode::Count(max_count) => Self::from_count(x1, x2, max_count),
        }
    }

    /// Builds tics with the major interval `|dtic|`.
    ///
    /// The endpoints may come in either order. `dtic` must be non-zero and all
    /// inputs finite; otherwise the result holds NaN. Use
    /// [`AxisTics::try_from_interval`] to have them checked.
    pub fn from_interval(x1: D, x2: D, dtic: D) -> Self {
        let (xmin, xmax) = util::sorted_pair(x1, x2);
        let major = major::solve_interval(xmin, xmax, dtic);
        let multiple = TicMultiple::classify(major.delta());
        Self::assemble(xmin, xmax, TicMode::Interval(major.delta()), multiple, major)
    }

    /// Builds tics with at most `max_count` major tics (0 counts as 1).
    ///
    /// The major interval is 1, 2 or 5 times a power of ten. When both
    /// endpoints are equal the result is a single major and minor tic at that
    /// value with a unit major interval; see [`AxisTics::is_degenerate`].
    pub fn from_count(x1: D, x2: D, max_count: usize) -> Self {
        let (xmin, xmax) = util::sorted_pair(x1, x2);
        let mode = TicMode::Count(max_count.max(1));
        if xmax == xmin {
            debug!(value = util::as_f64(xmin), "degenerate axis range");
            let major = TicSequence::new(xmin, D::one(), 1);
            return Self::assemble(xmin, xmax, mode, TicMultiple::Ten, major);
        }
        let (multiple, major) = major::solve_count(xmin, xmax, max_count);
        Self::assemble(xmin, xmax, mode, multiple, major)
    }

    /// Checked form of [`AxisTics::new`].
    pub fn try_new(x1: D, x2: D, mode: TicMode<D>) -> Result<Self, TicsError> {
        match mode {
            TicMode::Interval(dtic) => Self::try_from_interval(x1, x2, dtic),
            TicMode::Count(max_count) => Self::try_from_count(x1, x2, max_count),
        }
    }

    /// Checked form of [`AxisTics::from_interval`].
    ///
    /// # Errors
    ///
    /// Fails when an endpoint is not finite, when the distance between them
    /// overflows, or when `dtic` is zero or not finite.
    ///
    /// ```
    /// use axis_tics::{AxisTics, TicsError};
    ///
    /// assert!(AxisTics::try_from_interval(0.0, 1.0, 0.1).is_ok());
    /// assert_eq!(
    ///     AxisTics::try_from_interval(0.0, 1.0, 0.0),
    ///     Err(TicsError::InvalidInterval)
    /// );
    /// ```
    pub fn try_from_interval(x1: D, x2: D, dtic: D) -> Result<Self, TicsError> {
        check_endpoints(x1, x2)?;
        if !dtic.is_finite() || dtic == D::zero() {
            return Err(TicsError::InvalidInterval);
        }
        Ok(Self::from_interval(x1, x2, dtic))
    }

    /// Checked form of [`AxisTics::from_count`].
    ///
    /// # Errors
    ///
    /// Fails when an endpoint is not finite or the distance between them
    /// overflows.
    pub fn try_from_count(x1: D, x2: D, max_count: usize) -> Result<Self, TicsError> {
        check_endpoints(x1, x2)?;
        Ok(Self::from_count(x1, x2, max_count))
    }

    fn assemble(
        xmin: D,
        xmax: D,
        mode: TicMode<D>,
        multiple: TicMultiple,
        major: TicSequence<D>,
    ) -> Self {
        let minor = minor::subdivide(xmin, xmax, &major, multiple);
        Self {
            xmin,
            xmax,
            mode,
            multiple,
            major,
            minor,
        }
    }

    /// The smaller axis endpoint.
    pub fn xmin(&self) -> D {
        self.xmin
    }

    /// The larger axis endpoint.
    pub fn xmax(&self) -> D {
        self.xmax
    }

    /// The mode these tics were built with: the absolute major interval, or
    /// the tic bound after raising 0 to 1.
    pub fn mode(&self) -> TicMode<D> {
        self.mode
    }

    /// `true` when both endpoints are equal and there is nothing to subdivide.
    pub fn is_degenerate(&self) -> bool {
        self.xmin == self.xmax
    }

    /// Number of major tics.
    pub fn count_major(&self) -> usize {
        self.major.count
    }

    /// Major tic interval.
    pub fn delta_major(&self) -> D {
        self.major.delta
    }

    /// Value of the first major tic.
    pub fn first_major(&self) -> D {
        self.major.first
    }

    /// Number of minor tics.
    pub fn count_minor(&self) -> usize {
        self.minor.count
    }

    /// Minor tic interval.
    pub fn delta_minor(&self) -> D {
        self.minor.delta
    }

    /// Value of the first minor tic.
    pub fn first_minor(&self) -> D {
        self.minor.first
    }

    /// Number of minor intervals per major interval.
    pub fn multiple(&self) -> TicMultiple {
        self.multiple
    }

    /// The multiple as an integer: 1, 2, 5 or 10.
    pub fn multiple_factor(&self) -> u32 {
        self.multiple.factor()
    }

    /// The major tics as a sequence.
    pub fn major(&self) -> &TicSequence<D> {
        &self.major
    }

    /// The minor tics as a sequence; it contains every major tic.
    pub fn minor(&self) -> &TicSequence<D> {
        &self.minor
    }

    /// Values of the major tics in ascending order.
    pub fn major_values(&self) -> impl ExactSizeIterator<Item = D> + DoubleEndedIterator + use<D> {
        self.major.values()
    }

    /// Values of the minor tics in ascending order, majors included.
    pub fn minor_values(&self) -> impl ExactSizeIterator<Item = D> + DoubleEndedIterator + use<D> {
        self.minor.values()
    }

    /// Every minor tic in ascending order, with those that coincide with a
    /// major tic reported at level 0 and the major value.
    pub fn ticks(&self) -> TickIter<D> {
        TickIter::new(self)
    }
}

/// The inputs an [`AxisTics`] is deserialized from.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AxisSettings<D> {
    xmin: D,
    xmax: D,
    mode: TicMode<D>,
}

#[cfg(feature = "serde")]
impl<D: Float> TryFrom<AxisSettings<D>> for AxisTics<D> {
    type Error = TicsError;

    fn try_from(settings: AxisSettings<D>) -> Result<Self, Self::Error> {
        Self::try_new(settings.xmin, settings.xmax, settings.mode)
    }
}

fn check_endpoints<D: Float>(x1: D, x2: D) -> Result<(), TicsError> {
    if !x1.is_finite() || !x2.is_finite() {
        return Err(TicsError::NonFiniteEndpoint);
    }
    if !(x2 - x1).is_finite() {
        return Err(TicsError::UnboundedSpan);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accessors() {
        let tics = AxisTics::from_interval(0.0, 1.0, 0.3);
        assert_eq!(tics.xmin(), 0.0);
        assert_eq!(tics.xmax(), 1.0);
        assert_eq!(tics.count_major(), 4);
        assert_eq!(tics.delta_major(), 0.3);
        assert_eq!(tics.first_major(), 0.0);
        assert_eq!(tics.multiple(), TicMultiple::One);
        assert_eq!(tics.multiple_factor(), 1);
        assert_eq!(tics.major(), tics.minor());
    }

    #[test]
    fn test_new_dispatches_on_mode() {
        assert_eq!(
            AxisTics::new(0.0, 1.0, TicMode::Interval(0.25)),
            AxisTics::from_interval(0.0, 1.0, 0.25)
        );
        assert_eq!(
            AxisTics::new(0.0, 1.0, TicMode::Count(4)),
            AxisTics::from_count(0.0, 1.0, 4)
        );
    }

    #[test]
    fn test_mode_records_normalized_input() {
        assert_eq!(AxisTics::from_interval(0.0, 1.0, -0.25).mode(), TicMode::Interval(0.25));
        assert_eq!(AxisTics::from_count(0.0, 1.0, 0).mode(), TicMode::Count(1));
        assert_eq!(AxisTics::from_count(3.0, 3.0, 7).mode(), TicMode::Count(7));
    }

    #[test]
    fn test_degenerate_count_range() {
        let tics = AxisTics::from_count(3.0, 3.0, 7);
        assert!(tics.is_degenerate());
        assert_eq!(tics.count_major(), 1);
        assert_eq!(tics.first_major(), 3.0);
        assert_eq!(tics.delta_major(), 1.0);
        assert_eq!(tics.multiple(), TicMultiple::Ten);
        assert_eq!(tics.count_minor(), 1);
        assert_eq!(tics.first_minor(), 3.0);
        assert_eq!(tics.delta_minor(), 0.1);
    }

    #[test]
    fn test_degenerate_interval_range() {
        let tics = AxisTics::from_interval(0.5, 0.5, 0.25);
        assert!(tics.is_degenerate());
        assert_eq!(tics.count_major(), 1);
        assert_eq!(tics.first_major(), 0.5);

        let tics = AxisTics::from_interval(0.6, 0.6, 0.25);
        assert_eq!(tics.count_major(), 0);
    }

    #[test]
    fn test_zero_interval_propagates_nan() {
        let tics = AxisTics::from_interval(1.0, 2.0, 0.0);
        assert!(tics.first_major().is_nan());
    }

    #[test]
    fn test_try_constructors_reject_bad_input() {
        assert_eq!(
            AxisTics::try_from_interval(f64::NAN, 1.0, 0.1),
            Err(TicsError::NonFiniteEndpoint)
        );
        assert_eq!(
            AxisTics::try_from_count(0.0, f64::INFINITY, 5),
            Err(TicsError::NonFiniteEndpoint)
        );
        assert_eq!(
            AxisTics::try_from_count(-f64::MAX, f64::MAX, 5),
            Err(TicsError::UnboundedSpan)
        );
        assert_eq!(
            AxisTics::try_from_interval(0.0, 1.0, f64::NAN),
            Err(TicsError::InvalidInterval)
        );
        assert_eq!(
            AxisTics::try_new(0.0, 1.0, TicMode::Interval(0.0)),
            Err(TicsError::InvalidInterval)
        );
    }

    #[test]
    fn test_try_constructors_accept_good_input() {
        assert_eq!(
            AxisTics::try_new(1.0, 0.0, TicMode::Count(4)),
            Ok(AxisTics::from_count(0.0, 1.0, 4))
        );
        assert_eq!(
            AxisTics::try_from_interval(0.0, 1.0, -0.5),
            Ok(AxisTics::from_interval(0.0, 1.0, 0.5))
        );
    }

    #[test]
    fn test_sequence_values() {
        let sequence = TicSequence::new(-1.0, 0.5, 5);
        let values: Vec<f64> = sequence.values().collect();
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(sequence.values().rev().next(), Some(1.0));
        assert_eq!(sequence.value(2), 0.0);
    }

    #[test]
    fn test_value_iterators_are_exact() {
        let tics = AxisTics::from_interval(0.0, 100.0, 10.0);
        assert_eq!(tics.major_values().len(), 11);
        assert_eq!(tics.minor_values().len(), 101);
        assert_eq!(tics.major_values().last(), Some(100.0));
    }

    #[test]
    fn test_tics_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AxisTics<f64>>();
        assert_send_sync::<AxisTics<f32>>();
    }
}
