use std::fmt;

use num_traits::Float;

use super::util;

/// Number of minor intervals per major interval.
///
/// The major interval of an axis is `factor * 10^k` for some integer `k`
/// whenever it is a "nice" number; the matching multiple splits it into minor
/// intervals that are themselves powers of ten. Intervals that are not nice
/// get [`TicMultiple::One`], which makes minor tics coincide with major tics.
///
/// # Examples
///
/// ```
/// use axis_tics::TicMultiple;
///
/// assert_eq!(TicMultiple::classify(0.5_f64), TicMultiple::Five);
/// assert_eq!(TicMultiple::classify(100.0_f64), TicMultiple::Ten);
/// assert_eq!(TicMultiple::classify(0.3_f64), TicMultiple::One);
/// assert_eq!(TicMultiple::Two.factor(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TicMultiple {
    One,
    Two,
    Five,
    Ten,
}

impl TicMultiple {
    /// Multiples tried by the count-mode solver, smallest interval first.
    pub(crate) const CANDIDATES: [TicMultiple; 4] = [Self::One, Self::Two, Self::Five, Self::Ten];

    /// The integer ratio `major interval / minor interval`.
    pub fn factor(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    /// The factor as a value of the axis type.
    pub fn as_float<D: Float>(self) -> D {
        match self {
            Self::One => D::one(),
            Self::Two => util::two(),
            Self::Five => util::five(),
            Self::Ten => util::ten(),
        }
    }

    /// Classifies a major interval as `m * 10^k` with `m` in `{10, 5, 2}`.
    ///
    /// The checks run in that order because a power of ten also satisfies the
    /// tests for 5 and 2. Anything else, including non-positive intervals,
    /// is [`TicMultiple::One`].
    pub fn classify<D: Float>(dtic: D) -> Self {
        for multiple in [Self::Ten, Self::Five, Self::Two] {
            let exponent = (dtic / multiple.as_float()).log10();
            if util::almost_equal(exponent.round(), exponent) {
                return multiple;
            }
        }
        Self::One
    }

    /// A single-interval multiple carries no subdivision; the equivalent
    /// `10 * 10^(k-1)` form splits it into tenths.
    pub(crate) fn promote_unit(self) -> Self {
        match self {
            Self::One => Self::Ten,
            other => other,
        }
    }
}

impl fmt::Display for TicMultiple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factor())
    }
}

impl From<TicMultiple> for u32 {
    fn from(multiple: TicMultiple) -> Self {
        multiple.factor()
    }
}

impl TryFrom<u32> for TicMultiple {
    type Error = u32;

    /// Fails with the rejected value unless it is 1, 2, 5 or 10.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            other => Err(other),
        }
    }
}
