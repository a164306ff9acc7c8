//! Axis tic settings as plain data.
//!
//! A [`TicMode`] records how an axis wants its major tics chosen, so renderers
//! can keep it in their axis settings and build [`AxisTics`](crate::AxisTics)
//! from it whenever the visible range changes.
//!
//! ```
//! use axis_tics::{AxisTics, TicMode};
//!
//! let mode = TicMode::default();
//! assert_eq!(mode, TicMode::Count(10));
//!
//! let tics = AxisTics::new(0.0, 1.0, mode);
//! assert!(tics.count_major() <= 10);
//! ```

/// Default upper bound on the number of major tics.
pub const DEFAULT_MAX_COUNT: usize = 10;

/// How the major tic interval is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TicMode<D = f64> {
    /// Fixed major interval; the sign is ignored.
    Interval(D),
    /// At most this many major tics; 0 is treated as 1.
    Count(usize),
}

impl<D> Default for TicMode<D> {
    fn default() -> Self {
        Self::Count(DEFAULT_MAX_COUNT)
    }
}
