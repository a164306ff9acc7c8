//! Axis tic parameters
//!
//! `axis_tics` computes where the tic marks of a linear plot axis go. Given
//! the values at both ends of an axis it produces two nested uniform
//! sequences: *major* tics, which are usually labeled, and *minor* tics, a
//! finer subdivision that contains every major tic. Only numbers come out;
//! formatting labels and drawing are left to the caller.
//!
//! # Construction Modes
//!
//! - [`AxisTics::from_interval`] - the caller fixes the major interval, the
//!   first tic and the count follow from the range.
//! - [`AxisTics::from_count`] - the caller bounds the number of major tics and
//!   the interval is picked from `{1, 2, 5} * 10^k`.
//!
//! Both are total for finite input. The `try_` variants check their input and
//! return [`TicsError`] instead of producing NaN.
//!
//! # Examples
//!
//! ## Fixed Interval
//!
//! ```rust
//! use axis_tics::{AxisTics, TicMultiple};
//!
//! let tics = AxisTics::from_interval(-1.0, 1.0, 0.5);
//!
//! assert_eq!(tics.count_major(), 5);
//! assert_eq!(tics.first_major(), -1.0);
//! assert_eq!(tics.delta_major(), 0.5);
//!
//! // 0.5 = 5 * 10^-1, so each major interval holds five minor intervals.
//! assert_eq!(tics.multiple(), TicMultiple::Five);
//! assert_eq!(tics.count_minor(), 21);
//! ```
//!
//! ## Bounded Count
//!
//! ```rust
//! use axis_tics::AxisTics;
//!
//! // At most four major tics on [0, 1]
//! let tics = AxisTics::from_count(0.0, 1.0, 4);
//! assert_eq!(tics.count_major(), 3);
//! assert_eq!(tics.major_values().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
//! ```
//!
//! ## Endpoint Order
//!
//! ```rust
//! use axis_tics::AxisTics;
//!
//! // Reversed axes get the same tics.
//! assert_eq!(
//!     AxisTics::from_interval(5.0, -3.0, 2.0),
//!     AxisTics::from_interval(-3.0, 5.0, 2.0),
//! );
//! ```
//!
//! ## Iterating Tics
//!
//! ```rust
//! use axis_tics::AxisTics;
//!
//! let tics = AxisTics::from_interval(0.0, 1.0, 0.5);
//!
//! // Ticks include both major (level 0) and minor (level 1) marks
//! for tick in tics.ticks() {
//!     if tick.level == 0 {
//!         println!("Major tick at: {}", tick.value);
//!     }
//! }
//! ```
//!

pub mod config;
pub mod error;
pub mod tics;

pub use config::TicMode;
pub use error::TicsError;
pub use num_traits::Float;
pub use tics::{AxisTics, Tick, TickIter, TicMultiple, TicSequence};
