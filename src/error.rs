use thiserror::Error;

/// Input rejected by the checked [`AxisTics`](crate::AxisTics) constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicsError {
    #[error("axis endpoints must be finite")]
    NonFiniteEndpoint,
    #[error("distance between axis endpoints overflows")]
    UnboundedSpan,
    #[error("major tic interval must be finite and non-zero")]
    InvalidInterval,
}
