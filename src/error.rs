//! Errors reported by the sampling stages and the coordinate mapper.

use thiserror::Error;

/// Error returned by [`sample`](crate::sample),
/// [`derivative`](crate::derivative), [`integral`](crate::integral),
/// [`to_frame`](crate::to_frame) and the [`Plot`](crate::Plot) builder.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The parameters do not describe a computation that can be
    /// performed.  Nothing was evaluated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] Invalid),
}

/// The reason why a parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Invalid {
    #[error("step dx = {dx} must be finite and > 0")]
    NonPositiveStep { dx: f64 },

    #[error("step dx = {dx} must be smaller than the domain width {width}")]
    StepTooLarge { dx: f64, width: f64 },

    #[error("domain [{min}, {max}] must be finite with min < max")]
    EmptyDomain { min: f64, max: f64 },

    #[error("range [{min}, {max}] must be finite with min < max")]
    EmptyRange { min: f64, max: f64 },

    #[error("frame {width} × {height} must have finite positive sides")]
    EmptyFrame { width: f64, height: f64 },

    /// The integral is anchored at `x = 0` which must lie in the
    /// interior of the domain.
    #[error("anchor x = 0 is not inside the domain ]{min}, {max}[")]
    OutOfDomainAnchor { min: f64, max: f64 },
}

impl Error {
    /// Return the reason of the failure.
    pub fn reason(&self) -> Invalid {
        match *self { Error::InvalidParameter(r) => r }
    }
}
