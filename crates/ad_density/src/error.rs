use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Failure raised when the collected artifacts cannot be scored at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityError {
    /// The viewport has no usable area: a dimension is negative or not
    /// finite, or the product of the dimensions is not a positive finite
    /// number.
    InvalidInput {
        /// Reported viewport width.
        width: f64,
        /// Reported viewport height.
        height: f64,
    },
}

impl Display for DensityError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidInput { width, height } => {
                write!(
                    formatter,
                    "viewport area is zero or not a usable size ({width}x{height})"
                )
            }
        }
    }
}

impl Error for DensityError {}
