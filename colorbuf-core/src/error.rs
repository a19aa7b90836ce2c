use alloc::string::String;
use core::{error, fmt};
use fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ZeroDimension { width: u32, height: u32 },
    DimensionOverflow { width: u32, height: u32 },
    SizeMismatch { expected: (u32, u32), actual: (u32, u32) },
    InvalidColor { input: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "color buffer dimensions must be non-zero, got {width}x{height}")
            }
            Self::DimensionOverflow { width, height } => {
                write!(f, "color buffer of {width}x{height} pixels doesn't fit in memory")
            }
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "color buffer is {}x{} but the render target is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::InvalidColor { input } => write!(
                f,
                "invalid color '{input}', expected up to 8 hex digits with an optional 0x or # prefix"
            ),
        }
    }
}

impl error::Error for Error {}
