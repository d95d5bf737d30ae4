//! Human coordinate input.

use core::fmt;

use crate::coord::Coordinate;

/// Errors produced while reading a coordinate from a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// A token was not a non-negative whole number.
    InvalidFormat,
    /// The input stream ended.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidFormat => write!(f, "Enter numbers"),
            InputError::Closed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Supplies raw target coordinates from a human.
pub trait InputSource {
    /// Read one `(row, col)` pair. Bounds are not checked here.
    fn read_coordinate(&mut self) -> Result<Coordinate, InputError>;
}

/// Parse a row and a column token into a coordinate.
///
/// Tokens must consist of ASCII digits only. Values too large for the
/// coordinate type saturate, so they surface as out-of-bounds shots rather
/// than format errors.
pub fn parse_coordinate(row: &str, col: &str) -> Result<Coordinate, InputError> {
    Ok(Coordinate::new(parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(token: &str) -> Result<u8, InputError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidFormat);
    }
    let value = token.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });
    Ok(u8::try_from(value).unwrap_or(u8::MAX))
}
