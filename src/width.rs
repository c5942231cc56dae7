use std::str::FromStr;

use crate::error::WidthError;

/// A truncation width. Always non-negative.
///
/// The core functions take a plain `usize`; this type is the checked entry
/// point for values that arrive signed or as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Width(usize);

impl Width {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Width {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Width> for usize {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl TryFrom<i64> for Width {
    type Error = WidthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(WidthError::Negative(value));
        }
        // Only fails on targets narrower than 64 bits, where such a width
        // already exceeds any addressable string.
        Ok(Self(usize::try_from(value).unwrap_or(usize::MAX)))
    }
}

impl TryFrom<i32> for Width {
    type Error = WidthError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<isize> for Width {
    type Error = WidthError;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        // isize is at most 64 bits on every supported target.
        Self::try_from(value as i64)
    }
}

impl FromStr for Width {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(value) = text.parse::<usize>() {
            return Ok(Self(value));
        }
        match text.parse::<i64>() {
            Ok(value) => Self::try_from(value),
            Err(_) => Err(WidthError::NotANumber(text.to_string())),
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value parser for `--width`.
pub fn parse_width(s: &str) -> Result<usize, WidthError> {
    s.parse::<Width>().map(Width::get)
}
