//! Length payloads: a numeric value paired with a CSS unit.

use std::fmt;

use crate::types::format_float;

/// Units a [`Length`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Percent,
    /// Viewport width percentage.
    Vw,
    /// Viewport height percentage.
    Vh,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
            LengthUnit::Em => "em",
            LengthUnit::Percent => "%",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
        }
    }
}

/// A CSS length value.
///
/// The engine does not validate range semantics (a negative width is the
/// caller's bug); it only guarantees a deterministic serialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub fn rem(value: f64) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    pub fn em(value: f64) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    pub fn vw(value: f64) -> Self {
        Self::new(value, LengthUnit::Vw)
    }

    pub fn vh(value: f64) -> Self {
        Self::new(value, LengthUnit::Vh)
    }

    /// The unitless zero length.
    pub fn zero() -> Self {
        Self::px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0.0 {
            // Zero lengths render without a unit.
            write!(f, "0")
        } else {
            write!(f, "{}{}", format_float(self.value), self.unit.suffix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_render_with_unit_suffix() {
        assert_eq!(Length::px(12.0).to_string(), "12px");
        assert_eq!(Length::rem(1.25).to_string(), "1.25rem");
        assert_eq!(Length::percent(50.0).to_string(), "50%");
    }

    #[test]
    fn zero_drops_the_unit() {
        assert_eq!(Length::zero().to_string(), "0");
        assert_eq!(Length::rem(0.0).to_string(), "0");
    }
}
