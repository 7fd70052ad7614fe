//! RGBA color payloads and their CSS serialization.
//!
//! Colors are opaque property payloads to the style engine: they are
//! constructed once and only ever serialized. Two colors that serialize to
//! the same CSS text are the same color as far as property identity is
//! concerned, no matter which constructor produced them.
//!
//! ## Supported entry points
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `Color::rgb(r, g, b)`, `Color::rgba(r, g, b, a)`
//! - **HSL**: `Color::hsl(h, s, l)` (converted to RGB at construction)
//! - **Named**: CSS color names like `red`, `coral`, `rebeccapurple`
//! - **Special**: `transparent`, `currentColor`

use std::fmt;

/// Error returned when color construction fails.
///
/// Contains a descriptive message about what went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorParseError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// An RGBA color.
///
/// Named colors and HSL inputs are normalized to RGB channels at
/// construction, so equality over the serialized value holds across entry
/// points:
///
/// ```
/// use trellis_css::types::Color;
///
/// let named = Color::named("red").unwrap();
/// let channels = Color::rgb(255, 0, 0);
/// assert_eq!(named.to_css(), channels.to_css());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
    /// When `true`, serializes as the `currentColor` keyword.
    current: bool,
}

/// Named CSS colors the engine accepts.
///
/// This is the CSS basic palette plus the extended names that show up in
/// real themes. Unknown names are a construction error, not a fallback.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf::phf_map! {
    "black" => (0, 0, 0),
    "silver" => (192, 192, 192),
    "gray" => (128, 128, 128),
    "white" => (255, 255, 255),
    "maroon" => (128, 0, 0),
    "red" => (255, 0, 0),
    "purple" => (128, 0, 128),
    "fuchsia" => (255, 0, 255),
    "green" => (0, 128, 0),
    "lime" => (0, 255, 0),
    "olive" => (128, 128, 0),
    "yellow" => (255, 255, 0),
    "navy" => (0, 0, 128),
    "blue" => (0, 0, 255),
    "teal" => (0, 128, 128),
    "aqua" => (0, 255, 255),
    "orange" => (255, 165, 0),
    "aliceblue" => (240, 248, 255),
    "coral" => (255, 127, 80),
    "cornflowerblue" => (100, 149, 237),
    "crimson" => (220, 20, 60),
    "darkgray" => (169, 169, 169),
    "darkslategray" => (47, 79, 79),
    "dimgray" => (105, 105, 105),
    "firebrick" => (178, 34, 34),
    "gainsboro" => (220, 220, 220),
    "gold" => (255, 215, 0),
    "hotpink" => (255, 105, 180),
    "indigo" => (75, 0, 130),
    "lightgray" => (211, 211, 211),
    "midnightblue" => (25, 25, 112),
    "rebeccapurple" => (102, 51, 153),
    "royalblue" => (65, 105, 225),
    "salmon" => (250, 128, 114),
    "seagreen" => (46, 139, 87),
    "slategray" => (112, 128, 144),
    "steelblue" => (70, 130, 180),
    "tomato" => (255, 99, 71),
    "whitesmoke" => (245, 245, 245),
};

impl Color {
    /// Creates an opaque color from RGB channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: 1.0,
            current: false,
        }
    }

    /// Creates a color from RGB channels and an alpha in `0.0..=1.0`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
            current: false,
        }
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Returns the `currentColor` keyword.
    pub fn current() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
            current: true,
        }
    }

    /// Parses a hex color string (e.g. `#ff0000`).
    ///
    /// Panics if the string is not valid hex. For fallible construction,
    /// use [`Color::parse_hex`].
    pub fn hex(hex: &str) -> Self {
        Self::parse_hex(hex).expect("invalid hex color")
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let nibble = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&digits[i..=i], 16).map_err(|_| ColorParseError {
                message: format!("invalid hex digit in color: {hex:?}"),
            })
        };
        let byte = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorParseError {
                message: format!("invalid hex digit in color: {hex:?}"),
            })
        };
        match digits.len() {
            3 => Ok(Self::rgb(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            )),
            4 => Ok(Self::rgba(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
                f32::from(nibble(3)? * 17) / 255.0,
            )),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(
                byte(0)?,
                byte(2)?,
                byte(4)?,
                f32::from(byte(6)?) / 255.0,
            )),
            _ => Err(ColorParseError {
                message: format!("hex color must have 3, 4, 6 or 8 digits: {hex:?}"),
            }),
        }
    }

    /// Looks up a named CSS color.
    pub fn named(name: &str) -> Result<Self, ColorParseError> {
        match name {
            "transparent" => Ok(Self::transparent()),
            "currentColor" | "currentcolor" => Ok(Self::current()),
            _ => NAMED_COLORS
                .get(name)
                .map(|&(r, g, b)| Self::rgb(r, g, b))
                .ok_or_else(|| ColorParseError {
                    message: format!("unknown color name: {name:?}"),
                }),
        }
    }

    /// Creates a color from HSL components.
    ///
    /// `hue` is in degrees, `saturation` and `lightness` in `0.0..=1.0`.
    /// The result is normalized to RGB channels.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// Creates a color from HSL components plus alpha.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::rgba(v, v, v, alpha);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |t: f32| -> u8 {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round() as u8
        };
        Self::rgba(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
            alpha,
        )
    }

    /// Returns a copy of this color with the given alpha.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Serializes this color to its canonical CSS value.
    ///
    /// Opaque colors render as `#rrggbb`; translucent colors render as
    /// `rgba(r, g, b, a)`. The canonical form is what property identity
    /// and deduplication compare, so it must be deterministic.
    pub fn to_css(&self) -> String {
        if self.current {
            return "currentColor".to_string();
        }
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            // f32 Display already yields the shortest round-trip form.
            let alpha = if self.a == 0.0 {
                "0".to_string()
            } else {
                format!("{}", self.a)
            };
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}
