//! Font payloads: family stacks, weights, styles, decoration lines, and
//! self-hosted font sources for `@font-face` emission.

use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;

/// The standard system sans-serif stack, built once.
static SYSTEM_SANS_STACK: Lazy<String> = Lazy::new(|| {
    [
        "system-ui",
        "-apple-system",
        "\"Segoe UI\"",
        "Roboto",
        "\"Helvetica Neue\"",
        "Arial",
        "sans-serif",
    ]
    .join(", ")
});

/// The standard monospace stack, built once.
static SYSTEM_MONO_STACK: Lazy<String> = Lazy::new(|| {
    [
        "ui-monospace",
        "SFMono-Regular",
        "Menlo",
        "Consolas",
        "\"Liberation Mono\"",
        "monospace",
    ]
    .join(", ")
});

/// A CSS font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// The numeric CSS value for this weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A CSS font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        };
        write!(f, "{keyword}")
    }
}

bitflags! {
    /// The set of text decoration lines applied to a run of text.
    ///
    /// An empty set serializes as `none`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextDecorationLine: u8 {
        const UNDERLINE    = 0b0000_0001;
        const OVERLINE     = 0b0000_0010;
        const LINE_THROUGH = 0b0000_0100;
    }
}

impl fmt::Display for TextDecorationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut keywords = Vec::new();
        if self.contains(TextDecorationLine::UNDERLINE) {
            keywords.push("underline");
        }
        if self.contains(TextDecorationLine::OVERLINE) {
            keywords.push("overline");
        }
        if self.contains(TextDecorationLine::LINE_THROUGH) {
            keywords.push("line-through");
        }
        write!(f, "{}", keywords.join(" "))
    }
}

/// One source file backing a self-hosted font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSource {
    /// URL or site-relative path of the font file.
    pub path: String,
    /// Format hint for the `format(...)` clause (e.g. `woff2`).
    pub format: Option<String>,
    /// Weight this source file provides.
    pub weight: FontWeight,
    /// Style this source file provides.
    pub style: FontStyle,
}

impl FontSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: None,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// A font: a primary family name, a fallback stack, and zero or more
/// self-hosted sources.
///
/// Fonts with sources get `@font-face` blocks in the generated
/// stylesheet; system fonts only contribute their family stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Font {
    /// The primary family name.
    pub family: String,
    /// Fallback stack appended after the family name.
    pub fallback: String,
    /// Self-hosted source files, empty for system fonts.
    pub sources: Vec<FontSource>,
}

impl Font {
    /// A named font falling back to the system sans-serif stack.
    pub fn named(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            fallback: SYSTEM_SANS_STACK.clone(),
            sources: Vec::new(),
        }
    }

    /// The system sans-serif stack with no primary family.
    pub fn system_sans() -> Self {
        Self {
            family: String::new(),
            fallback: SYSTEM_SANS_STACK.clone(),
            sources: Vec::new(),
        }
    }

    /// The system monospace stack with no primary family.
    pub fn system_mono() -> Self {
        Self {
            family: String::new(),
            fallback: SYSTEM_MONO_STACK.clone(),
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: FontSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// The full `font-family` stack for this font.
    pub fn stack(&self) -> String {
        if self.family.is_empty() {
            self.fallback.clone()
        } else if self.fallback.is_empty() {
            quote_family(&self.family)
        } else {
            format!("{}, {}", quote_family(&self.family), self.fallback)
        }
    }
}

/// Quotes a family name when it contains whitespace.
fn quote_family(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}
