//! The environment model: the finite, orthogonal runtime dimensions a
//! style may branch on, plus the snapshot type style functions receive.
//!
//! Style functions must be referentially transparent over these
//! snapshots: two snapshots with identical dimension values must resolve
//! a given style to identical output, because the generator evaluates a
//! style once per reachable combination and trusts the results to be
//! stable.

use std::fmt;

/// The user's color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// No scheme constraint; the scheme-agnostic case.
    #[default]
    Unspecified,
    Light,
    Dark,
}

impl ColorScheme {
    /// The value rendered into `data-color-scheme` attribute selectors.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            ColorScheme::Unspecified => None,
            ColorScheme::Light => Some("light"),
            ColorScheme::Dark => Some("dark"),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ColorScheme::Unspecified => "any",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// The viewport's horizontal size class.
///
/// Breakpoints are fixed: compact is below 768px, expanded is 1280px and
/// above, regular is the band in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalSizeClass {
    Compact,
    Regular,
    Expanded,
}

/// Upper bound of the compact band, in pixels.
pub const COMPACT_MAX_WIDTH: u32 = 767;
/// Lower bound of the regular band, in pixels.
pub const REGULAR_MIN_WIDTH: u32 = 768;
/// Upper bound of the regular band, in pixels.
pub const REGULAR_MAX_WIDTH: u32 = 1279;
/// Lower bound of the expanded band, in pixels.
pub const EXPANDED_MIN_WIDTH: u32 = 1280;

impl HorizontalSizeClass {
    /// Every size class, in ascending width order. Expansion iterates
    /// this slice so variant order is fixed.
    pub const ALL: [HorizontalSizeClass; 3] = [
        HorizontalSizeClass::Compact,
        HorizontalSizeClass::Regular,
        HorizontalSizeClass::Expanded,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            HorizontalSizeClass::Compact => "compact",
            HorizontalSizeClass::Regular => "regular",
            HorizontalSizeClass::Expanded => "expanded",
        }
    }

    /// The media features that scope a rule to this size class.
    pub fn media_features(self) -> Vec<MediaFeature> {
        match self {
            HorizontalSizeClass::Compact => vec![MediaFeature::MaxWidth(COMPACT_MAX_WIDTH)],
            HorizontalSizeClass::Regular => vec![
                MediaFeature::MinWidth(REGULAR_MIN_WIDTH),
                MediaFeature::MaxWidth(REGULAR_MAX_WIDTH),
            ],
            HorizontalSizeClass::Expanded => vec![MediaFeature::MinWidth(EXPANDED_MIN_WIDTH)],
        }
    }
}

/// Motion preference, from `prefers-reduced-motion`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduced,
}

/// Contrast preference, from `prefers-contrast`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastPreference {
    #[default]
    NoPreference,
    More,
}

/// Transparency preference, from `prefers-reduced-transparency`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransparencyPreference {
    #[default]
    NoPreference,
    Reduced,
}

/// How the page is being displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Browser,
    Standalone,
    Fullscreen,
    MinimalUi,
}

impl DisplayMode {
    fn keyword(self) -> &'static str {
        match self {
            DisplayMode::Browser => "browser",
            DisplayMode::Standalone => "standalone",
            DisplayMode::Fullscreen => "fullscreen",
            DisplayMode::MinimalUi => "minimal-ui",
        }
    }
}

/// An immutable snapshot of the environment dimensions relevant to one
/// style evaluation.
///
/// Only the dimensions a given effect family branches on are populated;
/// the rest stay at their defaults. The generator constructs these, one
/// per reachable combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentConditions {
    pub color_scheme: ColorScheme,
    pub size_class: Option<HorizontalSizeClass>,
    pub motion: MotionPreference,
    pub contrast: ContrastPreference,
    pub transparency: TransparencyPreference,
    pub display_mode: Option<DisplayMode>,
}

impl EnvironmentConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot constraining only the color scheme.
    pub fn with_color_scheme(scheme: ColorScheme) -> Self {
        Self {
            color_scheme: scheme,
            ..Self::default()
        }
    }

    /// A snapshot constraining only the size class.
    pub fn with_size_class(size_class: HorizontalSizeClass) -> Self {
        Self {
            size_class: Some(size_class),
            ..Self::default()
        }
    }
}

/// One media query feature, exposing its parenthesized condition text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaFeature {
    MinWidth(u32),
    MaxWidth(u32),
    PrefersColorScheme(ColorScheme),
    PrefersReducedMotion,
    PrefersMoreContrast,
    PrefersReducedTransparency,
    DisplayMode(DisplayMode),
}

impl MediaFeature {
    /// The condition string, without surrounding parentheses.
    pub fn condition(&self) -> String {
        match self {
            MediaFeature::MinWidth(px) => format!("min-width: {px}px"),
            MediaFeature::MaxWidth(px) => format!("max-width: {px}px"),
            MediaFeature::PrefersColorScheme(scheme) => {
                let value = match scheme {
                    ColorScheme::Light => "light",
                    ColorScheme::Dark => "dark",
                    // The agnostic case never scopes via media.
                    ColorScheme::Unspecified => "light",
                };
                format!("prefers-color-scheme: {value}")
            }
            MediaFeature::PrefersReducedMotion => "prefers-reduced-motion: reduce".to_string(),
            MediaFeature::PrefersMoreContrast => "prefers-contrast: more".to_string(),
            MediaFeature::PrefersReducedTransparency => {
                "prefers-reduced-transparency: reduce".to_string()
            }
            MediaFeature::DisplayMode(mode) => format!("display-mode: {}", mode.keyword()),
        }
    }
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.condition())
    }
}
