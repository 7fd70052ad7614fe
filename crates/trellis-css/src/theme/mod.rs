//! Theme configuration and resolution.
//!
//! A theme is a function from environment conditions to a sparse
//! [`ThemeConfiguration`]. Resolution evaluates that function three
//! times — scheme-agnostic, light, dark — and then applies style-value
//! inheritance: any *style-typed* field left unset on the light or dark
//! configuration is back-filled from the scheme-agnostic one.
//!
//! Scalar fields (colors, fonts, sizes, weights) are never inherited
//! this way; they stay set-or-unset per scheme and the generator emits
//! only their per-scheme differences.
//!
//! The inheritance rule exists because style-typed fields are resolved
//! lazily with explicit color-scheme context. A style declared only on
//! the scheme-agnostic configuration would otherwise be expanded without
//! that context and silently lose its dark-mode variant — so the dark
//! variant of an inherited style must always be emitted, even when the
//! dark configuration itself declares nothing for the field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::environment::{ColorScheme, EnvironmentConditions, HorizontalSizeClass};
use crate::style::scoped::{assemble, CaseScope, ExpansionCase, ScopedStyle, FAMILY_THEME};
use crate::style::{Style, StyledContent};
use crate::types::{Color, Font, FontWeight, Length};

/// Semantic text roles a theme can size independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextRole {
    Body,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Code,
    Caption,
}

impl TextRole {
    /// Suffix used in the emitted `--font-size-*` variable name.
    pub fn variable_suffix(self) -> &'static str {
        match self {
            TextRole::Body => "body",
            TextRole::Heading1 => "h1",
            TextRole::Heading2 => "h2",
            TextRole::Heading3 => "h3",
            TextRole::Heading4 => "h4",
            TextRole::Code => "code",
            TextRole::Caption => "caption",
        }
    }
}

/// A length with optional compact/expanded overrides.
///
/// `base` is the unscoped value; the overrides are emitted inside the
/// matching size-class media blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResponsiveLength {
    pub base: Option<Length>,
    pub compact: Option<Length>,
    pub expanded: Option<Length>,
}

impl ResponsiveLength {
    pub fn fixed(length: Length) -> Self {
        Self {
            base: Some(length),
            compact: None,
            expanded: None,
        }
    }

    fn set(&mut self, size_class: HorizontalSizeClass, length: Length) {
        match size_class {
            HorizontalSizeClass::Compact => self.compact = Some(length),
            HorizontalSizeClass::Regular => self.base = Some(length),
            HorizontalSizeClass::Expanded => self.expanded = Some(length),
        }
    }
}

/// The style-typed slot a theme can fill: styling for inline code runs.
pub type ThemeStyle = Arc<dyn Style + Send + Sync>;

/// A sparse bag of theming knobs.
///
/// Every field is optional; unset fields contribute nothing to output.
/// Built with the `with_*` methods.
#[derive(Clone, Default)]
pub struct ThemeConfiguration {
    pub accent: Option<Color>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub link: Option<Color>,
    pub border: Option<Color>,
    pub body_font: Option<Font>,
    pub code_font: Option<Font>,
    pub font_sizes: BTreeMap<TextRole, ResponsiveLength>,
    pub line_spacing: Option<f64>,
    pub body_weight: Option<FontWeight>,
    pub heading_weight: Option<FontWeight>,
    pub max_content_width: Option<Length>,
    /// Opaque reference to a syntax-highlighter theme; the site layer
    /// links the matching stylesheet.
    pub syntax_theme: Option<String>,
    /// Style applied to inline code. The one style-typed field, subject
    /// to base → light/dark inheritance during resolution.
    pub inline_code_style: Option<ThemeStyle>,
}

impl fmt::Debug for ThemeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfiguration")
            .field("accent", &self.accent)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("link", &self.link)
            .field("border", &self.border)
            .field("body_font", &self.body_font)
            .field("code_font", &self.code_font)
            .field("font_sizes", &self.font_sizes)
            .field("line_spacing", &self.line_spacing)
            .field("body_weight", &self.body_weight)
            .field("heading_weight", &self.heading_weight)
            .field("max_content_width", &self.max_content_width)
            .field("syntax_theme", &self.syntax_theme)
            .field(
                "inline_code_style",
                &self.inline_code_style.as_ref().map(|_| "<style>"),
            )
            .finish()
    }
}

impl ThemeConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_link(mut self, color: Color) -> Self {
        self.link = Some(color);
        self
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn with_body_font(mut self, font: Font) -> Self {
        self.body_font = Some(font);
        self
    }

    pub fn with_code_font(mut self, font: Font) -> Self {
        self.code_font = Some(font);
        self
    }

    /// Sets the unscoped font size for a role.
    pub fn with_font_size(mut self, role: TextRole, size: Length) -> Self {
        self.font_sizes
            .entry(role)
            .or_default()
            .set(HorizontalSizeClass::Regular, size);
        self
    }

    /// Sets a size-class override for a role.
    pub fn with_font_size_at(
        mut self,
        role: TextRole,
        size_class: HorizontalSizeClass,
        size: Length,
    ) -> Self {
        self.font_sizes.entry(role).or_default().set(size_class, size);
        self
    }

    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    pub fn with_body_weight(mut self, weight: FontWeight) -> Self {
        self.body_weight = Some(weight);
        self
    }

    pub fn with_heading_weight(mut self, weight: FontWeight) -> Self {
        self.heading_weight = Some(weight);
        self
    }

    pub fn with_max_content_width(mut self, width: Length) -> Self {
        self.max_content_width = Some(width);
        self
    }

    pub fn with_syntax_theme(mut self, name: impl Into<String>) -> Self {
        self.syntax_theme = Some(name.into());
        self
    }

    pub fn with_inline_code_style(mut self, style: ThemeStyle) -> Self {
        self.inline_code_style = Some(style);
        self
    }

    /// Overlays this configuration on `base`: fields set here win,
    /// unset fields fall back to `base`. Used for scheme-locked
    /// rendering.
    pub fn merged_over(&self, base: &ThemeConfiguration) -> ThemeConfiguration {
        let mut font_sizes = base.font_sizes.clone();
        for (role, sizes) in &self.font_sizes {
            font_sizes.insert(*role, *sizes);
        }
        ThemeConfiguration {
            accent: self.accent.or(base.accent),
            foreground: self.foreground.or(base.foreground),
            background: self.background.or(base.background),
            link: self.link.or(base.link),
            border: self.border.or(base.border),
            body_font: self.body_font.clone().or_else(|| base.body_font.clone()),
            code_font: self.code_font.clone().or_else(|| base.code_font.clone()),
            font_sizes,
            line_spacing: self.line_spacing.or(base.line_spacing),
            body_weight: self.body_weight.or(base.body_weight),
            heading_weight: self.heading_weight.or(base.heading_weight),
            max_content_width: self.max_content_width.or(base.max_content_width),
            syntax_theme: self
                .syntax_theme
                .clone()
                .or_else(|| base.syntax_theme.clone()),
            inline_code_style: self
                .inline_code_style
                .clone()
                .or_else(|| base.inline_code_style.clone()),
        }
    }
}

/// A theme: an identifier plus a configuration function over the
/// environment.
pub trait Theme {
    /// The identifier rendered into `[data-theme="id"]` selectors.
    fn id(&self) -> String;

    /// The configuration for the given environment. Must be pure: it is
    /// evaluated once per color scheme and the results are trusted to be
    /// stable.
    fn configuration(&self, environment: &EnvironmentConditions) -> ThemeConfiguration;
}

/// A theme evaluated across the three color-scheme contexts, with
/// style-value inheritance applied.
#[derive(Clone, Debug)]
pub struct ResolvedTheme {
    id: String,
    base: ThemeConfiguration,
    light_only: ThemeConfiguration,
    dark_only: ThemeConfiguration,
}

impl ResolvedTheme {
    /// Evaluates and resolves `theme`.
    pub fn resolve(theme: &dyn Theme) -> Self {
        let base =
            theme.configuration(&EnvironmentConditions::with_color_scheme(ColorScheme::Unspecified));
        let mut light_only =
            theme.configuration(&EnvironmentConditions::with_color_scheme(ColorScheme::Light));
        let mut dark_only =
            theme.configuration(&EnvironmentConditions::with_color_scheme(ColorScheme::Dark));

        // Style-value inheritance. Only the style-typed field back-fills;
        // scalars stay per-scheme.
        if light_only.inline_code_style.is_none() {
            light_only.inline_code_style = base.inline_code_style.clone();
        }
        if dark_only.inline_code_style.is_none() {
            dark_only.inline_code_style = base.inline_code_style.clone();
        }

        Self {
            id: theme.id(),
            base,
            light_only,
            dark_only,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base(&self) -> &ThemeConfiguration {
        &self.base
    }

    pub fn light_only(&self) -> &ThemeConfiguration {
        &self.light_only
    }

    pub fn dark_only(&self) -> &ThemeConfiguration {
        &self.dark_only
    }

    /// The configuration for one scheme, with base fallback applied.
    pub fn configuration_for(&self, scheme: ColorScheme) -> ThemeConfiguration {
        match scheme {
            ColorScheme::Unspecified => self.base.clone(),
            ColorScheme::Light => self.light_only.merged_over(&self.base),
            ColorScheme::Dark => self.dark_only.merged_over(&self.base),
        }
    }

    /// Expands the theme's style-typed field into a [`ScopedStyle`].
    ///
    /// Each scheme's configuration contributes one case, evaluated with
    /// that scheme's environment — which is exactly why inheritance
    /// matters: the dark case evaluates the (possibly inherited) style
    /// *with dark context*, so its variant scopes under
    /// `[data-color-scheme="dark"]`.
    pub fn resolve_inline_code_style(&self) -> Option<ScopedStyle> {
        let slots = [
            (ColorScheme::Unspecified, &self.base.inline_code_style),
            (ColorScheme::Light, &self.light_only.inline_code_style),
            (ColorScheme::Dark, &self.dark_only.inline_code_style),
        ];
        if slots.iter().all(|(_, style)| style.is_none()) {
            return None;
        }

        // The scheme-agnostic evaluation is the baseline the scheme
        // cases diff against; a scheme contributes only what it changes.
        let neutral = StyledContent::new();
        let base_properties = match &self.base.inline_code_style {
            Some(style) => {
                let environment =
                    EnvironmentConditions::with_color_scheme(ColorScheme::Unspecified);
                style
                    .apply(neutral.clone(), &environment)
                    .into_properties()
            }
            None => neutral.properties().clone(),
        };

        let mut cases = Vec::new();
        if !base_properties.is_empty() {
            cases.push(ExpansionCase {
                label: ColorScheme::Unspecified.label().to_string(),
                scope: CaseScope::Base,
                properties: base_properties.clone(),
            });
        }
        for (scheme, style) in [
            (ColorScheme::Light, &self.light_only.inline_code_style),
            (ColorScheme::Dark, &self.dark_only.inline_code_style),
        ] {
            let Some(style) = style else { continue };
            let environment = EnvironmentConditions::with_color_scheme(scheme);
            let result = style.apply(neutral.clone(), &environment);
            let contributed = result.properties().difference(&base_properties);
            if contributed.is_empty() {
                continue;
            }
            cases.push(ExpansionCase {
                label: scheme.label().to_string(),
                scope: CaseScope::SchemeAncestor(scheme),
                properties: contributed,
            });
        }
        Some(assemble(FAMILY_THEME, cases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlateTheme;

    impl Theme for SlateTheme {
        fn id(&self) -> String {
            "slate".to_string()
        }

        fn configuration(&self, environment: &EnvironmentConditions) -> ThemeConfiguration {
            let config = ThemeConfiguration::new()
                .with_accent(Color::hex("#0178d4"))
                .with_inline_code_style(Arc::new(
                    |content: StyledContent, env: &EnvironmentConditions| {
                        if env.color_scheme == ColorScheme::Dark {
                            content.background(Color::hex("#1e1e1e"))
                        } else {
                            content.background(Color::hex("#f5f5f5"))
                        }
                    },
                ));
            match environment.color_scheme {
                ColorScheme::Dark => config.with_foreground(Color::hex("#e0e0e0")),
                _ => config.with_foreground(Color::hex("#1e1e1e")),
            }
        }
    }

    struct BaseOnlyStyleTheme;

    impl Theme for BaseOnlyStyleTheme {
        fn id(&self) -> String {
            "base-only".to_string()
        }

        fn configuration(&self, environment: &EnvironmentConditions) -> ThemeConfiguration {
            // The style is declared only on the scheme-agnostic
            // configuration; light/dark declare nothing for it.
            if environment.color_scheme == ColorScheme::Unspecified {
                ThemeConfiguration::new().with_inline_code_style(Arc::new(
                    |content: StyledContent, env: &EnvironmentConditions| {
                        match env.color_scheme {
                            ColorScheme::Dark => content.color(Color::white()),
                            _ => content.color(Color::black()),
                        }
                    },
                ))
            } else {
                ThemeConfiguration::new()
            }
        }
    }

    #[test]
    fn style_fields_inherit_from_base() {
        let resolved = ResolvedTheme::resolve(&BaseOnlyStyleTheme);
        assert!(resolved.dark_only().inline_code_style.is_some());
        assert!(resolved.light_only().inline_code_style.is_some());
    }

    #[test]
    fn scalar_fields_do_not_inherit() {
        // Resolution back-fills only the style-typed field; a scheme
        // configuration's scalars are exactly what it declared.
        let resolved = ResolvedTheme::resolve(&BaseOnlyStyleTheme);
        assert!(resolved.dark_only().accent.is_none());
        assert!(resolved.dark_only().foreground.is_none());

        let slate = ResolvedTheme::resolve(&SlateTheme);
        assert_ne!(slate.dark_only().foreground, slate.base().foreground);
    }

    #[test]
    fn inherited_style_still_emits_a_dark_variant() {
        let resolved = ResolvedTheme::resolve(&BaseOnlyStyleTheme);
        let scoped = resolved.resolve_inline_code_style().unwrap();
        let dark_variant = scoped
            .variants()
            .iter()
            .find(|v| v.selector.to_string().contains("data-color-scheme=\"dark\""));
        assert!(dark_variant.is_some(), "dark variant must be emitted");
    }

    #[test]
    fn merged_configuration_prefers_scheme_values() {
        let resolved = ResolvedTheme::resolve(&SlateTheme);
        let dark = resolved.configuration_for(ColorScheme::Dark);
        assert_eq!(dark.foreground, Some(Color::hex("#e0e0e0")));
        assert_eq!(dark.accent, Some(Color::hex("#0178d4")));
    }
}
