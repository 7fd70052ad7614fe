use std::sync::Arc;

use trellis_css::style::StyledContent;
use trellis_css::types::{Color, Font, FontSource, Length};
use trellis_css::{
    ColorScheme, EnvironmentConditions, HorizontalSizeClass, ResolvedTheme, TextRole, Theme,
    ThemeConfiguration, ThemeGenerator,
};

/// A theme that declares its inline code style only on the
/// scheme-agnostic configuration. The dark rule must still be emitted.
struct QuietTheme;

impl Theme for QuietTheme {
    fn id(&self) -> String {
        "quiet".to_string()
    }

    fn configuration(&self, environment: &EnvironmentConditions) -> ThemeConfiguration {
        if environment.color_scheme == ColorScheme::Unspecified {
            ThemeConfiguration::new().with_inline_code_style(Arc::new(
                |content: StyledContent, env: &EnvironmentConditions| match env.color_scheme {
                    ColorScheme::Dark => content.background(Color::hex("#202020")),
                    _ => content.background(Color::hex("#eeeeee")),
                },
            ))
        } else {
            ThemeConfiguration::new()
        }
    }
}

#[test]
fn inherited_style_fields_are_nonnull_per_scheme() {
    let resolved = ResolvedTheme::resolve(&QuietTheme);
    assert!(resolved.base().inline_code_style.is_some());
    assert!(resolved.light_only().inline_code_style.is_some());
    assert!(resolved.dark_only().inline_code_style.is_some());
}

#[test]
fn inherited_style_emits_a_dark_scoped_rule() {
    let mut themes = ThemeGenerator::new();
    themes.register(&QuietTheme);
    let css = themes.generate().unwrap();

    assert!(
        css.contains("[data-color-scheme=\"dark\"] .te-"),
        "dark variant of the inherited style must be emitted:\n{css}"
    );
    assert!(css.contains("background-color: #202020;"));
}

struct TypographyTheme;

impl Theme for TypographyTheme {
    fn id(&self) -> String {
        "typography".to_string()
    }

    fn configuration(&self, _: &EnvironmentConditions) -> ThemeConfiguration {
        ThemeConfiguration::new()
            .with_body_font(
                Font::named("Atkinson Hyperlegible")
                    .with_source(FontSource::new("/fonts/atkinson.woff2").with_format("woff2")),
            )
            .with_font_size(TextRole::Body, Length::rem(1.0))
            .with_font_size_at(TextRole::Body, HorizontalSizeClass::Compact, Length::rem(0.9))
            .with_max_content_width(Length::px(720.0))
    }
}

#[test]
fn fonts_and_sizes_emit_faces_variables_and_overrides() {
    let mut themes = ThemeGenerator::new();
    themes.register(&TypographyTheme);
    let css = themes.generate().unwrap();

    assert!(css.contains("@font-face {"));
    assert!(css.contains("src: url(\"/fonts/atkinson.woff2\") format(\"woff2\");"));
    assert!(css.contains("--font-size-body: 1rem;"));
    assert!(css.contains("--theme-content-width: 720px;"));

    // The compact override lands inside the compact breakpoint block.
    assert!(css.contains("@media (max-width: 767px) {"));
    assert!(css.contains("--font-size-body: 0.9rem;"));
    assert!(themes.warnings().is_empty());
}

struct BrokenFontTheme;

impl Theme for BrokenFontTheme {
    fn id(&self) -> String {
        "broken-font".to_string()
    }

    fn configuration(&self, _: &EnvironmentConditions) -> ThemeConfiguration {
        ThemeConfiguration::new()
            .with_accent(Color::hex("#ff8800"))
            .with_body_font(Font::named("Ghost").with_source(FontSource::new("  ")))
    }
}

#[test]
fn unresolvable_font_sources_degrade_with_a_warning() {
    let mut themes = ThemeGenerator::new();
    themes.register(&BrokenFontTheme);
    let css = themes.generate().unwrap();

    // The build continues without the broken face but keeps the rest.
    assert!(!css.contains("@font-face"));
    assert!(css.contains("--theme-accent: #ff8800;"));
    assert_eq!(themes.warnings().len(), 1);
    assert!(themes.warnings()[0].contains("Ghost"));
}

struct NamelessFontTheme;

impl Theme for NamelessFontTheme {
    fn id(&self) -> String {
        "nameless-font".to_string()
    }

    fn configuration(&self, _: &EnvironmentConditions) -> ThemeConfiguration {
        // Sources without a family name cannot serialize into a face
        // block at all; this is a configuration bug, not a fallback.
        let mut font = Font::system_sans();
        font.sources.push(FontSource::new("/fonts/anon.woff2"));
        ThemeConfiguration::new().with_body_font(font)
    }
}

#[test]
fn sourced_font_without_a_family_fails_the_build() {
    let mut themes = ThemeGenerator::new();
    themes.register(&NamelessFontTheme);
    assert!(themes.generate().is_err());
}
