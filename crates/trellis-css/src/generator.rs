//! Generator orchestration: collecting every registered style and theme,
//! rendering their variants, and concatenating the deduplicated
//! stylesheet.
//!
//! Deduplication compares fully rendered rule blocks, not class
//! identities, so two independently constructed but textually identical
//! blocks collapse to one. Output order is registration order throughout
//! — never the iteration order of an unordered structure — so repeated
//! builds over the same inputs emit byte-identical stylesheets.

use std::collections::HashSet;

use crate::environment::{
    ColorScheme, EnvironmentConditions, HorizontalSizeClass, MediaFeature,
};
use crate::error::CssError;
use crate::property::{Property, PropertySet};
use crate::ruleset::{MediaQuery, Ruleset};
use crate::selector::Selector;
use crate::style::phase::{ButtonStyle, DisclosureStyle, LinkStyle};
use crate::style::scoped::{resolve_style, ScopedStyle};
use crate::style::{
    resolve_button, resolve_disclosure, resolve_link, Style, StyleRegistry, StyledContent,
};
use crate::theme::{ResolvedTheme, Theme, ThemeConfiguration};
use crate::types::Font;

/// Joins rendered blocks with blank lines, dropping duplicates and
/// empties while preserving first-occurrence order.
fn join_deduplicated(blocks: Vec<String>) -> String {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        if seen.insert(block.clone()) {
            kept.push(block);
        }
    }
    kept.join("\n\n")
}

/// Renders a registry's variants into blocks.
///
/// Top-level rules come first in registration order; variants scoped by
/// media features are grouped so each distinct condition opens exactly
/// one `@media` block, ordered by first occurrence.
fn render_registry(registry: &StyleRegistry) -> Vec<String> {
    let mut plain = Vec::new();
    let mut groups: Vec<(Vec<MediaFeature>, Vec<Ruleset>)> = Vec::new();

    for scoped in registry.iter() {
        for variant in scoped.variants() {
            if variant.properties.is_empty() {
                continue;
            }
            if variant.media_features.is_empty() {
                plain.push(variant.ruleset().render());
            } else {
                match groups
                    .iter()
                    .position(|(features, _)| *features == variant.media_features)
                {
                    Some(slot) => groups[slot].1.push(variant.ruleset()),
                    None => groups.push((variant.media_features.clone(), vec![variant.ruleset()])),
                }
            }
        }
    }

    for (features, rulesets) in groups {
        plain.push(MediaQuery::new(features, rulesets).render());
    }
    plain
}

/// Collects every style used in a build and produces the style half of
/// the stylesheet.
#[derive(Debug, Default)]
pub struct StyleGenerator {
    registry: StyleRegistry,
}

impl StyleGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves and registers a color-scheme-responsive style.
    pub fn register_style(&mut self, style: &dyn Style) -> Result<&ScopedStyle, CssError> {
        self.registry.register(resolve_style(style))
    }

    /// Resolves and registers a button phase style.
    pub fn register_button_style(
        &mut self,
        style: &dyn ButtonStyle,
    ) -> Result<&ScopedStyle, CssError> {
        self.registry.register(resolve_button(style))
    }

    /// Resolves and registers a link phase style.
    pub fn register_link_style(&mut self, style: &dyn LinkStyle) -> Result<&ScopedStyle, CssError> {
        self.registry.register(resolve_link(style))
    }

    /// Resolves and registers a disclosure phase style.
    pub fn register_disclosure_style(
        &mut self,
        style: &dyn DisclosureStyle,
    ) -> Result<&ScopedStyle, CssError> {
        self.registry.register(resolve_disclosure(style))
    }

    /// Registers an already-resolved bundle (effects resolve themselves).
    pub fn register_scoped(&mut self, scoped: ScopedStyle) -> Result<&ScopedStyle, CssError> {
        self.registry.register(scoped)
    }

    /// The underlying registry, for base-class lookups.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Renders every registered style into deduplicated CSS text.
    pub fn generate(&self) -> String {
        join_deduplicated(self.blocks())
    }

    /// The rendered blocks before joining; [`build_stylesheet`] merges
    /// these with the theme half so deduplication can run across both.
    fn blocks(&self) -> Vec<String> {
        render_registry(&self.registry)
    }
}

/// The emitted name of a theme variable.
fn theme_variable(name: &str, value: String) -> Property {
    Property::Variable {
        name: format!("theme-{name}"),
        value,
    }
}

/// The unscoped custom properties a configuration contributes.
fn custom_properties(config: &ThemeConfiguration) -> PropertySet {
    let mut set = PropertySet::new();
    if let Some(color) = config.accent {
        set.add(theme_variable("accent", color.to_css()));
    }
    if let Some(color) = config.foreground {
        set.add(theme_variable("foreground", color.to_css()));
    }
    if let Some(color) = config.background {
        set.add(theme_variable("background", color.to_css()));
    }
    if let Some(color) = config.link {
        set.add(theme_variable("link", color.to_css()));
    }
    if let Some(color) = config.border {
        set.add(theme_variable("border", color.to_css()));
    }
    if let Some(font) = &config.body_font {
        set.add(theme_variable("font-body", font.stack()));
    }
    if let Some(font) = &config.code_font {
        set.add(theme_variable("font-code", font.stack()));
    }
    if let Some(spacing) = config.line_spacing {
        set.add(theme_variable("line-spacing", crate::types::format_float(spacing)));
    }
    if let Some(weight) = config.body_weight {
        set.add(theme_variable("body-weight", weight.to_string()));
    }
    if let Some(weight) = config.heading_weight {
        set.add(theme_variable("heading-weight", weight.to_string()));
    }
    if let Some(width) = config.max_content_width {
        set.add(theme_variable("content-width", width.to_string()));
    }
    for (role, sizes) in &config.font_sizes {
        if let Some(size) = sizes.base {
            set.add(Property::Variable {
                name: format!("font-size-{}", role.variable_suffix()),
                value: size.to_string(),
            });
        }
    }
    set
}

/// The size-class overrides a configuration contributes, as
/// (size class, variables) pairs.
fn size_class_overrides(
    config: &ThemeConfiguration,
) -> Vec<(HorizontalSizeClass, PropertySet)> {
    let mut compact = PropertySet::new();
    let mut expanded = PropertySet::new();
    for (role, sizes) in &config.font_sizes {
        if let Some(size) = sizes.compact {
            compact.add(Property::Variable {
                name: format!("font-size-{}", role.variable_suffix()),
                value: size.to_string(),
            });
        }
        if let Some(size) = sizes.expanded {
            expanded.add(Property::Variable {
                name: format!("font-size-{}", role.variable_suffix()),
                value: size.to_string(),
            });
        }
    }
    let mut overrides = Vec::new();
    if !compact.is_empty() {
        overrides.push((HorizontalSizeClass::Compact, compact));
    }
    if !expanded.is_empty() {
        overrides.push((HorizontalSizeClass::Expanded, expanded));
    }
    overrides
}

/// Renders the `@font-face` blocks for one font, skipping sources that
/// fail the resolvability check.
///
/// A font that has sources but no family name cannot serialize into a
/// valid face block at all; that is a configuration bug and fails the
/// build.
fn render_font_faces(font: &Font, warnings: &mut Vec<String>) -> Result<Vec<String>, CssError> {
    if !font.sources.is_empty() && font.family.trim().is_empty() {
        return Err(CssError::Serialization {
            what: "@font-face".to_string(),
            detail: "font has sources but no family name".to_string(),
        });
    }
    let mut blocks = Vec::new();
    for source in &font.sources {
        if source.path.trim().is_empty() {
            let warning = format!(
                "font {:?} has an unresolvable source; omitting its @font-face block",
                font.family
            );
            log::warn!("{warning}");
            warnings.push(warning);
            continue;
        }
        let mut block = String::new();
        block.push_str("@font-face {\n");
        block.push_str(&format!("    font-family: \"{}\";\n", font.family));
        match &source.format {
            Some(format) => block.push_str(&format!(
                "    src: url(\"{}\") format(\"{}\");\n",
                source.path, format
            )),
            None => block.push_str(&format!("    src: url(\"{}\");\n", source.path)),
        }
        block.push_str(&format!("    font-weight: {};\n", source.weight));
        block.push_str(&format!("    font-style: {};\n", source.style));
        block.push('}');
        blocks.push(block);
    }
    Ok(blocks)
}

/// The selector scoping a theme's variables: `[data-theme="id"]`,
/// optionally narrowed by the scheme toggle attribute.
fn theme_selector(id: &str, scheme: ColorScheme) -> Selector {
    let base = Selector::attribute_value("data-theme", id);
    match scheme.attribute_value() {
        Some(value) => base.with(Selector::attribute_value("data-color-scheme", value)),
        None => base,
    }
}

/// Collects every registered theme and produces the theme half of the
/// stylesheet: font faces, custom-property blocks, and the expanded
/// style-typed fields.
#[derive(Default)]
pub struct ThemeGenerator {
    themes: Vec<ResolvedTheme>,
    warnings: Vec<String>,
}

impl ThemeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves and registers a theme. Re-registering an id already seen
    /// is a no-op.
    pub fn register(&mut self, theme: &dyn Theme) -> &ResolvedTheme {
        let resolved = ResolvedTheme::resolve(theme);
        if let Some(position) = self.themes.iter().position(|t| t.id() == resolved.id()) {
            return &self.themes[position];
        }
        self.themes.push(resolved);
        self.themes.last().expect("just pushed")
    }

    /// The resolved themes, in registration order.
    pub fn themes(&self) -> &[ResolvedTheme] {
        &self.themes
    }

    /// Missing-resource warnings recorded during generation.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Renders every registered theme into deduplicated CSS text.
    ///
    /// Warnings reflect the most recent generation run.
    pub fn generate(&mut self) -> Result<String, CssError> {
        Ok(join_deduplicated(self.blocks()?))
    }

    /// The rendered blocks before joining.
    fn blocks(&mut self) -> Result<Vec<String>, CssError> {
        self.warnings.clear();
        let mut blocks = Vec::new();
        for theme in &self.themes {
            render_theme(theme, &mut blocks, &mut self.warnings)?;
        }
        Ok(blocks)
    }

    /// Renders every theme locked to one scheme: base and scheme values
    /// merged, no scheme-toggle scoping on the variable blocks.
    pub fn render_for_scheme(&mut self, scheme: ColorScheme) -> Result<String, CssError> {
        self.warnings.clear();
        let mut blocks = Vec::new();
        for theme in &self.themes {
            let config = theme.configuration_for(scheme);
            for font in [&config.body_font, &config.code_font].into_iter().flatten() {
                blocks.extend(render_font_faces(font, &mut self.warnings)?);
            }
            let vars = custom_properties(&config);
            blocks.push(
                Ruleset::new(theme_selector(theme.id(), ColorScheme::Unspecified), &vars).render(),
            );
            for (size_class, overrides) in size_class_overrides(&config) {
                let ruleset = Ruleset::new(
                    theme_selector(theme.id(), ColorScheme::Unspecified),
                    &overrides,
                );
                blocks
                    .push(MediaQuery::new(size_class.media_features(), vec![ruleset]).render());
            }
            // The scheme-locked rule keeps the content-addressed class
            // from the full expansion so element markup matches.
            if let Some(scoped) = theme.resolve_inline_code_style() {
                if let Some(style) = &config.inline_code_style {
                    let environment = EnvironmentConditions::with_color_scheme(scheme);
                    let content = style.apply(StyledContent::new(), &environment);
                    let ruleset =
                        Ruleset::new(Selector::class(scoped.base_class()), content.properties());
                    blocks.push(ruleset.render());
                }
            }
        }
        Ok(join_deduplicated(blocks))
    }
}

/// Renders one theme's blocks: font faces, variable blocks, size-class
/// overrides, and the expanded style-typed field.
fn render_theme(
    theme: &ResolvedTheme,
    blocks: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Result<(), CssError> {
    // Font faces come from every scheme's fonts. A font repeated across
    // schemes is rendered (and, when broken, warned about) once.
    let mut fonts: Vec<&Font> = Vec::new();
    for config in [theme.base(), theme.light_only(), theme.dark_only()] {
        for font in [&config.body_font, &config.code_font].into_iter().flatten() {
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
    }
    for font in fonts {
        blocks.extend(render_font_faces(font, warnings)?);
    }

    // Scheme-agnostic variables.
    let base_vars = custom_properties(theme.base());
    blocks.push(
        Ruleset::new(theme_selector(theme.id(), ColorScheme::Unspecified), &base_vars).render(),
    );

    // Per-scheme variables: only what differs from the base block.
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let config = match scheme {
            ColorScheme::Light => theme.light_only(),
            _ => theme.dark_only(),
        };
        let vars = custom_properties(config).difference(&base_vars);
        blocks.push(Ruleset::new(theme_selector(theme.id(), scheme), &vars).render());
    }

    // Size-class overrides for the base configuration.
    for (size_class, vars) in size_class_overrides(theme.base()) {
        let ruleset = Ruleset::new(theme_selector(theme.id(), ColorScheme::Unspecified), &vars);
        blocks.push(MediaQuery::new(size_class.media_features(), vec![ruleset]).render());
    }

    // The style-typed field, expanded with scheme context.
    if let Some(scoped) = theme.resolve_inline_code_style() {
        for variant in scoped.variants() {
            if variant.media_features.is_empty() {
                blocks.push(variant.ruleset().render());
            } else {
                blocks.push(
                    MediaQuery::new(variant.media_features.clone(), vec![variant.ruleset()])
                        .render(),
                );
            }
        }
    }
    Ok(())
}

/// The complete stylesheet for a build: styles first, then themes, with
/// one more deduplication pass across the two halves.
pub fn build_stylesheet(
    styles: &StyleGenerator,
    themes: &mut ThemeGenerator,
) -> Result<String, CssError> {
    let mut blocks = styles.blocks();
    blocks.extend(themes.blocks()?);
    Ok(join_deduplicated(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentConditions;
    use crate::style::StyledContent;
    use crate::types::Color;

    #[test]
    fn shared_media_conditions_open_one_block() {
        let mut generator = StyleGenerator::new();
        let narrow_a = crate::style::SizeClassEffect::new(|content: StyledContent, size| {
            if size == HorizontalSizeClass::Compact {
                content.padding(crate::types::Length::px(4.0))
            } else {
                content
            }
        });
        let narrow_b = crate::style::SizeClassEffect::new(|content: StyledContent, size| {
            if size == HorizontalSizeClass::Compact {
                content.padding(crate::types::Length::px(8.0))
            } else {
                content
            }
        });
        generator.register_scoped(narrow_a.resolve()).unwrap();
        generator.register_scoped(narrow_b.resolve()).unwrap();

        let css = generator.generate();
        assert_eq!(css.matches("@media").count(), 1);
    }

    #[test]
    fn registering_the_same_style_twice_emits_once() {
        let mut generator = StyleGenerator::new();
        let style = |content: StyledContent, _: &EnvironmentConditions| {
            content.color(Color::rgb(255, 0, 0))
        };
        generator.register_style(&style).unwrap();
        generator.register_style(&style).unwrap();

        let css = generator.generate();
        assert_eq!(css.matches("color: #ff0000").count(), 1);
    }
}
