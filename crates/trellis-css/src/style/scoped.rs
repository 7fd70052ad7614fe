//! Variant expansion: turning a style value into a [`ScopedStyle`] — a
//! content-addressed base class plus the (selector, media features,
//! properties) variants that describe the style across every reachable
//! environment case.
//!
//! ## Content addressing
//!
//! The base class is derived from a versioned canonical serialization of
//! the expanded bundle: the ordered list of `(case label, rendered
//! property set)` pairs. The serialization is hashed with FNV-1a 64
//! (fixed offset basis, so the hash is stable across builds and
//! processes), rendered as lowercase hex truncated to ten characters,
//! and namespaced by effect family. Behaviorally equivalent styles
//! therefore converge on the same class; structurally different styles
//! diverge; nothing about closure identity or runtime type names ever
//! enters the hash.
//!
//! Re-running expansion on an equal style value is guaranteed to produce
//! a bit-identical base class and an equal variant list, which is what
//! makes generator-stage deduplication sound.

use crate::environment::{ColorScheme, EnvironmentConditions, MediaFeature};
use crate::property::PropertySet;
use crate::ruleset::Ruleset;
use crate::selector::Selector;
use crate::style::content::StyledContent;
use crate::style::Style;

/// Class prefix for environment effects (color scheme, size class,
/// preference keyed).
pub(crate) const FAMILY_ENVIRONMENT: &str = "ee";
/// Class prefix for identity effects (data-attribute keyed).
pub(crate) const FAMILY_IDENTITY: &str = "ie";
/// Class prefix for phase-based styles.
pub(crate) const FAMILY_PHASE: &str = "ps";
/// Class prefix for theme-owned styles.
pub(crate) const FAMILY_THEME: &str = "te";

/// Truncated length of the rendered hash, in hex characters.
const CLASS_HASH_LEN: usize = 10;

/// Version tag of the canonical serialization format.
const CANONICAL_VERSION: &str = "v1";

/// FNV-1a, 64-bit, standard parameters.
///
/// Chosen over the standard library hasher because the class names it
/// feeds must be identical across builds, processes and Rust versions.
pub(crate) fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// One (selector, media features, properties) triple produced by
/// expanding a style across a single environment or phase case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedStyleVariant {
    pub selector: Selector,
    pub media_features: Vec<MediaFeature>,
    pub properties: PropertySet,
}

impl ScopedStyleVariant {
    /// The ruleset this variant renders as (before media wrapping).
    pub fn ruleset(&self) -> Ruleset {
        Ruleset::new(self.selector.clone(), &self.properties)
    }
}

/// A style fully resolved across its environment domain: one stable base
/// class plus the ordered variant list.
///
/// A `ScopedStyle` is produced once per distinct style value, registered
/// in the build's [`StyleRegistry`](crate::style::registry::StyleRegistry)
/// under its base class, and referenced from every element that uses the
/// style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedStyle {
    base_class: String,
    variants: Vec<ScopedStyleVariant>,
}

impl ScopedStyle {
    /// The content-addressed class identifying this bundle.
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    /// The variants, in fixed expansion order.
    pub fn variants(&self) -> &[ScopedStyleVariant] {
        &self.variants
    }

    /// `true` when no case contributed any properties; such a style
    /// contributes nothing to output and is not an error.
    pub fn is_empty(&self) -> bool {
        self.variants.iter().all(|v| v.properties.is_empty())
    }
}

/// How a case's variant is scoped relative to the base class.
#[derive(Clone, Debug)]
pub(crate) enum CaseScope {
    /// The base class alone.
    Base,
    /// The base class restricted by media features.
    Media(Vec<MediaFeature>),
    /// The base class under a scheme-toggling root ancestor:
    /// `[data-color-scheme="dark"] .class`.
    SchemeAncestor(ColorScheme),
    /// The base class with a boolean data attribute: `.class[data-x]`.
    DataAttribute(String),
    /// The base class with a pseudo-class suffix: `.class:hover`.
    Pseudo(&'static str),
    /// The base class on a host element exposing native open state:
    /// `.class[open]`.
    OpenAttribute,
}

/// One case of an expansion: a stable label (part of the canonical
/// serialization), the scope its variant gets, and what it contributes.
#[derive(Clone, Debug)]
pub(crate) struct ExpansionCase {
    pub label: String,
    pub scope: CaseScope,
    pub properties: PropertySet,
}

/// Builds the [`ScopedStyle`] for a list of expansion cases.
///
/// The base class is computed first from all cases, then each case's
/// selector is constructed around it. Callers decide which cases to
/// include: environment expansions skip empty cases, phase expansions
/// keep every phase.
pub(crate) fn assemble(family: &'static str, cases: Vec<ExpansionCase>) -> ScopedStyle {
    let mut canonical = String::new();
    canonical.push_str(CANONICAL_VERSION);
    canonical.push('\n');
    canonical.push_str(family);
    for case in &cases {
        canonical.push('\n');
        canonical.push_str(&case.label);
        canonical.push('|');
        let mut first = true;
        for property in case.properties.iter() {
            if !first {
                canonical.push_str("; ");
            }
            canonical.push_str(&property.description());
            first = false;
        }
    }

    let hash = fnv1a_64(canonical.as_bytes());
    let hex = format!("{hash:016x}");
    let base_class = format!("{family}-{}", &hex[..CLASS_HASH_LEN]);

    let variants = cases
        .into_iter()
        .map(|case| {
            let class = Selector::class(base_class.clone());
            let (selector, media_features) = match case.scope {
                CaseScope::Base => (class, Vec::new()),
                CaseScope::Media(features) => (class, features),
                CaseScope::SchemeAncestor(scheme) => {
                    let value = scheme
                        .attribute_value()
                        .expect("scheme ancestor requires light or dark");
                    (
                        class.when_descendant_of(Selector::attribute_value(
                            "data-color-scheme",
                            value,
                        )),
                        Vec::new(),
                    )
                }
                CaseScope::DataAttribute(name) => {
                    (class.with(Selector::attribute(name)), Vec::new())
                }
                CaseScope::Pseudo(name) => (class.with(Selector::pseudo_class(name)), Vec::new()),
                CaseScope::OpenAttribute => (class.with(Selector::attribute("open")), Vec::new()),
            };
            ScopedStyleVariant {
                selector,
                media_features,
                properties: case.properties,
            }
        })
        .collect();

    ScopedStyle {
        base_class,
        variants,
    }
}

/// Expands a color-scheme-responsive [`Style`] into a [`ScopedStyle`].
///
/// The style function is evaluated over exactly the reachable domain:
/// the scheme-agnostic case plus light and dark. The scheme-agnostic
/// result, diffed against untouched content, becomes the base variant;
/// each scheme's result is then diffed against that scheme-agnostic
/// result, so a scheme case contributes only what it changes. Cases
/// that contribute nothing are skipped; a style whose every case is
/// empty yields a zero-variant bundle, which is valid and simply
/// renders to nothing.
pub fn resolve_style(style: &dyn Style) -> ScopedStyle {
    let neutral = StyledContent::new();
    let base_result = style.apply(
        neutral.clone(),
        &EnvironmentConditions::with_color_scheme(ColorScheme::Unspecified),
    );
    let base_contributed = base_result.properties().difference(neutral.properties());

    let mut cases = Vec::new();
    if !base_contributed.is_empty() {
        cases.push(ExpansionCase {
            label: ColorScheme::Unspecified.label().to_string(),
            scope: CaseScope::Base,
            properties: base_contributed,
        });
    }
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let environment = EnvironmentConditions::with_color_scheme(scheme);
        let result = style.apply(neutral.clone(), &environment);
        let contributed = result.properties().difference(base_result.properties());
        if contributed.is_empty() {
            continue;
        }
        cases.push(ExpansionCase {
            label: scheme.label().to_string(),
            scope: CaseScope::SchemeAncestor(scheme),
            properties: contributed,
        });
    }
    assemble(FAMILY_ENVIRONMENT, cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentConditions;
    use crate::types::Color;

    #[test]
    fn fnv1a_reference_vectors() {
        // Published FNV-1a 64 test vectors.
        assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_64(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn expansion_is_idempotent() {
        let style = |content: StyledContent, env: &EnvironmentConditions| {
            if env.color_scheme == ColorScheme::Dark {
                content.color(Color::white())
            } else {
                content.color(Color::black())
            }
        };
        let first = resolve_style(&style);
        let second = resolve_style(&style);
        assert_eq!(first.base_class(), second.base_class());
        assert_eq!(first.variants(), second.variants());
    }

    #[test]
    fn distinct_styles_get_distinct_classes() {
        let red = |content: StyledContent, _: &EnvironmentConditions| {
            content.color(Color::rgb(255, 0, 0))
        };
        let blue = |content: StyledContent, _: &EnvironmentConditions| {
            content.color(Color::rgb(0, 0, 255))
        };
        assert_ne!(
            resolve_style(&red).base_class(),
            resolve_style(&blue).base_class()
        );
    }

    #[test]
    fn scheme_variants_scope_under_the_toggle_attribute() {
        let style = |content: StyledContent, env: &EnvironmentConditions| {
            match env.color_scheme {
                ColorScheme::Dark => content.color(Color::white()),
                _ => content.color(Color::black()),
            }
        };
        let scoped = resolve_style(&style);
        let class = scoped.base_class().to_string();
        let selectors: Vec<String> = scoped
            .variants()
            .iter()
            .map(|v| v.selector.to_string())
            .collect();
        // Light matches the scheme-agnostic result and is skipped; dark
        // differs and scopes under the toggle attribute.
        assert_eq!(
            selectors,
            vec![
                format!(".{class}"),
                format!("[data-color-scheme=\"dark\"] .{class}"),
            ]
        );
    }

    #[test]
    fn schemes_that_match_the_base_result_are_skipped() {
        let uniform =
            |content: StyledContent, _: &EnvironmentConditions| content.color(Color::black());
        let scoped = resolve_style(&uniform);
        assert_eq!(scoped.variants().len(), 1);
    }

    #[test]
    fn style_contributing_nothing_yields_zero_variants() {
        let inert = |content: StyledContent, _: &EnvironmentConditions| content;
        let scoped = resolve_style(&inert);
        assert!(scoped.variants().is_empty());
        assert!(scoped.is_empty());
    }
}
