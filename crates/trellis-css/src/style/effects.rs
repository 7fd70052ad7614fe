//! Environment and identity effects: style transformations keyed by a
//! single dimension (size class, a user preference, or a boolean data
//! attribute) rather than by color scheme.
//!
//! Each effect resolves to a [`ScopedStyle`] by enumerating its
//! dimension's finite domain, collecting what each domain value
//! contributes against a neutral baseline, and skipping values that
//! contribute nothing.

use crate::environment::{HorizontalSizeClass, MediaFeature};
use crate::style::content::StyledContent;
use crate::style::scoped::{
    assemble, CaseScope, ExpansionCase, ScopedStyle, FAMILY_ENVIRONMENT, FAMILY_IDENTITY,
};

/// A style transformation evaluated once per horizontal size class.
///
/// Each size class that contributes properties becomes one variant scoped
/// by that class's breakpoint media features.
pub struct SizeClassEffect<F>
where
    F: Fn(StyledContent, HorizontalSizeClass) -> StyledContent,
{
    body: F,
}

impl<F> SizeClassEffect<F>
where
    F: Fn(StyledContent, HorizontalSizeClass) -> StyledContent,
{
    pub fn new(body: F) -> Self {
        Self { body }
    }

    pub fn resolve(&self) -> ScopedStyle {
        let mut cases = Vec::new();
        for size_class in HorizontalSizeClass::ALL {
            let baseline = StyledContent::new();
            let result = (self.body)(baseline.clone(), size_class);
            let contributed = result.properties().difference(baseline.properties());
            if contributed.is_empty() {
                continue;
            }
            cases.push(ExpansionCase {
                label: size_class.label().to_string(),
                scope: CaseScope::Media(size_class.media_features()),
                properties: contributed,
            });
        }
        assemble(FAMILY_ENVIRONMENT, cases)
    }
}

/// The boolean user preferences an effect can key on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceDimension {
    ReducedMotion,
    MoreContrast,
    ReducedTransparency,
}

impl PreferenceDimension {
    fn label(self) -> &'static str {
        match self {
            PreferenceDimension::ReducedMotion => "reduced-motion",
            PreferenceDimension::MoreContrast => "more-contrast",
            PreferenceDimension::ReducedTransparency => "reduced-transparency",
        }
    }

    fn media_feature(self) -> MediaFeature {
        match self {
            PreferenceDimension::ReducedMotion => MediaFeature::PrefersReducedMotion,
            PreferenceDimension::MoreContrast => MediaFeature::PrefersMoreContrast,
            PreferenceDimension::ReducedTransparency => MediaFeature::PrefersReducedTransparency,
        }
    }
}

/// A style transformation keyed by one boolean user preference.
///
/// The `false` case scopes to the base class alone; the `true` case
/// scopes under the matching preference media feature.
pub struct PreferenceEffect<F>
where
    F: Fn(StyledContent, bool) -> StyledContent,
{
    dimension: PreferenceDimension,
    body: F,
}

impl<F> PreferenceEffect<F>
where
    F: Fn(StyledContent, bool) -> StyledContent,
{
    pub fn new(dimension: PreferenceDimension, body: F) -> Self {
        Self { dimension, body }
    }

    pub fn resolve(&self) -> ScopedStyle {
        let mut cases = Vec::new();
        for active in [false, true] {
            let baseline = StyledContent::new();
            let result = (self.body)(baseline.clone(), active);
            let contributed = result.properties().difference(baseline.properties());
            if contributed.is_empty() {
                continue;
            }
            let (label, scope) = if active {
                (
                    self.dimension.label().to_string(),
                    CaseScope::Media(vec![self.dimension.media_feature()]),
                )
            } else {
                ("default".to_string(), CaseScope::Base)
            };
            cases.push(ExpansionCase {
                label,
                scope,
                properties: contributed,
            });
        }
        assemble(FAMILY_ENVIRONMENT, cases)
    }
}

/// An identity effect: a style transformation keyed by the presence of a
/// boolean data attribute on the styled element itself.
///
/// The `true` case scopes as `.class[data-name]`, so flipping the
/// attribute at runtime toggles the styling.
pub struct AttributeEffect<F>
where
    F: Fn(StyledContent, bool) -> StyledContent,
{
    attribute: String,
    body: F,
}

impl<F> AttributeEffect<F>
where
    F: Fn(StyledContent, bool) -> StyledContent,
{
    /// `attribute` is the full attribute name, e.g. `data-active`.
    pub fn new(attribute: impl Into<String>, body: F) -> Self {
        Self {
            attribute: attribute.into(),
            body,
        }
    }

    pub fn resolve(&self) -> ScopedStyle {
        let mut cases = Vec::new();
        for active in [false, true] {
            let baseline = StyledContent::new();
            let result = (self.body)(baseline.clone(), active);
            let contributed = result.properties().difference(baseline.properties());
            if contributed.is_empty() {
                continue;
            }
            let (label, scope) = if active {
                (
                    self.attribute.clone(),
                    CaseScope::DataAttribute(self.attribute.clone()),
                )
            } else {
                ("default".to_string(), CaseScope::Base)
            };
            cases.push(ExpansionCase {
                label,
                scope,
                properties: contributed,
            });
        }
        assemble(FAMILY_IDENTITY, cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Length};

    #[test]
    fn size_class_effect_skips_noncontributing_classes() {
        let effect = SizeClassEffect::new(|content, size_class| {
            if size_class == HorizontalSizeClass::Compact {
                content.font_size(Length::rem(0.875))
            } else {
                content
            }
        });
        let scoped = effect.resolve();
        assert_eq!(scoped.variants().len(), 1);
        let variant = &scoped.variants()[0];
        assert_eq!(variant.media_features, vec![MediaFeature::MaxWidth(767)]);
    }

    #[test]
    fn identical_contributions_in_different_cases_stay_separate() {
        // Compact and expanded contribute the same properties; both
        // variants must survive because they scope different media.
        let effect = SizeClassEffect::new(|content, size_class| match size_class {
            HorizontalSizeClass::Regular => content,
            _ => content.padding(Length::px(8.0)),
        });
        let scoped = effect.resolve();
        assert_eq!(scoped.variants().len(), 2);
        assert_eq!(
            scoped.variants()[0].properties,
            scoped.variants()[1].properties
        );
        assert_ne!(
            scoped.variants()[0].media_features,
            scoped.variants()[1].media_features
        );
    }

    #[test]
    fn preference_effect_scopes_the_reduced_case() {
        let effect = PreferenceEffect::new(PreferenceDimension::ReducedMotion, |content, reduced| {
            if reduced {
                content.with(crate::property::Property::Custom {
                    name: "animation".into(),
                    value: "none".into(),
                })
            } else {
                content
            }
        });
        let scoped = effect.resolve();
        assert_eq!(scoped.variants().len(), 1);
        assert_eq!(
            scoped.variants()[0].media_features,
            vec![MediaFeature::PrefersReducedMotion]
        );
    }

    #[test]
    fn attribute_effect_uses_identity_namespace() {
        let effect = AttributeEffect::new("data-active", |content, active| {
            if active {
                content.background(Color::rgb(0, 0, 255))
            } else {
                content
            }
        });
        let scoped = effect.resolve();
        assert!(scoped.base_class().starts_with("ie-"));
        assert_eq!(
            scoped.variants()[0].selector.to_string(),
            format!(".{}[data-active]", scoped.base_class())
        );
    }
}
