use trellis_css::style::{PreferenceDimension, PreferenceEffect, SizeClassEffect, StyledContent};
use trellis_css::types::Length;
use trellis_css::{HorizontalSizeClass, MediaFeature, Property, StyleGenerator};

#[test]
fn size_classes_that_contribute_nothing_are_skipped() {
    let effect = SizeClassEffect::new(|content: StyledContent, size_class| {
        if size_class == HorizontalSizeClass::Compact {
            content.font_size(Length::rem(0.875))
        } else {
            content
        }
    });

    let scoped = effect.resolve();
    assert_eq!(scoped.variants().len(), 1);
    assert_eq!(
        scoped.variants()[0].media_features,
        vec![MediaFeature::MaxWidth(767)]
    );
}

#[test]
fn compact_variant_renders_inside_its_breakpoint_block() {
    let effect = SizeClassEffect::new(|content: StyledContent, size_class| {
        if size_class == HorizontalSizeClass::Compact {
            content.padding(Length::px(8.0))
        } else {
            content
        }
    });

    let mut generator = StyleGenerator::new();
    let class = generator
        .register_scoped(effect.resolve())
        .unwrap()
        .base_class()
        .to_string();

    let css = generator.generate();
    assert!(css.starts_with("@media (max-width: 767px) {"));
    assert!(css.contains(&format!(".{class}")));
    assert!(!css.contains("min-width"), "no other band may be scoped");
}

#[test]
fn reduced_motion_scopes_under_the_preference_feature() {
    let effect = PreferenceEffect::new(PreferenceDimension::ReducedMotion, |content, reduced| {
        if reduced {
            content.with(Property::Custom {
                name: "scroll-behavior".into(),
                value: "auto".into(),
            })
        } else {
            content.with(Property::Custom {
                name: "scroll-behavior".into(),
                value: "smooth".into(),
            })
        }
    });

    let scoped = effect.resolve();
    assert_eq!(scoped.variants().len(), 2);
    assert!(scoped.variants()[0].media_features.is_empty());
    assert_eq!(
        scoped.variants()[1].media_features,
        vec![MediaFeature::PrefersReducedMotion]
    );

    let mut generator = StyleGenerator::new();
    generator.register_scoped(scoped).unwrap();
    let css = generator.generate();
    assert!(css.contains("@media (prefers-reduced-motion: reduce) {"));
}
