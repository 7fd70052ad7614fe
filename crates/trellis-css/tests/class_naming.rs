use trellis_css::style::{resolve_button, resolve_style, ButtonPhase, StyledContent};
use trellis_css::types::Color;
use trellis_css::EnvironmentConditions;

#[test]
fn resolving_the_same_style_twice_yields_the_same_class() {
    let style = |content: StyledContent, _: &EnvironmentConditions| {
        content.color(Color::hex("#336699")).opacity(0.9)
    };

    let first = resolve_style(&style);
    let second = resolve_style(&style);
    assert_eq!(first.base_class(), second.base_class());
    assert_eq!(first.variants(), second.variants());
}

#[test]
fn behaviorally_identical_styles_share_a_class() {
    // Two separately written closures with the same observable behavior
    // converge on one class: addressing is by content, not identity.
    let a = |content: StyledContent, _: &EnvironmentConditions| content.color(Color::hex("#f00"));
    let b = |content: StyledContent, _: &EnvironmentConditions| {
        content.color(Color::rgb(255, 0, 0))
    };
    assert_eq!(resolve_style(&a).base_class(), resolve_style(&b).base_class());
}

#[test]
fn distinct_styles_never_collide() {
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
fn families_never_share_a_namespace() {
    // A plain style and a button style with the same single declaration
    // live in different namespaces, so the classes cannot collide even
    // if the hashes did.
    let environment_style =
        |content: StyledContent, _: &EnvironmentConditions| content.color(Color::black());
    let button_style = |content: StyledContent, phase: ButtonPhase| match phase {
        ButtonPhase::Initial => content.color(Color::black()),
        _ => content,
    };

    let environment_class = resolve_style(&environment_style).base_class().to_string();
    let button_class = resolve_button(&button_style).base_class().to_string();
    assert!(environment_class.starts_with("ee-"));
    assert!(button_class.starts_with("ps-"));
}
