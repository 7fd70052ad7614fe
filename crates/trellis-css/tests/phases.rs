use trellis_css::style::{resolve_button, ButtonPhase, StyledContent};
use trellis_css::types::{Color, TextDecorationLine};
use trellis_css::StyleGenerator;

#[test]
fn properties_never_leak_between_phases() {
    // Color is set only in the disabled phase; no other variant may
    // carry it.
    let style = |content: StyledContent, phase: ButtonPhase| match phase {
        ButtonPhase::Disabled => content.color(Color::rgb(128, 128, 128)),
        _ => content,
    };

    let scoped = resolve_button(&style);
    assert_eq!(scoped.variants().len(), 4);
    for variant in scoped.variants() {
        let is_disabled = variant.selector.to_string().ends_with(":disabled");
        assert_eq!(
            variant.properties.get("color").is_some(),
            is_disabled,
            "color must appear in the disabled variant and nowhere else"
        );
    }
}

#[test]
fn button_style_renders_one_block_per_contributing_phase() {
    let style = |content: StyledContent, phase: ButtonPhase| match phase {
        ButtonPhase::Initial => content.color(Color::rgb(0, 0, 255)),
        ButtonPhase::Hovered => content
            .color(Color::rgb(255, 0, 0))
            .text_decoration(TextDecorationLine::UNDERLINE),
        _ => content,
    };

    let mut generator = StyleGenerator::new();
    let class = generator
        .register_button_style(&style)
        .unwrap()
        .base_class()
        .to_string();

    let css = generator.generate();
    let blocks: Vec<&str> = css.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        format!(".{class} {{\n    color: #0000ff;\n}}")
    );
    assert_eq!(
        blocks[1],
        format!(
            ".{class}:hover {{\n    color: #ff0000;\n    text-decoration: underline;\n}}"
        )
    );
}
