use trellis::{Button, Div, Element, ElementExt, Link};
use trellis_css::style::{ButtonPhase, StyledContent};
use trellis_css::types::{Color, Length, TextDecorationLine};
use trellis_css::{EnvironmentConditions, Property, StyleGenerator};

#[test]
fn applying_a_style_registers_its_class_on_the_markup() {
    let mut generator = StyleGenerator::new();
    let style = |content: StyledContent, phase: ButtonPhase| match phase {
        ButtonPhase::Initial => content.color(Color::rgb(0, 0, 255)),
        ButtonPhase::Hovered => content
            .color(Color::rgb(255, 0, 0))
            .text_decoration(TextDecorationLine::UNDERLINE),
        _ => content,
    };
    let scoped = generator.register_button_style(&style).unwrap().clone();

    let link = Link::new("/start").styled(&scoped).text("Start");
    let markup = link.render();
    assert!(markup.contains(&format!("class=\"{}\"", scoped.base_class())));

    let css = generator.generate();
    assert!(css.contains(&format!(".{} {{", scoped.base_class())));
    assert!(css.contains(&format!(".{}:hover {{", scoped.base_class())));
}

#[test]
fn the_same_style_reuses_one_class_across_elements() {
    let mut generator = StyleGenerator::new();
    let accent = |content: StyledContent, _: &EnvironmentConditions| {
        content.color(Color::hex("#0178d4"))
    };
    let first = generator.register_style(&accent).unwrap().clone();
    let second = generator.register_style(&accent).unwrap().clone();
    assert_eq!(first.base_class(), second.base_class());

    let page = Div::new()
        .child(Link::new("/a").styled(&first).text("A"))
        .child(Button::new().styled(&second).text("B"));
    let markup = page.render();
    assert_eq!(
        markup.matches(first.base_class()).count(),
        2,
        "both elements share the single class"
    );

    // One registration, one rule block.
    let css = generator.generate();
    assert_eq!(css.matches("color: #0178d4").count(), 1);
}

#[test]
fn inline_styles_render_on_the_element() {
    let div = Div::new()
        .inline_style(Property::MaxWidth(Length::px(720.0)))
        .text("copy");
    assert_eq!(
        div.render(),
        "<div style=\"max-width: 720px\">copy</div>"
    );
}

#[test]
fn data_attributes_drive_theme_switching_hooks() {
    let root = Div::new().data("theme", "ink").data("color-scheme", "dark");
    assert_eq!(
        root.render(),
        "<div data-theme=\"ink\" data-color-scheme=\"dark\"></div>"
    );
}
