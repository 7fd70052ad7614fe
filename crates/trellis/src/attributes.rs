//! The mutable attribute record every renderable element carries.
//!
//! This is the style engine's only interface into the element layer:
//! resolved styles register their base class here, and inline styles
//! land in the property set. Everything renders deterministically —
//! classes and data attributes in insertion order, inline styles in
//! property-set order.

use trellis_css::{Property, PropertySet, ScopedStyle};

/// Escapes text for use inside a double-quoted attribute value.
pub(crate) fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes element text content.
pub(crate) fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attributes attached to one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    id: Option<String>,
    classes: Vec<String>,
    styles: PropertySet,
    data: Vec<(String, String)>,
    events: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Adds a class, keeping the list duplicate-free in insertion order.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.iter().any(|existing| *existing == class) {
            self.classes.push(class);
        }
    }

    /// Registers a resolved style bundle by adding its base class.
    pub fn add_scoped_style(&mut self, scoped: &ScopedStyle) {
        self.add_class(scoped.base_class());
    }

    /// Adds an inline style declaration.
    pub fn add_style(&mut self, property: Property) {
        self.styles.add(property);
    }

    /// Registers a whole property set as inline style, overriding on
    /// name clashes.
    pub fn add_styles(&mut self, properties: &PropertySet) {
        self.styles.merge(properties);
    }

    /// Sets a `data-*` attribute. `name` is the part after `data-`.
    pub fn set_data(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.data.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.data.push((name, value)),
        }
    }

    /// Binds an event handler attribute, e.g. `("click", "doThing()")`.
    pub fn on(&mut self, event: impl Into<String>, action: impl Into<String>) {
        self.events.push((event.into(), action.into()));
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn styles(&self) -> &PropertySet {
        &self.styles
    }

    /// Renders the attribute string, leading space included when any
    /// attribute is present.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            out.push_str(&format!(" id=\"{}\"", escape_attribute(id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                escape_attribute(&self.classes.join(" "))
            ));
        }
        if !self.styles.is_empty() {
            let declarations: Vec<String> = self
                .styles
                .iter()
                .map(|property| property.to_string())
                .collect();
            out.push_str(&format!(
                " style=\"{}\"",
                escape_attribute(&declarations.join("; "))
            ));
        }
        for (name, value) in &self.data {
            out.push_str(&format!(" data-{name}=\"{}\"", escape_attribute(value)));
        }
        for (event, action) in &self.events {
            out.push_str(&format!(" on{event}=\"{}\"", escape_attribute(action)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_css::types::Color;

    #[test]
    fn classes_stay_unique_in_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.add_class("b");
        attributes.add_class("a");
        attributes.add_class("b");
        assert_eq!(attributes.render(), " class=\"b a\"");
    }

    #[test]
    fn inline_styles_render_in_canonical_order() {
        let mut attributes = Attributes::new();
        attributes.add_style(Property::Width(trellis_css::types::Length::px(10.0)));
        attributes.add_style(Property::Color(Color::black()));
        assert_eq!(
            attributes.render(),
            " style=\"color: #000000; width: 10px\""
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut attributes = Attributes::new();
        attributes.set_data("label", "a \"quoted\" <value>");
        assert_eq!(
            attributes.render(),
            " data-label=\"a &quot;quoted&quot; &lt;value&gt;\""
        );
    }
}
