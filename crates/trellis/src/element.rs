//! The renderable element abstraction.
//!
//! Elements form a homogeneous tree: every node is a boxed
//! [`Element`], children are plain ordered lists, and rendering is a
//! synchronous tree walk producing markup text.

use crate::attributes::Attributes;
use trellis_css::{Property, ScopedStyle};

/// A renderable piece of the content tree.
///
/// Object-safe so trees can hold mixed element kinds behind one box.
pub trait Element {
    /// This element's attribute record.
    fn attributes(&self) -> &Attributes;

    /// Mutable access for the styling interface.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Renders this element (and its subtree) to markup.
    fn render(&self) -> String;
}

/// Builder conveniences available on every element type.
pub trait ElementExt: Element + Sized {
    /// Applies a resolved style bundle by registering its base class.
    fn styled(mut self, scoped: &ScopedStyle) -> Self {
        self.attributes_mut().add_scoped_style(scoped);
        self
    }

    /// Adds a plain class.
    fn class(mut self, name: impl Into<String>) -> Self {
        self.attributes_mut().add_class(name);
        self
    }

    /// Sets the element id.
    fn id(mut self, id: impl Into<String>) -> Self {
        self.attributes_mut().set_id(id);
        self
    }

    /// Adds an inline style declaration.
    fn inline_style(mut self, property: Property) -> Self {
        self.attributes_mut().add_style(property);
        self
    }

    /// Sets a `data-*` attribute.
    fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().set_data(name, value);
        self
    }

    /// Binds an event handler attribute.
    fn on(mut self, event: impl Into<String>, action: impl Into<String>) -> Self {
        self.attributes_mut().on(event, action);
        self
    }
}

impl<T: Element + Sized> ElementExt for T {}

/// Renders an element with children: `<tag ...>children</tag>`.
pub(crate) fn render_tag(tag: &str, attributes: &Attributes, children: &[Box<dyn Element>]) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.render());
    out.push('>');
    for child in children {
        out.push_str(&child.render());
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Renders a void element: `<tag ...>`.
pub(crate) fn render_void_tag(tag: &str, attributes: &Attributes) -> String {
    format!("<{tag}{}>", attributes.render())
}
