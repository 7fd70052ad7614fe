//! Concrete element types.
//!
//! A deliberately small set: enough structure to compose real pages and
//! to host every styling surface the engine scopes against (links for
//! link phases, buttons for button phases, `<details>` for disclosure
//! phases).

use crate::attributes::{escape_attribute, escape_text, Attributes};
use crate::element::{render_tag, render_void_tag, Element};

/// A raw text node. Content is escaped at render time.
///
/// Text nodes carry an attribute record like every element, but it never
/// renders; styling a bare text node is a no-op by design of the markup.
#[derive(Default)]
pub struct Text {
    attributes: Attributes,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::new(),
            content: content.into(),
        }
    }
}

impl Element for Text {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        escape_text(&self.content)
    }
}

macro_rules! container_element {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Default)]
        pub struct $name {
            attributes: Attributes,
            children: Vec<Box<dyn Element>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Appends a child element.
            pub fn child(mut self, element: impl Element + 'static) -> Self {
                self.children.push(Box::new(element));
                self
            }

            /// Appends a text child.
            pub fn text(self, content: impl Into<String>) -> Self {
                self.child(Text::new(content))
            }
        }

        impl Element for $name {
            fn attributes(&self) -> &Attributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut Attributes {
                &mut self.attributes
            }

            fn render(&self) -> String {
                render_tag($tag, &self.attributes, &self.children)
            }
        }
    };
}

container_element!(
    /// A generic block container.
    Div,
    "div"
);
container_element!(
    /// A sectioning container.
    Section,
    "section"
);
container_element!(
    /// A paragraph.
    Paragraph,
    "p"
);
container_element!(
    /// An inline span.
    Span,
    "span"
);
container_element!(
    /// An inline code run.
    Code,
    "code"
);

/// A horizontal rule.
#[derive(Default)]
pub struct Divider {
    attributes: Attributes,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for Divider {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        render_void_tag("hr", &self.attributes)
    }
}

/// A hyperlink.
#[derive(Default)]
pub struct Link {
    attributes: Attributes,
    children: Vec<Box<dyn Element>>,
    href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn child(mut self, element: impl Element + 'static) -> Self {
        self.children.push(Box::new(element));
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }
}

impl Element for Link {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<a href=\"");
        out.push_str(&escape_attribute(&self.href));
        out.push('"');
        out.push_str(&self.attributes.render());
        out.push('>');
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str("</a>");
        out
    }
}

/// A button.
#[derive(Default)]
pub struct Button {
    attributes: Attributes,
    children: Vec<Box<dyn Element>>,
    disabled: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, element: impl Element + 'static) -> Self {
        self.children.push(Box::new(element));
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl Element for Button {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<button");
        out.push_str(&self.attributes.render());
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str("</button>");
        out
    }
}

/// A `<details>`/`<summary>` disclosure, the host element for
/// open-state styling.
#[derive(Default)]
pub struct Disclosure {
    attributes: Attributes,
    summary: String,
    children: Vec<Box<dyn Element>>,
    open: bool,
}

impl Disclosure {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn child(mut self, element: impl Element + 'static) -> Self {
        self.children.push(Box::new(element));
        self
    }

    /// Renders the disclosure initially open.
    pub fn open(mut self) -> Self {
        self.open = true;
        self
    }
}

impl Element for Disclosure {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<details");
        out.push_str(&self.attributes.render());
        if self.open {
            out.push_str(" open");
        }
        out.push('>');
        out.push_str("<summary>");
        out.push_str(&escape_text(&self.summary));
        out.push_str("</summary>");
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str("</details>");
        out
    }
}

/// An image, rendered as a void element.
#[derive(Default)]
pub struct Image {
    attributes: Attributes,
    source: String,
    alt: String,
}

impl Image {
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::new(),
            source: source.into(),
            alt: alt.into(),
        }
    }
}

impl Element for Image {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<img src=\"");
        out.push_str(&escape_attribute(&self.source));
        out.push_str("\" alt=\"");
        out.push_str(&escape_attribute(&self.alt));
        out.push('"');
        out.push_str(&self.attributes.render());
        out.push('>');
        out
    }
}
