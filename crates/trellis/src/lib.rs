//! # Trellis - Declarative HTML Elements
//!
//! The element/content layer of the Trellis framework: a homogeneous
//! tree of renderable elements, each carrying a mutable attribute record
//! (id, classes, inline styles, data attributes, event bindings).
//!
//! The style engine in `trellis-css` touches this layer through exactly
//! two operations: registering a resolved style's class on an element's
//! attribute set, and registering inline declarations. Everything else —
//! expansion, theming, stylesheet generation — happens on the other side
//! of that seam.
//!
//! ```rust
//! use trellis::{Div, Element, ElementExt, Link};
//! use trellis_css::{EnvironmentConditions, StyleGenerator, StyledContent};
//! use trellis_css::types::Color;
//!
//! let mut generator = StyleGenerator::new();
//! let accent = |content: StyledContent, _: &EnvironmentConditions| {
//!     content.color(Color::hex("#0178d4"))
//! };
//! let scoped = generator.register_style(&accent).unwrap().clone();
//!
//! let page = Div::new().child(Link::new("/docs").styled(&scoped).text("Docs"));
//! assert!(page.render().contains(scoped.base_class()));
//! ```

pub mod attributes;
pub mod element;
pub mod tags;

pub use attributes::Attributes;
pub use element::{Element, ElementExt};
pub use tags::{Button, Code, Disclosure, Div, Divider, Image, Link, Paragraph, Section, Span, Text};
