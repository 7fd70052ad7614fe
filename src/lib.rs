//! Umbrella crate re-exporting the Trellis public API.
//!
//! Depend on this crate to get the element layer and the style engine
//! under one roof; depend on `trellis` or `trellis-css` directly when
//! you only need one side of the seam.

pub use trellis::{
    Attributes, Button, Code, Disclosure, Div, Divider, Element, ElementExt, Image, Link,
    Paragraph, Section, Span, Text,
};

pub use trellis_css as css;
pub use trellis_css::{
    build_stylesheet, ColorScheme, CssError, EnvironmentConditions, HorizontalSizeClass, Property,
    PropertySet, ResolvedTheme, ScopedStyle, Selector, Style, StyleGenerator, StyledContent,
    TextRole, Theme, ThemeConfiguration, ThemeGenerator,
};
