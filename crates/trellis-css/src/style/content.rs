//! The style content accumulator passed through style functions.

use crate::property::{Property, PropertySet};
use crate::types::{Color, FontWeight, Length, TextDecorationLine};

/// A plain accumulator of declarations.
///
/// Style functions are value-to-value transformations over this struct:
/// they receive a content value, return a possibly-extended copy, and
/// must not observe anything beyond their arguments. The builder methods
/// cover the declarations styles reach for most; anything else goes
/// through [`StyledContent::with`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledContent {
    properties: PropertySet,
}

impl StyledContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one declaration, overriding any same-named entry.
    pub fn with(mut self, property: Property) -> Self {
        self.properties.add(property);
        self
    }

    pub fn color(self, color: Color) -> Self {
        self.with(Property::Color(color))
    }

    pub fn background(self, color: Color) -> Self {
        self.with(Property::Background(color))
    }

    pub fn font_size(self, size: Length) -> Self {
        self.with(Property::FontSize(size))
    }

    pub fn font_weight(self, weight: FontWeight) -> Self {
        self.with(Property::FontWeight(weight))
    }

    pub fn padding(self, length: Length) -> Self {
        self.with(Property::Padding(length))
    }

    pub fn margin(self, length: Length) -> Self {
        self.with(Property::Margin(length))
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Property::Opacity(value))
    }

    pub fn text_decoration(self, lines: TextDecorationLine) -> Self {
        self.with(Property::TextDecoration(lines))
    }

    /// The accumulated declarations.
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn into_properties(self) -> PropertySet {
        self.properties
    }
}

impl From<PropertySet> for StyledContent {
    fn from(properties: PropertySet) -> Self {
        Self { properties }
    }
}
