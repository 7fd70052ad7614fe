//! The typed property model: CSS declarations as a discriminated union.
//!
//! Every declaration kind the engine can emit is a [`Property`] variant
//! carrying its typed payload. The variant is an implementation detail:
//! identity, hashing and ordering are all defined over the *rendered*
//! `"name: value"` pair, so two constructors that serialize identically
//! compare equal regardless of which variant produced them.
//!
//! Properties are collected into [`PropertySet`]s: insertion-irrelevant,
//! duplicate-free sets where re-adding an equal property is a no-op and a
//! same-named property with a different value overrides the previous one.
//!
//! The model serializes; it does not validate. A negative `width` is the
//! caller's responsibility.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::{format_float, Color, Font, FontStyle, FontWeight, Length, TextDecorationLine};

/// A box edge, used by per-edge margin and padding declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    fn suffix(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let keyword = match self {
                    $(Self::$variant => $css),+
                };
                write!(f, "{keyword}")
            }
        }
    };
}

keyword_enum! {
    /// Values for the `display` declaration.
    DisplayKind {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        None => "none",
    }
}

keyword_enum! {
    /// Values for the `position` declaration.
    PositionKind {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

keyword_enum! {
    /// Values for `flex-direction`.
    FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    /// Values for `flex-wrap`.
    FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Values for `justify-content`.
    JustifyContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    /// Values for `align-items`.
    AlignItems {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// Values for `text-align`.
    TextAlign {
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

keyword_enum! {
    /// Values for `text-transform`.
    TextTransform {
        None => "none",
        Capitalize => "capitalize",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
    }
}

keyword_enum! {
    /// Values for `white-space`.
    WhiteSpace {
        Normal => "normal",
        NoWrap => "nowrap",
        Pre => "pre",
        PreWrap => "pre-wrap",
        PreLine => "pre-line",
    }
}

keyword_enum! {
    /// Values for the `overflow` family.
    OverflowKind {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
        Auto => "auto",
        Clip => "clip",
    }
}

keyword_enum! {
    /// Values for `cursor`.
    CursorKind {
        Auto => "auto",
        Default => "default",
        Pointer => "pointer",
        Text => "text",
        NotAllowed => "not-allowed",
        Grab => "grab",
        Wait => "wait",
    }
}

keyword_enum! {
    /// Easing functions for transitions and animations.
    TimingFunction {
        Linear => "linear",
        Ease => "ease",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        EaseInOut => "ease-in-out",
    }
}

/// Parameters of a `transition` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The transitioned property name, or `all`.
    pub property: String,
    pub duration_ms: u32,
    pub timing: TimingFunction,
    pub delay_ms: u32,
}

impl Transition {
    pub fn new(property: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            property: property.into(),
            duration_ms,
            timing: TimingFunction::Ease,
            delay_ms: 0,
        }
    }

    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms {}",
            self.property, self.duration_ms, self.timing
        )?;
        if self.delay_ms > 0 {
            write!(f, " {}ms", self.delay_ms)?;
        }
        Ok(())
    }
}

/// Parameters of an `animation` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Keyframes name.
    pub name: String,
    pub duration_ms: u32,
    pub timing: TimingFunction,
    /// `None` means `infinite`.
    pub iterations: Option<u32>,
}

impl Animation {
    pub fn new(name: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            timing: TimingFunction::Ease,
            iterations: Some(1),
        }
    }

    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.iterations = None;
        self
    }

    pub fn with_iterations(mut self, count: u32) -> Self {
        self.iterations = Some(count);
        self
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.name, self.duration_ms, self.timing)?;
        match self.iterations {
            None => write!(f, " infinite"),
            Some(1) => Ok(()),
            Some(n) => write!(f, " {n}"),
        }
    }
}

/// One typed CSS declaration.
///
/// Dispatch is exhaustive by construction: adding a variant without
/// extending [`Property::name`] and [`Property::value`] fails to compile.
#[derive(Clone, Debug)]
pub enum Property {
    // Color-valued
    Color(Color),
    Background(Color),
    BorderColor(Color),
    OutlineColor(Color),
    TextDecorationColor(Color),
    CaretColor(Color),

    // Length-valued box properties
    Width(Length),
    Height(Length),
    MinWidth(Length),
    MaxWidth(Length),
    MinHeight(Length),
    MaxHeight(Length),
    Margin(Length),
    MarginEdge(Edge, Length),
    Padding(Length),
    PaddingEdge(Edge, Length),
    BorderWidth(Length),
    BorderRadius(Length),
    Gap(Length),
    RowGap(Length),
    ColumnGap(Length),

    // Typography
    FontFamily(Font),
    FontSize(Length),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    LineHeight(f64),
    LetterSpacing(Length),
    TextAlign(TextAlign),
    TextTransform(TextTransform),
    TextDecoration(TextDecorationLine),
    WhiteSpace(WhiteSpace),

    // Layout
    Display(DisplayKind),
    Position(PositionKind),
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    FlexGrow(f64),
    JustifyContent(JustifyContent),
    AlignItems(AlignItems),
    Order(i32),
    ZIndex(i32),
    GridTemplateColumns(String),
    GridTemplateRows(String),
    GridColumnSpan(u16),
    GridRowSpan(u16),
    Overflow(OverflowKind),
    OverflowX(OverflowKind),
    OverflowY(OverflowKind),

    // Motion
    Transition(Transition),
    Animation(Animation),

    // Misc
    Opacity(f64),
    Cursor(CursorKind),
    BoxShadow(String),
    Filter(String),
    BackdropFilter(String),

    /// An arbitrary declaration the typed model does not cover.
    Custom { name: String, value: String },
    /// A custom property declaration, rendered as `--name: value`.
    Variable { name: String, value: String },
}

impl Property {
    /// The CSS property name this declaration renders under.
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Property::Color(_) => "color",
            Property::Background(_) => "background-color",
            Property::BorderColor(_) => "border-color",
            Property::OutlineColor(_) => "outline-color",
            Property::TextDecorationColor(_) => "text-decoration-color",
            Property::CaretColor(_) => "caret-color",
            Property::Width(_) => "width",
            Property::Height(_) => "height",
            Property::MinWidth(_) => "min-width",
            Property::MaxWidth(_) => "max-width",
            Property::MinHeight(_) => "min-height",
            Property::MaxHeight(_) => "max-height",
            Property::Margin(_) => "margin",
            Property::MarginEdge(edge, _) => {
                return Cow::Owned(format!("margin-{}", edge.suffix()));
            }
            Property::Padding(_) => "padding",
            Property::PaddingEdge(edge, _) => {
                return Cow::Owned(format!("padding-{}", edge.suffix()));
            }
            Property::BorderWidth(_) => "border-width",
            Property::BorderRadius(_) => "border-radius",
            Property::Gap(_) => "gap",
            Property::RowGap(_) => "row-gap",
            Property::ColumnGap(_) => "column-gap",
            Property::FontFamily(_) => "font-family",
            Property::FontSize(_) => "font-size",
            Property::FontWeight(_) => "font-weight",
            Property::FontStyle(_) => "font-style",
            Property::LineHeight(_) => "line-height",
            Property::LetterSpacing(_) => "letter-spacing",
            Property::TextAlign(_) => "text-align",
            Property::TextTransform(_) => "text-transform",
            Property::TextDecoration(_) => "text-decoration",
            Property::WhiteSpace(_) => "white-space",
            Property::Display(_) => "display",
            Property::Position(_) => "position",
            Property::FlexDirection(_) => "flex-direction",
            Property::FlexWrap(_) => "flex-wrap",
            Property::FlexGrow(_) => "flex-grow",
            Property::JustifyContent(_) => "justify-content",
            Property::AlignItems(_) => "align-items",
            Property::Order(_) => "order",
            Property::ZIndex(_) => "z-index",
            Property::GridTemplateColumns(_) => "grid-template-columns",
            Property::GridTemplateRows(_) => "grid-template-rows",
            Property::GridColumnSpan(_) => "grid-column",
            Property::GridRowSpan(_) => "grid-row",
            Property::Overflow(_) => "overflow",
            Property::OverflowX(_) => "overflow-x",
            Property::OverflowY(_) => "overflow-y",
            Property::Transition(_) => "transition",
            Property::Animation(_) => "animation",
            Property::Opacity(_) => "opacity",
            Property::Cursor(_) => "cursor",
            Property::BoxShadow(_) => "box-shadow",
            Property::Filter(_) => "filter",
            Property::BackdropFilter(_) => "backdrop-filter",
            Property::Custom { name, .. } => return Cow::Owned(name.clone()),
            Property::Variable { name, .. } => return Cow::Owned(format!("--{name}")),
        };
        Cow::Borrowed(name)
    }

    /// The serialized CSS value of this declaration.
    pub fn value(&self) -> String {
        match self {
            Property::Color(c)
            | Property::Background(c)
            | Property::BorderColor(c)
            | Property::OutlineColor(c)
            | Property::TextDecorationColor(c)
            | Property::CaretColor(c) => c.to_css(),
            Property::Width(l)
            | Property::Height(l)
            | Property::MinWidth(l)
            | Property::MaxWidth(l)
            | Property::MinHeight(l)
            | Property::MaxHeight(l)
            | Property::Margin(l)
            | Property::MarginEdge(_, l)
            | Property::Padding(l)
            | Property::PaddingEdge(_, l)
            | Property::BorderWidth(l)
            | Property::BorderRadius(l)
            | Property::Gap(l)
            | Property::RowGap(l)
            | Property::ColumnGap(l)
            | Property::FontSize(l)
            | Property::LetterSpacing(l) => l.to_string(),
            Property::FontFamily(font) => font.stack(),
            Property::FontWeight(w) => w.to_string(),
            Property::FontStyle(s) => s.to_string(),
            Property::LineHeight(v) | Property::FlexGrow(v) | Property::Opacity(v) => {
                format_float(*v)
            }
            Property::TextAlign(v) => v.to_string(),
            Property::TextTransform(v) => v.to_string(),
            Property::TextDecoration(v) => v.to_string(),
            Property::WhiteSpace(v) => v.to_string(),
            Property::Display(v) => v.to_string(),
            Property::Position(v) => v.to_string(),
            Property::FlexDirection(v) => v.to_string(),
            Property::FlexWrap(v) => v.to_string(),
            Property::JustifyContent(v) => v.to_string(),
            Property::AlignItems(v) => v.to_string(),
            Property::Order(v) | Property::ZIndex(v) => v.to_string(),
            Property::GridTemplateColumns(v) | Property::GridTemplateRows(v) => v.clone(),
            Property::GridColumnSpan(n) | Property::GridRowSpan(n) => format!("span {n}"),
            Property::Overflow(v) | Property::OverflowX(v) | Property::OverflowY(v) => {
                v.to_string()
            }
            Property::Transition(t) => t.to_string(),
            Property::Animation(a) => a.to_string(),
            Property::Cursor(v) => v.to_string(),
            Property::BoxShadow(v) | Property::Filter(v) | Property::BackdropFilter(v) => {
                v.clone()
            }
            Property::Custom { value, .. } | Property::Variable { value, .. } => value.clone(),
        }
    }

    /// The full rendered declaration, `name: value`.
    ///
    /// This string is the property's identity: equality, hashing and
    /// ordering are all defined over it.
    pub fn description(&self) -> String {
        format!("{}: {}", self.name(), self.value())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.value())
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.value() == other.value()
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.value().hash(state);
    }
}

impl PartialOrd for Property {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Property {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description().cmp(&other.description())
    }
}

/// An insertion-irrelevant, duplicate-free set of declarations.
///
/// Entries are keyed by property name: re-adding an equal property is a
/// no-op, and adding a same-named property with a different value replaces
/// the previous entry. Iteration order is the lexicographic order of the
/// rendered declarations, so output derived from a set is deterministic
/// no matter how it was built up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: BTreeMap<String, Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, overriding any previous same-named entry.
    pub fn add(&mut self, property: Property) {
        self.entries.insert(property.name().into_owned(), property);
    }

    /// Builder form of [`PropertySet::add`].
    pub fn with(mut self, property: Property) -> Self {
        self.add(property);
        self
    }

    /// Adds every declaration from `other`, overriding on name clashes.
    pub fn merge(&mut self, other: &PropertySet) {
        for property in other.iter() {
            self.add(property.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, property: &Property) -> bool {
        self.entries
            .get(property.name().as_ref())
            .is_some_and(|existing| existing == property)
    }

    /// Looks up the declaration stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.get(name)
    }

    /// Iterates declarations in canonical (rendered-text) order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        let mut properties: Vec<&Property> = self.entries.values().collect();
        properties.sort();
        properties.into_iter()
    }

    /// The declarations this set carries beyond `baseline`.
    ///
    /// A declaration survives the diff when the baseline has no entry with
    /// the same rendered `name: value` pair. This is how variant expansion
    /// isolates what a single environment case contributes.
    pub fn difference(&self, baseline: &PropertySet) -> PropertySet {
        let mut out = PropertySet::new();
        for property in self.iter() {
            if !baseline.contains(property) {
                out.add(property.clone());
            }
        }
        out
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for property in iter {
            set.add(property);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_rendered_pair() {
        // Same serialized color through two entry points.
        let a = Property::Color(Color::hex("#ff0000"));
        let b = Property::Color(Color::rgb(255, 0, 0));
        assert_eq!(a, b);

        let c = Property::Color(Color::rgb(0, 0, 255));
        assert_ne!(a, c);
    }

    #[test]
    fn names_derive_from_variants() {
        assert_eq!(Property::Background(Color::black()).name(), "background-color");
        assert_eq!(
            Property::MarginEdge(Edge::Top, Length::px(4.0)).name(),
            "margin-top"
        );
        assert_eq!(
            Property::Variable {
                name: "accent".into(),
                value: "#fff".into()
            }
            .name(),
            "--accent"
        );
    }

    #[test]
    fn re_adding_equal_property_is_a_noop() {
        let mut set = PropertySet::new();
        set.add(Property::Color(Color::rgb(255, 0, 0)));
        set.add(Property::Color(Color::hex("#f00")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn same_name_different_value_overrides() {
        let mut set = PropertySet::new();
        set.add(Property::Color(Color::rgb(255, 0, 0)));
        set.add(Property::Color(Color::rgb(0, 0, 255)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("color").unwrap().value(), "#0000ff");
    }

    #[test]
    fn iteration_order_ignores_insertion_order() {
        let mut forward = PropertySet::new();
        forward.add(Property::Color(Color::black()));
        forward.add(Property::Width(Length::px(10.0)));

        let mut reverse = PropertySet::new();
        reverse.add(Property::Width(Length::px(10.0)));
        reverse.add(Property::Color(Color::black()));

        let left: Vec<String> = forward.iter().map(Property::description).collect();
        let right: Vec<String> = reverse.iter().map(Property::description).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn difference_keeps_changed_and_new_entries() {
        let baseline = PropertySet::new()
            .with(Property::Color(Color::black()))
            .with(Property::Opacity(0.5));

        let modified = PropertySet::new()
            .with(Property::Color(Color::white()))
            .with(Property::Opacity(0.5))
            .with(Property::Width(Length::px(4.0)));

        let diff = modified.difference(&baseline);
        assert_eq!(diff.len(), 2);
        assert!(diff.get("color").is_some());
        assert!(diff.get("width").is_some());
        assert!(diff.get("opacity").is_none());
    }

    #[test]
    fn transition_renders_shorthand() {
        let t = Transition::new("color", 150)
            .with_timing(TimingFunction::EaseInOut)
            .with_delay(50);
        assert_eq!(
            Property::Transition(t).description(),
            "transition: color 150ms ease-in-out 50ms"
        );
    }

    #[test]
    fn animation_renders_iterations() {
        let a = Animation::new("pulse", 800).repeating();
        assert_eq!(Property::Animation(a).value(), "pulse 800ms ease infinite");
    }
}
