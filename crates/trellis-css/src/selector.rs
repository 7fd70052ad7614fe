//! The selector algebra: immutable selector values built from atomic
//! components and combined through fluent operations.
//!
//! A [`Selector`] is an ordered sequence of [`Component`]s. Compound
//! components (class, id, attribute, pseudo-class) concatenate without
//! whitespace; combinator components insert ` `, ` > `, ` + `, ` ~ ` or
//! `, ` between the selectors they join. Two selectors are equal iff
//! their component sequences are equal, and the canonical CSS string from
//! [`Selector::to_string`] doubles as the deduplication identity.

use std::fmt;

use smallvec::SmallVec;

/// How two selector sequences are related.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// ` ` — matches descendants.
    Descendant,
    /// ` > ` — matches direct children.
    Child,
    /// ` + ` — matches the next sibling.
    NextSibling,
    /// ` ~ ` — matches any following sibling.
    Sibling,
    /// `, ` — selector union.
    Or,
}

impl Combinator {
    fn token(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::NextSibling => " + ",
            Combinator::Sibling => " ~ ",
            Combinator::Or => ", ",
        }
    }
}

/// One atomic piece of a selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// An element name, e.g. `a` or `details`.
    Element(String),
    /// A class, rendered `.name`.
    Class(String),
    /// An id, rendered `#name`.
    Id(String),
    /// An attribute presence or equality test.
    Attribute {
        name: String,
        value: Option<String>,
    },
    /// A pseudo-class, rendered `:name`.
    PseudoClass(String),
    /// A pseudo-element, rendered `::name`.
    PseudoElement(String),
    /// A functional pseudo-class with nested selectors, rendered
    /// `:name(sel1, sel2, ...)`.
    Functional {
        name: &'static str,
        selectors: Vec<Selector>,
    },
    /// The universal selector `*`.
    Universal,
    /// A joining token between two component runs.
    Combinator(Combinator),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Element(name) => write!(f, "{name}"),
            Component::Class(name) => write!(f, ".{name}"),
            Component::Id(name) => write!(f, "#{name}"),
            Component::Attribute { name, value: None } => write!(f, "[{name}]"),
            Component::Attribute {
                name,
                value: Some(value),
            } => write!(f, "[{name}=\"{value}\"]"),
            Component::PseudoClass(name) => write!(f, ":{name}"),
            Component::PseudoElement(name) => write!(f, "::{name}"),
            Component::Functional { name, selectors } => {
                let nested: Vec<String> = selectors.iter().map(Selector::to_string).collect();
                write!(f, ":{name}({})", nested.join(", "))
            }
            Component::Universal => write!(f, "*"),
            Component::Combinator(combinator) => write!(f, "{}", combinator.token()),
        }
    }
}

/// An immutable CSS selector value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    components: SmallVec<[Component; 4]>,
}

impl Selector {
    fn from_component(component: Component) -> Self {
        let mut components = SmallVec::new();
        components.push(component);
        Self { components }
    }

    /// An element selector, e.g. `Selector::element("a")`.
    pub fn element(name: impl Into<String>) -> Self {
        Self::from_component(Component::Element(name.into()))
    }

    /// A class selector, e.g. `Selector::class("primary")` → `.primary`.
    pub fn class(name: impl Into<String>) -> Self {
        Self::from_component(Component::Class(name.into()))
    }

    /// An id selector, e.g. `Selector::id("header")` → `#header`.
    pub fn id(name: impl Into<String>) -> Self {
        Self::from_component(Component::Id(name.into()))
    }

    /// A boolean attribute selector, `[name]`.
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::from_component(Component::Attribute {
            name: name.into(),
            value: None,
        })
    }

    /// An attribute equality selector, `[name="value"]`.
    pub fn attribute_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_component(Component::Attribute {
            name: name.into(),
            value: Some(value.into()),
        })
    }

    /// A pseudo-class selector, `:name`.
    pub fn pseudo_class(name: impl Into<String>) -> Self {
        Self::from_component(Component::PseudoClass(name.into()))
    }

    /// A pseudo-element selector, `::name`.
    pub fn pseudo_element(name: impl Into<String>) -> Self {
        Self::from_component(Component::PseudoElement(name.into()))
    }

    /// The universal selector `*`.
    pub fn universal() -> Self {
        Self::from_component(Component::Universal)
    }

    /// Negation, `:not(sel1, sel2, ...)`.
    pub fn not(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::functional("not", selectors)
    }

    /// Union matching, `:is(sel1, sel2, ...)`.
    pub fn is(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::functional("is", selectors)
    }

    /// Containment, `:has(sel1, sel2, ...)`.
    pub fn has(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::functional("has", selectors)
    }

    /// Zero-specificity union, `:where(sel1, sel2, ...)`.
    pub fn where_(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::functional("where", selectors)
    }

    fn functional(name: &'static str, selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::from_component(Component::Functional {
            name,
            selectors: selectors.into_iter().collect(),
        })
    }

    /// Compounds this selector with another, no combinator in between:
    /// `.a.with(.b)` → `.a.b`.
    pub fn with(mut self, other: Selector) -> Self {
        self.components.extend(other.components);
        self
    }

    /// Qualifies this selector to match only descendants of `ancestor`.
    /// The ancestor renders first: `.a.when_descendant_of([x])` → `[x] .a`.
    pub fn when_descendant_of(self, ancestor: Selector) -> Self {
        ancestor.join(Combinator::Descendant, self)
    }

    /// Qualifies this selector to match only direct children of `parent`.
    pub fn when_child_of(self, parent: Selector) -> Self {
        parent.join(Combinator::Child, self)
    }

    /// Qualifies this selector to match only the element immediately
    /// following `sibling`.
    pub fn when_next_sibling_of(self, sibling: Selector) -> Self {
        sibling.join(Combinator::NextSibling, self)
    }

    /// Qualifies this selector to match any element following `sibling`.
    pub fn when_sibling_of(self, sibling: Selector) -> Self {
        sibling.join(Combinator::Sibling, self)
    }

    /// Selector union: `.a.or(.b)` → `.a, .b`.
    pub fn or(self, other: Selector) -> Self {
        self.join(Combinator::Or, other)
    }

    fn join(mut self, combinator: Combinator, tail: Selector) -> Self {
        self.components.push(Component::Combinator(combinator));
        self.components.extend(tail.components);
        self
    }

    /// Returns `true` when the selector has no components.
    ///
    /// Empty selectors render to the empty string and must never reach a
    /// ruleset; callers are expected to guard.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component sequence, in order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl fmt::Display for Selector {
    /// The canonical CSS string: compound components concatenated,
    /// combinator tokens between runs, consecutive whitespace collapsed
    /// to single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = String::new();
        for component in &self.components {
            raw.push_str(&component.to_string());
        }
        let mut last_was_space = false;
        for c in raw.chars() {
            if c == ' ' {
                if last_was_space {
                    continue;
                }
                last_was_space = true;
            } else {
                last_was_space = false;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_components_concatenate() {
        let selector = Selector::element("button")
            .with(Selector::class("primary"))
            .with(Selector::pseudo_class("hover"));
        assert_eq!(selector.to_string(), "button.primary:hover");
    }

    #[test]
    fn descendant_qualification_orders_ancestor_first() {
        let selector = Selector::class("code")
            .when_descendant_of(Selector::attribute_value("data-theme", "x"));
        assert_eq!(selector.to_string(), "[data-theme=\"x\"] .code");
    }

    #[test]
    fn sibling_and_child_combinators_render_tokens() {
        let child = Selector::class("item").when_child_of(Selector::element("ul"));
        assert_eq!(child.to_string(), "ul > .item");

        let next = Selector::element("p").when_next_sibling_of(Selector::element("h2"));
        assert_eq!(next.to_string(), "h2 + p");

        let any = Selector::element("p").when_sibling_of(Selector::element("h2"));
        assert_eq!(any.to_string(), "h2 ~ p");
    }

    #[test]
    fn or_joins_with_comma() {
        let selector = Selector::class("a").or(Selector::class("b"));
        assert_eq!(selector.to_string(), ".a, .b");
    }

    #[test]
    fn functional_pseudo_classes_nest() {
        let selector = Selector::element("a").with(Selector::not([
            Selector::class("external"),
            Selector::attribute("download"),
        ]));
        assert_eq!(selector.to_string(), "a:not(.external, [download])");
    }

    #[test]
    fn whitespace_never_doubles() {
        // Stacked descendant qualifications insert exactly one space each.
        let selector = Selector::class("x")
            .when_descendant_of(Selector::class("mid"))
            .when_descendant_of(Selector::class("outer"));
        assert_eq!(selector.to_string(), ".outer .mid .x");
    }

    #[test]
    fn equality_is_component_wise() {
        let a = Selector::class("x").when_child_of(Selector::element("div"));
        let b = Selector::class("x").when_child_of(Selector::element("div"));
        assert_eq!(a, b);
        assert_ne!(a, Selector::class("x").when_descendant_of(Selector::element("div")));
    }
}
