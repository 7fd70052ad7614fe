//! Serializing selectors and declarations into CSS rule text.

use crate::environment::MediaFeature;
use crate::property::{Property, PropertySet};
use crate::selector::Selector;

/// Indentation for declarations inside a block.
const INDENT: &str = "    ";

/// A selector plus the declarations scoped under it.
///
/// A `None` selector means bare declarations: the properties render as
/// naked `name: value;` lines, used when a block is flattened into an
/// enclosing scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    pub selector: Option<Selector>,
    pub properties: Vec<Property>,
}

impl Ruleset {
    pub fn new(selector: Selector, properties: &PropertySet) -> Self {
        Self {
            selector: Some(selector),
            properties: properties.iter().cloned().collect(),
        }
    }

    /// A ruleset with no selector; renders bare declarations.
    pub fn bare(properties: &PropertySet) -> Self {
        Self {
            selector: None,
            properties: properties.iter().cloned().collect(),
        }
    }

    /// Renders this ruleset to CSS text.
    ///
    /// An empty property list renders to the empty string, never to
    /// `selector {}` — callers drop empty renders from output.
    pub fn render(&self) -> String {
        if self.properties.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        match &self.selector {
            Some(selector) => {
                out.push_str(&selector.to_string());
                out.push_str(" {\n");
                for property in &self.properties {
                    out.push_str(INDENT);
                    out.push_str(&property.to_string());
                    out.push_str(";\n");
                }
                out.push('}');
            }
            None => {
                for (i, property) in self.properties.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&property.to_string());
                    out.push(';');
                }
            }
        }
        out
    }
}

/// How a media query's features are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCombinator {
    All,
    Any,
}

impl MediaCombinator {
    fn joiner(self) -> &'static str {
        match self {
            MediaCombinator::All => " and ",
            MediaCombinator::Any => " or ",
        }
    }
}

/// One or more rulesets grouped under a media condition.
///
/// All contained rulesets share a single `@media (...)` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaQuery {
    pub features: Vec<MediaFeature>,
    pub combinator: MediaCombinator,
    pub rulesets: Vec<Ruleset>,
}

impl MediaQuery {
    /// Features joined with ` and `.
    pub fn new(features: Vec<MediaFeature>, rulesets: Vec<Ruleset>) -> Self {
        Self {
            features,
            combinator: MediaCombinator::All,
            rulesets,
        }
    }

    /// Features joined with ` or `.
    pub fn any_of(features: Vec<MediaFeature>, rulesets: Vec<Ruleset>) -> Self {
        Self {
            features,
            combinator: MediaCombinator::Any,
            rulesets,
        }
    }

    /// The condition list as it appears after `@media `.
    pub fn condition(&self) -> String {
        self.features
            .iter()
            .map(|feature| format!("({})", feature.condition()))
            .collect::<Vec<_>>()
            .join(self.combinator.joiner())
    }

    /// Renders the whole media block, or the empty string when every
    /// contained ruleset is empty.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .rulesets
            .iter()
            .map(Ruleset::render)
            .filter(|text| !text.is_empty())
            .collect();
        if rendered.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str("@media ");
        out.push_str(&self.condition());
        out.push_str(" {\n");
        for (i, block) in rendered.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in block.lines() {
                out.push_str(INDENT);
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}
