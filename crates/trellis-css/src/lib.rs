//! # Trellis CSS - Style Resolution & CSS Synthesis
//!
//! The style engine behind the Trellis framework: declarative,
//! environment-conditional style rules attached anywhere in an element
//! tree become one deduplicated stylesheet with stable,
//! content-addressed class names.
//!
//! The engine never parses CSS; it only synthesizes it. This crate
//! provides:
//!
//! - **Properties**: a typed model of CSS declarations with identity
//!   over the rendered `name: value` pair ([`property`])
//! - **Selectors**: a composable selector algebra with the standard
//!   combinators and functional pseudo-classes ([`selector`])
//! - **Expansion**: evaluation of style functions across environment
//!   dimensions into content-addressed [`ScopedStyle`] bundles
//!   ([`style`])
//! - **Themes**: base/light/dark theme resolution with style-value
//!   inheritance ([`theme`])
//! - **Generation**: registry-ordered, block-deduplicated stylesheet
//!   output ([`generator`])
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_css::generator::StyleGenerator;
//! use trellis_css::style::StyledContent;
//! use trellis_css::types::Color;
//! use trellis_css::EnvironmentConditions;
//!
//! let mut generator = StyleGenerator::new();
//! let accent = |content: StyledContent, _: &EnvironmentConditions| {
//!     content.color(Color::hex("#0178d4"))
//! };
//! let scoped = generator.register_style(&accent).unwrap();
//! let class = scoped.base_class().to_string();
//!
//! let css = generator.generate();
//! assert!(css.contains(&format!(".{class}")));
//! ```
//!
//! ## Determinism
//!
//! The same inputs always produce the same stylesheet: class names are
//! content-addressed (FNV-1a over a canonical serialization), variant
//! lists have fixed expansion order, and output follows registration
//! order. Nothing in the engine depends on hash-map iteration order.
//!
//! ## Modules
//!
//! - [`property`]: typed declarations and property sets
//! - [`selector`]: the selector algebra
//! - [`ruleset`]: rule and media-query text rendering
//! - [`environment`]: environment dimensions and media features
//! - [`style`]: the style abstraction, effects, phases, expansion
//! - [`theme`]: theme configuration and resolution
//! - [`generator`]: stylesheet orchestration
//! - [`error`]: error types

pub mod environment;
pub mod error;
pub mod generator;
pub mod property;
pub mod ruleset;
pub mod selector;
pub mod style;
pub mod theme;
pub mod types;

pub use environment::{
    ColorScheme, ContrastPreference, DisplayMode, EnvironmentConditions, HorizontalSizeClass,
    MediaFeature, MotionPreference, TransparencyPreference,
};
pub use error::CssError;
pub use generator::{build_stylesheet, StyleGenerator, ThemeGenerator};
pub use property::{Property, PropertySet};
pub use ruleset::{MediaCombinator, MediaQuery, Ruleset};
pub use selector::Selector;
pub use style::{ScopedStyle, ScopedStyleVariant, Style, StyleRegistry, StyledContent};
pub use theme::{ResolvedTheme, TextRole, Theme, ThemeConfiguration};
