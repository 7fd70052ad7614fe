//! The style abstraction and its expansion machinery.
//!
//! A style is a pure function from (content, environment snapshot) to
//! content. The generator may invoke it several times — once per
//! reachable environment combination — so implementations must be
//! deterministic and free of observable side effects.
//!
//! ## Submodules
//!
//! - [`content`]: the [`StyledContent`] accumulator style functions
//!   transform
//! - [`scoped`]: variant expansion and content-addressed base classes
//! - [`effects`]: size-class, preference and data-attribute keyed effects
//! - [`phase`]: fixed interaction state machines (button, link,
//!   disclosure)
//! - [`registry`]: the write-once per-build style registry

pub mod content;
pub mod effects;
pub mod phase;
pub mod registry;
pub mod scoped;

pub use content::StyledContent;
pub use effects::{AttributeEffect, PreferenceDimension, PreferenceEffect, SizeClassEffect};
pub use phase::{
    resolve_button, resolve_disclosure, resolve_link, ButtonPhase, ButtonStyle, DisclosurePhase,
    DisclosureStyle, LinkPhase, LinkStyle,
};
pub use registry::StyleRegistry;
pub use scoped::{resolve_style, ScopedStyle, ScopedStyleVariant};

use crate::environment::EnvironmentConditions;

/// A color-scheme-responsive style.
///
/// Required to be referentially transparent: equal environment snapshots
/// must produce equal output, because results are memoized by the
/// style's canonical expansion rather than re-invoked per use.
pub trait Style {
    fn apply(&self, content: StyledContent, environment: &EnvironmentConditions) -> StyledContent;
}

/// Any matching closure is a style; most styles are written inline.
impl<F> Style for F
where
    F: Fn(StyledContent, &EnvironmentConditions) -> StyledContent,
{
    fn apply(&self, content: StyledContent, environment: &EnvironmentConditions) -> StyledContent {
        self(content, environment)
    }
}
