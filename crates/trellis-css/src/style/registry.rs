//! The build-scoped style registry.
//!
//! One registry lives for the duration of a build session and is passed
//! by reference through the call chain — there is no global. Entries are
//! write-once per base class: inserting an equal bundle again is a no-op
//! (this is what lets many elements share one style), while inserting a
//! *different* bundle under an existing class is a fatal consistency
//! error, because content addressing guarantees it cannot happen unless
//! the engine is broken.

use std::collections::HashMap;

use crate::error::CssError;
use crate::style::scoped::ScopedStyle;

/// Registration-ordered store of every [`ScopedStyle`] used in a build.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    entries: Vec<ScopedStyle>,
    index: HashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolved style, returning the stored entry.
    ///
    /// Idempotent for equal bundles; [`CssError::InternalConsistency`]
    /// when the class is already bound to different content.
    pub fn register(&mut self, scoped: ScopedStyle) -> Result<&ScopedStyle, CssError> {
        if let Some(&slot) = self.index.get(scoped.base_class()) {
            let existing = &self.entries[slot];
            if *existing != scoped {
                log::error!(
                    "style registry conflict: {} bound to two different bundles",
                    scoped.base_class()
                );
                return Err(CssError::InternalConsistency {
                    class: scoped.base_class().to_string(),
                });
            }
            return Ok(&self.entries[slot]);
        }
        self.index
            .insert(scoped.base_class().to_string(), self.entries.len());
        self.entries.push(scoped);
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Looks up a registered style by its base class.
    pub fn get(&self, base_class: &str) -> Option<&ScopedStyle> {
        self.index.get(base_class).map(|&slot| &self.entries[slot])
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ScopedStyle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentConditions;
    use crate::style::content::StyledContent;
    use crate::style::scoped::resolve_style;
    use crate::types::Color;

    fn sample() -> ScopedStyle {
        let style = |content: StyledContent, _: &EnvironmentConditions| {
            content.color(Color::rgb(1, 2, 3))
        };
        resolve_style(&style)
    }

    #[test]
    fn equal_reinsert_is_a_noop() {
        let mut registry = StyleRegistry::new();
        registry.register(sample()).unwrap();
        registry.register(sample()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_by_base_class() {
        let mut registry = StyleRegistry::new();
        let class = registry.register(sample()).unwrap().base_class().to_string();
        assert!(registry.get(&class).is_some());
        assert!(registry.get("ee-0000000000").is_none());
    }
}
