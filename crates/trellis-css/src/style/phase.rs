//! Phase-based style protocols: fixed interaction state machines mapped
//! to pseudo-class-scoped variants.
//!
//! Unlike environment expansion, phase expansion never skips a case:
//! every phase yields a variant, because the initial phase *is* the
//! unscoped base rule and the canonical serialization must cover the
//! whole machine. Each phase's content starts from the same clean
//! baseline, so a property set in one phase can never leak into
//! another's variant.

use crate::style::content::StyledContent;
use crate::style::scoped::{assemble, CaseScope, ExpansionCase, ScopedStyle, FAMILY_PHASE};

/// Interaction phases of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Initial,
    Hovered,
    Pressed,
    Disabled,
}

impl ButtonPhase {
    pub const ALL: [ButtonPhase; 4] = [
        ButtonPhase::Initial,
        ButtonPhase::Hovered,
        ButtonPhase::Pressed,
        ButtonPhase::Disabled,
    ];

    fn label(self) -> &'static str {
        match self {
            ButtonPhase::Initial => "initial",
            ButtonPhase::Hovered => "hovered",
            ButtonPhase::Pressed => "pressed",
            ButtonPhase::Disabled => "disabled",
        }
    }

    fn scope(self) -> CaseScope {
        match self {
            ButtonPhase::Initial => CaseScope::Base,
            ButtonPhase::Hovered => CaseScope::Pseudo("hover"),
            ButtonPhase::Pressed => CaseScope::Pseudo("active"),
            ButtonPhase::Disabled => CaseScope::Pseudo("disabled"),
        }
    }
}

/// Interaction phases of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPhase {
    Initial,
    Hovered,
}

impl LinkPhase {
    pub const ALL: [LinkPhase; 2] = [LinkPhase::Initial, LinkPhase::Hovered];

    fn label(self) -> &'static str {
        match self {
            LinkPhase::Initial => "initial",
            LinkPhase::Hovered => "hovered",
        }
    }

    fn scope(self) -> CaseScope {
        match self {
            LinkPhase::Initial => CaseScope::Base,
            LinkPhase::Hovered => CaseScope::Pseudo("hover"),
        }
    }
}

/// States of a disclosure label hosted on a `<details>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosurePhase {
    Closed,
    Opened,
    Hovered,
}

impl DisclosurePhase {
    pub const ALL: [DisclosurePhase; 3] = [
        DisclosurePhase::Closed,
        DisclosurePhase::Opened,
        DisclosurePhase::Hovered,
    ];

    fn label(self) -> &'static str {
        match self {
            DisclosurePhase::Closed => "closed",
            DisclosurePhase::Opened => "opened",
            DisclosurePhase::Hovered => "hovered",
        }
    }

    fn scope(self) -> CaseScope {
        match self {
            DisclosurePhase::Closed => CaseScope::Base,
            // The host element exposes native open state.
            DisclosurePhase::Opened => CaseScope::OpenAttribute,
            DisclosurePhase::Hovered => CaseScope::Pseudo("hover"),
        }
    }
}

/// A style over the button interaction machine.
pub trait ButtonStyle {
    fn style(&self, content: StyledContent, phase: ButtonPhase) -> StyledContent;
}

/// A style over the link interaction machine.
pub trait LinkStyle {
    fn style(&self, content: StyledContent, phase: LinkPhase) -> StyledContent;
}

/// A style over the disclosure interaction machine.
pub trait DisclosureStyle {
    fn style(&self, content: StyledContent, phase: DisclosurePhase) -> StyledContent;
}

impl<F> ButtonStyle for F
where
    F: Fn(StyledContent, ButtonPhase) -> StyledContent,
{
    fn style(&self, content: StyledContent, phase: ButtonPhase) -> StyledContent {
        self(content, phase)
    }
}

impl<F> LinkStyle for F
where
    F: Fn(StyledContent, LinkPhase) -> StyledContent,
{
    fn style(&self, content: StyledContent, phase: LinkPhase) -> StyledContent {
        self(content, phase)
    }
}

impl<F> DisclosureStyle for F
where
    F: Fn(StyledContent, DisclosurePhase) -> StyledContent,
{
    fn style(&self, content: StyledContent, phase: DisclosurePhase) -> StyledContent {
        self(content, phase)
    }
}

fn phase_case(
    label: &'static str,
    scope: CaseScope,
    result: StyledContent,
    baseline: &StyledContent,
) -> ExpansionCase {
    ExpansionCase {
        label: label.to_string(),
        scope,
        properties: result.properties().difference(baseline.properties()),
    }
}

/// Resolves a button style across all four phases.
pub fn resolve_button(style: &dyn ButtonStyle) -> ScopedStyle {
    let cases = ButtonPhase::ALL
        .iter()
        .map(|&phase| {
            let baseline = StyledContent::new();
            let result = style.style(baseline.clone(), phase);
            phase_case(phase.label(), phase.scope(), result, &baseline)
        })
        .collect();
    assemble(FAMILY_PHASE, cases)
}

/// Resolves a link style across both phases.
pub fn resolve_link(style: &dyn LinkStyle) -> ScopedStyle {
    let cases = LinkPhase::ALL
        .iter()
        .map(|&phase| {
            let baseline = StyledContent::new();
            let result = style.style(baseline.clone(), phase);
            phase_case(phase.label(), phase.scope(), result, &baseline)
        })
        .collect();
    assemble(FAMILY_PHASE, cases)
}

/// Resolves a disclosure style across all three phases.
pub fn resolve_disclosure(style: &dyn DisclosureStyle) -> ScopedStyle {
    let cases = DisclosurePhase::ALL
        .iter()
        .map(|&phase| {
            let baseline = StyledContent::new();
            let result = style.style(baseline.clone(), phase);
            phase_case(phase.label(), phase.scope(), result, &baseline)
        })
        .collect();
    assemble(FAMILY_PHASE, cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn every_phase_yields_a_variant() {
        let style = |content: StyledContent, phase: ButtonPhase| match phase {
            ButtonPhase::Initial => content.color(Color::rgb(0, 0, 255)),
            _ => content,
        };
        let scoped = resolve_button(&style);
        assert_eq!(scoped.variants().len(), 4);
    }

    #[test]
    fn phase_selectors_get_fixed_suffixes() {
        let style =
            |content: StyledContent, _: ButtonPhase| content.color(Color::rgb(10, 20, 30));
        let scoped = resolve_button(&style);
        let class = scoped.base_class().to_string();
        let selectors: Vec<String> = scoped
            .variants()
            .iter()
            .map(|v| v.selector.to_string())
            .collect();
        assert_eq!(
            selectors,
            vec![
                format!(".{class}"),
                format!(".{class}:hover"),
                format!(".{class}:active"),
                format!(".{class}:disabled"),
            ]
        );
    }

    #[test]
    fn disclosure_open_phase_scopes_with_the_open_attribute() {
        let style = |content: StyledContent, phase: DisclosurePhase| match phase {
            DisclosurePhase::Opened => content.font_weight(crate::types::FontWeight::Bold),
            _ => content,
        };
        let scoped = resolve_disclosure(&style);
        let class = scoped.base_class().to_string();
        assert_eq!(
            scoped.variants()[1].selector.to_string(),
            format!(".{class}[open]")
        );
    }

    #[test]
    fn phase_namespace_differs_from_environment_namespace() {
        let style = |content: StyledContent, _: LinkPhase| content.color(Color::black());
        assert!(resolve_link(&style).base_class().starts_with("ps-"));
    }
}
