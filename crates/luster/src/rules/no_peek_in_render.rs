//! signals/no-peek-in-render
//!
//! The peek method reads a signal without subscribing. That is the point
//! of it inside effects and derivations, but in render positions it means
//! the UI silently goes stale when the signal changes.

use crate::access::PeekRead;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "signals/no-peek-in-render",
    description: "Disallow non-subscribing peek reads in render positions",
    category: RuleCategory::Correctness,
    fixable: false,
    default_severity: Severity::Warning,
};

pub struct NoPeekInRender;

impl Rule for NoPeekInRender {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_peek_read<'a>(&self, ctx: &mut LintContext<'a>, read: &PeekRead) {
        // Peeking inside effects and derivations is the intended use
        if ctx.frames.in_effect() || ctx.frames.in_derivation() {
            return;
        }
        let in_component_render = ctx
            .frames
            .current()
            .is_some_and(|frame| frame.is_component());
        if !ctx.frames.in_markup() && !in_component_render {
            return;
        }
        let name = read.base_name.clone();
        ctx.warn_with_help(
            format!("peek() reads '{name}' without subscribing to it"),
            read.call_span,
            "the component will not re-render when it changes; read the value accessor instead",
        );
    }
}
