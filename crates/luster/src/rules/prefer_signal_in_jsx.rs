//! signals/prefer-signal-in-jsx
//!
//! Markup bindings unwrap signals and subscribe at the text-binding level,
//! which lets the framework update just that node. Spelling out the value
//! accessor inside markup widens the subscription to the whole component.
//! Event handlers and other callbacks nested in the markup still need the
//! accessor and are left alone.
//!
//! ## Examples
//!
//! ### Invalid
//! ```tsx
//! <span>{countSignal.value}</span>
//! ```
//!
//! ### Valid
//! ```tsx
//! <span>{countSignal}</span>
//! <button onClick={() => submit(countSignal.value)} />
//! ```

use crate::access::ValueRead;
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "signals/prefer-signal-in-jsx",
    description: "Prefer the bare signal over an explicit value read inside markup",
    category: RuleCategory::Performance,
    fixable: true,
    default_severity: Severity::Warning,
};

pub struct PreferSignalInJsx;

impl Rule for PreferSignalInJsx {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_value_read<'a>(&self, ctx: &mut LintContext<'a>, read: &ValueRead) {
        if !ctx.frames.in_markup() {
            return;
        }
        // `sig.value.toFixed(2)` and friends keep their accessor
        if read.in_member_chain {
            return;
        }
        // A function entered at or above the current markup depth is a
        // handler nested in the markup, not the render position itself.
        if let Some(frame) = ctx.frames.current() {
            if frame.markup_depth_at_entry >= ctx.frames.markup_depth() {
                return;
            }
        }
        let name = read.base_name.clone();
        let accessor = ctx.options.signals.value_property.clone();
        ctx.report(
            LintDiagnostic::warn(
                META.name,
                format!("signal '{name}' does not need .{accessor} inside markup"),
                read.span.start,
                read.span.end,
            )
            .with_help("the markup binding reads and subscribes on its own")
            .with_fix(Fix::new(
                format!("drop `.{accessor}`"),
                TextEdit::delete(read.object_span.end, read.span.end),
            )),
        );
    }
}
