//! signals/prefer-value-read
//!
//! A bare reference to a signal outside markup reads the container object,
//! not its current value. Markup bindings unwrap signals themselves, and
//! framework hook argument lists (dependency arrays and friends) take the
//! container on purpose; everywhere else the value accessor is what the
//! author almost certainly meant.
//!
//! ## Examples
//!
//! ### Invalid
//! ```ts
//! function total() {
//!   return countSignal + 1; // concatenates an object
//! }
//! ```
//!
//! ### Valid
//! ```ts
//! function total() {
//!   return countSignal.value + 1;
//! }
//! const view = <span>{countSignal}</span>;
//! ```

use crate::context::LintContext;
use crate::diagnostic::{Fix, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};
use oxc_span::Span;

static META: RuleMeta = RuleMeta {
    name: "signals/prefer-value-read",
    description: "Require the value accessor when reading a signal outside markup",
    category: RuleCategory::Correctness,
    fixable: true,
    default_severity: Severity::Warning,
};

pub struct PreferValueRead;

impl Rule for PreferValueRead {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_bare_reference<'a>(&self, ctx: &mut LintContext<'a>, name: &str, span: Span) {
        if ctx.frames.in_markup() || ctx.frames.in_hook_call() {
            return;
        }
        let accessor = ctx.options.signals.value_property.clone();
        ctx.warn_with_fix(
            format!("use the value accessor to read signal '{name}'"),
            span,
            format!("a bare signal reference is the container object; read `{name}.{accessor}`"),
            Fix::new(
                format!("append `.{accessor}`"),
                TextEdit::insert(span.end, format!(".{accessor}")),
            ),
        );
    }
}
