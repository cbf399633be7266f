//! signals/require-use-signals
//!
//! A component function that reads signals during render must call the
//! subscription hook, or the component will not re-render when those
//! signals change. The fix inserts the hook call at the top of the body
//! (after the directive prologue) and adds the import when missing.
//!
//! ## Examples
//!
//! ### Invalid
//! ```tsx
//! function Counter() {
//!   return <span>{countSignal.value}</span>;
//! }
//! ```
//!
//! ### Valid
//! ```tsx
//! function Counter() {
//!   useSignals();
//!   return <span>{countSignal.value}</span>;
//! }
//! ```

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::fixer::Fixer;
use crate::frames::{FrameKind, FunctionFrame};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "signals/require-use-signals",
    description: "Require the subscription hook in components that read signals",
    category: RuleCategory::Subscription,
    fixable: true,
    default_severity: Severity::Warning,
};

pub struct RequireUseSignals;

impl Rule for RequireUseSignals {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn exit_function<'a>(&self, ctx: &mut LintContext<'a>, frame: &FunctionFrame) {
        if frame.kind != FrameKind::Component {
            return;
        }
        if frame.reads.is_empty() || !frame.subscription_calls.is_empty() {
            return;
        }

        let hook = ctx
            .options
            .signals
            .subscription_hooks
            .first()
            .cloned()
            .unwrap_or_else(|| "useSignals".to_string());
        let component = frame.name.as_deref().unwrap_or("component");
        let first_read = &frame.reads[0];

        let mut diagnostic = LintDiagnostic::warn(
            META.name,
            format!("component '{component}' reads signals without calling {hook}()"),
            first_read.span.start,
            first_read.span.end,
        )
        .with_help(format!(
            "call {hook}() at the top of '{component}' so signal changes re-render it"
        ));

        if let Some(insert_at) = frame.insert_offset {
            let fixer = Fixer::new(ctx.source);
            let indent = fixer
                .token_after(insert_at)
                .map(|token| fixer.line_indent(token).to_string())
                .unwrap_or_default();
            let mut edits = Vec::with_capacity(2);
            if !ctx.imports.has_subscription_hook() {
                let module = &ctx.options.signals.subscription_hook_module;
                edits.push(TextEdit::insert(
                    0,
                    format!("import {{ {hook} }} from \"{module}\";\n"),
                ));
            }
            edits.push(TextEdit::insert(insert_at, format!("\n{indent}{hook}();")));
            diagnostic = diagnostic.with_fix(Fix::with_edits(format!("insert {hook}()"), edits));
        }

        ctx.report(diagnostic);
    }
}
