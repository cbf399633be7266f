//! signals/prefer-batch-updates
//!
//! Each signal write outside a batch flushes the reactive graph on its
//! own. Two or more writes in one function body re-run every dependent
//! computation per write; grouping them in a single batch call flushes
//! once. The rewrite is offered as a suggestion because wrapping
//! statements can shift `await`/`this` semantics the author must confirm.

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::frames::{FrameKind, FunctionFrame, WriteRecord};
use crate::rule::{Rule, RuleCategory, RuleMeta};
use oxc_span::Span;

static META: RuleMeta = RuleMeta {
    name: "signals/prefer-batch-updates",
    description: "Group multiple signal writes into a single batch call",
    category: RuleCategory::Performance,
    fixable: false,
    default_severity: Severity::Warning,
};

pub struct PreferBatchUpdates;

impl Rule for PreferBatchUpdates {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn exit_function<'a>(&self, ctx: &mut LintContext<'a>, frame: &FunctionFrame) {
        // Writes in derivations are another rule's concern
        if frame.kind == FrameKind::Derivation {
            return;
        }
        let unbatched: Vec<&WriteRecord> =
            frame.writes.iter().filter(|write| !write.in_batch).collect();
        if unbatched.len() < 2 {
            return;
        }

        let batch = ctx
            .options
            .signals
            .batch_functions
            .first()
            .cloned()
            .unwrap_or_else(|| "batch".to_string());
        let first = unbatched[0];
        let last = unbatched[unbatched.len() - 1];
        let span = Span::new(first.span.start, last.span.end);

        let mut diagnostic = LintDiagnostic::warn(
            META.name,
            format!(
                "{} signal writes in one function body; each flushes subscribers separately",
                unbatched.len()
            ),
            span.start,
            span.end,
        )
        .with_help(format!("group the writes in a single {batch}() call"));

        // Only offer the wrap when every write sits directly under a
        // top-level statement of this body.
        let stmt_spans: Option<Vec<Span>> =
            unbatched.iter().map(|write| write.stmt_span).collect();
        if let Some(stmt_spans) = stmt_spans {
            let start = stmt_spans.iter().map(|span| span.start).min().unwrap_or(0);
            let end = stmt_spans.iter().map(|span| span.end).max().unwrap_or(0);
            let mut edits = Vec::with_capacity(3);
            if !ctx.imports.has_batch_function() {
                if let Some(module) = ctx.options.signals.modules.first() {
                    edits.push(TextEdit::insert(
                        0,
                        format!("import {{ {batch} }} from \"{module}\";\n"),
                    ));
                }
            }
            edits.push(TextEdit::insert(start, format!("{batch}(() => {{ ")));
            edits.push(TextEdit::insert(end, " });".to_string()));
            diagnostic =
                diagnostic.with_suggestion(Fix::with_edits(format!("wrap in {batch}()"), edits));
        }

        ctx.report(diagnostic);
    }
}
