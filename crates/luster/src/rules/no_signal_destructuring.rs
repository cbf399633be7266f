//! signals/no-signal-destructuring
//!
//! Destructuring a signal, or a container key that holds one, copies the
//! current snapshot and severs the live binding the reactive abstraction
//! depends on. Rest elements are hazardous too: they implicitly capture
//! every signal-bearing key that is not explicitly bound elsewhere in the
//! pattern.
//!
//! ## Examples
//!
//! ### Invalid
//! ```ts
//! const { value } = countSignal;
//! const { count } = box;          // box = { count: signal(0) }
//! const { label, ...rest } = box; // rest captures `count`
//! ```
//!
//! ### Valid
//! ```ts
//! const count = box.count;        // keeps the signal object
//! const { label } = box;          // no hazard key captured
//! ```

use crate::access::{DestructureHazard, DestructureSite};
use crate::bindings::HazardKey;
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "signals/no-signal-destructuring",
    description: "Disallow destructuring signals or signal-bearing container keys",
    category: RuleCategory::Correctness,
    fixable: false,
    default_severity: Severity::Error,
};

pub struct NoSignalDestructuring;

impl Rule for NoSignalDestructuring {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_destructure<'a>(&self, ctx: &mut LintContext<'a>, site: &DestructureSite) {
        match &site.hazard {
            DestructureHazard::WholeSignal => {
                let subject = match site.source_name.as_deref() {
                    Some(name) => format!("signal '{name}'"),
                    None => "a signal".to_string(),
                };
                ctx.report(
                    LintDiagnostic::error(
                        META.name,
                        format!("destructuring {subject} severs its live subscription"),
                        site.span.start,
                        site.span.end,
                    )
                    .with_help("keep the signal object and read through its value accessor"),
                );
            }
            DestructureHazard::Captures(captures) => {
                for capture in captures {
                    let source = site.source_name.as_deref().unwrap_or("the container");
                    let message = if capture.via_rest {
                        format!(
                            "rest element implicitly captures the signal at {} of '{source}'",
                            capture.key
                        )
                    } else {
                        format!(
                            "destructuring captures the signal at {} of '{source}'",
                            capture.key
                        )
                    };
                    let mut diagnostic = LintDiagnostic::error(
                        META.name,
                        message,
                        capture.span.start,
                        capture.span.end,
                    )
                    .with_help(
                        "destructuring breaks the live binding; access the property directly",
                    );

                    if !capture.via_rest {
                        if let (Some(rewrite), Some(source), HazardKey::Name(key)) = (
                            &site.single_rewrite,
                            site.source_name.as_deref(),
                            &capture.key,
                        ) {
                            if *key == rewrite.key {
                                diagnostic = diagnostic.with_suggestion(Fix::new(
                                    format!("read `{source}.{}` directly", rewrite.key),
                                    TextEdit::replace(
                                        rewrite.span,
                                        format!("{} = {source}.{}", rewrite.local, rewrite.key),
                                    ),
                                ));
                            }
                        }
                    }
                    ctx.report(diagnostic);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn lint(source: &str) -> crate::linter::LintResult {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NoSignalDestructuring));
        Linter::with_registry(registry).lint_source(source, "test.tsx")
    }

    const PREAMBLE: &str = "import { signal } from '@preact/signals-react';\n";

    #[test]
    fn test_hazard_key_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ count }} = box;"
        ));
        assert_eq!(result.error_count, 1);
        assert!(result.diagnostics[0].message.contains("'count'"));
    }

    #[test]
    fn test_absent_key_not_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ label }} = box;"
        ));
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_rest_capture_flagged_once() {
        let result = lint(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ label, ...rest }} = box;"
        ));
        assert_eq!(result.error_count, 1);
        assert!(result.diagnostics[0].message.contains("rest element"));
    }

    #[test]
    fn test_explicit_binding_not_double_flagged_with_rest() {
        let result = lint(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ count, ...rest }} = box;"
        ));
        // One diagnostic for the explicit capture; the rest element does
        // not re-flag the same key.
        assert_eq!(result.error_count, 1);
        assert!(!result.diagnostics[0].message.contains("rest element"));
    }

    #[test]
    fn test_whole_signal_destructure_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nconst {{ value }} = count;"
        ));
        assert_eq!(result.error_count, 1);
        assert!(result.diagnostics[0].message.contains("count"));
    }

    #[test]
    fn test_single_binding_suggestion() {
        let source = format!(
            "{PREAMBLE}const box = {{ count: signal(0) }};\nconst {{ count }} = box;"
        );
        let result = lint(&source);
        assert_eq!(result.error_count, 1);
        let suggestion = result.diagnostics[0]
            .suggestions
            .first()
            .expect("suggestion");
        let rewritten = suggestion.apply(&source).expect("applies");
        assert!(rewritten.contains("const count = box.count;"));
    }

    #[test]
    fn test_array_index_hazard() {
        let result = lint(&format!(
            "{PREAMBLE}const pair = [signal(0), 'x'];\nconst [head] = pair;"
        ));
        assert_eq!(result.error_count, 1);
        assert!(result.diagnostics[0].message.contains("index 0"));
    }

    #[test]
    fn test_destructuring_assignment_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const box = {{ count: signal(0) }};\nlet count;\n({{ count }} = box);"
        ));
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_unclassified_destructure_ignored() {
        let result = lint(&format!(
            "{PREAMBLE}const plain = {{ count: 1 }};\nconst {{ count }} = plain;"
        ));
        assert_eq!(result.error_count, 0);
    }
}
