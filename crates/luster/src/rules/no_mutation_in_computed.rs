//! signals/no-mutation-in-computed
//!
//! A derived-value callback must be a pure computation. Writing a signal
//! inside one re-enters the reactive graph mid-recomputation and can loop
//! or tear the dependency tracking.
//!
//! ## Examples
//!
//! ### Invalid
//! ```ts
//! const double = computed(() => {
//!   countSignal.value = 5; // mutation inside a derivation
//!   return countSignal.value * 2;
//! });
//! ```
//!
//! ### Valid
//! ```ts
//! const double = computed(() => countSignal.value * 2);
//! effect(() => { countSignal.value = 5; }); // effects may write
//! ```

use crate::access::SignalWrite;
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "signals/no-mutation-in-computed",
    description: "Disallow signal writes inside pure-derivation callbacks",
    category: RuleCategory::Correctness,
    fixable: false,
    default_severity: Severity::Error,
};

pub struct NoMutationInComputed;

impl Rule for NoMutationInComputed {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_signal_write<'a>(&self, ctx: &mut LintContext<'a>, write: &SignalWrite) {
        if !ctx.frames.in_derivation() {
            return;
        }
        let name = write.name.clone();
        ctx.error_with_help(
            format!("signal '{name}' must not be mutated inside a derived computation"),
            write.span,
            "derivations must stay pure; move the write into an effect or event handler",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn lint(source: &str) -> crate::linter::LintResult {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NoMutationInComputed));
        Linter::with_registry(registry).lint_source(source, "test.tsx")
    }

    const PREAMBLE: &str =
        "import { signal, computed, effect } from '@preact/signals-react';\n";

    #[test]
    fn test_mutation_inside_computed_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nconst double = computed(() => {{ count.value = 5; return count.value * 2; }});"
        ));
        assert_eq!(result.error_count, 1);
        assert!(result.diagnostics[0].message.contains("'count'"));
    }

    #[test]
    fn test_correct_reads_elsewhere_do_not_mask_mutation() {
        // The same name read correctly elsewhere must not suppress the
        // forbidden-mutation diagnostic.
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nfunction total() {{ return count.value + 1; }}\nconst double = computed(() => {{ count.value = 5; return 0; }});"
        ));
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_pure_derivation_not_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nconst double = computed(() => count.value * 2);"
        ));
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_write_inside_effect_not_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\neffect(() => {{ count.value = 5; }});"
        ));
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_update_expression_flagged() {
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nconst next = computed(() => {{ count.value++; return count.value; }});"
        ));
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_nested_function_inside_derivation_still_flagged() {
        // The write sits in a helper declared inside the derivation
        // callback; syntactically it is still within the argument list.
        let result = lint(&format!(
            "{PREAMBLE}const count = signal(0);\nconst d = computed(() => {{ function bump() {{ count.value = 1; }} bump(); return 0; }});"
        ));
        assert_eq!(result.error_count, 1);
    }
}
