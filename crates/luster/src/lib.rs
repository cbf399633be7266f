//! # luster
//!
//! Luster - the signal hygiene checker.
//!
//! ## Name Origin
//!
//! **Luster** (/ˈlʌstər/) is the soft sheen of a well-kept surface. Signal
//! code keeps its luster while reads stay subscribed and writes stay where
//! they belong; `luster` examines component code and polishes off the
//! spots where the reactive abstraction is being rubbed the wrong way.
//!
//! ## What it checks
//!
//! Source files that use reactive signals inside a component framework:
//! unsafe reads (bare references outside markup, non-subscribing peeks in
//! render), unsafe mutation locations (writes inside pure derivations),
//! subscription-severing destructures (including rest-element captures),
//! missing subscription-hook calls, and missed batching opportunities.
//!
//! All checks are thin consumers of one shared analytical core:
//!
//! - an import **resolver** that decides, from provenance and naming
//!   convention, which identifiers denote signal machinery;
//! - a forward-pass **binding classifier** that propagates signal
//!   classification through aliases and container literals;
//! - a stateless **access-shape matcher** (value read, peek read,
//!   hazardous destructure, signal write);
//! - a **context frame stack** answering markup / hook-call / component /
//!   hook-function / callback-kind questions without ancestor re-walks;
//! - a **budgeted traversal runtime** that bounds per-file cost and
//!   degrades to a single over-budget diagnostic instead of running
//!   unbounded.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use luster::{Linter, OutputFormat, format_results};
//!
//! let linter = Linter::new();
//! let source = "import { signal } from '@preact/signals-react'; ...";
//! let result = linter.lint_source(source, "counter.tsx");
//!
//! if result.has_errors() {
//!     let output = format_results(
//!         &[result],
//!         &[("counter.tsx".to_string(), source.to_string())],
//!         OutputFormat::Text,
//!     );
//!     println!("{output}");
//! }
//! ```
//!
//! ## Checks
//!
//! Recommended:
//! - `signals/prefer-value-read` - Require the value accessor outside markup
//! - `signals/no-signal-destructuring` - Disallow subscription-severing destructures
//! - `signals/no-mutation-in-computed` - Keep derivation callbacks pure
//! - `signals/no-peek-in-render` - Disallow non-subscribing reads in render
//! - `signals/require-use-signals` - Require the subscription hook in components
//!
//! Opt-in (via `RuleRegistry::with_all`):
//! - `signals/prefer-signal-in-jsx` - Prefer bare signals in markup bindings
//! - `signals/prefer-batch-updates` - Group multiple writes in one batch

mod access;
mod bindings;
mod budget;
mod config;
mod context;
mod diagnostic;
mod fixer;
mod frames;
mod linter;
pub mod output;
mod resolver;
mod rule;
pub mod rules;
mod suffix;
mod visitor;

pub use access::{
    ClassifyView, DestructureHazard, DestructureSite, HazardCapture, PeekRead, SignalWrite,
    ValueRead,
};
pub use bindings::{BindingTable, Classification, HazardKey};
pub use budget::{Budget, BudgetExceeded, BudgetState, OpCategory};
pub use config::{BudgetOptions, LintOptions, SeverityLevel, SignalModuleConfig, SuffixOptions};
pub use context::LintContext;
pub use diagnostic::{Fix, Label, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use fixer::Fixer;
pub use frames::{FrameKind, FrameStack, FunctionFrame, ReadRecord, WriteRecord};
pub use linter::{LintResult, Linter, PERFORMANCE_BUDGET};
pub use output::{format_results, format_summary, format_text, OutputFormat};
pub use resolver::{CreatorKind, SignalImports};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
pub use suffix::SuffixHeuristic;

/// Analyze a source file with the recommended checks.
///
/// This is a convenience function for simple use cases. For more control,
/// use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lint_all(source: &str) -> LintResult {
        Linter::with_registry(RuleRegistry::with_all()).lint_source(source, "test.tsx")
    }

    #[test]
    fn test_lint_function() {
        let result = lint(
            "import { signal } from '@preact/signals-react';\nconst count = signal(0);\nfunction f() { return count + 1; }",
            "test.tsx",
        );
        assert!(result.has_diagnostics());
    }

    #[test]
    fn test_lint_clean_file() {
        let result = lint("const plain = 1;\nexport function f() { return plain; }", "test.tsx");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_aliased_creator_end_to_end() {
        let result = lint(
            "import { signal as createSignal } from '@preact/signals-react';\nconst count = createSignal(0);\nfunction f() { return count; }",
            "test.tsx",
        );
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].rule_name, "signals/prefer-value-read");
    }

    #[test]
    fn test_namespace_creator_end_to_end() {
        let result = lint(
            "import * as signals from '@preact/signals-core';\nconst count = signals.signal(0);\nfunction f() { return count; }",
            "test.tsx",
        );
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_markup_and_plain_read_partition() {
        // Partitioned contexts: `.value` in markup is fine for the
        // recommended set, a bare read in a plain function is not.
        let source = r#"
import { signal } from '@preact/signals-react';
import { useSignals } from '@preact/signals-react/runtime';
const countSignal = signal(0);
function Counter() {
  useSignals();
  return <span>{countSignal.value}</span>;
}
function plain() { return countSignal; }
"#;
        let result = lint(source, "test.tsx");
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].rule_name, "signals/prefer-value-read");
    }

    #[test]
    fn test_mutation_in_derivation_scenario() {
        let source = r#"
import { signal, computed } from '@preact/signals-react';
const countSignal = signal(0);
const doubled = computed(() => {
  countSignal.value = 5;
  return countSignal.value * 2;
});
function reader() { return countSignal.value; }
"#;
        let result = lint(source, "test.tsx");
        assert_eq!(result.error_count, 1);
        assert_eq!(
            result.diagnostics[0].rule_name,
            "signals/no-mutation-in-computed"
        );
        assert!(result.diagnostics[0].message.contains("countSignal"));
    }

    #[test]
    fn test_multiple_checks_are_isolated() {
        // A file that trips several checks at once reports all of them
        let source = r#"
import { signal } from '@preact/signals-react';
const countSignal = signal(0);
const box = { count: signal(0) };
const { count } = box;
function plain() { return countSignal; }
"#;
        let result = lint(source, "test.tsx");
        let rules: Vec<&str> = result
            .diagnostics
            .iter()
            .map(|diag| diag.rule_name)
            .collect();
        assert!(rules.contains(&"signals/no-signal-destructuring"));
        assert!(rules.contains(&"signals/prefer-value-read"));
    }

    #[test]
    fn test_full_registry_component_cleanup_path() {
        // prefer-signal-in-jsx and prefer-value-read partition cleanly:
        // applying one rule's fix never triggers the other.
        let source = r#"
import { signal } from '@preact/signals-react';
import { useSignals } from '@preact/signals-react/runtime';
const count = signal(0);
function Counter() {
  useSignals();
  return <span>{count.value}</span>;
}
"#;
        let first = lint_all(source);
        assert_eq!(first.warning_count, 1);
        assert_eq!(
            first.diagnostics[0].rule_name,
            "signals/prefer-signal-in-jsx"
        );
        let fixed = first.diagnostics[0]
            .fix
            .as_ref()
            .unwrap()
            .apply(source)
            .unwrap();
        let second = lint_all(&fixed);
        assert_eq!(second.warning_count, 0, "{:?}", second.diagnostics);
    }

    #[test]
    fn test_fresh_state_across_files() {
        // Classification from one file must not leak into the next
        let linter = Linter::new();
        let with_signal =
            "import { signal } from '@preact/signals-react';\nconst count = signal(0);\nfunction f() { return count; }";
        let without_signal = "const count = 1;\nfunction f() { return count; }";
        let first = linter.lint_source(with_signal, "a.tsx");
        assert!(first.has_diagnostics());
        let second = linter.lint_source(without_signal, "b.tsx");
        assert!(!second.has_diagnostics());
    }
}
