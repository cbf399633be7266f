//! Rule trait and registry for the policy checks.

use crate::access::{DestructureSite, PeekRead, SignalWrite, ValueRead};
use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::frames::FunctionFrame;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Prevent incorrect reads/writes of signals
    Correctness,
    /// Subscription lifecycle issues
    Subscription,
    /// Missed optimization idioms
    Performance,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "signals/prefer-value-read")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing policy checks.
///
/// Rules are stateless consumers of the shared analytical core: the
/// visitor classifies each site once and dispatches the typed hooks below.
/// Per-function accumulation lives in the frame the visitor hands to
/// `exit_function`, so rules never walk ancestors themselves.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// A bare reference to a classified signal (not part of a member
    /// access, binding position, or other excluded site)
    #[allow(unused_variables)]
    fn check_bare_reference<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        name: &str,
        span: oxc_span::Span,
    ) {
    }

    /// A read of the current-value property
    #[allow(unused_variables)]
    fn check_value_read<'a>(&self, ctx: &mut LintContext<'a>, read: &ValueRead) {}

    /// A non-subscribing peek read (always in call position)
    #[allow(unused_variables)]
    fn check_peek_read<'a>(&self, ctx: &mut LintContext<'a>, read: &PeekRead) {}

    /// A hazardous destructure of a signal or signal-bearing container
    #[allow(unused_variables)]
    fn check_destructure<'a>(&self, ctx: &mut LintContext<'a>, site: &DestructureSite) {}

    /// A write through a signal's value property
    #[allow(unused_variables)]
    fn check_signal_write<'a>(&self, ctx: &mut LintContext<'a>, write: &SignalWrite) {}

    /// A function frame has been fully traversed and popped
    #[allow(unused_variables)]
    fn exit_function<'a>(&self, ctx: &mut LintContext<'a>, frame: &FunctionFrame) {}
}

/// Registry holding all enabled policy checks
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Registry with the recommended checks.
    ///
    /// Correctness checks report errors; subscription and performance
    /// checks report warnings.
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        // Correctness
        registry.register(Box::new(crate::rules::NoSignalDestructuring));
        registry.register(Box::new(crate::rules::NoMutationInComputed));
        registry.register(Box::new(crate::rules::PreferValueRead));
        registry.register(Box::new(crate::rules::NoPeekInRender));

        // Subscription lifecycle
        registry.register(Box::new(crate::rules::RequireUseSignals));

        registry
    }

    /// Registry with every available check, including opt-in ones.
    pub fn with_all() -> Self {
        let mut registry = Self::with_recommended();

        // Performance (opt-in)
        registry.register(Box::new(crate::rules::PreferBatchUpdates));
        registry.register(Box::new(crate::rules::PreferSignalInJsx));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_registry_nonempty() {
        let registry = RuleRegistry::with_recommended();
        assert!(registry.rules().len() >= 5);
    }

    #[test]
    fn test_all_extends_recommended() {
        let recommended = RuleRegistry::with_recommended();
        let all = RuleRegistry::with_all();
        assert!(all.rules().len() > recommended.rules().len());
    }

    #[test]
    fn test_rule_names_are_unique() {
        let registry = RuleRegistry::with_all();
        let mut names: Vec<&str> = registry.rules().iter().map(|r| r.meta().name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }
}
