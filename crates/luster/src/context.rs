//! Lint context for rule execution.
//!
//! One `LintContext` is the whole per-file analysis instance: resolver
//! output, binding table, suffix heuristic, frame stack, budget state,
//! and collected diagnostics. It is constructed fresh for each file and
//! discarded at the end; nothing here outlives a file.

use crate::access::ClassifyView;
use crate::bindings::BindingTable;
use crate::budget::{Budget, BudgetState};
use crate::config::{LintOptions, SeverityLevel};
use crate::diagnostic::{Fix, LintDiagnostic, Severity};
use crate::frames::{default_hook_name_check, FrameStack};
use crate::resolver::SignalImports;
use crate::suffix::SuffixHeuristic;
use compact_str::CompactString;
use oxc_span::Span;
use regex::Regex;

pub struct LintContext<'a> {
    /// Source code being analyzed
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Options for this run
    pub options: &'a LintOptions,
    /// Import provenance, set once after the resolver pass
    pub imports: SignalImports,
    /// Binding classification, filled by the forward pass
    pub bindings: BindingTable,
    /// Context frames, maintained by the traversal
    pub frames: FrameStack,
    /// Budget counters for this file
    pub budget: BudgetState,
    /// Current rule name (set by the visitor before rule hooks)
    pub current_rule: &'static str,
    suffix: SuffixHeuristic,
    suffix_active: bool,
    hook_name_regex: Option<Regex>,
    diagnostics: Vec<LintDiagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    pub fn new(source: &'a str, filename: &'a str, options: &'a LintOptions) -> Self {
        let suffix = SuffixHeuristic::from_pattern(&options.suffix.pattern);
        let hook_name_regex = match Regex::new(&options.hook_name_pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::warn!(
                    pattern = %options.hook_name_pattern,
                    %error,
                    "invalid hook name pattern, falling back to the built-in check"
                );
                None
            }
        };
        Self {
            source,
            filename,
            options,
            imports: SignalImports::default(),
            bindings: BindingTable::new(),
            frames: FrameStack::new(),
            budget: BudgetState::new(Budget::from_options(&options.budget)),
            current_rule: "",
            suffix,
            suffix_active: false,
            hook_name_regex,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Install the resolver output. The suffix heuristic becomes active as
    /// a fallback when no import evidence exists, or unconditionally when
    /// configured always-on.
    pub fn set_imports(&mut self, imports: SignalImports) {
        self.suffix_active =
            self.suffix.is_enabled() && (self.options.suffix.always || !imports.has_any());
        self.imports = imports;
    }

    /// A read-only view for the access-shape decision functions.
    pub fn classify_view(&self) -> ClassifyView<'_> {
        ClassifyView {
            table: &self.bindings,
            imports: &self.imports,
            config: &self.options.signals,
            suffix: &self.suffix,
            suffix_active: self.suffix_active,
        }
    }

    /// Is this name a signal by import evidence or, as a fallback, by the
    /// naming convention?
    pub fn is_signal_name(&self, name: &str) -> bool {
        self.bindings.is_signal(name) || (self.suffix_active && self.suffix.matches(name))
    }

    /// Does this function name match the hook pattern?
    pub fn is_hook_name(&self, name: &str) -> bool {
        match &self.hook_name_regex {
            Some(regex) => regex.is_match(name),
            None => default_hook_name_check(name),
        }
    }

    /// Report a diagnostic, applying any configured severity override for
    /// its kind. `off` drops it entirely.
    pub fn report(&mut self, mut diagnostic: LintDiagnostic) {
        match self.options.severity.get(diagnostic.rule_name) {
            Some(SeverityLevel::Off) => return,
            Some(SeverityLevel::Error) => diagnostic.severity = Severity::Error,
            Some(SeverityLevel::Warn) => diagnostic.severity = Severity::Warning,
            None => {}
        }
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.budget.charge_bytes(diagnostic.message.len() as u64 + 64);
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at a span
    pub fn error(&mut self, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::error(
            self.current_rule,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report a warning at a span
    pub fn warn(&mut self, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report an error with a help message
    pub fn error_with_help(
        &mut self,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::error(self.current_rule, message, span.start, span.end)
                .with_help(help),
        );
    }

    /// Report a warning with a help message
    pub fn warn_with_help(
        &mut self,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, message, span.start, span.end).with_help(help),
        );
    }

    /// Report a warning with a help message and fix
    pub fn warn_with_fix(
        &mut self,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
        fix: Fix,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, message, span.start, span.end)
                .with_help(help)
                .with_fix(fix),
        );
    }

    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
