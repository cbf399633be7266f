//! Main linter entry point.
//!
//! Every file gets a fresh analysis instance: resolver output, binding
//! table, frame stack, and budget counters live exactly as long as one
//! `lint_source` call. Nothing is shared across files except the
//! process-wide compiled-pattern cache.

use crate::config::LintOptions;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::resolver::SignalImports;
use crate::rule::RuleRegistry;
use crate::visitor::LintVisitor;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Diagnostic kind for the one-per-file budget overrun report.
pub const PERFORMANCE_BUDGET: &str = "luster/performance-budget";

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was analyzed
    pub filename: String,
    /// Collected diagnostics, in source order
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    fn empty(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
pub struct Linter {
    registry: RuleRegistry,
    options: LintOptions,
}

impl Linter {
    /// Create a new linter with the recommended checks and default options
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
            options: LintOptions::default(),
        }
    }

    /// Create a linter with a custom check registry
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            options: LintOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: LintOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the check registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Get the options
    #[inline]
    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Analyze one source file.
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        if self.options.is_exempt(filename) {
            tracing::debug!(file = filename, "exempted by path prefix");
            return LintResult::empty(filename);
        }

        let allocator = Allocator::default();
        let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::tsx());
        let ret = Parser::new(&allocator, source, source_type).parse();
        if ret.panicked {
            // Syntax errors belong to the parser host, not this tool
            tracing::debug!(file = filename, "parser gave up, skipping analysis");
            return LintResult::empty(filename);
        }

        let mut ctx = LintContext::new(source, filename, &self.options);

        // Pass 1: import provenance
        let imports =
            SignalImports::collect(&ret.program, source, &self.options.signals, &mut ctx.budget);
        if self.options.budget.verbose {
            tracing::debug!(
                file = filename,
                has_import_evidence = imports.has_any(),
                "resolver pass complete"
            );
        }
        ctx.set_imports(imports);

        // Pass 2: the budgeted walk — classification, access shapes, and
        // check dispatch in one source-order traversal
        let mut visitor = LintVisitor::new(&mut ctx, self.registry.rules());
        if let Err(exceeded) = visitor.visit_program(&ret.program) {
            let nodes = ctx.budget.nodes_visited();
            let elapsed_ms = ctx.budget.elapsed().as_millis() as u64;
            tracing::warn!(
                file = filename,
                nodes,
                elapsed_ms,
                reason = %exceeded,
                "analysis stopped early"
            );
            ctx.current_rule = PERFORMANCE_BUDGET;
            ctx.report(
                LintDiagnostic::warn(
                    PERFORMANCE_BUDGET,
                    format!("analysis of {filename} stopped early: {exceeded}"),
                    0,
                    0,
                )
                .with_help(format!(
                    "{nodes} nodes visited in {elapsed_ms}ms; raise the performance budget or exempt this file"
                )),
            );
        }

        if self.options.budget.metrics {
            tracing::debug!(
                file = filename,
                nodes = ctx.budget.nodes_visited(),
                elapsed_ms = ctx.budget.elapsed().as_millis() as u64,
                diagnostics = ctx.diagnostics().len(),
                "analysis metrics"
            );
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Analyze multiple files and aggregate results.
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint_source(source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
