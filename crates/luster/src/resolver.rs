//! Import provenance resolution.
//!
//! Scans a file's top-level import statements once and records which local
//! names denote signal creators, derived-value creators, effect creators,
//! the batch operation, and the subscription hook, plus namespace aliases
//! through which the same names are reachable as member calls.

use crate::budget::{BudgetState, OpCategory};
use crate::config::SignalModuleConfig;
use compact_str::CompactString;
use memchr::memmem;
use oxc_ast::ast::{
    Expression, ImportDeclarationSpecifier, ModuleExportName, Program, Statement,
};
use rustc_hash::FxHashSet;

/// What kind of signal machinery a resolved callee is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorKind {
    /// Creates a reactive signal value
    Signal,
    /// Creates a derived (pure, recomputed) value
    Derived,
    /// Creates a subscription effect
    Effect,
    /// The batching operation
    Batch,
    /// The subscription hook
    Subscription,
}

/// Local-name sets built once per file from its import statements.
///
/// Immutable after construction. Aliased specifiers register under the
/// local alias, never the exported name.
#[derive(Debug, Default)]
pub struct SignalImports {
    signal_creators: FxHashSet<CompactString>,
    derived_creators: FxHashSet<CompactString>,
    effect_creators: FxHashSet<CompactString>,
    batch_functions: FxHashSet<CompactString>,
    subscription_hooks: FxHashSet<CompactString>,
    namespaces: FxHashSet<CompactString>,
}

impl SignalImports {
    /// Build the name sets from a program's top-level imports.
    ///
    /// Modules outside the allow-list are silently ignored. The raw-text
    /// prefilter skips the statement walk entirely for files that mention
    /// none of the allowed modules.
    pub fn collect(
        program: &Program<'_>,
        source: &str,
        config: &SignalModuleConfig,
        budget: &mut BudgetState,
    ) -> Self {
        let mut imports = Self::default();

        if !config
            .modules
            .iter()
            .any(|module| memmem::find(source.as_bytes(), module.as_bytes()).is_some())
        {
            return imports;
        }

        for stmt in program.body.iter() {
            let Statement::ImportDeclaration(import) = stmt else {
                continue;
            };
            let module = import.source.value.as_str();
            if !config.modules.iter().any(|allowed| allowed == module) {
                continue;
            }
            if !budget.record_op(OpCategory::ImportResolution) {
                break;
            }
            if import.import_kind.is_type() {
                continue;
            }

            let Some(specifiers) = &import.specifiers else {
                continue;
            };
            for specifier in specifiers.iter() {
                match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(spec) => {
                        if spec.import_kind.is_type() {
                            continue;
                        }
                        let imported = export_name(&spec.imported);
                        if let Some(kind) = config_kind(config, imported) {
                            imports
                                .set_mut(kind)
                                .insert(CompactString::new(spec.local.name.as_str()));
                        }
                    }
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
                        imports
                            .namespaces
                            .insert(CompactString::new(spec.local.name.as_str()));
                    }
                    // The allowed modules have no default creator export
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => {}
                }
            }
        }

        imports
    }

    fn set_mut(&mut self, kind: CreatorKind) -> &mut FxHashSet<CompactString> {
        match kind {
            CreatorKind::Signal => &mut self.signal_creators,
            CreatorKind::Derived => &mut self.derived_creators,
            CreatorKind::Effect => &mut self.effect_creators,
            CreatorKind::Batch => &mut self.batch_functions,
            CreatorKind::Subscription => &mut self.subscription_hooks,
        }
    }

    /// Resolve a call callee against the import evidence.
    ///
    /// Handles both direct identifiers (`signal(...)` under whatever local
    /// alias the import bound) and member calls through a namespace alias
    /// (`alias.signal(...)`, resolved against the recognized export names).
    pub fn callee_kind(
        &self,
        callee: &Expression<'_>,
        config: &SignalModuleConfig,
    ) -> Option<CreatorKind> {
        match callee {
            Expression::Identifier(ident) => self.local_kind(ident.name.as_str()),
            Expression::StaticMemberExpression(member) => {
                let Expression::Identifier(object) = &member.object else {
                    return None;
                };
                if !self.namespaces.contains(object.name.as_str()) {
                    return None;
                }
                config_kind(config, member.property.name.as_str())
            }
            _ => None,
        }
    }

    /// Classify a bare local name bound by an import.
    pub fn local_kind(&self, name: &str) -> Option<CreatorKind> {
        if self.signal_creators.contains(name) {
            Some(CreatorKind::Signal)
        } else if self.derived_creators.contains(name) {
            Some(CreatorKind::Derived)
        } else if self.effect_creators.contains(name) {
            Some(CreatorKind::Effect)
        } else if self.batch_functions.contains(name) {
            Some(CreatorKind::Batch)
        } else if self.subscription_hooks.contains(name) {
            Some(CreatorKind::Subscription)
        } else {
            None
        }
    }

    /// Whether any import evidence was found in this file.
    pub fn has_any(&self) -> bool {
        !self.signal_creators.is_empty()
            || !self.derived_creators.is_empty()
            || !self.effect_creators.is_empty()
            || !self.batch_functions.is_empty()
            || !self.subscription_hooks.is_empty()
            || !self.namespaces.is_empty()
    }

    /// Whether the subscription hook is importable under some local name.
    pub fn has_subscription_hook(&self) -> bool {
        !self.subscription_hooks.is_empty()
    }

    /// Whether the batch operation is importable under some local name.
    pub fn has_batch_function(&self) -> bool {
        !self.batch_functions.is_empty()
    }

    #[inline]
    pub fn signal_creators(&self) -> &FxHashSet<CompactString> {
        &self.signal_creators
    }

    #[inline]
    pub fn namespaces(&self) -> &FxHashSet<CompactString> {
        &self.namespaces
    }
}

fn export_name<'a, 'b>(name: &'b ModuleExportName<'a>) -> &'b str {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.as_str(),
        ModuleExportName::IdentifierReference(ident) => ident.name.as_str(),
        ModuleExportName::StringLiteral(literal) => literal.value.as_str(),
    }
}

fn config_kind(config: &SignalModuleConfig, exported: &str) -> Option<CreatorKind> {
    if config.signal_creators.iter().any(|n| n == exported) {
        Some(CreatorKind::Signal)
    } else if config.derived_creators.iter().any(|n| n == exported) {
        Some(CreatorKind::Derived)
    } else if config.effect_creators.iter().any(|n| n == exported) {
        Some(CreatorKind::Effect)
    } else if config.batch_functions.iter().any(|n| n == exported) {
        Some(CreatorKind::Batch)
    } else if config.subscription_hooks.iter().any(|n| n == exported) {
        Some(CreatorKind::Subscription)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn collect_from(source: &str) -> SignalImports {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(!ret.panicked);
        let config = SignalModuleConfig::default();
        let mut budget = BudgetState::new(Budget::default());
        SignalImports::collect(&ret.program, source, &config, &mut budget)
    }

    #[test]
    fn test_named_imports() {
        let imports = collect_from(
            "import { signal, computed, effect, batch } from '@preact/signals-react';",
        );
        assert_eq!(imports.local_kind("signal"), Some(CreatorKind::Signal));
        assert_eq!(imports.local_kind("computed"), Some(CreatorKind::Derived));
        assert_eq!(imports.local_kind("effect"), Some(CreatorKind::Effect));
        assert_eq!(imports.local_kind("batch"), Some(CreatorKind::Batch));
        assert_eq!(imports.local_kind("useSignals"), None);
    }

    #[test]
    fn test_aliased_import_registers_local_name_only() {
        let imports =
            collect_from("import { signal as createSignal } from '@preact/signals-react';");
        assert_eq!(
            imports.local_kind("createSignal"),
            Some(CreatorKind::Signal)
        );
        // The exported name itself must not register when aliased
        assert_eq!(imports.local_kind("signal"), None);
    }

    #[test]
    fn test_unlisted_module_silently_ignored() {
        let imports = collect_from("import { signal } from 'some-other-lib';");
        assert!(!imports.has_any());
        assert_eq!(imports.local_kind("signal"), None);
    }

    #[test]
    fn test_namespace_alias_member_resolution() {
        let source = "import * as signals from '@preact/signals-core';";
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let config = SignalModuleConfig::default();
        let mut budget = BudgetState::new(Budget::default());
        let imports = SignalImports::collect(&ret.program, source, &config, &mut budget);
        assert!(imports.namespaces().contains("signals"));

        // Resolve `signals.signal(...)` member callee
        let call_source = "signals.signal(0)";
        let call_ret = Parser::new(&allocator, call_source, SourceType::tsx()).parse();
        let Statement::ExpressionStatement(stmt) = &call_ret.program.body[0] else {
            panic!("expected expression statement");
        };
        let Expression::CallExpression(call) = &stmt.expression else {
            panic!("expected call");
        };
        assert_eq!(
            imports.callee_kind(&call.callee, &config),
            Some(CreatorKind::Signal)
        );
    }

    #[test]
    fn test_subscription_hook_import() {
        let imports =
            collect_from("import { useSignals } from '@preact/signals-react/runtime';");
        assert!(imports.has_subscription_hook());
        assert_eq!(
            imports.local_kind("useSignals"),
            Some(CreatorKind::Subscription)
        );
    }

    #[test]
    fn test_type_only_import_ignored() {
        let imports =
            collect_from("import type { signal } from '@preact/signals-react';");
        assert!(!imports.has_any());
    }
}
