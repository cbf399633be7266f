//! Access-shape classification.
//!
//! Pure, stateless decision functions that classify how a syntax node
//! touches a signal: a bare reference, a value read, a non-subscribing
//! peek (only valid when invoked), a hazardous destructure, or a value
//! write. Shapes are computed on demand for one node and never persisted.

use crate::bindings::{static_property_key, BindingTable, Classification, HazardKey};
use crate::config::SignalModuleConfig;
use crate::resolver::{CreatorKind, SignalImports};
use crate::suffix::SuffixHeuristic;
use compact_str::CompactString;
use oxc_ast::ast::{
    ArrayAssignmentTarget, AssignmentExpression, AssignmentTarget, AssignmentTargetProperty,
    BindingPattern, CallExpression, Expression, ObjectAssignmentTarget, ObjectPattern,
    SimpleAssignmentTarget, StaticMemberExpression, UpdateExpression, VariableDeclarator,
};
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::AssignmentOperator;
use rustc_hash::FxHashSet;

/// Read-only view over the per-file classification state, so the decision
/// functions stay free of the analysis instance itself.
pub struct ClassifyView<'c> {
    pub table: &'c BindingTable,
    pub imports: &'c SignalImports,
    pub config: &'c SignalModuleConfig,
    pub suffix: &'c SuffixHeuristic,
    /// Whether the suffix fallback applies to this file
    pub suffix_active: bool,
}

impl ClassifyView<'_> {
    /// Is this name a signal, by import evidence first, naming convention
    /// second?
    pub fn is_signal_name(&self, name: &str) -> bool {
        if self.table.is_signal(name) {
            return true;
        }
        self.suffix_active && self.suffix.matches(name)
    }

    /// Full classification of a name, including the suffix fallback.
    pub fn classification(&self, name: &str) -> Option<Classification> {
        if let Some(classification) = self.table.classification(name) {
            return Some(classification.clone());
        }
        if self.suffix_active && self.suffix.matches(name) {
            return Some(Classification::Signal);
        }
        None
    }

    fn is_creator_call(&self, call: &CallExpression<'_>) -> bool {
        matches!(
            self.imports.callee_kind(&call.callee, self.config),
            Some(CreatorKind::Signal | CreatorKind::Derived)
        )
    }
}

/// Strip wrappers that do not change what an expression denotes:
/// parentheses and TypeScript assertion forms.
pub fn unwrap_expression<'a, 'b>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(paren) => unwrap_expression(&paren.expression),
        Expression::TSAsExpression(assertion) => unwrap_expression(&assertion.expression),
        Expression::TSSatisfiesExpression(assertion) => unwrap_expression(&assertion.expression),
        Expression::TSNonNullExpression(assertion) => unwrap_expression(&assertion.expression),
        Expression::TSTypeAssertion(assertion) => unwrap_expression(&assertion.expression),
        _ => expr,
    }
}

/// A read of the current-value property on a classified base.
#[derive(Debug, Clone)]
pub struct ValueRead {
    pub base_name: CompactString,
    pub object_span: Span,
    pub property_span: Span,
    pub span: Span,
    /// The read is itself the base of a longer member/call chain
    /// (`sig.value.toFixed(2)`), so the accessor cannot simply be removed
    pub in_member_chain: bool,
}

/// Classify a static member access as a value read.
pub fn value_read(
    member: &StaticMemberExpression<'_>,
    view: &ClassifyView<'_>,
) -> Option<ValueRead> {
    if member.property.name.as_str() != view.config.value_property {
        return None;
    }
    let Expression::Identifier(object) = unwrap_expression(&member.object) else {
        return None;
    };
    if !view.is_signal_name(object.name.as_str()) {
        return None;
    }
    Some(ValueRead {
        base_name: CompactString::new(object.name.as_str()),
        object_span: object.span,
        property_span: member.property.span,
        span: member.span,
        in_member_chain: false,
    })
}

/// A non-subscribing read, counted only in call position.
#[derive(Debug, Clone)]
pub struct PeekRead {
    pub base_name: CompactString,
    pub span: Span,
    pub call_span: Span,
}

/// Classify a call as a peek read: `base.peek()` on a classified base.
///
/// The same property name outside call position is deliberately rejected,
/// so unrelated identically-named methods produce no shape at all.
pub fn peek_read(call: &CallExpression<'_>, view: &ClassifyView<'_>) -> Option<PeekRead> {
    let Expression::StaticMemberExpression(member) = &call.callee else {
        return None;
    };
    if member.property.name.as_str() != view.config.peek_method {
        return None;
    }
    let Expression::Identifier(object) = unwrap_expression(&member.object) else {
        return None;
    };
    if !view.is_signal_name(object.name.as_str()) {
        return None;
    }
    Some(PeekRead {
        base_name: CompactString::new(object.name.as_str()),
        span: member.span,
        call_span: call.span,
    })
}

/// One hazard key captured by a destructuring pattern.
#[derive(Debug, Clone)]
pub struct HazardCapture {
    pub key: HazardKey,
    /// Captured implicitly through a rest element rather than by name
    pub via_rest: bool,
    /// The binding (or rest element) that performs the capture
    pub span: Span,
}

/// What makes a destructure hazardous.
#[derive(Debug, Clone)]
pub enum DestructureHazard {
    /// The right-hand side is itself a signal; any destructure of it
    /// severs the live binding.
    WholeSignal,
    /// The right-hand side is a signal-bearing container and the pattern
    /// captures these hazard keys.
    Captures(Vec<HazardCapture>),
}

/// Replacement data for the single-binding rewrite suggestion.
#[derive(Debug, Clone)]
pub struct SingleRewrite {
    pub key: CompactString,
    pub local: CompactString,
    /// Span of `pattern = init` to replace
    pub span: Span,
}

/// A hazardous destructure site.
#[derive(Debug, Clone)]
pub struct DestructureSite {
    pub span: Span,
    pub source_name: Option<CompactString>,
    pub hazard: DestructureHazard,
    pub single_rewrite: Option<SingleRewrite>,
}

enum RhsClass {
    Signal,
    Container(FxHashSet<HazardKey>),
}

/// Resolve the destructure right-hand side to a classification, unwrapping
/// assertion and optional-chaining wrappers.
fn classify_rhs(
    expr: &Expression<'_>,
    view: &ClassifyView<'_>,
) -> Option<(RhsClass, Option<CompactString>)> {
    let expr = unwrap_expression(expr);
    match expr {
        Expression::Identifier(ident) => {
            let name = ident.name.as_str();
            match view.classification(name)? {
                Classification::Signal => Some((RhsClass::Signal, Some(CompactString::new(name)))),
                Classification::ContainerWithSignal(keys) => {
                    Some((RhsClass::Container(keys), Some(CompactString::new(name))))
                }
            }
        }
        Expression::CallExpression(call) if view.is_creator_call(call) => {
            Some((RhsClass::Signal, None))
        }
        Expression::ChainExpression(chain) => {
            // `(value!)?.` style wrappers; member chains stay opaque
            if let oxc_ast::ast::ChainElement::TSNonNullExpression(inner) = &chain.expression {
                classify_rhs(&inner.expression, view)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Classify a destructuring variable declarator.
pub fn destructure_from_declarator(
    declarator: &VariableDeclarator<'_>,
    view: &ClassifyView<'_>,
) -> Option<DestructureSite> {
    let init = declarator.init.as_ref()?;
    let (rhs, source_name) = classify_rhs(init, view)?;

    match &declarator.id {
        BindingPattern::ObjectPattern(pattern) => match rhs {
            RhsClass::Signal => Some(DestructureSite {
                span: declarator.span,
                source_name,
                hazard: DestructureHazard::WholeSignal,
                single_rewrite: None,
            }),
            RhsClass::Container(hazards) => {
                let captures = object_pattern_captures(pattern, &hazards);
                if captures.is_empty() {
                    return None;
                }
                let single_rewrite =
                    single_binding_rewrite(pattern, declarator.span, &source_name);
                Some(DestructureSite {
                    span: declarator.span,
                    source_name,
                    hazard: DestructureHazard::Captures(captures),
                    single_rewrite,
                })
            }
        },
        BindingPattern::ArrayPattern(pattern) => {
            let captures = match rhs {
                RhsClass::Signal => {
                    return Some(DestructureSite {
                        span: declarator.span,
                        source_name,
                        hazard: DestructureHazard::WholeSignal,
                        single_rewrite: None,
                    });
                }
                RhsClass::Container(hazards) => {
                    let mut captures = Vec::new();
                    for (index, element) in pattern.elements.iter().enumerate() {
                        let Some(element) = element else {
                            continue; // elision binds nothing
                        };
                        let key = HazardKey::Index(index as u32);
                        if hazards.contains(&key) {
                            captures.push(HazardCapture {
                                key,
                                via_rest: false,
                                span: element.span(),
                            });
                        }
                    }
                    if let Some(rest) = &pattern.rest {
                        let bound = pattern.elements.len() as u32;
                        for hazard in &hazards {
                            if let HazardKey::Index(index) = hazard {
                                if *index >= bound {
                                    captures.push(HazardCapture {
                                        key: hazard.clone(),
                                        via_rest: true,
                                        span: rest.span,
                                    });
                                }
                            }
                        }
                    }
                    captures
                }
            };
            if captures.is_empty() {
                return None;
            }
            Some(DestructureSite {
                span: declarator.span,
                source_name,
                hazard: DestructureHazard::Captures(captures),
                single_rewrite: None,
            })
        }
        _ => None,
    }
}

/// Classify a destructuring assignment (`({ count } = box)`).
pub fn destructure_from_assignment(
    assignment: &AssignmentExpression<'_>,
    view: &ClassifyView<'_>,
) -> Option<DestructureSite> {
    let (rhs, source_name) = classify_rhs(&assignment.right, view)?;
    match &assignment.left {
        AssignmentTarget::ObjectAssignmentTarget(target) => match rhs {
            RhsClass::Signal => Some(DestructureSite {
                span: assignment.span,
                source_name,
                hazard: DestructureHazard::WholeSignal,
                single_rewrite: None,
            }),
            RhsClass::Container(hazards) => {
                let captures = assignment_object_captures(target, &hazards);
                if captures.is_empty() {
                    return None;
                }
                Some(DestructureSite {
                    span: assignment.span,
                    source_name,
                    hazard: DestructureHazard::Captures(captures),
                    single_rewrite: None,
                })
            }
        },
        AssignmentTarget::ArrayAssignmentTarget(target) => match rhs {
            RhsClass::Signal => Some(DestructureSite {
                span: assignment.span,
                source_name,
                hazard: DestructureHazard::WholeSignal,
                single_rewrite: None,
            }),
            RhsClass::Container(hazards) => {
                let captures = assignment_array_captures(target, &hazards);
                if captures.is_empty() {
                    return None;
                }
                Some(DestructureSite {
                    span: assignment.span,
                    source_name,
                    hazard: DestructureHazard::Captures(captures),
                    single_rewrite: None,
                })
            }
        },
        _ => None,
    }
}

fn object_pattern_captures(
    pattern: &ObjectPattern<'_>,
    hazards: &FxHashSet<HazardKey>,
) -> Vec<HazardCapture> {
    let mut captures = Vec::new();
    let mut bound: FxHashSet<HazardKey> = FxHashSet::default();
    for property in pattern.properties.iter() {
        let Some(key) = static_property_key(&property.key) else {
            continue;
        };
        let key = HazardKey::Name(CompactString::new(key));
        if hazards.contains(&key) {
            captures.push(HazardCapture {
                key: key.clone(),
                via_rest: false,
                span: property.span,
            });
        }
        bound.insert(key);
    }
    if let Some(rest) = &pattern.rest {
        // A rest element implicitly captures every hazard key that is not
        // explicitly and individually bound above.
        for hazard in hazards {
            if !bound.contains(hazard) {
                captures.push(HazardCapture {
                    key: hazard.clone(),
                    via_rest: true,
                    span: rest.span,
                });
            }
        }
    }
    captures
}

fn assignment_object_captures(
    target: &ObjectAssignmentTarget<'_>,
    hazards: &FxHashSet<HazardKey>,
) -> Vec<HazardCapture> {
    let mut captures = Vec::new();
    let mut bound: FxHashSet<HazardKey> = FxHashSet::default();
    for property in target.properties.iter() {
        let (key, span) = match property {
            AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(shorthand) => (
                CompactString::new(shorthand.binding.name.as_str()),
                shorthand.span,
            ),
            AssignmentTargetProperty::AssignmentTargetPropertyProperty(keyed) => {
                let Some(key) = static_property_key(&keyed.name) else {
                    continue;
                };
                (CompactString::new(key), keyed.span)
            }
        };
        let key = HazardKey::Name(key);
        if hazards.contains(&key) {
            captures.push(HazardCapture {
                key: key.clone(),
                via_rest: false,
                span,
            });
        }
        bound.insert(key);
    }
    if let Some(rest) = &target.rest {
        for hazard in hazards {
            if !bound.contains(hazard) {
                captures.push(HazardCapture {
                    key: hazard.clone(),
                    via_rest: true,
                    span: rest.span,
                });
            }
        }
    }
    captures
}

fn assignment_array_captures(
    target: &ArrayAssignmentTarget<'_>,
    hazards: &FxHashSet<HazardKey>,
) -> Vec<HazardCapture> {
    let mut captures = Vec::new();
    for (index, element) in target.elements.iter().enumerate() {
        let Some(element) = element else {
            continue;
        };
        let key = HazardKey::Index(index as u32);
        if hazards.contains(&key) {
            captures.push(HazardCapture {
                key,
                via_rest: false,
                span: element.span(),
            });
        }
    }
    if let Some(rest) = &target.rest {
        let bound = target.elements.len() as u32;
        for hazard in hazards {
            if let HazardKey::Index(index) = hazard {
                if *index >= bound {
                    captures.push(HazardCapture {
                        key: hazard.clone(),
                        via_rest: true,
                        span: rest.span,
                    });
                }
            }
        }
    }
    captures
}

/// `const { count } = box` with exactly one plain binding can be rewritten
/// as a property access; anything richer gets no suggestion.
fn single_binding_rewrite(
    pattern: &ObjectPattern<'_>,
    declarator_span: Span,
    source_name: &Option<CompactString>,
) -> Option<SingleRewrite> {
    if source_name.is_none() {
        return None;
    }
    if pattern.rest.is_some() || pattern.properties.len() != 1 {
        return None;
    }
    let property = &pattern.properties[0];
    let key = static_property_key(&property.key)?;
    let BindingPattern::BindingIdentifier(local) = &property.value else {
        return None;
    };
    Some(SingleRewrite {
        key: CompactString::new(key),
        local: CompactString::new(local.name.as_str()),
        span: declarator_span,
    })
}

/// A write through the value property of a classified signal.
#[derive(Debug, Clone)]
pub struct SignalWrite {
    pub name: CompactString,
    /// The whole assignment or update expression
    pub span: Span,
    /// The `base.value` target
    pub target_span: Span,
    /// Assignment operator; None for `++`/`--` updates
    pub operator: Option<AssignmentOperator>,
}

fn member_write_target(
    member: &StaticMemberExpression<'_>,
    view: &ClassifyView<'_>,
) -> Option<(CompactString, Span)> {
    if member.property.name.as_str() != view.config.value_property {
        return None;
    }
    let Expression::Identifier(object) = unwrap_expression(&member.object) else {
        return None;
    };
    if !view.is_signal_name(object.name.as_str()) {
        return None;
    }
    Some((CompactString::new(object.name.as_str()), member.span))
}

/// Classify `base.value = x` (including compound operators).
pub fn write_from_assignment(
    assignment: &AssignmentExpression<'_>,
    view: &ClassifyView<'_>,
) -> Option<SignalWrite> {
    let AssignmentTarget::StaticMemberExpression(member) = &assignment.left else {
        return None;
    };
    let (name, target_span) = member_write_target(member, view)?;
    Some(SignalWrite {
        name,
        span: assignment.span,
        target_span,
        operator: Some(assignment.operator),
    })
}

/// Classify `base.value++` and friends.
pub fn write_from_update(
    update: &UpdateExpression<'_>,
    view: &ClassifyView<'_>,
) -> Option<SignalWrite> {
    let SimpleAssignmentTarget::StaticMemberExpression(member) = &update.argument else {
        return None;
    };
    let (name, target_span) = member_write_target(member, view)?;
    Some(SignalWrite {
        name,
        span: update.span,
        target_span,
        operator: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::classify_declarator;
    use crate::budget::{Budget, BudgetState};
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    const PREAMBLE: &str = "import { signal } from '@preact/signals-react';\n";

    struct Harness {
        table: BindingTable,
        imports: SignalImports,
        config: SignalModuleConfig,
        suffix: SuffixHeuristic,
    }

    impl Harness {
        fn view(&self) -> ClassifyView<'_> {
            ClassifyView {
                table: &self.table,
                imports: &self.imports,
                config: &self.config,
                suffix: &self.suffix,
                suffix_active: !self.imports.has_any(),
            }
        }
    }

    /// Classify all top-level declarators, then hand the last statement to
    /// the given extractor.
    fn with_last_statement<T>(
        source: &str,
        extract: impl for<'a> FnOnce(&Statement<'a>, &ClassifyView<'_>) -> T,
    ) -> T {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(!ret.panicked, "parse failed: {source}");
        let config = SignalModuleConfig::default();
        let mut budget = BudgetState::new(Budget::default());
        let imports = SignalImports::collect(&ret.program, source, &config, &mut budget);
        let mut table = BindingTable::new();
        for stmt in ret.program.body.iter() {
            if let Statement::VariableDeclaration(decl) = stmt {
                for declarator in decl.declarations.iter() {
                    classify_declarator(&mut table, &imports, &config, declarator, &mut budget);
                }
            }
        }
        let harness = Harness {
            table,
            imports,
            config,
            suffix: SuffixHeuristic::from_pattern("Signal$"),
        };
        let last = ret.program.body.last().expect("nonempty program");
        extract(last, &harness.view())
    }

    fn last_declarator_site(source: &str) -> Option<DestructureSite> {
        with_last_statement(source, |stmt, view| {
            let Statement::VariableDeclaration(decl) = stmt else {
                panic!("expected variable declaration");
            };
            destructure_from_declarator(&decl.declarations[0], view)
        })
    }

    #[test]
    fn test_hazard_key_destructure_flagged() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ count }} = box;"
        ))
        .expect("hazardous site");
        let DestructureHazard::Captures(captures) = &site.hazard else {
            panic!("expected captures");
        };
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].key, HazardKey::Name("count".into()));
        assert!(!captures[0].via_rest);
        assert!(site.single_rewrite.is_some());
    }

    #[test]
    fn test_non_hazard_key_not_flagged() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ label }} = box;"
        ));
        assert!(site.is_none());
    }

    #[test]
    fn test_rest_captures_unbound_hazard() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ label, ...rest }} = box;"
        ))
        .expect("rest capture");
        let DestructureHazard::Captures(captures) = &site.hazard else {
            panic!("expected captures");
        };
        assert_eq!(captures.len(), 1);
        assert!(captures[0].via_rest);
        assert_eq!(captures[0].key, HazardKey::Name("count".into()));
    }

    #[test]
    fn test_explicitly_bound_hazard_not_double_flagged_by_rest() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const box = {{ count: signal(0), label: 'x' }};\nconst {{ count, ...rest }} = box;"
        ))
        .expect("capture");
        let DestructureHazard::Captures(captures) = &site.hazard else {
            panic!("expected captures");
        };
        // The explicit binding is flagged once; the rest element does not
        // re-capture the same key.
        assert_eq!(captures.len(), 1);
        assert!(!captures[0].via_rest);
    }

    #[test]
    fn test_whole_signal_destructure() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const count = signal(0);\nconst {{ value }} = count;"
        ))
        .expect("whole-signal site");
        assert!(matches!(site.hazard, DestructureHazard::WholeSignal));
        assert_eq!(site.source_name.as_deref(), Some("count"));
    }

    #[test]
    fn test_direct_creator_call_destructure() {
        let site = last_declarator_site(&format!("{PREAMBLE}const {{ value }} = signal(0);"))
            .expect("creator-call site");
        assert!(matches!(site.hazard, DestructureHazard::WholeSignal));
        assert!(site.source_name.is_none());
    }

    #[test]
    fn test_array_pattern_hazard_index() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const pair = [signal(0), 'x'];\nconst [head] = pair;"
        ))
        .expect("index capture");
        let DestructureHazard::Captures(captures) = &site.hazard else {
            panic!("expected captures");
        };
        assert_eq!(captures[0].key, HazardKey::Index(0));
    }

    #[test]
    fn test_array_rest_captures_tail_hazard() {
        let site = last_declarator_site(&format!(
            "{PREAMBLE}const pair = ['x', signal(0)];\nconst [head, ...tail] = pair;"
        ))
        .expect("rest capture");
        let DestructureHazard::Captures(captures) = &site.hazard else {
            panic!("expected captures");
        };
        assert_eq!(captures.len(), 1);
        assert!(captures[0].via_rest);
        assert_eq!(captures[0].key, HazardKey::Index(1));
    }

    #[test]
    fn test_value_read_shape() {
        let read = with_last_statement(
            &format!("{PREAMBLE}const count = signal(0);\ncount.value;"),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::StaticMemberExpression(member) = &stmt.expression else {
                    panic!("expected member access");
                };
                value_read(member, view)
            },
        )
        .expect("value read");
        assert_eq!(read.base_name.as_str(), "count");
    }

    #[test]
    fn test_peek_only_in_call_position() {
        let peek = with_last_statement(
            &format!("{PREAMBLE}const count = signal(0);\ncount.peek();"),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::CallExpression(call) = &stmt.expression else {
                    panic!("expected call");
                };
                peek_read(call, view)
            },
        );
        assert!(peek.is_some());

        // Unrelated `.peek` method on an unclassified object is no shape
        let not_peek = with_last_statement(
            &format!("{PREAMBLE}const queue = makeQueue();\nqueue.peek();"),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::CallExpression(call) = &stmt.expression else {
                    panic!("expected call");
                };
                peek_read(call, view)
            },
        );
        assert!(not_peek.is_none());
    }

    #[test]
    fn test_write_from_assignment() {
        let write = with_last_statement(
            &format!("{PREAMBLE}const count = signal(0);\ncount.value = 5;"),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::AssignmentExpression(assignment) = &stmt.expression else {
                    panic!("expected assignment");
                };
                write_from_assignment(assignment, view)
            },
        )
        .expect("signal write");
        assert_eq!(write.name.as_str(), "count");
    }

    #[test]
    fn test_write_from_update() {
        let write = with_last_statement(
            &format!("{PREAMBLE}const count = signal(0);\ncount.value++;"),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::UpdateExpression(update) = &stmt.expression else {
                    panic!("expected update");
                };
                write_from_update(update, view)
            },
        )
        .expect("signal write");
        assert_eq!(write.name.as_str(), "count");
    }

    #[test]
    fn test_assignment_destructure_target() {
        let site = with_last_statement(
            &format!(
                "{PREAMBLE}const box = {{ count: signal(0) }};\nlet count;\n({{ count }} = box);"
            ),
            |stmt, view| {
                let Statement::ExpressionStatement(stmt) = stmt else {
                    panic!("expected expression statement");
                };
                let Expression::ParenthesizedExpression(paren) = &stmt.expression else {
                    panic!("expected parenthesized assignment");
                };
                let Expression::AssignmentExpression(assignment) = &paren.expression else {
                    panic!("expected assignment");
                };
                destructure_from_assignment(assignment, view)
            },
        )
        .expect("assignment destructure");
        assert!(matches!(site.hazard, DestructureHazard::Captures(_)));
    }

    #[test]
    fn test_suffix_fallback_value_read() {
        // No imports at all: the suffix heuristic supplies the evidence
        let read = with_last_statement("countSignal.value;", |stmt, view| {
            let Statement::ExpressionStatement(stmt) = stmt else {
                panic!("expected expression statement");
            };
            let Expression::StaticMemberExpression(member) = &stmt.expression else {
                panic!("expected member access");
            };
            value_read(member, view)
        })
        .expect("suffix-evidence value read");
        assert_eq!(read.base_name.as_str(), "countSignal");
    }
}
