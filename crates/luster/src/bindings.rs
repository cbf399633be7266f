//! Binding classification.
//!
//! A single forward pass over variable declarators assigns each local name
//! one of: definitely-signal, container-with-signals-at-keys, or unknown
//! (unknown names are simply absent from the table). Classification is
//! monotonic within a file: once a name is Signal or a container it is
//! never downgraded, and import-based evidence always outranks the naming
//! heuristic because the table is consulted first.
//!
//! The pass is forward-only: a use that precedes its classifying
//! declaration (hoisting) stays unresolved. That is a deliberate
//! first-pass design, not something to silently patch with a second pass.

use crate::access::unwrap_expression;
use crate::budget::{BudgetState, OpCategory};
use crate::config::SignalModuleConfig;
use crate::resolver::{CreatorKind, SignalImports};
use compact_str::CompactString;
use oxc_ast::ast::{
    ArrayExpressionElement, BindingPattern, Expression, ObjectPropertyKind, PropertyKey,
    VariableDeclarator,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A key or index inside a container literal whose value is signal-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HazardKey {
    Name(CompactString),
    Index(u32),
}

impl fmt::Display for HazardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// What a local name is known to denote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Definitely a signal (or derived value read through the same accessor)
    Signal,
    /// A container literal embedding signals at the given keys/indices
    ContainerWithSignal(FxHashSet<HazardKey>),
}

/// Per-file classification table. Constructed empty, filled by the forward
/// pass, discarded at file end.
#[derive(Debug, Default)]
pub struct BindingTable {
    names: FxHashMap<CompactString, Classification>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification, respecting monotonicity: an already
    /// classified name keeps its first classification.
    fn record(&mut self, name: &str, classification: Classification) {
        self.names
            .entry(CompactString::new(name))
            .or_insert(classification);
    }

    #[inline]
    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.names.get(name)
    }

    /// Is this name classified as a plain signal?
    #[inline]
    pub fn is_signal(&self, name: &str) -> bool {
        matches!(self.names.get(name), Some(Classification::Signal))
    }

    /// Hazard keys when the name is a signal-bearing container.
    #[inline]
    pub fn container_hazards(&self, name: &str) -> Option<&FxHashSet<HazardKey>> {
        match self.names.get(name) {
            Some(Classification::ContainerWithSignal(keys)) => Some(keys),
            _ => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Classify one variable declarator in source order.
///
/// Only simple identifier bindings classify; destructuring declarators are
/// the access matcher's concern, not a classification source.
pub fn classify_declarator(
    table: &mut BindingTable,
    imports: &SignalImports,
    config: &SignalModuleConfig,
    declarator: &VariableDeclarator<'_>,
    budget: &mut BudgetState,
) {
    let BindingPattern::BindingIdentifier(id) = &declarator.id else {
        return;
    };
    let Some(init) = &declarator.init else {
        return;
    };
    if !budget.record_op(OpCategory::BindingClassification) {
        return;
    }

    let name = id.name.as_str();
    match unwrap_expression(init) {
        // const s = signal(0), also aliased and namespaced creator forms
        Expression::CallExpression(call) => {
            if creates_signal_value(imports.callee_kind(&call.callee, config)) {
                budget.charge_bytes(entry_cost(name));
                table.record(name, Classification::Signal);
            }
        }

        // const box = { count: signal(0), label: "x" }
        // Inspected at the top level only; nested literals stay opaque.
        Expression::ObjectExpression(object) => {
            let mut hazards = FxHashSet::default();
            for property in object.properties.iter() {
                let ObjectPropertyKind::ObjectProperty(property) = property else {
                    continue;
                };
                let Some(key) = static_property_key(&property.key) else {
                    continue;
                };
                if is_signal_valued(&property.value, table, imports, config) {
                    hazards.insert(HazardKey::Name(CompactString::new(key)));
                }
            }
            if !hazards.is_empty() {
                budget.charge_bytes(entry_cost(name) + hazards.len() as u64 * 16);
                table.record(name, Classification::ContainerWithSignal(hazards));
            }
        }

        // const pair = [signal(0), other]
        Expression::ArrayExpression(array) => {
            let mut hazards = FxHashSet::default();
            for (index, element) in array.elements.iter().enumerate() {
                if matches!(element, ArrayExpressionElement::SpreadElement(_)) {
                    continue;
                }
                let Some(expr) = element.as_expression() else {
                    continue;
                };
                if is_signal_valued(expr, table, imports, config) {
                    hazards.insert(HazardKey::Index(index as u32));
                }
            }
            if !hazards.is_empty() {
                budget.charge_bytes(entry_cost(name) + hazards.len() as u64 * 16);
                table.record(name, Classification::ContainerWithSignal(hazards));
            }
        }

        // const alias = existing — propagate transitively (forward pass)
        Expression::Identifier(source) => {
            if let Some(classification) = table.classification(source.name.as_str()) {
                let classification = classification.clone();
                budget.charge_bytes(entry_cost(name));
                table.record(name, classification);
            }
        }

        _ => {}
    }
}

/// Is this expression a signal value at container-literal top level: a
/// direct creator call or an identifier already classified?
fn is_signal_valued(
    value: &Expression<'_>,
    table: &BindingTable,
    imports: &SignalImports,
    config: &SignalModuleConfig,
) -> bool {
    match unwrap_expression(value) {
        Expression::CallExpression(call) => {
            creates_signal_value(imports.callee_kind(&call.callee, config))
        }
        Expression::Identifier(ident) => table.classification(ident.name.as_str()).is_some(),
        _ => false,
    }
}

fn creates_signal_value(kind: Option<CreatorKind>) -> bool {
    matches!(kind, Some(CreatorKind::Signal | CreatorKind::Derived))
}

/// Static key of an object property, when statically known.
pub(crate) fn static_property_key<'a, 'b>(key: &'b PropertyKey<'a>) -> Option<&'b str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(literal) => Some(literal.value.as_str()),
        _ => None,
    }
}

fn entry_cost(name: &str) -> u64 {
    (std::mem::size_of::<(CompactString, Classification)>() + name.len()) as u64
}
