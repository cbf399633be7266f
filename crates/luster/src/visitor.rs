//! AST visitor for policy-check execution.
//!
//! One budgeted depth-first walk per file. The visitor maintains the frame
//! stack, runs the forward binding-classification pass at each declarator,
//! computes access shapes, and dispatches typed rule hooks in source
//! order. Descent is restricted to the statement and expression shapes
//! matched below; there is no generic walk-every-property fallback, and
//! the budget is consulted before every node.

use crate::access;
use crate::bindings;
use crate::budget::{BudgetExceeded, OpCategory};
use crate::context::LintContext;
use crate::frames::{classify_function_name, FrameKind};
use crate::resolver::CreatorKind;
use crate::rule::Rule;
use compact_str::CompactString;
use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, BindingPattern, CallExpression,
    ChainElement, Class, ClassElement, Declaration, Expression, ExportDefaultDeclarationKind,
    ForStatementInit, ForStatementLeft, FormalParameters, Function, IdentifierReference,
    JSXAttributeItem, JSXAttributeValue, JSXChild, JSXElement, JSXExpressionContainer,
    JSXFragment, ObjectPropertyKind, Program, Statement, StaticMemberExpression,
    VariableDeclaration, VariableDeclarator,
};
use oxc_span::{GetSpan, Span};

type WalkResult = Result<(), BudgetExceeded>;

/// Visit the AST and run all checks.
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [Box<dyn Rule>],
    /// Span of the current top-level statement of the nearest function
    /// body, used to anchor statement-wrapping suggestions.
    top_stmt_span: Option<Span>,
    /// Nonzero while descending into the object of a member access
    member_base_depth: u32,
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [Box<dyn Rule>]) -> Self {
        Self {
            ctx,
            rules,
            top_stmt_span: None,
            member_base_depth: 0,
        }
    }

    /// Visit the object of a member access. A plain identifier base is a
    /// property access rather than a bare reference; anything else is a
    /// nested expression in member-base position.
    fn visit_member_object(&mut self, object: &Expression<'a>) -> WalkResult {
        if matches!(object, Expression::Identifier(_)) {
            return Ok(());
        }
        self.member_base_depth += 1;
        let result = self.visit_expression(object);
        self.member_base_depth -= 1;
        result
    }

    pub fn visit_program(&mut self, program: &Program<'a>) -> WalkResult {
        for stmt in program.body.iter() {
            self.visit_statement(stmt)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        match stmt {
            Statement::VariableDeclaration(decl) => self.visit_variable_declaration(decl)?,
            Statement::FunctionDeclaration(func) => {
                let name = func
                    .id
                    .as_ref()
                    .map(|id| CompactString::new(id.name.as_str()));
                self.visit_function(func, name, None)?;
            }
            Statement::ClassDeclaration(class) => self.visit_class(class)?,
            Statement::ExpressionStatement(stmt) => self.visit_expression(&stmt.expression)?,
            Statement::BlockStatement(block) => {
                for stmt in block.body.iter() {
                    self.visit_statement(stmt)?;
                }
            }
            Statement::IfStatement(stmt) => {
                self.visit_expression(&stmt.test)?;
                self.visit_statement(&stmt.consequent)?;
                if let Some(alternate) = &stmt.alternate {
                    self.visit_statement(alternate)?;
                }
            }
            Statement::ReturnStatement(stmt) => {
                if let Some(argument) = &stmt.argument {
                    self.visit_expression(argument)?;
                }
            }
            Statement::ForStatement(stmt) => {
                if let Some(init) = &stmt.init {
                    match init {
                        ForStatementInit::VariableDeclaration(decl) => {
                            self.visit_variable_declaration(decl)?;
                        }
                        _ => {
                            if let Some(expr) = init.as_expression() {
                                self.visit_expression(expr)?;
                            }
                        }
                    }
                }
                if let Some(test) = &stmt.test {
                    self.visit_expression(test)?;
                }
                if let Some(update) = &stmt.update {
                    self.visit_expression(update)?;
                }
                self.visit_statement(&stmt.body)?;
            }
            Statement::ForInStatement(stmt) => {
                if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
                    self.visit_variable_declaration(decl)?;
                }
                self.visit_expression(&stmt.right)?;
                self.visit_statement(&stmt.body)?;
            }
            Statement::ForOfStatement(stmt) => {
                if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
                    self.visit_variable_declaration(decl)?;
                }
                self.visit_expression(&stmt.right)?;
                self.visit_statement(&stmt.body)?;
            }
            Statement::WhileStatement(stmt) => {
                self.visit_expression(&stmt.test)?;
                self.visit_statement(&stmt.body)?;
            }
            Statement::DoWhileStatement(stmt) => {
                self.visit_statement(&stmt.body)?;
                self.visit_expression(&stmt.test)?;
            }
            Statement::SwitchStatement(stmt) => {
                self.visit_expression(&stmt.discriminant)?;
                for case in stmt.cases.iter() {
                    if let Some(test) = &case.test {
                        self.visit_expression(test)?;
                    }
                    for stmt in case.consequent.iter() {
                        self.visit_statement(stmt)?;
                    }
                }
            }
            Statement::TryStatement(stmt) => {
                for stmt in stmt.block.body.iter() {
                    self.visit_statement(stmt)?;
                }
                if let Some(handler) = &stmt.handler {
                    for stmt in handler.body.body.iter() {
                        self.visit_statement(stmt)?;
                    }
                }
                if let Some(finalizer) = &stmt.finalizer {
                    for stmt in finalizer.body.iter() {
                        self.visit_statement(stmt)?;
                    }
                }
            }
            Statement::ThrowStatement(stmt) => self.visit_expression(&stmt.argument)?,
            // The label name itself is never a use
            Statement::LabeledStatement(stmt) => self.visit_statement(&stmt.body)?,
            Statement::ExportNamedDeclaration(export) => {
                // Export specifiers are not uses; only the declaration is
                if let Some(declaration) = &export.declaration {
                    self.visit_declaration(declaration)?;
                }
            }
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    let name = func
                        .id
                        .as_ref()
                        .map(|id| CompactString::new(id.name.as_str()));
                    self.visit_function(func, name, None)?;
                }
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    self.visit_class(class)?;
                }
                other => {
                    if let Some(expr) = other.as_expression() {
                        self.visit_expression(expr)?;
                    }
                }
            },
            // Import specifiers and type declarations are not uses
            _ => {}
        }
        Ok(())
    }

    fn visit_declaration(&mut self, declaration: &Declaration<'a>) -> WalkResult {
        match declaration {
            Declaration::VariableDeclaration(decl) => self.visit_variable_declaration(decl),
            Declaration::FunctionDeclaration(func) => {
                let name = func
                    .id
                    .as_ref()
                    .map(|id| CompactString::new(id.name.as_str()));
                self.visit_function(func, name, None)
            }
            Declaration::ClassDeclaration(class) => self.visit_class(class),
            _ => Ok(()),
        }
    }

    fn visit_variable_declaration(&mut self, decl: &VariableDeclaration<'a>) -> WalkResult {
        for declarator in decl.declarations.iter() {
            self.visit_declarator(declarator)?;
        }
        Ok(())
    }

    fn visit_declarator(&mut self, declarator: &VariableDeclarator<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;

        // Forward classification pass: the declarator classifies before
        // anything downstream of it is visited.
        {
            let ctx = &mut *self.ctx;
            bindings::classify_declarator(
                &mut ctx.bindings,
                &ctx.imports,
                &ctx.options.signals,
                declarator,
                &mut ctx.budget,
            );
        }

        self.ctx.budget.record_op(OpCategory::AccessClassification);
        let site = {
            let view = self.ctx.classify_view();
            access::destructure_from_declarator(declarator, &view)
        };
        if let Some(site) = site {
            for rule in self.rules.iter() {
                self.ctx.current_rule = rule.meta().name;
                rule.check_destructure(self.ctx, &site);
            }
        }

        let Some(init) = &declarator.init else {
            return Ok(());
        };
        match access::unwrap_expression(init) {
            Expression::ArrowFunctionExpression(arrow) => {
                self.visit_arrow(arrow, binding_name(&declarator.id), None)?;
            }
            Expression::FunctionExpression(func) => {
                let name = func
                    .id
                    .as_ref()
                    .map(|id| CompactString::new(id.name.as_str()))
                    .or_else(|| binding_name(&declarator.id));
                self.visit_function(func, name, None)?;
            }
            // A bare identifier initializer is aliasing, not a read
            Expression::Identifier(_) => {}
            other => self.visit_expression(other)?,
        }
        Ok(())
    }

    fn visit_class(&mut self, class: &Class<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        for element in class.body.body.iter() {
            match element {
                // Member key positions are never uses
                ClassElement::MethodDefinition(method) => {
                    self.visit_function(&method.value, None, None)?;
                }
                ClassElement::PropertyDefinition(property) => {
                    if let Some(value) = &property.value {
                        self.visit_expression(value)?;
                    }
                }
                ClassElement::StaticBlock(block) => {
                    for stmt in block.body.iter() {
                        self.visit_statement(stmt)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn classify_name(&mut self, name: Option<&str>) -> FrameKind {
        self.ctx.budget.record_op(OpCategory::ContextQuery);
        let ctx = &*self.ctx;
        classify_function_name(name, &|candidate| ctx.is_hook_name(candidate))
    }

    fn visit_function(
        &mut self,
        func: &Function<'a>,
        assigned_name: Option<CompactString>,
        kind_override: Option<FrameKind>,
    ) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        let name = func
            .id
            .as_ref()
            .map(|id| CompactString::new(id.name.as_str()))
            .or(assigned_name);
        let kind = kind_override.unwrap_or_else(|| self.classify_name(name.as_deref()));
        self.ctx.frames.push_function(kind, name, func.span);

        self.visit_params(&func.params)?;
        if let Some(body) = &func.body {
            let insert_offset = body
                .directives
                .last()
                .map(|directive| directive.span.end)
                .unwrap_or(body.span.start + 1);
            if let Some(frame) = self.ctx.frames.current_mut() {
                frame.body_span = body.span;
                frame.insert_offset = Some(insert_offset);
            }
            let saved = self.top_stmt_span.take();
            for stmt in body.statements.iter() {
                self.top_stmt_span = Some(stmt.span());
                self.visit_statement(stmt)?;
            }
            self.top_stmt_span = saved;
        }

        if let Some(frame) = self.ctx.frames.pop_function() {
            for rule in self.rules.iter() {
                self.ctx.current_rule = rule.meta().name;
                rule.exit_function(self.ctx, &frame);
            }
        }
        Ok(())
    }

    fn visit_arrow(
        &mut self,
        arrow: &ArrowFunctionExpression<'a>,
        assigned_name: Option<CompactString>,
        kind_override: Option<FrameKind>,
    ) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        let kind = kind_override.unwrap_or_else(|| self.classify_name(assigned_name.as_deref()));
        self.ctx.frames.push_function(kind, assigned_name, arrow.span);

        self.visit_params(&arrow.params)?;
        if arrow.expression {
            // Concise body: a single expression, no insertion point
            if let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() {
                self.visit_expression(&stmt.expression)?;
            }
        } else {
            let insert_offset = arrow
                .body
                .directives
                .last()
                .map(|directive| directive.span.end)
                .unwrap_or(arrow.body.span.start + 1);
            if let Some(frame) = self.ctx.frames.current_mut() {
                frame.body_span = arrow.body.span;
                frame.insert_offset = Some(insert_offset);
            }
            let saved = self.top_stmt_span.take();
            for stmt in arrow.body.statements.iter() {
                self.top_stmt_span = Some(stmt.span());
                self.visit_statement(stmt)?;
            }
            self.top_stmt_span = saved;
        }

        if let Some(frame) = self.ctx.frames.pop_function() {
            for rule in self.rules.iter() {
                self.ctx.current_rule = rule.meta().name;
                rule.exit_function(self.ctx, &frame);
            }
        }
        Ok(())
    }

    fn visit_params(&mut self, params: &FormalParameters<'a>) -> WalkResult {
        for param in params.items.iter() {
            self.visit_pattern_defaults(&param.pattern)?;
        }
        Ok(())
    }

    /// Default-value expressions inside binding patterns are uses; the
    /// bound names themselves are not.
    fn visit_pattern_defaults(&mut self, pattern: &BindingPattern<'a>) -> WalkResult {
        match pattern {
            BindingPattern::AssignmentPattern(assignment) => {
                self.visit_expression(&assignment.right)?;
                self.visit_pattern_defaults(&assignment.left)?;
            }
            BindingPattern::ObjectPattern(object) => {
                for property in object.properties.iter() {
                    self.visit_pattern_defaults(&property.value)?;
                }
                if let Some(rest) = &object.rest {
                    self.visit_pattern_defaults(&rest.argument)?;
                }
            }
            BindingPattern::ArrayPattern(array) => {
                for element in array.elements.iter().flatten() {
                    self.visit_pattern_defaults(element)?;
                }
                if let Some(rest) = &array.rest {
                    self.visit_pattern_defaults(&rest.argument)?;
                }
            }
            BindingPattern::BindingIdentifier(_) => {}
        }
        Ok(())
    }

    fn visit_expression(&mut self, expr: &Expression<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        match expr {
            Expression::Identifier(ident) => self.handle_identifier(ident),
            Expression::StaticMemberExpression(member) => self.visit_static_member(member)?,
            Expression::ComputedMemberExpression(member) => {
                // A computed key expression is a use; the base is not.
                self.visit_member_object(&member.object)?;
                self.visit_expression(&member.expression)?;
            }
            Expression::PrivateFieldExpression(member) => {
                self.visit_member_object(&member.object)?;
            }
            Expression::CallExpression(call) => self.visit_call(call)?,
            Expression::NewExpression(call) => {
                if !matches!(&call.callee, Expression::Identifier(_)) {
                    self.visit_expression(&call.callee)?;
                }
                for argument in call.arguments.iter() {
                    self.visit_argument(argument)?;
                }
            }
            Expression::ChainExpression(chain) => match &chain.expression {
                ChainElement::CallExpression(call) => self.visit_call(call)?,
                ChainElement::StaticMemberExpression(member) => {
                    self.visit_static_member(member)?;
                }
                ChainElement::ComputedMemberExpression(member) => {
                    self.visit_member_object(&member.object)?;
                    self.visit_expression(&member.expression)?;
                }
                ChainElement::PrivateFieldExpression(member) => {
                    self.visit_member_object(&member.object)?;
                }
                ChainElement::TSNonNullExpression(inner) => {
                    self.visit_expression(&inner.expression)?;
                }
            },
            Expression::AssignmentExpression(assignment) => {
                self.ctx.budget.record_op(OpCategory::AccessClassification);
                let write = {
                    let view = self.ctx.classify_view();
                    access::write_from_assignment(assignment, &view)
                };
                if let Some(write) = write {
                    self.ctx
                        .frames
                        .record_write(write.name.clone(), write.span, self.top_stmt_span);
                    for rule in self.rules.iter() {
                        self.ctx.current_rule = rule.meta().name;
                        rule.check_signal_write(self.ctx, &write);
                    }
                } else {
                    let site = {
                        let view = self.ctx.classify_view();
                        access::destructure_from_assignment(assignment, &view)
                    };
                    if let Some(site) = site {
                        for rule in self.rules.iter() {
                            self.ctx.current_rule = rule.meta().name;
                            rule.check_destructure(self.ctx, &site);
                        }
                    }
                }
                self.visit_expression(&assignment.right)?;
            }
            Expression::UpdateExpression(update) => {
                self.ctx.budget.record_op(OpCategory::AccessClassification);
                let write = {
                    let view = self.ctx.classify_view();
                    access::write_from_update(update, &view)
                };
                if let Some(write) = write {
                    self.ctx
                        .frames
                        .record_write(write.name.clone(), write.span, self.top_stmt_span);
                    for rule in self.rules.iter() {
                        self.ctx.current_rule = rule.meta().name;
                        rule.check_signal_write(self.ctx, &write);
                    }
                }
            }
            Expression::ConditionalExpression(conditional) => {
                self.visit_expression(&conditional.test)?;
                self.visit_expression(&conditional.consequent)?;
                self.visit_expression(&conditional.alternate)?;
            }
            Expression::LogicalExpression(logical) => {
                self.visit_expression(&logical.left)?;
                self.visit_expression(&logical.right)?;
            }
            Expression::BinaryExpression(binary) => {
                self.visit_expression(&binary.left)?;
                self.visit_expression(&binary.right)?;
            }
            Expression::UnaryExpression(unary) => self.visit_expression(&unary.argument)?,
            Expression::AwaitExpression(await_expr) => {
                self.visit_expression(&await_expr.argument)?;
            }
            Expression::SequenceExpression(sequence) => {
                for expr in sequence.expressions.iter() {
                    self.visit_expression(expr)?;
                }
            }
            Expression::ParenthesizedExpression(paren) => {
                self.visit_expression(&paren.expression)?;
            }
            Expression::TSAsExpression(assertion) => {
                self.visit_expression(&assertion.expression)?;
            }
            Expression::TSSatisfiesExpression(assertion) => {
                self.visit_expression(&assertion.expression)?;
            }
            Expression::TSNonNullExpression(assertion) => {
                self.visit_expression(&assertion.expression)?;
            }
            Expression::TSTypeAssertion(assertion) => {
                self.visit_expression(&assertion.expression)?;
            }
            Expression::ObjectExpression(object) => {
                for property in object.properties.iter() {
                    match property {
                        ObjectPropertyKind::ObjectProperty(property) => {
                            // Static keys are member key positions; only
                            // computed keys contain expressions
                            if property.computed {
                                if let Some(key) = property.key.as_expression() {
                                    self.visit_expression(key)?;
                                }
                            }
                            self.visit_expression(&property.value)?;
                        }
                        ObjectPropertyKind::SpreadProperty(spread) => {
                            self.visit_expression(&spread.argument)?;
                        }
                    }
                }
            }
            Expression::ArrayExpression(array) => {
                for element in array.elements.iter() {
                    match element {
                        oxc_ast::ast::ArrayExpressionElement::SpreadElement(spread) => {
                            self.visit_expression(&spread.argument)?;
                        }
                        oxc_ast::ast::ArrayExpressionElement::Elision(_) => {}
                        _ => {
                            if let Some(expr) = element.as_expression() {
                                self.visit_expression(expr)?;
                            }
                        }
                    }
                }
            }
            Expression::ArrowFunctionExpression(arrow) => {
                self.visit_arrow(arrow, None, None)?;
            }
            Expression::FunctionExpression(func) => {
                self.visit_function(func, None, None)?;
            }
            Expression::ClassExpression(class) => self.visit_class(class)?,
            Expression::TemplateLiteral(template) => {
                for expr in template.expressions.iter() {
                    self.visit_expression(expr)?;
                }
            }
            Expression::TaggedTemplateExpression(tagged) => {
                if !matches!(&tagged.tag, Expression::Identifier(_)) {
                    self.visit_expression(&tagged.tag)?;
                }
                for expr in tagged.quasi.expressions.iter() {
                    self.visit_expression(expr)?;
                }
            }
            Expression::JSXElement(element) => self.visit_jsx_element(element)?,
            Expression::JSXFragment(fragment) => self.visit_jsx_fragment(fragment)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_identifier(&mut self, ident: &IdentifierReference<'a>) {
        self.ctx.budget.record_op(OpCategory::PatternMatch);
        let name = ident.name.as_str();
        if !self.ctx.is_signal_name(name) {
            return;
        }
        self.ctx
            .frames
            .record_read(CompactString::new(name), ident.span);
        for rule in self.rules.iter() {
            self.ctx.current_rule = rule.meta().name;
            rule.check_bare_reference(self.ctx, name, ident.span);
        }
    }

    fn visit_static_member(&mut self, member: &StaticMemberExpression<'a>) -> WalkResult {
        self.ctx.budget.record_op(OpCategory::AccessClassification);
        let read = {
            let view = self.ctx.classify_view();
            access::value_read(member, &view)
        };
        if let Some(mut read) = read {
            read.in_member_chain = self.member_base_depth > 0;
            self.ctx.frames.record_read(read.base_name.clone(), read.span);
            for rule in self.rules.iter() {
                self.ctx.current_rule = rule.meta().name;
                rule.check_value_read(self.ctx, &read);
            }
            return Ok(());
        }
        // Unknown property access: an identifier base is not a bare
        // reference, and a non-invoked peek property stays unclassified
        self.visit_member_object(&member.object)
    }

    fn visit_call(&mut self, call: &CallExpression<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        self.ctx.budget.record_op(OpCategory::AccessClassification);

        let peek = {
            let view = self.ctx.classify_view();
            access::peek_read(call, &view)
        };
        if let Some(peek) = peek {
            for rule in self.rules.iter() {
                self.ctx.current_rule = rule.meta().name;
                rule.check_peek_read(self.ctx, &peek);
            }
            return self.visit_call_arguments(call, None);
        }

        let kind = self
            .ctx
            .imports
            .callee_kind(&call.callee, &self.ctx.options.signals);
        match kind {
            Some(CreatorKind::Subscription) => {
                self.ctx.frames.record_subscription_call(call.span);
                self.visit_call_arguments(call, None)
            }
            Some(CreatorKind::Batch) => {
                self.ctx.frames.enter_batch();
                let result = self.visit_call_arguments(call, None);
                self.ctx.frames.exit_batch();
                result
            }
            Some(CreatorKind::Effect) => self.visit_call_arguments(call, Some(FrameKind::Effect)),
            Some(CreatorKind::Derived) => {
                self.visit_call_arguments(call, Some(FrameKind::Derivation))
            }
            Some(CreatorKind::Signal) | None => {
                // A plain identifier callee is a call position, not a value
                // use; complex callees carry nested expressions
                match &call.callee {
                    Expression::Identifier(_) => {}
                    Expression::StaticMemberExpression(member) => {
                        self.visit_member_object(&member.object)?;
                    }
                    other => self.visit_expression(other)?,
                }
                let is_hook_call = matches!(&call.callee, Expression::Identifier(id)
                    if self.ctx.options.hook_call_names.iter().any(|hook| hook == id.name.as_str()));
                if is_hook_call {
                    self.ctx.frames.enter_hook_call();
                    let result = self.visit_call_arguments(call, None);
                    self.ctx.frames.exit_hook_call();
                    result
                } else {
                    self.visit_call_arguments(call, None)
                }
            }
        }
    }

    fn visit_call_arguments(
        &mut self,
        call: &CallExpression<'a>,
        callback_kind: Option<FrameKind>,
    ) -> WalkResult {
        for argument in call.arguments.iter() {
            match argument {
                Argument::SpreadElement(spread) => self.visit_expression(&spread.argument)?,
                _ => {
                    let Some(expr) = argument.as_expression() else {
                        continue;
                    };
                    if let Some(kind) = callback_kind {
                        match access::unwrap_expression(expr) {
                            Expression::ArrowFunctionExpression(arrow) => {
                                self.visit_arrow(arrow, None, Some(kind))?;
                                continue;
                            }
                            Expression::FunctionExpression(func) => {
                                self.visit_function(func, None, Some(kind))?;
                                continue;
                            }
                            _ => {}
                        }
                    }
                    self.visit_expression(expr)?;
                }
            }
        }
        Ok(())
    }

    fn visit_argument(&mut self, argument: &Argument<'a>) -> WalkResult {
        match argument {
            Argument::SpreadElement(spread) => self.visit_expression(&spread.argument),
            _ => match argument.as_expression() {
                Some(expr) => self.visit_expression(expr),
                None => Ok(()),
            },
        }
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        self.ctx.frames.enter_markup();
        // Tag and attribute name positions are never uses
        for item in element.opening_element.attributes.iter() {
            match item {
                JSXAttributeItem::Attribute(attribute) => {
                    if let Some(value) = &attribute.value {
                        match value {
                            JSXAttributeValue::ExpressionContainer(container) => {
                                self.visit_jsx_container(container)?;
                            }
                            JSXAttributeValue::Element(child) => self.visit_jsx_element(child)?,
                            JSXAttributeValue::Fragment(fragment) => {
                                self.visit_jsx_fragment(fragment)?;
                            }
                            JSXAttributeValue::StringLiteral(_) => {}
                        }
                    }
                }
                JSXAttributeItem::SpreadAttribute(spread) => {
                    self.visit_expression(&spread.argument)?;
                }
            }
        }
        for child in element.children.iter() {
            self.visit_jsx_child(child)?;
        }
        self.ctx.frames.exit_markup();
        Ok(())
    }

    fn visit_jsx_fragment(&mut self, fragment: &JSXFragment<'a>) -> WalkResult {
        self.ctx.budget.continue_walk()?;
        self.ctx.frames.enter_markup();
        for child in fragment.children.iter() {
            self.visit_jsx_child(child)?;
        }
        self.ctx.frames.exit_markup();
        Ok(())
    }

    fn visit_jsx_child(&mut self, child: &JSXChild<'a>) -> WalkResult {
        match child {
            JSXChild::Element(element) => self.visit_jsx_element(element),
            JSXChild::Fragment(fragment) => self.visit_jsx_fragment(fragment),
            JSXChild::ExpressionContainer(container) => self.visit_jsx_container(container),
            JSXChild::Spread(spread) => self.visit_expression(&spread.expression),
            JSXChild::Text(_) => Ok(()),
        }
    }

    fn visit_jsx_container(&mut self, container: &JSXExpressionContainer<'a>) -> WalkResult {
        if let Some(expr) = container.expression.as_expression() {
            self.visit_expression(expr)?;
        }
        Ok(())
    }
}

fn binding_name(pattern: &BindingPattern<'_>) -> Option<CompactString> {
    match pattern {
        BindingPattern::BindingIdentifier(id) => Some(CompactString::new(id.name.as_str())),
        _ => None,
    }
}
