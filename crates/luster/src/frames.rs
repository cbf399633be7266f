//! Context frames.
//!
//! One stack, maintained by the single traversal, answers every positional
//! question the checks ask: inside markup, inside a framework hook call,
//! inside a batch call, what the nearest enclosing named function is, and
//! whether the node sits in an effect or pure-derivation callback. Checks
//! consult this shared object instead of re-walking ancestors themselves.

use compact_str::CompactString;
use oxc_span::Span;
use smallvec::SmallVec;

/// What kind of code region a function frame represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Named function whose name starts with an uppercase letter
    Component,
    /// Named function matching the hook-name pattern
    Hook,
    /// Any other function
    Plain,
    /// Callback passed to a subscription-effect creator
    Effect,
    /// Callback passed to a derived-value creator
    Derivation,
}

/// One recorded signal read inside a frame.
#[derive(Debug, Clone)]
pub struct ReadRecord {
    pub name: CompactString,
    pub span: Span,
    pub in_markup: bool,
}

/// One recorded signal write inside a frame.
#[derive(Debug, Clone)]
pub struct WriteRecord {
    pub name: CompactString,
    pub span: Span,
    /// Span of the enclosing top-level statement of the function body,
    /// when the write sits directly under one
    pub stmt_span: Option<Span>,
    /// Whether the write happened under a batch call
    pub in_batch: bool,
}

/// Stack entry pushed on entering a function body, popped exactly once on
/// exit.
#[derive(Debug, Clone)]
pub struct FunctionFrame {
    pub kind: FrameKind,
    /// Declaration name, or the variable the function is assigned to
    pub name: Option<CompactString>,
    /// The whole function expression/declaration
    pub span: Span,
    /// The function body
    pub body_span: Span,
    /// Offset where a statement can be inserted at the top of the body
    /// (after the directive prologue); None for expression-bodied arrows
    pub insert_offset: Option<u32>,
    /// Markup depth at the moment this frame was entered
    pub markup_depth_at_entry: u32,
    /// Signal reads observed directly in this frame
    pub reads: Vec<ReadRecord>,
    /// Signal value writes observed directly in this frame
    pub writes: Vec<WriteRecord>,
    /// Subscription-hook calls observed directly in this frame
    pub subscription_calls: SmallVec<[Span; 1]>,
}

impl FunctionFrame {
    pub fn is_component(&self) -> bool {
        self.kind == FrameKind::Component
    }

    pub fn is_hook(&self) -> bool {
        self.kind == FrameKind::Hook
    }
}

/// Classify a function by its name: components capitalize, hooks match the
/// configured pattern. The fallback check (used when the configured
/// pattern is malformed) is `use` followed by an uppercase letter.
pub fn classify_function_name(
    name: Option<&str>,
    hook_matcher: &dyn Fn(&str) -> bool,
) -> FrameKind {
    match name {
        Some(name) if name.chars().next().is_some_and(char::is_uppercase) => FrameKind::Component,
        Some(name) if hook_matcher(name) => FrameKind::Hook,
        _ => FrameKind::Plain,
    }
}

/// Built-in hook-name check: `use` + uppercase.
pub fn default_hook_name_check(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// The per-file frame stack with region depth counters.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<FunctionFrame>,
    markup_depth: u32,
    hook_call_depth: u32,
    batch_depth: u32,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_function(&mut self, kind: FrameKind, name: Option<CompactString>, span: Span) {
        self.frames.push(FunctionFrame {
            kind,
            name,
            span,
            body_span: span,
            insert_offset: None,
            markup_depth_at_entry: self.markup_depth,
            reads: Vec::new(),
            writes: Vec::new(),
            subscription_calls: SmallVec::new(),
        });
    }

    /// Pop the innermost frame. Panics in debug builds when unbalanced;
    /// the stack is never observed negative.
    pub fn pop_function(&mut self) -> Option<FunctionFrame> {
        debug_assert!(!self.frames.is_empty(), "unbalanced function frames");
        self.frames.pop()
    }

    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut FunctionFrame> {
        self.frames.last_mut()
    }

    #[inline]
    pub fn current(&self) -> Option<&FunctionFrame> {
        self.frames.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    // Markup regions nest; a depth counter composes correctly.

    #[inline]
    pub fn enter_markup(&mut self) {
        self.markup_depth += 1;
    }

    #[inline]
    pub fn exit_markup(&mut self) {
        debug_assert!(self.markup_depth > 0, "unbalanced markup region");
        self.markup_depth = self.markup_depth.saturating_sub(1);
    }

    #[inline]
    pub fn in_markup(&self) -> bool {
        self.markup_depth > 0
    }

    #[inline]
    pub fn markup_depth(&self) -> u32 {
        self.markup_depth
    }

    #[inline]
    pub fn enter_hook_call(&mut self) {
        self.hook_call_depth += 1;
    }

    #[inline]
    pub fn exit_hook_call(&mut self) {
        debug_assert!(self.hook_call_depth > 0, "unbalanced hook call");
        self.hook_call_depth = self.hook_call_depth.saturating_sub(1);
    }

    /// Inside the argument list of a recognized framework hook call?
    #[inline]
    pub fn in_hook_call(&self) -> bool {
        self.hook_call_depth > 0
    }

    #[inline]
    pub fn enter_batch(&mut self) {
        self.batch_depth += 1;
    }

    #[inline]
    pub fn exit_batch(&mut self) {
        debug_assert!(self.batch_depth > 0, "unbalanced batch call");
        self.batch_depth = self.batch_depth.saturating_sub(1);
    }

    #[inline]
    pub fn in_batch(&self) -> bool {
        self.batch_depth > 0
    }

    /// Inside a pure-derivation callback (at any nesting depth)?
    pub fn in_derivation(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.kind == FrameKind::Derivation)
    }

    /// Inside a subscription-effect callback (at any nesting depth)?
    pub fn in_effect(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.kind == FrameKind::Effect)
    }

    /// The nearest enclosing named function, skipping anonymous callbacks.
    pub fn nearest_named(&self) -> Option<&FunctionFrame> {
        self.frames.iter().rev().find(|frame| frame.name.is_some())
    }

    /// Record a signal read in the innermost frame.
    pub fn record_read(&mut self, name: CompactString, span: Span) {
        let in_markup = self.in_markup();
        if let Some(frame) = self.frames.last_mut() {
            frame.reads.push(ReadRecord {
                name,
                span,
                in_markup,
            });
        }
    }

    /// Record a signal write in the innermost frame.
    pub fn record_write(&mut self, name: CompactString, span: Span, stmt_span: Option<Span>) {
        let in_batch = self.in_batch();
        if let Some(frame) = self.frames.last_mut() {
            frame.writes.push(WriteRecord {
                name,
                span,
                stmt_span,
                in_batch,
            });
        }
    }

    /// Record a subscription-hook call in the innermost frame.
    pub fn record_subscription_call(&mut self, span: Span) {
        if let Some(frame) = self.frames.last_mut() {
            frame.subscription_calls.push(span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_function_name() {
        let matcher = |name: &str| default_hook_name_check(name);
        assert_eq!(
            classify_function_name(Some("Counter"), &matcher),
            FrameKind::Component
        );
        assert_eq!(
            classify_function_name(Some("useCounter"), &matcher),
            FrameKind::Hook
        );
        assert_eq!(
            classify_function_name(Some("useful"), &matcher),
            FrameKind::Plain
        );
        assert_eq!(
            classify_function_name(Some("render"), &matcher),
            FrameKind::Plain
        );
        assert_eq!(classify_function_name(None, &matcher), FrameKind::Plain);
    }

    #[test]
    fn test_default_hook_name_check() {
        assert!(default_hook_name_check("useCounter"));
        assert!(default_hook_name_check("useX"));
        assert!(!default_hook_name_check("use"));
        assert!(!default_hook_name_check("user"));
        assert!(!default_hook_name_check("setup"));
    }

    #[test]
    fn test_nested_markup_depth_composes() {
        let mut stack = FrameStack::new();
        assert!(!stack.in_markup());
        stack.enter_markup();
        stack.enter_markup();
        stack.exit_markup();
        assert!(stack.in_markup());
        stack.exit_markup();
        assert!(!stack.in_markup());
    }

    #[test]
    fn test_nearest_named_skips_anonymous() {
        let mut stack = FrameStack::new();
        stack.push_function(
            FrameKind::Component,
            Some("Counter".into()),
            Span::new(0, 100),
        );
        stack.push_function(FrameKind::Plain, None, Span::new(10, 50));
        let named = stack.nearest_named().expect("named frame");
        assert_eq!(named.name.as_deref(), Some("Counter"));
        assert!(named.is_component());
    }

    #[test]
    fn test_derivation_query_spans_nested_frames() {
        let mut stack = FrameStack::new();
        stack.push_function(FrameKind::Derivation, None, Span::new(0, 100));
        stack.push_function(FrameKind::Plain, Some("inner".into()), Span::new(10, 50));
        assert!(stack.in_derivation());
        stack.pop_function();
        stack.pop_function();
        assert!(!stack.in_derivation());
    }

    #[test]
    fn test_records_go_to_innermost_frame() {
        let mut stack = FrameStack::new();
        stack.push_function(
            FrameKind::Component,
            Some("Counter".into()),
            Span::new(0, 100),
        );
        stack.push_function(FrameKind::Plain, None, Span::new(10, 50));
        stack.record_read("countSignal".into(), Span::new(20, 31));
        let inner = stack.pop_function().unwrap();
        assert_eq!(inner.reads.len(), 1);
        let outer = stack.pop_function().unwrap();
        assert!(outer.reads.is_empty());
    }

    #[test]
    fn test_write_records_batch_state() {
        let mut stack = FrameStack::new();
        stack.push_function(FrameKind::Plain, None, Span::new(0, 100));
        stack.record_write("a".into(), Span::new(5, 10), None);
        stack.enter_batch();
        stack.record_write("b".into(), Span::new(20, 25), None);
        stack.exit_batch();
        let frame = stack.pop_function().unwrap();
        assert!(!frame.writes[0].in_batch);
        assert!(frame.writes[1].in_batch);
    }
}
