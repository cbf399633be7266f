//! Per-file analysis budget.
//!
//! A `Budget` is the immutable cap configuration; `BudgetState` is the
//! mutable counter set created at analysis start and discarded at file end.
//! Exhaustion is sticky: once any cap trips, `continue_walk` keeps failing
//! for the rest of the file.

use crate::config::BudgetOptions;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Named operation categories with individual caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum OpCategory {
    ImportResolution = 0,
    BindingClassification = 1,
    AccessClassification = 2,
    ContextQuery = 3,
    PatternMatch = 4,
}

impl OpCategory {
    pub const COUNT: usize = 5;

    /// The camelCase key used in `perOperationCaps` configuration.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ImportResolution => "importResolution",
            Self::BindingClassification => "bindingClassification",
            Self::AccessClassification => "accessClassification",
            Self::ContextQuery => "contextQuery",
            Self::PatternMatch => "patternMatch",
        }
    }

    const ALL: [Self; Self::COUNT] = [
        Self::ImportResolution,
        Self::BindingClassification,
        Self::AccessClassification,
        Self::ContextQuery,
        Self::PatternMatch,
    ];
}

/// The distinguishable over-budget condition.
///
/// This is the only error the traversal runtime intentionally catches
/// broadly; everything else propagates to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetExceeded {
    #[error("node budget of {max} nodes exhausted")]
    Nodes { max: u32 },
    #[error("time budget of {max_ms}ms exhausted after {elapsed_ms}ms")]
    Time { max_ms: u64, elapsed_ms: u64 },
    #[error("memory budget of {max} bytes exhausted")]
    Memory { max: u64 },
    #[error("operation cap for {category} exhausted")]
    Operation { category: &'static str },
}

/// Immutable cap configuration for one check run.
#[derive(Debug, Clone)]
pub struct Budget {
    max_nodes: u32,
    max_time: Option<Duration>,
    max_memory_bytes: Option<u64>,
    op_caps: [Option<u32>; OpCategory::COUNT],
}

impl Budget {
    pub fn from_options(options: &BudgetOptions) -> Self {
        let mut op_caps = [None; OpCategory::COUNT];
        for category in OpCategory::ALL {
            if let Some(cap) = options.per_operation_caps.get(category.key()) {
                op_caps[category as usize] = Some(*cap);
            }
        }
        Self {
            max_nodes: options.max_nodes,
            max_time: options.max_time_ms.map(Duration::from_millis),
            max_memory_bytes: options.max_memory_bytes,
            op_caps,
        }
    }

    #[inline]
    pub fn max_nodes(&self) -> u32 {
        self.max_nodes
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::from_options(&BudgetOptions::default())
    }
}

/// Mutable running counters for one file's analysis.
///
/// All counters are monotonically non-decreasing.
pub struct BudgetState {
    budget: Budget,
    started: Instant,
    nodes: u32,
    bytes: u64,
    ops: [u32; OpCategory::COUNT],
    exhausted: Option<BudgetExceeded>,
}

impl BudgetState {
    /// How often (in visited nodes) the wall clock is consulted.
    const TIME_CHECK_INTERVAL: u32 = 64;

    pub fn new(budget: Budget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            nodes: 0,
            bytes: 0,
            ops: [0; OpCategory::COUNT],
            exhausted: None,
        }
    }

    /// Consume one node of budget.
    ///
    /// Must be called before each node visit and before any expensive
    /// sub-analysis. Fails on the call that processes the first node past
    /// the cap, and on every call after any cap has tripped.
    pub fn continue_walk(&mut self) -> Result<(), BudgetExceeded> {
        if let Some(exceeded) = &self.exhausted {
            return Err(exceeded.clone());
        }
        self.nodes += 1;
        if self.nodes > self.budget.max_nodes {
            return Err(self.exhaust(BudgetExceeded::Nodes {
                max: self.budget.max_nodes,
            }));
        }
        if self.nodes % Self::TIME_CHECK_INTERVAL == 0 {
            if let Some(max_time) = self.budget.max_time {
                let elapsed = self.started.elapsed();
                if elapsed > max_time {
                    return Err(self.exhaust(BudgetExceeded::Time {
                        max_ms: max_time.as_millis() as u64,
                        elapsed_ms: elapsed.as_millis() as u64,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Record one operation in a named category.
    ///
    /// Returns false once the category cap (or any earlier cap) has
    /// tripped; callers abstain from the operation in that case and the
    /// next `continue_walk` call stops the traversal.
    pub fn record_op(&mut self, category: OpCategory) -> bool {
        if self.exhausted.is_some() {
            return false;
        }
        let index = category as usize;
        self.ops[index] += 1;
        if let Some(cap) = self.budget.op_caps[index] {
            if self.ops[index] > cap {
                self.exhaust(BudgetExceeded::Operation {
                    category: category.key(),
                });
                return false;
            }
        }
        true
    }

    /// Charge approximate memory use against the budget.
    pub fn charge_bytes(&mut self, bytes: u64) -> bool {
        if self.exhausted.is_some() {
            return false;
        }
        self.bytes = self.bytes.saturating_add(bytes);
        if let Some(max) = self.budget.max_memory_bytes {
            if self.bytes > max {
                self.exhaust(BudgetExceeded::Memory { max });
                return false;
            }
        }
        true
    }

    fn exhaust(&mut self, reason: BudgetExceeded) -> BudgetExceeded {
        tracing::debug!(reason = %reason, nodes = self.nodes, "analysis budget exhausted");
        self.exhausted = Some(reason.clone());
        reason
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted.is_some()
    }

    #[inline]
    pub fn nodes_visited(&self) -> u32 {
        self.nodes
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn op_count(&self, category: OpCategory) -> u32 {
        self.ops[category as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn budget_with_nodes(max_nodes: u32) -> BudgetState {
        BudgetState::new(Budget::from_options(&BudgetOptions {
            max_nodes,
            ..BudgetOptions::default()
        }))
    }

    #[test]
    fn test_node_cap_trips_on_n_plus_one() {
        let mut state = budget_with_nodes(3);
        assert!(state.continue_walk().is_ok());
        assert!(state.continue_walk().is_ok());
        assert!(state.continue_walk().is_ok());
        // The call processing the (N+1)th node fails
        assert_eq!(
            state.continue_walk(),
            Err(BudgetExceeded::Nodes { max: 3 })
        );
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut state = budget_with_nodes(1);
        assert!(state.continue_walk().is_ok());
        assert!(state.continue_walk().is_err());
        assert!(state.continue_walk().is_err());
        assert!(state.is_exhausted());
        assert!(!state.record_op(OpCategory::PatternMatch));
    }

    #[test]
    fn test_op_cap_stops_walk() {
        let mut caps = FxHashMap::default();
        caps.insert("patternMatch".to_string(), 2u32);
        let mut state = BudgetState::new(Budget::from_options(&BudgetOptions {
            per_operation_caps: caps,
            ..BudgetOptions::default()
        }));
        assert!(state.record_op(OpCategory::PatternMatch));
        assert!(state.record_op(OpCategory::PatternMatch));
        assert!(!state.record_op(OpCategory::PatternMatch));
        // The walk now refuses to continue even though nodes are available
        assert_eq!(
            state.continue_walk(),
            Err(BudgetExceeded::Operation {
                category: "patternMatch"
            })
        );
    }

    #[test]
    fn test_memory_cap() {
        let mut state = BudgetState::new(Budget::from_options(&BudgetOptions {
            max_memory_bytes: Some(100),
            ..BudgetOptions::default()
        }));
        assert!(state.charge_bytes(60));
        assert!(!state.charge_bytes(60));
        assert!(state.continue_walk().is_err());
    }

    #[test]
    fn test_uncapped_categories_count_freely() {
        let mut state = budget_with_nodes(10);
        for _ in 0..1000 {
            assert!(state.record_op(OpCategory::ContextQuery));
        }
        assert_eq!(state.op_count(OpCategory::ContextQuery), 1000);
    }
}
