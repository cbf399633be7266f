//! Naming-convention fallback for signal detection.
//!
//! A configurable regular pattern (default: the `Signal` suffix) applied
//! to variable names when import evidence is absent or the heuristic is
//! explicitly always-on. An invalid user-supplied pattern disables the
//! heuristic for the run instead of failing it.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns are cached process-wide, keyed by the pattern string.
/// Keying by content means a cached entry can never leak one file's result
/// into another: the same pattern compiles to the same matcher everywhere.
static PATTERN_CACHE: Lazy<DashMap<String, Option<Regex>>> = Lazy::new(DashMap::new);

fn compile_cached(pattern: &str) -> Option<Regex> {
    if let Some(entry) = PATTERN_CACHE.get(pattern) {
        return entry.value().clone();
    }
    let compiled = match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(error) => {
            tracing::warn!(%pattern, %error, "invalid suffix pattern, heuristic disabled");
            None
        }
    };
    PATTERN_CACHE.insert(pattern.to_string(), compiled.clone());
    compiled
}

/// The suffix heuristic for one file's analysis.
pub struct SuffixHeuristic {
    regex: Option<Regex>,
}

impl SuffixHeuristic {
    /// Build from a configured pattern. A malformed pattern yields a
    /// disabled heuristic (logged, never fatal).
    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            regex: compile_cached(pattern),
        }
    }

    /// Whether the heuristic is usable for this run.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.regex.is_some()
    }

    /// Does this name look like a signal by convention?
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}
