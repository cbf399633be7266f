//! Configuration surface for the checker.
//!
//! All options are serde-deserializable with camelCase keys and sensible
//! defaults, so hosts can pass partial JSON objects.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Severity override for a diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Error,
    Warn,
    Off,
}

/// Which identifiers count as signal machinery, and where they come from.
///
/// Only imports from `modules` are consulted; anything else is silently
/// ignored. The name lists are matched against the *imported* name of a
/// specifier, so aliased imports register under their local alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalModuleConfig {
    /// Allow-list of source modules providing the signal primitives
    pub modules: Vec<String>,
    /// Exported names that create a signal
    pub signal_creators: Vec<String>,
    /// Exported names that create a derived (pure, recomputed) value
    pub derived_creators: Vec<String>,
    /// Exported names that create a subscription effect
    pub effect_creators: Vec<String>,
    /// Exported names of the batching operation
    pub batch_functions: Vec<String>,
    /// Exported names of the subscription hook
    pub subscription_hooks: Vec<String>,
    /// Module to import the subscription hook from when a fix adds it
    pub subscription_hook_module: String,
    /// Property that reads the current value of a signal
    pub value_property: String,
    /// Method that reads without subscribing (only valid when invoked)
    pub peek_method: String,
}

impl Default for SignalModuleConfig {
    fn default() -> Self {
        Self {
            modules: vec![
                "@preact/signals-react".into(),
                "@preact/signals-react/runtime".into(),
                "@preact/signals".into(),
                "@preact/signals-core".into(),
            ],
            signal_creators: vec!["signal".into(), "useSignal".into()],
            derived_creators: vec!["computed".into(), "useComputed".into()],
            effect_creators: vec!["effect".into(), "useSignalEffect".into()],
            batch_functions: vec!["batch".into()],
            subscription_hooks: vec!["useSignals".into()],
            subscription_hook_module: "@preact/signals-react/runtime".into(),
            value_property: "value".into(),
            peek_method: "peek".into(),
        }
    }
}

/// Suffix heuristic configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuffixOptions {
    /// Regular pattern a signal-by-convention variable name matches
    pub pattern: String,
    /// Apply the heuristic even when import evidence is present.
    ///
    /// When false (the default) the heuristic is a fallback used only in
    /// files with no recognized signal imports.
    pub always: bool,
}

impl Default for SuffixOptions {
    fn default() -> Self {
        Self {
            pattern: "Signal$".into(),
            always: false,
        }
    }
}

/// Per-file analysis cost caps, enforced cooperatively by the traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetOptions {
    /// Maximum number of visited nodes
    pub max_nodes: u32,
    /// Maximum wall-clock time in milliseconds
    pub max_time_ms: Option<u64>,
    /// Maximum approximate memory charged by the analysis, in bytes
    pub max_memory_bytes: Option<u64>,
    /// Caps per named operation category (camelCase category names)
    pub per_operation_caps: FxHashMap<String, u32>,
    /// Emit a metrics snapshot at the end of each file
    pub metrics: bool,
    /// Extra debug logging during traversal
    pub verbose: bool,
}

impl BudgetOptions {
    pub const DEFAULT_MAX_NODES: u32 = 2000;
}

impl Default for BudgetOptions {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_time_ms: None,
            max_memory_bytes: None,
            per_operation_caps: FxHashMap::default(),
            metrics: false,
            verbose: false,
        }
    }
}

/// Top-level options for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintOptions {
    /// Signal machinery recognition
    pub signals: SignalModuleConfig,
    /// Suffix heuristic fallback
    pub suffix: SuffixOptions,
    /// Pattern a hook-style function name matches (`use` + uppercase)
    pub hook_name_pattern: String,
    /// Framework hook calls whose argument lists form a hook-call context
    pub hook_call_names: Vec<String>,
    /// Directory path prefixes exempted from analysis
    pub exempt_prefixes: Vec<String>,
    /// Severity overrides keyed by diagnostic kind (rule name)
    pub severity: FxHashMap<String, SeverityLevel>,
    /// Performance budget
    pub budget: BudgetOptions,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            signals: SignalModuleConfig::default(),
            suffix: SuffixOptions::default(),
            hook_name_pattern: "^use[A-Z]".into(),
            hook_call_names: vec![
                "useEffect".into(),
                "useLayoutEffect".into(),
                "useInsertionEffect".into(),
                "useMemo".into(),
                "useCallback".into(),
                "useImperativeHandle".into(),
            ],
            exempt_prefixes: Vec::new(),
            severity: FxHashMap::default(),
            budget: BudgetOptions::default(),
        }
    }
}

impl LintOptions {
    /// Check whether a file path is exempted by prefix.
    pub fn is_exempt(&self, filename: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| filename.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LintOptions::default();
        assert_eq!(opts.budget.max_nodes, 2000);
        assert_eq!(opts.suffix.pattern, "Signal$");
        assert_eq!(opts.signals.value_property, "value");
        assert!(!opts.suffix.always);
    }

    #[test]
    fn test_partial_json_round_trip() {
        let opts: LintOptions =
            serde_json::from_str(r#"{"budget":{"maxNodes":50},"suffix":{"always":true}}"#)
                .expect("partial options should deserialize");
        assert_eq!(opts.budget.max_nodes, 50);
        assert!(opts.suffix.always);
        // Untouched sections keep their defaults
        assert_eq!(opts.signals.peek_method, "peek");
        assert_eq!(opts.hook_name_pattern, "^use[A-Z]");
    }

    #[test]
    fn test_severity_levels() {
        let opts: LintOptions = serde_json::from_str(
            r#"{"severity":{"signals/prefer-value-read":"off","signals/no-signal-destructuring":"warn"}}"#,
        )
        .unwrap();
        assert_eq!(
            opts.severity.get("signals/prefer-value-read"),
            Some(&SeverityLevel::Off)
        );
        assert_eq!(
            opts.severity.get("signals/no-signal-destructuring"),
            Some(&SeverityLevel::Warn)
        );
    }

    #[test]
    fn test_exempt_prefixes() {
        let opts = LintOptions {
            exempt_prefixes: vec!["vendor/".into(), "generated/".into()],
            ..LintOptions::default()
        };
        assert!(opts.is_exempt("vendor/lib/file.tsx"));
        assert!(!opts.is_exempt("src/app.tsx"));
    }
}
