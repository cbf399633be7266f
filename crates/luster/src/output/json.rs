//! Machine-readable JSON output.

use crate::diagnostic::Severity;
use crate::linter::LintResult;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiagnostic<'a> {
    file: &'a str,
    rule: &'a str,
    severity: Severity,
    message: &'a str,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'a str>,
    fixable: bool,
    suggestions: usize,
}

/// Format lint results as a JSON array of diagnostics
pub fn format_json(results: &[LintResult]) -> String {
    let diagnostics: Vec<JsonDiagnostic<'_>> = results
        .iter()
        .flat_map(|result| {
            result.diagnostics.iter().map(|diagnostic| JsonDiagnostic {
                file: &result.filename,
                rule: diagnostic.rule_name,
                severity: diagnostic.severity,
                message: diagnostic.message.as_str(),
                start: diagnostic.start,
                end: diagnostic.end,
                help: diagnostic.help.as_deref(),
                fixable: diagnostic.has_fix(),
                suggestions: diagnostic.suggestions.len(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;

    #[test]
    fn test_format_json_shape() {
        let source =
            "import { signal } from '@preact/signals-react';\nconst count = signal(0);\nfunction f() { return count; }";
        let result = Linter::new().lint_source(source, "test.tsx");
        let json = format_json(&[result]);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let array = parsed.as_array().expect("array");
        assert!(!array.is_empty());
        assert_eq!(array[0]["file"], "test.tsx");
        assert_eq!(array[0]["rule"], "signals/prefer-value-read");
        assert_eq!(array[0]["fixable"], true);
    }

    #[test]
    fn test_format_json_empty() {
        let json = format_json(&[]);
        assert_eq!(json.trim(), "[]");
    }
}
