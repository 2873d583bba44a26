//! Extra key detection rule.
//!
//! Detects keys that exist in a target table but not in the baseline. These
//! are informational unless the caller opts into failing on them.

use crate::{
    core::{DiffResult, EntryContext, ResourceTable},
    issues::{ExtraKeyIssue, Severity},
};

/// Turn a diff's `extra_in_target` into issues located at the target entries,
/// in target order. `fail_on_extra` reports them as errors.
pub fn check_extra_keys(
    target: &ResourceTable,
    baseline: &str,
    result: &DiffResult,
    fail_on_extra: bool,
) -> Vec<ExtraKeyIssue> {
    let severity = if fail_on_extra {
        Severity::Error
    } else {
        Severity::Warning
    };
    result
        .extra_in_target
        .iter()
        .filter_map(|key| target.get(key))
        .map(|entry| ExtraKeyIssue {
            context: EntryContext::from_entry(&target.path, entry),
            baseline: baseline.to_string(),
            severity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::{diff, parsers::strings::parse_strings};
    use crate::rules::extra::*;

    #[test]
    fn test_extra_keys_in_target_order() {
        let baseline = parse_strings("en.strings", "\"common.ok\" = \"OK\";\n").unwrap();
        let target = parse_strings(
            "fr.strings",
            "\"ios.widget\" = \"W\";\n\"common.ok\" = \"OK\";\n\"Common.ok\" = \"OK\";\n",
        )
        .unwrap();

        let issues = check_extra_keys(&target, "en.strings", &diff(&baseline, &target), false);
        let keys: Vec<(&str, usize)> = issues
            .iter()
            .map(|i| (i.context.key.as_str(), i.context.line()))
            .collect();
        assert_eq!(keys, vec![("ios.widget", 1), ("Common.ok", 3)]);
        assert_eq!(issues[0].baseline, "en.strings");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_fail_on_extra_reports_errors() {
        let baseline = parse_strings("en.strings", "\"a\" = \"1\";\n").unwrap();
        let target = parse_strings("fr.strings", "\"b\" = \"2\";\n").unwrap();

        let issues = check_extra_keys(&target, "en.strings", &diff(&baseline, &target), true);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }
}
