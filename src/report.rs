use serde::Serialize;

use crate::checks::CheckResult;

/// Machine-readable run report for `--json` output.
#[derive(Serialize)]
pub struct Report<'a> {
    pub tool: &'static str,
    pub passed: bool,
    pub checks: &'a [CheckResult],
}

impl<'a> Report<'a> {
    pub fn new(checks: &'a [CheckResult]) -> Self {
        Self {
            tool: "docker-lint",
            passed: checks.iter().all(|c| c.passed),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            passed,
            errors: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn passed_requires_every_check_to_pass() {
        let results = vec![result("a", true), result("b", false)];
        assert!(!Report::new(&results).passed);

        let results = vec![result("a", true), result("b", true)];
        assert!(Report::new(&results).passed);
    }

    #[test]
    fn serializes_checks_in_given_order() {
        let results = vec![result("first", true), result("second", true)];
        let json = serde_json::to_string(&Report::new(&results)).unwrap();
        let first = json.find("first").unwrap();
        let second = json.find("second").unwrap();
        assert!(first < second);
    }
}
