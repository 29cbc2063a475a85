use crate::checks::CheckResult;
use crate::config::LintConfig;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

static FROM_INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^FROM\s+\S+").unwrap());

pub fn check(config: &LintConfig) -> CheckResult {
    let name = "Dockerfile".to_string();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let content = match fs::read_to_string(&config.dockerfile) {
        Ok(c) => c,
        Err(_) => {
            errors.push(format!(
                "Dockerfile not found: {}",
                config.dockerfile.display()
            ));
            return CheckResult {
                name,
                passed: false,
                errors,
                warnings,
            };
        }
    };

    if !FROM_INSTRUCTION.is_match(&content) {
        errors.push("no FROM instruction with a base image".to_string());
    }

    if !content.contains("RUN") {
        warnings.push("no RUN instruction".to_string());
    }

    if !content.contains("WORKDIR") {
        warnings.push("WORKDIR is not set".to_string());
    }

    CheckResult {
        passed: errors.is_empty(),
        name,
        errors,
        warnings,
    }
}
