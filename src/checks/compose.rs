use crate::checks::CheckResult;
use crate::config::LintConfig;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

// Matches `version: 3`, `version: '3'`, `version: "3.8"`.
static VERSION_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version:\s*["']?\d+"#).unwrap());

pub fn check(config: &LintConfig) -> CheckResult {
    let name = "docker-compose.yml".to_string();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let content = match fs::read_to_string(&config.compose_file) {
        Ok(c) => c,
        Err(_) => {
            errors.push(format!(
                "docker-compose.yml not found: {}",
                config.compose_file.display()
            ));
            return CheckResult {
                name,
                passed: false,
                errors,
                warnings,
            };
        }
    };

    if !VERSION_KEY.is_match(&content) {
        warnings.push("no version declaration".to_string());
    }

    if !content.contains("services:") {
        errors.push("no services section".to_string());
    }

    if !content.contains("volumes:") {
        warnings.push("no volumes defined; container data will not persist".to_string());
    }

    CheckResult {
        passed: errors.is_empty(),
        name,
        errors,
        warnings,
    }
}
