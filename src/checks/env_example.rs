use crate::checks::CheckResult;
use crate::config::LintConfig;
use std::fs;

/// The credential every developer has to supply before the stack boots.
pub const CREDENTIAL_VAR: &str = "ANTHROPIC_API_KEY";

pub fn check(config: &LintConfig) -> CheckResult {
    let name = ".env.example".to_string();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let content = match fs::read_to_string(&config.env_example) {
        Ok(c) => c,
        Err(_) => {
            errors.push(format!(
                ".env.example not found: {}",
                config.env_example.display()
            ));
            return CheckResult {
                name,
                passed: false,
                errors,
                warnings,
            };
        }
    };

    if !content.contains(CREDENTIAL_VAR) {
        warnings.push(format!("no example value for {CREDENTIAL_VAR}"));
    }

    // File presence is the only gate here; the warning never fails the check.
    CheckResult {
        name,
        passed: true,
        errors,
        warnings,
    }
}
