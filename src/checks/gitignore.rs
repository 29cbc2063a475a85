use crate::checks::CheckResult;
use crate::config::LintConfig;
use std::fs;

const ENV_FILE_PATTERN: &str = ".env";

pub fn check(config: &LintConfig) -> CheckResult {
    let name = ".gitignore".to_string();
    let mut warnings = Vec::new();

    let content = match fs::read_to_string(&config.gitignore) {
        Ok(c) => c,
        Err(_) => {
            // An absent ignore file is suboptimal, not broken.
            warnings.push(format!(
                ".gitignore not found: {}",
                config.gitignore.display()
            ));
            return CheckResult {
                name,
                passed: true,
                errors: vec![],
                warnings,
            };
        }
    };

    if !content.contains(ENV_FILE_PATTERN) {
        // The one finding where a warning fails the run: an unignored .env
        // means committed API keys.
        warnings.push(format!(
            "{ENV_FILE_PATTERN} is not ignored; API keys in {ENV_FILE_PATTERN} could be committed"
        ));
        return CheckResult {
            name,
            passed: false,
            errors: vec![],
            warnings,
        };
    }

    CheckResult {
        name,
        passed: true,
        errors: vec![],
        warnings,
    }
}
