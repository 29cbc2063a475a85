pub mod checks;
pub mod config;
pub mod report;
pub mod reporter;

use checks::CheckResult;
use config::LintConfig;

pub fn run_all_checks(config: &LintConfig) -> Vec<CheckResult> {
    type CheckFn = fn(&LintConfig) -> CheckResult;
    let check_fns: Vec<CheckFn> = vec![
        checks::dockerfile::check,
        checks::compose::check,
        checks::env_example::check,
        checks::gitignore::check,
    ];

    let mut results = Vec::new();
    for check_fn in &check_fns {
        let result = check_fn(config);
        results.push(result);
    }

    results
}
