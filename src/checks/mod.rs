pub mod compose;
pub mod dockerfile;
pub mod env_example;
pub mod gitignore;

use serde::Serialize;

/// Outcome of a single artifact check.
///
/// `passed` is set by each check's own policy rather than derived from
/// `errors`: the env-example check passes regardless of its warning, and
/// the gitignore check fails on a warning-level finding. Those policies are
/// deliberate and must stay per-check.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
