use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::env_example::CREDENTIAL_VAR;
use crate::checks::CheckResult;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Docker Environment Validation ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(result: &CheckResult) {
    if result.passed {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            "ok".if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        println!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            "failed".if_supports_color(Stdout, |s| s.red()),
        );
    }

    for error in &result.errors {
        println!(
            "  - {}",
            error.if_supports_color(Stdout, |s| s.red())
        );
    }
    for warning in &result.warnings {
        println!(
            "  {} {}",
            "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
            warning.if_supports_color(Stdout, |s| s.yellow()),
        );
    }
    if !result.errors.is_empty() || !result.warnings.is_empty() {
        println!();
    }
}

pub fn print_summary(results: &[CheckResult]) -> bool {
    let failed: Vec<&CheckResult> = results.iter().filter(|r| !r.passed).collect();

    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if failed.is_empty() {
        println!(
            "{}",
            format!("\nAll {}/{} checks passed.\n", results.len(), results.len())
                .if_supports_color(Stdout, |s| s.green()),
        );
        print_next_steps();
        true
    } else {
        println!(
            "{}",
            format!("\n{}/{} check(s) failed.\n", failed.len(), results.len())
                .if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}

fn print_next_steps() {
    println!("Next steps:");
    println!("  1. Create your env file: cp .env.example .env");
    println!("  2. Set {CREDENTIAL_VAR} in .env");
    println!("  3. Start the Docker environment: make setup && make up");
    println!();
}
