use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut root_dir: Option<PathBuf> = None;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--root-dir" {
            if i + 1 < args.len() {
                root_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
                continue;
            }
        } else if args[i] == "--json" {
            json_output = true;
        }
        i += 1;
    }

    let config = match root_dir {
        Some(dir) => docker_lint::config::LintConfig::from_root(&dir),
        None => match docker_lint::config::LintConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not find project root. Run from within a git repository or use --root-dir.");
                process::exit(1);
            }
        },
    };

    if json_output {
        let results = docker_lint::run_all_checks(&config);
        let report = docker_lint::report::Report::new(&results);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                process::exit(1);
            }
        }
        process::exit(if report.passed { 0 } else { 1 });
    }

    docker_lint::reporter::print_header();

    // Run checks and print results as they complete (streaming)
    type CheckFn = fn(&docker_lint::config::LintConfig) -> docker_lint::checks::CheckResult;
    let check_fns: Vec<CheckFn> = vec![
        docker_lint::checks::dockerfile::check,
        docker_lint::checks::compose::check,
        docker_lint::checks::env_example::check,
        docker_lint::checks::gitignore::check,
    ];

    let debug_timing = std::env::var("DOCKER_LINT_TIMING").is_ok();
    let mut results = Vec::new();
    for check_fn in &check_fns {
        let start = std::time::Instant::now();
        let result = check_fn(&config);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
        }
        docker_lint::reporter::print_result(&result);
        results.push(result);
    }

    let all_passed = docker_lint::reporter::print_summary(&results);

    process::exit(if all_passed { 0 } else { 1 });
}
