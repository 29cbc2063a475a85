use std::fs;

use docker_lint::checks::compose;
use docker_lint::config::LintConfig;

#[test]
fn fails_when_compose_file_is_missing() {
    let root = tempfile::tempdir().unwrap();

    let config = LintConfig::from_root(root.path());
    let result = compose::check(&config);

    assert!(!result.passed);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("docker-compose.yml not found"));
    assert!(result.warnings.is_empty());
}

#[test]
fn passes_with_two_warnings_when_only_services_present() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("docker-compose.yml"),
        "services:\n  web:\n    image: x\n",
    )
    .unwrap();

    let config = LintConfig::from_root(root.path());
    let result = compose::check(&config);

    assert!(result.passed);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains("version"));
    assert!(result.warnings[1].contains("volumes"));
}

#[test]
fn fails_without_services_section() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("docker-compose.yml"), "version: '3'\n").unwrap();

    let config = LintConfig::from_root(root.path());
    let result = compose::check(&config);

    assert!(!result.passed);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("services"));
}

#[test]
fn quoted_version_declarations_are_recognized() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("docker-compose.yml"),
        "version: \"3.8\"\nservices:\n  db:\n    image: postgres\nvolumes:\n  data:\n",
    )
    .unwrap();

    let config = LintConfig::from_root(root.path());
    let result = compose::check(&config);

    assert!(result.passed);
    assert!(result.warnings.is_empty());
}

#[test]
fn version_without_a_number_still_warns() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("docker-compose.yml"),
        "version: latest\nservices:\n  db:\n    image: postgres\nvolumes:\n  data:\n",
    )
    .unwrap();

    let config = LintConfig::from_root(root.path());
    let result = compose::check(&config);

    assert!(result.passed);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("version"));
}
