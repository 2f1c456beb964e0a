//! Failure modes and exit codes.

use crate::common::{INSTA_FILTERS, fixture_project, pynjector_command, pynjector_in, read};
use crate::pynjector_snapshot;

#[test]
fn missing_metadata_table() {
    let project = fixture_project("no-metadata");
    let before = read(project.path(), "pyproject.toml");

    pynjector_snapshot!(&INSTA_FILTERS, pynjector_in(project.path()), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: `[tool.flit.metadata]` table not found in pyproject.toml
    ");

    assert_eq!(read(project.path(), "pyproject.toml"), before);
}

#[test]
fn missing_required_section() {
    let project = fixture_project("pipfile");
    fs_err::write(project.path().join("Pipfile"), "[packages]\ntoml = \"*\"\n").unwrap();

    pynjector_snapshot!(&INSTA_FILTERS, pynjector_in(project.path()), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: `dev-packages` section not found in Pipfile
    ");
}

#[test]
fn malformed_lock_does_not_fall_back() {
    let project = fixture_project("malformed-lock");
    let before = read(project.path(), "pyproject.toml");

    let output = pynjector_in(project.path())
        .output()
        .expect("Failed to execute pynjector");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.contains("failed to parse") && stderr.contains("Pipfile.lock"),
        "Expected a lock parse error, got: {stderr}"
    );
    assert!(stderr.contains("Caused by"));
    assert_eq!(read(project.path(), "pyproject.toml"), before);
}

#[test]
fn explicit_missing_lock_does_not_fall_back() {
    let project = fixture_project("pipfile");

    let output = pynjector_in(project.path())
        .args(["--lock", "Pipfile.lock"])
        .output()
        .expect("Failed to execute pynjector");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Pipfile.lock"));
}

#[test]
fn no_source_found() {
    let project = tempfile::TempDir::new().unwrap();

    let output = pynjector_in(project.path())
        .output()
        .expect("Failed to execute pynjector");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("No Pipfile.lock or Pipfile found"));
}

#[test]
fn missing_config_file() {
    let project = fixture_project("lock");
    fs_err::remove_file(project.path().join("pyproject.toml")).unwrap();

    let output = pynjector_in(project.path())
        .output()
        .expect("Failed to execute pynjector");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("pyproject.toml"));
}

#[test]
fn lock_and_pipfile_are_mutually_exclusive() {
    let output = pynjector_command()
        .args(["--lock", "Pipfile.lock", "--pipfile", "Pipfile"])
        .output()
        .expect("Failed to execute pynjector");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("cannot be used with"));
}
