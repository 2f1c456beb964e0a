use crate::common::pynjector_command;

#[test]
fn help_lists_options() {
    let mut cmd = pynjector_command();
    cmd.arg("--help");

    let output = cmd.output().expect("Failed to execute pynjector");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Inject Pipenv dependencies into a Flit pyproject.toml."));
    for flag in ["--lock", "--pipfile", "--config", "--tool", "--safe", "--quiet"] {
        assert!(stdout.contains(flag), "Expected {flag} in help, got: {stdout}");
    }
    assert!(stdout.contains("PYNJECTOR_CONFIG"));
    assert!(stdout.contains("PYNJECTOR_TOOL"));
}

#[test]
fn unknown_argument_errors() {
    let mut cmd = pynjector_command();
    cmd.arg("--nonexistent");

    let output = cmd.output().expect("Failed to execute pynjector");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
