use crate::common::pynjector_command;

#[test]
fn version_flag_shows_version() {
    let mut cmd = pynjector_command();
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute pynjector");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("pynjector "),
        "Expected version string starting with 'pynjector ', got: {stdout}"
    );
}

#[test]
fn short_version_flag_works() {
    let mut cmd = pynjector_command();
    cmd.arg("-V");

    let output = cmd.output().expect("Failed to execute pynjector");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("pynjector "));
}
