use assert_cmd::cargo::cargo_bin_cmd;

/// Tests that `--help` is handled successfully by the CLI.
///
/// This test verifies:
/// 1. Running `hbnb-cli --help` exits successfully
/// 2. The help text is written to stdout and lists the subcommands
/// 3. No unexpected stderr output is produced
#[test]
fn test_cli_help_success() {
    let mut cmd = cargo_bin_cmd!("hbnb-cli");

    let assert = cmd.arg("--help").assert().success();

    let out = assert.get_output();
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("place"), "expected the place subcommand in:\n{}", stdout);
    assert!(stdout.contains("review"), "expected the review subcommand in:\n{}", stdout);
    assert!(
        out.stderr.is_empty(),
        "expected empty stderr for --help, got:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
}

/// A place subcommand missing its required flags fails before any request
#[test]
fn test_cli_place_create_requires_flags() {
    let mut cmd = cargo_bin_cmd!("hbnb-cli");

    cmd.args(["place", "create", "--name", "Loft"]).assert().failure();
}

/// Unreachable servers are reported on stderr with a non-zero exit code
#[test]
fn test_cli_reports_connection_errors() {
    let mut cmd = cargo_bin_cmd!("hbnb-cli");

    let assert = cmd
        .args(["--server-url", "http://127.0.0.1:9", "status"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.starts_with("Error:"), "unexpected stderr:\n{}", stderr);
}

/// The server binary documents its configuration flags
#[test]
fn test_server_help_lists_flags() {
    let mut cmd = cargo_bin_cmd!("hbnb");

    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    for flag in ["--database-url", "--host", "--port", "--debug", "--log-json"] {
        assert!(stdout.contains(flag), "expected {} in:\n{}", flag, stdout);
    }
}
