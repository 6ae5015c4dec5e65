//! Integration tests for color control: `NO_COLOR`, `FORCE_COLOR`, --color flag, `TERM`.

use assert_cmd::Command;

#[allow(deprecated)]
fn jlf() -> Command {
    let mut cmd = Command::cargo_bin("json-log-formatter").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jlf-test-no-config");
    cmd.env("TZ", "UTC");
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("FORCE_COLOR");
    cmd
}

#[test]
fn color_never_disables_ansi() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // No ANSI escape sequences
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_always_enables_ansi() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .arg("--color=always")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Should contain ANSI escape sequences
    assert!(
        stdout.contains("\x1b["),
        "Should contain ANSI escapes with --color=always"
    );
}

#[test]
fn no_color_env_disables_colors() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .env("NO_COLOR", "1")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Piped stdout + NO_COLOR → no colors
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with NO_COLOR set"
    );
}

#[test]
fn color_always_overrides_no_color() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .arg("--color=always")
        .env("NO_COLOR", "1")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // --color=always overrides NO_COLOR
    assert!(
        stdout.contains("\x1b["),
        "--color=always should override NO_COLOR"
    );
}

#[test]
fn piped_stdout_disables_colors_by_default() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // When piped (not a TTY), auto mode should disable colors
    assert!(
        !stdout.contains("\x1b["),
        "Piped output should not have ANSI escapes in auto mode"
    );
}

#[test]
fn term_dumb_disables_colors() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .env("TERM", "dumb")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "TERM=dumb should disable colors in auto mode"
    );
}

#[test]
fn force_color_enables_ansi_when_piped() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .env("FORCE_COLOR", "1")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "FORCE_COLOR should enable ANSI escapes even when piped"
    );
}

#[test]
fn force_color_overrides_no_color() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .env("FORCE_COLOR", "1")
        .env("NO_COLOR", "1")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "FORCE_COLOR should take precedence over NO_COLOR"
    );
}

#[test]
fn color_never_overrides_force_color() {
    let input = r#"{"level":"info","msg":"hello"}"#;
    let output = jlf()
        .arg("--color=never")
        .env("FORCE_COLOR", "1")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "--color=never should override FORCE_COLOR"
    );
}

#[test]
fn colored_level_uses_level_palette() {
    let input = r#"{"level":"error","msg":"boom"}"#;
    let output = jlf()
        .arg("--color=always")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // error renders red (ANSI 31)
    assert!(
        stdout.contains("\x1b[31m"),
        "error level should render red, got: {stdout}"
    );
}

#[test]
fn trace_and_debug_levels_stay_plain() {
    let input = "{\"level\":\"trace\",\"msg\":\"t\"}\n{\"level\":\"debug\",\"msg\":\"d\"}\n";
    let output = jlf()
        .arg("--color=always")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("[trace]"),
        "trace label should be unstyled, got: {stdout}"
    );
    assert!(
        stdout.contains("[debug]"),
        "debug label should be unstyled, got: {stdout}"
    );
}
