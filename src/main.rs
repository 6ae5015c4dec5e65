use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use jlf::cli::{Cli, ColorMode};
use jlf::config::Config;
use jlf::formatter::format_line;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when jlf exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "jlf", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jlf: {e}");
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("In order to use this utility, data must be piped to stdin");
        return ExitCode::from(1);
    }

    let use_color = resolve_color_mode(config.color_mode);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut line_buf = String::new();

    let reader = stdin.lock();
    for line_result in reader.lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => {
                eprintln!("jlf: read error: {e}");
                return ExitCode::from(2);
            }
        };

        line_buf.clear();

        // Lines suppressed by the level filter produce no output at all.
        if !format_line(&line, &config, use_color, &mut line_buf) {
            continue;
        }

        if let Err(e) = writeln!(writer, "{line_buf}") {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("jlf: write error: {e}");
            return ExitCode::from(2);
        }
    }

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("jlf: flush error: {e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // FORCE_COLOR applies even when stdout is not a terminal.
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `jlf`, this causes the *upstream* writer (e.g. a
/// `kubectl logs` process) to receive a broken-pipe error when `jlf` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
