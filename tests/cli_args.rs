//! Integration tests for CLI argument handling
//!
//! Tests flag parsing and validation from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gamemenu"))
        .args(args)
        .output()
        .expect("Failed to execute gamemenu")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gamemenu"), "Help should mention gamemenu");
    assert!(stdout.contains("--endpoint"), "Help should mention --endpoint");
    assert!(stdout.contains("--no-cache"), "Help should mention --no-cache");
}

#[test]
fn test_invalid_endpoint_prints_error_and_exits() {
    let output = run_cli(&["--endpoint", "not-a-url"]);
    assert!(!output.status.success(), "Expected invalid endpoint to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid URL"),
        "Should print error message about the endpoint: {}",
        stderr
    );
}

#[test]
fn test_zero_timeout_is_rejected() {
    let output = run_cli(&["--timeout-secs", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout"), "stderr: {}", stderr);
}

#[test]
fn test_non_numeric_ttl_is_rejected_by_clap() {
    let output = run_cli(&["--ttl-hours", "soon"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use gamemenu::cli::{Cli, StartupConfig};

    #[test]
    fn test_cli_no_cache_flag() {
        let cli = Cli::parse_from(["gamemenu", "--no-cache"]);
        assert!(cli.no_cache);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.use_cache);
    }

    #[test]
    fn test_cli_log_file() {
        let cli = Cli::parse_from(["gamemenu", "--log-file", "/tmp/gamemenu.log"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.log_file.as_deref(),
            Some(std::path::Path::new("/tmp/gamemenu.log"))
        );
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["gamemenu", "--plan"]).is_err());
    }
}
