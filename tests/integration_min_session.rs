// Minimal integration test that drives the compiled binary through a PTY.
// This exercises the real event loop and crossterm input handling across
// the main boundaries without relying on internal modules.
//
// Notes:
// - Requires a TTY; uses expectrl which allocates a pseudo terminal.
// - Marked Unix-only and ignored by default to avoid CI/platform issues.
// - Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn start_stop_then_quit_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve path to compiled binary (debug build during tests)
    let bin = assert_cmd::cargo::cargo_bin("twentytwenty");

    // Spawn the TUI inside a pseudo terminal
    let mut p = spawn(bin.display().to_string())?;

    // Give the app a moment to initialize the terminal/alternate screen
    std::thread::sleep(Duration::from_millis(200));
    // ratatui moves the cursor between words, so match a single token
    p.expect("Current")?;

    // Start, let a tick pass, stop
    p.send("s")?;
    std::thread::sleep(Duration::from_millis(1100));
    p.send("s")?;

    p.send("q")?;

    // Wait for the program to terminate cleanly
    p.expect(Eof)?;
    Ok(())
}
