use std::process::Command;

use pretty_assertions::assert_eq;
use wine_core::navigation::{View, ViewState};
use wine_core::render::render;
use wine_core::{Dataset, StyleConfig};

fn headless(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wine-dashboard"));
    command.arg("--headless").args(args);
    command
}

fn run_headless(args: &[&str]) -> std::process::Output {
    headless(args).env("RUST_LOG", "trace").output().unwrap()
}

fn expected_scene(
    view: View,
    step: usize,
) -> String {
    let scene = render(
        &ViewState::new(view, step),
        &Dataset::uci_wine_quality(),
        &StyleConfig::default(),
    );
    format!("{scene}\n")
}

#[test]
fn stdout_holds_only_the_scene_even_at_trace() {
    let output = run_headless(&["--view", "overview"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        expected_scene(View::Overview, 1)
    );
}

#[test]
fn logs_go_to_stderr_in_headless_mode() {
    let output = run_headless(&["--step", "9"]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("built UCI wine quality dataset"));
    assert!(stderr.contains("story step out of range"));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        expected_scene(View::Story, 4)
    );
}

#[test]
fn default_filter_shows_binary_debug_lines() {
    let output = headless(&[]).env_remove("RUST_LOG").output().unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("wine_dashboard"));
    assert!(stderr.contains("configuration loaded"));
}
