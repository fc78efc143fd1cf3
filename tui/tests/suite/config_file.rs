use assert_matches::assert_matches;
use clap::Parser;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use kubenav_core::config::NavigationConfig;
use kubenav_core::navigation::NavError;
use kubenav_tui::Cli;
use kubenav_tui::DashboardController;
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn custom_bindings_from_file() {
    let file = write_config(
        r#"
[[panel_actions.pod]]
name = "vim-next"
keys = ["j"]
handler = "next-cyclic-view"
"#,
    );
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["kubenav", "--config", &path, "--initial-panel", "pod"])
        .expect("args parse");
    let config = cli.navigation_config().expect("config loads");
    let mut controller = DashboardController::from_config(&config).expect("config builds");

    assert_eq!(controller.snapshot().current.as_str(), "pod");
    controller.handle_key_event(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
    assert_eq!(controller.snapshot().current.as_str(), "cluster-info");
}

#[test]
fn conflicting_bindings_are_rejected_before_start() {
    let file = write_config(
        r#"
[[global_actions]]
keys = ["tab"]
handler = "quit"

[[global_actions]]
name = "also-tab"
keys = ["tab"]
handler = "scroll-down"
"#,
    );
    let config = NavigationConfig::load(file.path()).expect("config loads");
    assert_matches!(
        DashboardController::from_config(&config),
        Err(NavError::DuplicateBinding { existing, incoming, .. })
            if existing == "quit" && incoming == "also-tab"
    );
}

#[test]
fn unknown_initial_panel_is_rejected() {
    let cli = Cli::try_parse_from(["kubenav", "--initial-panel", "ingress"]).expect("args parse");
    let config = cli.navigation_config().expect("stock config");
    assert_matches!(
        DashboardController::from_config(&config),
        Err(NavError::UnknownPanel(name)) if name == "ingress"
    );
}
