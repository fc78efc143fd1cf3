use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyEventState;
use crossterm::event::KeyModifiers;
use kubenav_core::config::NavigationConfig;
use kubenav_core::navigation::ActionApplied;
use kubenav_core::navigation::DispatchOutcome;
use kubenav_core::navigation::PanelId;
use kubenav_tui::App;
use kubenav_tui::DashboardController;
use kubenav_tui::PanelContents;
use pretty_assertions::assert_eq;

fn app() -> App {
    let controller =
        DashboardController::from_config(&NavigationConfig::default()).expect("stock config");
    let contents = PanelContents::placeholder(&controller.snapshot(), 5);
    App::new(controller, contents)
}

fn press(app: &mut App, code: KeyCode) -> DispatchOutcome {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
}

fn current(app: &App) -> String {
    app.controller().snapshot().current.to_string()
}

#[test]
fn drill_down_and_back_out() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(current(&app), "service");

    press(&mut app, KeyCode::Right);
    assert_eq!(current(&app), "navigation");
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(
        app.contents().lines(&PanelId::from("detail"))[0],
        "Pods Log (service)"
    );

    press(&mut app, KeyCode::Down);
    assert_eq!(current(&app), "detail");
    press(&mut app, KeyCode::Up);
    assert_eq!(current(&app), "navigation");

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(current(&app), "navigation");
    press(&mut app, KeyCode::Left);
    assert_eq!(current(&app), "service");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert_eq!(current(&app), "cluster-info");
    press(&mut app, KeyCode::Esc);
    assert_eq!(current(&app), "namespace");
}

#[test]
fn key_releases_do_not_navigate() {
    let mut app = app();
    let release = KeyEvent {
        code: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    let outcome = app.handle_key_event(release);
    assert!(matches!(outcome, DispatchOutcome::Unhandled));
    assert_eq!(current(&app), "cluster-info");
}

#[test]
fn quit_with_either_binding() {
    for event in [
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = app();
        let outcome = app.handle_key_event(event);
        assert!(matches!(
            outcome,
            DispatchOutcome::Consumed {
                applied: ActionApplied::StateChanged,
                ..
            }
        ));
        assert!(app.controller().quit_requested());
    }
}
