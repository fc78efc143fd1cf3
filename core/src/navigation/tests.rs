use super::*;
use crate::config::NavigationConfig;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn navigator() -> Navigator {
    NavigationConfig::default().build().expect("stock config builds")
}

fn press(nav: &mut Navigator, key: Key) -> DispatchOutcome {
    nav.handle_key(KeyChord::plain(key))
}

fn current(nav: &Navigator) -> String {
    nav.dashboard().current_view().to_string()
}

fn history(nav: &Navigator) -> Vec<String> {
    nav.dashboard()
        .focus()
        .history()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn tab_and_arrows_walk_the_ring() {
    let mut nav = navigator();
    press(&mut nav, Key::Tab);
    assert_eq!(current(&nav), "namespace");
    press(&mut nav, Key::Down);
    assert_eq!(current(&nav), "service");
    press(&mut nav, Key::Up);
    assert_eq!(current(&nav), "namespace");
    assert_eq!(history(&nav), vec!["cluster-info", "namespace", "service"]);
}

#[test]
fn ring_wraps_in_both_directions() {
    let mut nav = navigator();
    press(&mut nav, Key::Up);
    assert_eq!(current(&nav), "pod");
    press(&mut nav, Key::Tab);
    assert_eq!(current(&nav), "cluster-info");
}

#[test]
fn escape_returns_then_falls_back_to_default() {
    let mut nav = navigator();
    press(&mut nav, Key::Tab);
    press(&mut nav, Key::Tab);
    assert_eq!(current(&nav), "service");

    press(&mut nav, Key::Esc);
    assert_eq!(current(&nav), "namespace");
    press(&mut nav, Key::Esc);
    assert_eq!(current(&nav), "cluster-info");

    let outcome = press(&mut nav, Key::Esc);
    assert_matches!(
        outcome,
        DispatchOutcome::Consumed {
            applied: ActionApplied::StateChanged,
            ..
        }
    );
    assert_eq!(current(&nav), "namespace");
    assert!(history(&nav).is_empty());
    let events = nav.take_events();
    assert!(events.contains(&NavEvent::FellBackToDefault {
        to: PanelId::from("namespace")
    }));
}

#[test]
fn enter_opens_menu_and_left_at_start_acts_like_back() {
    let mut via_left = navigator();
    press(&mut via_left, Key::Tab);
    press(&mut via_left, Key::Enter);
    assert_eq!(current(&via_left), "navigation");
    press(&mut via_left, Key::Left);

    let mut via_back = navigator();
    press(&mut via_back, Key::Tab);
    press(&mut via_back, Key::Enter);
    press(&mut via_back, Key::Esc);

    assert_eq!(current(&via_left), current(&via_back));
    assert_eq!(history(&via_left), history(&via_back));
    assert_eq!(current(&via_left), "namespace");
}

#[test]
fn left_at_start_with_empty_history_falls_back() {
    let mut nav = navigator();
    nav.dashboard_mut()
        .focus_view("navigation", false)
        .expect("navigation panel exists");
    press(&mut nav, Key::Left);
    assert_eq!(current(&nav), "namespace");
    assert!(history(&nav).is_empty());
}

#[test]
fn menu_cursor_moves_within_options() {
    let mut nav = navigator();
    press(&mut nav, Key::Tab);
    press(&mut nav, Key::Right);
    assert_eq!(current(&nav), "navigation");
    nav.take_events();

    for _ in 0..5 {
        press(&mut nav, Key::Right);
    }
    let menu = nav.snapshot().menu;
    assert_eq!(menu.panel, Some(PanelId::from("namespace")));
    assert_eq!(menu.index, 2);
    assert_eq!(nav.dashboard().menu().selected(), Some("Pods"));

    press(&mut nav, Key::Left);
    assert_eq!(nav.snapshot().menu.index, 1);
    assert_eq!(current(&nav), "navigation");

    let switched: Vec<_> = nav
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, NavEvent::MenuSwitched { .. }))
        .collect();
    assert_eq!(switched.len(), 3);
}

#[test]
fn entering_menu_ignores_previous_index() {
    let mut nav = navigator();
    press(&mut nav, Key::Enter);
    press(&mut nav, Key::Right);
    assert_eq!(nav.snapshot().menu.index, 1);
    press(&mut nav, Key::Esc);
    assert_eq!(current(&nav), "cluster-info");

    // Same panel: cursor kept, focus pushed again.
    press(&mut nav, Key::Enter);
    assert_eq!(current(&nav), "navigation");
    assert_eq!(nav.snapshot().menu.index, 1);
    assert_eq!(history(&nav), vec!["cluster-info"]);

    // Different panel: cursor reset.
    press(&mut nav, Key::Esc);
    press(&mut nav, Key::Tab);
    press(&mut nav, Key::Enter);
    assert_eq!(nav.snapshot().menu.index, 0);
    assert_eq!(nav.snapshot().menu.panel, Some(PanelId::from("namespace")));
}

#[test]
fn detail_switch_is_a_sibling_move() {
    let mut nav = navigator();
    press(&mut nav, Key::Enter);
    let before = history(&nav);

    press(&mut nav, Key::Down);
    assert_eq!(current(&nav), "detail");
    assert_eq!(history(&nav), before);

    press(&mut nav, Key::Up);
    assert_eq!(current(&nav), "navigation");
    assert_eq!(history(&nav), before);
}

#[test]
fn cyclic_keys_are_inert_off_the_ring() {
    let mut nav = navigator();
    press(&mut nav, Key::Enter);
    press(&mut nav, Key::Down);
    assert_eq!(current(&nav), "detail");

    let outcome = press(&mut nav, Key::Tab);
    assert_matches!(outcome, DispatchOutcome::Unhandled);
    assert_eq!(current(&nav), "detail");
}

#[test]
fn page_keys_scroll_the_focused_panel() {
    let mut nav = navigator();
    {
        let view = nav
            .dashboard_mut()
            .viewport_mut("cluster-info")
            .expect("cluster-info scrolls");
        view.resize(30, 4);
        view.set_content_length(9);
    }
    assert_eq!(nav.snapshot().viewports[&PanelId::from("cluster-info")].origin_y, 5);

    press(&mut nav, Key::PageUp);
    press(&mut nav, Key::PageUp);
    press(&mut nav, Key::PageUp);
    press(&mut nav, Key::PageUp);
    let view = nav.snapshot().viewports[&PanelId::from("cluster-info")];
    assert_eq!(view.origin_y, 0);
    assert!(!view.autoscroll);

    for _ in 0..6 {
        press(&mut nav, Key::PageDown);
        let view = nav.snapshot().viewports[&PanelId::from("cluster-info")];
        assert!(view.origin_y + view.height <= view.content_length);
    }
    assert_eq!(
        nav.snapshot().viewports[&PanelId::from("cluster-info")].origin_y,
        5
    );
}

#[test]
fn scrolling_without_viewport_is_inert() {
    let mut nav = navigator();
    press(&mut nav, Key::Enter);
    let outcome = press(&mut nav, Key::PageDown);
    assert_matches!(
        outcome,
        DispatchOutcome::Consumed {
            applied: ActionApplied::NoChange,
            ..
        }
    );
}

#[test]
fn dispatch_to_unknown_panel_leaves_focus_alone() {
    let mut nav = navigator();
    press(&mut nav, Key::Tab);
    let before = (current(&nav), history(&nav));

    let err = nav
        .dispatch("ingress", KeyChord::plain(Key::Tab))
        .unwrap_err();
    assert_matches!(err, NavError::UnknownPanel(name) if name == "ingress");
    assert_eq!((current(&nav), history(&nav)), before);

    let err = nav.dashboard_mut().focus_view("ingress", true).unwrap_err();
    assert_matches!(err, NavError::UnknownPanel(_));
    assert_eq!((current(&nav), history(&nav)), before);
}

#[test]
fn quit_keys_raise_the_flag_once() {
    let mut nav = navigator();
    nav.handle_key(KeyChord::new(Key::Char('c'), Modifier::Ctrl));
    assert!(nav.dashboard().quit_requested());
    let outcome = press(&mut nav, Key::Char('q'));
    assert_matches!(
        outcome,
        DispatchOutcome::Consumed {
            applied: ActionApplied::NoChange,
            ..
        }
    );
    assert_eq!(
        nav.take_events()
            .iter()
            .filter(|event| **event == NavEvent::QuitRequested)
            .count(),
        1
    );
}

#[test]
#[traced_test]
fn failing_handler_is_logged_and_keeps_partial_state() {
    let mut nav = navigator();
    nav.dashboard_mut().focus_view("pod", true).unwrap();

    let mut registry = nav.registry().clone();
    registry
        .register_panel(
            "pod",
            Action::new(
                "jump-and-fail",
                [Key::F(2)],
                Modifier::None,
                Handler::new(|dashboard, _| {
                    dashboard.focus_view("service", true)?;
                    Err(NavError::handler("jump-and-fail", "backend unavailable"))
                }),
            ),
        )
        .unwrap();
    let mut nav = Navigator::new(nav.dashboard().clone(), registry);

    let outcome = press(&mut nav, Key::F(2));
    assert_matches!(
        outcome,
        DispatchOutcome::Failed { action, error: NavError::Handler { .. } }
            if action == "jump-and-fail"
    );
    assert_eq!(current(&nav), "service");
    assert_eq!(history(&nav), vec!["cluster-info", "pod"]);
    assert!(logs_contain("handler failed"));

    press(&mut nav, Key::Esc);
    assert_eq!(current(&nav), "pod");
}

#[test]
fn snapshot_serializes_for_the_renderer() {
    let mut nav = navigator();
    press(&mut nav, Key::Tab);
    let value = serde_json::to_value(nav.snapshot()).unwrap();
    assert_eq!(value["current"], "namespace");
    assert_eq!(value["history"][0], "cluster-info");
    assert_eq!(value["menu"]["options"][1], "Deployments");

    let events = serde_json::to_value(nav.take_events()).unwrap();
    assert_eq!(events[0]["type"], "focus-changed");
    assert_eq!(events[0]["to"], "namespace");
}
