use crate::content::PanelContents;
use crate::keymap::key_chord;
use crate::layout::DashboardLayout;
use crate::layout::inner_size;
use crossterm::event::KeyEvent;
use kubenav_core::config::NavigationConfig;
use kubenav_core::navigation::DashboardSnapshot;
use kubenav_core::navigation::DispatchOutcome;
use kubenav_core::navigation::NavError;
use kubenav_core::navigation::NavEvent;
use kubenav_core::navigation::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

/// Terminal-facing wrapper around the [`Navigator`].
#[derive(Debug)]
pub struct DashboardController {
    navigator: Navigator,
}

impl DashboardController {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub fn from_config(config: &NavigationConfig) -> Result<Self, NavError> {
        Ok(Self::new(config.build()?))
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) -> DispatchOutcome {
        let Some(chord) = key_chord(event) else {
            return DispatchOutcome::Unhandled;
        };
        self.navigator.handle_key(chord)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.navigator.snapshot()
    }

    pub fn take_events(&mut self) -> Vec<NavEvent> {
        self.navigator.take_events()
    }

    pub fn quit_requested(&self) -> bool {
        self.navigator.dashboard().quit_requested()
    }

    /// Matches every scrollable panel's viewport to the area it was given
    /// and the number of lines it holds.
    pub fn sync_viewports(&mut self, layout: &DashboardLayout, contents: &PanelContents) {
        let dashboard = self.navigator.dashboard_mut();
        for (panel, area) in layout.panel_areas() {
            let Some(view) = dashboard.viewport_mut(panel.as_str()) else {
                continue;
            };
            let (width, height) = inner_size(area);
            view.resize(width, height);
            view.set_content_length(contents.lines(panel).len());
        }
    }

    /// Bindings that are live on the focused panel.
    pub fn key_hints(&self) -> Vec<KeyHint> {
        let current = self.navigator.dashboard().current_view();
        self.navigator
            .registry()
            .bindings(current.as_str())
            .map(|bindings| {
                bindings
                    .into_iter()
                    .map(|(chord, action)| KeyHint {
                        key: chord.to_string(),
                        action: action.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
