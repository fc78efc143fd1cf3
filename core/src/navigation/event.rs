use crate::navigation::panel::PanelId;
use serde::Deserialize;
use serde::Serialize;

/// State transitions the renderer may want to react to. Drained with
/// [`Dashboard::take_events`](crate::navigation::Dashboard::take_events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavEvent {
    FocusChanged {
        from: PanelId,
        to: PanelId,
        history_pushed: bool,
    },
    HistoryRestored {
        to: PanelId,
    },
    FellBackToDefault {
        to: PanelId,
    },
    MenuSwitched {
        panel: PanelId,
        index: usize,
        option: Option<String>,
    },
    Scrolled {
        panel: PanelId,
        origin: usize,
    },
    QuitRequested,
}
