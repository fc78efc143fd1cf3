use crate::navigation::panel::PanelId;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub panel: Option<PanelId>,
    pub options: Vec<String>,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub origin_x: usize,
    pub origin_y: usize,
    pub height: usize,
    pub content_length: usize,
    pub autoscroll: bool,
}

/// Read model handed to the renderer after each dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub current: PanelId,
    pub history: Vec<PanelId>,
    pub cyclic_order: Vec<PanelId>,
    pub navigation_panel: Option<PanelId>,
    pub detail_panel: Option<PanelId>,
    pub menu: MenuSnapshot,
    pub viewports: IndexMap<PanelId, ViewportSnapshot>,
    pub quit_requested: bool,
}

impl DashboardSnapshot {
    pub fn is_focused(&self, panel: &PanelId) -> bool {
        &self.current == panel
    }

    pub fn viewport(&self, panel: &PanelId) -> Option<&ViewportSnapshot> {
        self.viewports.get(panel)
    }
}
