use kubenav_core::navigation::DashboardSnapshot;
use kubenav_core::navigation::PanelId;
use std::collections::HashMap;

/// Lines drawn inside each panel. The navigation shell does not fetch
/// cluster data, so the stock contents are placeholders that make scrolling
/// and menu selection visible.
#[derive(Debug, Clone, Default)]
pub struct PanelContents {
    lines: HashMap<PanelId, Vec<String>>,
    detail: Option<PanelId>,
}

impl PanelContents {
    pub fn new(detail: Option<PanelId>) -> Self {
        Self {
            lines: HashMap::new(),
            detail,
        }
    }

    /// Fills every cyclic panel with `lines_per_panel` numbered rows and the
    /// detail panel with the current menu selection.
    pub fn placeholder(snapshot: &DashboardSnapshot, lines_per_panel: usize) -> Self {
        let mut contents = Self::new(snapshot.detail_panel.clone());
        for panel in &snapshot.cyclic_order {
            let lines = (1..=lines_per_panel)
                .map(|row| format!("{panel} {row:02}"))
                .collect();
            contents.set_lines(panel.clone(), lines);
        }
        if let (Some(panel), Some(option)) = (
            snapshot.menu.panel.as_ref(),
            snapshot.menu.options.get(snapshot.menu.index),
        ) {
            contents.show_selection(panel, option);
        }
        contents
    }

    pub fn lines(&self, panel: &PanelId) -> &[String] {
        self.lines.get(panel).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_lines(&mut self, panel: PanelId, lines: Vec<String>) {
        self.lines.insert(panel, lines);
    }

    /// Replaces the detail panel with the view selected in the menu.
    pub fn show_selection(&mut self, panel: &PanelId, option: &str) {
        let Some(detail) = self.detail.clone() else {
            return;
        };
        let lines = vec![
            format!("{option} ({panel})"),
            String::new(),
            format!("No {} data loaded.", option.to_lowercase()),
        ];
        self.set_lines(detail, lines);
    }
}
