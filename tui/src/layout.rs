use kubenav_core::navigation::DashboardSnapshot;
use kubenav_core::navigation::PanelId;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;

const NAVIGATION_BAR_HEIGHT: u16 = 3;
const CYCLIC_COLUMN_PERCENT: u16 = 30;

/// Screen areas for every drawn panel. Cyclic panels stack in the left
/// column; the navigation bar and the detail panel share the right column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    areas: Vec<(PanelId, Rect)>,
    footer: Rect,
}

impl DashboardLayout {
    pub fn compute(snapshot: &DashboardSnapshot, area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(CYCLIC_COLUMN_PERCENT),
                Constraint::Percentage(100 - CYCLIC_COLUMN_PERCENT),
            ])
            .split(vertical[0]);

        let mut areas = Vec::new();
        let count = snapshot.cyclic_order.len() as u32;
        if count > 0 {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(snapshot.cyclic_order.iter().map(|_| Constraint::Ratio(1, count)))
                .split(columns[0]);
            areas.extend(snapshot.cyclic_order.iter().cloned().zip(rows.iter().copied()));
        }

        let mut detail_area = columns[1];
        if let Some(navigation) = &snapshot.navigation_panel {
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NAVIGATION_BAR_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(columns[1]);
            areas.push((navigation.clone(), right[0]));
            detail_area = right[1];
        }
        if let Some(detail) = &snapshot.detail_panel {
            areas.push((detail.clone(), detail_area));
        }

        Self {
            areas,
            footer: vertical[1],
        }
    }

    pub fn panel_areas(&self) -> impl Iterator<Item = (&PanelId, Rect)> {
        self.areas.iter().map(|(panel, area)| (panel, *area))
    }

    pub fn area_of(&self, panel: &PanelId) -> Option<Rect> {
        self.panel_areas()
            .find(|(candidate, _)| *candidate == panel)
            .map(|(_, area)| area)
    }

    pub fn footer(&self) -> Rect {
        self.footer
    }
}

/// Rows and columns left inside a bordered block.
pub(crate) fn inner_size(area: Rect) -> (usize, usize) {
    (
        area.width.saturating_sub(2) as usize,
        area.height.saturating_sub(2) as usize,
    )
}
