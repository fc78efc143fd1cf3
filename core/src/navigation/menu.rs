use crate::navigation::error::NavError;
use crate::navigation::focus::BackOutcome;
use crate::navigation::focus::FocusController;
use crate::navigation::panel::PanelId;
use crate::navigation::panel::PanelSet;
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMove {
    Unchanged,
    Selected(usize),
    /// Moving left past the first option left the menu.
    Exited(BackOutcome),
}

/// Cursor over the sub-menu options of the most recently focused panel that
/// has a menu.
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    options: IndexMap<PanelId, Vec<String>>,
    active: Option<PanelId>,
    index: usize,
}

impl NavigationMenu {
    pub fn new(panels: &PanelSet) -> Self {
        let options = panels
            .iter()
            .filter(|panel| panel.has_menu())
            .map(|panel| (panel.id.clone(), panel.menu.clone()))
            .collect();
        Self {
            options,
            active: None,
            index: 0,
        }
    }

    pub fn active_panel(&self) -> Option<&PanelId> {
        self.active.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn options(&self) -> &[String] {
        self.active
            .as_ref()
            .and_then(|panel| self.options.get(panel))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.options().get(self.index).map(String::as_str)
    }

    /// Makes `panel` the menu's active panel if it has options. Switching to
    /// a different panel resets the cursor; returns true when that happened.
    pub fn follow(&mut self, panel: &PanelId) -> bool {
        if !self.options.contains_key(panel) || self.active.as_ref() == Some(panel) {
            return false;
        }
        debug!(panel = %panel, "navigation menu follows panel");
        self.active = Some(panel.clone());
        self.index = 0;
        true
    }

    pub fn move_right(&mut self) -> MenuMove {
        if self.index + 1 >= self.options().len() {
            return MenuMove::Unchanged;
        }
        self.index += 1;
        debug!(index = self.index, "navigation menu right");
        MenuMove::Selected(self.index)
    }

    pub fn move_left(&mut self, focus: &mut FocusController) -> Result<MenuMove, NavError> {
        if self.index == 0 {
            return focus.back().map(MenuMove::Exited);
        }
        self.index -= 1;
        debug!(index = self.index, "navigation menu left");
        Ok(MenuMove::Selected(self.index))
    }
}
